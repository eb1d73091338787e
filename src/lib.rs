//! Controller for previewing the file attached to a campaign record.
//!
//! The host supplies a record id directly or through page-state snapshots;
//! the controller fetches the file's metadata, classifies it into a preview
//! mode and derives the downloadable URL, or reconciles failure into an
//! error state plus a toast. Rendering, the metadata service's internals and
//! the modal chrome stay on the host's side of the collaborator traits.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod services;

pub use adapters::controllers::PreviewController;
pub use application::{
    dto::{PageReference, PageState, Toast, ToastVariant},
    error::{ErrorBody, FetchError, FETCH_FALLBACK_MESSAGE, MISSING_RECORD_ID_MESSAGE},
    services::{MetadataFetcher, ModalHost, Navigator, NotificationSink},
};
pub use domain::{
    config::{DownloadUrlTemplate, DEFAULT_DOWNLOAD_URL_TEMPLATE},
    models::{FileDetails, PreviewMode, PreviewState},
};
pub use services::HttpMetadataFetcher;
