use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::{
    application::{
        dto::{PageReference, Toast},
        error::MISSING_RECORD_ID_MESSAGE,
        services::{MetadataFetcher, ModalHost, Navigator, NotificationSink},
    },
    domain::{
        config::DownloadUrlTemplate,
        models::{PreviewMode, PreviewState},
    },
};

/// Orchestrates the preview surface for the file attached to one record:
/// resolves the record id, runs the metadata fetch, classifies the result
/// and routes failures to the notification sink.
///
/// Methods take `&self` so `close`/`download` stay available while a fetch
/// is outstanding. Overlapping loads are not cancelled; whichever fetch
/// settles last determines the final state.
pub struct PreviewController {
    record_id: Mutex<Option<String>>,
    state: Mutex<PreviewState>,
    download_url: DownloadUrlTemplate,
    fetcher: Arc<dyn MetadataFetcher>,
    notifications: Arc<dyn NotificationSink>,
    modal_host: Arc<dyn ModalHost>,
    navigator: Arc<dyn Navigator>,
}

impl PreviewController {
    pub fn new(
        record_id: Option<String>,
        fetcher: Arc<dyn MetadataFetcher>,
        notifications: Arc<dyn NotificationSink>,
        modal_host: Arc<dyn ModalHost>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            record_id: Mutex::new(record_id.filter(|id| !id.is_empty())),
            state: Mutex::new(PreviewState::Idle),
            download_url: DownloadUrlTemplate::default(),
            fetcher,
            notifications,
            modal_host,
            navigator,
        }
    }

    pub fn with_download_url_template(mut self, template: DownloadUrlTemplate) -> Self {
        self.download_url = template;
        self
    }

    /// Entry point for the hosting surface. Loads immediately when a record
    /// id was supplied directly; otherwise stays idle until page state
    /// delivers one.
    pub async fn connect(&self) {
        let record_id = self.record_id();
        info!("Preview controller initialized with record id: {:?}", record_id);
        if record_id.is_some() {
            self.load().await;
        }
    }

    /// Handles one page-state snapshot. A non-empty record id under either
    /// recognized key becomes the effective id (last write wins) and
    /// re-triggers the load sequence; snapshots without one are ignored.
    pub async fn on_page_reference(&self, page_ref: &PageReference) {
        if let Some(id) = page_ref.effective_record_id() {
            info!("Record ID from page state: {}", id);
            *self.record_id.lock().unwrap() = Some(id.to_string());
            self.load().await;
        }
    }

    /// Consumes page-state snapshots until the sender side is dropped, then
    /// returns, releasing the subscription.
    pub async fn watch_page_state(&self, mut page_refs: watch::Receiver<Option<PageReference>>) {
        while page_refs.changed().await.is_ok() {
            let snapshot = page_refs.borrow_and_update().clone();
            if let Some(page_ref) = snapshot {
                self.on_page_reference(&page_ref).await;
            }
        }
    }

    /// Runs the fetch sequence. Without a record id this fails loudly into
    /// the error state; the fetcher is never called.
    pub async fn load(&self) {
        let record_id = self.record_id();
        let Some(record_id) = record_id else {
            error!("Record ID is not available");
            self.handle_error(MISSING_RECORD_ID_MESSAGE.to_string());
            return;
        };

        info!("Fetching file details for record id: {}", record_id);
        *self.state.lock().unwrap() = PreviewState::Loading;

        match self.fetcher.fetch_metadata(&record_id).await {
            Ok(details) => {
                info!("File details retrieved: {:?}", details);
                let file_url = self.download_url.render(&details.content_version_id);
                *self.state.lock().unwrap() = PreviewState::Loaded { details, file_url };
            }
            Err(err) => {
                error!("Error retrieving file details: {}", err);
                self.handle_error(err.user_message().to_string());
            }
        }
    }

    /// Opens the derived URL in a new browsing context. Without a loaded URL
    /// this is a silent no-op, visible only in the log; the original
    /// component behaves the same way and callers rely on that.
    pub fn download(&self) {
        let url = self.state.lock().unwrap().file_url().map(str::to_string);
        match url {
            Some(url) => {
                info!("Opening file URL: {}", url);
                self.navigator.open_url(&url);
            }
            None => warn!("No file URL available for download"),
        }
    }

    /// Asks the host to dismiss the preview surface. Unconditional; valid in
    /// every state.
    pub fn close(&self) {
        info!("Closing preview modal");
        self.modal_host.close();
    }

    fn handle_error(&self, message: String) {
        error!("Handling error: {}", message);
        *self.state.lock().unwrap() = PreviewState::Error {
            message: message.clone(),
        };
        self.notifications.notify(Toast::error(message));
    }

    pub fn record_id(&self) -> Option<String> {
        self.record_id.lock().unwrap().clone()
    }

    pub fn state(&self) -> PreviewState {
        self.state.lock().unwrap().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().is_loading()
    }

    pub fn file_url(&self) -> Option<String> {
        self.state.lock().unwrap().file_url().map(str::to_string)
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.lock().unwrap().error_message().map(str::to_string)
    }

    pub fn preview_mode(&self) -> Option<PreviewMode> {
        self.state.lock().unwrap().preview_mode()
    }
}
