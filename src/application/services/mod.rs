mod metadata_fetcher;
mod modal_host;
mod navigator;
mod notification_sink;

pub use metadata_fetcher::MetadataFetcher;
pub use modal_host::ModalHost;
pub use navigator::Navigator;
pub use notification_sink::NotificationSink;
