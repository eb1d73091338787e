mod download_url;

pub use download_url::{DownloadUrlTemplate, DEFAULT_DOWNLOAD_URL_TEMPLATE};
