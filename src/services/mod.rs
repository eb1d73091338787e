mod error;
mod http_metadata_fetcher;

pub use http_metadata_fetcher::HttpMetadataFetcher;
