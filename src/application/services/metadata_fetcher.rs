use async_trait::async_trait;

use crate::{application::error::FetchError, domain::models::FileDetails};

/// Remote lookup of the file attached to a record. The controller's only
/// suspension point; everything else it touches is fire-and-forget.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch_metadata(&self, record_id: &str) -> Result<FileDetails, FetchError>;
}
