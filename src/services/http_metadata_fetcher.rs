use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use crate::{
    application::{
        error::{ErrorBody, FetchError},
        services::MetadataFetcher,
    },
    domain::models::FileDetails,
};

/// Default fetcher: posts `{"recordId": ...}` to the configured endpoint and
/// decodes the file details from the JSON response. Non-success responses
/// surface the service's nested error message when it provides one.
pub struct HttpMetadataFetcher {
    client: Client,
    endpoint: String,
}

impl HttpMetadataFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl MetadataFetcher for HttpMetadataFetcher {
    async fn fetch_metadata(&self, record_id: &str) -> Result<FileDetails, FetchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "recordId": record_id }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("Metadata request failed with status: {}", status);
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            return Err(FetchError { body: Some(body) });
        }

        let details = response.json::<FileDetails>().await?;
        Ok(details)
    }
}
