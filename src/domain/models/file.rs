use serde::{Deserialize, Serialize};

use crate::domain::models::preview::PreviewMode;

/// Metadata of the file attached to the record under preview, as returned by
/// the metadata service. Replaced wholesale on every successful fetch, never
/// merged field by field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileDetails {
    #[serde(rename = "contentVersionId")]
    pub content_version_id: String,
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
    pub name: Option<String>,
    pub size: Option<u64>,
}

impl FileDetails {
    pub fn preview_mode(&self) -> PreviewMode {
        PreviewMode::classify(self.content_type.as_deref())
    }
}
