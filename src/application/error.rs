use serde::Deserialize;
use thiserror::Error;

/// Guard message shown when a load is attempted with no record id resolved.
pub const MISSING_RECORD_ID_MESSAGE: &str =
    "Record ID is not available. Please make sure the record is selected.";

/// Fallback shown when a fetch failure carries no usable message.
pub const FETCH_FALLBACK_MESSAGE: &str = "Error retrieving file details";

/// Rejection of the metadata fetch. The service reports failures as an
/// optional nested body with an optional message, so both layers may be
/// absent.
#[derive(Debug, Clone, Default, Deserialize, Error, PartialEq, Eq)]
#[error("{}", self.user_message())]
pub struct FetchError {
    pub body: Option<ErrorBody>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: Option<String>,
}

impl FetchError {
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            body: Some(ErrorBody {
                message: Some(message.into()),
            }),
        }
    }

    /// The nested message when present and non-empty, the fixed fallback
    /// otherwise.
    pub fn user_message(&self) -> &str {
        self.body
            .as_ref()
            .and_then(|body| body.message.as_deref())
            .filter(|message| !message.is_empty())
            .unwrap_or(FETCH_FALLBACK_MESSAGE)
    }
}
