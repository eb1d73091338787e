use serde::Serialize;

/// Transient user-facing alert, distinct from the persistent error shown in
/// the preview surface itself.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ToastVariant {
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "error")]
    Error,
}

impl Toast {
    /// Error toasts always carry the fixed title the host displays.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
            variant: ToastVariant::Error,
        }
    }
}
