use crate::domain::models::file::FileDetails;

/// Three-way classification of a content type, driving which preview widget
/// the host renders. Derived on demand instead of being stored as separate
/// booleans, so the three answers can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    Pdf,
    Image,
    Other,
}

impl PreviewMode {
    /// Total over all inputs: anything that is not exactly `application/pdf`
    /// and not an `image/*` type falls back to [`PreviewMode::Other`],
    /// including a missing or empty content type.
    pub fn classify(content_type: Option<&str>) -> Self {
        match content_type {
            Some("application/pdf") => PreviewMode::Pdf,
            Some(ct) if ct.starts_with("image/") => PreviewMode::Image,
            _ => PreviewMode::Other,
        }
    }
}

/// State of the preview surface. Owned exclusively by the controller and
/// alive only for the lifetime of the surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PreviewState {
    /// No record id known yet; nothing has been requested.
    #[default]
    Idle,
    /// A metadata fetch is outstanding.
    Loading,
    /// Metadata arrived; the download URL is derived from it.
    Loaded {
        details: FileDetails,
        file_url: String,
    },
    /// A user-visible failure message.
    Error { message: String },
}

impl PreviewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PreviewState::Loading)
    }

    pub fn details(&self) -> Option<&FileDetails> {
        match self {
            PreviewState::Loaded { details, .. } => Some(details),
            _ => None,
        }
    }

    pub fn file_url(&self) -> Option<&str> {
        match self {
            PreviewState::Loaded { file_url, .. } => Some(file_url),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            PreviewState::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn preview_mode(&self) -> Option<PreviewMode> {
        self.details().map(FileDetails::preview_mode)
    }
}
