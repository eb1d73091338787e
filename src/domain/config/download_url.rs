/// Path template the Salesforce content delivery servlet expects. Hosts with
/// a different download convention can supply their own template; this
/// literal is the documented default.
pub const DEFAULT_DOWNLOAD_URL_TEMPLATE: &str =
    "/sfc/servlet.shepherd/version/download/{versionIdentifier}";

const VERSION_PLACEHOLDER: &str = "{versionIdentifier}";

/// Fixed-path template for the downloadable URL, parameterized only by the
/// content version identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadUrlTemplate(String);

impl Default for DownloadUrlTemplate {
    fn default() -> Self {
        Self(DEFAULT_DOWNLOAD_URL_TEMPLATE.to_string())
    }
}

impl DownloadUrlTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn render(&self, content_version_id: &str) -> String {
        self.0.replace(VERSION_PLACEHOLDER, content_version_id)
    }
}
