/// Opens a URL in a new browsing context. Fire-and-forget; no completion
/// signal comes back.
pub trait Navigator: Send + Sync {
    fn open_url(&self, url: &str);
}
