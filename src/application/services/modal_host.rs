/// The surface hosting the preview. Dismissal is a one-way signal; whether
/// the host honors it is outside this crate's concern.
pub trait ModalHost: Send + Sync {
    fn close(&self);
}
