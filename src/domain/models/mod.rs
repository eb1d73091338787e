mod file;
mod preview;

pub use file::FileDetails;
pub use preview::{PreviewMode, PreviewState};
