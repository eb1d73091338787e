mod preview_controller;

pub use preview_controller::PreviewController;
