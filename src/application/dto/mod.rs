mod page_reference_dto;
mod toast_dto;

pub use page_reference_dto::{PageReference, PageState};
pub use toast_dto::{Toast, ToastVariant};
