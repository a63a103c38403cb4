//! TUI screens

mod form;
mod preview;

pub use form::{FormField, FormScreen};
pub use preview::PreviewScreen;
