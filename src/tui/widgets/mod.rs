//! TUI widgets

mod help;

pub use help::HelpPopup;
