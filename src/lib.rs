//! newsdesk - Turn event and interview notes into school newspaper articles
//!
//! Notes go out to a generation service with a fixed template, and the reply
//! is split into headline, body and interview for the newspaper layout.

pub mod article;
pub mod cli;
pub mod config;
pub mod llm;
pub mod logging;
pub mod newsroom;
pub mod tui;

use thiserror::Error;

/// Main error type for newsdesk
#[derive(Error, Debug)]
pub enum NewsdeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported image type: {0}")]
    UnsupportedImage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NewsdeskError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "newsdesk";
