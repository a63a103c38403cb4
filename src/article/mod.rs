//! Article module for newsdesk
//!
//! Parsing of generated text into articles, plus the layouts they render into.

pub mod image;
pub mod markers;
mod models;
mod parser;
pub mod render;

pub use image::ArticleImage;
pub use models::{ArticleMeta, ArticleRequest, ParsedArticle};
pub use parser::{parse, FormatError};
pub use render::{render, RenderFormat};
