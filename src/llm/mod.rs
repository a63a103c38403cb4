//! LLM module for newsdesk
//!
//! Prompt construction and the Gemini generation client.

mod client;
mod gemini;
mod prompts;

pub use client::{build_provider, LlmProvider};
pub use gemini::GeminiClient;
pub use prompts::build_article_prompt;
