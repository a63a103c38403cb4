//! Section markers shared by the prompt template and the response parser.
//!
//! The generation service is told to emit these exact tokens, and the parser
//! splits on them. Both sides must read from here.

/// Introduces the headline section.
pub const TITLE_MARKER: &str = "제목:";

/// Introduces the article body section.
pub const BODY_MARKER: &str = "본문:";

/// Introduces the polished interview section.
pub const INTERVIEW_MARKER: &str = "인터뷰:";
