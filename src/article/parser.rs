//! Splits generated text into title, body and interview sections

use thiserror::Error;

use crate::article::markers::{BODY_MARKER, INTERVIEW_MARKER, TITLE_MARKER};
use crate::article::ParsedArticle;

/// The generated text did not contain the three section markers in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("AI 응답 형식이 올바르지 않습니다. 다시 시도해 주세요.")]
pub struct FormatError;

/// Parse a raw generation response into an article.
///
/// Looks for the first title marker, then the first body marker after it,
/// then the first interview marker after that. Anything before the title
/// marker is ignored. Each field is trimmed of surrounding whitespace.
pub fn parse(raw: &str) -> Result<ParsedArticle, FormatError> {
    let (_, rest) = raw.split_once(TITLE_MARKER).ok_or(FormatError)?;
    let (title, rest) = rest.split_once(BODY_MARKER).ok_or(FormatError)?;
    let (body, interview) = rest.split_once(INTERVIEW_MARKER).ok_or(FormatError)?;

    // A later marker leaking into an earlier field means the sections were
    // emitted out of order.
    if title.contains(INTERVIEW_MARKER) {
        return Err(FormatError);
    }

    Ok(ParsedArticle {
        title: title.trim().to_string(),
        body: body.trim().to_string(),
        interview: interview.trim().to_string(),
    })
}
