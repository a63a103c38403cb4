//! Data models for articles

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::article::ArticleImage;

/// Notes collected for a single submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleRequest {
    /// Who/what/when/where notes about the event (required)
    pub event_notes: String,

    /// Interview subject and remarks (may be empty)
    pub interview_notes: String,
}

impl ArticleRequest {
    pub fn new(event_notes: impl Into<String>, interview_notes: impl Into<String>) -> Self {
        Self {
            event_notes: event_notes.into(),
            interview_notes: interview_notes.into(),
        }
    }

    /// Whether the request carries enough input to be sent for generation.
    pub fn has_event_notes(&self) -> bool {
        !self.event_notes.trim().is_empty()
    }
}

/// Article fields extracted from a generation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedArticle {
    /// Headline
    pub title: String,

    /// Article body in reporting register
    pub body: String,

    /// Polished interview quote
    pub interview: String,
}

/// Byline metadata shown next to an article
#[derive(Debug, Clone)]
pub struct ArticleMeta {
    /// Reporter name (may be empty)
    pub author: String,

    /// Publication date
    pub date: NaiveDate,

    /// Optional photo placed between the header and the body
    pub image: Option<ArticleImage>,
}

impl ArticleMeta {
    /// Metadata dated today with no image.
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            date: Local::now().date_naive(),
            image: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_image(mut self, image: Option<ArticleImage>) -> Self {
        self.image = image;
        self
    }

    /// Date formatted the way it appears in the byline.
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_event_notes_are_not_enough() {
        assert!(!ArticleRequest::new("  \n\t", "인터뷰").has_event_notes());
        assert!(ArticleRequest::new("체육대회", "").has_event_notes());
    }

    #[test]
    fn date_label_uses_iso_format() {
        let meta = ArticleMeta::new("김기자")
            .with_date(NaiveDate::from_ymd_opt(2024, 5, 3).expect("valid date"));
        assert_eq!(meta.date_label(), "2024-05-03");
    }
}
