//! Submission handling: notes in, parsed article out
//!
//! The newsroom validates a request, sends the prompt to the generation
//! service and parses the reply. It owns the last successful article, which
//! is replaced as a whole on every successful submission and left alone when
//! a submission fails.

use std::sync::Arc;
use thiserror::Error;

use crate::article::{parse, ArticleRequest, FormatError, ParsedArticle};
use crate::llm::{build_article_prompt, LlmProvider};

/// Shown when the event notes are left empty.
pub const MISSING_NOTES_MESSAGE: &str = "기사 메모를 입력해야 AI가 작성할 수 있습니다.";

/// Why a submission did not produce an article
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Input was rejected before any call was made
    #[error("{0}")]
    Validation(String),

    /// The generation service failed
    #[error("AI 기사 생성에 실패했습니다: {0:#}")]
    Service(anyhow::Error),

    /// The service replied without the expected sections
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl SubmitError {
    /// Whether resubmitting the same notes may succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Validation(_))
    }
}

/// Reject requests that cannot be sent for generation.
pub fn validate(request: &ArticleRequest) -> Result<(), SubmitError> {
    if request.has_event_notes() {
        Ok(())
    } else {
        Err(SubmitError::Validation(MISSING_NOTES_MESSAGE.to_string()))
    }
}

/// Build the prompt, call the provider and parse the reply.
///
/// Stateless; used by [`Newsroom::submit`] and by callers that run the
/// generation on a background task.
pub async fn write_article(
    provider: &dyn LlmProvider,
    request: &ArticleRequest,
) -> Result<ParsedArticle, SubmitError> {
    validate(request)?;

    let prompt = build_article_prompt(&request.event_notes, &request.interview_notes);
    tracing::info!(
        provider = %provider.name(),
        prompt_len = prompt.len(),
        "Requesting article draft"
    );

    let raw = provider
        .generate(&prompt)
        .await
        .map_err(SubmitError::Service)?;

    match parse(&raw) {
        Ok(article) => {
            tracing::info!(title = %article.title, "Article draft parsed");
            Ok(article)
        }
        Err(err) => {
            tracing::warn!(response_len = raw.len(), "Generated text is missing section markers");
            tracing::debug!(response = %raw, "Unparseable generation response");
            Err(err.into())
        }
    }
}

/// Top-level submission handler that keeps the last successful article
pub struct Newsroom {
    provider: Arc<dyn LlmProvider>,
    last: Option<Arc<ParsedArticle>>,
}

impl Newsroom {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self {
            provider: Arc::from(provider),
            last: None,
        }
    }

    /// Shared handle to the provider, for running a submission off-thread.
    pub fn provider(&self) -> Arc<dyn LlmProvider> {
        Arc::clone(&self.provider)
    }

    /// Submit notes and, on success, make the new article the last result.
    pub async fn submit(&mut self, request: &ArticleRequest) -> Result<&ParsedArticle, SubmitError> {
        let article = write_article(self.provider.as_ref(), request).await?;
        Ok(self.publish(article))
    }

    /// Record the outcome of a submission that ran elsewhere.
    pub fn accept(
        &mut self,
        outcome: Result<ParsedArticle, SubmitError>,
    ) -> Result<&ParsedArticle, SubmitError> {
        outcome.map(|article| self.publish(article))
    }

    fn publish(&mut self, article: ParsedArticle) -> &ParsedArticle {
        &**self.last.insert(Arc::new(article))
    }

    /// The last successfully parsed article, if any.
    pub fn last(&self) -> Option<&ParsedArticle> {
        self.last.as_deref()
    }

    /// Shared handle to the last article, for handing to a renderer.
    pub fn last_shared(&self) -> Option<Arc<ParsedArticle>> {
        self.last.clone()
    }
}
