//! Main TUI application state and logic

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use std::time::Instant;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::article::{ArticleImage, ArticleMeta, ParsedArticle};
use crate::config::Settings;
use crate::llm::{build_provider, LlmProvider};
use crate::newsroom::{self, Newsroom, SubmitError};
use crate::tui::screens::{FormScreen, PreviewScreen};
use crate::tui::widgets::HelpPopup;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Form,
    Preview,
}

/// What the status line under the form shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Busy { since: Instant },
    Done(String),
    Failed(String),
}

/// A generation running on a background task
struct PendingSubmission {
    meta: ArticleMeta,
    outcome: oneshot::Receiver<Result<ParsedArticle, SubmitError>>,
}

/// Main application state
pub struct App {
    settings: Settings,
    current_screen: AppScreen,
    show_help: bool,

    // Screen states
    form: FormScreen,
    preview: PreviewScreen,

    // Submission state
    newsroom: std::result::Result<Newsroom, String>,
    pending: Option<PendingSubmission>,
    status: Status,
}

impl App {
    /// Create a new app instance
    ///
    /// A provider that cannot be built (for example, no API key) is reported
    /// on submit rather than preventing the form from opening.
    pub fn new(settings: Settings) -> Self {
        let newsroom = build_provider(&settings)
            .map(Newsroom::new)
            .map_err(|e| format!("{:#}", e));
        Self::with_newsroom(settings, newsroom)
    }

    /// Create an app around an already-built provider.
    pub fn with_provider(settings: Settings, provider: Box<dyn LlmProvider>) -> Self {
        Self::with_newsroom(settings, Ok(Newsroom::new(provider)))
    }

    fn with_newsroom(settings: Settings, newsroom: std::result::Result<Newsroom, String>) -> Self {
        Self {
            form: FormScreen::new(settings.newspaper.default_author.clone()),
            settings,
            current_screen: AppScreen::Form,
            show_help: false,
            preview: PreviewScreen::new(),
            newsroom,
            pending: None,
            status: Status::Idle,
        }
    }

    /// Draw the current screen
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();

        match self.current_screen {
            AppScreen::Form => {
                let status = self.status_line();
                self.form.draw(frame, area, status);
            }
            AppScreen::Preview => {
                self.preview
                    .draw(frame, area, &self.settings.newspaper.masthead);
            }
        }

        if self.show_help {
            HelpPopup::draw(frame, area, self.current_screen);
        }
    }

    fn status_line(&self) -> Line<'static> {
        match &self.status {
            Status::Idle => Line::from(Span::styled(
                " 사건 메모를 입력하고 Ctrl-S를 눌러 AI 기사를 완성하세요.",
                Style::default().fg(Color::DarkGray),
            )),
            Status::Busy { since } => {
                let frame = (since.elapsed().as_millis() / 150) as usize % SPINNER.len();
                Line::from(Span::styled(
                    format!(
                        " {} AI가 실제 기사 양식으로 문장을 다듬고 있습니다...",
                        SPINNER[frame]
                    ),
                    Style::default().fg(Color::Yellow),
                ))
            }
            Status::Done(message) => Line::from(Span::styled(
                format!(" ✔ {}", message),
                Style::default().fg(Color::Green),
            )),
            Status::Failed(message) => Line::from(Span::styled(
                format!(" ✖ {}", message),
                Style::default().fg(Color::Red),
            )),
        }
    }

    /// Handle key input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::F(5) => self.submit(),
            KeyCode::Char('p') if ctrl => self.switch_screen(AppScreen::Preview),
            KeyCode::F(2) => self.switch_screen(AppScreen::Preview),
            _ => match self.current_screen {
                AppScreen::Form => self.form.handle_key(key),
                AppScreen::Preview => self.handle_preview_key(key.code),
            },
        }
    }

    /// Handle preview key input
    fn handle_preview_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.preview.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.preview.scroll_down(),
            KeyCode::PageUp => self.preview.page_up(),
            KeyCode::PageDown => self.preview.page_down(),
            KeyCode::Home | KeyCode::Char('g') => self.preview.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.preview.scroll_to_bottom(),
            _ => {}
        }
    }

    /// Start a submission from the form, unless one is already running
    fn submit(&mut self) {
        if self.pending.is_some() {
            tracing::debug!("Ignoring submit while a draft is being written");
            return;
        }

        let request = self.form.request();
        if let Err(err) = newsroom::validate(&request) {
            self.status = Status::Failed(err.to_string());
            return;
        }

        let date = match self.form.date() {
            Ok(date) => date,
            Err(text) => {
                self.status = Status::Failed(format!("날짜 형식이 올바르지 않습니다: {}", text));
                return;
            }
        };

        let image = match self.form.image_path().map(ArticleImage::load).transpose() {
            Ok(image) => image,
            Err(err) => {
                self.status = Status::Failed(err.to_string());
                return;
            }
        };

        let provider = match &self.newsroom {
            Ok(newsroom) => newsroom.provider(),
            Err(message) => {
                self.status = Status::Failed(message.clone());
                return;
            }
        };

        let meta = ArticleMeta::new(self.form.author())
            .with_date(date)
            .with_image(image);

        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let outcome = newsroom::write_article(provider.as_ref(), &request).await;
            let _ = tx.send(outcome);
        });

        self.pending = Some(PendingSubmission { meta, outcome: rx });
        self.status = Status::Busy {
            since: Instant::now(),
        };
    }

    /// Pick up the result of a finished background submission
    pub fn update(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };

        let outcome = match pending.outcome.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(SubmitError::Service(anyhow::anyhow!(
                "generation task stopped before replying"
            ))),
        };

        if let Some(pending) = self.pending.take() {
            self.finish(pending.meta, outcome);
        }
    }

    fn finish(&mut self, meta: ArticleMeta, outcome: Result<ParsedArticle, SubmitError>) {
        let Ok(newsroom) = self.newsroom.as_mut() else {
            return;
        };

        match newsroom.accept(outcome).map(|article| article.title.clone()) {
            Ok(title) => {
                if let Some(article) = newsroom.last_shared() {
                    self.preview.set_article(article, meta);
                }
                self.status = Status::Done(format!("기사 완성: {}", title));
                self.switch_screen(AppScreen::Preview);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Article submission failed");
                let message = if err.is_retryable() {
                    format!("{} [Ctrl-S 재시도]", err)
                } else {
                    err.to_string()
                };
                self.status = Status::Failed(message);
            }
        }
    }

    /// Switch to a different screen
    fn switch_screen(&mut self, screen: AppScreen) {
        self.current_screen = screen;
    }

    /// Handle back navigation
    pub fn handle_back(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else if self.current_screen != AppScreen::Form {
            self.current_screen = AppScreen::Form;
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.current_screen == AppScreen::Form && !self.show_help
    }

    /// Toggle help popup
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn current_screen(&self) -> AppScreen {
        self.current_screen
    }

    /// The article the preview is showing, if any.
    pub fn last_article(&self) -> Option<&ParsedArticle> {
        self.newsroom.as_ref().ok().and_then(Newsroom::last)
    }
}
