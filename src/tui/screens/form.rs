//! Form screen - collect byline, photo and notes for a new article

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::article::ArticleRequest;

/// Fields on the form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Author,
    Date,
    Image,
    EventNotes,
    InterviewNotes,
}

impl FormField {
    const ALL: [FormField; 5] = [
        FormField::Author,
        FormField::Date,
        FormField::Image,
        FormField::EventNotes,
        FormField::InterviewNotes,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Author => " 작성 기자 ",
            Self::Date => " 발행 날짜 (YYYY-MM-DD) ",
            Self::Image => " 이미지 경로 (jpg, jpeg, png) ",
            Self::EventNotes => " 사건 메모 (AI가 다듬어줍니다) ",
            Self::InterviewNotes => " 인터뷰 메모 ",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::Author => "이름을 입력하세요",
            Self::Date => "",
            Self::Image => "선택 사항",
            Self::EventNotes => "누가, 언제, 어디서 무엇을 했는지 핵심만 적어주세요.",
            Self::InterviewNotes => "인터뷰 대상과 내용을 입력하세요.",
        }
    }

    fn multiline(self) -> bool {
        matches!(self, Self::EventNotes | Self::InterviewNotes)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Form screen state
pub struct FormScreen {
    author: String,
    date: String,
    image: String,
    event_notes: String,
    interview_notes: String,
    focus: FormField,
}

impl Default for FormScreen {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl FormScreen {
    pub fn new(default_author: String) -> Self {
        Self {
            author: default_author,
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            image: String::new(),
            event_notes: String::new(),
            interview_notes: String::new(),
            focus: FormField::EventNotes,
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % FormField::ALL.len();
        self.focus = FormField::ALL[next];
    }

    pub fn focus_previous(&mut self) {
        let len = FormField::ALL.len();
        let prev = (self.focus.index() + len - 1) % len;
        self.focus = FormField::ALL[prev];
    }

    /// Edit the focused field.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            KeyCode::Enter if self.focus.multiline() => self.value_mut().push('\n'),
            KeyCode::Enter => self.focus_next(),
            KeyCode::Backspace => {
                self.value_mut().pop();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.value_mut().push(c);
            }
            _ => {}
        }
    }

    fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Author => &self.author,
            FormField::Date => &self.date,
            FormField::Image => &self.image,
            FormField::EventNotes => &self.event_notes,
            FormField::InterviewNotes => &self.interview_notes,
        }
    }

    fn value_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Author => &mut self.author,
            FormField::Date => &mut self.date,
            FormField::Image => &mut self.image,
            FormField::EventNotes => &mut self.event_notes,
            FormField::InterviewNotes => &mut self.interview_notes,
        }
    }

    /// Notes as a generation request.
    pub fn request(&self) -> ArticleRequest {
        ArticleRequest::new(self.event_notes.clone(), self.interview_notes.clone())
    }

    pub fn author(&self) -> &str {
        self.author.trim()
    }

    /// Publication date, or the raw text when it does not parse.
    pub fn date(&self) -> Result<NaiveDate, String> {
        let text = self.date.trim();
        if text.is_empty() {
            return Ok(Local::now().date_naive());
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| text.to_string())
    }

    /// Image path, if one was entered.
    pub fn image_path(&self) -> Option<&str> {
        let path = self.image.trim();
        (!path.is_empty()).then_some(path)
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, status: Line<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // Title
                Constraint::Length(3),      // Author / date
                Constraint::Length(3),      // Image
                Constraint::Percentage(55), // Event notes
                Constraint::Min(4),         // Interview notes
                Constraint::Length(1),      // Status
                Constraint::Length(1),      // Help
            ])
            .split(area);

        let title = Paragraph::new("AI 학교 신문 기사 제작소")
            .style(Style::default().fg(Color::Cyan).bold())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        let byline = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        self.draw_field(frame, byline[0], FormField::Author);
        self.draw_field(frame, byline[1], FormField::Date);
        self.draw_field(frame, chunks[2], FormField::Image);
        self.draw_field(frame, chunks[3], FormField::EventNotes);
        self.draw_field(frame, chunks[4], FormField::InterviewNotes);

        frame.render_widget(Paragraph::new(status), chunks[5]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Tab ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Next field  "),
            Span::styled(" Ctrl-S ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Write article  "),
            Span::styled(" Ctrl-P ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Preview  "),
            Span::styled(" F1 ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Help  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[6]);
    }

    fn draw_field(&self, frame: &mut Frame, area: Rect, field: FormField) {
        let focused = self.focus == field;
        let value = self.value(field);

        let text = if focused {
            Text::from(format!("{}█", value))
        } else if value.is_empty() {
            Text::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
        } else {
            Text::from(value)
        };

        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Blue)
        };

        let mut paragraph = Paragraph::new(text).block(
            Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(border),
        );

        if field.multiline() {
            // Keep the end of long notes in view while typing.
            let inner_height = area.height.saturating_sub(2) as usize;
            let lines = value.lines().count() + usize::from(value.ends_with('\n'));
            let scroll = lines.saturating_sub(inner_height.max(1)) as u16;
            paragraph = paragraph.wrap(Wrap { trim: false }).scroll((scroll, 0));
        }

        frame.render_widget(paragraph, area);
    }
}
