//! Preview screen - the last article in newspaper layout

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};
use std::sync::Arc;

use crate::article::render::byline;
use crate::article::{ArticleMeta, ParsedArticle};

/// Preview screen state
pub struct PreviewScreen {
    article: Option<Arc<ParsedArticle>>,
    meta: Option<ArticleMeta>,
    scroll_offset: usize,
    content_height: usize,
}

impl Default for PreviewScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewScreen {
    pub fn new() -> Self {
        Self {
            article: None,
            meta: None,
            scroll_offset: 0,
            content_height: 0,
        }
    }

    /// Show a newly published article. The previous one is dropped whole.
    pub fn set_article(&mut self, article: Arc<ParsedArticle>, meta: ArticleMeta) {
        self.article = Some(article);
        self.meta = Some(meta);
        self.scroll_offset = 0;
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, masthead: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Header
                Constraint::Min(5),    // Body
                Constraint::Length(3), // Help
            ])
            .split(area);

        let (article, meta) = match (&self.article, &self.meta) {
            (Some(article), Some(meta)) => (article, meta),
            _ => {
                let info = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "폼에서 정보를 입력하고 Ctrl-S를 눌러 기사를 완성하세요.",
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .title(format!(" {} ", masthead))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Blue)),
                );
                frame.render_widget(info, area);
                return;
            }
        };

        // Header
        let mut meta_spans = vec![Span::styled(
            meta.date_label(),
            Style::default().fg(Color::DarkGray),
        )];
        let byline = byline(&meta.author);
        if !byline.is_empty() {
            meta_spans.push(Span::raw(" • "));
            meta_spans.push(Span::styled(byline, Style::default().fg(Color::White).bold()));
        }
        if let Some(image) = &meta.image {
            meta_spans.push(Span::raw(" • "));
            meta_spans.push(Span::styled(
                format!("사진: {}", image.file_name()),
                Style::default().fg(Color::Cyan),
            ));
        }

        let header = Paragraph::new(vec![
            Line::from(Span::styled(masthead, Style::default().bold()))
                .alignment(Alignment::Center),
            Line::from(""),
            Line::from(Span::styled(
                article.title.as_str(),
                Style::default().fg(Color::White).bold(),
            )),
            Line::from(meta_spans),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(header, chunks[0]);

        // Body and interview
        let mut lines: Vec<Line> = article.body.lines().map(Line::from).collect();
        lines.push(Line::from(""));
        for (i, quote) in article.interview.lines().enumerate() {
            let text = if i == 0 {
                format!("│ \"{}", quote)
            } else {
                format!("│ {}", quote)
            };
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(Color::Gray).italic(),
            )));
        }
        if let Some(last) = lines.last_mut() {
            if !article.interview.is_empty() {
                last.spans.push(Span::styled(
                    "\"",
                    Style::default().fg(Color::Gray).italic(),
                ));
            }
        }

        let body_area = chunks[1];
        let visible_height = body_area.height.saturating_sub(2) as usize;

        // Scroll limits count wrapped rows, not source lines.
        let body = Paragraph::new(lines).wrap(Wrap { trim: false });
        self.content_height = body.line_count(body_area.width.saturating_sub(2));

        let body = body
            .scroll((self.scroll_offset as u16, 0))
            .block(
                Block::default()
                    .title(" 본문 ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
        frame.render_widget(body, body_area);

        if self.content_height > visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));

            let mut scrollbar_state = ScrollbarState::new(self.content_height)
                .position(self.scroll_offset)
                .viewport_content_length(visible_height);

            frame.render_stateful_widget(
                scrollbar,
                body_area.inner(Margin {
                    horizontal: 0,
                    vertical: 1,
                }),
                &mut scrollbar_state,
            );
        }

        // Help bar
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" ↑/↓ ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Scroll  "),
            Span::styled(
                " PgUp/PgDn ",
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw(" Page  "),
            Span::styled(" Home/End ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Top/Bottom  "),
            Span::styled(" Esc ", Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(" Back to form"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, chunks[2]);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.content_height.saturating_sub(1) {
            self.scroll_offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    pub fn page_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 10).min(self.content_height.saturating_sub(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.content_height.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn long_article() -> Arc<ParsedArticle> {
        Arc::new(ParsedArticle {
            title: "체육대회 성황".to_string(),
            body: "Students ran relay races on the field all afternoon. ".repeat(20),
            interview: "It was fun.".to_string(),
        })
    }

    fn draw(preview: &mut PreviewScreen) {
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        terminal
            .draw(|frame| preview.draw(frame, frame.size(), "THE SCHOOL TIMES"))
            .unwrap();
    }

    #[test]
    fn long_body_line_scrolls_by_wrapped_rows() {
        let mut preview = PreviewScreen::new();
        preview.set_article(long_article(), ArticleMeta::new("김민수"));
        draw(&mut preview);

        assert!(preview.content_height > 20);

        preview.scroll_to_bottom();
        assert!(preview.scroll_offset > 2);

        let bottom = preview.scroll_offset;
        preview.scroll_down();
        assert_eq!(preview.scroll_offset, bottom);

        preview.scroll_to_top();
        preview.page_down();
        assert_eq!(preview.scroll_offset, 10);
    }

    #[test]
    fn new_article_resets_scroll() {
        let mut preview = PreviewScreen::new();
        preview.set_article(long_article(), ArticleMeta::new(""));
        draw(&mut preview);
        preview.page_down();

        preview.set_article(long_article(), ArticleMeta::new(""));
        assert_eq!(preview.scroll_offset, 0);
    }
}
