//! Help popup widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::tui::AppScreen;

/// Help popup that shows keyboard shortcuts
pub struct HelpPopup;

impl HelpPopup {
    pub fn draw(frame: &mut Frame, area: Rect, screen: AppScreen) {
        // Centered, 60% width, 70% height
        let popup_width = (area.width as f32 * 0.6) as u16;
        let popup_height = (area.height as f32 * 0.7) as u16;
        let popup_area = Rect {
            x: (area.width - popup_width) / 2,
            y: (area.height - popup_height) / 2,
            width: popup_width,
            height: popup_height,
        };

        frame.render_widget(Clear, popup_area);

        let (heading, shortcuts): (&str, &[(&str, &str)]) = match screen {
            AppScreen::Form => (
                "Form Shortcuts",
                &[
                    ("Tab", "Next field"),
                    ("S-Tab", "Previous field"),
                    ("Enter", "New line in notes / next field"),
                    ("Ctrl-S", "Write article (F5)"),
                    ("Ctrl-P", "Show preview (F2)"),
                    ("F1", "Show this help"),
                    ("Esc", "Quit application"),
                ],
            ),
            AppScreen::Preview => (
                "Preview Shortcuts",
                &[
                    ("↑/k", "Scroll up"),
                    ("↓/j", "Scroll down"),
                    ("PgUp", "Page up"),
                    ("PgDn", "Page down"),
                    ("Home", "Go to top"),
                    ("End", "Go to bottom"),
                    ("Esc", "Back to form"),
                ],
            ),
        };

        let mut help_text = vec![
            Line::from(Span::styled(heading, Style::default().fg(Color::Cyan).bold())),
            Line::from(""),
        ];
        help_text.extend(shortcuts.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:<8}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        }));
        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )));

        let help = Paragraph::new(help_text).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        );

        frame.render_widget(help, popup_area);
    }
}
