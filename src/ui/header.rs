//! Search bar and example dropdown.

use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    MUTED_TEXT, POPUP_BORDER, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const PLACEHOLDER: &str = "Search infrastructure...";

pub struct Header<'a> {
    pub query_text: &'a str,
    pub focused: bool,
    pub loading: bool,
    pub structured: bool,
    pub animation_tick: u8,
}

impl<'a> Header<'a> {
    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled(" Sightline", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
        ];

        if self.query_text.is_empty() && !self.focused {
            spans.push(Span::styled(PLACEHOLDER, Style::default().fg(MUTED_TEXT)));
        } else {
            spans.push(Span::styled(self.query_text, text_style));
        }

        if self.loading {
            let spinner = SPINNER_FRAMES[(self.animation_tick as usize) % SPINNER_FRAMES.len()];
            spans.push(Span::styled(format!("  {}", spinner), Style::default().fg(STATUS_OK)));
        } else if self.structured {
            spans.push(Span::styled("  structured", Style::default().fg(MUTED_TEXT)));
        }

        let border = if self.focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }

    /// Column of the text cursor relative to the input line.
    pub fn cursor_offset(&self) -> u16 {
        let prefix = " Sightline  │  ".chars().count();
        (prefix + self.query_text.chars().count()).min(u16::MAX as usize) as u16
    }
}

/// Example dropdown with the two syntax hints at the bottom.
pub fn examples_widget(examples: &[String], highlighted: Option<usize>) -> Paragraph<'_> {
    let mut lines = vec![Line::from(Span::styled(
        "Examples",
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
    ))];

    for (index, example) in examples.iter().enumerate() {
        let mut line = Line::from(Span::styled(
            format!("  {}", example),
            Style::default().fg(HEADER_TEXT),
        ));
        if highlighted == Some(index) {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    lines.push(Line::from(vec![
        Span::styled("Structured: ", Style::default().fg(MUTED_TEXT)),
        Span::styled("type:airport region:bavaria", Style::default().fg(ACCENT)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Natural: ", Style::default().fg(MUTED_TEXT)),
        Span::styled("wind farms near copenhagen", Style::default().fg(ACCENT)),
    ]));

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    )
}
