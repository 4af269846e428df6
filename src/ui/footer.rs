use crate::ui::session::MobileTab;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use crate::ui::view::tab_label;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    /// Tab switcher state; `None` in the wide layout.
    pub tabs: Option<(MobileTab, Option<usize>)>,
    pub status: Option<&'a str>,
}

impl Footer<'_> {
    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let mut spans = Vec::new();

        if let Some((active, total)) = self.tabs {
            for (index, tab) in MobileTab::ALL.into_iter().enumerate() {
                let style = if tab == active {
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    text_style
                };
                spans.push(Span::styled(
                    format!(" {}:{} ", index + 1, tab_label(tab, total)),
                    style,
                ));
            }
            spans.push(Span::styled("│", Style::default().fg(HEADER_SEPARATOR)));
        }

        let hints = match self.status {
            Some(status) => format!(" {}", status),
            None => " /: Search │ Tab: Panel │ o/t: Filter │ r: Near │ Ctrl+R: Reload │ Ctrl+Q: Quit"
                .to_string(),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum::<usize>()
            + hints.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());

        spans.push(Span::styled(hints, text_style));
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
