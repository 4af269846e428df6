//! Filter, result list and map panels.
//!
//! All three draw from the same [`ViewModel`]; none of them holds state.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::map;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    SELECTED_MARKER,
};
use crate::ui::view::{Facet, ViewModel};

/// Rows of the result list inside the panel border.
pub fn list_viewport(panel: Rect) -> Rect {
    Rect {
        x: panel.x.saturating_add(1),
        y: panel.y.saturating_add(1),
        width: panel.width.saturating_sub(2),
        height: panel.height.saturating_sub(2),
    }
}

/// First list row shown so that `cursor` stays on screen.
pub fn list_offset(cursor: usize, rows: usize) -> usize {
    cursor.saturating_sub(rows.saturating_sub(1))
}

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

pub fn render_results(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &ViewModel<'_>,
    cursor: usize,
    loading: bool,
    focused: bool,
) {
    let title = match view.total {
        Some(total) if view.visible.len() != total => {
            format!(" Results {} of {} ", view.visible.len(), total)
        }
        Some(total) => format!(" Results ({}) ", total),
        None => " Results ".to_string(),
    };
    let viewport = list_viewport(area);
    let rows = viewport.height as usize;
    let offset = list_offset(cursor, rows);

    let lines: Vec<Line> = if view.visible.is_empty() {
        let message = if loading {
            "Searching..."
        } else if view.total.is_some() {
            "No results match the filters."
        } else {
            "Type a query and press Enter."
        };
        vec![Line::from(Span::styled(message, Style::default().fg(MUTED_TEXT)))]
    } else {
        view.visible
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .map(|(index, item)| {
                let marker = if view.is_selected(item) { "◉ " } else { "  " };
                let mut line = Line::from(vec![
                    Span::styled(marker, Style::default().fg(SELECTED_MARKER)),
                    Span::styled(
                        item.display_name().to_string(),
                        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", item.kind),
                        Style::default().fg(ACCENT),
                    ),
                    Span::styled(
                        item.operator
                            .as_deref()
                            .map(|op| format!("  {}", op))
                            .unwrap_or_default(),
                        Style::default().fg(MUTED_TEXT),
                    ),
                ]);
                if focused && index == cursor {
                    line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
                }
                line
            })
            .collect()
    };

    let widget = Paragraph::new(lines).block(panel_block(title, focused));
    frame.render_widget(widget, area);
}

fn facet_lines(label: &str, facets: &[Facet<'_>], active: Option<&str>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        label.to_string(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))];
    let all_style = if active.is_none() {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    lines.push(Line::from(Span::styled("  (all)", all_style)));
    for facet in facets {
        let style = if active == Some(facet.value) {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        lines.push(Line::from(Span::styled(
            format!("  {} ({})", facet.value, facet.count),
            style,
        )));
    }
    lines
}

pub fn render_filters(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &ViewModel<'_>,
    radius: u32,
    focused: bool,
) {
    let mut lines = Vec::new();
    lines.extend(facet_lines("Operator [o]", &view.operators, view.filter_operator));
    lines.push(Line::from(""));
    lines.extend(facet_lines("Type [t]", &view.types, view.filter_type));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Search near [r]",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )));
    let near = view
        .selected
        .map(|item| item.display_name().to_string())
        .unwrap_or_else(|| "(select a result)".to_string());
    lines.push(Line::from(Span::styled(
        format!("  {}", near),
        Style::default().fg(MUTED_TEXT),
    )));
    lines.push(Line::from(Span::styled(
        format!("  radius {} [-/+]", radius),
        Style::default().fg(MUTED_TEXT),
    )));
    if let Some(kind) = view.filter_type {
        lines.push(Line::from(Span::styled(
            format!("  type {}", kind),
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let widget = Paragraph::new(lines).block(panel_block(" Filters ".to_string(), focused));
    frame.render_widget(widget, area);
}

pub fn render_map(frame: &mut Frame<'_>, area: Rect, view: &ViewModel<'_>, focused: bool) {
    frame.render_widget(panel_block(" Map ".to_string(), focused), area);

    let canvas = map::canvas(area);
    let status_area = Rect {
        x: canvas.x,
        y: canvas.y + canvas.height,
        width: canvas.width,
        height: 1.min(area.height.saturating_sub(2)),
    };

    let Some(bounds) = view.bounds else {
        let message = Paragraph::new(Span::styled(
            "No area to show yet.",
            Style::default().fg(MUTED_TEXT),
        ));
        frame.render_widget(message, canvas);
        return;
    };

    let buffer = frame.buffer_mut();
    // Selected marker last so it is never hidden by a neighbour.
    let mut markers: Vec<_> = view.visible.iter().collect();
    markers.sort_by_key(|item| view.is_selected(item));
    for item in markers {
        let Some(cell) = map::project(&bounds, canvas, item.lat, item.lon) else {
            continue;
        };
        let (symbol, color) = if view.is_selected(item) {
            ("◉", SELECTED_MARKER)
        } else {
            ("•", ACCENT)
        };
        if let Some(target) = buffer.cell_mut(cell) {
            target.set_symbol(symbol).set_fg(color);
        }
    }

    let status = match view.selected {
        Some(item) => format!(
            "{} @ {:.4}, {:.4}",
            item.display_name(),
            item.lat,
            item.lon
        ),
        None => format!(
            "S {:.2} W {:.2} N {:.2} E {:.2}",
            bounds.south, bounds.west, bounds.north, bounds.east
        ),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(status, Style::default().fg(MUTED_TEXT))),
        status_area,
    );
}
