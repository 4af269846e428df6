use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::ui::session::MobileTab;

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
const FILTERS_WIDTH: u16 = 30;
/// Header and syntax hint lines around the example rows, borders included.
const DROPDOWN_CHROME: u16 = 5;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    /// Single line inside the header where the query is typed.
    pub search_input: Rect,
    /// Example dropdown, overlaid below the header while visible.
    pub dropdown: Option<Rect>,
    pub banner: Option<Rect>,
    pub filters: Option<Rect>,
    pub results: Option<Rect>,
    pub map: Option<Rect>,
    pub footer: Rect,
}

impl AppLayout {
    /// Everything that counts as "inside the search box" for click-outside
    /// dismissal: the input line and the dropdown.
    pub fn search_container(&self) -> Rect {
        match self.dropdown {
            Some(dropdown) => self.header.union(dropdown),
            None => self.header,
        }
    }

    pub fn panel(&self, panel: MobileTab) -> Option<Rect> {
        match panel {
            MobileTab::Map => self.map,
            MobileTab::Results => self.results,
            MobileTab::Filters => self.filters,
        }
    }

    /// Panel under a screen position, if any.
    pub fn panel_at(&self, position: Position) -> Option<MobileTab> {
        MobileTab::ALL
            .into_iter()
            .find(|panel| self.panel(*panel).is_some_and(|rect| rect.contains(position)))
    }
}

/// Compute the frame layout.
///
/// `narrow` switches to one panel at a time (`active`). `dropdown_rows` is
/// the number of example rows when the dropdown is visible.
pub fn app_layout(
    area: Rect,
    narrow: bool,
    active: MobileTab,
    dropdown_rows: Option<u16>,
    has_banner: bool,
) -> AppLayout {
    let header_height = HEADER_HEIGHT.min(area.height);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let search_input = Rect {
        x: header.x.saturating_add(1),
        y: header.y.saturating_add(1),
        width: header.width.saturating_sub(2),
        height: header.height.saturating_sub(2).min(1),
    };

    let mut body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };

    let banner = if has_banner && body.height > 0 {
        let banner = Rect { height: 1, ..body };
        body.y += 1;
        body.height -= 1;
        Some(banner)
    } else {
        None
    };

    let dropdown = dropdown_rows.map(|rows| Rect {
        x: search_input.x,
        y: header.y + header.height,
        width: search_input.width.min(60),
        height: rows
            .saturating_add(DROPDOWN_CHROME)
            .min(area.height.saturating_sub(header.height)),
    });

    let (filters, results, map) = if narrow {
        match active {
            MobileTab::Filters => (Some(body), None, None),
            MobileTab::Results => (None, Some(body), None),
            MobileTab::Map => (None, None, Some(body)),
        }
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(FILTERS_WIDTH.min(body.width)),
                Constraint::Percentage(45),
                Constraint::Min(0),
            ])
            .split(body);
        (Some(columns[0]), Some(columns[1]), Some(columns[2]))
    };

    AppLayout {
        header,
        search_input,
        dropdown,
        banner,
        filters,
        results,
        map,
        footer,
    }
}
