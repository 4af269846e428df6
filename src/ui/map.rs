//! Coarse marker plot standing in for the map component.
//!
//! The map gets the same view as the other panels: visible results, bounds
//! and selection. Activating a marker selects it by result id.

use ratatui::layout::{Position, Rect};

use crate::search::{Bounds, ResultItem};

/// Plot area of the map panel: inside the border, above the status line.
pub fn canvas(panel: Rect) -> Rect {
    Rect {
        x: panel.x.saturating_add(1),
        y: panel.y.saturating_add(1),
        width: panel.width.saturating_sub(2),
        height: panel.height.saturating_sub(3),
    }
}

/// Screen cell for a coordinate inside `bounds`, drawn in `area`.
///
/// North is up. Returns `None` for points outside the bounds or an empty
/// area.
pub fn project(bounds: &Bounds, area: Rect, lat: f64, lon: f64) -> Option<Position> {
    if area.width == 0 || area.height == 0 || !bounds.contains(lat, lon) {
        return None;
    }
    let lat_span = (bounds.north - bounds.south).max(f64::EPSILON);
    let lon_span = (bounds.east - bounds.west).max(f64::EPSILON);

    let fx = (lon - bounds.west) / lon_span;
    let fy = (bounds.north - lat) / lat_span;

    let x = (fx * (area.width - 1) as f64).round() as u16;
    let y = (fy * (area.height - 1) as f64).round() as u16;
    Some(Position::new(area.x + x, area.y + y))
}

/// Id of the marker at or next to `position`, preferring an exact hit.
pub fn marker_at<'a>(
    bounds: &Bounds,
    area: Rect,
    items: &[&'a ResultItem],
    position: Position,
) -> Option<&'a str> {
    items
        .iter()
        .filter_map(|item| {
            let cell = project(bounds, area, item.lat, item.lon)?;
            let dx = cell.x.abs_diff(position.x);
            let dy = cell.y.abs_diff(position.y);
            (dx <= 1 && dy <= 1).then_some((dx + dy, item.id.as_str()))
        })
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, id)| id)
}
