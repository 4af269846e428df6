//! Derived view of the session for the list, map and filter panels.
//!
//! Everything here is recomputed from [`SessionState`] on each read. Panels
//! never keep their own copy of results, selection or filters.

use std::collections::BTreeMap;

use crate::search::{Bounds, ResultItem};
use crate::ui::session::{MobileTab, SessionState};

/// One distinct filter value and how many results carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Facet<'a> {
    pub value: &'a str,
    pub count: usize,
}

/// Snapshot shared by every panel for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel<'a> {
    /// Results passing both filters, in service order.
    pub visible: Vec<&'a ResultItem>,
    /// Bounds for the map; absent until a search has succeeded.
    pub bounds: Option<Bounds>,
    pub selected_id: Option<&'a str>,
    pub selected: Option<&'a ResultItem>,
    /// Panel shown in the narrow single-panel layout.
    pub active_panel: MobileTab,
    pub total: Option<usize>,
    pub operators: Vec<Facet<'a>>,
    pub types: Vec<Facet<'a>>,
    pub filter_operator: Option<&'a str>,
    pub filter_type: Option<&'a str>,
}

impl<'a> ViewModel<'a> {
    pub fn derive(state: &'a SessionState) -> Self {
        let filter_operator = state.filter_operator();
        let filter_type = state.filter_type();
        let items: &'a [ResultItem] = state.result().map(|r| r.results.as_slice()).unwrap_or(&[]);

        let visible = items
            .iter()
            .filter(|item| passes_filters(item, filter_operator, filter_type))
            .collect();

        let selected_id = state.selected_id();
        let selected = selected_id.and_then(|id| items.iter().find(|item| item.id == id));

        Self {
            visible,
            bounds: state.result().and_then(|r| r.bounds),
            selected_id,
            selected,
            active_panel: state.mobile_tab(),
            total: state.result().map(|r| r.stats.total),
            operators: facets(items.iter().filter_map(|item| item.operator.as_deref())),
            types: facets(items.iter().map(|item| item.kind.as_str())),
            filter_operator,
            filter_type,
        }
    }

    pub fn is_selected(&self, item: &ResultItem) -> bool {
        self.selected_id == Some(item.id.as_str())
    }
}

/// Both filters apply; an absent filter lets everything through.
pub fn passes_filters(
    item: &ResultItem,
    filter_operator: Option<&str>,
    filter_type: Option<&str>,
) -> bool {
    let operator_ok = filter_operator.map_or(true, |op| item.operator.as_deref() == Some(op));
    let type_ok = filter_type.map_or(true, |kind| item.kind == kind);
    operator_ok && type_ok
}

/// Distinct values by descending count, ties by name.
fn facets<'a>(values: impl Iterator<Item = &'a str>) -> Vec<Facet<'a>> {
    let mut counts: BTreeMap<&'a str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut facets: Vec<Facet<'a>> = counts
        .into_iter()
        .map(|(value, count)| Facet { value, count })
        .collect();
    facets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(b.value)));
    facets
}

/// Next filter value when cycling with a key: none → first → … → last → none.
pub fn cycle_facet(facets: &[Facet<'_>], current: Option<&str>) -> Option<String> {
    let next = match current {
        None => facets.first(),
        Some(current) => {
            let position = facets.iter().position(|facet| facet.value == current);
            match position {
                Some(index) => facets.get(index + 1),
                None => facets.first(),
            }
        }
    };
    next.map(|facet| facet.value.to_string())
}

/// Tab label; the results tab carries the total once a search succeeded.
pub fn tab_label(tab: MobileTab, total: Option<usize>) -> String {
    match (tab, total) {
        (MobileTab::Results, Some(total)) => format!("Results ({})", total),
        _ => tab.label().to_string(),
    }
}
