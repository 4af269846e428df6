//! State for one search session.

use std::sync::Arc;

use crate::query::Query;
use crate::search::SearchResult;
use crate::ui::mvi::UiState;

/// Lifecycle of the current search.
///
/// `Idle` until the first search; every later start moves straight to
/// `Searching` from whichever terminal phase the previous search ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    Succeeded,
    Failed,
}

/// Panel shown when the terminal is too narrow for all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileTab {
    #[default]
    Map,
    Results,
    Filters,
}

impl MobileTab {
    pub const ALL: [MobileTab; 3] = [MobileTab::Map, MobileTab::Results, MobileTab::Filters];

    pub fn label(&self) -> &'static str {
        match self {
            MobileTab::Map => "Map",
            MobileTab::Results => "Results",
            MobileTab::Filters => "Filters",
        }
    }
}

/// The single source of truth for search results, selection and filters.
///
/// Fields are only written by [`SessionReducer`](super::SessionReducer);
/// everything else reads through the accessors.
///
/// Invariants:
/// - a resolved search has either a result or an error, never both;
/// - selection and filters belong to one result set and are cleared
///   whenever a new search starts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub(super) phase: SearchPhase,
    /// Sequence number of the most recently started request.
    pub(super) request_seq: u64,
    pub(super) query: Option<Query>,
    pub(super) error: Option<String>,
    pub(super) result: Option<Arc<SearchResult>>,
    pub(super) selected_id: Option<String>,
    pub(super) filter_operator: Option<String>,
    pub(super) filter_type: Option<String>,
    pub(super) mobile_tab: MobileTab,
}

impl UiState for SessionState {}

impl SessionState {
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// True while a request is outstanding.
    pub fn loading(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    pub fn request_seq(&self) -> u64 {
        self.request_seq
    }

    /// Query of the most recently started search.
    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_deref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn filter_operator(&self) -> Option<&str> {
        self.filter_operator.as_deref()
    }

    pub fn filter_type(&self) -> Option<&str> {
        self.filter_type.as_deref()
    }

    pub fn mobile_tab(&self) -> MobileTab {
        self.mobile_tab
    }
}
