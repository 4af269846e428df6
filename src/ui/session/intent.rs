//! Intents for the search session.

use crate::query::Query;
use crate::search::{SearchError, SearchResult};
use crate::ui::mvi::Intent;

use super::state::MobileTab;

/// Intents that can be dispatched to the session reducer.
#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// A new search was submitted. The caller has already rejected blank
    /// queries.
    Start { query: Query },

    /// The request tagged `seq` finished.
    /// Ignored unless `seq` is the most recently started request.
    Resolved {
        seq: u64,
        outcome: Result<SearchResult, SearchError>,
    },

    /// Toggle selection of one result.
    Select { id: String },

    SetOperatorFilter(Option<String>),

    SetTypeFilter(Option<String>),

    SetMobileTab(MobileTab),
}

impl Intent for SessionIntent {}
