//! Reducer for the search session.

use std::sync::Arc;

use crate::ui::mvi::Reducer;

use super::intent::SessionIntent;
use super::state::{SearchPhase, SessionState};

/// Reducer for search session state transitions.
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::Start { query } => SessionState {
                phase: SearchPhase::Searching,
                request_seq: state.request_seq.wrapping_add(1),
                query: Some(query),
                error: None,
                selected_id: None,
                filter_operator: None,
                filter_type: None,
                // Previous results stay browsable until the new ones land.
                ..state
            },

            SessionIntent::Resolved { seq, outcome } => {
                if seq != state.request_seq || state.phase != SearchPhase::Searching {
                    // Superseded by a newer search, or already resolved.
                    return state;
                }
                match outcome {
                    Ok(result) => SessionState {
                        phase: SearchPhase::Succeeded,
                        error: None,
                        result: Some(Arc::new(result)),
                        ..state
                    },
                    Err(err) => SessionState {
                        phase: SearchPhase::Failed,
                        error: Some(err.user_message().to_string()),
                        result: None,
                        ..state
                    },
                }
            }

            SessionIntent::Select { id } => {
                let selected_id = match state.selected_id {
                    Some(current) if current == id => None,
                    _ => Some(id),
                };
                SessionState {
                    selected_id,
                    ..state
                }
            }

            SessionIntent::SetOperatorFilter(filter_operator) => SessionState {
                filter_operator,
                ..state
            },

            SessionIntent::SetTypeFilter(filter_type) => SessionState {
                filter_type,
                ..state
            },

            SessionIntent::SetMobileTab(mobile_tab) => SessionState {
                mobile_tab,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Query;
    use crate::search::{SearchError, SearchResult, SearchStats, NETWORK_ERROR_MESSAGE};
    use crate::ui::session::MobileTab;

    fn empty_result() -> SearchResult {
        SearchResult {
            results: Vec::new(),
            bounds: None,
            stats: SearchStats {
                total: 0,
                extra: Default::default(),
            },
        }
    }

    fn start(state: SessionState, text: &str) -> SessionState {
        SessionReducer::reduce(
            state,
            SessionIntent::Start {
                query: Query::free_text(text).unwrap(),
            },
        )
    }

    #[test]
    fn start_enters_searching_and_bumps_sequence() {
        let state = start(SessionState::default(), "airports near london");
        assert_eq!(state.phase(), SearchPhase::Searching);
        assert!(state.loading());
        assert_eq!(state.request_seq(), 1);
        assert_eq!(state.query().unwrap().as_str(), "airports near london");
    }

    #[test]
    fn success_stores_result() {
        let state = start(SessionState::default(), "q");
        let state = SessionReducer::reduce(
            state,
            SessionIntent::Resolved {
                seq: 1,
                outcome: Ok(empty_result()),
            },
        );
        assert_eq!(state.phase(), SearchPhase::Succeeded);
        assert!(!state.loading());
        assert!(state.result().is_some());
        assert!(state.error().is_none());
    }

    #[test]
    fn transport_failure_uses_fixed_message() {
        let state = start(SessionState::default(), "q");
        let state = SessionReducer::reduce(
            state,
            SessionIntent::Resolved {
                seq: 1,
                outcome: Err(SearchError::Transport("refused".into())),
            },
        );
        assert_eq!(state.phase(), SearchPhase::Failed);
        assert_eq!(state.error(), Some(NETWORK_ERROR_MESSAGE));
        assert!(state.result().is_none());
        assert!(!state.loading());
    }

    #[test]
    fn duplicate_resolution_is_ignored() {
        let state = start(SessionState::default(), "q");
        let state = SessionReducer::reduce(
            state,
            SessionIntent::Resolved {
                seq: 1,
                outcome: Ok(empty_result()),
            },
        );
        let state = SessionReducer::reduce(
            state,
            SessionIntent::Resolved {
                seq: 1,
                outcome: Err(SearchError::Transport("late".into())),
            },
        );
        assert_eq!(state.phase(), SearchPhase::Succeeded);
        assert!(state.error().is_none());
    }

    #[test]
    fn mobile_tab_survives_new_search() {
        let state = SessionReducer::reduce(
            SessionState::default(),
            SessionIntent::SetMobileTab(MobileTab::Filters),
        );
        let state = start(state, "q");
        assert_eq!(state.mobile_tab(), MobileTab::Filters);
    }
}
