mod common;

use common::{item, result_of};
use sightline::query::Query;
use sightline::search::{SearchError, NETWORK_ERROR_MESSAGE};
use sightline::ui::mvi::Reducer;
use sightline::ui::session::{MobileTab, SearchPhase, SessionIntent, SessionReducer, SessionState};

fn reduce(state: SessionState, intent: SessionIntent) -> SessionState {
    SessionReducer::reduce(state, intent)
}

fn start(state: SessionState, text: &str) -> SessionState {
    reduce(
        state,
        SessionIntent::Start {
            query: Query::free_text(text).unwrap(),
        },
    )
}

fn succeed(state: SessionState) -> SessionState {
    let seq = state.request_seq();
    reduce(
        state,
        SessionIntent::Resolved {
            seq,
            outcome: Ok(result_of(vec![
                item("a", Some("X"), "airport"),
                item("b", Some("Y"), "heliport"),
            ])),
        },
    )
}

/// Session with a result, a selection, both filters and a non-default tab.
fn busy_state() -> SessionState {
    let state = succeed(start(SessionState::default(), "airports"));
    let state = reduce(state, SessionIntent::Select { id: "a".into() });
    let state = reduce(state, SessionIntent::SetOperatorFilter(Some("X".into())));
    let state = reduce(state, SessionIntent::SetTypeFilter(Some("airport".into())));
    reduce(state, SessionIntent::SetMobileTab(MobileTab::Filters))
}

#[test]
fn test_start_resets_selection_and_filters_immediately() {
    let state = start(busy_state(), "hospitals in paris");

    assert!(state.loading());
    assert_eq!(state.selected_id(), None);
    assert_eq!(state.filter_operator(), None);
    assert_eq!(state.filter_type(), None);
    assert_eq!(state.error(), None);
    assert_eq!(state.mobile_tab(), MobileTab::Filters);
}

#[test]
fn test_start_from_failed_state_clears_error() {
    let state = start(SessionState::default(), "q");
    let seq = state.request_seq();
    let state = reduce(
        state,
        SessionIntent::Resolved {
            seq,
            outcome: Err(SearchError::Transport("reset".into())),
        },
    );
    assert!(state.error().is_some());

    let state = start(state, "again");
    assert_eq!(state.error(), None);
    assert_eq!(state.phase(), SearchPhase::Searching);
}

#[test]
fn test_select_toggles_and_replaces() {
    let state = succeed(start(SessionState::default(), "q"));

    let state = reduce(state, SessionIntent::Select { id: "a".into() });
    assert_eq!(state.selected_id(), Some("a"));
    let state = reduce(state, SessionIntent::Select { id: "a".into() });
    assert_eq!(state.selected_id(), None);

    let state = reduce(state, SessionIntent::Select { id: "a".into() });
    let state = reduce(state, SessionIntent::Select { id: "b".into() });
    assert_eq!(state.selected_id(), Some("b"));
}

#[test]
fn test_failure_then_success() {
    let state = succeed(start(SessionState::default(), "first"));
    assert!(state.result().is_some());

    let state = start(state, "second");
    let seq = state.request_seq();
    let state = reduce(
        state,
        SessionIntent::Resolved {
            seq,
            outcome: Err(SearchError::Service {
                status: 400,
                message: "Bad query".into(),
            }),
        },
    );
    assert_eq!(state.phase(), SearchPhase::Failed);
    assert!(state.result().is_none());
    assert_eq!(state.error(), Some("Bad query"));

    let state = succeed(start(state, "third"));
    assert_eq!(state.phase(), SearchPhase::Succeeded);
    assert_eq!(state.error(), None);
    assert_eq!(state.result().unwrap().results.len(), 2);
}

#[test]
fn test_transport_failure_shows_fixed_message() {
    let state = start(SessionState::default(), "q");
    let seq = state.request_seq();
    let state = reduce(
        state,
        SessionIntent::Resolved {
            seq,
            outcome: Err(SearchError::Transport("connection refused".into())),
        },
    );
    assert_eq!(state.error(), Some(NETWORK_ERROR_MESSAGE));
}

#[test]
fn test_stale_response_is_discarded() {
    let state = start(SessionState::default(), "slow");
    let stale_seq = state.request_seq();
    let state = start(state, "fast");
    let latest_seq = state.request_seq();
    assert_ne!(stale_seq, latest_seq);

    let state = reduce(
        state,
        SessionIntent::Resolved {
            seq: stale_seq,
            outcome: Err(SearchError::Transport("late".into())),
        },
    );
    assert!(state.loading());
    assert_eq!(state.error(), None);

    let state = succeed(state);
    assert_eq!(state.phase(), SearchPhase::Succeeded);
    assert_eq!(state.query().unwrap().as_str(), "fast");
}

#[test]
fn test_duplicate_resolution_is_ignored() {
    let state = succeed(start(SessionState::default(), "q"));
    let seq = state.request_seq();
    let state = reduce(
        state,
        SessionIntent::Resolved {
            seq,
            outcome: Err(SearchError::Transport("again".into())),
        },
    );
    assert_eq!(state.phase(), SearchPhase::Succeeded);
    assert!(state.result().is_some());
}

#[test]
fn test_filters_and_tab_are_set_independently() {
    let state = succeed(start(SessionState::default(), "q"));
    let state = reduce(state, SessionIntent::SetTypeFilter(Some("airport".into())));
    let state = reduce(state, SessionIntent::SetMobileTab(MobileTab::Results));
    assert_eq!(state.filter_type(), Some("airport"));
    assert_eq!(state.filter_operator(), None);
    assert_eq!(state.mobile_tab(), MobileTab::Results);

    let state = reduce(state, SessionIntent::SetTypeFilter(None));
    assert_eq!(state.filter_type(), None);
}
