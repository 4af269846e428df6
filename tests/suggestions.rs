use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use sightline::ui::mvi::Reducer;
use sightline::ui::suggestions::{
    route_global_key, KeyRoute, SuggestionIntent, SuggestionReducer, SuggestionState,
};

fn apply(intents: &[SuggestionIntent]) -> SuggestionState {
    intents
        .iter()
        .fold(SuggestionState::default(), |state, intent| {
            SuggestionReducer::reduce(state, *intent)
        })
}

#[test]
fn test_focus_shows_examples_for_empty_query() {
    let state = apply(&[SuggestionIntent::InputFocused]);
    assert!(state.is_shown());
    assert!(state.input_focused());
    assert!(state.is_visible(""));
    assert!(!state.is_visible("airports"));
}

#[test]
fn test_pointer_inside_container_keeps_examples() {
    let state = apply(&[
        SuggestionIntent::InputFocused,
        SuggestionIntent::PointerDown { inside: true },
    ]);
    assert!(state.is_shown());
    assert!(state.input_focused());
}

#[test]
fn test_pointer_outside_container_hides_examples() {
    let state = apply(&[
        SuggestionIntent::InputFocused,
        SuggestionIntent::PointerDown { inside: false },
    ]);
    assert!(!state.is_shown());
    assert!(!state.input_focused());
}

#[test]
fn test_escape_hides_and_blurs() {
    let state = apply(&[SuggestionIntent::InputFocused, SuggestionIntent::Escape]);
    assert!(!state.is_shown());
    assert!(!state.input_focused());
}

#[test]
fn test_submit_and_example_choice_hide_but_keep_focus() {
    for intent in [SuggestionIntent::Submitted, SuggestionIntent::ExampleChosen] {
        let state = apply(&[SuggestionIntent::InputFocused, intent]);
        assert!(!state.is_shown());
        assert!(state.input_focused());
        assert_eq!(state.highlighted(), None);
    }
}

#[test]
fn test_highlight_wraps_both_ways() {
    let down = SuggestionIntent::MoveHighlight { delta: 1, len: 3 };
    let up = SuggestionIntent::MoveHighlight { delta: -1, len: 3 };

    let state = apply(&[SuggestionIntent::InputFocused, down, down, down]);
    assert_eq!(state.highlighted(), Some(2));
    let state = SuggestionReducer::reduce(state, down);
    assert_eq!(state.highlighted(), Some(0));

    let state = apply(&[SuggestionIntent::InputFocused, up]);
    assert_eq!(state.highlighted(), Some(2));
}

#[test]
fn test_highlight_ignored_while_hidden() {
    let state = apply(&[SuggestionIntent::MoveHighlight { delta: 1, len: 5 }]);
    assert_eq!(state.highlighted(), None);
}

#[test]
fn test_slash_routing_depends_on_focus() {
    let slash = KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE);
    assert_eq!(route_global_key(slash, false), KeyRoute::FocusInput);
    assert_eq!(route_global_key(slash, true), KeyRoute::PassThrough);

    let ctrl_slash = KeyEvent::new(KeyCode::Char('/'), KeyModifiers::CONTROL);
    assert_eq!(route_global_key(ctrl_slash, false), KeyRoute::PassThrough);

    let letter = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    assert_eq!(route_global_key(letter, false), KeyRoute::PassThrough);
}
