//! Reducer for the suggestion dropdown.

use crate::ui::mvi::Reducer;

use super::intent::SuggestionIntent;
use super::state::SuggestionState;

pub struct SuggestionReducer;

impl Reducer for SuggestionReducer {
    type State = SuggestionState;
    type Intent = SuggestionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SuggestionIntent::InputFocused => SuggestionState {
                shown: true,
                input_focused: true,
                highlighted: None,
            },

            SuggestionIntent::PointerDown { inside: true } => state,

            SuggestionIntent::PointerDown { inside: false } | SuggestionIntent::Escape => {
                SuggestionState {
                    shown: false,
                    input_focused: false,
                    highlighted: None,
                }
            }

            SuggestionIntent::Submitted | SuggestionIntent::ExampleChosen => SuggestionState {
                shown: false,
                highlighted: None,
                ..state
            },

            SuggestionIntent::MoveHighlight { delta, len } => {
                if !state.shown || len == 0 {
                    return state;
                }
                let next = match state.highlighted {
                    None if delta < 0 => len - 1,
                    None => 0,
                    Some(current) if delta < 0 => {
                        if current == 0 {
                            len - 1
                        } else {
                            current - 1
                        }
                    }
                    Some(current) => {
                        if current + 1 >= len {
                            0
                        } else {
                            current + 1
                        }
                    }
                };
                SuggestionState {
                    highlighted: Some(next),
                    ..state
                }
            }
        }
    }
}
