//! Intents for the suggestion dropdown.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the suggestion reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionIntent {
    /// The search input gained focus (click or `/` shortcut).
    InputFocused,

    /// A pointer was pressed somewhere on screen. `inside` is the result of
    /// the containment check against the whole search container.
    PointerDown { inside: bool },

    /// Escape: hide and blur the input.
    Escape,

    /// A query was submitted from the input.
    Submitted,

    /// An example was chosen (clicked or Enter on the highlight).
    ExampleChosen,

    /// Move the keyboard highlight through `len` examples, wrapping.
    MoveHighlight { delta: i32, len: usize },
}

impl Intent for SuggestionIntent {}
