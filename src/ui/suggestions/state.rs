//! State for the suggestion dropdown.

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestionState {
    /// Logically shown. Rendering additionally requires an empty query.
    pub(super) shown: bool,
    pub(super) input_focused: bool,
    pub(super) highlighted: Option<usize>,
}

impl UiState for SuggestionState {}

impl SuggestionState {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn input_focused(&self) -> bool {
        self.input_focused
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether the dropdown is drawn for the current query text.
    ///
    /// Any text in the box suppresses the examples even while they are
    /// logically shown.
    pub fn is_visible(&self, query_text: &str) -> bool {
        self.shown && query_text.is_empty()
    }
}
