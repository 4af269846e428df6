use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Where a key press goes before normal handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRoute {
    /// Move focus into the search input and swallow the key.
    FocusInput,
    /// Handle the key normally (typing, panel keys).
    PassThrough,
}

/// Global `/` shortcut.
///
/// Fires only while the input is not focused, so `/` can still be typed
/// as part of a query once the user is in the box.
pub fn route_global_key(key: KeyEvent, input_focused: bool) -> KeyRoute {
    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    if key.code == KeyCode::Char('/') && plain && !input_focused {
        KeyRoute::FocusInput
    } else {
        KeyRoute::PassThrough
    }
}
