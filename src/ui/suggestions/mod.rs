//! Example-query suggestions under the search box.
//!
//! Visibility here is independent of search state: nothing in this module
//! reads or writes the session.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Visibility, input focus, highlighted example
//! - `intent.rs` - Focus, pointer, keyboard and submit events
//! - `reducer.rs` - State transitions
//! - `shortcut.rs` - Global `/` focus shortcut routing

mod intent;
mod reducer;
mod shortcut;
mod state;

pub use intent::SuggestionIntent;
pub use reducer::SuggestionReducer;
pub use shortcut::{route_global_key, KeyRoute};
pub use state::SuggestionState;
