//! Search session feature module.
//!
//! Owns the lifecycle of one search (in-flight flag, result, error) and
//! the selection and filters scoped to that result.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Session state and phase
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions, including stale-response discard

mod intent;
mod reducer;
mod state;

pub use intent::SessionIntent;
pub use reducer::SessionReducer;
pub use state::{MobileTab, SearchPhase, SessionState};
