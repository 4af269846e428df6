//! Client side of the search service contract.

pub mod client;
pub mod error;
pub mod types;

pub use client::{HttpSearchClient, SearchService};
pub use error::{SearchError, NETWORK_ERROR_MESSAGE};
pub use types::{Bounds, ResultItem, SearchResult, SearchStats};
