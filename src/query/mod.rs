//! Query construction for the search service.
//!
//! The service accepts one whitespace-delimited string. It is either free
//! text ("airports near london") or a sequence of structured `key:value`
//! tokens ("type:airport near:London radius:10"). Values therefore cannot
//! contain whitespace; place names are joined with underscores.

mod token;

pub use token::{QueryKey, QueryToken};

use std::fmt;

use serde::Serialize;

/// Canonical query string sent to the search service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Query(String);

impl Query {
    /// Build a free-text query from raw user input.
    ///
    /// Returns `None` when the input is empty after trimming. Empty input is
    /// rejected here rather than reported as an error.
    pub fn free_text(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Recognized `key:value` tokens in this query, in order.
    ///
    /// Words that are not recognized tokens are skipped.
    pub fn tokens(&self) -> Vec<QueryToken<'_>> {
        self.0.split_whitespace().filter_map(QueryToken::parse).collect()
    }

    /// True when every word of the query is a recognized structured token.
    pub fn is_structured(&self) -> bool {
        self.0
            .split_whitespace()
            .all(|word| QueryToken::parse(word).is_some())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build a structured "search near a place" query.
///
/// Every run of whitespace in `near` collapses to a single underscore.
/// `radius` and `kind` are passed through unchecked; the service decides
/// whether they are valid.
pub fn build_radius_query(near: &str, radius: f64, kind: Option<&str>) -> Query {
    let near = near.split_whitespace().collect::<Vec<_>>().join("_");
    let text = match kind {
        Some(kind) => format!("type:{kind} near:{near} radius:{radius}"),
        None => format!("near:{near} radius:{radius}"),
    };
    Query(text)
}
