use std::fmt;

/// Keys the search service understands in structured queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Type,
    Near,
    Radius,
    Region,
}

impl QueryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKey::Type => "type",
            QueryKey::Near => "near",
            QueryKey::Radius => "radius",
            QueryKey::Region => "region",
        }
    }

    fn from_name(key: &str) -> Option<Self> {
        match key {
            "type" => Some(QueryKey::Type),
            "near" => Some(QueryKey::Near),
            "radius" => Some(QueryKey::Radius),
            "region" => Some(QueryKey::Region),
            _ => None,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `key:value` word of a structured query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryToken<'a> {
    pub key: QueryKey,
    pub value: &'a str,
}

impl<'a> QueryToken<'a> {
    /// Parse a single whitespace-free word. Unknown keys and empty values
    /// are not tokens.
    pub fn parse(word: &'a str) -> Option<Self> {
        let (key, value) = word.split_once(':')?;
        if value.is_empty() {
            return None;
        }
        Some(Self {
            key: QueryKey::from_name(key)?,
            value,
        })
    }
}
