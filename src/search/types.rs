use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Complete response to one query.
///
/// Received as a whole and never patched; a new search replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub results: Vec<ResultItem>,
    #[serde(default)]
    pub bounds: Option<Bounds>,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn find(&self, id: &str) -> Option<&ResultItem> {
        self.results.iter().find(|item| item.id == id)
    }
}

/// One infrastructure asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: Option<String>,
    /// Raw tags from the source data. Values may be any JSON type.
    #[serde(default)]
    pub tags: Map<String, Value>,
}

impl ResultItem {
    /// Name shown in panels; falls back to the id for unnamed assets.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Geographic bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.south && lat <= self.north && lon >= self.west && lon <= self.east
    }
}

/// Summary statistics. Only `total` is interpreted; anything else the
/// service sends is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    pub total: usize,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body the service returns with a non-success status.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// Body sent to the service.
#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub query: &'a str,
}
