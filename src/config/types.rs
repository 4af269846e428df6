use serde::{Deserialize, Serialize};

/// Example queries offered under an empty search box.
pub const DEFAULT_EXAMPLES: &[&str] = &[
    "airports near london",
    "hospitals in paris",
    "power plants in texas",
    "train stations in tokyo",
    "type:university region:california",
];

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Search service connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Full URL of the search endpoint (e.g., "http://127.0.0.1:3000/api/search").
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Connection timeout in seconds (default: 5). Requests themselves are
    /// not bounded.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Terminals narrower than this show one panel at a time (default: 100).
    #[serde(default = "default_narrow_width")]
    pub narrow_width: u16,
    /// Radius choices for "search near" in the filter panel.
    #[serde(default = "default_radius_presets")]
    pub radius_presets: Vec<u32>,
    /// Example queries shown when the search box is focused and empty.
    #[serde(default = "default_examples")]
    pub examples: Vec<String>,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:3000/api/search".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_narrow_width() -> u16 {
    100
}

fn default_radius_presets() -> Vec<u32> {
    vec![1, 5, 10, 25, 50]
}

fn default_examples() -> Vec<String> {
    DEFAULT_EXAMPLES.iter().map(|s| s.to_string()).collect()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            narrow_width: default_narrow_width(),
            radius_presets: default_radius_presets(),
            examples: default_examples(),
        }
    }
}
