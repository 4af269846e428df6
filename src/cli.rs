use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments accepted by the `sightline` binary.
#[derive(Parser, Debug)]
#[command(
    name = "sightline",
    version,
    about = "Interactive search over geospatial infrastructure data"
)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "SIGHTLINE_CONFIG",
        help = "Configuration file (default: <config dir>/sightline/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "URL",
        env = "SIGHTLINE_ENDPOINT",
        help = "Override the search service endpoint"
    )]
    pub endpoint: Option<String>,
    #[arg(
        short,
        long,
        value_name = "QUERY",
        help = "Run this search on startup (default: none)"
    )]
    pub query: Option<String>,
    #[arg(
        long,
        value_name = "FILE",
        help = "Log file (default: <data dir>/sightline/sightline.log)"
    )]
    pub log_file: Option<PathBuf>,
}
