//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_search;

use sightline::config::{Config, ConfigStore};
use sightline::search::{ResultItem, SearchResult, SearchStats};
use sightline::ui::app::{App, UiCommand};
use std::net::TcpListener;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// App sized for the wide layout, mounted, with a command receiver.
pub fn wide_app() -> (App, mpsc::Receiver<UiCommand>) {
    app_with_size(120, 40)
}

pub fn app_with_size(cols: u16, rows: u16) -> (App, mpsc::Receiver<UiCommand>) {
    let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/sightline-test.toml"));
    let mut app = App::new(config);
    let (tx, rx) = mpsc::channel(16);
    app.set_command_sender(tx);
    app.on_resize(cols, rows);
    app.mount();
    (app, rx)
}

pub fn item(id: &str, operator: Option<&str>, kind: &str) -> ResultItem {
    ResultItem {
        id: id.to_string(),
        name: Some(format!("Site {}", id)),
        operator: operator.map(str::to_string),
        kind: kind.to_string(),
        lat: 40.0,
        lon: -74.0,
        country: None,
        tags: Default::default(),
    }
}

pub fn result_of(items: Vec<ResultItem>) -> SearchResult {
    let total = items.len();
    SearchResult {
        results: items,
        bounds: None,
        stats: SearchStats {
            total,
            extra: Default::default(),
        },
    }
}

/// Drain every queued search command as `(seq, query)`.
pub fn drain_searches(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<(u64, String)> {
    let mut out = Vec::new();
    while let Ok(UiCommand::Search { seq, query }) = rx.try_recv() {
        out.push((seq, query.into_string()));
    }
    out
}
