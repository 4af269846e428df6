pub mod cli;
pub mod config;
pub mod logging;
pub mod query;
pub mod search;
pub mod ui;
