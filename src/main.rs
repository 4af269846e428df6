use anyhow::Context;
use clap::Parser;
use sightline::cli::Cli;
use sightline::config::{Config, ConfigStore};
use sightline::logging::{default_log_path, init_tracing};
use sightline::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match load_config(&cli, &config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(err) = init_tracing(&log_path) {
        eprintln!("Warning: logging disabled ({}): {err}", log_path.display());
    }
    tracing::info!(
        config = %config_path.display(),
        endpoint = %config.service.endpoint,
        "sightline starting"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("sightline-search")
        .build()
        .context("failed to start async runtime")?;

    let store = ConfigStore::new(config, config_path);
    ui::runtime::run(store, runtime.handle().clone(), cli.query)
        .context("terminal UI failed")?;

    tracing::info!("sightline exiting");
    Ok(())
}

/// Config file plus command-line overrides, validated.
fn load_config(cli: &Cli, path: &std::path::Path) -> anyhow::Result<Config> {
    let mut config = Config::load_from(path)?;
    if let Some(endpoint) = &cli.endpoint {
        config.service.endpoint = endpoint.clone();
        config.validate()?;
    }
    Ok(config)
}
