//! Main entry point for Steam Stats.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use steamstats_app::{Args, Session};
use steamstats_common::init_logging;
use steamstats_config::ConfigLoader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (mut config, config_source) = ConfigLoader::load_resolved(args.config.as_deref())
        .context("Failed to load configuration")?;
    args.apply_to(&mut config);

    let _log_guard = init_logging(&config.logging).context("Failed to initialize logging")?;
    info!("Starting Steam Stats");
    match &config_source {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }

    let session = Session::start(&config).await;
    let mut stdout = io::stdout().lock();

    if args.list_options {
        session.write_options(&mut stdout)?;
        return Ok(());
    }

    if let Err(e) = session.output(args.format, &mut stdout).await {
        error!("Output failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
