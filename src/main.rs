//! Contact Directory - Main entry point
//!
//! Runs the interactive contact menu on stdin/stdout.

use anyhow::{Context, Result};
use contact_directory::{run_menu, Config, ContactDirectory, Metrics};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logging goes to stderr; stdout belongs to the menu
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        max_name_length = config.max_name_length,
        "Starting contact directory"
    );

    let metrics = Metrics::new();
    let mut directory = ContactDirectory::with_max_name_length(config.max_name_length)
        .with_metrics(metrics.clone());

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_menu(&mut directory, stdin.lock(), stdout.lock()) {
        error!("Menu terminated: {}", e);
        return Err(e.into());
    }

    let summary = metrics.summary();
    info!(
        inserts = summary.inserts_total,
        rejected = summary.inserts_rejected_total,
        searches = summary.searches_total,
        search_hit_rate = summary.search_hit_rate,
        deletes = summary.deletes_total,
        lists = summary.lists_total,
        remaining = directory.len(),
        "Contact directory shutdown complete"
    );

    Ok(())
}
