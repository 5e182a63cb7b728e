//! `bag` binary: loads the item catalog and a save slot, prints the bag.
//!
//! An empty slot is filled with a starter layout (one of each catalog item)
//! and written back, so the next run loads it from disk. A slot that exists
//! but cannot be read is reported and left alone.
mod config;
mod render;
mod starter;

use std::sync::Arc;

use anyhow::{Context, Result};
use bag_content::ContentFactory;
use bag_core::BagError;
use bag_runtime::{BagSession, FileSaveRepository, ItemOracleImpl, SaveRepository};
use config::CliConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    tracing::debug!(?config, "configuration loaded");

    let factory = ContentFactory::new(&config.data_dir);
    let bag_config = factory
        .load_config()
        .with_context(|| format!("loading config from {}", config.data_dir.display()))?;
    let items = factory.load_items()?;
    tracing::info!(
        items = items.len(),
        grid = %bag_config.dimensions(),
        "content loaded"
    );

    let oracle = Arc::new(ItemOracleImpl::from_definitions(items));
    let repo = FileSaveRepository::new(&config.save_dir)
        .with_context(|| format!("opening save dir {}", config.save_dir.display()))?;
    let mut session = BagSession::new(&bag_config, oracle);

    if repo.exists(&config.slot) {
        if let Err(err) = session.load(&repo, &config.slot) {
            let severity = err.severity();
            if !severity.is_recoverable() {
                if severity.is_internal() {
                    tracing::error!(code = err.error_code(), "load failed: {err}");
                }
                return Err(err).with_context(|| format!("loading slot {}", config.slot));
            }
            // Keep the unreadable slot on disk for inspection.
            tracing::warn!(
                slot = %config.slot,
                code = err.error_code(),
                severity = severity.as_str(),
                "cannot load slot ({err}), showing starter layout"
            );
            starter::pack_catalog(&mut session)?;
        }
    } else {
        let placed = starter::pack_catalog(&mut session)?;
        tracing::info!(slot = %config.slot, placed, "slot empty, packed starter layout");
        session.save(&repo, &config.slot)?;
    }

    let inventory = session.inventory();
    let legend = render::legend(inventory);
    println!("{}", render::grid(inventory, &legend));
    print!("{}", render::adjacency_report(inventory, &legend));

    let total = inventory.total_link_bonuses();
    if !total.is_empty() {
        println!("\nTotal link bonuses: {total}");
    }

    Ok(())
}
