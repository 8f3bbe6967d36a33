//! CS2 Inventory Sync
//!
//! Pulls a Steam account's CS2 inventory, enriches each item with a market
//! price and derived classifications, and syncs the result into a remote
//! item table. Optionally serves a dashboard for browsing and on-demand
//! refreshes.

use clap::Parser;
use cs2_inventory_sync::{ItemStore, SteamClient, Synchronizer};
use std::sync::Arc;

/// CS2 inventory sync - enriches Steam inventory data and syncs it to a remote item table
#[derive(Parser, Debug)]
#[command(name = "cs2_inventory_sync")]
#[command(version, about, long_about = None)]
struct Args {
    /// Steam account whose inventory is synced
    #[arg(short, long)]
    steam_id: String,

    /// Steam application id (730 = CS2)
    #[arg(long, default_value_t = 730)]
    app_id: u32,

    /// Market currency code (1 = USD)
    #[arg(long, default_value_t = 1)]
    currency: u32,

    /// Base URL of the item store service
    #[arg(long)]
    store_url: String,

    /// Base identifier addressing the item table within the store service
    #[arg(long)]
    base_id: String,

    /// Serve the dashboard on this port instead of running a one-shot sync
    #[arg(long)]
    web_port: Option<u16>,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting cs2_inventory_sync for {}", args.steam_id);

    let steam = SteamClient::new(args.app_id, args.currency);
    let store = ItemStore::new(args.store_url, args.base_id);
    let synchronizer = Arc::new(Synchronizer::new(steam, store.clone()));

    if let Some(port) = args.web_port {
        // Refreshes run on demand from the dashboard; no scheduling.
        if let Err(e) =
            cs2_inventory_sync::web::serve(store, synchronizer, args.steam_id, port).await
        {
            log::error!("Web server error: {}", e);
            std::process::exit(1);
        }
    } else {
        match synchronizer.refresh(&args.steam_id).await {
            Ok(summary) => {
                log::info!(
                    "Synced {} items ({} inserted, {} updated)",
                    summary.total(),
                    summary.inserted,
                    summary.updated
                );
            }
            Err(e) => {
                log::error!("Refresh failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}
