//! Inventory synchronization pipeline
//!
//! A refresh is a single fetch → enrich → persist pass: pull the raw
//! snapshot, resolve price and classifications for every description
//! concurrently, then reconcile the enriched records into the item store
//! one write at a time.

use crate::classify::{extract_exterior, extract_rarity};
use crate::error::Result;
use crate::steam::{ItemDescription, SteamClient};
use crate::store::{ItemPatch, ItemStore, NewInventoryItem};
use chrono::Utc;
use serde::Serialize;

/// Orchestrates full inventory refreshes
pub struct Synchronizer {
    steam: SteamClient,
    store: ItemStore,
}

/// Result of one refresh pass
#[derive(Debug, Serialize)]
pub struct RefreshSummary {
    /// Enriched records, in snapshot description order
    pub items: Vec<NewInventoryItem>,
    /// Rows newly created in the store
    pub inserted: usize,
    /// Rows updated in place under their natural key
    pub updated: usize,
}

impl RefreshSummary {
    /// Number of records processed by the refresh
    pub fn total(&self) -> usize {
        self.items.len()
    }
}

impl Synchronizer {
    pub fn new(steam: SteamClient, store: ItemStore) -> Self {
        Self { steam, store }
    }

    /// Run a full refresh for one account
    ///
    /// Aborts with zero writes when the snapshot is unusable. A store
    /// write failure propagates immediately; earlier writes stay
    /// committed, there is no rollback.
    pub async fn refresh(&self, steam_id: &str) -> Result<RefreshSummary> {
        let snapshot = self.steam.fetch_inventory(steam_id).await?;

        // One stamp for the whole batch
        let stamp = Utc::now().to_rfc3339();

        // Fan out one enrichment task per description. Price failures
        // collapse to zero inside resolve_price, so a task cannot fail the
        // batch.
        let mut handles = Vec::with_capacity(snapshot.descriptions.len());
        for description in snapshot.descriptions {
            let steam = self.steam.clone();
            let steam_id = steam_id.to_string();
            let stamp = stamp.clone();
            handles.push(tokio::spawn(async move {
                let price = steam.resolve_price(&description.market_hash_name).await;
                enriched_item(&description, price, &steam_id, &stamp)
            }));
        }

        // Join everything before touching the store; awaiting in spawn
        // order keeps the write phase in snapshot order.
        let mut items = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(item) => items.push(item),
                Err(e) => log::error!("Enrichment task failed: {}", e),
            }
        }

        // Sequential write phase: update in place under the natural key,
        // insert otherwise.
        let mut inserted = 0;
        let mut updated = 0;
        for item in &items {
            match self
                .store
                .find_by_key(&item.market_hash_name, &item.steam_id)
                .await?
            {
                Some(existing) => {
                    let patch = ItemPatch {
                        last_sale_price: Some(item.last_sale_price),
                        image_url: Some(item.image_url.clone()),
                        updated_at: Some(item.updated_at.clone()),
                    };
                    self.store.update_by_id(&existing.id, &patch).await?;
                    updated += 1;
                }
                None => {
                    self.store.insert(item).await?;
                    inserted += 1;
                }
            }
        }

        log::info!(
            "Refresh for {} complete: {} items ({} inserted, {} updated)",
            steam_id,
            items.len(),
            inserted,
            updated
        );

        Ok(RefreshSummary {
            items,
            inserted,
            updated,
        })
    }
}

/// Build the enriched record for one description entry
fn enriched_item(
    description: &ItemDescription,
    price: f64,
    steam_id: &str,
    stamp: &str,
) -> NewInventoryItem {
    NewInventoryItem {
        name: description.name.clone(),
        exterior: extract_exterior(&description.market_hash_name),
        item_type: description.item_type.clone(),
        rarity: extract_rarity(&description.item_type),
        last_sale_price: price,
        market_hash_name: description.market_hash_name.clone(),
        image_url: description.image_url(),
        steam_id: steam_id.to_string(),
        updated_at: stamp.to_string(),
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
