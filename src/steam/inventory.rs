//! Steam inventory snapshot fetching and validation

use super::{SteamClient, IMAGE_CDN_URL, USER_AGENT};
use crate::error::{Result, SyncError};
use serde::Deserialize;

/// Inventory context holding tradable items
const INVENTORY_CONTEXT: u32 = 2;

/// Owned-unit record from the snapshot's `assets` section
#[derive(Debug, Clone, Deserialize)]
pub struct AssetRecord {
    pub appid: String,
    pub contextid: String,
    pub assetid: String,
    pub classid: String,
    pub instanceid: String,
}

/// Item-type record from the snapshot's `descriptions` section
///
/// One entry per distinct tradable item variant, not per owned unit.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDescription {
    pub appid: String,
    pub classid: String,
    pub instanceid: String,
    pub market_hash_name: String,
    pub market_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub icon_url: String,
    pub name: String,
    pub marketable: u8,
}

impl ItemDescription {
    /// Resolve the icon to an absolute URL on the economy image CDN
    pub fn image_url(&self) -> String {
        format!("{}/{}", IMAGE_CDN_URL, self.icon_url)
    }
}

/// Raw snapshot body; both sections are optional on the wire
#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    assets: Option<Vec<AssetRecord>>,
    #[serde(default)]
    descriptions: Option<Vec<ItemDescription>>,
}

/// Validated inventory snapshot with both required sections present
#[derive(Debug)]
pub struct InventorySnapshot {
    pub assets: Vec<AssetRecord>,
    pub descriptions: Vec<ItemDescription>,
}

impl RawSnapshot {
    fn validate(self) -> Result<InventorySnapshot> {
        let assets = self.assets.ok_or(SyncError::MissingSection("assets"))?;
        let descriptions = self
            .descriptions
            .ok_or(SyncError::MissingSection("descriptions"))?;
        Ok(InventorySnapshot {
            assets,
            descriptions,
        })
    }
}

impl SteamClient {
    /// Fetch the full inventory snapshot for an account
    ///
    /// Fails with [`SyncError::MissingSection`] when the payload lacks the
    /// `assets` or `descriptions` array; no partial processing is
    /// attempted.
    pub async fn fetch_inventory(&self, steam_id: &str) -> Result<InventorySnapshot> {
        let url = format!(
            "{}/id/{}/inventory/json/{}/{}",
            self.base_url, steam_id, self.app_id, INVENTORY_CONTEXT
        );

        log::info!("Fetching inventory snapshot for {}", steam_id);

        let response = self
            .http
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(SyncError::SourceFetch)?;

        if !response.status().is_success() {
            return Err(SyncError::SourceStatus(response.status()));
        }

        let raw: RawSnapshot = response.json().await.map_err(SyncError::SourceFetch)?;
        let snapshot = raw.validate()?;

        log::info!(
            "Snapshot for {}: {} assets, {} descriptions",
            steam_id,
            snapshot.assets.len(),
            snapshot.descriptions.len()
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
pub(crate) use tests::{description_json, make_test_description};

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
