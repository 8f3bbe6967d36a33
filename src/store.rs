//! Remote item table client
//!
//! The store is a generic table-oriented data service addressed by an API
//! URL and a base identifier. The client covers exactly what the sync
//! pipeline needs: select, keyed lookup, insert, partial update. No
//! pagination, sorting, or deletion.

use crate::classify::{Exterior, Rarity};
use crate::error::{Result, StoreError, SyncError};
use serde::{Deserialize, Serialize};

/// Table holding inventory rows
const ITEMS_TABLE: &str = "items";

const USER_AGENT: &str = "cs2_inventory_sync/1.0";

/// Persisted inventory row
///
/// `market_hash_name` together with `steam_id` identifies a logical item
/// instance; `id` is assigned by the store and immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub exterior: Exterior,
    #[serde(rename = "type")]
    pub item_type: String,
    pub rarity: Rarity,
    pub last_sale_price: f64,
    pub market_hash_name: String,
    pub image_url: String,
    pub steam_id: String,
    pub updated_at: String,
}

/// Row to insert; the store assigns the `id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInventoryItem {
    pub name: String,
    pub exterior: Exterior,
    #[serde(rename = "type")]
    pub item_type: String,
    pub rarity: Rarity,
    pub last_sale_price: f64,
    pub market_hash_name: String,
    pub image_url: String,
    pub steam_id: String,
    pub updated_at: String,
}

/// Partial update payload; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Select response wrapper from the table service
#[derive(Debug, Deserialize)]
struct SelectResponse {
    data: Vec<InventoryItem>,
}

/// Client for the remote item table
#[derive(Clone)]
pub struct ItemStore {
    http: reqwest::Client,
    api_url: String,
    base_id: String,
}

impl ItemStore {
    /// Create a store client for the given service address
    pub fn new(api_url: impl Into<String>, base_id: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            base_id: base_id.into(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/{}/{}", self.api_url, self.base_id, ITEMS_TABLE)
    }

    /// List every stored row
    pub async fn list_all(&self) -> Result<Vec<InventoryItem>> {
        self.select(&[]).await.map_err(SyncError::StoreRead)
    }

    /// Look up a row by its natural key (item variant + owning account)
    pub async fn find_by_key(
        &self,
        market_hash_name: &str,
        steam_id: &str,
    ) -> Result<Option<InventoryItem>> {
        let rows = self
            .select(&[
                ("market_hash_name", market_hash_name),
                ("steam_id", steam_id),
            ])
            .await
            .map_err(SyncError::StoreRead)?;
        Ok(rows.into_iter().next())
    }

    /// Insert a new row; the store assigns its id
    pub async fn insert(&self, item: &NewInventoryItem) -> Result<()> {
        let response = self
            .http
            .post(self.table_url())
            .header("User-Agent", USER_AGENT)
            .json(item)
            .send()
            .await
            .map_err(|e| SyncError::StoreWrite(e.into()))?;

        if !response.status().is_success() {
            return Err(SyncError::StoreWrite(StoreError::HttpStatus(
                response.status(),
            )));
        }
        Ok(())
    }

    /// Apply a partial update to an existing row
    pub async fn update_by_id(&self, id: &str, patch: &ItemPatch) -> Result<()> {
        let url = format!("{}/{}", self.table_url(), id);
        let response = self
            .http
            .patch(&url)
            .header("User-Agent", USER_AGENT)
            .json(patch)
            .send()
            .await
            .map_err(|e| SyncError::StoreWrite(e.into()))?;

        if !response.status().is_success() {
            return Err(SyncError::StoreWrite(StoreError::HttpStatus(
                response.status(),
            )));
        }
        Ok(())
    }

    async fn select(
        &self,
        filters: &[(&str, &str)],
    ) -> std::result::Result<Vec<InventoryItem>, StoreError> {
        let mut request = self
            .http
            .get(self.table_url())
            .header("User-Agent", USER_AGENT);
        if !filters.is_empty() {
            request = request.query(filters);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(StoreError::HttpStatus(response.status()));
        }

        let body: SelectResponse = response.json().await?;
        Ok(body.data)
    }
}

#[cfg(test)]
pub(crate) use tests::make_test_item;

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
