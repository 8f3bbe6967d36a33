//! Steam community API client for inventory snapshots and market prices

mod inventory;
mod market;

pub use inventory::{AssetRecord, InventorySnapshot, ItemDescription};
pub use market::PriceOverview;

#[cfg(test)]
pub(crate) use inventory::{description_json, make_test_description};

/// Default Steam community base URL
const STEAM_COMMUNITY_URL: &str = "https://steamcommunity.com";

/// CDN serving economy item icons
const IMAGE_CDN_URL: &str = "https://steamcommunity-a.akamaihd.net/economy/image";

const USER_AGENT: &str = "cs2_inventory_sync/1.0";

/// Client for the Steam community endpoints
///
/// Cheap to clone; enrichment tasks each hold their own copy.
#[derive(Clone)]
pub struct SteamClient {
    http: reqwest::Client,
    base_url: String,
    app_id: u32,
    currency: u32,
}

impl SteamClient {
    /// Create a client for the given application and currency code
    pub fn new(app_id: u32, currency: u32) -> Self {
        Self::with_base_url(STEAM_COMMUNITY_URL, app_id, currency)
    }

    /// Create a client against a specific base URL (for testing with mock servers)
    pub(crate) fn with_base_url(base_url: impl Into<String>, app_id: u32, currency: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            app_id,
            currency,
        }
    }
}
