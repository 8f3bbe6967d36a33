//! CS2 Inventory Sync - Steam inventory to remote item table
//!
//! Pulls the raw CS2 inventory snapshot for a Steam account, enriches each
//! item description with a market price and derived wear/rarity
//! classifications, and reconciles the result into a remote item table.
//! A small web dashboard renders the stored items and triggers refreshes
//! on demand.

pub mod classify;
pub mod error;
pub mod steam;
pub mod store;
pub mod sync;
pub mod web;

pub use classify::{extract_exterior, extract_rarity, Exterior, Rarity};
pub use error::{Result, StoreError, SyncError};
pub use steam::SteamClient;
pub use store::{InventoryItem, ItemPatch, ItemStore, NewInventoryItem};
pub use sync::{RefreshSummary, Synchronizer};
