//! Web server for the inventory dashboard
//!
//! Serves the single-page UI plus a JSON API for the item listing and the
//! on-demand refresh trigger.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::error::SyncError;
use crate::store::{InventoryItem, ItemStore};
use crate::sync::{RefreshSummary, Synchronizer};

/// Shared application state
#[derive(Clone)]
struct AppState {
    store: ItemStore,
    synchronizer: Arc<Synchronizer>,
    steam_id: String,
}

/// API response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Item listing with its aggregate value
#[derive(Serialize)]
struct InventoryListing {
    items: Vec<InventoryItem>,
    total_value: f64,
}

/// Sum of last sale prices across a listing
pub fn total_value(items: &[InventoryItem]) -> f64 {
    items.iter().map(|item| item.last_sale_price).sum()
}

/// GET / - the dashboard page
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// GET /api/items - stored items plus their aggregate value
async fn items_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<InventoryListing>>, StatusCode> {
    match state.store.list_all().await {
        Ok(items) => {
            let total_value = total_value(&items);
            Ok(Json(ApiResponse {
                success: true,
                data: Some(InventoryListing { items, total_value }),
                error: None,
            }))
        }
        Err(e) => {
            log::error!("Failed to list items: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/refresh - run the full synchronization flow
async fn refresh_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RefreshSummary>>, StatusCode> {
    match state.synchronizer.refresh(&state.steam_id).await {
        Ok(summary) => Ok(Json(ApiResponse {
            success: true,
            data: Some(summary),
            error: None,
        })),
        Err(e) => {
            log::error!("Refresh failed: {}", e);
            let status = match e {
                SyncError::StoreRead(_) | SyncError::StoreWrite(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
                _ => StatusCode::BAD_GATEWAY,
            };
            Err(status)
        }
    }
}

/// Build the web server router
pub fn create_router(
    store: ItemStore,
    synchronizer: Arc<Synchronizer>,
    steam_id: String,
) -> Router {
    let state = AppState {
        store,
        synchronizer,
        steam_id,
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/items", get(items_handler))
        .route("/api/refresh", post(refresh_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the web server (async)
///
/// Binds to 0.0.0.0 (all interfaces) to work with Docker port mapping.
pub async fn serve(
    store: ItemStore,
    synchronizer: Arc<Synchronizer>,
    steam_id: String,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(store, synchronizer, steam_id);
    let addr = format!("0.0.0.0:{}", port);

    log::info!("Dashboard listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
