//! Steam market price lookups
//!
//! Price resolution is fail-soft: any failure yields a price of zero so a
//! single dead lookup cannot abort a whole refresh.

use super::{SteamClient, USER_AGENT};
use serde::Deserialize;

/// Price overview response from the market endpoint
#[derive(Debug, Deserialize)]
pub struct PriceOverview {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub lowest_price: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub median_price: Option<String>,
}

impl SteamClient {
    /// Resolve the current market price for an item
    ///
    /// Returns `0.0` when the lookup fails in any way — network error,
    /// error status, malformed body, or absent `lowest_price`. Zero means
    /// "unknown", not "free". No retries.
    pub async fn resolve_price(&self, market_hash_name: &str) -> f64 {
        match self.fetch_price_overview(market_hash_name).await {
            Ok(overview) => overview
                .lowest_price
                .as_deref()
                .and_then(parse_lowest_price)
                .unwrap_or(0.0),
            Err(e) => {
                log::warn!("Price lookup failed for {}: {}", market_hash_name, e);
                0.0
            }
        }
    }

    async fn fetch_price_overview(
        &self,
        market_hash_name: &str,
    ) -> std::result::Result<PriceOverview, reqwest::Error> {
        let url = format!(
            "{}/market/priceoverview/?appid={}&currency={}&market_hash_name={}",
            self.base_url,
            self.app_id,
            self.currency,
            urlencoding::encode(market_hash_name)
        );

        log::debug!("Fetching price overview for {}", market_hash_name);

        self.http
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

/// Parse a currency-formatted amount like `"$10.50"` into a number
///
/// Strips everything except digits and the decimal point before parsing,
/// so grouped amounts (`"$1,234.56"`) survive intact.
fn parse_lowest_price(raw: &str) -> Option<f64> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let value: f64 = digits.parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
#[path = "market_tests.rs"]
mod tests;
