use std::path::PathBuf;

pub const DEFAULT_FULFILLMENT_URL: &str = "https://www.apple.com/tw-edu/shop/fulfillment-messages";
pub const DEFAULT_CATALOG_URL: &str = "https://www.apple.com/tw/shop/buy-iphone/iphone-16-pro";
pub const DEFAULT_LOCATION: &str = "110";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Inter-round delay when several variants are watched.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;
/// Inter-round delay when exactly one variant is watched.
pub const SINGLE_TARGET_POLL_INTERVAL_MS: u64 = 1_500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fulfillment-lookup endpoint queried once per variant per round.
    pub fulfillment_url: String,
    /// Storefront page carrying the product-selection bootstrap data.
    pub catalog_url: String,
    /// Static catalog file used instead of the storefront page when set.
    pub catalog_path: Option<PathBuf>,
    /// Numeric pickup location code sent with every lookup.
    pub location: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Explicit inter-round delay; `None` picks a default from the selection size.
    pub poll_interval_ms: Option<u64>,
    pub log_level: String,
}

impl AppConfig {
    /// Delay between rounds for a run watching `selection_count` variants.
    #[must_use]
    pub fn poll_interval_ms_for(&self, selection_count: usize) -> u64 {
        match self.poll_interval_ms {
            Some(ms) => ms,
            None if selection_count == 1 => SINGLE_TARGET_POLL_INTERVAL_MS,
            None => DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fulfillment_url: DEFAULT_FULFILLMENT_URL.to_string(),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            catalog_path: None,
            location: DEFAULT_LOCATION.to_string(),
            request_timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            poll_interval_ms: None,
            log_level: "warn".to_string(),
        }
    }
}
