use crate::app_config::{
    AppConfig, DEFAULT_CATALOG_URL, DEFAULT_FULFILLMENT_URL, DEFAULT_LOCATION, DEFAULT_USER_AGENT,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, raw: &str| -> Result<u64, ConfigError> {
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let fulfillment_url = or_default("PICKUPWATCH_FULFILLMENT_URL", DEFAULT_FULFILLMENT_URL);
    let catalog_url = or_default("PICKUPWATCH_CATALOG_URL", DEFAULT_CATALOG_URL);
    let catalog_path = lookup("PICKUPWATCH_CATALOG_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let location = or_default("PICKUPWATCH_LOCATION", DEFAULT_LOCATION);
    if location.is_empty() || !location.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar {
            var: "PICKUPWATCH_LOCATION".to_string(),
            reason: format!("expected a numeric location code, got '{location}'"),
        });
    }

    let request_timeout_secs = parse_u64(
        "PICKUPWATCH_REQUEST_TIMEOUT_SECS",
        &or_default("PICKUPWATCH_REQUEST_TIMEOUT_SECS", "10"),
    )?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "PICKUPWATCH_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }

    let user_agent = or_default("PICKUPWATCH_USER_AGENT", DEFAULT_USER_AGENT);
    let poll_interval_ms = match lookup("PICKUPWATCH_POLL_INTERVAL_MS") {
        Ok(raw) => Some(parse_u64("PICKUPWATCH_POLL_INTERVAL_MS", &raw)?),
        Err(_) => None,
    };
    let log_level = or_default("PICKUPWATCH_LOG_LEVEL", "warn");

    Ok(AppConfig {
        fulfillment_url,
        catalog_url,
        catalog_path,
        location,
        request_timeout_secs,
        user_agent,
        poll_interval_ms,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
