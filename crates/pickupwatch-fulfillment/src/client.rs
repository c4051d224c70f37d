//! HTTP client for the retailer's fulfillment-lookup endpoint.
//!
//! One lookup checks in-store pickup for one part number near the configured
//! location. Transport and status failures are retried per [`RetryPolicy`];
//! [`FulfillmentClient::probe`] downgrades anything that still fails to an
//! `Unknown` result so a bad lookup never escapes the round.

use std::time::Duration;

use pickupwatch_core::{ProbeResult, StoreAvailability, VariantId, VariantSelection};
use reqwest::{Client, Url};

use crate::error::FulfillmentError;
use crate::parse::available_stores;
use crate::retry::{retry_fixed, RetryPolicy};

/// Condition string for unlocked, worldwide-warranty devices.
const PART_CONDITION: &str = "UNLOCKED/WW";

/// Client for the fulfillment-lookup endpoint.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct FulfillmentClient {
    client: Client,
    base_url: Url,
    location: String,
    retry: RetryPolicy,
}

impl FulfillmentClient {
    /// Creates a client with the default retry policy (3 attempts, 2 s apart).
    ///
    /// `timeout` bounds each attempt, not the whole retry sequence.
    ///
    /// # Errors
    ///
    /// Returns [`FulfillmentError::InvalidBaseUrl`] if `base_url` does not
    /// parse, or [`FulfillmentError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        base_url: &str,
        location: &str,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FulfillmentError> {
        let base_url = Url::parse(base_url).map_err(|e| FulfillmentError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            location: location.to_owned(),
            retry: RetryPolicy::default(),
        })
    }

    /// Replaces the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Looks up pickup availability for `variant`, retrying transient failures.
    ///
    /// Returns the stores currently offering pickup, in response order.
    ///
    /// # Errors
    ///
    /// - [`FulfillmentError::Http`]: network failure or timeout on every attempt.
    /// - [`FulfillmentError::UnexpectedStatus`]: non-2xx status on the last attempt.
    /// - [`FulfillmentError::Deserialize`] / [`FulfillmentError::MalformedResponse`]
    ///   if the body does not have the expected shape (not retried).
    pub async fn try_probe(
        &self,
        variant: &VariantId,
    ) -> Result<Vec<StoreAvailability>, FulfillmentError> {
        let url = self.lookup_url(variant);

        retry_fixed(self.retry, || {
            let url = url.clone();
            async move {
                let response = self.client.get(url.clone()).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FulfillmentError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                let body = response.text().await?;
                available_stores(&body, variant)
            }
        })
        .await
    }

    /// Probes one selection. Never fails: any error becomes an `Unknown`
    /// result with no stores, logged at `warn`.
    pub async fn probe(&self, selection: &VariantSelection) -> ProbeResult {
        match self.try_probe(selection.id()).await {
            Ok(stores) => ProbeResult::from_stores(selection.clone(), stores),
            Err(e) => {
                tracing::warn!(
                    variant = %selection.id(),
                    label = selection.label(),
                    error = %e,
                    "availability check failed; treating as no stock"
                );
                ProbeResult::unknown(selection.clone())
            }
        }
    }

    /// Builds the lookup URL for `variant` with percent-encoded query pairs.
    fn lookup_url(&self, variant: &VariantId) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("pl", "true")
            .append_pair("mts.0", "regular")
            .append_pair("mts.1", "compact")
            .append_pair("cppart", PART_CONDITION)
            .append_pair("parts.0", variant.as_str())
            .append_pair("location", &self.location);
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
