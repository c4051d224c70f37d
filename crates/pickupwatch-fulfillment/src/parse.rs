//! Extraction of available stores from a fulfillment-lookup body.

use pickupwatch_core::{StoreAvailability, VariantId};

use crate::error::FulfillmentError;
use crate::types::{FulfillmentResponse, PartAvailability};

/// `pickupDisplay` value marking a store that can hand the part over.
const PICKUP_AVAILABLE: &str = "available";

/// Parses `body` and returns the stores offering pickup for `variant`, in
/// response order.
///
/// # Errors
///
/// - [`FulfillmentError::Deserialize`] if the body is not JSON or lacks the
///   `body.content.pickupMessage.stores` path.
/// - [`FulfillmentError::MalformedResponse`] if a store has no usable entry
///   for `variant`, or an available store has no pickup quote.
pub fn available_stores(
    body: &str,
    variant: &VariantId,
) -> Result<Vec<StoreAvailability>, FulfillmentError> {
    let response: FulfillmentResponse =
        serde_json::from_str(body).map_err(|e| FulfillmentError::Deserialize {
            context: format!("fulfillment lookup for {variant}"),
            source: e,
        })?;

    let mut stores = Vec::new();
    for store in response.body.content.pickup_message.stores {
        let entry = store
            .parts_availability
            .get(variant.as_str())
            .ok_or_else(|| FulfillmentError::MalformedResponse {
                variant: variant.to_string(),
                reason: format!("store '{}' has no availability entry", store.store_name),
            })?;

        let part: PartAvailability = serde_json::from_value(entry.clone()).map_err(|e| {
            FulfillmentError::MalformedResponse {
                variant: variant.to_string(),
                reason: format!("store '{}': {e}", store.store_name),
            }
        })?;

        if part.pickup_display != PICKUP_AVAILABLE {
            continue;
        }

        let pickup_quote =
            part.pickup_search_quote
                .ok_or_else(|| FulfillmentError::MalformedResponse {
                    variant: variant.to_string(),
                    reason: format!(
                        "store '{}' is available but has no pickup quote",
                        store.store_name
                    ),
                })?;

        stores.push(StoreAvailability {
            store_name: store.store_name,
            pickup_quote,
        });
    }

    Ok(stores)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
