//! Wire types for the fulfillment-lookup and storefront bootstrap payloads.
//!
//! ## Fulfillment lookup (`GET fulfillment-messages`)
//!
//! Only the path the prober reads is modelled:
//!
//! ```json
//! { "body": { "content": { "pickupMessage": { "stores": [
//!     { "storeName": "Taipei 101",
//!       "partsAvailability": {
//!         "MYNF3ZP/A": { "pickupDisplay": "available",
//!                        "pickupSearchQuote": "Available today" } } } ] } } } }
//! ```
//!
//! Real responses carry many more fields per store and per part; serde skips
//! them. `partsAvailability` is kept as raw JSON per part so an odd entry for
//! an unrelated part never fails the whole response.
//!
//! `pickupDisplay` is `"available"` when the store can hand the part over;
//! other observed values are `"unavailable"` and `"ineligible"`.
//! `pickupSearchQuote` is only read for available stores.
//!
//! ## Storefront bootstrap (`window.PRODUCT_SELECTION_BOOTSTRAP`)
//!
//! `productSelectionData.products[]`, each carrying `familyType`,
//! `dimensionColor`, `dimensionCapacity` and `partNumber`.

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FulfillmentResponse {
    pub body: FulfillmentBody,
}

#[derive(Debug, Deserialize)]
pub struct FulfillmentBody {
    pub content: FulfillmentContent,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentContent {
    pub pickup_message: PickupMessage,
}

#[derive(Debug, Deserialize)]
pub struct PickupMessage {
    pub stores: Vec<PickupStore>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickupStore {
    pub store_name: String,
    /// Keyed by part number.
    pub parts_availability: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartAvailability {
    pub pickup_display: String,
    #[serde(default)]
    pub pickup_search_quote: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSelectionBootstrap {
    pub product_selection_data: ProductSelectionData,
}

#[derive(Debug, Deserialize)]
pub struct ProductSelectionData {
    pub products: Vec<BootstrapProduct>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapProduct {
    /// Model family, e.g. `"iPhone 16 Pro"`.
    pub family_type: String,
    pub dimension_color: String,
    pub dimension_capacity: String,
    pub part_number: String,
}
