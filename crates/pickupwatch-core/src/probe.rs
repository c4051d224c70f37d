use serde::{Deserialize, Serialize};

use crate::variant::VariantSelection;

/// A store currently offering pickup for a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreAvailability {
    pub store_name: String,
    /// Vendor-supplied pickup estimate, e.g. `"Available today"`.
    pub pickup_quote: String,
}

/// Outcome of one availability check.
///
/// `Unknown` covers every case where the answer could not be determined
/// (transport failure after retries, malformed response, faulted probe).
/// It is displayed exactly like `Unavailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Unavailable,
    Unknown,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::Available => write!(f, "available"),
            Availability::Unavailable => write!(f, "unavailable"),
            Availability::Unknown => write!(f, "unknown"),
        }
    }
}

/// Result of probing one selected variant during one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub selection: VariantSelection,
    pub availability: Availability,
    /// Stores reporting availability, in response order. Empty unless available.
    pub stores: Vec<StoreAvailability>,
}

impl ProbeResult {
    /// Builds a result from the stores found available.
    ///
    /// A non-empty list means `Available`; an empty list means `Unavailable`.
    #[must_use]
    pub fn from_stores(selection: VariantSelection, stores: Vec<StoreAvailability>) -> Self {
        let availability = if stores.is_empty() {
            Availability::Unavailable
        } else {
            Availability::Available
        };
        Self {
            selection,
            availability,
            stores,
        }
    }

    /// A result for a variant whose stock could not be determined.
    #[must_use]
    pub fn unknown(selection: VariantSelection) -> Self {
        Self {
            selection,
            availability: Availability::Unknown,
            stores: Vec::new(),
        }
    }

    #[must_use]
    pub fn available(&self) -> bool {
        self.availability == Availability::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::VariantId;

    fn selection() -> VariantSelection {
        VariantSelection::new(VariantId::new("MYNF3ZP/A").unwrap(), "iPhone 16 Pro")
    }

    #[test]
    fn from_stores_marks_available_when_non_empty() {
        let result = ProbeResult::from_stores(
            selection(),
            vec![StoreAvailability {
                store_name: "Taipei 101".to_string(),
                pickup_quote: "Today".to_string(),
            }],
        );
        assert!(result.available());
        assert_eq!(result.availability, Availability::Available);
    }

    #[test]
    fn from_stores_marks_unavailable_when_empty() {
        let result = ProbeResult::from_stores(selection(), vec![]);
        assert!(!result.available());
        assert_eq!(result.availability, Availability::Unavailable);
    }

    #[test]
    fn unknown_is_not_available_and_has_no_stores() {
        let result = ProbeResult::unknown(selection());
        assert!(!result.available());
        assert!(result.stores.is_empty());
        assert_eq!(result.availability.to_string(), "unknown");
    }
}
