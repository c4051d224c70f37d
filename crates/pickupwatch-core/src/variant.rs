use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Vendor part number identifying one purchasable SKU (e.g. `"MYNF3ZP/A"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VariantId(String);

impl VariantId {
    /// Wraps a part number, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the part number is empty.
    pub fn new(raw: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Validation(
                "part number must be non-empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl TryFrom<String> for VariantId {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VariantId> for String {
    fn from(value: VariantId) -> Self {
        value.0
    }
}

impl std::str::FromStr for VariantId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A variant the user asked to watch, with the label shown in output and
/// notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSelection {
    id: VariantId,
    label: String,
}

impl VariantSelection {
    #[must_use]
    pub fn new(id: VariantId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &VariantId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered selections with unique part numbers.
///
/// The first selection of a part number wins; later duplicates are rejected.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    seen: HashSet<VariantId>,
    selections: Vec<VariantSelection>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `selection` unless its part number is already present.
    ///
    /// Returns `false` when the selection was rejected as a duplicate.
    pub fn insert(&mut self, selection: VariantSelection) -> bool {
        if !self.seen.insert(selection.id.clone()) {
            return false;
        }
        self.selections.push(selection);
        true
    }

    #[must_use]
    pub fn contains(&self, id: &VariantId) -> bool {
        self.seen.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[VariantSelection] {
        &self.selections
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<VariantSelection> {
        self.selections
    }
}

impl FromIterator<VariantSelection> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = VariantSelection>>(iter: I) -> Self {
        let mut set = Self::new();
        for selection in iter {
            set.insert(selection);
        }
        set
    }
}
