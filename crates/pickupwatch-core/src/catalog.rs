//! Variant catalog: model × color × capacity → vendor part number.
//!
//! A catalog is built either from the storefront's product list (see the
//! `pickupwatch-fulfillment` crate) or from a static YAML file:
//!
//! ```yaml
//! models:
//!   - name: iPhone 16 Pro
//!     parts:
//!       - { color: Black Titanium, capacity: 256GB, part_number: MYNF3ZP/A }
//! ```

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::variant::{VariantId, VariantSelection};
use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPart {
    pub color: String,
    pub capacity: String,
    pub part_number: VariantId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogModel {
    pub name: String,
    pub parts: Vec<CatalogPart>,
}

impl CatalogModel {
    /// Distinct colors, sorted.
    #[must_use]
    pub fn colors(&self) -> Vec<&str> {
        self.parts
            .iter()
            .map(|p| p.color.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct capacities, sorted.
    #[must_use]
    pub fn capacities(&self) -> Vec<&str> {
        self.parts
            .iter()
            .map(|p| p.capacity.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Finds the part number for a color/capacity combination, if sold.
    #[must_use]
    pub fn part_for(&self, color: &str, capacity: &str) -> Option<&CatalogPart> {
        self.parts
            .iter()
            .find(|p| p.color == color && p.capacity == capacity)
    }

    /// Builds the selection label shown in output, e.g.
    /// `"iPhone 16 Pro 256GB Black Titanium"`.
    #[must_use]
    pub fn selection_for(&self, part: &CatalogPart) -> VariantSelection {
        VariantSelection::new(
            part.part_number.clone(),
            format!("{} {} {}", self.name, part.capacity, part.color),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub models: Vec<CatalogModel>,
}

impl Catalog {
    /// Groups `(model name, part)` pairs by model, keeping models in order of
    /// first appearance.
    pub fn from_parts<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = (String, CatalogPart)>,
    {
        let mut models: Vec<CatalogModel> = Vec::new();
        for (name, part) in parts {
            if let Some(model) = models.iter_mut().find(|m| m.name == name) {
                model.parts.push(part);
            } else {
                models.push(CatalogModel {
                    name,
                    parts: vec![part],
                });
            }
        }
        Self { models }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.iter().all(|m| m.parts.is_empty())
    }

    #[must_use]
    pub fn model(&self, name: &str) -> Option<&CatalogModel> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Resolves a part number to its selection label, if the catalog knows it.
    #[must_use]
    pub fn selection_for_id(&self, id: &VariantId) -> Option<VariantSelection> {
        self.models.iter().find_map(|model| {
            model
                .parts
                .iter()
                .find(|p| &p.part_number == id)
                .map(|p| model.selection_for(p))
        })
    }
}

/// Load and validate a static catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_catalog(&content)
}

/// Parse and validate catalog YAML.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML does not parse or fails validation.
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let catalog: Catalog = serde_yaml::from_str(content).map_err(ConfigError::CatalogFileParse)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

fn validate_catalog(catalog: &Catalog) -> Result<(), ConfigError> {
    if catalog.is_empty() {
        return Err(ConfigError::Validation(
            "catalog must list at least one part".to_string(),
        ));
    }

    let mut seen_models = HashSet::new();
    let mut seen_parts = HashSet::new();

    for model in &catalog.models {
        if model.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "model name must be non-empty".to_string(),
            ));
        }

        if !seen_models.insert(model.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate model: '{}'",
                model.name
            )));
        }

        for part in &model.parts {
            if !seen_parts.insert(&part.part_number) {
                return Err(ConfigError::Validation(format!(
                    "duplicate part number: '{}' (model '{}')",
                    part.part_number, model.name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
