pub mod app_config;
pub mod catalog;
pub mod config;
pub mod probe;
pub mod stats;
pub mod variant;

use thiserror::Error;

pub use app_config::AppConfig;
pub use catalog::{load_catalog, Catalog, CatalogModel, CatalogPart};
pub use config::{load_app_config, load_app_config_from_env};
pub use probe::{Availability, ProbeResult, StoreAvailability};
pub use stats::RunStats;
pub use variant::{SelectionSet, VariantId, VariantSelection};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[source] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    Validation(String),
}
