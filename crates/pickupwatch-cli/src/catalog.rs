//! Catalog resolution and the `catalog` command.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Context;
use colored::Colorize;
use pickupwatch_core::{AppConfig, Catalog};
use pickupwatch_fulfillment::StorefrontClient;

/// Loads the catalog from `PICKUPWATCH_CATALOG_PATH` when set, otherwise
/// from the storefront page.
///
/// # Errors
///
/// Returns an error if neither source yields a catalog; there is no
/// fallback between them.
pub(crate) async fn resolve_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    if let Some(path) = &config.catalog_path {
        let catalog = pickupwatch_core::load_catalog(path)?;
        tracing::debug!(path = %path.display(), models = catalog.models.len(), "loaded catalog file");
        return Ok(catalog);
    }

    let client = StorefrontClient::new(
        Duration::from_secs(config.request_timeout_secs),
        &config.user_agent,
    )?;
    client
        .fetch_catalog(&config.catalog_url)
        .await
        .with_context(|| {
            format!(
                "could not load the variant catalog from {}; set PICKUPWATCH_CATALOG_PATH to use a catalog file",
                config.catalog_url
            )
        })
}

/// Prints every model with its colors, capacities and part numbers.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub(crate) async fn run_catalog(config: &AppConfig) -> anyhow::Result<()> {
    let catalog = resolve_catalog(config).await?;
    write_catalog(&catalog, &mut io::stdout())?;
    Ok(())
}

fn write_catalog<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    for model in &catalog.models {
        writeln!(out, "{}", model.name.bold())?;
        writeln!(out, "  colors:     {}", model.colors().join(", "))?;
        writeln!(out, "  capacities: {}", model.capacities().join(", "))?;
        for part in &model.parts {
            writeln!(
                out,
                "  {:<12}{:<10}{}",
                part.part_number, part.capacity, part.color
            )?;
        }
    }
    Ok(())
}
