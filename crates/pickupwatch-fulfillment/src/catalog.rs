//! Storefront catalog fetch and extraction.
//!
//! The product page assigns its selection data to
//! `window.PRODUCT_SELECTION_BOOTSTRAP` inside a `<script>` tag. The object
//! literal is cut out by brace matching and parsed as JSON; nothing on the
//! page is ever executed. Any deviation from the expected shape yields a
//! [`CatalogError`] and no catalog at all.

use std::sync::LazyLock;
use std::time::Duration;

use pickupwatch_core::{Catalog, CatalogPart, VariantId};
use regex::Regex;
use reqwest::Client;

use crate::error::CatalogError;
use crate::types::ProductSelectionBootstrap;

static BOOTSTRAP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"window\.PRODUCT_SELECTION_BOOTSTRAP\s*=\s*").expect("valid regex")
});

/// Fetches the storefront product page and extracts its variant catalog.
pub struct StorefrontClient {
    client: Client,
}

impl StorefrontClient {
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Downloads `page_url` and extracts the catalog from it.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] on network failure.
    /// - [`CatalogError::UnexpectedStatus`] on a non-2xx status.
    /// - Any extraction error from [`extract_catalog`].
    pub async fn fetch_catalog(&self, page_url: &str) -> Result<Catalog, CatalogError> {
        let response = self.client.get(page_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: page_url.to_owned(),
            });
        }
        let html = response.text().await?;
        let catalog = extract_catalog(&html)?;
        tracing::debug!(
            models = catalog.models.len(),
            page_url,
            "extracted storefront catalog"
        );
        Ok(catalog)
    }
}

/// Extracts the variant catalog from a storefront page.
///
/// # Errors
///
/// - [`CatalogError::MarkerNotFound`]: no bootstrap assignment in the page.
/// - [`CatalogError::Unterminated`]: the literal does not close before `</script>`.
/// - [`CatalogError::Deserialize`]: the literal is not JSON of the expected shape.
/// - [`CatalogError::InvalidProduct`]: a product has a blank part number.
/// - [`CatalogError::Empty`]: the product list is empty.
pub fn extract_catalog(html: &str) -> Result<Catalog, CatalogError> {
    let marker = BOOTSTRAP_RE
        .find(html)
        .ok_or(CatalogError::MarkerNotFound)?;

    let rest = &html[marker.end()..];
    let script = rest
        .find("</script>")
        .map_or(rest, |end| &rest[..end]);
    let literal = extract_balanced_object(script).ok_or(CatalogError::Unterminated)?;

    let bootstrap: ProductSelectionBootstrap =
        serde_json::from_str(literal).map_err(CatalogError::Deserialize)?;

    let products = bootstrap.product_selection_data.products;
    if products.is_empty() {
        return Err(CatalogError::Empty);
    }

    let parts = products
        .into_iter()
        .map(|p| {
            let part_number = VariantId::new(p.part_number).map_err(|_| {
                CatalogError::InvalidProduct(format!(
                    "{} {} {} has a blank part number",
                    p.family_type, p.dimension_capacity, p.dimension_color
                ))
            })?;
            Ok((
                p.family_type,
                CatalogPart {
                    color: p.dimension_color,
                    capacity: p.dimension_capacity,
                    part_number,
                },
            ))
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    Ok(Catalog::from_parts(parts))
}

/// Returns the shortest prefix of `s` forming a complete `{…}` object.
///
/// Tracks brace depth while respecting string literals and escape sequences.
/// Returns `None` if `s` does not start with `{` or the object never closes.
pub(crate) fn extract_balanced_object(s: &str) -> Option<&str> {
    if !s.starts_with('{') {
        return None;
    }
    let mut depth: i32 = 0;
    let mut in_string = false;
    let mut escape = false;
    for (i, c) in s.char_indices() {
        if escape {
            escape = false;
            continue;
        }
        if in_string {
            match c {
                '\\' => escape = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            ']' => depth -= 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
