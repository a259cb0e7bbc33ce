//! Product card preview command.
//!
//! Option changes go through the same card state the storefront uses, so
//! the printed card is what a shopper sees after clicking those values in
//! order.

use std::path::Path;

use glasskin_core::{CardState, ProductCardLogic};
use glasskin_storefront::catalog::load_catalog;
use glasskin_storefront::views::ProductCardView;

use super::{CliError, print_json};

/// Parse a `Name=Value` option change.
///
/// # Errors
///
/// Returns a message when there is no `=` or either side is empty.
pub fn parse_option_change(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected Name=Value, got {raw:?}"))?;
    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() || value.is_empty() {
        return Err(format!("expected Name=Value, got {raw:?}"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Resolve a card after applying `changes` and print it.
pub async fn run(path: &Path, slug: &str, changes: &[(String, String)]) -> Result<(), CliError> {
    let catalog = load_catalog(path).await?;
    let product = catalog
        .product(slug)
        .ok_or_else(|| CliError::UnknownProduct(slug.to_string()))?;

    let mut state = CardState::new(product);
    for (option, value) in changes {
        if product.option(option).is_none() {
            tracing::warn!(option = %option, "Product has no such option; ignored by resolution");
        }
        state.handle_option_change(option.as_str(), value.as_str());
    }

    let logic = ProductCardLogic::resolve(product, state.selection());
    print_json(&ProductCardView::new(&catalog, &logic))
}
