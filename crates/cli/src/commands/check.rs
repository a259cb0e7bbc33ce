//! Catalog validation command.
//!
//! # Usage
//!
//! ```bash
//! gs-cli check catalog.json
//! ```

use std::path::Path;

use glasskin_storefront::catalog::load_catalog;

use super::CliError;

/// Load and validate a catalog, then print a summary.
pub async fn run(path: &Path) -> Result<(), CliError> {
    let catalog = load_catalog(path).await?;

    let variants: usize = catalog.products.iter().map(|p| p.variants.len()).sum();
    let sold_out = catalog
        .products
        .iter()
        .filter(|p| !p.has_variants() && !p.stock.is_in_stock())
        .count();

    #[allow(clippy::print_stdout)]
    {
        println!("{} is valid", path.display());
        println!("  currency:    {}", catalog.currency_code);
        println!("  collections: {}", catalog.collections.len());
        println!("  products:    {}", catalog.products.len());
        println!("  variants:    {variants}");
        println!("  sold out:    {sold_out}");
    }
    Ok(())
}
