//! Landing sections command.

use std::path::Path;

use glasskin_core::LandingSections;
use glasskin_storefront::catalog::load_catalog;
use glasskin_storefront::views::LandingView;

use super::{CliError, print_json};

/// Build the landing sections, optionally for one collection, and print them.
pub async fn run(path: &Path, collection: Option<&str>) -> Result<(), CliError> {
    let catalog = load_catalog(path).await?;
    let collection = collection
        .map(|slug| {
            catalog
                .collection_by_slug(slug)
                .ok_or_else(|| CliError::UnknownCollection(slug.to_string()))
        })
        .transpose()?;

    let sections = LandingSections::build(&catalog, collection.map(|c| &c.id));
    print_json(&LandingView::new(&catalog, &sections, collection))
}
