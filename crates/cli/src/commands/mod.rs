//! CLI command implementations.

pub mod card;
pub mod check;
pub mod sections;

use glasskin_storefront::catalog::CatalogLoadError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The catalog could not be read or is invalid.
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),

    /// No product has the given slug.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// No collection has the given slug.
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    /// Output could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print a value as pretty JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}
