//! Glasskin CLI - Catalog checks and product card previews.
//!
//! # Usage
//!
//! ```bash
//! # Validate a catalog export
//! gs-cli check catalog.json
//!
//! # Preview a card after choosing options in order
//! gs-cli card catalog.json glow-cushion -s Color=Pink -s Size=50ml
//!
//! # Print the landing sections for a collection
//! gs-cli sections catalog.json --collection sun-care
//! ```
//!
//! # Commands
//!
//! - `check` - Parse and validate a catalog
//! - `card` - Resolve a product card and print it as JSON
//! - `sections` - Build the landing sections and print them as JSON

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gs-cli")]
#[command(author, version, about = "Glasskin CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate a catalog export
    Check {
        /// Path to the catalog JSON file
        catalog: PathBuf,
    },
    /// Resolve a product card and print it as JSON
    Card {
        /// Path to the catalog JSON file
        catalog: PathBuf,

        /// Product slug
        slug: String,

        /// Option change as `Name=Value`, applied in order
        #[arg(short, long = "select", value_parser = commands::card::parse_option_change)]
        select: Vec<(String, String)>,
    },
    /// Print the landing sections as JSON
    Sections {
        /// Path to the catalog JSON file
        catalog: PathBuf,

        /// Only include products from this collection
        #[arg(short, long)]
        collection: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Check { catalog } => commands::check::run(&catalog).await,
        Commands::Card {
            catalog,
            slug,
            select,
        } => commands::card::run(&catalog, &slug, &select).await,
        Commands::Sections {
            catalog,
            collection,
        } => commands::sections::run(&catalog, collection.as_deref()).await,
    }
}
