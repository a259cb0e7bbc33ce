//! Glasskin Core - Headless storefront logic.
//!
//! This crate provides the catalog model and the product card logic used by
//! every Glasskin component:
//! - `storefront` - JSON API consumed by the rendering layer
//! - `cli` - Command-line tools for catalog checks and offline inspection
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no logging. Every value it computes is derived from its inputs, so the
//! same catalog and selection always resolve to the same card.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, money and stock levels
//! - [`catalog`] - Products, options, variants and collections, with validation
//! - [`card`] - Variant and pricing resolution for a product card
//! - [`sections`] - Tag-driven landing page sections

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod card;
pub mod catalog;
pub mod sections;
pub mod types;

pub use card::{CardState, ProductCardLogic, Selection};
pub use catalog::{Catalog, CatalogError, Collection, Product, ProductOption, ProductVariant};
pub use sections::{LandingSections, SunComparison};
pub use types::*;
