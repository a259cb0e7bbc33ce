//! Core types for Glasskin.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod stock;

pub use id::*;
pub use price::{CurrencyCode, Money, discount_percentage};
pub use stock::StockLevel;
