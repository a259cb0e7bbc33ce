//! Stock availability for products and variants.

use serde::{Deserialize, Serialize};

/// Stock availability as reported by the catalog.
///
/// Catalog exports carry either a plain availability flag or a tracked
/// quantity; both deserialize into this type:
///
/// ```
/// use glasskin_core::StockLevel;
///
/// let flag: StockLevel = serde_json::from_str("true").unwrap();
/// let qty: StockLevel = serde_json::from_str("0").unwrap();
/// assert!(flag.is_in_stock());
/// assert!(!qty.is_in_stock());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StockLevel {
    /// Availability flag without inventory tracking.
    Available(bool),
    /// Tracked inventory quantity. Negative values mean oversold.
    Quantity(i64),
}

impl StockLevel {
    /// Whether at least one unit can be sold.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        match *self {
            Self::Available(flag) => flag,
            Self::Quantity(qty) => qty > 0,
        }
    }
}

impl Default for StockLevel {
    fn default() -> Self {
        Self::Available(true)
    }
}

impl From<bool> for StockLevel {
    fn from(flag: bool) -> Self {
        Self::Available(flag)
    }
}

impl From<i64> for StockLevel {
    fn from(qty: i64) -> Self {
        Self::Quantity(qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_in_stock_only_when_positive() {
        assert!(StockLevel::Quantity(3).is_in_stock());
        assert!(!StockLevel::Quantity(0).is_in_stock());
        assert!(!StockLevel::Quantity(-2).is_in_stock());
    }

    #[test]
    fn test_flag() {
        assert!(StockLevel::from(true).is_in_stock());
        assert!(!StockLevel::from(false).is_in_stock());
    }

    #[test]
    fn test_default_is_available() {
        assert!(StockLevel::default().is_in_stock());
    }
}
