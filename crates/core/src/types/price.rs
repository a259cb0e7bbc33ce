//! Type-safe money representation using decimal arithmetic.
//!
//! Prices travel through the resolver as bare [`Decimal`] amounts; the
//! currency is a property of the catalog. [`Money`] pairs the two at the
//! edge, where an amount is formatted for display.

use core::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// An amount with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Create a new money value.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Format for display (e.g., "$19.99").
    ///
    /// ```
    /// use glasskin_core::{CurrencyCode, Money};
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::new(Decimal::new(4000, 2), CurrencyCode::USD);
    /// assert_eq!(price.display(), "$40.00");
    /// ```
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = self.currency_code.minor_units();
        let rounded = self
            .amount
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        write!(
            f,
            "{}{:.prec$}",
            self.currency_code.symbol(),
            rounded,
            prec = places as usize
        )
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
    KRW,
}

impl CurrencyCode {
    /// Display symbol placed before the amount.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::KRW => "₩",
        }
    }

    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
            Self::KRW => "KRW",
        }
    }

    /// Number of decimal places shown for this currency.
    #[must_use]
    pub const fn minor_units(&self) -> u32 {
        match self {
            Self::KRW => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Whole-number percentage saved against a compare-at price.
///
/// Defined only when `compare_at` is strictly greater than `price`; the
/// result is `(compare_at - price) / compare_at * 100` rounded half away
/// from zero. The result is capped at 100, which only matters for a
/// negative `price`.
///
/// ```
/// use glasskin_core::discount_percentage;
/// use rust_decimal::Decimal;
///
/// let pct = discount_percentage(Decimal::new(40, 0), Some(Decimal::new(50, 0)));
/// assert_eq!(pct, Some(20));
/// ```
#[must_use]
pub fn discount_percentage(price: Decimal, compare_at: Option<Decimal>) -> Option<u8> {
    let compare_at = compare_at?;
    if compare_at <= price || compare_at <= Decimal::ZERO {
        return None;
    }

    let ratio = (compare_at - price) / compare_at * Decimal::ONE_HUNDRED;
    ratio
        .min(Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap_or_default()
    }

    #[test]
    fn test_display_usd() {
        let money = Money::new(dec("40"), CurrencyCode::USD);
        assert_eq!(money.display(), "$40.00");
    }

    #[test]
    fn test_display_rounds_to_minor_units() {
        let money = Money::new(dec("12.345"), CurrencyCode::EUR);
        assert_eq!(money.display(), "€12.35");
    }

    #[test]
    fn test_display_krw_has_no_decimals() {
        let money = Money::new(dec("25000"), CurrencyCode::KRW);
        assert_eq!(money.display(), "₩25000");
    }

    #[test]
    fn test_discount_fifty_to_forty() {
        assert_eq!(discount_percentage(dec("40"), Some(dec("50"))), Some(20));
    }

    #[test]
    fn test_discount_rounds_half_up() {
        // 1/8 = 12.5% rounds to 13
        assert_eq!(discount_percentage(dec("7"), Some(dec("8"))), Some(13));
        // 1/3 = 33.33% rounds to 33
        assert_eq!(discount_percentage(dec("20"), Some(dec("30"))), Some(33));
    }

    #[test]
    fn test_discount_absent_without_markdown() {
        assert_eq!(discount_percentage(dec("40"), None), None);
        assert_eq!(discount_percentage(dec("40"), Some(dec("40"))), None);
        assert_eq!(discount_percentage(dec("40"), Some(dec("30"))), None);
    }

    #[test]
    fn test_discount_free_item() {
        assert_eq!(discount_percentage(Decimal::ZERO, Some(dec("15"))), Some(100));
    }

    #[test]
    fn test_discount_capped_for_negative_price() {
        // 300% off is reported as 100 rather than dropped.
        assert_eq!(discount_percentage(dec("-20"), Some(dec("10"))), Some(100));
    }

    #[test]
    fn test_discount_tiny_markdown_rounds_to_zero() {
        assert_eq!(discount_percentage(dec("99.99"), Some(dec("100"))), Some(0));
    }
}
