//! Variant and pricing resolution for a product card.

use rust_decimal::Decimal;

use super::selection::Selection;
use crate::catalog::{Product, ProductOption, ProductVariant};
use crate::types::discount_percentage;

/// Resolved display state of a product card for one selection.
///
/// Everything here is derived from the product and the selection and
/// nothing is cached between calls: after changing the selection, resolve
/// again.
///
/// ```
/// use glasskin_core::{Product, ProductCardLogic, Selection};
///
/// let product: Product = serde_json::from_value(serde_json::json!({
///     "id": "p1", "slug": "sun-milk", "title": "Sun Milk",
///     "price": "40.00", "compare_at_price": "50.00", "stock": true
/// })).unwrap();
///
/// let selection = Selection::new();
/// let logic = ProductCardLogic::resolve(&product, &selection);
/// assert_eq!(logic.discount_percentage, Some(20));
/// assert!(logic.can_add_to_cart);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardLogic<'a> {
    /// The product being shown.
    pub product: &'a Product,
    /// The selection this state was resolved for.
    pub selected: &'a Selection,
    /// Variant matching a complete selection.
    pub matching_variant: Option<&'a ProductVariant>,
    /// Price of the matching variant, else the product's base price.
    pub current_price: Decimal,
    /// Compare-at price of the matching variant, else the product's.
    pub current_compare_at: Option<Decimal>,
    /// Whole-number discount when the compare-at price is higher.
    pub discount_percentage: Option<u8>,
    /// Whether the resolved state can be sold.
    pub in_stock: bool,
    /// Whether every option has a value and the result is in stock.
    pub can_add_to_cart: bool,
    /// Whether the product is configured through options.
    pub has_variants: bool,
}

impl<'a> ProductCardLogic<'a> {
    /// Resolve the card state for `selected`.
    #[must_use]
    pub fn resolve(product: &'a Product, selected: &'a Selection) -> Self {
        let has_variants = product.has_variants();
        let complete = selected.is_complete_for(&product.options);
        let matching_variant = if has_variants && complete {
            find_matching_variant(product, selected)
        } else {
            None
        };

        let (current_price, current_compare_at) = matching_variant.map_or(
            (product.price, product.compare_at_price),
            |v| (v.price, v.compare_at_price),
        );

        let in_stock = match matching_variant {
            Some(variant) => variant.in_stock(),
            None if !has_variants => product.stock.is_in_stock(),
            None => false,
        };

        Self {
            product,
            selected,
            matching_variant,
            current_price,
            current_compare_at,
            discount_percentage: discount_percentage(current_price, current_compare_at),
            in_stock,
            can_add_to_cart: complete && in_stock,
            has_variants,
        }
    }

    /// The product's options, in display order.
    #[must_use]
    pub fn options(&self) -> &'a [ProductOption] {
        &self.product.options
    }

    /// Whether choosing `value` for `option` can still lead to a sellable
    /// variant given the other choices already made.
    ///
    /// A value is available when some in-stock variant carries it and agrees
    /// with every *other* selected option. The current choice for `option`
    /// itself never constrains its alternatives.
    #[must_use]
    pub fn is_option_value_available(&self, option: &str, value: &str) -> bool {
        is_option_value_available(self.product, self.selected, option, value)
    }

    /// The selection after choosing `value` for `option`.
    ///
    /// The resolved state is not updated; resolve again with the result.
    #[must_use]
    pub fn handle_option_change(&self, option: &str, value: &str) -> Selection {
        self.selected.clone().with(option, value)
    }

    /// Image for the current state: the variant override, else the product's
    /// primary image.
    #[must_use]
    pub fn current_image(&self) -> Option<&'a str> {
        self.matching_variant
            .and_then(|v| v.image.as_deref())
            .or_else(|| self.product.primary_image())
    }

    /// Whether the compare-at price should be shown struck through.
    #[must_use]
    pub fn shows_compare_at(&self) -> bool {
        self.current_compare_at
            .is_some_and(|compare_at| compare_at > self.current_price)
    }
}

/// The variant whose values equal `selected` on every product option.
fn find_matching_variant<'a>(
    product: &'a Product,
    selected: &Selection,
) -> Option<&'a ProductVariant> {
    product.variants.iter().find(|variant| {
        product
            .options
            .iter()
            .all(|option| variant.value(&option.name) == selected.get(&option.name))
    })
}

/// Availability check backing [`ProductCardLogic::is_option_value_available`].
#[must_use]
pub fn is_option_value_available(
    product: &Product,
    selected: &Selection,
    option: &str,
    value: &str,
) -> bool {
    product.variants.iter().any(|variant| {
        variant.in_stock()
            && variant.value(option) == Some(value)
            && selected
                .iter()
                .filter(|(name, _)| *name != option && product.option(name).is_some())
                .all(|(name, chosen)| variant.value(name) == Some(chosen))
    })
}
