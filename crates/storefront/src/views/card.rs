//! Product card view.
//!
//! Projects a resolved [`ProductCardLogic`] into the JSON shape the rendering
//! layer draws: badges, option pickers with only the reachable values,
//! formatted prices and the add button state.

use std::sync::LazyLock;

use glasskin_core::{Catalog, ProductCardLogic, ProductOption, Selection};
use regex::Regex;
use serde::Serialize;

/// Regex for matching HTML tags in product descriptions.
static MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid regex"));

/// Add button label for sellable states.
pub const ADD_LABEL: &str = "Add";

/// Add button label (and badge text) for sold out states.
pub const OUT_OF_STOCK_LABEL: &str = "Out of stock";

/// Product card display data.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCardView {
    pub slug: String,
    pub title: String,
    /// Description with markup removed.
    pub description: Option<String>,
    /// Image URL; `None` means the renderer shows its placeholder.
    pub image: Option<String>,
    pub badges: Vec<BadgeView>,
    /// Option pickers, empty for products without options.
    pub options: Vec<OptionGroupView>,
    pub price: String,
    /// Struck-through price, present only when above the current price.
    pub compare_at_price: Option<String>,
    pub discount_percentage: Option<u8>,
    pub in_stock: bool,
    pub add_to_cart: AddToCartView,
    /// Variant matching the selection.
    pub variant_id: Option<String>,
    pub selection: Selection,
}

/// Card badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BadgeView {
    Discount { label: String },
    Featured,
    OutOfStock,
}

/// Picker for one product option.
#[derive(Debug, Clone, Serialize)]
pub struct OptionGroupView {
    pub name: String,
    pub values: Vec<OptionValueView>,
}

/// One selectable option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionValueView {
    pub value: String,
    pub selected: bool,
    /// Another value of the same option is selected.
    pub dimmed: bool,
    /// Swatch color, Color option only.
    pub swatch: Option<String>,
}

/// Add-to-cart button state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddToCartView {
    pub enabled: bool,
    pub label: &'static str,
}

impl ProductCardView {
    /// Build the view for a resolved card.
    #[must_use]
    pub fn new(catalog: &Catalog, logic: &ProductCardLogic<'_>) -> Self {
        let product = logic.product;

        let options = if logic.has_variants {
            logic
                .options()
                .iter()
                .map(|option| option_group(logic, option))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            slug: product.slug.clone(),
            title: product.title.clone(),
            description: product.description.as_deref().and_then(strip_markup),
            image: logic.current_image().map(ToString::to_string),
            badges: badges(logic),
            options,
            price: catalog.money(logic.current_price).display(),
            compare_at_price: logic
                .current_compare_at
                .filter(|_| logic.shows_compare_at())
                .map(|amount| catalog.money(amount).display()),
            discount_percentage: logic.discount_percentage,
            in_stock: logic.in_stock,
            add_to_cart: AddToCartView {
                enabled: logic.can_add_to_cart,
                label: if logic.in_stock {
                    ADD_LABEL
                } else {
                    OUT_OF_STOCK_LABEL
                },
            },
            variant_id: logic.matching_variant.map(|v| v.id.to_string()),
            selection: logic.selected.clone(),
        }
    }
}

fn badges(logic: &ProductCardLogic<'_>) -> Vec<BadgeView> {
    let mut badges = Vec::new();
    if let Some(pct) = logic.discount_percentage.filter(|pct| *pct > 0) {
        badges.push(BadgeView::Discount {
            label: format!("-{pct}%"),
        });
    }
    if logic.product.featured {
        badges.push(BadgeView::Featured);
    }
    if !logic.in_stock {
        badges.push(BadgeView::OutOfStock);
    }
    badges
}

fn option_group(logic: &ProductCardLogic<'_>, option: &ProductOption) -> OptionGroupView {
    let chosen = logic.selected.get(&option.name);
    let values = option
        .values
        .iter()
        .filter(|value| logic.is_option_value_available(&option.name, value))
        .map(|value| {
            let selected = chosen == Some(value.as_str());
            OptionValueView {
                value: value.clone(),
                selected,
                dimmed: chosen.is_some() && !selected,
                swatch: option.swatch(value).map(ToString::to_string),
            }
        })
        .collect();

    OptionGroupView {
        name: option.name.clone(),
        values,
    }
}

/// Remove HTML tags, returning `None` when nothing but whitespace remains.
#[must_use]
pub fn strip_markup(html: &str) -> Option<String> {
    let text = MARKUP_RE.replace_all(html, "");
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json_str(
            &json!({
                "currency_code": "USD",
                "products": [
                    {
                        "id": "p-cushion", "slug": "glow-cushion", "title": "Glow Cushion",
                        "description": "<p>Dewy <b>glass skin</b> finish.</p>",
                        "price": "38.00", "compare_at_price": "45.00", "featured": true,
                        "images": ["https://cdn.example/cushion.jpg"],
                        "options": [
                            { "name": "Color", "values": ["Pink", "Green"],
                              "swatches": { "Pink": "#f4b6c2", "Green": "#b5d3b0" } },
                            { "name": "Size", "values": ["30ml", "50ml"] }
                        ],
                        "variants": [
                            { "id": "pink-30", "options": { "Color": "Pink", "Size": "30ml" }, "price": "38.00", "stock": 0 },
                            { "id": "pink-50", "options": { "Color": "Pink", "Size": "50ml" }, "price": "40.00", "compare_at_price": "50.00", "stock": 4 },
                            { "id": "green-30", "options": { "Color": "Green", "Size": "30ml" }, "price": "38.00", "stock": 7 },
                            { "id": "green-50", "options": { "Color": "Green", "Size": "50ml" }, "price": "44.00", "stock": 1 }
                        ]
                    },
                    { "id": "p-toner", "slug": "rice-toner", "title": "Rice Toner", "price": "18.00" }
                ]
            })
            .to_string(),
        )
        .unwrap()
    }

    fn view(catalog: &Catalog, slug: &str, selection: &Selection) -> ProductCardView {
        let product = catalog.product(slug).unwrap();
        let logic = ProductCardLogic::resolve(product, selection);
        ProductCardView::new(catalog, &logic)
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(
            strip_markup("<p>Hello <em>there</em></p>").as_deref(),
            Some("Hello there")
        );
        assert_eq!(strip_markup("<br/> "), None);
    }

    #[test]
    fn test_fresh_card_with_options() {
        let catalog = catalog();
        let card = view(&catalog, "glow-cushion", &Selection::new());

        assert_eq!(card.description.as_deref(), Some("Dewy glass skin finish."));
        assert_eq!(card.price, "$38.00");
        assert_eq!(card.compare_at_price.as_deref(), Some("$45.00"));
        assert_eq!(
            card.badges,
            vec![
                BadgeView::Discount {
                    label: "-16%".to_string()
                },
                BadgeView::Featured,
                BadgeView::OutOfStock,
            ]
        );
        assert!(!card.add_to_cart.enabled);
        assert_eq!(card.add_to_cart.label, OUT_OF_STOCK_LABEL);
        assert_eq!(card.options.len(), 2);
    }

    #[test]
    fn test_selected_pink_hides_sold_out_size() {
        let catalog = catalog();
        let selection = Selection::new().with("Color", "Pink");
        let card = view(&catalog, "glow-cushion", &selection);

        let color = card.options.first().unwrap();
        let pink = color.values.iter().find(|v| v.value == "Pink").unwrap();
        let green = color.values.iter().find(|v| v.value == "Green").unwrap();
        assert!(pink.selected && !pink.dimmed);
        assert!(!green.selected && green.dimmed);
        assert_eq!(pink.swatch.as_deref(), Some("#f4b6c2"));

        let sizes: Vec<_> = card
            .options
            .get(1)
            .unwrap()
            .values
            .iter()
            .map(|v| v.value.as_str())
            .collect();
        assert_eq!(sizes, vec!["50ml"]);
        assert!(card.options.get(1).unwrap().values.iter().all(|v| v.swatch.is_none()));
    }

    #[test]
    fn test_resolved_variant_card() {
        let catalog = catalog();
        let selection = Selection::new().with("Color", "Pink").with("Size", "50ml");
        let card = view(&catalog, "glow-cushion", &selection);

        assert_eq!(card.variant_id.as_deref(), Some("pink-50"));
        assert_eq!(card.price, "$40.00");
        assert_eq!(card.compare_at_price.as_deref(), Some("$50.00"));
        assert_eq!(card.discount_percentage, Some(20));
        assert!(card.add_to_cart.enabled);
        assert_eq!(card.add_to_cart.label, ADD_LABEL);
        assert!(!card.badges.contains(&BadgeView::OutOfStock));
        assert_eq!(card.image.as_deref(), Some("https://cdn.example/cushion.jpg"));
    }

    #[test]
    fn test_simple_product_card() {
        let catalog = catalog();
        let card = view(&catalog, "rice-toner", &Selection::new());

        assert!(card.options.is_empty());
        assert!(card.badges.is_empty());
        assert!(card.image.is_none());
        assert!(card.description.is_none());
        assert_eq!(card.compare_at_price, None);
        assert!(card.add_to_cart.enabled);
    }

    #[test]
    fn test_badge_serialization() {
        let json = serde_json::to_value(BadgeView::Discount {
            label: "-20%".to_string(),
        })
        .unwrap();
        assert_eq!(json, json!({ "kind": "discount", "label": "-20%" }));
        assert_eq!(
            serde_json::to_value(BadgeView::OutOfStock).unwrap(),
            json!({ "kind": "out_of_stock" })
        );
    }
}
