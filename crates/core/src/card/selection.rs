//! Option selections and per-card state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductOption};
use crate::types::ProductId;

/// The in-progress choice of one value per option.
///
/// Starts empty and grows as values are picked. Choosing a value for an
/// option that already has one replaces it; nothing ever removes an entry.
/// No validation happens here: incompatible combinations show up in the
/// resolver's `can_add_to_cart` and availability checks instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, String>);

impl Selection {
    /// An empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value chosen for `option`, if any.
    #[must_use]
    pub fn get(&self, option: &str) -> Option<&str> {
        self.0.get(option).map(String::as_str)
    }

    /// Set `option` to `value`, leaving other choices untouched.
    pub fn choose(&mut self, option: impl Into<String>, value: impl Into<String>) {
        self.0.insert(option.into(), value.into());
    }

    /// Builder form of [`Selection::choose`].
    #[must_use]
    pub fn with(mut self, option: impl Into<String>, value: impl Into<String>) -> Self {
        self.choose(option, value);
        self
    }

    /// Whether nothing has been chosen yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of chosen options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate `(option, value)` pairs in option-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether every option in `options` has a chosen value.
    ///
    /// Vacuously true when there are no options.
    #[must_use]
    pub fn is_complete_for(&self, options: &[ProductOption]) -> bool {
        options.iter().all(|o| self.0.contains_key(&o.name))
    }
}


/// Selection state owned by a single product card.
///
/// The selection belongs to one product identity: binding the state to a
/// different product starts over with an empty selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    product_id: ProductId,
    selection: Selection,
}

impl CardState {
    /// Fresh state for `product`.
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            selection: Selection::new(),
        }
    }

    /// Rebind to `product`, clearing the selection if the identity changed.
    ///
    /// Returns `true` when the selection was reset.
    pub fn sync(&mut self, product: &Product) -> bool {
        if self.product_id == product.id {
            return false;
        }
        self.product_id = product.id.clone();
        self.selection = Selection::new();
        true
    }

    /// Apply an option change and return the updated selection.
    pub fn handle_option_change(
        &mut self,
        option: impl Into<String>,
        value: impl Into<String>,
    ) -> &Selection {
        self.selection.choose(option, value);
        &self.selection
    }

    /// The product this state is bound to.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }
}
