//! Headless product card logic.
//!
//! [`ProductCardLogic`] is everything a rendering layer needs to draw a
//! product card: the matching variant, effective prices, discount, stock and
//! add-to-cart gating, plus per-value availability for option pickers.
//! [`Selection`] and [`CardState`] hold the caller-owned choice it is
//! resolved against.

mod logic;
mod selection;

pub use logic::{ProductCardLogic, is_option_value_available};
pub use selection::{CardState, Selection};
