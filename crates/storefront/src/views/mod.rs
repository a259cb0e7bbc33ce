//! JSON view models served to the rendering layer.

pub mod card;
pub mod sections;

pub use card::{AddToCartView, BadgeView, OptionGroupView, OptionValueView, ProductCardView};
pub use sections::{CollectionView, LandingView, SunComparisonView};
