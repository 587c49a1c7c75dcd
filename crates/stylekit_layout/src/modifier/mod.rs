//! Built-in view modifiers

mod animation;
mod font;
mod padding;

pub use animation::DisableAnimation;
pub use font::{AnimatedFontModifier, FontModifier};
pub use padding::PaddingModifier;
