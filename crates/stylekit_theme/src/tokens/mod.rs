//! Design tokens
//!
//! Tokens are the atomic values that make up a design system:
//! - Typography (the font size scale)
//! - Spacing (margins, padding)

mod spacing;
mod typography;

pub use spacing::*;
pub use typography::*;
