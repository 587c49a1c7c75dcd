//! Stylekit view modifiers
//!
//! Declarative styling helpers on top of a minimal view abstraction:
//!
//! - **Fonts**: apply a [`FontFace`](stylekit_text::FontFace) at a size
//! - **Animated fonts**: expose the font size to an external animation driver
//! - **Padding**: per-edge, per-axis and system-default padding
//!
//! # Example
//!
//! ```rust
//! use stylekit_layout::prelude::*;
//! use stylekit_text::{FontDesign, FontFace, FontWeight};
//!
//! let face = FontFace::system(FontWeight::Bold, FontDesign::Rounded);
//! let view = text("Score")
//!     .with_animated_font(&face, 10.0)
//!     .padding_axes(4.0, 8.0);
//!
//! let node = view.render();
//! assert_eq!(node.font.map(|f| f.size()), Some(10.0));
//! assert_eq!(node.implicit_animation, ImplicitAnimation::Disabled);
//! ```

pub mod insets;
pub mod modifier;
pub mod view;

pub use insets::{EdgeInsets, Padding};
pub use modifier::{AnimatedFontModifier, DisableAnimation, FontModifier, PaddingModifier};
pub use view::{text, ImplicitAnimation, ModifiedView, RenderNode, Text, View, ViewModifier};

/// Commonly used types
pub mod prelude {
    pub use crate::insets::{EdgeInsets, Padding};
    pub use crate::view::{text, ImplicitAnimation, RenderNode, Text, View, ViewModifier};
    pub use stylekit_animation::Animatable;
}
