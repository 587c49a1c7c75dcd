//! Stylekit animation channels
//!
//! stylekit does not run animations. A host animation driver interpolates a
//! single scalar per modifier and writes each frame's value back through
//! [`Animatable`]; the modifier renders with whatever value it holds.
//!
//! - **Animatable**: the read/write channel a driver interpolates
//! - **AnimatedFontSize**: a font face whose size is that channel

pub mod animatable;
pub mod font_size;

pub use animatable::Animatable;
pub use font_size::AnimatedFontSize;
