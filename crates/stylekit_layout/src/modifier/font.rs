//! Font modifiers
//!
//! A font set closer to the content takes precedence, so both modifiers only
//! fill in a font when the content has none.

use crate::view::{ImplicitAnimation, RenderNode, ViewModifier};
use stylekit_animation::{Animatable, AnimatedFontSize};
use stylekit_text::{Font, FontFace, FontSize};

fn apply_font(node: &mut RenderNode, font: impl FnOnce() -> Font) {
    if node.font.is_none() {
        node.font = Some(font());
    }
}

/// Sets a fixed font
#[derive(Clone, Debug, PartialEq)]
pub struct FontModifier {
    font: Font,
}

impl FontModifier {
    pub fn new(font: Font) -> Self {
        Self { font }
    }

    pub fn font(&self) -> &Font {
        &self.font
    }
}

impl ViewModifier for FontModifier {
    fn modify(&self, node: &mut RenderNode) {
        apply_font(node, || self.font.clone());
    }
}

/// Sets a font whose size is driven by an external animation.
///
/// Every render uses the size last written through [`Animatable`] and
/// disables implicit animation of the content, so the text itself does not
/// transition while its size changes.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedFontModifier {
    state: AnimatedFontSize,
}

impl AnimatedFontModifier {
    pub fn new(face: FontFace, size: impl FontSize) -> Self {
        Self {
            state: AnimatedFontSize::new(face, size),
        }
    }

    pub fn face(&self) -> &FontFace {
        self.state.face()
    }

    pub fn size(&self) -> f32 {
        self.state.size()
    }
}

impl Animatable for AnimatedFontModifier {
    fn animatable_data(&self) -> f32 {
        self.state.animatable_data()
    }

    fn set_animatable_data(&mut self, value: f32) {
        self.state.set_animatable_data(value);
    }
}

impl ViewModifier for AnimatedFontModifier {
    fn modify(&self, node: &mut RenderNode) {
        tracing::trace!(
            "render animated font: face={:?}, size={}",
            self.state.face().name(),
            self.state.size()
        );
        node.implicit_animation = ImplicitAnimation::Disabled;
        apply_font(node, || self.state.font());
    }
}
