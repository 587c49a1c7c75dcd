//! Font face with an animatable size

use crate::animatable::Animatable;
use stylekit_text::{Font, FontFace, FontSize};

/// A font face whose size is driven by an animation.
///
/// The face is fixed; the size is the only animatable channel.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedFontSize {
    face: FontFace,
    size: f32,
}

impl AnimatedFontSize {
    pub fn new(face: FontFace, size: impl FontSize) -> Self {
        Self {
            face,
            size: size.points(),
        }
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    /// Current size, possibly mid-interpolation
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Font at the current size
    pub fn font(&self) -> Font {
        self.face.to_font(self.size)
    }
}

impl Animatable for AnimatedFontSize {
    fn animatable_data(&self) -> f32 {
        self.size
    }

    fn set_animatable_data(&mut self, value: f32) {
        tracing::trace!("animated font size: {} -> {}", self.size, value);
        self.size = value;
    }
}
