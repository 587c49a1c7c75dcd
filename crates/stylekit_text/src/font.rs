//! Fonts resolved at a size

use crate::face::FontDesign;
use crate::weight::FontWeight;

/// Anything that can be used as a font size in points.
///
/// Implemented for plain floats and meant to be implemented by closed size
/// scales, so a design system can name its sizes once and share a single
/// font path:
///
/// ```rust
/// use stylekit_text::{FontFace, FontSize};
///
/// #[derive(Clone, Copy)]
/// enum Scale {
///     Body,
///     Title,
/// }
///
/// impl FontSize for Scale {
///     fn points(&self) -> f32 {
///         match self {
///             Scale::Body => 16.0,
///             Scale::Title => 28.0,
///         }
///     }
/// }
///
/// let face = FontFace::default();
/// assert_eq!(face.to_font(Scale::Body), face.to_font(16.0));
/// ```
pub trait FontSize {
    fn points(&self) -> f32;
}

impl FontSize for f32 {
    fn points(&self) -> f32 {
        *self
    }
}

impl FontSize for f64 {
    fn points(&self) -> f32 {
        *self as f32
    }
}

impl<T: FontSize + ?Sized> FontSize for &T {
    fn points(&self) -> f32 {
        (**self).points()
    }
}

/// Family a font resolves to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A font family registered under this name
    Named(String),
    /// The platform system font in the given design
    System(FontDesign),
}

/// A font face at a specific size
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f32,
    weight: FontWeight,
}

impl Font {
    pub fn new(family: FontFamily, size: f32, weight: FontWeight) -> Self {
        Self {
            family,
            size,
            weight,
        }
    }

    /// The system font with the default design
    pub fn system(size: f32, weight: FontWeight) -> Self {
        Self::new(FontFamily::System(FontDesign::Default), size, weight)
    }

    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Font size in points
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Family name for named fonts, `None` for the system font
    pub fn name(&self) -> Option<&str> {
        match &self.family {
            FontFamily::Named(name) => Some(name),
            FontFamily::System(_) => None,
        }
    }

    /// Same font at another size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Same font with another weight applied on top
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_sizes() {
        assert_eq!(12.5f32.points(), 12.5);
        assert_eq!(12.5f64.points(), 12.5);
        assert_eq!((&18.0f32).points(), 18.0);
    }

    #[test]
    fn test_name_only_for_named_family() {
        let named = Font::new(
            FontFamily::Named("Inter".to_string()),
            14.0,
            FontWeight::Regular,
        );
        assert_eq!(named.name(), Some("Inter"));
        assert_eq!(Font::system(14.0, FontWeight::Regular).name(), None);
    }

    #[test]
    fn test_with_weight_overrides() {
        let font = Font::system(14.0, FontWeight::Regular)
            .with_weight(FontWeight::Heavy)
            .with_size(20.0);
        assert_eq!(font.weight(), FontWeight::Heavy);
        assert_eq!(font.size(), 20.0);
    }
}
