//! Size-independent font descriptors
//!
//! A `FontFace` names a font family (or the system font), a weight and a
//! design. Applications usually declare their faces once as constants:
//!
//! ```rust
//! use stylekit_text::{FontFace, FontWeight};
//!
//! pub const BRAND_LIGHT: FontFace = FontFace::named_static("Brand-Regular", FontWeight::Light);
//! ```

use crate::font::{Font, FontFamily, FontSize};
use crate::resolver::FontResolver;
use crate::weight::FontWeight;
use crate::FontResolutionError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Design variant of the system font
///
/// Named fonts carry their own design, so this only applies to system faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontDesign {
    #[default]
    Default,
    Serif,
    Rounded,
    Monospaced,
}

/// A font family plus weight and design, independent of size
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FontFace {
    /// Font family name; `None` uses the platform system font
    #[serde(default)]
    name: Option<Cow<'static, str>>,
    #[serde(default)]
    weight: FontWeight,
    #[serde(default)]
    design: FontDesign,
}

impl FontFace {
    /// Create a face from its parts
    pub fn new(name: Option<String>, weight: FontWeight, design: FontDesign) -> Self {
        Self {
            name: name.map(Cow::Owned),
            weight,
            design,
        }
    }

    /// A named font family with the given weight
    pub fn named(name: impl Into<String>, weight: FontWeight) -> Self {
        Self {
            name: Some(Cow::Owned(name.into())),
            weight,
            design: FontDesign::Default,
        }
    }

    /// A named font family, usable in `const` items
    pub const fn named_static(name: &'static str, weight: FontWeight) -> Self {
        Self {
            name: Some(Cow::Borrowed(name)),
            weight,
            design: FontDesign::Default,
        }
    }

    /// The platform system font with the given weight and design
    pub const fn system(weight: FontWeight, design: FontDesign) -> Self {
        Self {
            name: None,
            weight,
            design,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_design(mut self, design: FontDesign) -> Self {
        self.design = design;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// The design as declared, even when a name makes it irrelevant
    pub fn design(&self) -> FontDesign {
        self.design
    }

    /// Whether this face uses the platform system font
    pub fn is_system(&self) -> bool {
        self.name.is_none()
    }

    /// Font family this face resolves to, ignoring registry availability
    pub fn family(&self) -> FontFamily {
        match &self.name {
            Some(name) => FontFamily::Named(name.to_string()),
            None => FontFamily::System(self.design),
        }
    }

    /// Describe this face at a given size.
    ///
    /// Pure: the family is not checked against any registry. A named family
    /// gets the face's weight applied on top; a system face also gets its
    /// design.
    pub fn to_font(&self, size: impl FontSize) -> Font {
        Font::new(self.family(), size.points(), self.weight)
    }

    /// Resolve this face at a given size, checking named families against
    /// the resolver's font lookup.
    pub fn resolve_font(
        &self,
        resolver: &FontResolver,
        size: impl FontSize,
    ) -> Result<Font, FontResolutionError> {
        resolver.resolve_font(self, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_face_is_regular_system() {
        let face = FontFace::default();
        assert!(face.is_system());
        assert_eq!(face.weight(), FontWeight::Regular);
        assert_eq!(face.design(), FontDesign::Default);
    }

    #[test]
    fn test_system_face_keeps_design() {
        let font = FontFace::system(FontWeight::Bold, FontDesign::Rounded).to_font(24.0);
        assert_eq!(font.family(), &FontFamily::System(FontDesign::Rounded));
        assert_eq!(font.weight(), FontWeight::Bold);
        assert_eq!(font.size(), 24.0);
    }

    #[test]
    fn test_named_face_ignores_design() {
        let base = FontFace::named("Custom-Regular", FontWeight::Semibold);
        let expected = base.to_font(16.0);

        for design in [
            FontDesign::Default,
            FontDesign::Serif,
            FontDesign::Rounded,
            FontDesign::Monospaced,
        ] {
            assert_eq!(base.clone().with_design(design).to_font(16.0), expected);
        }
        assert_eq!(
            expected.family(),
            &FontFamily::Named("Custom-Regular".to_string())
        );
    }

    #[test]
    fn test_static_and_owned_names_are_equal() {
        const STATIC: FontFace = FontFace::named_static("Inter", FontWeight::Medium);
        let owned = FontFace::new(
            Some("Inter".to_string()),
            FontWeight::Medium,
            FontDesign::Default,
        );
        assert_eq!(STATIC, owned);
        assert_eq!(STATIC.name(), Some("Inter"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let face: FontFace = serde_json::from_str(r#"{ "name": "Inter" }"#).unwrap();
        assert_eq!(face, FontFace::named("Inter", FontWeight::Regular));

        let face: FontFace =
            serde_json::from_str(r#"{ "weight": "bold", "design": "monospaced" }"#).unwrap();
        assert_eq!(
            face,
            FontFace::system(FontWeight::Bold, FontDesign::Monospaced)
        );
    }
}
