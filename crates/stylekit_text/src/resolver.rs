//! Fallible font resolution
//!
//! `FontResolver` applies the same rules as [`FontFace::to_font`], but checks
//! named families against a [`FontLookup`] first. What happens when a name is
//! missing is decided by [`MissingFontPolicy`].

use crate::face::FontFace;
use crate::font::{Font, FontSize};
use crate::platform::{Platform, PlatformFontResolver, TextAttributes};
use crate::registry::FontLookup;
use crate::FontResolutionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// What to do when a named font is not available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFontPolicy {
    /// Return a [`FontResolutionError`] to the caller
    #[default]
    Propagate,
    /// Use the system font with the requested weight and size
    #[serde(alias = "fallback_to_system")]
    Fallback,
}

/// Resolves font faces against a font lookup for one platform
pub struct FontResolver {
    lookup: Arc<dyn FontLookup>,
    platform: Box<dyn PlatformFontResolver>,
    policy: MissingFontPolicy,
}

impl FontResolver {
    /// Resolver for the build target's platform that propagates missing fonts
    pub fn new(lookup: Arc<dyn FontLookup>) -> Self {
        Self {
            lookup,
            platform: Platform::current().resolver(),
            policy: MissingFontPolicy::default(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform.resolver();
        self
    }

    pub fn with_policy(mut self, policy: MissingFontPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform.platform()
    }

    pub fn policy(&self) -> MissingFontPolicy {
        self.policy
    }

    /// Resolve a face at a size.
    ///
    /// Named faces must be known to the lookup; system faces always resolve.
    pub fn resolve_font(
        &self,
        face: &FontFace,
        size: impl FontSize,
    ) -> Result<Font, FontResolutionError> {
        let font = face.to_font(size);

        let Some(name) = face.name() else {
            return Ok(font);
        };

        if self.lookup.contains_family(name) {
            return Ok(font);
        }

        match self.policy {
            MissingFontPolicy::Propagate => Err(FontResolutionError {
                name: name.to_string(),
            }),
            MissingFontPolicy::Fallback => {
                tracing::warn!(
                    "Font '{}' (weight={:?}) not found, falling back to system font",
                    name,
                    face.weight()
                );
                Ok(Font::system(font.size(), font.weight()))
            }
        }
    }

    /// Resolve a face into attributed-string attributes for this platform.
    ///
    /// The embedded font is the one [`resolve_font`](Self::resolve_font)
    /// returns for the same face and size.
    pub fn resolve_attributes(
        &self,
        face: &FontFace,
        size: impl FontSize,
    ) -> Result<TextAttributes, FontResolutionError> {
        let font = self.resolve_font(face, size)?;
        Ok(self.platform.attributes(font))
    }
}

impl fmt::Debug for FontResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontResolver")
            .field("platform", &self.platform)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
