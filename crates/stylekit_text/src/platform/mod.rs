//! Platform font resolution
//!
//! Hosts that draw attributed strings need a platform font object rather
//! than a toolkit `Font`. Two host families are supported, each with its
//! own native weight table:
//!
//! - [`AppKitFonts`]: desktop hosts (`NSFont.Weight` values)
//! - [`UiKitFonts`]: mobile hosts (`UIFont.Weight` values)
//!
//! The variant is chosen at runtime from [`Platform`], which defaults to the
//! build target.

mod appkit;
mod uikit;

pub use appkit::{AppKitFontWeight, AppKitFonts};
pub use uikit::{UiKitFontWeight, UiKitFonts};

use crate::font::Font;
use crate::weight::FontWeight;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Host platform family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    AppKit,
    UiKit,
}

impl Platform {
    /// Platform family of the build target
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::AppKit
        } else {
            Platform::UiKit
        }
    }

    /// Font resolver for this platform
    pub fn resolver(self) -> Box<dyn PlatformFontResolver> {
        match self {
            Platform::AppKit => Box::new(AppKitFonts),
            Platform::UiKit => Box::new(UiKitFonts),
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// Native weight of a platform font
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeFontWeight {
    AppKit(AppKitFontWeight),
    UiKit(UiKitFontWeight),
}

impl NativeFontWeight {
    /// The platform's raw weight value (-1.0 to 1.0, 0.0 is regular)
    pub fn raw_value(self) -> f64 {
        match self {
            NativeFontWeight::AppKit(weight) => weight.raw_value(),
            NativeFontWeight::UiKit(weight) => weight.raw_value(),
        }
    }
}

/// A font as handed to a platform text system
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformFont {
    pub platform: Platform,
    pub font: Font,
    pub native_weight: NativeFontWeight,
}

/// Keys of an attributed-string attribute map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    Font,
}

/// Attributed-string attributes, as consumed by legacy text APIs
pub type TextAttributes = FxHashMap<AttributeKey, PlatformFont>;

/// Converts toolkit fonts into a platform's font objects
pub trait PlatformFontResolver: Send + Sync + fmt::Debug {
    fn platform(&self) -> Platform;

    /// Map an abstract weight onto the platform's weight table
    fn native_weight(&self, weight: FontWeight) -> NativeFontWeight;

    /// Wrap a resolved font as this platform's font object
    fn platform_font(&self, font: Font) -> PlatformFont {
        PlatformFont {
            platform: self.platform(),
            native_weight: self.native_weight(font.weight()),
            font,
        }
    }

    /// Attribute map holding the platform font
    fn attributes(&self, font: Font) -> TextAttributes {
        let mut attributes = TextAttributes::default();
        attributes.insert(AttributeKey::Font, self.platform_font(font));
        attributes
    }
}
