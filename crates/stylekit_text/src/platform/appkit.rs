//! AppKit-style hosts (`NSFont`)

use super::{NativeFontWeight, Platform, PlatformFontResolver};
use crate::weight::FontWeight;

/// `NSFont.Weight` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppKitFontWeight {
    UltraLight,
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl AppKitFontWeight {
    /// Raw `NSFont.Weight` value
    pub const fn raw_value(self) -> f64 {
        match self {
            AppKitFontWeight::UltraLight => -0.8,
            AppKitFontWeight::Thin => -0.6,
            AppKitFontWeight::Light => -0.4,
            AppKitFontWeight::Regular => 0.0,
            AppKitFontWeight::Medium => 0.23,
            AppKitFontWeight::Semibold => 0.3,
            AppKitFontWeight::Bold => 0.4,
            AppKitFontWeight::Heavy => 0.56,
            AppKitFontWeight::Black => 0.62,
        }
    }

    /// Weight for a raw `NSFont.Weight`; unknown values are `Regular`
    pub fn from_raw_value(raw: f64) -> Self {
        [
            AppKitFontWeight::UltraLight,
            AppKitFontWeight::Thin,
            AppKitFontWeight::Light,
            AppKitFontWeight::Medium,
            AppKitFontWeight::Semibold,
            AppKitFontWeight::Bold,
            AppKitFontWeight::Heavy,
            AppKitFontWeight::Black,
        ]
        .into_iter()
        .find(|weight| weight.raw_value() == raw)
        .unwrap_or(AppKitFontWeight::Regular)
    }
}

impl From<FontWeight> for AppKitFontWeight {
    fn from(weight: FontWeight) -> Self {
        match weight {
            FontWeight::UltraLight => AppKitFontWeight::UltraLight,
            FontWeight::Thin => AppKitFontWeight::Thin,
            FontWeight::Light => AppKitFontWeight::Light,
            FontWeight::Regular => AppKitFontWeight::Regular,
            FontWeight::Medium => AppKitFontWeight::Medium,
            FontWeight::Semibold => AppKitFontWeight::Semibold,
            FontWeight::Bold => AppKitFontWeight::Bold,
            FontWeight::Heavy => AppKitFontWeight::Heavy,
            FontWeight::Black => AppKitFontWeight::Black,
        }
    }
}

/// Font resolver for AppKit-style hosts
#[derive(Debug, Clone, Copy, Default)]
pub struct AppKitFonts;

impl PlatformFontResolver for AppKitFonts {
    fn platform(&self) -> Platform {
        Platform::AppKit
    }

    fn native_weight(&self, weight: FontWeight) -> NativeFontWeight {
        NativeFontWeight::AppKit(weight.into())
    }
}
