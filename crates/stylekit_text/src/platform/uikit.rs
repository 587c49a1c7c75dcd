//! UIKit-style hosts (`UIFont`)

use super::{NativeFontWeight, Platform, PlatformFontResolver};
use crate::weight::FontWeight;

/// `UIFont.Weight` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiKitFontWeight {
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

impl UiKitFontWeight {
    /// Raw `UIFont.Weight` value
    pub const fn raw_value(self) -> f64 {
        match self {
            UiKitFontWeight::UltraLight => -0.8,
            UiKitFontWeight::Thin => -0.6,
            UiKitFontWeight::Light => -0.4,
            UiKitFontWeight::Regular => 0.0,
            UiKitFontWeight::Medium => 0.23,
            UiKitFontWeight::Semibold => 0.3,
            UiKitFontWeight::Bold => 0.4,
            UiKitFontWeight::Heavy => 0.56,
            UiKitFontWeight::Black => 0.62,
        }
    }

    /// Weight for a raw `UIFont.Weight`; unknown values are `Regular`
    pub fn from_raw_value(raw: f64) -> Self {
        [
            UiKitFontWeight::UltraLight,
            UiKitFontWeight::Thin,
            UiKitFontWeight::Light,
            UiKitFontWeight::Medium,
            UiKitFontWeight::Semibold,
            UiKitFontWeight::Bold,
            UiKitFontWeight::Heavy,
            UiKitFontWeight::Black,
        ]
        .into_iter()
        .find(|weight| weight.raw_value() == raw)
        .unwrap_or(UiKitFontWeight::Regular)
    }
}

impl From<FontWeight> for UiKitFontWeight {
    fn from(weight: FontWeight) -> Self {
        match weight {
            FontWeight::UltraLight => UiKitFontWeight::UltraLight,
            FontWeight::Thin => UiKitFontWeight::Thin,
            FontWeight::Light => UiKitFontWeight::Light,
            FontWeight::Regular => UiKitFontWeight::Regular,
            FontWeight::Medium => UiKitFontWeight::Medium,
            FontWeight::Semibold => UiKitFontWeight::Semibold,
            FontWeight::Bold => UiKitFontWeight::Bold,
            FontWeight::Heavy => UiKitFontWeight::Heavy,
            FontWeight::Black => UiKitFontWeight::Black,
        }
    }
}

/// Font resolver for UIKit-style hosts
#[derive(Debug, Clone, Copy, Default)]
pub struct UiKitFonts;

impl PlatformFontResolver for UiKitFonts {
    fn platform(&self) -> Platform {
        Platform::UiKit
    }

    fn native_weight(&self, weight: FontWeight) -> NativeFontWeight {
        NativeFontWeight::UiKit(weight.into())
    }
}
