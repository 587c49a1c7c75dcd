//! Font faces and font resolution for stylekit
//!
//! This crate provides:
//! - `FontFace`: a size-independent font descriptor (name, weight, design)
//! - `Font`: a face resolved at a specific size
//! - Platform weight tables for AppKit and UIKit style hosts
//! - Font registry lookups (system fonts via fontdb)
//! - `FontResolver`: fallible resolution into fonts and text attributes
//!
//! # Example
//!
//! ```rust
//! use stylekit_text::{FontDesign, FontFace, FontWeight};
//!
//! const HEADLINE: FontFace = FontFace::system(FontWeight::Bold, FontDesign::Rounded);
//!
//! let font = HEADLINE.to_font(24.0);
//! assert_eq!(font.size(), 24.0);
//! assert_eq!(font.weight(), FontWeight::Bold);
//! ```

pub mod face;
pub mod font;
pub mod platform;
pub mod registry;
pub mod resolver;
pub mod weight;

pub use face::{FontDesign, FontFace};
pub use font::{Font, FontFamily, FontSize};
pub use platform::{
    AppKitFontWeight, AppKitFonts, AttributeKey, NativeFontWeight, Platform, PlatformFont,
    PlatformFontResolver, TextAttributes, UiKitFontWeight, UiKitFonts,
};
pub use registry::{FontLookup, FontRegistry};
pub use resolver::{FontResolver, MissingFontPolicy};
pub use weight::FontWeight;

use thiserror::Error;

/// Raised when a named font cannot be found by the font lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Font '{name}' is not registered")]
pub struct FontResolutionError {
    /// The family name that was requested
    pub name: String,
}

/// Font registry errors
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Failed to load font file {path}: {source}")]
    FontFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Font data contained no usable faces")]
    InvalidFontData,
}

pub type Result<T> = std::result::Result<T, TextError>;
