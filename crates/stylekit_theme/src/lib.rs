//! Stylekit Theme
//!
//! Design tokens and configuration for stylekit.
//!
//! # Tokens
//!
//! - [`FontSizeToken`] / [`TypographyTokens`]: the named font size scale
//! - [`SpacingToken`] / [`SpacingTokens`]: 4px-based spacing scale
//!
//! Size tokens implement [`stylekit_text::FontSize`], so they can be passed
//! anywhere a font size is expected.
//!
//! # Configuration
//!
//! [`StyleConfig`] is read from TOML:
//!
//! ```toml
//! [fonts]
//! platform = "uikit"        # optional, defaults to the build target
//! missing_font = "fallback" # or "propagate" (default)
//!
//! [typography]
//! body = 16.0
//!
//! [spacing]
//! space_4 = 18.0
//! ```

pub mod config;
pub mod tokens;

pub use config::{FontConfig, StyleConfig};
pub use tokens::*;

use thiserror::Error;

/// Theme configuration errors
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to parse style config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to read style config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ThemeError>;
