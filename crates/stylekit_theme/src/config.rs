//! Style configuration loaded from TOML

use crate::tokens::{SpacingTokens, TypographyTokens};
use crate::{Result, ThemeError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use stylekit_text::{FontLookup, FontResolver, MissingFontPolicy, Platform};

/// Font resolution settings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Platform font tables to use; `None` uses the build target's
    pub platform: Option<Platform>,
    /// Behaviour when a named font is not registered
    pub missing_font: MissingFontPolicy,
}

impl FontConfig {
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }
}

/// Complete style configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub fonts: FontConfig,
    pub typography: TypographyTokens,
    pub spacing: SpacingTokens,
}

impl StyleConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: StyleConfig = toml::from_str(source)?;
        tracing::debug!(
            "Loaded style config: platform={:?}, missing_font={:?}",
            config.fonts.platform(),
            config.fonts.missing_font
        );
        Ok(config)
    }

    /// Read a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Font resolver configured for this platform and missing-font policy
    pub fn font_resolver(&self, lookup: Arc<dyn FontLookup>) -> FontResolver {
        FontResolver::new(lookup)
            .with_platform(self.fonts.platform())
            .with_policy(self.fonts.missing_font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = StyleConfig::from_toml_str("").unwrap();
        assert_eq!(config, StyleConfig::default());
        assert_eq!(config.fonts.platform(), Platform::current());
        assert_eq!(config.fonts.missing_font, MissingFontPolicy::Propagate);
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let result = StyleConfig::from_toml_str("[fonts]\nmissing_font = \"ignore\"\n");
        assert!(matches!(result, Err(ThemeError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = StyleConfig::load("/nonexistent/stylekit.toml");
        assert!(matches!(result, Err(ThemeError::Io { .. })));
    }
}
