use std::sync::Arc;
use stylekit_text::{FontFace, FontFamily, FontLookup, FontWeight, MissingFontPolicy, Platform};
use stylekit_theme::{FontSizeToken, SpacingToken, StyleConfig};

struct Bundled(&'static [&'static str]);

impl FontLookup for Bundled {
    fn contains_family(&self, name: &str) -> bool {
        self.0.contains(&name)
    }
}

const CONFIG: &str = r#"
[fonts]
platform = "uikit"
missing_font = "fallback"

[typography]
body = 16.0
title = 30.0

[spacing]
space_4 = 18.0
"#;

#[test]
fn full_config_overrides_defaults() {
    let config = StyleConfig::from_toml_str(CONFIG).unwrap();

    assert_eq!(config.fonts.platform(), Platform::UiKit);
    assert_eq!(config.fonts.missing_font, MissingFontPolicy::Fallback);
    assert_eq!(config.typography.get(FontSizeToken::Body), 16.0);
    assert_eq!(config.typography.get(FontSizeToken::Title), 30.0);
    assert_eq!(config.typography.get(FontSizeToken::Caption), 12.0);
    assert_eq!(config.spacing.get(SpacingToken::Space4), 18.0);
    assert_eq!(config.spacing.get(SpacingToken::Space2), 8.0);
}

#[test]
fn configured_resolver_follows_policy() {
    let face = FontFace::named("Missing-Font", FontWeight::Bold);
    let lookup = Arc::new(Bundled(&["Custom-Regular"]));

    let fallback = StyleConfig::from_toml_str(CONFIG)
        .unwrap()
        .font_resolver(lookup.clone());
    assert_eq!(fallback.platform(), Platform::UiKit);
    let font = fallback.resolve_font(&face, FontSizeToken::Body).unwrap();
    assert!(matches!(font.family(), FontFamily::System(_)));
    assert_eq!(font.size(), 17.0);

    let strict = StyleConfig::default().font_resolver(lookup);
    assert_eq!(strict.policy(), MissingFontPolicy::Propagate);
    assert!(strict.resolve_font(&face, FontSizeToken::Body).is_err());
}

#[test]
fn token_sizes_match_overridden_scale() {
    let config = StyleConfig::from_toml_str(CONFIG).unwrap();
    let face = FontFace::default();

    let body = config.typography.get(FontSizeToken::Body);
    assert_eq!(face.to_font(body).size(), 16.0);
    assert_eq!(face.to_font(FontSizeToken::Body).size(), 17.0);
}
