//! Typography tokens for theming

use serde::{Deserialize, Serialize};
use stylekit_text::FontSize;

/// Named font sizes, smallest first
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSizeToken {
    Caption,
    Footnote,
    Subheadline,
    Callout,
    Body,
    Title3,
    Title2,
    Title,
    LargeTitle,
}

impl FontSizeToken {
    pub const ALL: [FontSizeToken; 9] = [
        FontSizeToken::Caption,
        FontSizeToken::Footnote,
        FontSizeToken::Subheadline,
        FontSizeToken::Callout,
        FontSizeToken::Body,
        FontSizeToken::Title3,
        FontSizeToken::Title2,
        FontSizeToken::Title,
        FontSizeToken::LargeTitle,
    ];

    /// Default size in points
    pub const fn raw_value(self) -> f32 {
        match self {
            FontSizeToken::Caption => 12.0,
            FontSizeToken::Footnote => 13.0,
            FontSizeToken::Subheadline => 15.0,
            FontSizeToken::Callout => 16.0,
            FontSizeToken::Body => 17.0,
            FontSizeToken::Title3 => 20.0,
            FontSizeToken::Title2 => 22.0,
            FontSizeToken::Title => 28.0,
            FontSizeToken::LargeTitle => 34.0,
        }
    }
}

impl FontSize for FontSizeToken {
    fn points(&self) -> f32 {
        self.raw_value()
    }
}

/// Complete font size scale, overridable per token
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyTokens {
    pub caption: f32,
    pub footnote: f32,
    pub subheadline: f32,
    pub callout: f32,
    pub body: f32,
    pub title3: f32,
    pub title2: f32,
    pub title: f32,
    pub large_title: f32,
}

impl TypographyTokens {
    /// Get font size by token key
    pub fn get(&self, token: FontSizeToken) -> f32 {
        match token {
            FontSizeToken::Caption => self.caption,
            FontSizeToken::Footnote => self.footnote,
            FontSizeToken::Subheadline => self.subheadline,
            FontSizeToken::Callout => self.callout,
            FontSizeToken::Body => self.body,
            FontSizeToken::Title3 => self.title3,
            FontSizeToken::Title2 => self.title2,
            FontSizeToken::Title => self.title,
            FontSizeToken::LargeTitle => self.large_title,
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            caption: FontSizeToken::Caption.raw_value(),
            footnote: FontSizeToken::Footnote.raw_value(),
            subheadline: FontSizeToken::Subheadline.raw_value(),
            callout: FontSizeToken::Callout.raw_value(),
            body: FontSizeToken::Body.raw_value(),
            title3: FontSizeToken::Title3.raw_value(),
            title2: FontSizeToken::Title2.raw_value(),
            title: FontSizeToken::Title.raw_value(),
            large_title: FontSizeToken::LargeTitle.raw_value(),
        }
    }
}
