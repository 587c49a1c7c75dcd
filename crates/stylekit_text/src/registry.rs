//! Font registry for named font lookups
//!
//! Uses fontdb to discover system fonts and fonts bundled by the application.

use crate::weight::FontWeight;
use crate::{Result, TextError};
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Lookup of font families by name
pub trait FontLookup: Send + Sync {
    /// Whether a family with this name is available
    fn contains_family(&self, name: &str) -> bool;
}

/// A fixed set of family names, e.g. the fonts bundled with an app
impl FontLookup for FxHashSet<String> {
    fn contains_family(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// Font registry backed by a fontdb database
pub struct FontRegistry {
    db: Database,
}

impl FontRegistry {
    /// Create a new font registry and load system fonts
    pub fn new() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!("Loaded {} system font faces", db.len());
        Self { db }
    }

    /// Create a registry with no fonts loaded
    pub fn empty() -> Self {
        Self {
            db: Database::new(),
        }
    }

    /// Wrap an existing fontdb database
    pub fn from_database(db: Database) -> Self {
        Self { db }
    }

    /// Register fonts from in-memory data (TTF/OTF/TTC)
    pub fn load_font_data(&mut self, data: Vec<u8>) -> Result<()> {
        let before = self.db.len();
        self.db.load_font_data(data);
        if self.db.len() == before {
            return Err(TextError::InvalidFontData);
        }
        tracing::debug!("Registered {} font faces from data", self.db.len() - before);
        Ok(())
    }

    /// Register fonts from a file on disk
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let before = self.db.len();
        self.db
            .load_font_file(path)
            .map_err(|source| TextError::FontFileError {
                path: path.display().to_string(),
                source,
            })?;
        if self.db.len() == before {
            return Err(TextError::InvalidFontData);
        }
        tracing::debug!("Registered font file {:?}", path);
        Ok(())
    }

    /// Check if a font is available
    pub fn has_font(&self, name: &str) -> bool {
        self.has_font_with_weight(name, FontWeight::Regular)
    }

    /// Check if a font is available, matching the nearest weight
    pub fn has_font_with_weight(&self, name: &str, weight: FontWeight) -> bool {
        let query = Query {
            families: &[Family::Name(name)],
            weight: Weight(weight.numeric()),
            style: Style::Normal,
            stretch: Stretch::Normal,
        };
        self.db.query(&query).is_some()
    }

    /// Check if a face with this PostScript name is loaded (e.g. "Inter-Bold")
    pub fn has_post_script_name(&self, name: &str) -> bool {
        self.db.faces().any(|face| face.post_script_name == name)
    }

    /// List available font families, including localized family names
    pub fn list_families(&self) -> Vec<String> {
        let mut families: Vec<String> = self
            .db
            .faces()
            .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
            .collect();

        families.sort();
        families.dedup();
        families
    }

    /// Number of loaded faces
    pub fn face_count(&self) -> usize {
        self.db.len()
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FontLookup for FontRegistry {
    /// Matches family names and PostScript names, like platform font lookups
    fn contains_family(&self, name: &str) -> bool {
        let found = self.has_font(name) || self.has_post_script_name(name);
        tracing::trace!("contains_family: name={}, found={}", name, found);
        found
    }
}
