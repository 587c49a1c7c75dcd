//! Platform-independent font weight

use serde::{Deserialize, Serialize};

/// Abstract font weight on the standard 9-point scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl FontWeight {
    /// All weights, lightest first
    pub const ALL: [FontWeight; 9] = [
        FontWeight::UltraLight,
        FontWeight::Thin,
        FontWeight::Light,
        FontWeight::Regular,
        FontWeight::Medium,
        FontWeight::Semibold,
        FontWeight::Bold,
        FontWeight::Heavy,
        FontWeight::Black,
    ];

    /// OpenType weight class (100-900, where 400 is regular and 700 is bold)
    pub const fn numeric(self) -> u16 {
        match self {
            FontWeight::UltraLight => 100,
            FontWeight::Thin => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::Heavy => 800,
            FontWeight::Black => 900,
        }
    }

    /// Weight for an OpenType weight class.
    ///
    /// Only the nine exact steps are recognised; any other value is `Regular`.
    pub const fn from_numeric(value: u16) -> Self {
        match value {
            100 => FontWeight::UltraLight,
            200 => FontWeight::Thin,
            300 => FontWeight::Light,
            500 => FontWeight::Medium,
            600 => FontWeight::Semibold,
            700 => FontWeight::Bold,
            800 => FontWeight::Heavy,
            900 => FontWeight::Black,
            _ => FontWeight::Regular,
        }
    }

    /// Lowercase name, matching the serialized form
    pub const fn name(self) -> &'static str {
        match self {
            FontWeight::UltraLight => "ultralight",
            FontWeight::Thin => "thin",
            FontWeight::Light => "light",
            FontWeight::Regular => "regular",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
            FontWeight::Heavy => "heavy",
            FontWeight::Black => "black",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_round_trips_every_weight() {
        for weight in FontWeight::ALL {
            assert_eq!(FontWeight::from_numeric(weight.numeric()), weight);
        }
    }

    #[test]
    fn test_unknown_numeric_is_regular() {
        for value in [0, 1, 350, 450, 950, u16::MAX] {
            assert_eq!(FontWeight::from_numeric(value), FontWeight::Regular);
        }
    }

    #[test]
    fn test_weights_are_ordered_by_numeric() {
        let numeric: Vec<u16> = FontWeight::ALL.iter().map(|w| w.numeric()).collect();
        let mut sorted = numeric.clone();
        sorted.sort_unstable();
        assert_eq!(numeric, sorted);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&FontWeight::Semibold).unwrap();
        assert_eq!(json, "\"semibold\"");

        let parsed: FontWeight = serde_json::from_str("\"ultralight\"").unwrap();
        assert_eq!(parsed, FontWeight::UltraLight);
        assert_eq!(parsed.name(), "ultralight");
    }
}
