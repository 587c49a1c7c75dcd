//! Spacing tokens for theming

use serde::{Deserialize, Serialize};

/// Spacing token keys on a 4px grid
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Space0,
    Space1,
    Space2,
    Space3,
    Space4,
    Space6,
    Space8,
    Space12,
}

/// Complete set of spacing tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingTokens {
    pub space_0: f32,
    pub space_1: f32,
    pub space_2: f32,
    pub space_3: f32,
    pub space_4: f32,
    pub space_6: f32,
    pub space_8: f32,
    pub space_12: f32,
}

impl SpacingTokens {
    /// Get spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Space0 => self.space_0,
            SpacingToken::Space1 => self.space_1,
            SpacingToken::Space2 => self.space_2,
            SpacingToken::Space3 => self.space_3,
            SpacingToken::Space4 => self.space_4,
            SpacingToken::Space6 => self.space_6,
            SpacingToken::Space8 => self.space_8,
            SpacingToken::Space12 => self.space_12,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            space_0: 0.0,
            space_1: 4.0,
            space_2: 8.0,
            space_3: 12.0,
            space_4: 16.0,
            space_6: 24.0,
            space_8: 32.0,
            space_12: 48.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let tokens = SpacingTokens::default();
        assert_eq!(tokens.get(SpacingToken::Space0), 0.0);
        assert_eq!(tokens.get(SpacingToken::Space1), 4.0);
        assert_eq!(tokens.get(SpacingToken::Space12), 48.0);
    }
}
