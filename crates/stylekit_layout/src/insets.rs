//! Edge insets and padding values

/// Inset distances for each edge of a rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Same inset on every edge
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// `vertical` on top and bottom, `horizontal` on leading and trailing
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal inset
    pub fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }

    /// Total vertical inset
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Padding applied around a view
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Padding {
    Insets(EdgeInsets),
    /// The host's default padding on every edge
    System,
}

impl From<EdgeInsets> for Padding {
    fn from(insets: EdgeInsets) -> Self {
        Padding::Insets(insets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_insets_default_to_zero() {
        let insets = EdgeInsets {
            top: 4.0,
            leading: 8.0,
            ..Default::default()
        };
        assert_eq!(insets, EdgeInsets::new(4.0, 8.0, 0.0, 0.0));
    }

    #[test]
    fn test_symmetric() {
        let insets = EdgeInsets::symmetric(4.0, 8.0);
        assert_eq!(insets.top, 4.0);
        assert_eq!(insets.bottom, 4.0);
        assert_eq!(insets.leading, 8.0);
        assert_eq!(insets.trailing, 8.0);
        assert_eq!(insets.horizontal(), 16.0);
        assert_eq!(insets.vertical(), 8.0);
    }

    #[test]
    fn test_all() {
        assert_eq!(EdgeInsets::all(2.0), EdgeInsets::symmetric(2.0, 2.0));
        assert_eq!(EdgeInsets::default(), EdgeInsets::ZERO);
    }
}
