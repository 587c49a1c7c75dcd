use crate::insets::Padding;
use crate::view::{RenderNode, ViewModifier};

/// Adds a padding layer around the wrapped view
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaddingModifier {
    padding: Padding,
}

impl PaddingModifier {
    pub fn new(padding: Padding) -> Self {
        Self { padding }
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }
}

impl ViewModifier for PaddingModifier {
    fn modify(&self, node: &mut RenderNode) {
        node.padding.push(self.padding);
    }
}
