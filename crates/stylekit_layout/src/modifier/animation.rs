use crate::view::{ImplicitAnimation, RenderNode, ViewModifier};

/// Stops the host from animating content changes of the wrapped view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisableAnimation;

impl ViewModifier for DisableAnimation {
    fn modify(&self, node: &mut RenderNode) {
        node.implicit_animation = ImplicitAnimation::Disabled;
    }
}
