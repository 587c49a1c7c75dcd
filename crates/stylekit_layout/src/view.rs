//! Minimal declarative view abstraction
//!
//! A view renders into a [`RenderNode`] describing what the host should draw.
//! Modifiers wrap a view and adjust the node its content produced, so the
//! modifier closest to the content is applied first.

use crate::insets::{EdgeInsets, Padding};
use crate::modifier::{AnimatedFontModifier, DisableAnimation, FontModifier, PaddingModifier};
use smallvec::SmallVec;
use stylekit_animation::Animatable;
use stylekit_text::{Font, FontFace, FontSize};

/// Whether the host may animate changes to a node's content implicitly
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImplicitAnimation {
    /// Follow whatever animation the surrounding transaction carries
    #[default]
    Inherited,
    /// Apply content changes without a transition
    Disabled,
}

/// What a view asks the host to draw
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderNode {
    pub text: Option<String>,
    pub font: Option<Font>,
    /// Padding layers, innermost first
    pub padding: SmallVec<[Padding; 2]>,
    pub implicit_animation: ImplicitAnimation,
}

/// Adjusts the node rendered by the content it wraps
pub trait ViewModifier {
    fn modify(&self, node: &mut RenderNode);
}

/// A declarative view
pub trait View {
    fn render(&self) -> RenderNode;

    /// Wrap this view in a modifier
    fn modifier<M: ViewModifier>(self, modifier: M) -> ModifiedView<Self, M>
    where
        Self: Sized,
    {
        ModifiedView::new(self, modifier)
    }

    /// Use this font unless the content already sets one
    fn font(self, font: Font) -> ModifiedView<Self, FontModifier>
    where
        Self: Sized,
    {
        self.modifier(FontModifier::new(font))
    }

    /// Apply a font face at a size
    fn with_font(self, face: &FontFace, size: impl FontSize) -> ModifiedView<Self, FontModifier>
    where
        Self: Sized,
    {
        self.font(face.to_font(size))
    }

    /// Apply a font face whose size can be driven by an animation.
    ///
    /// The returned view is [`Animatable`]: a driver writes interpolated
    /// sizes into it and each render uses the latest one.
    fn with_animated_font(
        self,
        face: &FontFace,
        size: impl FontSize,
    ) -> ModifiedView<Self, AnimatedFontModifier>
    where
        Self: Sized,
    {
        self.modifier(AnimatedFontModifier::new(face.clone(), size))
    }

    fn padding(self, padding: impl Into<Padding>) -> ModifiedView<Self, PaddingModifier>
    where
        Self: Sized,
    {
        self.modifier(PaddingModifier::new(padding.into()))
    }

    /// Pad each edge separately
    fn padding_edges(
        self,
        top: f32,
        trailing: f32,
        bottom: f32,
        leading: f32,
    ) -> ModifiedView<Self, PaddingModifier>
    where
        Self: Sized,
    {
        self.padding(EdgeInsets {
            top,
            leading,
            bottom,
            trailing,
        })
    }

    /// Pad top and bottom by `vertical`, leading and trailing by `horizontal`
    fn padding_axes(self, vertical: f32, horizontal: f32) -> ModifiedView<Self, PaddingModifier>
    where
        Self: Sized,
    {
        self.padding_edges(vertical, horizontal, vertical, horizontal)
    }

    /// Use the host's default padding
    fn system_padding(self) -> ModifiedView<Self, PaddingModifier>
    where
        Self: Sized,
    {
        self.padding(Padding::System)
    }

    /// Suppress implicit animation of this view's content
    fn animation_disabled(self) -> ModifiedView<Self, DisableAnimation>
    where
        Self: Sized,
    {
        self.modifier(DisableAnimation)
    }
}

/// A view wrapped in a modifier
#[derive(Clone, Debug)]
pub struct ModifiedView<V, M> {
    content: V,
    modifier: M,
}

impl<V, M> ModifiedView<V, M> {
    pub fn new(content: V, modifier: M) -> Self {
        Self { content, modifier }
    }

    pub fn content(&self) -> &V {
        &self.content
    }

    pub fn modifier_ref(&self) -> &M {
        &self.modifier
    }

    pub fn modifier_mut(&mut self) -> &mut M {
        &mut self.modifier
    }
}

impl<V: View, M: ViewModifier> View for ModifiedView<V, M> {
    fn render(&self) -> RenderNode {
        let mut node = self.content.render();
        self.modifier.modify(&mut node);
        node
    }
}

/// Animation drivers write through the outermost modifier
impl<V, M: Animatable> Animatable for ModifiedView<V, M> {
    fn animatable_data(&self) -> f32 {
        self.modifier.animatable_data()
    }

    fn set_animatable_data(&mut self, value: f32) {
        self.modifier.set_animatable_data(value);
    }
}

/// A run of text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl View for Text {
    fn render(&self) -> RenderNode {
        RenderNode {
            text: Some(self.content.clone()),
            ..Default::default()
        }
    }
}

/// Create a text view
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}
