use stylekit_layout::prelude::*;
use stylekit_text::{FontDesign, FontFace, FontWeight};
use stylekit_theme::FontSizeToken;

const SCORE: FontFace = FontFace::named_static("Custom-Regular", FontWeight::Semibold);

#[test]
fn animated_font_renders_each_driven_value() {
    let mut view = text("42").with_animated_font(&SCORE, 10.0);
    assert_eq!(view.animatable_data(), 10.0);

    for value in [10.0, 14.0, 18.0] {
        view.set_animatable_data(value);
        let node = view.render();

        assert_eq!(node.font, Some(SCORE.to_font(value)));
        assert_eq!(node.implicit_animation, ImplicitAnimation::Disabled);
        assert_eq!(node.text.as_deref(), Some("42"));
    }
}

#[test]
fn animated_font_keeps_last_value_when_driver_stops() {
    let mut view = text("42").with_animated_font(&SCORE, 10.0);
    view.set_animatable_data(12.25);

    // Host cancelled the interpolation; renders keep the last written value.
    assert_eq!(view.render().font.map(|f| f.size()), Some(12.25));
    assert_eq!(view.render().font.map(|f| f.size()), Some(12.25));
}

#[test]
fn animated_font_accepts_scale_tokens() {
    let face = FontFace::system(FontWeight::Heavy, FontDesign::Monospaced);
    let scaled = text("a").with_animated_font(&face, FontSizeToken::Title);
    let raw = text("a").with_animated_font(&face, FontSizeToken::Title.raw_value());

    assert_eq!(scaled.render(), raw.render());
    assert_eq!(scaled.animatable_data(), 28.0);
}

#[test]
fn fixed_font_accepts_scale_tokens() {
    let scaled = text("a").with_font(&SCORE, FontSizeToken::Body).render();
    let raw = text("a").with_font(&SCORE, 17.0).render();
    assert_eq!(scaled, raw);
    assert_eq!(scaled.implicit_animation, ImplicitAnimation::Inherited);
}

#[test]
fn padding_top_leading_expands_to_insets() {
    let node = text("a")
        .padding(EdgeInsets {
            top: 4.0,
            leading: 8.0,
            ..Default::default()
        })
        .render();
    assert_eq!(
        node.padding.as_slice(),
        &[Padding::Insets(EdgeInsets {
            top: 4.0,
            trailing: 0.0,
            bottom: 0.0,
            leading: 8.0,
        })]
    );

    let positional = text("a").padding_edges(4.0, 0.0, 0.0, 8.0).render();
    assert_eq!(positional, node);
}

#[test]
fn padding_axes_expands_to_insets() {
    let node = text("a").padding_axes(4.0, 8.0).render();
    assert_eq!(
        node.padding.as_slice(),
        &[Padding::Insets(EdgeInsets {
            top: 4.0,
            trailing: 8.0,
            bottom: 4.0,
            leading: 8.0,
        })]
    );
}

#[test]
fn system_padding_uses_host_default() {
    let node = text("a").system_padding().render();
    assert_eq!(node.padding.as_slice(), &[Padding::System]);
}

#[test]
fn modifiers_compose() {
    let view = text("title")
        .with_animated_font(&SCORE, 20.0)
        .padding_axes(2.0, 6.0);

    let node = view.render();
    assert_eq!(node.font, Some(SCORE.to_font(20.0)));
    assert_eq!(node.padding.len(), 1);
    assert_eq!(node.implicit_animation, ImplicitAnimation::Disabled);

    // The channel lives on the font modifier, not on the padding around it.
    assert_eq!(view.content().animatable_data(), 20.0);
}
