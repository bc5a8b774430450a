//! StyleBuilder: typed style calls lowered to ordered USS declarations.
//!
//! Each setter appends exactly one [`StyleProperty`] and returns the builder
//! so calls chain. Nothing is deduplicated: setting the same property twice
//! emits two declarations, and the later one wins in the cascade.

use super::ToUss;
use super::color::Color;
use super::length::Length;
use super::properties::{
    Align, BackgroundPosition, DisplayStyle, FlexDirection, Font, FontStyle, Justify, Overflow,
    Position, Repeat, TextAnchor, TextOverflow, Visibility, WhiteSpace, Wrap,
};
use super::types::StyleProperty;

/// Format a float with a `px` suffix.
fn px(v: f32) -> String {
    format!("{v}px")
}

/// Accumulates declarations in call order.
#[derive(Debug, Default, Clone)]
pub struct StyleBuilder {
    properties: Vec<StyleProperty>,
}

impl StyleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish the builder, returning declarations in call order.
    pub fn build(self) -> Vec<StyleProperty> {
        self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Append an arbitrary declaration verbatim.
    ///
    /// Neither the name nor the value is checked, so properties the typed
    /// setters do not cover can still be emitted.
    pub fn prop(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.push(StyleProperty::new(name, value));
        self
    }

    fn uss(&mut self, name: &str, value: &impl ToUss) -> &mut Self {
        self.prop(name, value.to_uss_string())
    }

    fn length(&mut self, name: &str, length: impl Into<Length>) -> &mut Self {
        self.uss(name, &length.into())
    }

    // --- Sizing ---

    pub fn width(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("width", length)
    }

    pub fn height(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("height", length)
    }

    pub fn min_width(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("min-width", length)
    }

    pub fn min_height(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("min-height", length)
    }

    pub fn max_width(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("max-width", length)
    }

    pub fn max_height(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("max-height", length)
    }

    // --- Flexbox ---

    pub fn flex_direction(&mut self, direction: FlexDirection) -> &mut Self {
        self.uss("flex-direction", &direction)
    }

    pub fn flex_wrap(&mut self, wrap: Wrap) -> &mut Self {
        self.uss("flex-wrap", &wrap)
    }

    pub fn flex_grow(&mut self, value: f32) -> &mut Self {
        self.prop("flex-grow", value.to_string())
    }

    pub fn flex_shrink(&mut self, value: f32) -> &mut Self {
        self.prop("flex-shrink", value.to_string())
    }

    pub fn flex_basis(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("flex-basis", length)
    }

    pub fn align_items(&mut self, align: Align) -> &mut Self {
        self.uss("align-items", &align)
    }

    pub fn align_self(&mut self, align: Align) -> &mut Self {
        self.uss("align-self", &align)
    }

    pub fn align_content(&mut self, align: Align) -> &mut Self {
        self.uss("align-content", &align)
    }

    pub fn justify_content(&mut self, justify: Justify) -> &mut Self {
        self.uss("justify-content", &justify)
    }

    // --- Padding ---

    pub fn padding(&mut self, all: f32) -> &mut Self {
        self.prop("padding", px(all))
    }

    /// Two-value padding: vertical, then horizontal.
    pub fn padding2(&mut self, vertical: f32, horizontal: f32) -> &mut Self {
        self.prop("padding", format!("{} {}", px(vertical), px(horizontal)))
    }

    /// Four-value padding in top, right, bottom, left order.
    pub fn padding4(&mut self, top: f32, right: f32, bottom: f32, left: f32) -> &mut Self {
        let value = format!("{} {} {} {}", px(top), px(right), px(bottom), px(left));
        self.prop("padding", value)
    }

    pub fn padding_top(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("padding-top", length)
    }

    pub fn padding_right(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("padding-right", length)
    }

    pub fn padding_bottom(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("padding-bottom", length)
    }

    pub fn padding_left(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("padding-left", length)
    }

    // --- Margin ---

    pub fn margin(&mut self, all: f32) -> &mut Self {
        self.prop("margin", px(all))
    }

    /// Two-value margin: vertical, then horizontal.
    pub fn margin2(&mut self, vertical: f32, horizontal: f32) -> &mut Self {
        self.prop("margin", format!("{} {}", px(vertical), px(horizontal)))
    }

    /// Four-value margin in top, right, bottom, left order.
    pub fn margin4(&mut self, top: f32, right: f32, bottom: f32, left: f32) -> &mut Self {
        let value = format!("{} {} {} {}", px(top), px(right), px(bottom), px(left));
        self.prop("margin", value)
    }

    pub fn margin_top(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("margin-top", length)
    }

    pub fn margin_right(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("margin-right", length)
    }

    pub fn margin_bottom(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("margin-bottom", length)
    }

    pub fn margin_left(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("margin-left", length)
    }

    // --- Position ---

    pub fn position(&mut self, position: Position) -> &mut Self {
        self.uss("position", &position)
    }

    pub fn top(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("top", length)
    }

    pub fn right(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("right", length)
    }

    pub fn bottom(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("bottom", length)
    }

    pub fn left(&mut self, length: impl Into<Length>) -> &mut Self {
        self.length("left", length)
    }

    // --- Colors ---

    pub fn background_color(&mut self, color: Color) -> &mut Self {
        self.uss("background-color", &color)
    }

    pub fn color(&mut self, color: Color) -> &mut Self {
        self.uss("color", &color)
    }

    pub fn border_color(&mut self, color: Color) -> &mut Self {
        self.uss("border-color", &color)
    }

    pub fn border_top_color(&mut self, color: Color) -> &mut Self {
        self.uss("border-top-color", &color)
    }

    pub fn border_right_color(&mut self, color: Color) -> &mut Self {
        self.uss("border-right-color", &color)
    }

    pub fn border_bottom_color(&mut self, color: Color) -> &mut Self {
        self.uss("border-bottom-color", &color)
    }

    pub fn border_left_color(&mut self, color: Color) -> &mut Self {
        self.uss("border-left-color", &color)
    }

    // --- Border width ---

    pub fn border_width(&mut self, all: f32) -> &mut Self {
        self.prop("border-width", px(all))
    }

    pub fn border_top_width(&mut self, width: f32) -> &mut Self {
        self.prop("border-top-width", px(width))
    }

    pub fn border_right_width(&mut self, width: f32) -> &mut Self {
        self.prop("border-right-width", px(width))
    }

    pub fn border_bottom_width(&mut self, width: f32) -> &mut Self {
        self.prop("border-bottom-width", px(width))
    }

    pub fn border_left_width(&mut self, width: f32) -> &mut Self {
        self.prop("border-left-width", px(width))
    }

    // --- Border radius ---

    pub fn border_radius(&mut self, all: f32) -> &mut Self {
        self.prop("border-radius", px(all))
    }

    /// Two-value radius: top-left/bottom-right, then top-right/bottom-left.
    pub fn border_radius2(&mut self, diagonal: f32, anti_diagonal: f32) -> &mut Self {
        let value = format!("{} {}", px(diagonal), px(anti_diagonal));
        self.prop("border-radius", value)
    }

    /// Four-value radius in top-left, top-right, bottom-right, bottom-left order.
    pub fn border_radius4(
        &mut self,
        top_left: f32,
        top_right: f32,
        bottom_right: f32,
        bottom_left: f32,
    ) -> &mut Self {
        let value = format!(
            "{} {} {} {}",
            px(top_left),
            px(top_right),
            px(bottom_right),
            px(bottom_left)
        );
        self.prop("border-radius", value)
    }

    pub fn border_top_left_radius(&mut self, radius: f32) -> &mut Self {
        self.prop("border-top-left-radius", px(radius))
    }

    pub fn border_top_right_radius(&mut self, radius: f32) -> &mut Self {
        self.prop("border-top-right-radius", px(radius))
    }

    pub fn border_bottom_right_radius(&mut self, radius: f32) -> &mut Self {
        self.prop("border-bottom-right-radius", px(radius))
    }

    pub fn border_bottom_left_radius(&mut self, radius: f32) -> &mut Self {
        self.prop("border-bottom-left-radius", px(radius))
    }

    // --- Display & visibility ---

    pub fn display(&mut self, display: DisplayStyle) -> &mut Self {
        self.uss("display", &display)
    }

    pub fn visibility(&mut self, visibility: Visibility) -> &mut Self {
        self.uss("visibility", &visibility)
    }

    pub fn overflow(&mut self, overflow: Overflow) -> &mut Self {
        self.uss("overflow", &overflow)
    }

    pub fn text_overflow(&mut self, text_overflow: TextOverflow) -> &mut Self {
        self.uss("text-overflow", &text_overflow)
    }

    pub fn opacity(&mut self, value: f32) -> &mut Self {
        self.prop("opacity", value.to_string())
    }

    pub fn white_space(&mut self, white_space: WhiteSpace) -> &mut Self {
        self.uss("white-space", &white_space)
    }

    // --- Typography ---

    pub fn font_size(&mut self, size: f32) -> &mut Self {
        self.prop("font-size", px(size))
    }

    pub fn letter_spacing(&mut self, spacing: f32) -> &mut Self {
        self.prop("letter-spacing", px(spacing))
    }

    pub fn font_style_and_weight(&mut self, style: FontStyle) -> &mut Self {
        self.uss("-unity-font-style", &style)
    }

    pub fn text_align(&mut self, anchor: TextAnchor) -> &mut Self {
        self.uss("-unity-text-align", &anchor)
    }

    /// Reference a font resource, or clear it with `none`.
    pub fn font(&mut self, font: Option<&Font>) -> &mut Self {
        match font {
            Some(font) => self.uss("-unity-font-definition", font),
            None => self.prop("-unity-font-definition", "none"),
        }
    }

    /// Set `-unity-font-definition` to a pre-formatted value.
    pub fn font_definition(&mut self, value: impl Into<String>) -> &mut Self {
        self.prop("-unity-font-definition", value)
    }

    // --- Background ---

    pub fn background_image(&mut self, value: impl Into<String>) -> &mut Self {
        self.prop("background-image", value)
    }

    pub fn background_image_tint_color(&mut self, color: Color) -> &mut Self {
        self.uss("-unity-background-image-tint-color", &color)
    }

    pub fn background_image_tint_hex(&mut self, hex: impl Into<String>) -> &mut Self {
        self.prop("-unity-background-image-tint-color", hex)
    }

    pub fn background_scale_mode(&mut self, mode: impl Into<String>) -> &mut Self {
        self.prop("-unity-background-scale-mode", mode)
    }

    pub fn background_position(
        &mut self,
        horizontal: BackgroundPosition,
        vertical: BackgroundPosition,
    ) -> &mut Self {
        let value = format!("{} {}", horizontal.as_str(), vertical.as_str());
        self.prop("background-position", value)
    }

    pub fn background_repeat(&mut self, horizontal: Repeat, vertical: Repeat) -> &mut Self {
        let value = format!("{} {}", horizontal.as_str(), vertical.as_str());
        self.prop("background-repeat", value)
    }

    pub fn background_size(
        &mut self,
        width: impl Into<Length>,
        height: impl Into<Length>,
    ) -> &mut Self {
        let value = format!(
            "{} {}",
            width.into().to_uss_string(),
            height.into().to_uss_string()
        );
        self.prop("background-size", value)
    }

    pub fn background_size_px(&mut self, width: f32, height: f32) -> &mut Self {
        self.prop("background-size", format!("{} {}", px(width), px(height)))
    }

    // --- Transform ---

    pub fn rotate(&mut self, degrees: f32) -> &mut Self {
        self.prop("rotate", format!("{degrees}deg"))
    }
}
