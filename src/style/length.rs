//! Length values: pixels, percentages and the `auto` / `none` keywords.

use std::fmt::Write;

use super::ToUss;

/// Unit tag for a [`Length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    #[default]
    Pixel,
    Percent,
    Auto,
    None,
}

/// A dimension value tagged with a unit.
///
/// Plain numbers convert into pixel lengths, so setters taking
/// `impl Into<Length>` accept `100` or `12.5` directly:
///
/// ```
/// use typeuss::style::{Length, LengthExt, ToUss};
///
/// assert_eq!(Length::from(100).to_uss_string(), "100px");
/// assert_eq!(50.percent().to_uss_string(), "50%");
/// assert_eq!(Length::AUTO.to_uss_string(), "auto");
/// ```
///
/// `Auto` and `None` always render their keyword; the stored value is ignored.
/// Every other unit renders as the number followed by its suffix, with pixels
/// being the fallback rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    pub const AUTO: Length = Length::new(0.0, LengthUnit::Auto);
    pub const NONE: Length = Length::new(0.0, LengthUnit::None);
    pub const ZERO: Length = Length::new(0.0, LengthUnit::Pixel);

    pub const fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Create a pixel length.
    pub const fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Pixel)
    }

    /// Create a percentage length.
    pub const fn percent(value: f32) -> Self {
        Self::new(value, LengthUnit::Percent)
    }
}

impl From<f32> for Length {
    fn from(px: f32) -> Self {
        Length::px(px)
    }
}

impl From<i32> for Length {
    fn from(px: i32) -> Self {
        Length::px(px as f32)
    }
}

impl ToUss for Length {
    fn to_uss(&self, buf: &mut String) {
        match self.unit {
            LengthUnit::Auto => buf.push_str("auto"),
            LengthUnit::None => buf.push_str("none"),
            LengthUnit::Percent => write!(buf, "{}%", self.value).unwrap(),
            LengthUnit::Pixel => write!(buf, "{}px", self.value).unwrap(),
        }
    }
}

/// Suffix-style constructors on numeric literals: `10.px()`, `50.percent()`.
pub trait LengthExt {
    fn px(self) -> Length;
    fn percent(self) -> Length;
}

impl LengthExt for i32 {
    fn px(self) -> Length {
        Length::px(self as f32)
    }

    fn percent(self) -> Length {
        Length::percent(self as f32)
    }
}

impl LengthExt for f32 {
    fn px(self) -> Length {
        Length::px(self)
    }

    fn percent(self) -> Length {
        Length::percent(self)
    }
}
