//! Typed style model: lengths, colors, keyword properties and the builder.
//!
//! This module contains:
//! - USS value types (Length, Color, keyword enums)
//! - StyleBuilder, which lowers typed calls to ordered StyleProperty pairs
//! - Style, the selector + properties record handed to the serializer

mod builder;
mod color;
mod length;
mod properties;
mod types;

/// Serialization of a value into USS text.
pub trait ToUss {
    /// Write this value as USS to the buffer.
    fn to_uss(&self, buf: &mut String);

    /// Convert to a USS string (convenience method).
    fn to_uss_string(&self) -> String {
        let mut buf = String::new();
        self.to_uss(&mut buf);
        buf
    }
}

pub use builder::StyleBuilder;
pub use color::Color;
pub use length::{Length, LengthExt, LengthUnit};
pub use properties::{
    Align, BackgroundPosition, DisplayStyle, FlexDirection, Font, FontStyle, Justify, Overflow,
    Position, Repeat, TextAnchor, TextOverflow, Visibility, WhiteSpace, Wrap,
};
pub use types::{Style, StyleProperty};
