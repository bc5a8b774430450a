//! USS keyword property types and the enum_property! macro.
//!
//! Every keyword enum carries a `#[default]` variant. That variant is the
//! keyword emitted when text does not name a known value, so a stray keyword
//! degrades to the group's default instead of aborting generation.

use std::fmt::Write;

use super::ToUss;

/// Macro for defining USS keyword enums with automatic ToUss implementation.
///
/// # Example
///
/// ```ignore
/// enum_property! {
///     /// Overflow behavior.
///     pub enum Overflow {
///         #[default]
///         Visible => "visible",
///         Hidden => "hidden",
///     }
/// }
/// ```
macro_rules! enum_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $uss:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Returns the USS keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $uss,)*
                }
            }

            /// Parse a USS keyword into this enum.
            #[inline]
            pub fn from_uss(s: &str) -> Option<Self> {
                match s {
                    $($uss => Some($name::$variant),)*
                    _ => None,
                }
            }

            /// Parse a USS keyword, falling back to the default keyword.
            pub fn from_uss_or_default(s: &str) -> Self {
                Self::from_uss(s).unwrap_or_default()
            }
        }

        impl ToUss for $name {
            fn to_uss(&self, buf: &mut String) {
                buf.push_str(self.as_str());
            }
        }
    };
}

enum_property! {
    /// Main axis of a flex container.
    pub enum FlexDirection {
        #[default]
        Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

enum_property! {
    /// Flex line wrapping.
    pub enum Wrap {
        #[default]
        NoWrap => "nowrap",
        Wrap => "wrap",
        WrapReverse => "wrap-reverse",
    }
}

enum_property! {
    /// Cross-axis alignment for align-items, align-self and align-content.
    pub enum Align {
        #[default]
        Auto => "auto",
        FlexStart => "flex-start",
        Center => "center",
        FlexEnd => "flex-end",
        Stretch => "stretch",
    }
}

enum_property! {
    /// Main-axis distribution for justify-content.
    pub enum Justify {
        #[default]
        FlexStart => "flex-start",
        Center => "center",
        FlexEnd => "flex-end",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
    }
}

enum_property! {
    pub enum Position {
        #[default]
        Relative => "relative",
        Absolute => "absolute",
    }
}

enum_property! {
    pub enum DisplayStyle {
        #[default]
        Flex => "flex",
        None => "none",
    }
}

enum_property! {
    pub enum Visibility {
        #[default]
        Visible => "visible",
        Hidden => "hidden",
    }
}

enum_property! {
    pub enum Overflow {
        #[default]
        Visible => "visible",
        Hidden => "hidden",
    }
}

enum_property! {
    /// How clipped text is rendered.
    pub enum TextOverflow {
        #[default]
        Clip => "clip",
        Ellipsis => "ellipsis",
    }
}

enum_property! {
    pub enum WhiteSpace {
        #[default]
        Normal => "normal",
        NoWrap => "nowrap",
    }
}

enum_property! {
    /// Combined font style and weight (`-unity-font-style`).
    pub enum FontStyle {
        #[default]
        Normal => "normal",
        Bold => "bold",
        Italic => "italic",
        BoldAndItalic => "bold-and-italic",
    }
}

enum_property! {
    /// Nine-way text anchor (`-unity-text-align`).
    pub enum TextAnchor {
        UpperLeft => "upper-left",
        UpperCenter => "upper-center",
        UpperRight => "upper-right",
        #[default]
        MiddleLeft => "middle-left",
        MiddleCenter => "middle-center",
        MiddleRight => "middle-right",
        LowerLeft => "lower-left",
        LowerCenter => "lower-center",
        LowerRight => "lower-right",
    }
}

enum_property! {
    /// Background position keyword, used once per axis.
    pub enum BackgroundPosition {
        Left => "left",
        #[default]
        Center => "center",
        Right => "right",
        Top => "top",
        Bottom => "bottom",
    }
}

enum_property! {
    /// Background repeat mode, used once per axis.
    pub enum Repeat {
        #[default]
        NoRepeat => "no-repeat",
        Repeat => "repeat",
        Round => "round",
        Space => "space",
    }
}

/// A font asset referenced by name from the `Fonts/` resources folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    pub name: String,
}

impl Font {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ToUss for Font {
    fn to_uss(&self, buf: &mut String) {
        write!(buf, "resource('Fonts/{}')", self.name).unwrap();
    }
}
