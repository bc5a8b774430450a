//! Core style records: StyleProperty and Style.

use super::ToUss;
use crate::selector::Selector;

/// A single `name: value;` declaration with a pre-formatted value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleProperty {
    name: String,
    value: String,
}

impl StyleProperty {
    pub(crate) fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl ToUss for StyleProperty {
    fn to_uss(&self, buf: &mut String) {
        buf.push_str(&self.name);
        buf.push_str(": ");
        buf.push_str(&self.value);
        buf.push(';');
    }
}

/// One stylesheet rule: a selector and its ordered declarations.
///
/// Created through [`Selector::style`] or [`Selector::try_style`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    selector: Selector,
    properties: Vec<StyleProperty>,
}

impl Style {
    pub(crate) fn new(selector: Selector, properties: Vec<StyleProperty>) -> Self {
        Self {
            selector,
            properties,
        }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Declarations in the order they were set.
    pub fn properties(&self) -> &[StyleProperty] {
        &self.properties
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl ToUss for Style {
    /// Write the rule block without a trailing newline.
    fn to_uss(&self, buf: &mut String) {
        buf.push_str(self.selector.text());
        buf.push_str(" {\n");
        for property in &self.properties {
            buf.push_str("    ");
            property.to_uss(buf);
            buf.push('\n');
        }
        buf.push('}');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_property_text() {
        let prop = StyleProperty::new("width", "100px");
        assert_eq!(prop.to_uss_string(), "width: 100px;");
    }

    #[test]
    fn test_style_block() {
        let style = Selector::class("panel").style(|s| {
            s.width(100).background_color(Color::RED);
        });
        assert_eq!(
            style.to_uss_string(),
            ".panel {\n    width: 100px;\n    background-color: rgb(255, 0, 0);\n}"
        );
    }

    #[test]
    fn test_empty_style_block() {
        let style = Selector::id("root").style(|_| {});
        assert!(style.is_empty());
        assert_eq!(style.to_uss_string(), "#root {\n}");
    }
}
