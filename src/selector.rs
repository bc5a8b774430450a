//! USS selectors with combinators and pseudo-classes.
//!
//! Selectors are immutable. Every combinator and pseudo-class returns a new
//! [`Selector`] composed from the text of its operands; nothing keeps a link
//! back to the selectors it was derived from.
//!
//! ```
//! use typeuss::Selector;
//!
//! let button = Selector::class("btn");
//! assert_eq!(button.hover().text(), ".btn:hover");
//!
//! let icon = Selector::class("icon");
//! assert_eq!((&button >> &icon).text(), ".btn > .icon");
//! assert_eq!((&button + &icon).text(), ".btn + .icon");
//! assert_eq!(Selector::type_name("Button").and(&button).text(), "Button.btn");
//! ```

use std::fmt;
use std::ops::{Add, Shr};

use crate::error::{Error, Result};
use crate::style::{Style, StyleBuilder, ToUss};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    text: String,
    class_name: Option<String>,
}

impl Selector {
    fn new(text: String) -> Self {
        Self {
            text,
            class_name: None,
        }
    }

    /// Class selector: `.name`.
    pub fn class(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            text: format!(".{name}"),
            class_name: Some(name),
        }
    }

    /// ID selector: `#name`.
    pub fn id(name: impl AsRef<str>) -> Self {
        Self::new(format!("#{}", name.as_ref()))
    }

    /// Type selector from an element type name.
    pub fn type_name(name: impl Into<String>) -> Self {
        Self::new(name.into())
    }

    /// Type selector named after a Rust type, without its module path or
    /// generic arguments.
    pub fn type_of<T: ?Sized>() -> Self {
        let full = std::any::type_name::<T>();
        let base = full.split('<').next().unwrap_or(full);
        let name = base.rsplit("::").next().unwrap_or(base);
        Self::new(name.to_string())
    }

    /// Selector text used exactly as given, for anything the builder API
    /// cannot express. The text is not checked.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(text.into())
    }

    /// Universal selector: `*`.
    pub fn all() -> Self {
        Self::new("*".to_string())
    }

    /// The full selector text, e.g. `.btn:hover > .icon`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The bare class name, only for selectors made by [`Selector::class`].
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Name to add to an element's class list: the class name when there is
    /// one, otherwise the full selector text.
    pub fn class_list_name(&self) -> &str {
        self.class_name().unwrap_or(&self.text)
    }

    fn pseudo(&self, keyword: &str) -> Self {
        Self::new(format!("{}:{keyword}", self.text))
    }

    pub fn hover(&self) -> Self {
        self.pseudo("hover")
    }

    pub fn active(&self) -> Self {
        self.pseudo("active")
    }

    pub fn focus(&self) -> Self {
        self.pseudo("focus")
    }

    pub fn checked(&self) -> Self {
        self.pseudo("checked")
    }

    pub fn disabled(&self) -> Self {
        self.pseudo("disabled")
    }

    pub fn enabled(&self) -> Self {
        self.pseudo("enabled")
    }

    pub fn root(&self) -> Self {
        self.pseudo("root")
    }

    /// Child combinator: `self > child`.
    pub fn child(&self, child: &Selector) -> Self {
        Self::new(format!("{} > {}", self.text, child.text))
    }

    /// Adjacent sibling combinator: `self + next`.
    pub fn adjacent(&self, next: &Selector) -> Self {
        Self::new(format!("{} + {}", self.text, next.text))
    }

    /// Descendant combinator: `self descendant`.
    pub fn descendant(&self, descendant: &Selector) -> Self {
        Self::new(format!("{} {}", self.text, descendant.text))
    }

    /// Compound selector with no separator, e.g. `Button.my-class`.
    pub fn and(&self, other: &Selector) -> Self {
        Self::new(format!("{}{}", self.text, other.text))
    }

    /// The mirror image of [`Selector::child`] (`a < b`). USS has no such
    /// combinator, so this always fails.
    #[must_use = "the error reports an unsupported combinator"]
    pub fn inverse_child(&self, _other: &Selector) -> Result<Selector> {
        Err(Error::UnsupportedCombinator {
            combinator: "<",
            hint: "use `child` (or `>>`) for the child combinator",
        })
    }

    /// Build a style rule for this selector.
    ///
    /// ```
    /// use typeuss::Selector;
    /// use typeuss::style::{Color, ToUss};
    ///
    /// let style = Selector::class("panel").style(|s| {
    ///     s.width(100).background_color(Color::RED);
    /// });
    /// assert_eq!(
    ///     style.to_uss_string(),
    ///     ".panel {\n    width: 100px;\n    background-color: rgb(255, 0, 0);\n}"
    /// );
    /// ```
    pub fn style(&self, configure: impl FnOnce(&mut StyleBuilder)) -> Style {
        let mut builder = StyleBuilder::new();
        configure(&mut builder);
        Style::new(self.clone(), builder.build())
    }

    /// Like [`Selector::style`], but the configuration may fail. Its error is
    /// returned unchanged and no rule is produced.
    pub fn try_style<E>(
        &self,
        configure: impl FnOnce(&mut StyleBuilder) -> std::result::Result<(), E>,
    ) -> std::result::Result<Style, E> {
        let mut builder = StyleBuilder::new();
        configure(&mut builder)?;
        Ok(Style::new(self.clone(), builder.build()))
    }
}

impl ToUss for Selector {
    fn to_uss(&self, buf: &mut String) {
        buf.push_str(&self.text);
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Add for &Selector {
    type Output = Selector;

    fn add(self, next: &Selector) -> Selector {
        self.adjacent(next)
    }
}

impl Add for Selector {
    type Output = Selector;

    fn add(self, next: Selector) -> Selector {
        self.adjacent(&next)
    }
}

impl Shr for &Selector {
    type Output = Selector;

    fn shr(self, child: &Selector) -> Selector {
        self.child(child)
    }
}

impl Shr for Selector {
    type Output = Selector;

    fn shr(self, child: Selector) -> Selector {
        self.child(&child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScrollView;

    #[test]
    fn test_factories() {
        let class = Selector::class("panel");
        assert_eq!(class.text(), ".panel");
        assert_eq!(class.class_name(), Some("panel"));

        assert_eq!(Selector::id("header").text(), "#header");
        assert_eq!(Selector::type_name("Label").text(), "Label");
        assert_eq!(Selector::all().text(), "*");
        assert_eq!(Selector::id("header").class_name(), None);
    }

    #[test]
    fn test_type_of_strips_path() {
        assert_eq!(Selector::type_of::<ScrollView>().text(), "ScrollView");
        assert_eq!(Selector::type_of::<Vec<u8>>().text(), "Vec");
    }

    #[test]
    fn test_pseudo_classes() {
        let btn = Selector::class("btn");
        assert_eq!(btn.hover().text(), ".btn:hover");
        assert_eq!(btn.active().text(), ".btn:active");
        assert_eq!(btn.focus().text(), ".btn:focus");
        assert_eq!(btn.checked().text(), ".btn:checked");
        assert_eq!(btn.disabled().text(), ".btn:disabled");
        assert_eq!(btn.enabled().text(), ".btn:enabled");
        assert_eq!(Selector::all().root().text(), "*:root");
    }

    #[test]
    fn test_derived_selectors_leave_parent_untouched() {
        let btn = Selector::class("btn");
        let hovered = btn.hover();
        assert_eq!(btn.text(), ".btn");
        assert_eq!(btn.class_name(), Some("btn"));
        // Derived selectors are no longer bare class selectors.
        assert_eq!(hovered.class_name(), None);
        assert_eq!(hovered.class_list_name(), ".btn:hover");
        assert_eq!(btn.class_list_name(), "btn");
    }

    #[test]
    fn test_combinators() {
        let a = Selector::class("a");
        let b = Selector::id("b");
        assert_eq!(a.child(&b).text(), ".a > #b");
        assert_eq!(a.adjacent(&b).text(), ".a + #b");
        assert_eq!(a.descendant(&b).text(), ".a #b");
        assert_eq!(Selector::type_name("Button").and(&a).text(), "Button.a");
    }

    #[test]
    fn test_operators_match_methods() {
        let a = Selector::class("a");
        let b = Selector::class("b");
        assert_eq!(&a >> &b, a.child(&b));
        assert_eq!(&a + &b, a.adjacent(&b));
        assert_eq!((a.clone() >> b.clone()).text(), ".a > .b");
        assert_eq!((a + b).text(), ".a + .b");
    }

    #[test]
    fn test_combinators_are_not_commutative() {
        let a = Selector::class("a");
        let b = Selector::class("b");
        assert_ne!(a.child(&b).text(), b.child(&a).text());
        assert_ne!(a.adjacent(&b).text(), b.adjacent(&a).text());
    }

    #[test]
    fn test_combinators_associate() {
        let a = Selector::class("a");
        let b = Selector::class("b");
        let c = Selector::class("c");
        assert_eq!((&(&a >> &b) >> &c).text(), (&a >> &(&b >> &c)).text());
    }

    #[test]
    fn test_inverse_child_is_unsupported() {
        let a = Selector::class("a");
        let b = Selector::class("b");
        let err = a.inverse_child(&b).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedCombinator { combinator: "<", .. }
        ));
        assert!(err.to_string().contains("unsupported combinator"));
    }

    #[test]
    fn test_raw_is_verbatim() {
        let raw = Selector::raw("  >>> ::: {garbage");
        assert_eq!(raw.text(), "  >>> ::: {garbage");
        assert_eq!(raw.to_string(), "  >>> ::: {garbage");
    }

    #[test]
    fn test_try_style_propagates_error() {
        let sel = Selector::class("broken");
        let result: std::result::Result<Style, &str> = sel.try_style(|s| {
            s.width(10);
            Err("bad theme value")
        });
        assert_eq!(result.unwrap_err(), "bad theme value");

        let ok: std::result::Result<Style, &str> = sel.try_style(|s| {
            s.width(10);
            Ok(())
        });
        assert_eq!(ok.unwrap().properties().len(), 1);
    }
}
