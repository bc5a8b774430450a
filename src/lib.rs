//! # typeuss
//!
//! Typed style declarations compiled to Unity Style Sheet (USS) text.
//!
//! ## Features
//!
//! - Immutable [`Selector`] values with pseudo-classes and combinators
//! - [`StyleBuilder`] setters that format lengths, colors and keywords exactly
//! - Deterministic serialization: the same declarations always produce the
//!   same bytes, so regeneration is a no-op when nothing changed
//! - A [`Registry`] that groups rules by output file, plus writers that only
//!   touch files whose text changed
//!
//! ## Quick Start
//!
//! ```
//! use typeuss::{Selector, generate_uss};
//! use typeuss::style::Color;
//!
//! let panel = Selector::class("panel");
//! let styles = [
//!     panel.style(|s| {
//!         s.width(100).background_color(Color::RED);
//!     }),
//!     panel.hover().style(|s| {
//!         s.opacity(0.8);
//!     }),
//! ];
//!
//! assert_eq!(
//!     generate_uss(&styles),
//!     ".panel {\n    width: 100px;\n    background-color: rgb(255, 0, 0);\n}\n\n\
//!      .panel:hover {\n    opacity: 0.8;\n}\n"
//! );
//! ```

pub mod error;
pub mod export;
pub mod parse;
pub mod selector;
pub mod style;

#[cfg(feature = "cli")]
pub mod manifest;

pub use error::{Error, Result};
pub use export::{GeneratedSheet, Registry, generate_uss, write_sheets};
pub use selector::Selector;
pub use style::{Length, Style, StyleBuilder, StyleProperty, ToUss};
