//! Export module: USS text generation and the driver around it.
//!
//! - [`generate_uss`] renders the records for one stylesheet
//! - [`Registry`] groups records by output file and renders every file
//! - [`write_sheets`] / [`check_sheets`] persist or verify the rendered text
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use typeuss::Selector;
//! use typeuss::export::{Registry, write_sheets};
//! use typeuss::style::Color;
//!
//! let mut registry = Registry::new();
//! registry.declare(
//!     "UI/Styles/Chat.uss",
//!     [Selector::class("panel").style(|s| {
//!         s.width(100).background_color(Color::RED);
//!     })],
//! );
//!
//! let report = write_sheets(Path::new("Assets"), &registry.generate_all())?;
//! println!("{} file(s) written", report.written.len());
//! # Ok::<(), typeuss::Error>(())
//! ```

mod registry;
mod uss_gen;
mod writer;

pub use registry::{GeneratedSheet, Registry, Sheet};
pub use uss_gen::{generate_uss, write_uss};
pub use writer::{
    StaleSheet, Staleness, WriteReport, check_sheets, resolve_output_path, write_sheets,
};
