//! Registration of style records per output stylesheet.
//!
//! The registry replaces discovery of annotated declarations: the caller
//! lists which records go to which file, and the registry renders every file.

use std::path::{Path, PathBuf};

use log::debug;
use rayon::prelude::*;

use super::uss_gen::generate_uss;
use crate::style::Style;

/// All records destined for one output file.
#[derive(Debug, Clone)]
pub struct Sheet {
    path: PathBuf,
    styles: Vec<Style>,
}

impl Sheet {
    /// Output path, relative to the generation root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn generate(&self) -> GeneratedSheet {
        GeneratedSheet {
            path: self.path.clone(),
            text: generate_uss(&self.styles),
        }
    }
}

/// Rendered stylesheet text and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSheet {
    pub path: PathBuf,
    pub text: String,
}

/// Ordered collection of sheets.
///
/// ```
/// use typeuss::{Registry, Selector};
///
/// let mut registry = Registry::new();
/// registry.declare("UI/Chat.uss", [Selector::class("chat").style(|s| { s.width(100); })]);
///
/// let sheets = registry.generate_all();
/// assert_eq!(sheets.len(), 1);
/// assert_eq!(sheets[0].text, ".chat {\n    width: 100px;\n}\n");
/// ```
#[derive(Debug, Default, Clone)]
pub struct Registry {
    sheets: Vec<Sheet>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add records to the sheet at `path`.
    ///
    /// The first declaration for a path fixes its position among the sheets;
    /// later declarations for the same path append after the earlier records.
    pub fn declare(
        &mut self,
        path: impl Into<PathBuf>,
        styles: impl IntoIterator<Item = Style>,
    ) -> &mut Self {
        let path = path.into();
        let index = match self.sheets.iter().position(|s| s.path == path) {
            Some(index) => index,
            None => {
                self.sheets.push(Sheet {
                    path,
                    styles: Vec::new(),
                });
                self.sheets.len() - 1
            }
        };
        self.sheets[index].styles.extend(styles);
        self
    }

    /// Declare records produced by a fallible function.
    ///
    /// On error nothing is registered and the error is returned unchanged.
    pub fn try_declare<E>(
        &mut self,
        path: impl Into<PathBuf>,
        produce: impl FnOnce() -> Result<Vec<Style>, E>,
    ) -> Result<&mut Self, E> {
        let styles = produce()?;
        Ok(self.declare(path, styles))
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Render every sheet, in declaration order.
    ///
    /// Sheets share no state, so they are rendered in parallel.
    pub fn generate_all(&self) -> Vec<GeneratedSheet> {
        let generated: Vec<GeneratedSheet> = self.sheets.par_iter().map(Sheet::generate).collect();
        for sheet in &generated {
            debug!(
                "generated {} ({} bytes)",
                sheet.path.display(),
                sheet.text.len()
            );
        }
        generated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Selector;

    fn rule(class: &str, width: i32) -> Style {
        Selector::class(class).style(|s| {
            s.width(width);
        })
    }

    #[test]
    fn test_declare_groups_by_path() {
        let mut registry = Registry::new();
        registry
            .declare("a.uss", [rule("one", 1)])
            .declare("b.uss", [rule("two", 2)])
            .declare("a.uss", [rule("three", 3)]);

        let sheets = registry.sheets();
        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[0].path(), Path::new("a.uss"));
        assert_eq!(sheets[0].styles().len(), 2);
        assert_eq!(sheets[0].styles()[1].selector().text(), ".three");
        assert_eq!(sheets[1].path(), Path::new("b.uss"));
    }

    #[test]
    fn test_generate_all_preserves_order() {
        let mut registry = Registry::new();
        for i in 0..16 {
            registry.declare(format!("sheet{i}.uss"), [rule("r", i)]);
        }

        let generated = registry.generate_all();
        assert_eq!(generated.len(), 16);
        for (i, sheet) in generated.iter().enumerate() {
            assert_eq!(sheet.path, PathBuf::from(format!("sheet{i}.uss")));
            assert_eq!(sheet.text, format!(".r {{\n    width: {i}px;\n}}\n"));
        }
    }

    #[test]
    fn test_try_declare_propagates_error() {
        let mut registry = Registry::new();
        let result = registry.try_declare("bad.uss", || Err::<Vec<Style>, _>("boom"));
        assert_eq!(result.unwrap_err(), "boom");
        assert!(registry.is_empty());

        registry
            .try_declare("good.uss", || Ok::<_, ()>(vec![rule("ok", 1)]))
            .unwrap();
        assert_eq!(registry.sheets().len(), 1);
    }
}
