//! JSON manifest describing sheets for the command-line driver.
//!
//! ```json
//! {
//!   "sheets": [
//!     {
//!       "output": "UI/Styles/Chat.uss",
//!       "rules": [
//!         { "selector": ".panel", "properties": [ { "name": "width", "value": "100px" } ] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Selectors and values are taken verbatim; the manifest carries text that an
//! external tool has already formatted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::export::Registry;
use crate::selector::Selector;
use crate::style::Style;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub sheets: Vec<SheetEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetEntry {
    /// Output path relative to the generation root.
    pub output: PathBuf,
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    pub selector: String,
    #[serde(default)]
    pub properties: Vec<PropertyEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyEntry {
    pub name: String,
    pub value: String,
}

impl RuleEntry {
    fn to_style(&self) -> Style {
        Selector::raw(&self.selector).style(|s| {
            for property in &self.properties {
                s.prop(&property.name, &property.value);
            }
        })
    }
}

impl Manifest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Register every sheet, in manifest order.
    pub fn to_registry(&self) -> Registry {
        let mut registry = Registry::new();
        for sheet in &self.sheets {
            registry.declare(&sheet.output, sheet.rules.iter().map(RuleEntry::to_style));
        }
        registry
    }
}
