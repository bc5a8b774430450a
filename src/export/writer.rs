//! Persisting generated sheets and checking them for staleness.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use log::{info, warn};

use super::registry::GeneratedSheet;
use crate::error::{Error, Result};
use crate::parse::{RuleDiff, diff_rules, parse_uss};

/// Outcome of [`write_sheets`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// Files created or overwritten.
    pub written: Vec<PathBuf>,
    /// Files that already held the generated text.
    pub unchanged: Vec<PathBuf>,
}

impl WriteReport {
    /// Whether any file on disk changed.
    pub fn changed(&self) -> bool {
        !self.written.is_empty()
    }
}

/// Why a sheet on disk does not match its generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staleness {
    Missing,
    /// Text differs. The rule list is empty when only formatting differs.
    Changed(Vec<RuleDiff>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleSheet {
    pub path: PathBuf,
    pub staleness: Staleness,
}

/// Resolve a sheet path under `root`, rejecting paths that escape it.
pub fn resolve_output_path(root: &Path, path: &Path) -> Result<PathBuf> {
    let invalid = |reason: &'static str| Error::InvalidOutputPath {
        path: path.to_path_buf(),
        reason,
    };
    if path.as_os_str().is_empty() {
        return Err(invalid("path is empty"));
    }
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return Err(invalid("path must not contain `..`")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("path must be relative"));
            }
        }
    }
    Ok(root.join(path))
}

/// Read a file, treating a missing file as `None`.
fn read_existing(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write each sheet under `root`, skipping files whose content is already
/// identical so that regenerating unchanged input touches nothing.
pub fn write_sheets(root: &Path, sheets: &[GeneratedSheet]) -> Result<WriteReport> {
    let mut report = WriteReport::default();

    for sheet in sheets {
        let target = resolve_output_path(root, &sheet.path)?;
        if read_existing(&target)?.as_deref() == Some(sheet.text.as_bytes()) {
            report.unchanged.push(sheet.path.clone());
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &sheet.text)?;
        info!("wrote {}", target.display());
        report.written.push(sheet.path.clone());
    }

    Ok(report)
}

/// Compare each sheet with the file under `root` without writing anything.
pub fn check_sheets(root: &Path, sheets: &[GeneratedSheet]) -> Result<Vec<StaleSheet>> {
    let mut stale = Vec::new();

    for sheet in sheets {
        let target = resolve_output_path(root, &sheet.path)?;
        let staleness = match read_existing(&target)? {
            None => Staleness::Missing,
            Some(bytes) if bytes == sheet.text.as_bytes() => continue,
            Some(bytes) => {
                let on_disk = String::from_utf8_lossy(&bytes);
                Staleness::Changed(diff_rules(&parse_uss(&sheet.text), &parse_uss(&on_disk)))
            }
        };
        warn!("{} is out of date", target.display());
        stale.push(StaleSheet {
            path: sheet.path.clone(),
            staleness,
        });
    }

    Ok(stale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(path: &str, text: &str) -> GeneratedSheet {
        GeneratedSheet {
            path: PathBuf::from(path),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_resolve_output_path() {
        let root = Path::new("/project/Assets");
        assert_eq!(
            resolve_output_path(root, Path::new("UI/Styles/Chat.uss")).unwrap(),
            PathBuf::from("/project/Assets/UI/Styles/Chat.uss")
        );
        assert!(matches!(
            resolve_output_path(root, Path::new("../escape.uss")),
            Err(Error::InvalidOutputPath { .. })
        ));
        assert!(matches!(
            resolve_output_path(root, Path::new("/abs.uss")),
            Err(Error::InvalidOutputPath { .. })
        ));
        assert!(matches!(
            resolve_output_path(root, Path::new("")),
            Err(Error::InvalidOutputPath { .. })
        ));
    }

    #[test]
    fn test_write_then_rewrite_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let sheets = vec![sheet("UI/a.uss", ".a {\n    width: 1px;\n}\n")];

        let first = write_sheets(dir.path(), &sheets).unwrap();
        assert_eq!(first.written, vec![PathBuf::from("UI/a.uss")]);
        assert!(first.changed());
        assert_eq!(
            fs::read_to_string(dir.path().join("UI/a.uss")).unwrap(),
            ".a {\n    width: 1px;\n}\n"
        );

        let second = write_sheets(dir.path(), &sheets).unwrap();
        assert!(!second.changed());
        assert_eq!(second.unchanged, vec![PathBuf::from("UI/a.uss")]);
    }

    #[test]
    fn test_check_reports_missing_and_changed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.uss"), ".b {\n    width: 2px;\n}\n").unwrap();
        fs::write(dir.path().join("c.uss"), ".c {\n    width: 3px;\n}\n").unwrap();

        let sheets = vec![
            sheet("a.uss", ".a {\n    width: 1px;\n}\n"),
            sheet("b.uss", ".b {\n    width: 20px;\n}\n"),
            sheet("c.uss", ".c {\n    width: 3px;\n}\n"),
        ];

        let stale = check_sheets(dir.path(), &sheets).unwrap();
        assert_eq!(stale.len(), 2);
        assert_eq!(stale[0].path, PathBuf::from("a.uss"));
        assert_eq!(stale[0].staleness, Staleness::Missing);
        assert_eq!(stale[1].path, PathBuf::from("b.uss"));
        match &stale[1].staleness {
            Staleness::Changed(diffs) => {
                assert_eq!(diffs.len(), 1);
                assert_eq!(diffs[0].selector(), ".b");
            }
            other => panic!("Expected Changed, got {:?}", other),
        }
        // Nothing is written by a check.
        assert!(!dir.path().join("a.uss").exists());
    }

    #[test]
    fn test_check_formatting_only_change() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.uss"), ".a { width: 1px; }").unwrap();

        let stale = check_sheets(dir.path(), &[sheet("a.uss", ".a {\n    width: 1px;\n}\n")])
            .unwrap();
        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].staleness, Staleness::Changed(Vec::new()));
    }
}
