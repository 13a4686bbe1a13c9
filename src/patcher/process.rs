//! Per-file patch processing
//!
//! Reads a file, applies the rewrite rule, and writes it back only when the
//! content actually changed. No backup of the original is kept.

use crate::patcher::rewrite;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Failure while patching a single file. Non-UTF-8 content surfaces as a
/// read error, the same as a missing file or permission problem.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Result of patching one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Changed,
    Unchanged,
}

/// Apply the binding rewrite to one file in place
pub fn process_file(path: &Path) -> Result<PatchOutcome, PatchError> {
    let original = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let rewritten = rewrite::underscore_bindings(&original);
    if rewritten == original {
        return Ok(PatchOutcome::Unchanged);
    }

    fs::write(path, rewritten).map_err(|source| PatchError::Write {
        path: path.display().to_string(),
        source,
    })?;
    Ok(PatchOutcome::Changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_changed_file_is_rewritten_in_place() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("demo.rs");
        fs::write(&file, "fn f() {\n    let unused = 1;\n}\n").unwrap();

        let outcome = process_file(&file).unwrap();
        assert_eq!(outcome, PatchOutcome::Changed);
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "fn f() {\n    let _unused = 1;\n}\n"
        );
    }

    #[test]
    fn test_unchanged_file_is_not_rewritten() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("clean.rs");
        let content = "fn f() {\n    println!(\"ok\");\n}\n";
        fs::write(&file, content).unwrap();
        let before = fs::metadata(&file).unwrap().modified().unwrap();

        let outcome = process_file(&file).unwrap();
        assert_eq!(outcome, PatchOutcome::Unchanged);
        assert_eq!(fs::read_to_string(&file).unwrap(), content);
        // No write happened, so the modification time is untouched
        assert_eq!(fs::metadata(&file).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = process_file(&dir.path().join("absent.rs")).unwrap_err();
        assert!(matches!(err, PatchError::Read { .. }));
        assert!(err.to_string().contains("absent.rs"));
    }

    #[test]
    fn test_non_utf8_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("binary.rs");
        fs::write(&file, [0xff, 0xfe, 0x00, 0x41]).unwrap();
        assert!(matches!(
            process_file(&file),
            Err(PatchError::Read { .. })
        ));
    }

    #[test]
    fn test_second_pass_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("twice.rs");
        fs::write(&file, "fn f() {\n    let x = 1;\n}\n").unwrap();

        assert_eq!(process_file(&file).unwrap(), PatchOutcome::Changed);
        assert_eq!(process_file(&file).unwrap(), PatchOutcome::Unchanged);
    }
}
