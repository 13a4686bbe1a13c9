//! Warning-Patcher module
//!
//! Rewrites unused `let` bindings across a configured list of files. Each
//! file is processed independently; a failure on one file is logged and the
//! driver moves on to the next.

pub mod process;
pub mod rewrite;

pub use process::{process_file, PatchError, PatchOutcome};
pub use rewrite::underscore_bindings;

use crate::logger;
use std::path::Path;

/// Patch every file in the list, continuing past per-file failures.
/// Returns how many files were modified.
pub fn run(files: &[String]) -> usize {
    let mut fixed = 0;
    for file in files {
        match process_file(Path::new(file)) {
            Ok(PatchOutcome::Changed) => {
                logger::log_info(&format!("Fixed unused variables in {file}"));
                fixed += 1;
            }
            Ok(PatchOutcome::Unchanged) => {
                logger::log_info(&format!("No changes needed in {file}"));
            }
            Err(e) => {
                logger::log_error(&format!("Error processing {file}: {e}"));
            }
        }
    }
    fixed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_counts_only_changed_files() {
        let dir = TempDir::new().unwrap();
        let dirty = dir.path().join("dirty.rs");
        let clean = dir.path().join("clean.rs");
        fs::write(&dirty, "fn f() {\n    let x = 1;\n}\n").unwrap();
        fs::write(&clean, "fn g() {}\n").unwrap();

        let files = vec![
            dirty.display().to_string(),
            clean.display().to_string(),
        ];
        assert_eq!(run(&files), 1);
    }

    #[test]
    fn test_run_continues_past_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.rs");
        let dirty = dir.path().join("dirty.rs");
        fs::write(&dirty, "fn f() {\n    let x = 1;\n}\n").unwrap();

        // Missing file comes first and must not stop the run
        let files = vec![
            missing.display().to_string(),
            dirty.display().to_string(),
        ];
        assert_eq!(run(&files), 1);
        assert!(fs::read_to_string(&dirty).unwrap().contains("let _x"));
    }

    #[test]
    fn test_run_with_empty_list() {
        assert_eq!(run(&[]), 0);
    }
}
