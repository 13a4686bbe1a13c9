//! Binding rewrite rule
//!
//! Prefixes `let` bindings with an underscore so the compiler stops warning
//! about them being unused. This is a surface-text rewrite, not a parse: it
//! only touches indented `let NAME =` lines, so `let` inside a string or at
//! column 0 is left alone. A syntax-aware transform would be needed for
//! anything beyond the demo files this targets.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Indented `let IDENT =` line. Capture groups: indentation plus keyword,
/// identifier, everything up to the `=`.
fn binding_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?m)^([ \t]+let\s+)([A-Za-z_][A-Za-z0-9_]*)(\s*=)")
            .expect("binding pattern is valid")
    })
}

/// Rewrite every matching binding with a leading underscore.
///
/// Identifiers already starting with `_` are kept as-is, which makes the
/// rewrite idempotent: running it twice never produces `__name`.
pub fn underscore_bindings(source: &str) -> String {
    binding_pattern()
        .replace_all(source, |caps: &Captures<'_>| {
            if caps[2].starts_with('_') {
                caps[0].to_string()
            } else {
                format!("{}_{}{}", &caps[1], &caps[2], &caps[3])
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indented_binding_gains_underscore() {
        assert_eq!(
            underscore_bindings("    let result = 5;"),
            "    let _result = 5;"
        );
    }

    #[test]
    fn test_column_zero_let_is_untouched() {
        assert_eq!(
            underscore_bindings("let outer_result = 5;"),
            "let outer_result = 5;"
        );
    }

    #[test]
    fn test_mid_line_let_is_untouched() {
        let line = "    foo(); let inner = 1;";
        assert_eq!(underscore_bindings(line), line);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let once = underscore_bindings("    let result = 5;");
        assert_eq!(underscore_bindings(&once), once);
    }

    #[test]
    fn test_underscored_binding_is_kept() {
        let line = "    let _already = compute();";
        assert_eq!(underscore_bindings(line), line);
    }

    #[test]
    fn test_let_mut_is_untouched() {
        // `mut` is followed by the name, not `=`, so the pattern cannot match
        let line = "    let mut counter = 0;";
        assert_eq!(underscore_bindings(line), line);
    }

    #[test]
    fn test_multiple_lines() {
        let input = "fn demo() {\n    let a = 1;\n    let b = a;\n    println!(\"{b}\");\n}\n";
        let expected =
            "fn demo() {\n    let _a = 1;\n    let _b = a;\n    println!(\"{b}\");\n}\n";
        assert_eq!(underscore_bindings(input), expected);
    }

    #[test]
    fn test_no_match_is_byte_identical() {
        let input = "fn main() {\n    println!(\"hi\");\n}\n";
        assert_eq!(underscore_bindings(input), input);
    }
}
