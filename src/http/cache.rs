//! HTTP cache control module
//!
//! `ETag` generation and conditional request handling.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate a quoted `ETag` from file content
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// True when the client's `If-None-Match` matches the server `ETag`
/// (a 304 should be sent). Handles comma-separated lists and `*`.
pub fn etag_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client| {
        client
            .split(',')
            .any(|candidate| candidate.trim() == etag || candidate.trim() == "*")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_is_quoted_and_stable() {
        let a = generate_etag(b"module bytes");
        let b = generate_etag(b"module bytes");
        assert_eq!(a, b);
        assert!(a.starts_with('"') && a.ends_with('"'));
        assert_ne!(a, generate_etag(b"other bytes"));
    }

    #[test]
    fn test_etag_matching() {
        let etag = generate_etag(b"x");
        assert!(etag_matches(Some(&etag), &etag));
        assert!(etag_matches(Some(&format!("\"stale\", {etag}")), &etag));
        assert!(etag_matches(Some("*"), &etag));
        assert!(!etag_matches(Some("\"stale\""), &etag));
        assert!(!etag_matches(None, &etag));
    }
}
