//! Cross-origin isolation headers
//!
//! `SharedArrayBuffer` and high-resolution timers require the page to be
//! cross-origin isolated, which these two headers opt into. They are set on
//! every response the server produces, error responses included.

use hyper::header::{HeaderName, HeaderValue};
use hyper::HeaderMap;

pub const EMBEDDER_POLICY: (&str, &str) = ("cross-origin-embedder-policy", "require-corp");
pub const OPENER_POLICY: (&str, &str) = ("cross-origin-opener-policy", "same-origin");

/// Apply the isolation headers to a response header map
pub fn apply(headers: &mut HeaderMap) {
    headers.insert(
        HeaderName::from_static(EMBEDDER_POLICY.0),
        HeaderValue::from_static(EMBEDDER_POLICY.1),
    );
    headers.insert(
        HeaderName::from_static(OPENER_POLICY.0),
        HeaderValue::from_static(OPENER_POLICY.1),
    );
}
