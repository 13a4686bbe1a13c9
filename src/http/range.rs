//! HTTP Range header parsing
//!
//! Single-range `bytes=` requests only; multi-range and other units fall
//! back to a full response, per RFC 7233's permission to ignore Range.

use std::ops::Range;

/// Outcome of parsing a Range header against a known body size
#[derive(Debug, PartialEq, Eq)]
pub enum RangeOutcome {
    /// No Range header, unsupported unit, or malformed value
    Full,
    /// Byte range to serve (half-open, within the body)
    Partial(Range<usize>),
    /// Syntactically valid but outside the body, answer 416
    Unsatisfiable,
}

/// Parse a Range header value against the total body size
pub fn parse(header: Option<&str>, size: usize) -> RangeOutcome {
    let Some(spec) = header.and_then(|h| h.strip_prefix("bytes=")) else {
        return RangeOutcome::Full;
    };
    if spec.contains(',') {
        return RangeOutcome::Full;
    }
    let Some((start_str, end_str)) = spec.split_once('-') else {
        return RangeOutcome::Full;
    };

    // Suffix form "-N": last N bytes
    if start_str.trim().is_empty() {
        return match end_str.trim().parse::<usize>() {
            Ok(0) => RangeOutcome::Unsatisfiable,
            Ok(n) => RangeOutcome::Partial(size.saturating_sub(n)..size),
            Err(_) => RangeOutcome::Full,
        };
    }

    let Ok(start) = start_str.trim().parse::<usize>() else {
        return RangeOutcome::Full;
    };
    if start >= size {
        return RangeOutcome::Unsatisfiable;
    }

    // Open form "N-": from N to the end
    if end_str.trim().is_empty() {
        return RangeOutcome::Partial(start..size);
    }

    let Ok(end) = end_str.trim().parse::<usize>() else {
        return RangeOutcome::Full;
    };
    if end < start {
        return RangeOutcome::Unsatisfiable;
    }
    RangeOutcome::Partial(start..(end + 1).min(size))
}
