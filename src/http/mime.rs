//! MIME type detection module
//!
//! Returns the Content-Type for a served file. `.wasm` is special-cased:
//! browsers refuse to instantiate streaming WebAssembly without
//! `application/wasm`, so that extension bypasses the guessing table.

use std::path::Path;

/// Content type for a file path, with the WebAssembly override applied
pub fn content_type_for(path: &Path) -> &'static str {
    if path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("wasm"))
    {
        return "application/wasm";
    }
    guess_content_type(path.extension().and_then(|e| e.to_str()))
}

/// Default guess based on file extension
pub fn guess_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // Scripts and data
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",

        // Default
        _ => "application/octet-stream",
    }
}
