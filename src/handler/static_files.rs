//! Static file serving module
//!
//! Path resolution under the served root, index file handling, generated
//! directory listings, and file responses with conditional and range
//! request support.

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, range, range::RangeOutcome};
use crate::logger;
use crate::server::ServerState;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Serve the request path from the static root
pub async fn serve_path(ctx: &RequestContext, state: &ServerState) -> Response<Full<Bytes>> {
    let Some(target) = resolve(&state.static_root, &ctx.path).await else {
        return http::build_404_response();
    };

    if target.is_dir() {
        // Relative links in a listing only work with a trailing slash
        if !ctx.path.ends_with('/') {
            return http::response::build_redirect_response(&format!("{}/", ctx.path));
        }
        for index in INDEX_FILES {
            let candidate = target.join(index);
            if candidate.is_file() {
                return serve_file(ctx, &candidate).await;
            }
        }
        return serve_listing(ctx, &target).await;
    }

    serve_file(ctx, &target).await
}

/// Resolve a request path to a file system path inside the static root.
/// Returns `None` for anything missing or escaping the root.
async fn resolve(static_root: &Path, request_path: &str) -> Option<PathBuf> {
    let clean = request_path.trim_start_matches('/').replace("..", "");

    let root = match fs::canonicalize(static_root).await {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{}': {e}",
                static_root.display()
            ));
            return None;
        }
    };

    let joined = root.join(clean.trim_start_matches('/'));
    // Missing files simply become 404, no logging needed
    let target = fs::canonicalize(&joined).await.ok()?;
    if !target.starts_with(&root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {request_path} -> {}",
            target.display()
        ));
        return None;
    }
    Some(target)
}

/// Read a file and answer with conditional and range semantics
async fn serve_file(ctx: &RequestContext, path: &Path) -> Response<Full<Bytes>> {
    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
            return http::build_404_response();
        }
    };

    let content_type = mime::content_type_for(path);
    let etag = cache::generate_etag(&content);

    if cache::etag_matches(ctx.if_none_match.as_deref(), &etag) {
        return http::response::build_304_response(&etag);
    }

    let total_size = content.len();
    match range::parse(ctx.range.as_deref(), total_size) {
        RangeOutcome::Partial(span) => {
            let body = Bytes::from(content[span.clone()].to_vec());
            http::build_partial_response(body, content_type, &etag, &span, total_size, ctx.is_head)
        }
        RangeOutcome::Unsatisfiable => http::build_416_response(total_size),
        RangeOutcome::Full => {
            http::build_file_response(Bytes::from(content), content_type, &etag, ctx.is_head)
        }
    }
}

/// Generate an HTML directory listing
async fn serve_listing(ctx: &RequestContext, dir: &Path) -> Response<Full<Bytes>> {
    let names = match read_entry_names(dir).await {
        Ok(n) => n,
        Err(e) => {
            logger::log_error(&format!("Failed to list directory '{}': {e}", dir.display()));
            return http::build_404_response();
        }
    };

    let title = format!("Directory listing for {}", escape_html(&ctx.path));
    let mut page = String::new();
    page.push_str("<!DOCTYPE HTML>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{title}</title>\n</head>\n<body>\n"));
    page.push_str(&format!("<h1>{title}</h1>\n<hr>\n<ul>\n"));
    for name in names {
        let escaped = escape_html(&name);
        page.push_str(&format!("<li><a href=\"{escaped}\">{escaped}</a></li>\n"));
    }
    page.push_str("</ul>\n<hr>\n</body>\n</html>\n");

    http::build_html_response(page, ctx.is_head)
}

/// Entry names in a directory, sorted, with a trailing slash on directories
async fn read_entry_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
