//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, static file
//! dispatch, and response post-processing. The cross-origin isolation
//! headers are applied here so that every response carries them, error
//! responses included.

use crate::handler::static_files;
use crate::http::{self, isolation};
use crate::logger::{self, AccessLogEntry};
use crate::server::ServerState;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range: Option<String>,
    pub remote_addr: Option<SocketAddr>,
}

impl RequestContext {
    pub fn from_request(req: &Request<Incoming>, remote_addr: Option<SocketAddr>) -> Self {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string)
        };
        Self {
            method: req.method().clone(),
            path: req.uri().path().to_string(),
            is_head: *req.method() == Method::HEAD,
            if_none_match: header("if-none-match"),
            range: header("range"),
            remote_addr,
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<Incoming>,
    state: Arc<ServerState>,
    remote_addr: Option<SocketAddr>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let ctx = RequestContext::from_request(&req, remote_addr);
    Ok(dispatch(&ctx, &state).await)
}

/// Dispatch a request and post-process the response
pub async fn dispatch(ctx: &RequestContext, state: &ServerState) -> Response<Full<Bytes>> {
    let mut response = match ctx.method.as_str() {
        "GET" | "HEAD" => static_files::serve_path(ctx, state).await,
        "OPTIONS" => http::build_options_response(),
        other => {
            logger::log_warning(&format!("Method not allowed: {other}"));
            http::build_405_response()
        }
    };

    // Every response is cross-origin isolated, 404s and 405s included
    isolation::apply(response.headers_mut());

    if state.access_log {
        logger::log_access(&AccessLogEntry {
            remote_addr: ctx.remote_addr,
            method: ctx.method.to_string(),
            path: ctx.path.clone(),
            status: response.status().as_u16(),
            body_bytes: declared_length(&response),
        });
    }

    response
}

/// Content-Length declared on the response, 0 when absent
fn declared_length(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
