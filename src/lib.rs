//! Development tooling for WebAssembly test pages.
//!
//! Two independent tools share this crate:
//! - `serve_wasm`: a static file server that sends cross-origin isolation
//!   headers on every response and always labels `.wasm` files as
//!   `application/wasm`.
//! - `fix_warnings`: rewrites unused `let` bindings in a configured list of
//!   Rust source files by prefixing them with an underscore.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod patcher;
pub mod server;
