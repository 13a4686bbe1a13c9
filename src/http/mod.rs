//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the request handlers, decoupled from
//! file system concerns.

pub mod cache;
pub mod isolation;
pub mod mime;
pub mod range;
pub mod response;

// Re-export commonly used items
pub use response::{
    build_404_response, build_405_response, build_416_response, build_file_response,
    build_html_response, build_options_response, build_partial_response,
};
