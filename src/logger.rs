//! Logger module
//!
//! Info and access lines go to stdout, errors and warnings to stderr.

use chrono::Local;
use std::net::SocketAddr;

pub fn log_server_start(host: &str, port: u16, entry_page: &str) {
    println!("Server running at http://{host}:{port}/");
    println!("Open http://{host}:{port}/{entry_page} to test the WASM build");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_info(message: &str) {
    println!("{message}");
}

/// Access log entry for a completed request/response exchange
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: Option<SocketAddr>,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub body_bytes: usize,
}

impl AccessLogEntry {
    /// Common Log Format line with a local timestamp
    pub fn format(&self) -> String {
        let remote = self
            .remote_addr
            .map_or_else(|| "-".to_string(), |a| a.ip().to_string());
        format!(
            "{} - - [{}] \"{} {} HTTP/1.1\" {} {}",
            remote,
            Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.status,
            self.body_bytes,
        )
    }
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_entry_format() {
        let entry = AccessLogEntry {
            remote_addr: Some("192.168.1.9:52100".parse().unwrap()),
            method: "GET".to_string(),
            path: "/wasm_test.html".to_string(),
            status: 200,
            body_bytes: 512,
        };
        let line = entry.format();
        assert!(line.starts_with("192.168.1.9 - - ["));
        assert!(line.contains("\"GET /wasm_test.html HTTP/1.1\" 200 512"));
    }

    #[test]
    fn test_access_entry_without_peer() {
        let entry = AccessLogEntry {
            remote_addr: None,
            method: "HEAD".to_string(),
            path: "/".to_string(),
            status: 404,
            body_bytes: 0,
        };
        assert!(entry.format().starts_with("- - - ["));
    }
}
