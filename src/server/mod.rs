//! Server module
//!
//! Binds the listener and runs the accept loop. Single-threaded by design:
//! the binary drives this on a current-thread runtime inside a `LocalSet`,
//! and each connection is served as a local task.

use crate::config::Config;
use crate::handler;
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Read-only state shared with every request handler
pub struct ServerState {
    pub static_root: PathBuf,
    pub access_log: bool,
}

impl ServerState {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            static_root: PathBuf::from(&cfg.server.static_dir),
            access_log: cfg.logging.access_log,
        }
    }
}

/// Run the server until the process is killed.
/// A bind failure is fatal and propagates out immediately.
pub async fn run(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    let state = Arc::new(ServerState::from_config(&cfg));
    logger::log_server_start(cfg.display_host(), cfg.server.port, &cfg.server.entry_page);

    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                handle_connection(stream, peer_addr, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Serve one connection as a local task
fn handle_connection(stream: tokio::net::TcpStream, peer_addr: SocketAddr, state: Arc<ServerState>) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);
        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { handler::handle_request(req, state, Some(peer_addr)).await }
            }),
        );
        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
