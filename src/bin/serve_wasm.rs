//! Static server for WebAssembly test pages.
//!
//! Serves the configured static directory with cross-origin isolation
//! headers on every response and `application/wasm` for `.wasm` files.

use wasm_devserver::config::Config;
use wasm_devserver::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    // spawn_local keeps connection handling on this one thread
    let local = tokio::task::LocalSet::new();
    runtime.block_on(local.run_until(server::run(cfg)))
}
