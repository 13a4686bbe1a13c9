//! Prefixes unused `let` bindings with an underscore in the configured
//! list of Rust source files.
//!
//! Per-file failures are logged and skipped; the exit status is always 0.

use wasm_devserver::config::Config;
use wasm_devserver::{logger, patcher};

fn main() {
    let cfg = Config::load().unwrap_or_else(|e| {
        logger::log_warning(&format!("Falling back to default configuration: {e}"));
        Config::defaults()
    });

    let fixed = patcher::run(&cfg.patcher.files);
    println!("\nFixed {fixed} files");
}
