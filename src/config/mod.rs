// Configuration module entry point
// Layered configuration: optional config.toml, environment overrides, defaults

mod types;

use std::net::SocketAddr;

// Re-export public types
pub use types::{Config, LoggingConfig, PatcherConfig, ServerConfig};

impl Config {
    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("DEVSERVER"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.static_dir", "static")?
            .set_default("server.entry_page", "wasm_test.html")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    /// Load from the default `config.toml` next to the working directory
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Built-in defaults, used when no config file is loadable
    pub fn defaults() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                static_dir: "static".to_string(),
                entry_page: "wasm_test.html".to_string(),
            },
            logging: LoggingConfig { access_log: true },
            patcher: PatcherConfig::default(),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Host name suitable for printing a clickable URL.
    /// A wildcard bind address is shown as localhost.
    pub fn display_host(&self) -> &str {
        match self.server.host.as_str() {
            "0.0.0.0" | "::" | "[::]" => "localhost",
            host => host,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_bind_all_interfaces() {
        let cfg = Config::defaults();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8000);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_display_host_rewrites_wildcard() {
        let mut cfg = Config::defaults();
        assert_eq!(cfg.display_host(), "localhost");
        cfg.server.host = "192.168.0.7".to_string();
        assert_eq!(cfg.display_host(), "192.168.0.7");
    }

    #[test]
    fn test_invalid_address_is_reported() {
        let mut cfg = Config::defaults();
        cfg.server.host = "not a host".to_string();
        assert!(cfg.socket_addr().is_err());
    }
}
