// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub patcher: PatcherConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served as the site root. Relative paths resolve against
    /// the current working directory.
    pub static_dir: String,
    /// Page suggested in the startup banner as the entry point.
    pub entry_page: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

/// Warning-patcher configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PatcherConfig {
    /// Files to rewrite, relative to the working directory.
    #[serde(default = "default_patch_targets")]
    pub files: Vec<String>,
}

fn default_patch_targets() -> Vec<String> {
    vec![
        "examples/mongodb_style_document_demo.rs".to_string(),
        "examples/advanced_integration_tests.rs".to_string(),
    ]
}

impl Default for PatcherConfig {
    fn default() -> Self {
        Self {
            files: default_patch_targets(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patch_targets() {
        let cfg = PatcherConfig::default();
        assert_eq!(cfg.files.len(), 2);
        assert!(cfg.files[0].ends_with(".rs"));
    }
}
