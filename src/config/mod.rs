/// Configuration management for the portfolio server
///
/// Handles server binding, the SQLite file location and the stylesheet directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Static asset configuration
    pub assets: AssetsConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
    /// Verbose logging of requests and handler decisions
    pub debug: bool,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file holding the projects table (default: "projects.db")
    pub path: PathBuf,
}

/// Static asset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory served under /css
    pub css_dir: PathBuf,
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("FOLIO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("FOLIO_PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .unwrap_or(5000),
                debug: std::env::var("FOLIO_DEBUG")
                    .map(|value| parse_flag(&value))
                    .unwrap_or(false),
            },
            database: DatabaseConfig {
                path: std::env::var("FOLIO_DATABASE")
                    .unwrap_or_else(|_| "projects.db".to_string())
                    .into(),
            },
            assets: AssetsConfig {
                css_dir: PathBuf::from("css"),
            },
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn debug_flag_accepts_common_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(parse_flag(value), "{value} should enable debug");
        }
        for value in ["", "0", "false", "off", "nope"] {
            assert!(!parse_flag(value), "{value} should not enable debug");
        }
    }
}
