//! Configuration management for the directory server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.
//!
//! Loading never logs: problems with individual variables are kept in
//! [`Config::warnings`] so the binary can report them once logging is up.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// Default number of tools returned by a search when the caller gives no limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Upper bound on any search limit.
pub const MAX_SEARCH_LIMIT: usize = 100;

/// Source of configuration variables, keyed by name.
pub(crate) type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Catalog source and listing defaults.
    pub catalog: CatalogConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Variables that were set but could not be used as given.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file to load instead of the bundled seed catalog.
    pub path: Option<PathBuf>,

    /// Result limit applied to searches that don't specify one.
    pub default_limit: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            default_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "ai-tool-directory".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            catalog: CatalogConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_CATALOG_PATH`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub(crate) fn from_lookup(lookup: Lookup<'_>) -> Self {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(name) = lookup("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = lookup("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(timestamps) = lookup("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps);
        }

        if let Some(path) = lookup("MCP_CATALOG_PATH") {
            config.catalog.path = Some(PathBuf::from(path));
        }

        let limit = parse_or(lookup, "MCP_SEARCH_LIMIT", DEFAULT_SEARCH_LIMIT, &mut warnings);
        config.catalog.default_limit = clamp_limit(limit);
        if config.catalog.default_limit != limit {
            warnings.push(format!(
                "MCP_SEARCH_LIMIT={} is outside 1..={}, using {}",
                limit, MAX_SEARCH_LIMIT, config.catalog.default_limit
            ));
        }

        config.transport = TransportConfig::from_lookup(lookup, &mut warnings);
        config.warnings = warnings;
        config
    }
}

/// Clamp a result limit to `1..=MAX_SEARCH_LIMIT`.
pub fn clamp_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_SEARCH_LIMIT)
}

/// Read an on/off switch. Only `false`, `0`, `no` and `off` turn it off.
pub(crate) fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

/// Parse `key`, keeping `default` (and noting why) when the value is malformed.
pub(crate) fn parse_or<T>(lookup: Lookup<'_>, key: &str, default: T, warnings: &mut Vec<String>) -> T
where
    T: FromStr + Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warnings.push(format!("Ignoring {}={:?}: not a number, using {}", key, raw, default));
            default
        }
    }
}
