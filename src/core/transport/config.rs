//! Transport selection.
//!
//! `MCP_TRANSPORT` names the transport (`stdio`, `tcp` or `http`). Only the
//! transports compiled in through cargo features can be chosen; asking for
//! another one falls back to the build's default and leaves a warning.
//! Network transports read their address from `MCP_TCP_*` or `MCP_HTTP_*`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::config::Lookup;
#[cfg(any(feature = "tcp", feature = "http"))]
use crate::core::config::parse_or;
#[cfg(feature = "http")]
use crate::core::config::parse_flag;

#[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
compile_error!("enable at least one transport feature: stdio, tcp or http");

/// Host network transports bind to unless configured otherwise.
#[cfg(any(feature = "tcp", feature = "http"))]
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// The transport the directory is served over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// MCP over stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// Line-delimited JSON-RPC on a TCP socket.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// Where a network transport listens.
#[cfg(any(feature = "tcp", feature = "http"))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenAddr {
    pub host: String,
    pub port: u16,
}

#[cfg(feature = "tcp")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpConfig {
    #[serde(flatten)]
    pub listen: ListenAddr,
}

#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(flatten)]
    pub listen: ListenAddr,

    /// Path the JSON-RPC endpoint is mounted on.
    pub rpc_path: String,

    /// Answer browser preflight requests from any origin.
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
impl ListenAddr {
    /// Read `MCP_<prefix>_HOST` and `MCP_<prefix>_PORT`.
    fn from_lookup(
        lookup: Lookup<'_>,
        prefix: &str,
        default_port: u16,
        warnings: &mut Vec<String>,
    ) -> Self {
        Self {
            host: lookup(&format!("MCP_{prefix}_HOST")).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(lookup, &format!("MCP_{prefix}_PORT"), default_port, warnings),
        }
    }
}

#[cfg(any(feature = "tcp", feature = "http"))]
impl fmt::Display for ListenAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    pub const DEFAULT_PORT: u16 = 3000;
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            listen: ListenAddr {
                host: DEFAULT_HOST.to_string(),
                port: Self::DEFAULT_PORT,
            },
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_RPC_PATH: &'static str = "/mcp";

    fn from_lookup(lookup: Lookup<'_>, warnings: &mut Vec<String>) -> Self {
        let mut rpc_path =
            lookup("MCP_HTTP_PATH").unwrap_or_else(|| Self::DEFAULT_RPC_PATH.to_string());
        if !rpc_path.starts_with('/') {
            warnings.push(format!(
                "MCP_HTTP_PATH={:?} must start with '/', using {}",
                rpc_path,
                Self::DEFAULT_RPC_PATH
            ));
            rpc_path = Self::DEFAULT_RPC_PATH.to_string();
        }

        Self {
            listen: ListenAddr::from_lookup(lookup, "HTTP", Self::DEFAULT_PORT, warnings),
            rpc_path,
            enable_cors: lookup("MCP_HTTP_CORS").is_none_or(|v| parse_flag(&v)),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen: ListenAddr {
                host: DEFAULT_HOST.to_string(),
                port: Self::DEFAULT_PORT,
            },
            rpc_path: Self::DEFAULT_RPC_PATH.to_string(),
            enable_cors: true,
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        return Self::Stdio;

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        return Self::Tcp(TcpConfig::default());

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        return Self::Http(HttpConfig::default());
    }
}

impl TransportConfig {
    /// Pick the transport named by `MCP_TRANSPORT`.
    pub(crate) fn from_lookup(lookup: Lookup<'_>, warnings: &mut Vec<String>) -> Self {
        let Some(requested) = lookup("MCP_TRANSPORT") else {
            return Self::default();
        };

        match requested.trim().to_lowercase().as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig {
                listen: ListenAddr::from_lookup(lookup, "TCP", TcpConfig::DEFAULT_PORT, warnings),
            }),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_lookup(lookup, warnings)),
            "" => Self::default(),
            other => {
                let fallback = Self::default();
                warnings.push(format!(
                    "MCP_TRANSPORT={:?} is not available in this build, using {}",
                    other, fallback
                ));
                fallback
            }
        }
    }
}

impl fmt::Display for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => f.write_str("stdio"),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => write!(f, "tcp://{}", cfg.listen),
            #[cfg(feature = "http")]
            Self::Http(cfg) => write!(f, "http://{}{}", cfg.listen, cfg.rpc_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn select(vars: &[(&str, &str)]) -> (TransportConfig, Vec<String>) {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut warnings = Vec::new();
        let config = TransportConfig::from_lookup(&|key: &str| vars.get(key).cloned(), &mut warnings);
        (config, warnings)
    }

    #[test]
    fn test_unset_selects_default() {
        let (config, warnings) = select(&[]);
        assert_eq!(config, TransportConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unknown_transport_falls_back_with_warning() {
        let (config, warnings) = select(&[("MCP_TRANSPORT", "carrier-pigeon")]);
        assert_eq!(config, TransportConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("carrier-pigeon"));
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_stdio_is_default() {
        assert_eq!(TransportConfig::default().to_string(), "stdio");
        let (config, _) = select(&[("MCP_TRANSPORT", " STDIO ")]);
        assert_eq!(config, TransportConfig::Stdio);
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_address() {
        let (config, warnings) = select(&[
            ("MCP_TRANSPORT", "tcp"),
            ("MCP_TCP_HOST", "0.0.0.0"),
            ("MCP_TCP_PORT", "4000"),
        ]);
        assert!(warnings.is_empty());
        assert_eq!(config.to_string(), "tcp://0.0.0.0:4000");
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_bad_port_keeps_default() {
        let (config, warnings) = select(&[("MCP_TRANSPORT", "tcp"), ("MCP_TCP_PORT", "70000")]);
        assert_eq!(config, TransportConfig::Tcp(TcpConfig::default()));
        assert!(warnings[0].contains("MCP_TCP_PORT"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_settings() {
        let (config, warnings) = select(&[
            ("MCP_TRANSPORT", "http"),
            ("MCP_HTTP_PATH", "/rpc"),
            ("MCP_HTTP_CORS", "false"),
        ]);
        assert!(warnings.is_empty());
        assert_eq!(config.to_string(), "http://127.0.0.1:8080/rpc");
        let TransportConfig::Http(http) = config else {
            panic!("expected HTTP config");
        };
        assert!(!http.enable_cors);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_path_must_be_absolute() {
        let (config, warnings) = select(&[("MCP_TRANSPORT", "http"), ("MCP_HTTP_PATH", "rpc")]);
        assert_eq!(config, TransportConfig::Http(HttpConfig::default()));
        assert_eq!(warnings.len(), 1);
    }
}
