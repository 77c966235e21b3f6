//! TCP transport.
//!
//! Line-delimited JSON-RPC over raw sockets. Each connection is its own MCP
//! session on its own task; every session reads the same catalog.

use rmcp::ServiceExt;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed `accept` before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// A bound listener, ready to serve sessions.
pub struct TcpTransport {
    listener: TcpListener,
}

impl TcpTransport {
    /// Bind the configured address.
    pub async fn bind(config: &TcpConfig) -> TransportResult<Self> {
        let addr = config.listen.to_string();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;
        Ok(Self { listener })
    }

    /// The bound address; differs from the configured one when port 0 was asked for.
    pub fn local_addr(&self) -> TransportResult<SocketAddr> {
        self.listener
            .local_addr()
            .map_err(|e| TransportError::init(e.to_string()))
    }

    /// Accept connections until the process exits.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let catalog = server.catalog();
        info!(
            "Ready - listening on {} (JSON-RPC over TCP, {} tools in {} categories)",
            self.local_addr()?,
            catalog.list_tools().len(),
            catalog.list_categories().len()
        );

        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                debug!("TCP_NODELAY not set for {}: {}", peer, e);
            }
            tokio::spawn(serve_session(server.clone(), stream, peer));
        }
    }
}

/// Run one MCP session to completion.
async fn serve_session(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    info!("Session opened for {}", peer);

    let outcome = match server.serve(stream).await {
        Ok(session) => session.waiting().await.map(|_| ()).map_err(|e| e.to_string()),
        Err(e) => Err(format!("handshake failed: {}", e)),
    };

    match outcome {
        Ok(()) => info!("Session closed for {}", peer),
        Err(e) => warn!("Session with {} ended with an error: {}", peer, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::core::transport::config::ListenAddr;
    use crate::domains::catalog::CatalogStore;
    use std::sync::Arc;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

    fn ephemeral() -> TcpConfig {
        TcpConfig {
            listen: ListenAddr {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
        }
    }

    #[tokio::test]
    async fn test_bind_reports_taken_address() {
        let first = TcpTransport::bind(&ephemeral()).await.unwrap();
        let taken = TcpConfig {
            listen: ListenAddr {
                host: "127.0.0.1".to_string(),
                port: first.local_addr().unwrap().port(),
            },
        };
        let err = TcpTransport::bind(&taken).await.err().unwrap();
        assert!(matches!(err, TransportError::BindError { .. }));
    }

    #[tokio::test]
    async fn test_session_answers_initialize() {
        let transport = TcpTransport::bind(&ephemeral()).await.unwrap();
        let addr = transport.local_addr().unwrap();
        let server = McpServer::new(Config::default(), Arc::new(CatalogStore::seed().unwrap()));
        tokio::spawn(transport.run(server));

        let stream = TcpStream::connect(addr).await.unwrap();
        let (read, mut write) = stream.into_split();
        let initialize = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": { "name": "tcp-test", "version": "0.0.0" }
            }
        });
        write
            .write_all(format!("{}\n", initialize).as_bytes())
            .await
            .unwrap();

        let mut line = String::new();
        tokio::time::timeout(Duration::from_secs(5), BufReader::new(read).read_line(&mut line))
            .await
            .unwrap()
            .unwrap();
        let response: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["serverInfo"]["name"], "ai-tool-directory");
    }
}
