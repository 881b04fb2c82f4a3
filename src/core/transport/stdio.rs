//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP, the default mode. Logs go to
//! stderr since stdout carries the protocol.

use rmcp::ServiceExt;
use tracing::info;

use super::service::shutdown_signal;
use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve one client on stdin/stdout until it disconnects or Ctrl-C.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(TransportError::handshake)?;

        let cancel = service.cancellation_token();
        tokio::select! {
            result = service.waiting() => {
                result.map_err(TransportError::session)?;
            }
            _ = shutdown_signal() => cancel.cancel(),
        }

        info!("STDIO transport finished");
        Ok(())
    }
}
