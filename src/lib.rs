//! NHL MCP Server Library
//!
//! A Model Context Protocol server that proxies the public NHL web API and
//! answers with human-readable text or pass-through JSON.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **nhl**: API client, typed records, formatters and analytics
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: read-only data that can be fetched by URI
//!
//! # Example
//!
//! ```rust,no_run
//! use nhl_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
