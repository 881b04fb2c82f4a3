//! NHL MCP Server Entry Point
//!
//! Loads configuration, initializes logging, opens the NHL client and serves
//! the configured transport until the client goes away or Ctrl-C.

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use nhl_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!(
        "NHL API: {} (stats: {}), timeout {}s",
        config.nhl.base_url, config.nhl.stats_base_url, config.nhl.timeout_secs
    );

    let server = McpServer::new(config.clone()).context("failed to initialize server")?;

    TransportService::new(config.transport)
        .run(server)
        .await
        .context("transport failed")?;

    info!("Server shut down");

    Ok(())
}

/// Logs go to stderr so STDIO mode keeps stdout for protocol frames.
///
/// `RUST_LOG` wins over the configured level; an unparseable level means
/// `info`. Connection-pool chatter from hyper is capped at `warn`.
fn init_logging(level: &str) {
    let level: Level = level.parse().unwrap_or(Level::INFO);

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
        .add_directive("hyper_util=warn".parse().unwrap_or_else(|_| level.into()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
