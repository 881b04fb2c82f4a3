//! Server settings.
//!
//! Built from defaults, then overridden by `MCP_*` environment variables.
//! A `.env` file in the working directory is loaded first if present.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default general-purpose NHL web API base URL.
pub const DEFAULT_NHL_API_BASE_URL: &str = "https://api-web.nhle.com/v1";

/// Default NHL statistics API base URL.
pub const DEFAULT_NHL_STATS_BASE_URL: &str = "https://api.nhle.com/stats/rest/en";

/// Default per-request timeout, in seconds.
pub const DEFAULT_NHL_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub nhl: NhlApiConfig,
    pub logging: LoggingConfig,
    pub transport: TransportConfig,
}

/// Identity reported in the MCP `initialize` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    /// Always the crate version; not overridable.
    pub version: String,
}

/// Upstream NHL API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NhlApiConfig {
    /// Base URL for games, schedules, standings, players and leaders.
    pub base_url: String,

    /// Base URL for the statistics REST API.
    pub stats_base_url: String,

    /// Per-request timeout in seconds. Timeouts fail the call.
    pub timeout_secs: u64,
}

impl Default for NhlApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NHL_API_BASE_URL.to_string(),
            stats_base_url: DEFAULT_NHL_STATS_BASE_URL.to_string(),
            timeout_secs: DEFAULT_NHL_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base level (`trace` .. `error`); `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "nhl-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            nhl: NhlApiConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Defaults overlaid with `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_NHL_*` and the transport variables.
    ///
    /// Never fails: unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        // A missing .env is the normal case.
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        config.server.name = std::env::var("MCP_SERVER_NAME").unwrap_or(config.server.name);
        config.logging.level = std::env::var("MCP_LOG_LEVEL").unwrap_or(config.logging.level);

        if let Ok(url) = std::env::var("MCP_NHL_API_BASE_URL") {
            info!("NHL API base URL overridden: {}", url);
            config.nhl.base_url = url;
        }

        if let Ok(url) = std::env::var("MCP_NHL_STATS_BASE_URL") {
            info!("NHL stats API base URL overridden: {}", url);
            config.nhl.stats_base_url = url;
        }

        if let Ok(raw) = std::env::var("MCP_NHL_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.nhl.timeout_secs = secs,
                _ => warn!(
                    "Ignoring invalid MCP_NHL_TIMEOUT_SECS={:?}, using {}s",
                    raw, DEFAULT_NHL_TIMEOUT_SECS
                ),
            }
        }

        config.transport = TransportConfig::from_env();

        config
    }
}
