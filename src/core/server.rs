//! The MCP server handler.
//!
//! ## Tool Architecture
//!
//! Tools live in `domains/tools/definitions/`, one file per tool. rmcp
//! sessions (STDIO/TCP) reach them through the `ToolRouter` built in
//! `domains/tools/router.rs`; the HTTP transport goes through
//! `ToolRegistry`. Both hold clones of the NHL client opened in
//! [`McpServer::new`].

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::{
    nhl::NhlClient,
    resources::{self, ResourceError, ResourceService},
    tools::{ToolError, ToolRegistry, build_tool_router},
};

const INSTRUCTIONS: &str = "NHL data server. Tools return live scores, game details, standings, \
team and player statistics, schedules and the playoff bracket from the public NHL API, plus \
derived analytics: head-to-head records, win/loss streaks and season comparisons. Teams are \
identified by abbreviation (TOR, NYR, BOS, ...), seasons by an 8-digit id such as 20242025, \
dates as YYYY-MM-DD. Resources expose season metadata, the team list, boxscores, player \
profiles, rosters and playoff series.";

/// rmcp handler for the NHL tools and resources.
///
/// Cloned once per TCP connection; clones share the NHL client pool.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,

    /// Name-based dispatch used by the HTTP transport.
    tool_registry: ToolRegistry,

    resource_service: Arc<ResourceService>,

    /// Routes `tools/call` for rmcp sessions (STDIO/TCP).
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Opens the NHL HTTP client once; every tool and resource shares it.
    pub fn new(config: Config) -> CoreResult<Self> {
        let config = Arc::new(config);
        let client = NhlClient::new(&config.nhl)?;

        let resource_service = Arc::new(ResourceService::new(
            client.clone(),
            resources::ServerInfo::from(config.as_ref()),
        ));

        Ok(Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            tool_registry: ToolRegistry::new(client),
            config,
            resource_service,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // Plain-async entry points for the HTTP transport, which speaks JSON-RPC
    // itself instead of going through an rmcp session.

    /// Tool catalog in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }

    /// Run a tool by name. Tool failures are reported inside the result.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        self.tool_registry.call_tool(name, arguments).await
    }

    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resource_service.list_resources().await
    }

    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.resource_service.list_resource_templates().await
    }

    pub async fn read_resource(
        &self,
        uri: &str,
    ) -> Result<ReadResourceResult, ResourceError> {
        self.resource_service.read_resource(uri).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}
