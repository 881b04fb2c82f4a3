//! Server info resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::{ResourceKind, ServerInfo};
use crate::domains::resources::ResourceError;
use rmcp::model::ResourceContents;

/// Server information resource.
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "nhl://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Server name, version and the NHL API endpoints it proxies";

    fn kind() -> ResourceKind {
        ResourceKind::ServerInfo
    }
}

impl ServerInfoResource {
    pub fn resolve(uri: &str, info: &ServerInfo) -> Result<ResourceContents, ResourceError> {
        Ok(ResourceContents::text(
            serde_json::to_string_pretty(info)?,
            uri,
        ))
    }
}
