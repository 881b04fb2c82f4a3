//! Lists and reads `nhl://` resources.
//!
//! Static resources are looked up by exact URI; anything else is tried
//! against the URI templates.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

use super::definitions::{CurrentSeasonResource, ServerInfoResource, TemplateTarget};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::Config;
use crate::domains::nhl::NhlClient;

/// Service for listing and reading resources.
pub struct ResourceService {
    client: NhlClient,

    info: ServerInfo,

    /// Key: resource URI.
    resources: HashMap<String, ResourceEntry>,

    templates: Vec<ResourceTemplate>,
}

/// A static resource and where its body comes from.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    pub resource: Resource,

    /// How the content is produced.
    pub kind: ResourceKind,
}

/// Content sources for static resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Server metadata from configuration.
    ServerInfo,

    /// Season id computed from today's date.
    CurrentSeason,

    /// Team list from the statistics API.
    TeamList,
}

/// Body of the `nhl://server/info` resource.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub api_base_url: String,
    pub stats_base_url: String,
    pub timeout_secs: u64,
}

impl From<&Config> for ServerInfo {
    fn from(config: &Config) -> Self {
        Self {
            name: config.server.name.clone(),
            version: config.server.version.clone(),
            api_base_url: config.nhl.base_url.clone(),
            stats_base_url: config.nhl.stats_base_url.clone(),
            timeout_secs: config.nhl.timeout_secs,
        }
    }
}

impl ResourceService {
    pub fn new(client: NhlClient, info: ServerInfo) -> Self {
        let mut service = Self {
            client,
            info,
            resources: HashMap::new(),
            templates: get_all_resource_templates(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }
        info!(
            "{} resources and {} templates available",
            service.resources.len(),
            service.templates.len()
        );

        service
    }

    /// Add a static resource, replacing any previous one with the same URI.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources.insert(entry.resource.raw.uri.clone(), entry);
    }

    /// Static resources sorted by URI.
    pub async fn list_resources(&self) -> Vec<Resource> {
        let mut resources: Vec<Resource> = self
            .resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect();
        resources.sort_by(|a, b| a.raw.uri.cmp(&b.raw.uri));
        resources
    }

    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Resolve `uri` to a single JSON text content.
    #[instrument(skip(self))]
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let content = match self.resources.get(uri) {
            Some(entry) => self.resolve_static(uri, entry.kind).await?,
            None => {
                let target = TemplateTarget::parse(uri)?
                    .ok_or_else(|| ResourceError::not_found(uri))?;
                json_contents(uri, &target.fetch(&self.client).await?)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    async fn resolve_static(
        &self,
        uri: &str,
        kind: ResourceKind,
    ) -> Result<ResourceContents, ResourceError> {
        match kind {
            ResourceKind::ServerInfo => ServerInfoResource::resolve(uri, &self.info),
            ResourceKind::CurrentSeason => CurrentSeasonResource::resolve(uri),
            ResourceKind::TeamList => json_contents(uri, &self.client.teams().await?),
        }
    }
}

fn json_contents(uri: &str, body: &Value) -> Result<ResourceContents, ResourceError> {
    Ok(ResourceContents::text(serde_json::to_string_pretty(body)?, uri))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::nhl::client::tests::{mock_client, unreachable_client};
    use serde_json::json;
    use tokio_test::assert_err;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn service(client: NhlClient) -> ResourceService {
        ResourceService::new(client, ServerInfo::from(&Config::default()))
    }

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = service(unreachable_client());
        let uris: Vec<String> = service
            .list_resources()
            .await
            .into_iter()
            .map(|r| r.raw.uri)
            .collect();
        assert_eq!(uris, ["nhl://season/current", "nhl://server/info", "nhl://teams"]);
        assert_eq!(service.list_resource_templates().await.len(), 4);
    }

    #[tokio::test]
    async fn test_read_server_info_offline() {
        let service = service(unreachable_client());
        let result = service.read_resource("nhl://server/info").await.unwrap();
        assert!(text_of(&result).contains("\"name\": \"nhl-mcp-server\""));
    }

    #[tokio::test]
    async fn test_read_teams_from_stats_api() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats/team"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "total": 0})))
            .expect(1)
            .mount(&server)
            .await;

        let result = service(mock_client(&server))
            .read_resource("nhl://teams")
            .await
            .unwrap();
        assert!(text_of(&result).contains("\"total\": 0"));
    }

    #[tokio::test]
    async fn test_read_boxscore_template() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gamecenter/2024020001/boxscore"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2024020001})))
            .mount(&server)
            .await;

        let result = service(mock_client(&server))
            .read_resource("nhl://games/2024020001/boxscore")
            .await
            .unwrap();
        assert_eq!(text_of(&result), "{\n  \"id\": 2024020001\n}");
    }

    #[tokio::test]
    async fn test_read_playoff_series_template() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/playoff-series/20232024/playoff"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rounds": []})))
            .expect(1)
            .mount(&server)
            .await;

        service(mock_client(&server))
            .read_resource("nhl://playoffs/20232024/series")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = service(unreachable_client());
        let err = assert_err!(service.read_resource("nhl://nothing/here").await);
        assert!(matches!(err, ResourceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_read_upstream_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/player/1/landing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = assert_err!(
            service(mock_client(&server))
                .read_resource("nhl://players/1")
                .await
        );
        assert!(matches!(err, ResourceError::Upstream(ref e) if e.is_not_found()));
    }
}
