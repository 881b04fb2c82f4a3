//! Skater leaders tool definition.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::nhl::{
    NhlClient,
    client::DEFAULT_SKATER_CATEGORY,
    format::format_skater_table,
};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::{
    ToolDefinition,
    common::{default_limit, whole_number},
};

/// Parameters for the skater leaders tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PlayerStatsParams {
    /// Category to sort by: points, goals, assists, plusMinus, shots, shootingPctg (defaults to points)
    #[serde(default = "default_category")]
    pub category: String,

    /// Number of players to return (defaults to 20)
    #[serde(default = "default_limit", deserialize_with = "whole_number")]
    pub limit: u32,

    /// Season in format YYYYYYYY (e.g., 20242025), defaults to current season
    #[serde(default)]
    pub season: Option<String>,
}

fn default_category() -> String {
    DEFAULT_SKATER_CATEGORY.to_string()
}

/// Skater leaders tool.
pub struct PlayerStatsTool;

#[async_trait]
impl ToolDefinition for PlayerStatsTool {
    const NAME: &'static str = "get_player_stats";

    const DESCRIPTION: &'static str = "Get statistics for top NHL players including goals, assists, points, plus/minus, and other performance metrics.";

    type Params = PlayerStatsParams;

    async fn execute(client: &NhlClient, params: Self::Params) -> Result<String, ToolError> {
        let players = client
            .top_skaters(&params.category, params.limit, params.season.as_deref())
            .await?;
        Ok(format_skater_table(&players, &params.category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::nhl::client::tests::mock_client;
    use crate::domains::tools::definitions::common::{dispatch, tests::result_text};
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    #[tokio::test]
    async fn test_player_stats_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/skater-stats-leaders/current"))
            .and(query_param("categories", "points"))
            .and(query_param("limit", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "points": [{
                    "firstName": {"default": "Connor"},
                    "lastName": {"default": "McDavid"},
                    "teamAbbrev": "EDM",
                    "position": "C",
                    "value": 132
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = dispatch::<PlayerStatsTool>(&mock_client(&server), json!({})).await;
        let text = result_text(&result);
        assert!(text.starts_with("Rank | Player | Team | Pos | POINTS\n"));
        assert!(text.contains("  1 | Connor McDavid            | EDM  | C  |  132"));
    }

    #[tokio::test]
    async fn test_player_stats_for_season() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/skater-stats-leaders/20232024/2"))
            .and(query_param("categories", "goals"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let result = dispatch::<PlayerStatsTool>(
            &mock_client(&server),
            json!({"category": "goals", "limit": 5, "season": "20232024"}),
        )
        .await;
        // Missing category key means an empty table.
        assert_eq!(result_text(&result).lines().count(), 2);
    }

    #[tokio::test]
    async fn test_player_stats_float_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/skater-stats-leaders/current"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"points": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let result = dispatch::<PlayerStatsTool>(&client, json!({"limit": 5.0})).await;
        assert!(result_text(&result).starts_with("Rank | Player"));

        let result = dispatch::<PlayerStatsTool>(&client, json!({"limit": 2.5})).await;
        assert!(result_text(&result).starts_with("Error executing get_player_stats: Invalid arguments:"));
    }
}
