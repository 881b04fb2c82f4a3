//! Season comparison tool definition.
//!
//! League-wide scoring summaries per season, or one team's record per
//! season when `teamAbbrev` is given.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::warn;

use crate::domains::nhl::{NhlClient, analytics};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::ToolDefinition;

/// Parameters for the season comparison tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompareSeasonsParams {
    /// Array of seasons to compare in format YYYYYYYY (e.g., ["20232024", "20242025"])
    pub seasons: Vec<String>,

    /// Team abbreviation (e.g., TOR, NYR, BOS, MTL)
    #[serde(default)]
    pub team_abbrev: Option<String>,
}

/// Season comparison tool.
///
/// Upstream failures are answered as `Error comparing seasons: ...` text.
pub struct CompareSeasonsTool;

#[async_trait]
impl ToolDefinition for CompareSeasonsTool {
    const NAME: &'static str = "compare_seasons";

    const DESCRIPTION: &'static str = "Compare team or player statistics across multiple NHL seasons.";

    type Params = CompareSeasonsParams;

    async fn execute(client: &NhlClient, params: Self::Params) -> Result<String, ToolError> {
        let report =
            analytics::compare_seasons(client, &params.seasons, params.team_abbrev.as_deref())
                .await;

        Ok(report.unwrap_or_else(|e| {
            warn!("Season comparison failed: {}", e);
            format!("Error comparing seasons: {}", e)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::nhl::client::tests::mock_client;
    use crate::domains::tools::definitions::common::{
        dispatch,
        tests::{is_error, result_text},
    };
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[tokio::test]
    async fn test_compare_seasons_for_team() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/standings/20232024"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "standings": [{"teamAbbrev": {"default": "TOR"}, "wins": 46, "points": 102}]
            })))
            .mount(&server)
            .await;

        let result = dispatch::<CompareSeasonsTool>(
            &mock_client(&server),
            json!({"seasons": ["20232024"], "teamAbbrev": "TOR"}),
        )
        .await;
        let text = result_text(&result);
        assert!(text.starts_with("Season Comparison for TOR:\n\n"));
        assert!(text.contains("2023-2024"));
    }

    #[tokio::test]
    async fn test_compare_seasons_aborts_on_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/standings/20232024"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"standings": []})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/standings/20242025"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = dispatch::<CompareSeasonsTool>(
            &mock_client(&server),
            json!({"seasons": ["20232024", "20242025"]}),
        )
        .await;
        assert!(!is_error(&result));
        let text = result_text(&result);
        assert!(text.starts_with("Error comparing seasons: "));
        assert!(!text.contains("Season Comparison"));
    }

    #[tokio::test]
    async fn test_compare_seasons_requires_list() {
        let server = MockServer::start().await;
        let result = dispatch::<CompareSeasonsTool>(&mock_client(&server), json!({})).await;
        assert!(!is_error(&result));
        assert!(result_text(&result).starts_with("Error executing compare_seasons: "));
    }
}
