//! Head-to-head comparison tool definition.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::warn;

use crate::domains::nhl::{NhlClient, analytics};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::ToolDefinition;

/// Parameters for the head-to-head tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CompareTeamsParams {
    /// First team abbreviation (e.g., TOR)
    pub team1: String,

    /// Second team abbreviation (e.g., MTL)
    pub team2: String,

    /// Season in format YYYYYYYY (e.g., 20242025), defaults to current season
    #[serde(default)]
    pub season: Option<String>,
}

/// Head-to-head tool.
///
/// Upstream failures are answered as `Error comparing teams: ...` text.
pub struct CompareTeamsTool;

#[async_trait]
impl ToolDefinition for CompareTeamsTool {
    const NAME: &'static str = "compare_teams";

    const DESCRIPTION: &'static str = "Compare head-to-head statistics between two NHL teams including recent matchups and historical records.";

    type Params = CompareTeamsParams;

    async fn execute(client: &NhlClient, params: Self::Params) -> Result<String, ToolError> {
        let report = analytics::compare_teams(
            client,
            &params.team1,
            &params.team2,
            params.season.as_deref(),
        )
        .await;

        Ok(report.unwrap_or_else(|e| {
            warn!("Head-to-head failed: {}", e);
            format!("Error comparing teams: {}", e)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::nhl::client::tests::{mock_client, unreachable_client};
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
    async fn test_compare_teams_series() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/club-schedule-season/TOR/20242025"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "games": [
                    {
                        "gameDate": "2024-10-12", "gameState": "OFF",
                        "homeTeam": {"abbrev": "TOR", "score": 3},
                        "awayTeam": {"abbrev": "MTL", "score": 2}
                    },
                    {
                        "gameDate": "2024-11-09", "gameState": "FINAL",
                        "homeTeam": {"abbrev": "MTL", "score": 4},
                        "awayTeam": {"abbrev": "TOR", "score": 1}
                    }
                ]
            })))
            .mount(&server)
            .await;

        let result = dispatch::<CompareTeamsTool>(
            &mock_client(&server),
            json!({"team1": "TOR", "team2": "MTL", "season": "20242025"}),
        )
        .await;
        let text = result_text(&result);
        assert!(text.starts_with("Head-to-Head: TOR vs MTL\n\nSeason Series: TOR 1-1 MTL\n"));
    }

    #[tokio::test]
    async fn test_compare_teams_failure_is_text() {
        let result = dispatch::<CompareTeamsTool>(
            &unreachable_client(),
            json!({"team1": "TOR", "team2": "MTL"}),
        )
        .await;
        assert!(!is_error(&result));
        assert!(result_text(&result).starts_with("Error comparing teams: "));
    }
}
