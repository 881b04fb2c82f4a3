//! Team statistics tool definition.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::nhl::NhlClient;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::{ToolDefinition, common::pretty_json};

/// Parameters for the team statistics tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsParams {
    /// Team abbreviation (e.g., TOR, NYR, BOS, MTL)
    pub team_abbrev: String,

    /// Season in format YYYYYYYY (e.g., 20242025), defaults to current season
    #[serde(default)]
    pub season: Option<String>,
}

/// Team statistics tool - regular-season skater and goalie stats as JSON.
pub struct TeamStatsTool;

#[async_trait]
impl ToolDefinition for TeamStatsTool {
    const NAME: &'static str = "get_team_stats";

    const DESCRIPTION: &'static str = "Get detailed statistics for a specific NHL team including roster, season performance, and player stats.";

    type Params = TeamStatsParams;

    async fn execute(client: &NhlClient, params: Self::Params) -> Result<String, ToolError> {
        let stats = client
            .team_stats(&params.team_abbrev, params.season.as_deref())
            .await?;
        pretty_json(&stats)
    }
}
