//! Goalie leaders tool definition.
//!
//! Always ranked by save percentage.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::nhl::{
    NhlClient,
    client::DEFAULT_GOALIE_CATEGORY,
    format::format_goalie_table,
};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::{
    ToolDefinition,
    common::{default_limit, whole_number},
};

/// Parameters for the goalie leaders tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GoalieStatsParams {
    /// Number of goalies to return (defaults to 20)
    #[serde(default = "default_limit", deserialize_with = "whole_number")]
    pub limit: u32,

    /// Season in format YYYYYYYY (e.g., 20242025), defaults to current season
    #[serde(default)]
    pub season: Option<String>,
}

/// Goalie leaders tool.
pub struct GoalieStatsTool;

#[async_trait]
impl ToolDefinition for GoalieStatsTool {
    const NAME: &'static str = "get_goalie_stats";

    const DESCRIPTION: &'static str = "Get statistics for NHL goalies including save percentage, GAA, wins, shutouts, and other goalie-specific metrics.";

    type Params = GoalieStatsParams;

    async fn execute(client: &NhlClient, params: Self::Params) -> Result<String, ToolError> {
        let goalies = client
            .top_goalies(params.limit, params.season.as_deref(), DEFAULT_GOALIE_CATEGORY)
            .await?;
        Ok(format_goalie_table(&goalies, DEFAULT_GOALIE_CATEGORY))
    }
}
