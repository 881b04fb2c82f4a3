//! Team streak tool definition.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::warn;

use crate::domains::nhl::{NhlClient, analytics};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::ToolDefinition;

/// Parameters for the streak tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamStreakParams {
    /// Team abbreviation (e.g., TOR, NYR, BOS, MTL)
    pub team_abbrev: String,
}

/// Streak tool.
///
/// Upstream failures are answered as `Error analyzing streak: ...` text.
pub struct TeamStreakTool;

#[async_trait]
impl ToolDefinition for TeamStreakTool {
    const NAME: &'static str = "get_team_streak";

    const DESCRIPTION: &'static str = "Get current winning or losing streak for an NHL team based on recent game results.";

    type Params = TeamStreakParams;

    async fn execute(client: &NhlClient, params: Self::Params) -> Result<String, ToolError> {
        let report = analytics::analyze_streak(client, &params.team_abbrev).await;

        Ok(report.unwrap_or_else(|e| {
            warn!("Streak analysis failed: {}", e);
            format!("Error analyzing streak: {}", e)
        }))
    }
}
