//! Tool Registry - static catalog and name-based dispatch.
//!
//! This module provides:
//! - The list of all available tools and their metadata
//! - Dispatch of a (name, arguments) pair for the HTTP transport

use rmcp::model::Tool;
use serde_json::Value;
use tracing::warn;

use crate::domains::nhl::NhlClient;

use super::ToolError;
use super::definitions::{
    CompareSeasonsTool, CompareTeamsTool, GameDetailsTool, GoalieStatsTool, LiveGamesTool,
    PlayerStatsTool, PlayoffBracketTool, ScheduleTool, StandingsTool, TeamStatsTool,
    TeamStreakTool, ToolDefinition,
    common::{dispatch, error_result, to_tool},
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns the shared NHL client used by every tool.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    client: NhlClient,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: NhlClient) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            LiveGamesTool::NAME,
            GameDetailsTool::NAME,
            StandingsTool::NAME,
            TeamStatsTool::NAME,
            PlayerStatsTool::NAME,
            GoalieStatsTool::NAME,
            ScheduleTool::NAME,
            PlayoffBracketTool::NAME,
            CompareTeamsTool::NAME,
            TeamStreakTool::NAME,
            CompareSeasonsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Both HTTP and STDIO/TCP transports advertise this list.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            to_tool::<LiveGamesTool>(),
            to_tool::<GameDetailsTool>(),
            to_tool::<StandingsTool>(),
            to_tool::<TeamStatsTool>(),
            to_tool::<PlayerStatsTool>(),
            to_tool::<GoalieStatsTool>(),
            to_tool::<ScheduleTool>(),
            to_tool::<PlayoffBracketTool>(),
            to_tool::<CompareTeamsTool>(),
            to_tool::<TeamStreakTool>(),
            to_tool::<CompareSeasonsTool>(),
        ]
    }

    /// Run a tool by name and return the serialized `CallToolResult`.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let client = &self.client;
        let result = match name {
            LiveGamesTool::NAME => dispatch::<LiveGamesTool>(client, arguments).await,
            GameDetailsTool::NAME => dispatch::<GameDetailsTool>(client, arguments).await,
            StandingsTool::NAME => dispatch::<StandingsTool>(client, arguments).await,
            TeamStatsTool::NAME => dispatch::<TeamStatsTool>(client, arguments).await,
            PlayerStatsTool::NAME => dispatch::<PlayerStatsTool>(client, arguments).await,
            GoalieStatsTool::NAME => dispatch::<GoalieStatsTool>(client, arguments).await,
            ScheduleTool::NAME => dispatch::<ScheduleTool>(client, arguments).await,
            PlayoffBracketTool::NAME => dispatch::<PlayoffBracketTool>(client, arguments).await,
            CompareTeamsTool::NAME => dispatch::<CompareTeamsTool>(client, arguments).await,
            TeamStreakTool::NAME => dispatch::<TeamStreakTool>(client, arguments).await,
            CompareSeasonsTool::NAME => dispatch::<CompareSeasonsTool>(client, arguments).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                error_result(&format!("Unknown tool: {}", name))
            }
        };

        Ok(serde_json::to_value(result)?)
    }
}
