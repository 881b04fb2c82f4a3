//! Tool Router - builds the rmcp ToolRouter for STDIO/TCP transport.
//!
//! Routes are generated from each tool's [`ToolDefinition`] impl, all
//! sharing one NHL client.
//!
//! [`ToolDefinition`]: super::definitions::ToolDefinition

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::nhl::NhlClient;

use super::definitions::{
    CompareSeasonsTool, CompareTeamsTool, GameDetailsTool, GoalieStatsTool, LiveGamesTool,
    PlayerStatsTool, PlayoffBracketTool, ScheduleTool, StandingsTool, TeamStatsTool,
    TeamStreakTool, common::create_route,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: NhlClient) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<LiveGamesTool, S>(client.clone()))
        .with_route(create_route::<GameDetailsTool, S>(client.clone()))
        .with_route(create_route::<StandingsTool, S>(client.clone()))
        .with_route(create_route::<TeamStatsTool, S>(client.clone()))
        .with_route(create_route::<PlayerStatsTool, S>(client.clone()))
        .with_route(create_route::<GoalieStatsTool, S>(client.clone()))
        .with_route(create_route::<ScheduleTool, S>(client.clone()))
        .with_route(create_route::<PlayoffBracketTool, S>(client.clone()))
        .with_route(create_route::<CompareTeamsTool, S>(client.clone()))
        .with_route(create_route::<TeamStreakTool, S>(client.clone()))
        .with_route(create_route::<CompareSeasonsTool, S>(client))
}
