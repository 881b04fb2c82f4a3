//! Tool definitions module.
//!
//! Each tool lives in its own file and implements [`ToolDefinition`]:
//!
//! - `games/` - scores, game details, schedules
//! - `league/` - standings, skater and goalie leaders, playoff bracket
//! - `teams/` - team stats, head-to-head, streaks, season comparison
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in the matching group (e.g., `teams/my_tool.rs`)
//! 2. Implement `ToolDefinition` for a unit struct
//! 3. Export it here
//! 4. Register it in `registry.rs` and `router.rs`

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::ToolError;
use crate::domains::nhl::NhlClient;

pub mod common;
pub mod games;
pub mod league;
pub mod teams;

pub use games::{GameDetailsTool, LiveGamesTool, ScheduleTool};
pub use league::{GoalieStatsTool, PlayerStatsTool, PlayoffBracketTool, StandingsTool};
pub use teams::{CompareSeasonsTool, CompareTeamsTool, TeamStatsTool, TeamStreakTool};

/// Trait for tool definitions.
///
/// A tool is a name, a description, an argument shape (whose JSON schema is
/// advertised to clients) and an async body producing the response text.
#[async_trait]
pub trait ToolDefinition: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Argument object accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool against the NHL API.
    async fn execute(client: &NhlClient, params: Self::Params) -> Result<String, ToolError>;
}
