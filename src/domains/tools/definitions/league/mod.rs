pub mod goalie_stats;
pub mod player_stats;
pub mod playoff_bracket;
pub mod standings;

pub use goalie_stats::GoalieStatsTool;
pub use player_stats::PlayerStatsTool;
pub use playoff_bracket::PlayoffBracketTool;
pub use standings::StandingsTool;
