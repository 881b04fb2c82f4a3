pub mod compare_seasons;
pub mod compare_teams;
pub mod team_stats;
pub mod team_streak;

pub use compare_seasons::CompareSeasonsTool;
pub use compare_teams::CompareTeamsTool;
pub use team_stats::TeamStatsTool;
pub use team_streak::TeamStreakTool;
