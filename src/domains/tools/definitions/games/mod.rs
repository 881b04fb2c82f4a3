pub mod game_details;
pub mod live_games;
pub mod schedule;

pub use game_details::GameDetailsTool;
pub use live_games::LiveGamesTool;
pub use schedule::ScheduleTool;
