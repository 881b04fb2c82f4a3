//! NHL domain module.
//!
//! Everything that knows about the NHL web API lives here:
//!
//! - `client.rs` - async HTTP client over the upstream endpoints
//! - `models.rs` - typed, defaulted records (games, standings, leaders)
//! - `season.rs` - season id rules
//! - `format.rs` - plain-text tables and game blocks
//! - `analytics.rs` - streaks, head-to-head and season comparisons
//! - `error.rs` - upstream fetch errors
//!
//! The tools and resources domains build on top of this module and never
//! talk HTTP themselves.

pub mod analytics;
pub mod client;
mod error;
pub mod format;
pub mod models;
pub mod season;

pub use client::NhlClient;
pub use error::{NhlError, NhlResult};
pub use season::{current_season_id, format_season};
