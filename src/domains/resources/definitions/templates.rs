//! Parameterized resources.
//!
//! URIs are matched segment by segment against the templates below; each
//! match names one pass-through call on the NHL client.

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceTemplate};
use serde_json::Value;

use super::JSON_MIME_TYPE;
use crate::domains::nhl::{NhlClient, NhlResult};
use crate::domains::resources::ResourceError;

const SCHEME: &str = "nhl://";

pub const BOXSCORE_TEMPLATE: &str = "nhl://games/{gameId}/boxscore";
pub const PLAYER_TEMPLATE: &str = "nhl://players/{playerId}";
pub const ROSTER_TEMPLATE: &str = "nhl://teams/{teamAbbrev}/roster";
pub const PLAYOFF_SERIES_TEMPLATE: &str = "nhl://playoffs/{season}/series";

/// A URI resolved against one of the templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateTarget {
    Boxscore(u64),
    Player(u64),
    TeamRoster(String),
    PlayoffSeries(String),
}

impl TemplateTarget {
    /// Match `uri` against the templates.
    ///
    /// `Ok(None)` means no template has this shape. A matching shape with a
    /// malformed parameter is an `InvalidUri` error.
    pub fn parse(uri: &str) -> Result<Option<Self>, ResourceError> {
        let Some(rest) = uri.strip_prefix(SCHEME) else {
            return Ok(None);
        };
        let segments: Vec<&str> = rest.split('/').collect();

        let target = match segments.as_slice() {
            ["games", id, "boxscore"] => Self::Boxscore(parse_id(uri, id)?),
            ["players", id] => Self::Player(parse_id(uri, id)?),
            ["teams", team, "roster"] => Self::TeamRoster(non_empty(uri, team)?),
            ["playoffs", season, "series"] => Self::PlayoffSeries(non_empty(uri, season)?),
            _ => return Ok(None),
        };
        Ok(Some(target))
    }

    /// Fetch the upstream document this target points at.
    pub async fn fetch(&self, client: &NhlClient) -> NhlResult<Value> {
        match self {
            Self::Boxscore(game_id) => client.game_boxscore(*game_id).await,
            Self::Player(player_id) => client.player_landing(*player_id).await,
            Self::TeamRoster(team) => client.team_roster(team, None).await,
            Self::PlayoffSeries(season) => client.playoff_series(Some(season)).await,
        }
    }
}

fn parse_id(uri: &str, raw: &str) -> Result<u64, ResourceError> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ResourceError::invalid_uri(uri)),
    }
}

fn non_empty(uri: &str, raw: &str) -> Result<String, ResourceError> {
    if raw.is_empty() {
        Err(ResourceError::invalid_uri(uri))
    } else {
        Ok(raw.to_string())
    }
}

fn template(uri_template: &str, name: &str, title: &str, description: &str) -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: uri_template.to_string(),
        name: name.to_string(),
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        mime_type: Some(JSON_MIME_TYPE.to_string()),
    }
    .no_annotation()
}

/// Metadata for every template, in registration order.
pub fn all() -> Vec<ResourceTemplate> {
    vec![
        template(
            BOXSCORE_TEMPLATE,
            "Game Boxscore",
            "Boxscore for a game",
            "Team and player totals for a game by its NHL game ID",
        ),
        template(
            PLAYER_TEMPLATE,
            "Player Profile",
            "Player landing page",
            "Biography and current statistics for a player by NHL player ID",
        ),
        template(
            ROSTER_TEMPLATE,
            "Team Roster",
            "Current roster",
            "Current-season roster for a team abbreviation (e.g., TOR)",
        ),
        template(
            PLAYOFF_SERIES_TEMPLATE,
            "Playoff Series",
            "Playoff series for a season",
            "Playoff series for a season in format YYYYYYYY (e.g., 20232024)",
        ),
    ]
}
