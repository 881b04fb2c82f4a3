//! Typed records for the NHL web API.
//!
//! Every record is request-scoped and immutable once decoded. Fields the
//! upstream omits or sends as `null` fall back to their defaults at this
//! boundary (numbers to zero, strings to empty) so the formatters and
//! analytics never deal with missing data.

use serde::{Deserialize, Deserializer};

/// A string that the API sometimes localizes as `{"default": "..."}`.
///
/// Also accepts a bare string; anything else decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedString(pub String);

impl LocalizedString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocalizedString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for LocalizedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LocalizedString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Plain(String),
            Localized {
                #[serde(default)]
                default: String,
            },
            Other(serde_json::Value),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Plain(s) => Self(s),
            Raw::Localized { default } => Self(default),
            Raw::Other(_) => Self::default(),
        })
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Games
// ============================================================================

/// Lifecycle tag of a game as reported upstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum GameState {
    /// `FUT`
    Future,
    /// `PRE`
    Pregame,
    /// `LIVE`
    Live,
    /// `CRIT`: late in a close game.
    Critical,
    /// `FINAL`
    Final,
    /// `OFF`: final and official.
    Official,
    /// Anything else, kept verbatim.
    Other(String),
}

impl From<String> for GameState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "FUT" => Self::Future,
            "PRE" => Self::Pregame,
            "LIVE" => Self::Live,
            "CRIT" => Self::Critical,
            "FINAL" => Self::Final,
            "OFF" => Self::Official,
            _ => Self::Other(raw),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl GameState {
    /// The raw upstream code.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Future => "FUT",
            Self::Pregame => "PRE",
            Self::Live => "LIVE",
            Self::Critical => "CRIT",
            Self::Final => "FINAL",
            Self::Official => "OFF",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Final | Self::Official)
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::Future)
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live | Self::Critical)
    }
}

/// One side of a game.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameTeam {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub abbrev: String,
    pub name: LocalizedString,
    pub common_name: LocalizedString,
    #[serde(deserialize_with = "null_as_default")]
    pub score: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodDescriptor {
    #[serde(deserialize_with = "null_as_default")]
    pub number: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub period_type: String,
}

/// A scheduled, live, or finished game.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Game {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub season: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub game_type: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub game_date: String,
    pub venue: LocalizedString,
    #[serde(deserialize_with = "null_as_default")]
    pub home_team: GameTeam,
    #[serde(deserialize_with = "null_as_default")]
    pub away_team: GameTeam,
    #[serde(deserialize_with = "null_as_default")]
    pub game_state: GameState,
    #[serde(deserialize_with = "null_as_default")]
    pub period: u32,
    pub period_descriptor: Option<PeriodDescriptor>,
}

impl Game {
    /// Current period, falling back to the period descriptor.
    pub fn current_period(&self) -> u32 {
        if self.period > 0 {
            return self.period;
        }
        self.period_descriptor
            .as_ref()
            .map(|p| p.number)
            .unwrap_or_default()
    }

    /// Whether `abbrev` plays at home in this game.
    pub fn is_home(&self, abbrev: &str) -> bool {
        self.home_team.abbrev == abbrev
    }

    /// Whether the participants are exactly `a` and `b`, in either order.
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        let (home, away) = (self.home_team.abbrev.as_str(), self.away_team.abbrev.as_str());
        (home == a && away == b) || (home == b && away == a)
    }

    /// Scores as `(own, opponent)` seen from `abbrev`'s bench.
    ///
    /// A team not playing in the game is treated as the away side.
    pub fn scores_for(&self, abbrev: &str) -> (u32, u32) {
        if self.is_home(abbrev) {
            (self.home_team.score, self.away_team.score)
        } else {
            (self.away_team.score, self.home_team.score)
        }
    }

    /// Abbreviation of `abbrev`'s opponent.
    pub fn opponent_of(&self, abbrev: &str) -> &str {
        if self.is_home(abbrev) {
            &self.away_team.abbrev
        } else {
            &self.home_team.abbrev
        }
    }
}

/// Envelope shared by the score and club-schedule endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameList {
    #[serde(deserialize_with = "null_as_default")]
    pub games: Vec<Game>,
}

// ============================================================================
// Standings
// ============================================================================

/// One team's row in the standings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStanding {
    pub team_abbrev: LocalizedString,
    pub team_name: LocalizedString,
    pub place_name: Option<LocalizedString>,
    #[serde(deserialize_with = "null_as_default")]
    pub team_logo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wins: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub losses: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub ot_losses: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub points: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub games_played: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub goal_for: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub goal_against: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub goal_differential: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub regulation_wins: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub win_pctg: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub conference_abbrev: String,
    #[serde(deserialize_with = "null_as_default")]
    pub division_abbrev: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Standings {
    #[serde(deserialize_with = "null_as_default")]
    pub standings: Vec<TeamStanding>,
}

// ============================================================================
// Leaders
// ============================================================================

/// An entry from a skater or goalie leaders list.
///
/// `value` holds whichever stat category was requested.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerLeader {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    pub first_name: LocalizedString,
    pub last_name: LocalizedString,
    #[serde(deserialize_with = "null_as_default")]
    pub sweater_number: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub headshot: String,
    #[serde(deserialize_with = "null_as_default")]
    pub team_abbrev: String,
    pub team_name: LocalizedString,
    #[serde(deserialize_with = "null_as_default")]
    pub team_logo: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,
}

impl PlayerLeader {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let list: GameList = serde_json::from_value(json!({"games": null})).unwrap();
        assert!(list.games.is_empty());

        let game: Game = serde_json::from_value(json!({
            "id": 2024020001,
            "gameDate": null,
            "gameState": null,
            "homeTeam": {"abbrev": null, "score": 3},
            "awayTeam": null
        }))
        .unwrap();
        assert_eq!(game.game_date, "");
        assert_eq!(game.game_state, GameState::default());
        assert_eq!(game.home_team.abbrev, "");
        assert_eq!(game.away_team.score, 0);

        let standings: Standings = serde_json::from_value(json!({
            "standings": [{
                "teamAbbrev": {"default": "TOR"},
                "divisionAbbrev": null,
                "conferenceAbbrev": null,
                "goalFor": null,
                "winPctg": null
            }]
        }))
        .unwrap();
        let row = &standings.standings[0];
        assert_eq!(row.team_abbrev.as_str(), "TOR");
        assert_eq!(row.division_abbrev, "");
        assert_eq!(row.goal_for, 0);
        assert_eq!(row.win_pctg, 0.0);
    }

    #[test]
    fn test_localized_string_shapes() {
        let v: LocalizedString = serde_json::from_value(json!({"default": "Maple Leafs"})).unwrap();
        assert_eq!(v.as_str(), "Maple Leafs");

        let v: LocalizedString = serde_json::from_value(json!("TOR")).unwrap();
        assert_eq!(v.as_str(), "TOR");

        let v: LocalizedString = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(v.as_str(), "");
    }

    #[test]
    fn test_game_defaults_missing_fields() {
        let game: Game = serde_json::from_value(json!({
            "id": 2024020001,
            "gameState": "FUT",
            "homeTeam": {"abbrev": "TOR"},
            "awayTeam": {"abbrev": "MTL", "score": null}
        }))
        .unwrap();

        assert_eq!(game.home_team.score, 0);
        assert_eq!(game.away_team.score, 0);
        assert_eq!(game.game_date, "");
        assert_eq!(game.venue.as_str(), "");
        assert!(game.game_state.is_scheduled());
    }

    #[test]
    fn test_game_state_codes() {
        assert!(GameState::from("OFF".to_string()).is_completed());
        assert!(GameState::from("FINAL".to_string()).is_completed());
        assert!(GameState::from("CRIT".to_string()).is_live());
        let other = GameState::from("PPD".to_string());
        assert_eq!(other, GameState::Other("PPD".to_string()));
        assert_eq!(other.as_str(), "PPD");
    }

    #[test]
    fn test_current_period_falls_back_to_descriptor() {
        let game: Game = serde_json::from_value(json!({
            "periodDescriptor": {"number": 3, "periodType": "REG"}
        }))
        .unwrap();
        assert_eq!(game.current_period(), 3);
    }

    #[test]
    fn test_scores_from_either_bench() {
        let game: Game = serde_json::from_value(json!({
            "homeTeam": {"abbrev": "TOR", "score": 4},
            "awayTeam": {"abbrev": "MTL", "score": 2}
        }))
        .unwrap();

        assert_eq!(game.scores_for("TOR"), (4, 2));
        assert_eq!(game.scores_for("MTL"), (2, 4));
        assert_eq!(game.opponent_of("MTL"), "TOR");
        assert!(game.is_between("MTL", "TOR"));
        assert!(!game.is_between("MTL", "BOS"));
    }

    #[test]
    fn test_standing_decodes_localized_abbrev() {
        let standing: TeamStanding = serde_json::from_value(json!({
            "teamAbbrev": {"default": "BOS"},
            "wins": 50,
            "goalDifferential": -3,
            "divisionAbbrev": "A"
        }))
        .unwrap();

        assert_eq!(standing.team_abbrev.as_str(), "BOS");
        assert_eq!(standing.goal_differential, -3);
        assert_eq!(standing.losses, 0);
    }
}
