//! Standings tool definition.
//!
//! League standings rendered as a fixed-width table, optionally narrowed to
//! one division and/or conference.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::nhl::{NhlClient, format::format_standings_table, models::TeamStanding};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::ToolDefinition;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the standings tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct StandingsParams {
    /// Date in YYYY-MM-DD format (optional, defaults to today)
    #[serde(default)]
    pub date: Option<String>,

    /// Filter by division (Atlantic, Metropolitan, Central, Pacific)
    #[serde(default)]
    pub division: Option<String>,

    /// Filter by conference (Eastern, Western)
    #[serde(default)]
    pub conference: Option<String>,
}

impl StandingsParams {
    /// Whether a team passes both filters. Matching ignores ASCII case.
    fn matches(&self, team: &TeamStanding) -> bool {
        let division_ok = self
            .division
            .as_deref()
            .is_none_or(|d| team.division_abbrev.eq_ignore_ascii_case(d));
        let conference_ok = self
            .conference
            .as_deref()
            .is_none_or(|c| team.conference_abbrev.eq_ignore_ascii_case(c));
        division_ok && conference_ok
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Standings tool.
pub struct StandingsTool;

#[async_trait]
impl ToolDefinition for StandingsTool {
    const NAME: &'static str = "get_standings";

    const DESCRIPTION: &'static str = "Get current NHL standings including wins, losses, points, goals for/against, and goal differential. Can filter by division or conference.";

    type Params = StandingsParams;

    async fn execute(client: &NhlClient, params: Self::Params) -> Result<String, ToolError> {
        let teams: Vec<TeamStanding> = client
            .standings(params.date.as_deref())
            .await?
            .into_iter()
            .filter(|team| params.matches(team))
            .collect();

        info!("{} teams after filtering", teams.len());
        Ok(format_standings_table(&teams))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::nhl::client::tests::mock_client;
    use crate::domains::tools::definitions::common::{dispatch, tests::result_text};
    use serde_json::{Value, json};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    fn team(abbrev: &str, division: &str, conference: &str) -> Value {
        json!({
            "teamAbbrev": {"default": abbrev},
            "divisionAbbrev": division,
            "conferenceAbbrev": conference,
            "gamesPlayed": 10,
            "wins": 6,
            "losses": 3,
            "otLosses": 1,
            "points": 13,
            "goalFor": 30,
            "goalAgainst": 25,
            "goalDifferential": 5
        })
    }

    async fn standings_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/standings/2024-11-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "standings": [
                    team("TOR", "A", "E"),
                    team("NYR", "M", "E"),
                    team("DAL", "C", "W"),
                ]
            })))
            .mount(&server)
            .await;
        server
    }

    fn rows(text: &str) -> Vec<&str> {
        text.lines().skip(2).collect()
    }

    #[tokio::test]
    async fn test_standings_unfiltered() {
        let server = standings_server().await;
        let result =
            dispatch::<StandingsTool>(&mock_client(&server), json!({"date": "2024-11-01"})).await;

        let text = result_text(&result);
        assert!(text.starts_with("Team | GP | W | L | OT | PTS | GF | GA | DIFF | Div\n"));
        assert_eq!(rows(text).len(), 3);
        assert_eq!(
            rows(text)[0],
            "TOR  |  10 |  6 |  3 |  1 |  13 |  30 |  25 |    5 | A"
        );
    }

    #[tokio::test]
    async fn test_standings_filters_case_insensitive() {
        let server = standings_server().await;
        let result = dispatch::<StandingsTool>(
            &mock_client(&server),
            json!({"date": "2024-11-01", "conference": "e"}),
        )
        .await;
        let text = result_text(&result);
        assert_eq!(rows(text).len(), 2);

        let result = dispatch::<StandingsTool>(
            &mock_client(&server),
            json!({"date": "2024-11-01", "conference": "E", "division": "m"}),
        )
        .await;
        let text = result_text(&result);
        assert_eq!(rows(text).len(), 1);
        assert!(rows(text)[0].starts_with("NYR"));
    }

    #[tokio::test]
    async fn test_standings_filter_without_match_keeps_header() {
        let server = standings_server().await;
        let result = dispatch::<StandingsTool>(
            &mock_client(&server),
            json!({"date": "2024-11-01", "division": "Pacific"}),
        )
        .await;
        assert!(rows(result_text(&result)).is_empty());
    }
}
