//! Thin async client for the public NHL web API.
//!
//! Two base URLs are used: the general web API (games, schedules, standings,
//! players, leaders) and the statistics REST API. Every call is a single
//! unauthenticated GET; failures are returned as-is, never retried.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{NhlError, NhlResult};
use super::models::{Game, GameList, PlayerLeader, Standings, TeamStanding};
use super::season::{current_season_id, current_year, today};
use crate::core::config::NhlApiConfig;

/// Game-type code for the regular season, used by the seasonal leaders endpoints.
const REGULAR_SEASON: u8 = 2;

/// Default number of leaders returned.
pub const DEFAULT_LEADERS_LIMIT: u32 = 20;

/// Default skater leaders category.
pub const DEFAULT_SKATER_CATEGORY: &str = "points";

/// Default goalie leaders category.
pub const DEFAULT_GOALIE_CATEGORY: &str = "savePctg";

/// NHL API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct NhlClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
    stats_base_url: String,
}

impl std::fmt::Debug for NhlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NhlClient")
            .field("base_url", &self.inner.base_url)
            .field("stats_base_url", &self.inner.stats_base_url)
            .finish()
    }
}

impl NhlClient {
    /// Build a client from configuration.
    pub fn new(config: &NhlApiConfig) -> NhlResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(format!("nhl-mcp-server/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(NhlError::Client)?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: config.base_url.trim_end_matches('/').to_string(),
                stats_base_url: config.stats_base_url.trim_end_matches('/').to_string(),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn stats_base_url(&self) -> &str {
        &self.inner.stats_base_url
    }

    // ========================================================================
    // Games
    // ========================================================================

    /// Games on `date` (defaults to today).
    pub async fn scores_for_date(&self, date: Option<&str>) -> NhlResult<Vec<Game>> {
        let date = date.map(str::to_string).unwrap_or_else(today);
        let list: GameList = self.get(&self.web_url(&format!("score/{}", date))).await?;
        Ok(list.games)
    }

    /// Play-by-play for a game.
    pub async fn game_details(&self, game_id: u64) -> NhlResult<Value> {
        self.get(&self.web_url(&format!("gamecenter/{}/play-by-play", game_id)))
            .await
    }

    /// Boxscore for a game.
    pub async fn game_boxscore(&self, game_id: u64) -> NhlResult<Value> {
        self.get(&self.web_url(&format!("gamecenter/{}/boxscore", game_id)))
            .await
    }

    // ========================================================================
    // Standings
    // ========================================================================

    /// Standings as of `date` (defaults to today).
    pub async fn standings(&self, date: Option<&str>) -> NhlResult<Vec<TeamStanding>> {
        let date = date.map(str::to_string).unwrap_or_else(today);
        self.standings_at(&date).await
    }

    /// Standings for a season id.
    pub async fn standings_by_season(&self, season: &str) -> NhlResult<Vec<TeamStanding>> {
        self.standings_at(season).await
    }

    async fn standings_at(&self, key: &str) -> NhlResult<Vec<TeamStanding>> {
        let standings: Standings = self.get(&self.web_url(&format!("standings/{}", key))).await?;
        Ok(standings.standings)
    }

    // ========================================================================
    // Schedules
    // ========================================================================

    /// Raw season schedule for a team (season defaults to the current one).
    pub async fn team_schedule(&self, team_abbrev: &str, season: Option<&str>) -> NhlResult<Value> {
        self.get(&self.team_schedule_url(team_abbrev, season)).await
    }

    /// Season schedule for a team, decoded into games.
    pub async fn team_schedule_games(
        &self,
        team_abbrev: &str,
        season: Option<&str>,
    ) -> NhlResult<Vec<Game>> {
        let list: GameList = self.get(&self.team_schedule_url(team_abbrev, season)).await?;
        Ok(list.games)
    }

    fn team_schedule_url(&self, team_abbrev: &str, season: Option<&str>) -> String {
        let season = season.map(str::to_string).unwrap_or_else(current_season_id);
        self.web_url(&format!("club-schedule-season/{}/{}", team_abbrev, season))
    }

    /// League schedule for the week containing `date` (defaults to today).
    pub async fn schedule_for_week(&self, date: Option<&str>) -> NhlResult<Value> {
        let date = date.map(str::to_string).unwrap_or_else(today);
        self.get(&self.web_url(&format!("schedule/{}", date))).await
    }

    // ========================================================================
    // Players and leaders
    // ========================================================================

    /// Player landing page (bio plus current stats).
    pub async fn player_landing(&self, player_id: u64) -> NhlResult<Value> {
        self.get(&self.web_url(&format!("player/{}/landing", player_id)))
            .await
    }

    /// Skater leaders for `category`.
    ///
    /// Without a season the "current" leaders are queried; with one, the
    /// regular-season leaders of that season.
    pub async fn top_skaters(
        &self,
        category: &str,
        limit: u32,
        season: Option<&str>,
    ) -> NhlResult<Vec<PlayerLeader>> {
        self.leaders("skater-stats-leaders", category, limit, season)
            .await
    }

    /// Goalie leaders for `category`.
    pub async fn top_goalies(
        &self,
        limit: u32,
        season: Option<&str>,
        category: &str,
    ) -> NhlResult<Vec<PlayerLeader>> {
        self.leaders("goalie-stats-leaders", category, limit, season)
            .await
    }

    async fn leaders(
        &self,
        resource: &str,
        category: &str,
        limit: u32,
        season: Option<&str>,
    ) -> NhlResult<Vec<PlayerLeader>> {
        let url = match season {
            Some(season) => self.web_url(&format!("{}/{}/{}", resource, season, REGULAR_SEASON)),
            None => self.web_url(&format!("{}/current", resource)),
        };
        let limit = limit.to_string();
        let body: Value = self
            .get_with_query(&url, &[("categories", category), ("limit", limit.as_str())])
            .await?;

        match body.get(category).filter(|list| !list.is_null()) {
            Some(list) => serde_json::from_value(list.clone())
                .map_err(|source| NhlError::Decode { url, source }),
            None => Ok(Vec::new()),
        }
    }

    // ========================================================================
    // Playoffs
    // ========================================================================

    /// Playoff bracket. Keyed by calendar year (e.g. `2024`), not season id.
    pub async fn playoff_bracket(&self, year: Option<&str>) -> NhlResult<Value> {
        let year = year.map(str::to_string).unwrap_or_else(current_year);
        self.get(&self.web_url(&format!("playoff-bracket/{}", year)))
            .await
    }

    /// Playoff series for a season id (defaults to the current season).
    pub async fn playoff_series(&self, season: Option<&str>) -> NhlResult<Value> {
        let season = season.map(str::to_string).unwrap_or_else(current_season_id);
        self.get(&self.web_url(&format!("playoff-series/{}/playoff", season)))
            .await
    }

    // ========================================================================
    // Teams
    // ========================================================================

    /// Regular-season skater and goalie stats for a team.
    pub async fn team_stats(&self, team_abbrev: &str, season: Option<&str>) -> NhlResult<Value> {
        let season = season.map(str::to_string).unwrap_or_else(current_season_id);
        self.get(&self.web_url(&format!(
            "club-stats/{}/{}/{}",
            team_abbrev, season, REGULAR_SEASON
        )))
        .await
    }

    /// Roster for a team.
    pub async fn team_roster(&self, team_abbrev: &str, season: Option<&str>) -> NhlResult<Value> {
        let season = season.map(str::to_string).unwrap_or_else(current_season_id);
        self.get(&self.web_url(&format!("roster/{}/{}", team_abbrev, season)))
            .await
    }

    /// Franchise list from the statistics API.
    pub async fn teams(&self) -> NhlResult<Value> {
        self.get(&self.stats_url("team")).await
    }

    // ========================================================================
    // Internal HTTP methods
    // ========================================================================

    fn web_url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path)
    }

    fn stats_url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.stats_base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> NhlResult<T> {
        self.get_with_query(url, &[]).await
    }

    #[instrument(level = "debug", skip(self, query))]
    async fn get_with_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> NhlResult<T> {
        let started = Instant::now();

        let mut request = self.inner.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| {
            warn!(url, error = %e, "NHL API request failed");
            NhlError::request(url, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "NHL API returned an error status");
            return Err(NhlError::from_status(status.as_u16(), url));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NhlError::request(url, e))?;

        debug!(
            url,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed = ?started.elapsed(),
            "NHL API call completed"
        );

        serde_json::from_slice(&body).map_err(|source| NhlError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
