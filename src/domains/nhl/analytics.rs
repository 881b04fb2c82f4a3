//! Derived analytics over schedules and standings.
//!
//! Each helper fetches what it needs sequentially and returns the rendered
//! report. "Nothing found" outcomes are ordinary `Ok` text; only upstream
//! failures are `Err`, and any failure aborts the whole report.

use tracing::{info, instrument};

use super::client::NhlClient;
use super::error::NhlResult;
use super::models::{Game, TeamStanding};
use super::season::format_season;

/// Most recent results listed, and the longest streak counted.
const RECENT_GAMES: usize = 10;

// ============================================================================
// Streaks
// ============================================================================

/// Outcome of a single completed game from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Anything other than outscoring the opponent counts as a loss.
    pub fn from_scores(own: u32, opponent: u32) -> Self {
        if own > opponent { Self::Win } else { Self::Loss }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Self::Win => "W",
            Self::Loss => "L",
        }
    }
}

/// A team's current streak and the results it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Streak {
    pub outcome: Outcome,
    pub length: usize,
    /// Up to ten most recent result lines, newest first.
    pub recent: Vec<String>,
}

impl Streak {
    pub fn describe(&self) -> String {
        let kind = match self.outcome {
            Outcome::Win => "winning",
            Outcome::Loss => "losing",
        };
        format!("{} game {} streak", self.length, kind)
    }
}

/// Completed games for `team`, newest first.
///
/// Dates are ISO 8601 so string order is chronological; the sort is stable,
/// so games on the same date keep their schedule order.
pub fn completed_games_newest_first(games: &[Game]) -> Vec<&Game> {
    let mut completed: Vec<&Game> = games
        .iter()
        .filter(|g| g.game_state.is_completed())
        .collect();
    completed.sort_by(|a, b| b.game_date.cmp(&a.game_date));
    completed
}

/// Read the current streak from completed games ordered newest first.
///
/// Returns `None` when there are no games.
pub fn compute_streak(team: &str, completed: &[&Game]) -> Option<Streak> {
    let first = completed.first()?;
    let (own, opp) = first.scores_for(team);
    let outcome = Outcome::from_scores(own, opp);

    let length = completed
        .iter()
        .take(RECENT_GAMES)
        .take_while(|g| {
            let (own, opp) = g.scores_for(team);
            Outcome::from_scores(own, opp) == outcome
        })
        .count();

    let recent = completed
        .iter()
        .take(RECENT_GAMES)
        .map(|g| {
            let (own, opp) = g.scores_for(team);
            format!(
                "{} {}-{} vs {}",
                Outcome::from_scores(own, opp).letter(),
                own,
                opp,
                g.opponent_of(team)
            )
        })
        .collect();

    Some(Streak {
        outcome,
        length,
        recent,
    })
}

/// Current winning or losing streak for `team` this season.
#[instrument(skip(client))]
pub async fn analyze_streak(client: &NhlClient, team: &str) -> NhlResult<String> {
    let games = client.team_schedule_games(team, None).await?;
    if games.is_empty() {
        return Ok(format!("No games found for {}", team));
    }

    let completed = completed_games_newest_first(&games);
    let Some(streak) = compute_streak(team, &completed) else {
        return Ok(format!("No completed games found for {} this season", team));
    };

    info!(team, streak = %streak.describe(), "Streak analyzed");

    Ok(format!(
        "{} Current Streak: {}\n\nLast 10 games:\n{}",
        team,
        streak.describe(),
        streak.recent.join("\n")
    ))
}

// ============================================================================
// Head-to-head
// ============================================================================

/// Series tally and per-game lines for two teams, in schedule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadToHead {
    pub team1_wins: u32,
    pub team2_wins: u32,
    pub lines: Vec<String>,
}

/// Tally the games played between `team1` and `team2`.
pub fn tally_head_to_head(team1: &str, team2: &str, games: &[Game]) -> HeadToHead {
    let mut h2h = HeadToHead::default();

    for game in games.iter().filter(|g| g.is_between(team1, team2)) {
        let (score1, score2) = game.scores_for(team1);
        let date = &game.game_date;

        if game.game_state.is_completed() {
            let winner = if score1 > score2 {
                h2h.team1_wins += 1;
                team1
            } else {
                h2h.team2_wins += 1;
                team2
            };
            h2h.lines.push(format!(
                "{}: {} {}, {} {} - {} WIN",
                date, team1, score1, team2, score2, winner
            ));
        } else if game.game_state.is_scheduled() {
            h2h.lines.push(format!("{}: Upcoming game", date));
        } else {
            h2h.lines.push(format!(
                "{}: {} {}, {} {} - IN PROGRESS",
                date, team1, score1, team2, score2
            ));
        }
    }

    h2h
}

/// Head-to-head record of two teams, read from `team1`'s schedule only.
#[instrument(skip(client))]
pub async fn compare_teams(
    client: &NhlClient,
    team1: &str,
    team2: &str,
    season: Option<&str>,
) -> NhlResult<String> {
    let games = client.team_schedule_games(team1, season).await?;
    if games.is_empty() {
        return Ok(format!("No schedule data found for {}", team1));
    }

    let h2h = tally_head_to_head(team1, team2, &games);
    if h2h.lines.is_empty() {
        return Ok(format!(
            "No matchups found between {} and {} this season",
            team1, team2
        ));
    }

    Ok(format!(
        "Head-to-Head: {} vs {}\n\nSeason Series: {} {}-{} {}\n\nGames:\n{}",
        team1,
        team2,
        team1,
        h2h.team1_wins,
        h2h.team2_wins,
        team2,
        h2h.lines.join("\n")
    ))
}

// ============================================================================
// Season comparison
// ============================================================================

/// League-wide scoring summary for one season.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeagueSummary {
    pub teams: usize,
    pub total_goals: u64,
    pub total_games: u64,
    pub avg_goals_per_game: f64,
}

impl LeagueSummary {
    pub fn from_standings(teams: &[TeamStanding]) -> Self {
        let total_goals: u64 = teams.iter().map(|t| u64::from(t.goal_for)).sum();
        let total_games: u64 = teams.iter().map(|t| u64::from(t.games_played)).sum();
        let avg_goals_per_game = if total_games > 0 {
            total_goals as f64 / total_games as f64
        } else {
            0.0
        };

        Self {
            teams: teams.len(),
            total_goals,
            total_games,
            avg_goals_per_game,
        }
    }
}

fn league_block(season: &str, summary: &LeagueSummary) -> String {
    format!(
        "Season {}:\n  Total teams: {}\n  Total goals: {}\n  Avg goals/game: {:.2}",
        format_season(season),
        summary.teams,
        summary.total_goals,
        summary.avg_goals_per_game
    )
}

fn team_block(season: &str, team_abbrev: &str, standing: Option<&TeamStanding>) -> String {
    match standing {
        Some(t) => format!(
            "{} - {}:\n  Record: {}-{}-{}\n  Points: {}\n  Goals For: {}\n  Goals Against: {}\n  Goal Diff: {}",
            format_season(season),
            team_abbrev,
            t.wins,
            t.losses,
            t.ot_losses,
            t.points,
            t.goal_for,
            t.goal_against,
            t.goal_differential
        ),
        None => format!("{} - {}: No data found", format_season(season), team_abbrev),
    }
}

/// Compare seasons league-wide, or for one team when `team_abbrev` is set.
///
/// Seasons are processed in the given order without validation. One failed
/// fetch discards every block already built.
#[instrument(skip(client))]
pub async fn compare_seasons(
    client: &NhlClient,
    seasons: &[String],
    team_abbrev: Option<&str>,
) -> NhlResult<String> {
    let mut blocks = Vec::with_capacity(seasons.len());

    for season in seasons {
        let teams = client.standings_by_season(season).await?;
        let block = match team_abbrev {
            Some(abbrev) => {
                let standing = teams.iter().find(|t| t.team_abbrev.as_str() == abbrev);
                team_block(season, abbrev, standing)
            }
            None => league_block(season, &LeagueSummary::from_standings(&teams)),
        };
        blocks.push(block);
    }

    let header = match team_abbrev {
        Some(abbrev) => format!("Season Comparison for {}:", abbrev),
        None => "Season Comparison:".to_string(),
    };

    Ok(format!("{}\n\n{}", header, blocks.join("\n\n")))
}
