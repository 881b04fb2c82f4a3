//! Plain-text rendering of NHL records.
//!
//! All functions are pure and total: empty input yields only the table
//! header (or the "no games" sentinel for scores).

use super::models::{Game, PlayerLeader, TeamStanding};

/// Text returned when a date has no games.
pub const NO_GAMES: &str = "No games scheduled for this date";

/// Maximum displayed player name length.
const NAME_WIDTH: usize = 25;

/// Status label derived from the game state.
pub fn game_status(game: &Game) -> String {
    let state = &game.game_state;
    if state.is_live() {
        format!("LIVE - Period {}", game.current_period())
    } else if state.is_scheduled() {
        "Scheduled".to_string()
    } else if state.is_completed() {
        "Final".to_string()
    } else {
        state.as_str().to_string()
    }
}

/// Four-line block: score line, venue, date, id.
pub fn format_game_score(game: &Game) -> String {
    format!(
        "{} {} @ {} {} - {}\nVenue: {}\nDate: {}\nGame ID: {}",
        game.away_team.abbrev,
        game.away_team.score,
        game.home_team.abbrev,
        game.home_team.score,
        game_status(game),
        game.venue,
        game.game_date,
        game.id
    )
}

/// Game blocks separated by a blank line, or [`NO_GAMES`].
pub fn format_games(games: &[Game]) -> String {
    if games.is_empty() {
        return NO_GAMES.to_string();
    }
    games
        .iter()
        .map(format_game_score)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn format_standings_table(teams: &[TeamStanding]) -> String {
    let mut out = String::from("Team | GP | W | L | OT | PTS | GF | GA | DIFF | Div\n");
    out.push_str(&"-".repeat(70));
    out.push('\n');

    for team in teams {
        out.push_str(&format!(
            "{:<4} | {:>3} | {:>2} | {:>2} | {:>2} | {:>3} | {:>3} | {:>3} | {:>4} | {}\n",
            team.team_abbrev.as_str(),
            team.games_played,
            team.wins,
            team.losses,
            team.ot_losses,
            team.points,
            team.goal_for,
            team.goal_against,
            team.goal_differential,
            team.division_abbrev
        ));
    }

    out
}

pub fn format_skater_table(players: &[PlayerLeader], category: &str) -> String {
    let mut out = format!("Rank | Player | Team | Pos | {}\n", category.to_uppercase());
    out.push_str(&"-".repeat(60));
    out.push('\n');

    for (index, player) in players.iter().enumerate() {
        out.push_str(&format!(
            "{:>3} | {:<25} | {:<4} | {:<2} | {:>4}\n",
            index + 1,
            display_name(player),
            player.team_abbrev,
            player.position,
            player.value
        ));
    }

    out
}

pub fn format_goalie_table(goalies: &[PlayerLeader], category: &str) -> String {
    let mut out = format!("Rank | Goalie | Team | {}\n", category.to_uppercase());
    out.push_str(&"-".repeat(60));
    out.push('\n');

    for (index, goalie) in goalies.iter().enumerate() {
        let value = if category == "savePctg" {
            format!("{:.3}", goalie.value)
        } else {
            goalie.value.to_string()
        };
        out.push_str(&format!(
            "{:>3} | {:<25} | {:<4} | {}\n",
            index + 1,
            display_name(goalie),
            goalie.team_abbrev,
            value
        ));
    }

    out
}

/// First and last name, cut to the table column width.
fn display_name(player: &PlayerLeader) -> String {
    player.full_name().chars().take(NAME_WIDTH).collect()
}
