//! Season identifier rules.
//!
//! A season id is eight digits: start year followed by end year
//! (e.g. `20242025`). The NHL season starts in October.

use chrono::{Datelike, Local, NaiveDate};

/// First month of a new season.
const SEASON_START_MONTH: u32 = 10;

/// Season id for the caller's current local date.
pub fn current_season_id() -> String {
    current_season_id_on(Local::now().date_naive())
}

/// Season id in progress (or about to start) on `date`.
pub fn current_season_id_on(date: NaiveDate) -> String {
    let year = date.year();
    if date.month() >= SEASON_START_MONTH {
        format!("{}{}", year, year + 1)
    } else {
        format!("{}{}", year - 1, year)
    }
}

/// Render `20242025` as `2024-2025`; any other length passes through.
pub fn format_season(season: &str) -> String {
    let chars: Vec<char> = season.chars().collect();
    if chars.len() != 8 {
        return season.to_string();
    }
    let start: String = chars[..4].iter().collect();
    let end: String = chars[4..].iter().collect();
    format!("{}-{}", start, end)
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Current local calendar year, used by the year-keyed playoff bracket.
pub fn current_year() -> String {
    Local::now().year().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_season_rolls_over_in_october() {
        assert_eq!(current_season_id_on(date(2024, 10, 1)), "20242025");
        assert_eq!(current_season_id_on(date(2024, 12, 31)), "20242025");
        assert_eq!(current_season_id_on(date(2024, 9, 30)), "20232024");
        assert_eq!(current_season_id_on(date(2025, 1, 1)), "20242025");
    }

    #[test]
    fn test_format_season() {
        assert_eq!(format_season("20242025"), "2024-2025");
        assert_eq!(format_season("2024"), "2024");
        assert_eq!(format_season(""), "");
        assert_eq!(format_season("202420256"), "202420256");
    }

    #[test]
    fn test_current_season_is_well_formed() {
        let season = current_season_id();
        assert_eq!(season.len(), 8);
        let start: i32 = season[..4].parse().unwrap();
        let end: i32 = season[4..].parse().unwrap();
        assert_eq!(end, start + 1);
    }

    #[test]
    fn test_today_is_iso_date() {
        assert!(NaiveDate::parse_from_str(&today(), "%Y-%m-%d").is_ok());
    }
}
