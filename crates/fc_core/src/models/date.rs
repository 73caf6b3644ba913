//! In-game calendar cursor.
//!
//! A year has 12 months of 4 weeks each. The season label is the year in
//! which the season started (July onwards).

use serde::{Deserialize, Serialize};
use std::fmt;

pub const WEEKS_PER_MONTH: u8 = 4;
pub const MONTHS_PER_YEAR: u8 = 12;

/// Season runs August..May; June/July are the off-season.
pub const SEASON_FIRST_MONTH: u8 = 8;
pub const SEASON_LAST_MONTH: u8 = 5;

/// (month, week) pairs reserved for international fixtures.
pub const INTERNATIONAL_BREAKS: [(u8, u8); 4] = [(9, 2), (10, 3), (11, 3), (3, 4)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameDate {
    pub year: u16,
    pub month: u8,
    pub week: u8,
}

impl GameDate {
    /// Out-of-range months and weeks are clamped.
    pub fn new(year: u16, month: u8, week: u8) -> Self {
        Self {
            year,
            month: month.clamp(1, MONTHS_PER_YEAR),
            week: week.clamp(1, WEEKS_PER_MONTH),
        }
    }

    /// First week of pre-season for the season starting in `year`.
    pub fn preseason(year: u16) -> Self {
        Self::new(year, 7, 1)
    }

    pub fn next_week(self) -> Self {
        let mut next = self;
        next.advance();
        next
    }

    /// Move forward one week, rolling over month and year boundaries.
    pub fn advance(&mut self) {
        if self.week < WEEKS_PER_MONTH {
            self.week += 1;
            return;
        }
        self.week = 1;
        if self.month < MONTHS_PER_YEAR {
            self.month += 1;
        } else {
            self.month = 1;
            self.year = self.year.saturating_add(1);
        }
    }

    pub fn is_international_break(&self) -> bool {
        INTERNATIONAL_BREAKS.contains(&(self.month, self.week))
    }

    /// League matches are played this week.
    pub fn is_in_season(&self) -> bool {
        (self.month >= SEASON_FIRST_MONTH || self.month <= SEASON_LAST_MONTH)
            && !self.is_international_break()
    }

    pub fn is_transfer_window(&self) -> bool {
        matches!(self.month, 7 | 8 | 1)
    }

    pub fn is_season_start(&self) -> bool {
        self.month == SEASON_FIRST_MONTH && self.week == 1
    }

    /// True when moving from `self` to `next` closes a season.
    pub fn closes_season(&self, next: &GameDate) -> bool {
        self.month == SEASON_LAST_MONTH && next.month == SEASON_LAST_MONTH + 1
    }

    /// Label of the season this week belongs to.
    pub fn season(&self) -> u16 {
        if self.month >= 7 {
            self.year
        } else {
            self.year.saturating_sub(1)
        }
    }

    pub fn ordinal(&self) -> u32 {
        (self.year as u32 * MONTHS_PER_YEAR as u32 + (self.month as u32 - 1))
            * WEEKS_PER_MONTH as u32
            + (self.week as u32 - 1)
    }
}

impl Default for GameDate {
    fn default() -> Self {
        Self::preseason(2025)
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02} W{}", self.year, self.month, self.week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_and_year_rollover() {
        let mut date = GameDate::new(2025, 12, 4);
        date.advance();
        assert_eq!(date, GameDate::new(2026, 1, 1));

        let mut date = GameDate::new(2025, 3, 2);
        date.advance();
        assert_eq!(date, GameDate::new(2025, 3, 3));
    }

    #[test]
    fn test_season_window() {
        assert!(GameDate::new(2025, 8, 1).is_in_season());
        assert!(GameDate::new(2026, 5, 4).is_in_season());
        assert!(!GameDate::new(2026, 6, 1).is_in_season());
        assert!(!GameDate::new(2025, 7, 3).is_in_season());
        // International break
        assert!(!GameDate::new(2025, 9, 2).is_in_season());
    }

    #[test]
    fn test_season_label_and_close() {
        assert_eq!(GameDate::new(2025, 8, 1).season(), 2025);
        assert_eq!(GameDate::new(2026, 2, 1).season(), 2025);

        let last = GameDate::new(2026, 5, 4);
        assert!(last.closes_season(&last.next_week()));
        assert!(!GameDate::new(2026, 5, 3).closes_season(&GameDate::new(2026, 5, 4)));
    }

    #[test]
    fn test_ordinal_is_monotonic() {
        let mut date = GameDate::preseason(2025);
        let mut prev = date.ordinal();
        for _ in 0..200 {
            date.advance();
            assert!(date.ordinal() > prev);
            prev = date.ordinal();
        }
    }
}
