//! What one week of career looked like, for the host to display.

use super::season::SeasonReport;
use crate::economy::{TransferOffer, WeeklyStatement};
use crate::models::{ClubId, GameDate};
use crate::story::StoryBeat;
use serde::{Deserialize, Serialize};

/// The human player's fixture this week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub opponent: ClubId,
    pub opponent_name: String,
    pub home: bool,
    pub goals_for: u8,
    pub goals_against: u8,
    /// False when the player sat on the bench all match.
    pub played: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub goals: u8,
    pub assists: u8,
    pub commentary: Vec<String>,
}

impl MatchReport {
    pub fn scoreline(&self) -> String {
        let venue = if self.home { "vs" } else { "at" };
        format!("{} {} {}-{}", venue, self.opponent_name, self.goals_for, self.goals_against)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// The week that was simulated.
    pub date: GameDate,
    pub statement: WeeklyStatement,
    /// Cash balance after this week.
    pub balance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_match: Option<MatchReport>,
    /// `Some(false)` when the club had a fixture and left the player out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    pub injured: bool,
    pub background_matches: usize,
    pub new_offers: Vec<TransferOffer>,
    pub story: Vec<StoryBeat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<SeasonReport>,
    pub retired: bool,
}

impl WeeklySummary {
    pub(crate) fn new(date: GameDate) -> Self {
        Self {
            date,
            statement: WeeklyStatement::default(),
            balance: 0.0,
            human_match: None,
            selected: None,
            injured: false,
            background_matches: 0,
            new_offers: Vec::new(),
            story: Vec::new(),
            season: None,
            retired: false,
        }
    }

    /// Human-readable digest, one line per item.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Week of {}", self.date)];
        match (&self.human_match, self.selected) {
            (Some(report), _) if report.played => {
                let rating = report.rating.map_or_else(|| "-".to_string(), |r| format!("{:.1}", r));
                lines.push(format!(
                    "Match {}: rating {}, {} goal(s), {} assist(s)",
                    report.scoreline(),
                    rating,
                    report.goals,
                    report.assists
                ));
            }
            (Some(report), _) => lines.push(format!("Unused substitute {}", report.scoreline())),
            (None, Some(false)) => lines.push("Left out of the matchday squad".to_string()),
            _ => {}
        }
        if self.injured {
            lines.push("Injured".to_string());
        }
        lines.push(format!(
            "Income {:.0}, expenses {:.0}, balance {:.0}",
            self.statement.income(),
            self.statement.expenses(),
            self.balance
        ));
        for offer in &self.new_offers {
            lines.push(format!(
                "Offer from {} (tier {}): {:.0}/week for {} year(s)",
                offer.club_name, offer.tier, offer.contract.weekly_wage, offer.contract.years_remaining
            ));
        }
        for beat in &self.story {
            lines.push(format!("{}: {}", beat.title, beat.text));
        }
        if let Some(season) = &self.season {
            lines.push(format!(
                "Season {} closed: {} promotion move(s), {} retirement(s)",
                season.season,
                season.promotions.len(),
                season.retired.len()
            ));
        }
        if self.retired {
            lines.push("Retired from professional football".to_string());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_mention_match_and_balance() {
        let mut summary = WeeklySummary::new(GameDate::new(2025, 9, 1));
        summary.balance = 1234.0;
        summary.selected = Some(true);
        summary.human_match = Some(MatchReport {
            opponent: ClubId(3),
            opponent_name: "Harbor City".into(),
            home: false,
            goals_for: 2,
            goals_against: 1,
            played: true,
            rating: Some(7.4),
            goals: 1,
            assists: 0,
            commentary: Vec::new(),
        });
        let lines = summary.lines();
        assert!(lines.iter().any(|l| l.contains("at Harbor City 2-1") && l.contains("7.4")));
        assert!(lines.iter().any(|l| l.contains("balance 1234")));
    }

    #[test]
    fn test_left_out_line() {
        let mut summary = WeeklySummary::new(GameDate::new(2025, 9, 1));
        summary.selected = Some(false);
        assert!(summary.lines().iter().any(|l| l.contains("Left out")));
    }
}
