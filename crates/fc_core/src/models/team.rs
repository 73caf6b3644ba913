use super::ids::{ClubId, LeagueId, PlayerId};
use super::player::{Player, Position};
use crate::data::Region;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Outcomes kept in the recent-form window.
pub const RECENT_FORM_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Formation {
    #[default]
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "3-5-2")]
    F352,
    #[serde(rename = "4-5-1")]
    F451,
}

impl Formation {
    /// Returns (defenders, midfielders, forwards). One goalkeeper is implied.
    pub fn get_positions(&self) -> (usize, usize, usize) {
        match self {
            Formation::F442 => (4, 4, 2),
            Formation::F433 => (4, 3, 3),
            Formation::F352 => (3, 5, 2),
            Formation::F451 => (4, 5, 1),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F352 => "3-5-2",
            Formation::F451 => "4-5-1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TacticalStyle {
    #[default]
    Balanced,
    Attacking,
    Defensive,
    Counter,
}

impl TacticalStyle {
    /// Multiplier on the per-minute highlight probability while in possession.
    pub fn highlight_factor(&self) -> f32 {
        match self {
            TacticalStyle::Balanced => 1.0,
            TacticalStyle::Attacking => 1.15,
            TacticalStyle::Defensive => 0.85,
            TacticalStyle::Counter => 0.9,
        }
    }

    /// Multiplier on shot conversion.
    pub fn conversion_factor(&self) -> f32 {
        match self {
            TacticalStyle::Balanced => 1.0,
            TacticalStyle::Attacking => 0.95,
            TacticalStyle::Defensive => 1.0,
            TacticalStyle::Counter => 1.12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Tactics {
    pub formation: Formation,
    pub style: TacticalStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferPolicy {
    #[default]
    Balanced,
    Galactico,
    YouthDevelopment,
    Moneyball,
    RelegationBattler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormResult {
    Win,
    Draw,
    Loss,
}

impl FormResult {
    pub fn from_score(goals_for: u8, goals_against: u8) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => FormResult::Win,
            std::cmp::Ordering::Equal => FormResult::Draw,
            std::cmp::Ordering::Less => FormResult::Loss,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            FormResult::Win => 'W',
            FormResult::Draw => 'D',
            FormResult::Loss => 'L',
        }
    }
}

/// Running league record of one club for the current season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LeagueStats {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
    pub recent_form: VecDeque<FormResult>,
}

impl LeagueStats {
    pub fn record(&mut self, goals_for: u8, goals_against: u8) {
        let outcome = FormResult::from_score(goals_for, goals_against);
        self.played += 1;
        self.goals_for += goals_for as u32;
        self.goals_against += goals_against as u32;
        match outcome {
            FormResult::Win => {
                self.won += 1;
                self.points += 3;
            }
            FormResult::Draw => {
                self.drawn += 1;
                self.points += 1;
            }
            FormResult::Loss => self.lost += 1,
        }
        self.recent_form.push_back(outcome);
        while self.recent_form.len() > RECENT_FORM_WINDOW {
            self.recent_form.pop_front();
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    pub fn form_string(&self) -> String {
        self.recent_form.iter().map(FormResult::letter).collect()
    }
}

/// A club. Squad membership in `players` is the authoritative relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: ClubId,
    pub name: String,
    pub region: Region,
    pub tactics: Tactics,
    pub players: Vec<Player>,
    /// Annual budget available for wages and signing fees.
    pub budget: f64,
    pub reputation: f32,
    pub league_id: LeagueId,
    pub transfer_policy: TransferPolicy,
    #[serde(default)]
    pub stats: LeagueStats,
}

impl Team {
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn has_player(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(idx))
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    pub fn players_in(&self, group: Position) -> impl Iterator<Item = &Player> {
        self.active_players().filter(move |p| p.position == group)
    }

    pub fn squad_average(&self) -> f32 {
        let (sum, count) = self
            .active_players()
            .fold((0.0f32, 0usize), |(s, c), p| (s + p.overall_rating(), c + 1));
        if count == 0 {
            0.0
        } else {
            sum / count as f32
        }
    }

    /// Best-rated active player in the group.
    pub fn incumbent_starter(&self, group: Position) -> Option<&Player> {
        self.players_in(group).fold(None, |best: Option<&Player>, p| match best {
            Some(b) if b.overall_rating() >= p.overall_rating() => Some(b),
            _ => Some(p),
        })
    }

    pub fn annual_wage_bill(&self) -> f64 {
        self.players
            .iter()
            .filter_map(|p| p.contract.as_ref())
            .map(|c| c.annual_wage())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_stats_points_and_window() {
        let mut stats = LeagueStats::default();
        let results = [(2, 0), (1, 1), (0, 3), (4, 1), (0, 0), (2, 1)];
        for (gf, ga) in results {
            stats.record(gf, ga);
        }
        assert_eq!(stats.played, 6);
        assert_eq!(stats.points, 3 * stats.won + stats.drawn);
        assert_eq!(stats.played, stats.won + stats.drawn + stats.lost);
        assert_eq!(stats.recent_form.len(), RECENT_FORM_WINDOW);
        // oldest (2-0 win) evicted
        assert_eq!(stats.form_string(), "DLWDW");
        assert_eq!(stats.goal_difference(), 3);
    }

    #[test]
    fn test_form_from_score() {
        assert_eq!(FormResult::from_score(1, 0), FormResult::Win);
        assert_eq!(FormResult::from_score(1, 1), FormResult::Draw);
        assert_eq!(FormResult::from_score(0, 2), FormResult::Loss);
    }
}
