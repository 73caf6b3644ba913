use super::agent::Agent;
use super::contract::Contract;
use super::date::GameDate;
use super::ids::{ClubId, PlayerId};
use crate::data::{PlayerTrait, Region};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Lower bound of `overall_rating`.
pub const RATING_MIN: f32 = 1.0;
/// Upper bound of `potential` (and therefore of `overall_rating`).
pub const RATING_MAX: f32 = 99.0;
/// Bounds shared by stamina, morale, form and reputation.
pub const STAT_MIN: f32 = 0.0;
pub const STAT_MAX: f32 = 100.0;

/// Most recent match entries kept per player.
pub const MATCH_HISTORY_CAP: usize = 50;

/// Position group. The engine reasons in sectors, so this is all the
/// granularity a player carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    DEF,
    MID,
    FWD,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::GK, Position::DEF, Position::MID, Position::FWD];

    pub fn display_name(&self) -> &'static str {
        match self {
            Position::GK => "Goalkeeper",
            Position::DEF => "Defender",
            Position::MID => "Midfielder",
            Position::FWD => "Forward",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }

    /// Goalkeepers and defenders earn clean-sheet bonuses.
    pub fn is_defensive(&self) -> bool {
        matches!(self, Position::GK | Position::DEF)
    }

    /// Forwards and midfielders earn goal bonuses.
    pub fn is_attacking(&self) -> bool {
        matches!(self, Position::MID | Position::FWD)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Position::GK => "GK",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
        };
        f.write_str(code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    #[default]
    Active,
    /// Terminal. Retired players are kept, never deleted.
    Retired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CareerTotals {
    pub appearances: u32,
    pub goals: u32,
    pub assists: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SeasonStats {
    pub appearances: u32,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
    pub average_rating: f32,
    pub rated_matches: u32,
}

impl SeasonStats {
    /// Incremental mean: `(old_avg * n + rating) / (n + 1)`.
    pub fn push_rating(&mut self, rating: f32) {
        let n = self.rated_matches as f32;
        self.average_rating = (self.average_rating * n + rating) / (n + 1.0);
        self.rated_matches += 1;
    }
}

/// One match in a player's history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchHistoryEntry {
    pub date: GameDate,
    pub opponent: ClubId,
    pub rating: f32,
    pub goals: u8,
    pub assists: u8,
    pub clean_sheet: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub region: Region,
    pub age: u8,
    pub position: Position,
    overall_rating: f32,
    potential: f32,
    pub reputation: f32,
    stamina: f32,
    morale: f32,
    form: f32,
    pub career: CareerTotals,
    pub season: SeasonStats,
    #[serde(default)]
    match_history: VecDeque<MatchHistoryEntry>,
    #[serde(default)]
    pub traits: Vec<PlayerTrait>,
    pub contract: Option<Contract>,
    pub agent: Option<Agent>,
    pub market_value: f64,
    /// Weeks until fit again. 0 = available.
    #[serde(default)]
    pub injury_weeks: u8,
    #[serde(default)]
    pub status: PlayerStatus,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        region: Region,
        age: u8,
        position: Position,
        overall_rating: f32,
        potential: f32,
    ) -> Self {
        let potential = potential.clamp(RATING_MIN, RATING_MAX);
        Self {
            id,
            name: name.into(),
            region,
            age,
            position,
            overall_rating: overall_rating.clamp(RATING_MIN, potential),
            potential,
            reputation: 10.0,
            stamina: STAT_MAX,
            morale: 70.0,
            form: 60.0,
            career: CareerTotals::default(),
            season: SeasonStats::default(),
            match_history: VecDeque::new(),
            traits: Vec::new(),
            contract: None,
            agent: None,
            market_value: 0.0,
            injury_weeks: 0,
            status: PlayerStatus::Active,
        }
    }

    pub fn overall_rating(&self) -> f32 {
        self.overall_rating
    }

    pub fn potential(&self) -> f32 {
        self.potential
    }

    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    pub fn morale(&self) -> f32 {
        self.morale
    }

    pub fn form(&self) -> f32 {
        self.form
    }

    /// Clamped to `[RATING_MIN, potential]`.
    pub fn set_overall_rating(&mut self, value: f32) {
        self.overall_rating = value.clamp(RATING_MIN, self.potential);
    }

    /// Clamped to `[overall_rating, RATING_MAX]` so the ceiling never drops below the current level.
    pub fn set_potential(&mut self, value: f32) {
        self.potential = value.clamp(self.overall_rating, RATING_MAX);
    }

    pub fn adjust_stamina(&mut self, delta: f32) {
        self.stamina = (self.stamina + delta).clamp(STAT_MIN, STAT_MAX);
    }

    pub fn adjust_morale(&mut self, delta: f32) {
        self.morale = (self.morale + delta).clamp(STAT_MIN, STAT_MAX);
    }

    pub fn adjust_form(&mut self, delta: f32) {
        self.form = (self.form + delta).clamp(STAT_MIN, STAT_MAX);
    }

    pub fn adjust_reputation(&mut self, delta: f32) {
        self.reputation = (self.reputation + delta).clamp(STAT_MIN, STAT_MAX);
    }

    /// Exponential moving average of match ratings (0-10 scale mapped to 0-100).
    pub fn update_form(&mut self, match_rating: f32) {
        let next = self.form * 0.8 + match_rating * 10.0 * 0.2;
        self.form = next.clamp(STAT_MIN, STAT_MAX);
    }

    pub fn has_trait(&self, kind: PlayerTrait) -> bool {
        self.traits.contains(&kind)
    }

    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    pub fn is_available(&self) -> bool {
        self.is_active() && self.injury_weeks == 0
    }

    pub fn club_id(&self) -> Option<ClubId> {
        self.contract.as_ref().map(|c| c.club_id)
    }

    pub fn match_history(&self) -> &VecDeque<MatchHistoryEntry> {
        &self.match_history
    }

    /// Appends a history entry (oldest evicted past [`MATCH_HISTORY_CAP`])
    /// and folds it into season and career totals.
    pub fn record_match(&mut self, entry: MatchHistoryEntry) {
        self.match_history.push_back(entry);
        while self.match_history.len() > MATCH_HISTORY_CAP {
            self.match_history.pop_front();
        }

        self.season.appearances += 1;
        self.season.goals += entry.goals as u32;
        self.season.assists += entry.assists as u32;
        if entry.clean_sheet {
            self.season.clean_sheets += 1;
        }
        self.season.push_rating(entry.rating);

        self.career.appearances += 1;
        self.career.goals += entry.goals as u32;
        self.career.assists += entry.assists as u32;
    }

    pub fn reset_season(&mut self) {
        self.season = SeasonStats::default();
    }

    pub fn retire(&mut self) {
        self.status = PlayerStatus::Retired;
        self.contract = None;
    }
}

#[cfg(test)]
pub(crate) fn test_player(id: u32, position: Position, rating: f32) -> Player {
    Player::new(PlayerId(id), format!("Player {}", id), Region::Northland, 25, position, rating, 99.0)
}
