use super::date::GameDate;
use super::events::{EventType, MatchEvent, Side};
use super::ids::{ClubId, PlayerId};
use super::player::MatchHistoryEntry;
use super::team::FormResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable record of one simulated match. Built once by the match engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    home_id: ClubId,
    away_id: ClubId,
    home_goals: u8,
    away_goals: u8,
    home_possession: u8,
    away_possession: u8,
    minutes_played: u8,
    events: Vec<MatchEvent>,
    ratings: BTreeMap<PlayerId, f32>,
    /// Players (both sides) who took the field, by side.
    participants: BTreeMap<PlayerId, Side>,
    /// Injured players and weeks out.
    injuries: BTreeMap<PlayerId, u8>,
    decisions_taken: u32,
}

/// Everything the engine hands over at full time.
pub(crate) struct MatchResultParts {
    pub home_id: ClubId,
    pub away_id: ClubId,
    pub home_goals: u8,
    pub away_goals: u8,
    pub home_possession: u8,
    pub minutes_played: u8,
    pub events: Vec<MatchEvent>,
    pub ratings: BTreeMap<PlayerId, f32>,
    pub participants: BTreeMap<PlayerId, Side>,
    pub injuries: BTreeMap<PlayerId, u8>,
    pub decisions_taken: u32,
}

impl MatchResult {
    pub(crate) fn from_parts(parts: MatchResultParts) -> Self {
        let home_possession = parts.home_possession.min(100);
        Self {
            home_id: parts.home_id,
            away_id: parts.away_id,
            home_goals: parts.home_goals,
            away_goals: parts.away_goals,
            home_possession,
            away_possession: 100 - home_possession,
            minutes_played: parts.minutes_played,
            events: parts.events,
            ratings: parts.ratings,
            participants: parts.participants,
            injuries: parts.injuries,
            decisions_taken: parts.decisions_taken,
        }
    }

    pub fn home_id(&self) -> ClubId {
        self.home_id
    }

    pub fn away_id(&self) -> ClubId {
        self.away_id
    }

    pub fn score(&self) -> (u8, u8) {
        (self.home_goals, self.away_goals)
    }

    pub fn possession(&self) -> (u8, u8) {
        (self.home_possession, self.away_possession)
    }

    pub fn minutes_played(&self) -> u8 {
        self.minutes_played
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn ratings(&self) -> &BTreeMap<PlayerId, f32> {
        &self.ratings
    }

    pub fn rating_of(&self, player: PlayerId) -> Option<f32> {
        self.ratings.get(&player).copied()
    }

    pub fn participants(&self) -> &BTreeMap<PlayerId, Side> {
        &self.participants
    }

    pub fn played(&self, player: PlayerId) -> bool {
        self.participants.contains_key(&player)
    }

    pub fn injuries(&self) -> &BTreeMap<PlayerId, u8> {
        &self.injuries
    }

    pub fn decisions_taken(&self) -> u32 {
        self.decisions_taken
    }

    pub fn side_of(&self, club: ClubId) -> Option<Side> {
        if club == self.home_id {
            Some(Side::Home)
        } else if club == self.away_id {
            Some(Side::Away)
        } else {
            None
        }
    }

    pub fn opponent_of(&self, club: ClubId) -> Option<ClubId> {
        match self.side_of(club)? {
            Side::Home => Some(self.away_id),
            Side::Away => Some(self.home_id),
        }
    }

    /// (goals for, goals against) from `club`'s point of view.
    pub fn goals_for(&self, club: ClubId) -> Option<(u8, u8)> {
        match self.side_of(club)? {
            Side::Home => Some((self.home_goals, self.away_goals)),
            Side::Away => Some((self.away_goals, self.home_goals)),
        }
    }

    pub fn outcome_for(&self, club: ClubId) -> Option<FormResult> {
        self.goals_for(club).map(|(gf, ga)| FormResult::from_score(gf, ga))
    }

    pub fn goals_by(&self, player: PlayerId) -> u8 {
        self.count_events(EventType::Goal, |e| e.actor == Some(player))
    }

    pub fn assists_by(&self, player: PlayerId) -> u8 {
        self.count_events(EventType::Goal, |e| e.secondary == Some(player))
    }

    fn count_events(&self, kind: EventType, pred: impl Fn(&MatchEvent) -> bool) -> u8 {
        let n = self.events.iter().filter(|e| e.event_type == kind && pred(e)).count();
        n.min(u8::MAX as usize) as u8
    }

    pub fn kept_clean_sheet(&self, side: Side) -> bool {
        match side {
            Side::Home => self.away_goals == 0,
            Side::Away => self.home_goals == 0,
        }
    }

    /// History entry for a participant; `None` if they did not play.
    pub fn history_entry_for(&self, player: PlayerId, date: GameDate) -> Option<MatchHistoryEntry> {
        let side = *self.participants.get(&player)?;
        let opponent = match side {
            Side::Home => self.away_id,
            Side::Away => self.home_id,
        };
        Some(MatchHistoryEntry {
            date,
            opponent,
            rating: self.rating_of(player).unwrap_or(6.0),
            goals: self.goals_by(player),
            assists: self.assists_by(player),
            clean_sheet: self.kept_clean_sheet(side),
        })
    }
}
