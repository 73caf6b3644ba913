use super::ids::{ClubId, LeagueId};
use crate::data::Region;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home: ClubId,
    pub away: ClubId,
}

impl Fixture {
    pub fn involves(&self, club: ClubId) -> bool {
        self.home == club || self.away == club
    }

    pub fn opponent_of(&self, club: ClubId) -> Option<ClubId> {
        if self.home == club {
            Some(self.away)
        } else if self.away == club {
            Some(self.home)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchday {
    /// 1-based.
    pub number: usize,
    pub fixtures: Vec<Fixture>,
}

impl Matchday {
    pub fn fixture_for(&self, club: ClubId) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.involves(club))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub region: Region,
    /// 1 = strongest.
    pub tier: u8,
    /// Member clubs in registration order.
    pub team_ids: Vec<ClubId>,
    /// Index of the next matchday to play.
    pub current_matchday: usize,
    /// Season the current fixture list belongs to.
    #[serde(default)]
    pub season: Option<u16>,
    #[serde(default)]
    pub fixtures: Vec<Matchday>,
}

impl League {
    pub fn new(id: LeagueId, name: impl Into<String>, region: Region, tier: u8) -> Self {
        Self {
            id,
            name: name.into(),
            region,
            tier,
            team_ids: Vec::new(),
            current_matchday: 0,
            season: None,
            fixtures: Vec::new(),
        }
    }

    pub fn contains(&self, club: ClubId) -> bool {
        self.team_ids.contains(&club)
    }

    pub fn next_matchday(&self) -> Option<&Matchday> {
        self.fixtures.get(self.current_matchday)
    }

    pub fn is_season_complete(&self) -> bool {
        !self.fixtures.is_empty() && self.current_matchday >= self.fixtures.len()
    }

    pub fn matchdays_remaining(&self) -> usize {
        self.fixtures.len().saturating_sub(self.current_matchday)
    }
}
