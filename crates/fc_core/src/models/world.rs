use super::ids::{ClubId, LeagueId, PlayerId};
use super::league::League;
use super::player::Player;
use super::team::Team;
use serde::{Deserialize, Serialize};

/// Where a player currently lives in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerLocation {
    Club(ClubId),
    FreeAgent,
    Retired,
}

/// The whole simulated population of one career session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct World {
    pub leagues: Vec<League>,
    pub clubs: Vec<Team>,
    pub free_agents: Vec<Player>,
    /// Retired players are moved here, never deleted.
    #[serde(default)]
    pub retired: Vec<Player>,
    next_player_id: u32,
    next_club_id: u32,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_player_id(&mut self) -> PlayerId {
        self.next_player_id += 1;
        PlayerId(self.next_player_id)
    }

    pub fn allocate_club_id(&mut self) -> ClubId {
        self.next_club_id += 1;
        ClubId(self.next_club_id)
    }

    pub fn club(&self, id: ClubId) -> Option<&Team> {
        self.clubs.iter().find(|c| c.id == id)
    }

    pub fn club_mut(&mut self, id: ClubId) -> Option<&mut Team> {
        self.clubs.iter_mut().find(|c| c.id == id)
    }

    pub fn league(&self, id: LeagueId) -> Option<&League> {
        self.leagues.iter().find(|l| l.id == id)
    }

    pub fn league_mut(&mut self, id: LeagueId) -> Option<&mut League> {
        self.leagues.iter_mut().find(|l| l.id == id)
    }

    pub fn league_of_club(&self, club: ClubId) -> Option<&League> {
        self.leagues.iter().find(|l| l.contains(club))
    }

    pub fn locate_player(&self, id: PlayerId) -> Option<PlayerLocation> {
        if let Some(club) = self.clubs.iter().find(|c| c.has_player(id)) {
            return Some(PlayerLocation::Club(club.id));
        }
        if self.free_agents.iter().any(|p| p.id == id) {
            return Some(PlayerLocation::FreeAgent);
        }
        if self.retired.iter().any(|p| p.id == id) {
            return Some(PlayerLocation::Retired);
        }
        None
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.clubs
            .iter()
            .flat_map(|c| c.players.iter())
            .chain(self.free_agents.iter())
            .chain(self.retired.iter())
            .find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.clubs
            .iter_mut()
            .flat_map(|c| c.players.iter_mut())
            .chain(self.free_agents.iter_mut())
            .chain(self.retired.iter_mut())
            .find(|p| p.id == id)
    }

    /// Every player still in football (club rosters and free agents).
    pub fn active_players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.clubs
            .iter_mut()
            .flat_map(|c| c.players.iter_mut())
            .chain(self.free_agents.iter_mut())
            .filter(|p| p.is_active())
    }

    /// Detaches a player from wherever they are.
    pub fn take_player(&mut self, id: PlayerId) -> Option<Player> {
        for club in &mut self.clubs {
            if let Some(p) = club.remove_player(id) {
                return Some(p);
            }
        }
        let idx = self.free_agents.iter().position(|p| p.id == id)?;
        Some(self.free_agents.remove(idx))
    }

    /// Moves a player to `to` (a club roster) or to free agency when `None`.
    /// Returns false, changing nothing, if the player or club is unknown.
    pub fn move_player(&mut self, id: PlayerId, to: Option<ClubId>) -> bool {
        if let Some(club) = to {
            if self.club(club).is_none() {
                return false;
            }
        }
        let Some(player) = self.take_player(id) else {
            return false;
        };
        match to.and_then(|club| self.club_mut(club)) {
            Some(club) => club.add_player(player),
            None => self.free_agents.push(player),
        }
        true
    }

    pub fn player_count(&self) -> usize {
        self.clubs.iter().map(|c| c.players.len()).sum::<usize>() + self.free_agents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Region;
    use crate::models::player::{test_player, Position};
    use crate::models::team::{Tactics, TransferPolicy};

    fn club(world: &mut World, name: &str) -> ClubId {
        let id = world.allocate_club_id();
        world.clubs.push(Team {
            id,
            name: name.to_string(),
            region: Region::Northland,
            tactics: Tactics::default(),
            players: Vec::new(),
            budget: 1000.0,
            reputation: 50.0,
            league_id: LeagueId(1),
            transfer_policy: TransferPolicy::Balanced,
            stats: Default::default(),
        });
        id
    }

    #[test]
    fn test_move_player_between_clubs_and_free_agency() {
        let mut world = World::new();
        let a = club(&mut world, "A");
        let b = club(&mut world, "B");
        let pid = world.allocate_player_id();
        world.free_agents.push(test_player(pid.0, Position::MID, 60.0));

        assert!(world.move_player(pid, Some(a)));
        assert_eq!(world.locate_player(pid), Some(PlayerLocation::Club(a)));

        assert!(world.move_player(pid, Some(b)));
        assert_eq!(world.locate_player(pid), Some(PlayerLocation::Club(b)));
        assert!(world.club(a).map(|c| c.players.is_empty()).unwrap_or(false));

        assert!(world.move_player(pid, None));
        assert_eq!(world.locate_player(pid), Some(PlayerLocation::FreeAgent));
    }

    #[test]
    fn test_move_to_unknown_club_changes_nothing() {
        let mut world = World::new();
        let a = club(&mut world, "A");
        let pid = world.allocate_player_id();
        world.club_mut(a).map(|c| c.add_player(test_player(pid.0, Position::GK, 60.0)));

        assert!(!world.move_player(pid, Some(ClubId(99))));
        assert_eq!(world.locate_player(pid), Some(PlayerLocation::Club(a)));
    }
}
