use super::ids::PlayerId;
use serde::{Deserialize, Serialize};

pub const AGENT_MIN_LEVEL: u8 = 1;
pub const AGENT_MAX_LEVEL: u8 = 10;

/// A player's representative. Owned by exactly one player and upgraded in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    level: u8,
    /// Multiplier applied to every monetary term during negotiation.
    pub negotiation_skill: f32,
    /// Reach into stronger leagues.
    pub network_reach: f32,
    /// Weight on surfacing more offers per window.
    pub scouting: f32,
    /// Share of wages and bonuses the agent keeps.
    pub commission_rate: f32,
    pub clients: Vec<PlayerId>,
}

impl Agent {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        let mut agent = Self {
            name: name.into(),
            level: AGENT_MIN_LEVEL,
            negotiation_skill: 1.0,
            network_reach: 1.0,
            scouting: 1.0,
            commission_rate: 0.05,
            clients: Vec::new(),
        };
        agent.set_level(level);
        agent
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    fn set_level(&mut self, level: u8) {
        self.level = level.clamp(AGENT_MIN_LEVEL, AGENT_MAX_LEVEL);
        let steps = (self.level - AGENT_MIN_LEVEL) as f32;
        self.negotiation_skill = 1.0 + steps * 0.025;
        self.network_reach = 1.0 + steps * 0.1;
        self.scouting = 1.0 + steps * 0.08;
        self.commission_rate = 0.05 + steps * 0.005;
    }

    /// Strongest tier this agent can surface offers from.
    /// Level 1-2 reach tier 4, 3-5 tier 3, 6-8 tier 2, 9+ tier 1.
    pub fn best_accessible_tier(&self) -> u8 {
        match self.level {
            0..=2 => 4,
            3..=5 => 3,
            6..=8 => 2,
            _ => 1,
        }
    }

    pub fn can_access_tier(&self, tier: u8) -> bool {
        tier >= self.best_accessible_tier()
    }

    /// Cost of moving to the next level.
    pub fn upgrade_cost(&self, base_cost: f64) -> f64 {
        base_cost * (self.level as f64).powf(1.6)
    }

    /// Returns false at max level.
    pub fn upgrade(&mut self) -> bool {
        if self.level >= AGENT_MAX_LEVEL {
            return false;
        }
        self.set_level(self.level + 1);
        true
    }

    pub fn commission_on(&self, amount: f64) -> f64 {
        amount * self.commission_rate as f64
    }

    pub fn sign_client(&mut self, player: PlayerId) {
        if !self.clients.contains(&player) {
            self.clients.push(player);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_access_tightens_with_level() {
        assert_eq!(Agent::new("A", 1).best_accessible_tier(), 4);
        assert_eq!(Agent::new("A", 4).best_accessible_tier(), 3);
        assert_eq!(Agent::new("A", 7).best_accessible_tier(), 2);
        assert_eq!(Agent::new("A", 9).best_accessible_tier(), 1);
        assert!(!Agent::new("A", 1).can_access_tier(1));
        assert!(Agent::new("A", 1).can_access_tier(4));
    }

    #[test]
    fn test_upgrade_in_place() {
        let mut agent = Agent::new("A", 9);
        let skill = agent.negotiation_skill;
        assert!(agent.upgrade());
        assert_eq!(agent.level(), 10);
        assert!(agent.negotiation_skill > skill);
        assert!(!agent.upgrade());
    }

    #[test]
    fn test_level_clamped() {
        assert_eq!(Agent::new("A", 0).level(), 1);
        assert_eq!(Agent::new("A", 42).level(), 10);
    }
}
