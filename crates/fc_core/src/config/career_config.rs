//! Weekly tick and season rollover tuning.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerConfig {
    /// Stamina regained every week (default: 15)
    pub stamina_recovery: f32,
    /// Stamina lost after playing (default: 20)
    pub match_fatigue: f32,
    /// Rating lost per week without a club (default: 0.1)
    pub unemployed_decay: f32,
    /// Weekly living cost before reputation scaling (default: 150)
    pub living_cost_base: f64,
    /// Extra weekly cost per reputation point (default: 12)
    pub living_cost_per_reputation: f64,
    /// Morale hit when left out of the squad (default: 3)
    pub non_selection_morale: f32,
    /// Morale swing for a win / loss (default: 2)
    pub result_morale: f32,
    /// Reputation gained per goal (default: 0.4)
    pub reputation_per_goal: f32,

    /// Starting cash of a new career (default: 2000)
    pub starting_balance: f64,
    /// Starting agent level (default: 1)
    pub starting_agent_level: u8,
    /// First calendar year (default: 2025)
    pub start_year: u16,
    /// Base of the agent upgrade cost curve (default: 5000)
    pub agent_upgrade_base_cost: f64,

    /// Retirement becomes possible at this age (default: 34)
    pub retirement_min_age: u8,
    /// Retirement is certain at this age (default: 38)
    pub retirement_forced_age: u8,
    /// Retirement chance per year past the minimum (default: 0.2)
    pub retirement_chance_per_year: f32,
    /// AI contracts stop auto-renewing at this age (default: 33)
    pub renewal_age_limit: u8,
    /// Clubs are topped up with academy players to this size (default: 25)
    pub squad_size: usize,
    /// Clubs promoted/relegated between adjacent tiers (default: 2)
    pub promotion_places: usize,

    /// Weekly chance of new offers during a window (default: 0.35)
    pub offer_chance: f32,
    /// Offers surfaced at most per week (default: 3)
    pub max_offers: usize,
}

impl Default for CareerConfig {
    fn default() -> Self {
        Self {
            stamina_recovery: 15.0,
            match_fatigue: 20.0,
            unemployed_decay: 0.1,
            living_cost_base: 150.0,
            living_cost_per_reputation: 12.0,
            non_selection_morale: 3.0,
            result_morale: 2.0,
            reputation_per_goal: 0.4,

            starting_balance: 2000.0,
            starting_agent_level: 1,
            start_year: 2025,
            agent_upgrade_base_cost: 5000.0,

            retirement_min_age: 34,
            retirement_forced_age: 38,
            retirement_chance_per_year: 0.2,
            renewal_age_limit: 33,
            squad_size: 25,
            promotion_places: 2,

            offer_chance: 0.35,
            max_offers: 3,
        }
    }
}
