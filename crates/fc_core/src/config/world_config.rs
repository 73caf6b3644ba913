//! Population generation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Mean rating of a tier-1 squad (default: 80)
    pub tier1_rating_mean: f32,
    /// Mean rating of a tier-4 squad (default: 52)
    pub tier4_rating_mean: f32,
    /// Std-dev of generated ratings (default: 5)
    pub rating_sigma: f32,
    pub age_mean: f32,
    pub age_sigma: f32,
    pub age_min: u8,
    pub age_max: u8,
    /// Chance a young player is a wonderkid (default: 0.02)
    pub wonderkid_chance: f32,
    /// Base chance of having at least one trait (default: 0.3)
    pub trait_chance: f32,
    /// Number of leagues per region; `None` means every template
    pub tiers_per_region: Option<u8>,
    /// Unattached players generated per region (default: 20)
    pub free_agents_per_region: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tier1_rating_mean: 80.0,
            tier4_rating_mean: 52.0,
            rating_sigma: 5.0,
            age_mean: 26.0,
            age_sigma: 4.0,
            age_min: 16,
            age_max: 36,
            wonderkid_chance: 0.02,
            trait_chance: 0.3,
            tiers_per_region: None,
            free_agents_per_region: 20,
        }
    }
}

impl WorldConfig {
    /// Linear interpolation between the tier-1 and tier-4 means.
    pub fn rating_mean_for_tier(&self, tier: u8) -> f32 {
        let t = (tier.clamp(1, 4) - 1) as f32 / 3.0;
        self.tier1_rating_mean + (self.tier4_rating_mean - self.tier1_rating_mean) * t
    }
}
