//! Aging curve parameters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Age at which growth stops and decay starts (default: 27)
    pub peak_age: u8,
    /// Extra peak years for late bloomers (default: 2)
    pub late_bloomer_shift: u8,
    /// Maximum weekly gain for a young player far from potential (default: 0.25)
    pub max_weekly_gain: f32,
    /// Steepness of the pre-peak sigmoid (default: 0.5)
    pub growth_steepness: f32,
    /// Weekly decay right after the peak (default: 0.02)
    pub base_decay: f32,
    /// Exponential rate of decay per year past peak (default: 0.15)
    pub decay_rate: f32,
    /// Decay multiplier for professionals (default: 0.7)
    pub professional_decay_factor: f32,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            peak_age: 27,
            late_bloomer_shift: 2,
            max_weekly_gain: 0.25,
            growth_steepness: 0.5,
            base_decay: 0.02,
            decay_rate: 0.15,
            professional_decay_factor: 0.7,
        }
    }
}
