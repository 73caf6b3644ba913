//! Valuation, desirability and contract generation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Floor on market value (default: 5000)
    pub min_market_value: f64,
    /// Weekly wage as a share of market value (default: 0.008)
    pub wage_ratio: f64,
    /// Floor on weekly wage (default: 200)
    pub min_wage: f64,
    /// Release clause as a multiple of market value (default: 2.5)
    pub release_clause_multiplier: f64,
    /// Signing bonus as a share of market value (default: 0.05)
    pub signing_bonus_ratio: f64,
    /// Minimum desirability for a club to table an offer (default: 55)
    pub offer_threshold: f32,
    /// Std-dev of the negotiation variance sample (default: 0.1)
    pub negotiation_sigma: f32,
    pub negotiation_min: f32,
    pub negotiation_max: f32,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            min_market_value: 5000.0,
            wage_ratio: 0.008,
            min_wage: 200.0,
            release_clause_multiplier: 2.5,
            signing_bonus_ratio: 0.05,
            offer_threshold: 55.0,
            negotiation_sigma: 0.1,
            negotiation_min: 0.8,
            negotiation_max: 1.2,
        }
    }
}
