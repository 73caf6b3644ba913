//! # Simulation configuration
//!
//! Every tuning constant lives here so balance changes never touch engine code.
//!
//! ```rust
//! use fc_core::config::SimConfig;
//!
//! let config = SimConfig::default();
//! let arcade = SimConfig::arcade();
//! assert!(arcade.matches.base_conversion > config.matches.base_conversion);
//! ```

mod career_config;
mod economy_config;
mod growth_config;
mod match_config;
mod world_config;

pub use career_config::CareerConfig;
pub use economy_config::EconomyConfig;
pub use growth_config::GrowthConfig;
pub use match_config::MatchConfig;
pub use world_config::WorldConfig;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimConfig {
    #[serde(rename = "match")]
    pub matches: MatchConfig,
    pub career: CareerConfig,
    pub growth: GrowthConfig,
    pub economy: EconomyConfig,
    pub world: WorldConfig,
}

impl SimConfig {
    pub fn realistic() -> Self {
        Self::default()
    }

    /// More highlights, more goals, faster development.
    pub fn arcade() -> Self {
        let mut cfg = Self::default();
        cfg.matches.highlight_chance = 0.2;
        cfg.matches.base_conversion = 0.4;
        cfg.matches.human_involvement = 0.6;
        cfg.matches.var_check_chance = 0.04;
        cfg.growth.max_weekly_gain = 0.4;
        cfg.career.offer_chance = 0.5;
        cfg
    }

    /// Parses YAML; missing fields take their defaults.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let cfg: SimConfig = serde_yaml::from_str(source)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.matches.probabilities() {
            if !(0.0..=1.0).contains(&value) {
                log::warn!("rejecting config: {} = {}", name, value);
                return Err(ConfigError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        let m = &self.matches;
        if m.minutes == 0 {
            return Err(ConfigError::InvalidConfig("match.minutes must be positive".into()));
        }
        if m.rating_min > m.rating_baseline || m.rating_baseline > m.rating_max {
            return Err(ConfigError::InvalidConfig(
                "match.rating_baseline must lie within [rating_min, rating_max]".into(),
            ));
        }
        if m.sub_entry_earliest > m.sub_entry_latest || m.sub_entry_latest >= m.minutes {
            return Err(ConfigError::InvalidConfig(
                "match.sub_entry window must be ordered and inside the match".into(),
            ));
        }
        let e = &self.economy;
        if e.negotiation_min > e.negotiation_max || e.negotiation_min <= 0.0 {
            return Err(ConfigError::InvalidConfig(
                "economy.negotiation_min must be positive and <= negotiation_max".into(),
            ));
        }
        let c = &self.career;
        if !(0.0..=1.0).contains(&c.offer_chance) {
            return Err(ConfigError::InvalidConfig("career.offer_chance must be within [0, 1]".into()));
        }
        if c.retirement_min_age > c.retirement_forced_age {
            return Err(ConfigError::InvalidConfig(
                "career.retirement_min_age must not exceed retirement_forced_age".into(),
            ));
        }
        if c.squad_size < 18 {
            return Err(ConfigError::InvalidConfig("career.squad_size must be at least 18".into()));
        }
        let w = &self.world;
        if w.age_min > w.age_max {
            return Err(ConfigError::InvalidConfig("world.age_min must not exceed age_max".into()));
        }
        Ok(())
    }
}
