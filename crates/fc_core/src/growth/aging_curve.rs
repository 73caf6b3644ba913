//! Aging curve with sigmoid growth and exponential decay.
//!
//! - Before the peak: `max_gain * sigmoid((peak - age) * steepness) * gap_factor * form_factor`
//! - At the peak: plateau
//! - After the peak: `base_decay * exp((age - peak) * rate)`, softened for professionals

use crate::config::GrowthConfig;
use crate::data::PlayerTrait;
use crate::math::sigmoid;
use crate::models::Player;

/// Rating gap at which growth runs at full speed.
const FULL_SPEED_GAP: f32 = 20.0;

/// Result of one weekly step. Exactly one of the two fields is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeeklyChange {
    pub growth: f32,
    pub decay: f32,
}

impl WeeklyChange {
    pub fn net(&self) -> f32 {
        self.growth - self.decay
    }
}

/// Aging curve calculator
#[derive(Debug)]
pub struct AgingCurve;

impl AgingCurve {
    pub fn peak_age(player: &Player, cfg: &GrowthConfig) -> u8 {
        if player.has_trait(PlayerTrait::LateBloomer) {
            cfg.peak_age.saturating_add(cfg.late_bloomer_shift)
        } else {
            cfg.peak_age
        }
    }

    /// Weekly gain for a pre-peak player; 0 at or after the peak or at potential.
    pub fn growth(player: &Player, cfg: &GrowthConfig) -> f32 {
        let peak = Self::peak_age(player, cfg);
        if player.age >= peak {
            return 0.0;
        }
        let gap = player.potential() - player.overall_rating();
        if gap <= 0.0 {
            return 0.0;
        }
        let youth = sigmoid((peak - player.age) as f32 * cfg.growth_steepness);
        let gap_factor = (gap / FULL_SPEED_GAP).min(1.0);
        // form 0-100 -> 0.75x-1.25x
        let form_factor = 0.75 + player.form() / 200.0;
        cfg.max_weekly_gain * youth * gap_factor * form_factor
    }

    /// Weekly loss for a post-peak player; 0 up to and including the peak.
    pub fn decay(player: &Player, cfg: &GrowthConfig) -> f32 {
        let peak = Self::peak_age(player, cfg);
        if player.age <= peak {
            return 0.0;
        }
        let years_past = (player.age - peak) as f32;
        let mut decay = cfg.base_decay * (years_past * cfg.decay_rate).exp();
        if player.has_trait(PlayerTrait::Professional) {
            decay *= cfg.professional_decay_factor;
        }
        decay
    }

    pub fn weekly_change(player: &Player, cfg: &GrowthConfig) -> WeeklyChange {
        WeeklyChange { growth: Self::growth(player, cfg), decay: Self::decay(player, cfg) }
    }
}

/// One weekly growth tick. Takes the player by value and returns the updated one;
/// the rating stays within `[RATING_MIN, potential]`.
pub fn apply_week(mut player: Player, cfg: &GrowthConfig) -> Player {
    if !player.is_active() {
        return player;
    }
    let change = AgingCurve::weekly_change(&player, cfg);
    if change.net() != 0.0 {
        player.set_overall_rating(player.overall_rating() + change.net());
    }
    player
}
