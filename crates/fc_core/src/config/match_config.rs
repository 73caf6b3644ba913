//! Match engine tuning.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minutes in a match (default: 90)
    pub minutes: u8,
    /// Per-minute chance the possessing side produces a highlight (default: 0.15)
    pub highlight_chance: f32,
    /// Share of highlights that become a shot (default: 0.55)
    pub shot_share: f32,
    /// Share of non-shot highlights that win a corner (default: 0.2)
    pub corner_share: f32,
    /// Base shot conversion before strength scaling (default: 0.30)
    pub base_conversion: f32,
    /// Added to the home side's possession probability (default: 0.03)
    pub home_advantage: f32,
    /// Chance a goal has an assist provider (default: 0.6)
    pub assist_chance: f32,

    /// Chance a highlight in the human's sector becomes a decision (default: 0.4)
    pub human_involvement: f32,

    // === Discipline / injuries ===
    /// Per-minute chance of a foul event outside highlights (default: 0.06)
    pub foul_chance: f32,
    /// Chance a foul is booked (default: 0.2)
    pub card_chance: f32,
    /// Chance a booking is a straight red (default: 0.05)
    pub straight_red_share: f32,
    /// Per-minute chance of an injury (default: 0.004)
    pub injury_chance: f32,
    /// Weeks out: uniform in [1, max_injury_weeks] (default: 6)
    pub max_injury_weeks: u8,

    // === VAR ===
    /// Chance a goal goes to review (default: 0.08)
    pub var_check_chance: f32,
    /// Chance a reviewed goal is overturned (default: 0.3)
    pub var_overturn_chance: f32,

    // === Ratings ===
    pub rating_baseline: f32,
    pub rating_min: f32,
    pub rating_max: f32,
    pub rating_goal: f32,
    pub rating_assist: f32,
    pub rating_save: f32,
    pub rating_miss: f32,
    pub rating_concede: f32,
    pub rating_foul: f32,
    pub rating_yellow: f32,
    pub rating_red: f32,

    /// Bench entry window for a human starting among substitutes
    pub sub_entry_earliest: u8,
    pub sub_entry_latest: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            minutes: 90,
            highlight_chance: 0.15,
            shot_share: 0.55,
            corner_share: 0.2,
            base_conversion: 0.30,
            home_advantage: 0.03,
            assist_chance: 0.6,

            human_involvement: 0.4,

            foul_chance: 0.06,
            card_chance: 0.2,
            straight_red_share: 0.05,
            injury_chance: 0.004,
            max_injury_weeks: 6,

            var_check_chance: 0.08,
            var_overturn_chance: 0.3,

            rating_baseline: 6.0,
            rating_min: 3.0,
            rating_max: 10.0,
            rating_goal: 1.0,
            rating_assist: 0.5,
            rating_save: 0.3,
            rating_miss: -0.15,
            rating_concede: -0.3,
            rating_foul: -0.2,
            rating_yellow: -0.3,
            rating_red: -1.0,

            sub_entry_earliest: 55,
            sub_entry_latest: 75,
        }
    }
}

impl MatchConfig {
    pub(crate) fn probabilities(&self) -> [(&'static str, f32); 11] {
        [
            ("match.highlight_chance", self.highlight_chance),
            ("match.shot_share", self.shot_share),
            ("match.corner_share", self.corner_share),
            ("match.base_conversion", self.base_conversion),
            ("match.assist_chance", self.assist_chance),
            ("match.human_involvement", self.human_involvement),
            ("match.foul_chance", self.foul_chance),
            ("match.card_chance", self.card_chance),
            ("match.injury_chance", self.injury_chance),
            ("match.var_check_chance", self.var_check_chance),
            ("match.var_overturn_chance", self.var_overturn_chance),
        ]
    }
}
