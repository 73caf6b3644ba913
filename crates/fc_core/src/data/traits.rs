//! Personality/playing traits and their exclusion rules.

use crate::models::Position;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerTrait {
    Speedster,
    Leader,
    ClinicalFinisher,
    Playmaker,
    Wall,
    ShotStopper,
    Engine,
    InjuryProne,
    LateBloomer,
    Professional,
    BigGamePlayer,
}

/// Weighted entry of the trait draw table.
#[derive(Debug, Clone, Copy)]
pub struct TraitSpec {
    pub kind: PlayerTrait,
    pub weight: u32,
}

pub const TRAIT_TABLE: &[TraitSpec] = &[
    TraitSpec { kind: PlayerTrait::Speedster, weight: 12 },
    TraitSpec { kind: PlayerTrait::Leader, weight: 6 },
    TraitSpec { kind: PlayerTrait::ClinicalFinisher, weight: 8 },
    TraitSpec { kind: PlayerTrait::Playmaker, weight: 8 },
    TraitSpec { kind: PlayerTrait::Wall, weight: 8 },
    TraitSpec { kind: PlayerTrait::ShotStopper, weight: 6 },
    TraitSpec { kind: PlayerTrait::Engine, weight: 10 },
    TraitSpec { kind: PlayerTrait::InjuryProne, weight: 7 },
    TraitSpec { kind: PlayerTrait::LateBloomer, weight: 5 },
    TraitSpec { kind: PlayerTrait::Professional, weight: 8 },
    TraitSpec { kind: PlayerTrait::BigGamePlayer, weight: 5 },
];

/// Minimum age for the Leader trait.
pub const LEADER_MIN_AGE: u8 = 23;

impl PlayerTrait {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerTrait::Speedster => "Speedster",
            PlayerTrait::Leader => "Leader",
            PlayerTrait::ClinicalFinisher => "Clinical Finisher",
            PlayerTrait::Playmaker => "Playmaker",
            PlayerTrait::Wall => "Wall",
            PlayerTrait::ShotStopper => "Shot Stopper",
            PlayerTrait::Engine => "Engine",
            PlayerTrait::InjuryProne => "Injury Prone",
            PlayerTrait::LateBloomer => "Late Bloomer",
            PlayerTrait::Professional => "Professional",
            PlayerTrait::BigGamePlayer => "Big Game Player",
        }
    }

    /// Filters out nonsensical combinations (no Speedster goalkeepers, no teenage Leaders...).
    pub fn is_allowed(&self, position: Position, age: u8) -> bool {
        match self {
            PlayerTrait::Speedster => position != Position::GK,
            PlayerTrait::Leader => age >= LEADER_MIN_AGE,
            PlayerTrait::ClinicalFinisher => matches!(position, Position::FWD | Position::MID),
            PlayerTrait::Playmaker => matches!(position, Position::MID | Position::FWD),
            PlayerTrait::Wall => position == Position::DEF,
            PlayerTrait::ShotStopper => position == Position::GK,
            PlayerTrait::LateBloomer => age <= 24,
            PlayerTrait::Engine
            | PlayerTrait::InjuryProne
            | PlayerTrait::Professional
            | PlayerTrait::BigGamePlayer => true,
        }
    }

    /// Multiplier on shot conversion when this player shoots.
    pub fn conversion_factor(&self) -> f32 {
        match self {
            PlayerTrait::ClinicalFinisher => 1.15,
            PlayerTrait::Speedster | PlayerTrait::BigGamePlayer => 1.05,
            _ => 1.0,
        }
    }

    /// Conversion taken off every shot while this player defends.
    pub fn block_bonus(&self) -> f32 {
        match self {
            PlayerTrait::Wall => 0.03,
            _ => 0.0,
        }
    }

    /// Conversion taken off every shot faced in goal.
    pub fn save_bonus(&self) -> f32 {
        match self {
            PlayerTrait::ShotStopper => 0.05,
            _ => 0.0,
        }
    }

    /// Multiplier on the side's assist chance while this player is on.
    pub fn assist_chance_factor(&self) -> f32 {
        match self {
            PlayerTrait::Playmaker => 1.2,
            _ => 1.0,
        }
    }

    /// Multiplier on the weight of being picked as the assisting player.
    pub fn assist_weight(&self) -> f32 {
        match self {
            PlayerTrait::Playmaker => 2.0,
            _ => 1.0,
        }
    }

    /// Multiplier on the weight of being picked for an injury.
    pub fn injury_weight(&self) -> f32 {
        match self {
            PlayerTrait::InjuryProne => 2.0,
            _ => 1.0,
        }
    }

    /// Share of the low-stamina strength penalty this player still suffers.
    pub fn fatigue_factor(&self) -> f32 {
        match self {
            PlayerTrait::Engine => 0.5,
            _ => 1.0,
        }
    }

    /// Multiplier on every sector strength of the side while this player is on.
    pub fn side_strength_factor(&self) -> f32 {
        match self {
            PlayerTrait::Leader => 1.02,
            _ => 1.0,
        }
    }

    /// Whether the trait changes anything inside a match. The rest act on
    /// weekly growth.
    pub fn affects_matches(&self) -> bool {
        self.conversion_factor() != 1.0
            || self.block_bonus() != 0.0
            || self.save_bonus() != 0.0
            || self.assist_chance_factor() != 1.0
            || self.injury_weight() != 1.0
            || self.fatigue_factor() != 1.0
            || self.side_strength_factor() != 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusions() {
        assert!(!PlayerTrait::Speedster.is_allowed(Position::GK, 25));
        assert!(PlayerTrait::Speedster.is_allowed(Position::FWD, 25));
        assert!(!PlayerTrait::Leader.is_allowed(Position::MID, 18));
        assert!(PlayerTrait::Leader.is_allowed(Position::MID, 30));
        assert!(!PlayerTrait::ShotStopper.is_allowed(Position::DEF, 25));
    }

    #[test]
    fn test_every_trait_has_an_effect() {
        for spec in TRAIT_TABLE {
            let growth_only = matches!(spec.kind, PlayerTrait::LateBloomer | PlayerTrait::Professional);
            assert_eq!(spec.kind.affects_matches(), !growth_only, "{:?}", spec.kind);
        }
    }

    #[test]
    fn test_every_position_has_candidates() {
        for pos in Position::ALL {
            let count = TRAIT_TABLE.iter().filter(|t| t.kind.is_allowed(pos, 17)).count();
            assert!(count >= 3, "{:?} has too few youth traits", pos);
        }
    }
}
