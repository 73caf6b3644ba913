//! Decision points for the human-controlled player.
//!
//! Each position group has its own three options. Success chances shift with
//! the player's edge over the opposing sector.

use crate::models::{PlayerId, Position};
use serde::{Deserialize, Serialize};

/// Success chance gained per rating point of edge.
const EDGE_WEIGHT: f32 = 0.004;
const MIN_SUCCESS: f32 = 0.05;
const MAX_SUCCESS: f32 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    // forwards
    Shoot,
    Chip,
    PassToTeammate,
    // midfielders
    ThroughBall,
    LongShot,
    HoldPossession,
    // defenders
    SlidingTackle,
    Block,
    Jockey,
    // goalkeepers
    Dive,
    Parry,
    RushOut,
}

impl DecisionKind {
    /// The human takes the shot personally.
    pub fn is_shot(&self) -> bool {
        matches!(self, DecisionKind::Shoot | DecisionKind::Chip | DecisionKind::LongShot)
    }

    /// A teammate finishes, the human provides the assist.
    pub fn is_creative(&self) -> bool {
        matches!(self, DecisionKind::PassToTeammate | DecisionKind::ThroughBall)
    }

    /// (text, outcome description, base success, reward, risk)
    fn template(&self) -> (&'static str, &'static str, f32, f32, f32) {
        match self {
            DecisionKind::Shoot => ("Shoot", "Strike it first time at goal.", 0.35, 1.0, 0.3),
            DecisionKind::Chip => ("Chip the keeper", "Audacious, spectacular if it comes off.", 0.20, 1.5, 0.5),
            DecisionKind::PassToTeammate => ("Square it", "Lay it off for a teammate to finish.", 0.45, 0.6, 0.15),
            DecisionKind::ThroughBall => ("Through ball", "Split the defence for the striker.", 0.35, 0.8, 0.2),
            DecisionKind::LongShot => ("Long shot", "Try your luck from distance.", 0.12, 1.5, 0.3),
            DecisionKind::HoldPossession => ("Hold possession", "Keep the ball and win a set piece.", 0.75, 0.2, 0.1),
            DecisionKind::SlidingTackle => ("Sliding tackle", "Win it cleanly or give away a foul.", 0.55, 0.6, 0.6),
            DecisionKind::Block => ("Block the shot", "Throw your body in the way.", 0.60, 0.5, 0.4),
            DecisionKind::Jockey => ("Jockey", "Stay on your feet and force a poor shot.", 0.70, 0.3, 0.3),
            DecisionKind::Dive => ("Dive", "Commit early to the corner.", 0.55, 0.8, 0.4),
            DecisionKind::Parry => ("Parry", "Push it wide for a corner.", 0.65, 0.5, 0.3),
            DecisionKind::RushOut => ("Rush out", "Close the angle, all or nothing.", 0.45, 1.0, 0.6),
        }
    }

    pub fn options_for(group: Position, defending: bool) -> [DecisionKind; 3] {
        match (group, defending) {
            (Position::GK, _) => [DecisionKind::Dive, DecisionKind::Parry, DecisionKind::RushOut],
            (Position::DEF, _) => [DecisionKind::SlidingTackle, DecisionKind::Block, DecisionKind::Jockey],
            (Position::MID, false) => [DecisionKind::ThroughBall, DecisionKind::LongShot, DecisionKind::HoldPossession],
            (Position::FWD, false) => [DecisionKind::Shoot, DecisionKind::Chip, DecisionKind::PassToTeammate],
            // outfield attackers caught defending track back like defenders
            (Position::MID | Position::FWD, true) => {
                [DecisionKind::SlidingTackle, DecisionKind::Block, DecisionKind::Jockey]
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub kind: DecisionKind,
    pub text: String,
    pub outcome_description: String,
    pub success_chance: f32,
    pub reward_rating: f32,
    pub risk_rating: f32,
}

impl DecisionOption {
    fn new(kind: DecisionKind, edge: f32) -> Self {
        let (text, outcome, base, reward, risk) = kind.template();
        Self {
            kind,
            text: text.to_string(),
            outcome_description: outcome.to_string(),
            success_chance: (base + edge * EDGE_WEIGHT).clamp(MIN_SUCCESS, MAX_SUCCESS),
            reward_rating: reward,
            risk_rating: risk,
        }
    }

    /// Expected rating change of picking this option.
    pub fn expected_value(&self) -> f32 {
        self.success_chance * self.reward_rating - (1.0 - self.success_chance) * self.risk_rating
    }
}

/// Emitted when the engine suspends for a human choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionContext {
    pub minute: u8,
    pub player_id: PlayerId,
    pub group: Position,
    pub defending: bool,
    pub title: String,
    pub description: String,
    pub options: Vec<DecisionOption>,
}

impl DecisionContext {
    /// `edge` is the player's rating minus the opposing sector strength.
    pub fn build(minute: u8, player_id: PlayerId, group: Position, defending: bool, edge: f32) -> Self {
        let (title, description) = match (group, defending) {
            (Position::GK, _) => ("One on one", "A striker is through on goal. How do you react?"),
            (_, true) => ("Danger at the back", "The opposition are bearing down on goal."),
            (Position::FWD, false) => ("Chance in the box", "The ball falls to you near the penalty spot."),
            (_, false) => ("Space in midfield", "You pick up the ball with time to look up."),
        };
        Self {
            minute,
            player_id,
            group,
            defending,
            title: title.to_string(),
            description: description.to_string(),
            options: DecisionKind::options_for(group, defending)
                .into_iter()
                .map(|kind| DecisionOption::new(kind, edge))
                .collect(),
        }
    }

    /// Index of the option with the highest expected value (first on ties).
    pub fn best_option(&self) -> usize {
        let mut best = 0;
        for (i, option) in self.options.iter().enumerate() {
            if option.expected_value() > self.options[best].expected_value() {
                best = i;
            }
        }
        best
    }
}

/// Resolves decision points on behalf of the host.
pub trait DecisionMaker {
    fn decide(&mut self, context: &DecisionContext) -> usize;
}

impl<F> DecisionMaker for F
where
    F: FnMut(&DecisionContext) -> usize,
{
    fn decide(&mut self, context: &DecisionContext) -> usize {
        self(context)
    }
}

/// Always takes the highest expected-value option.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoDecider;

impl DecisionMaker for AutoDecider {
    fn decide(&mut self, context: &DecisionContext) -> usize {
        context.best_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_group_has_distinct_options() {
        let sets: Vec<[DecisionKind; 3]> = [Position::FWD, Position::MID, Position::DEF, Position::GK]
            .into_iter()
            .map(|g| DecisionKind::options_for(g, g.is_defensive()))
            .collect();
        for (i, a) in sets.iter().enumerate() {
            for b in sets.iter().skip(i + 1) {
                assert!(a.iter().all(|k| !b.contains(k)));
            }
        }
    }

    #[test]
    fn test_edge_moves_success_within_bounds() {
        let strong = DecisionContext::build(10, PlayerId(1), Position::FWD, false, 40.0);
        let weak = DecisionContext::build(10, PlayerId(1), Position::FWD, false, -40.0);
        assert_eq!(strong.options.len(), 3);
        for (s, w) in strong.options.iter().zip(&weak.options) {
            assert!(s.success_chance > w.success_chance);
        }
        let extreme = DecisionContext::build(10, PlayerId(1), Position::GK, true, 1000.0);
        assert!(extreme.options.iter().all(|o| o.success_chance <= 0.95));
    }

    #[test]
    fn test_auto_decider_and_closures() {
        let ctx = DecisionContext::build(30, PlayerId(1), Position::MID, false, 0.0);
        let mut auto = AutoDecider;
        let best = auto.decide(&ctx);
        assert!(ctx.options.iter().all(|o| o.expected_value() <= ctx.options[best].expected_value()));

        let mut always_last = |c: &DecisionContext| c.options.len() - 1;
        assert_eq!(always_last.decide(&ctx), 2);
    }
}
