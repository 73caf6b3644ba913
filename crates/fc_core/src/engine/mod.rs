//! Match simulation: squad selection, the per-minute engine, human decision
//! points and commentary.

pub mod commentary;
pub mod decision;
pub mod lineup;
pub mod match_engine;
pub mod squad;

pub use commentary::{Commentary, FluentCommentary, LineContext, PlainCommentary, TEMPLATE_VARIANTS};
pub use decision::{AutoDecider, DecisionContext, DecisionKind, DecisionMaker, DecisionOption};
pub use match_engine::{record_match, simulate_match, MatchEngine, MatchPhase, MatchStep};
pub use squad::{select_squad, SquadSelection, MAX_SUBSTITUTES, STARTERS};
