//! Valuation, club desirability, contract offers and weekly finances.

pub mod finance;
pub mod negotiation;
pub mod transfer;
pub mod valuation;

pub use finance::{living_cost, weekly_statement, MatchPerformance, WeeklyStatement};
pub use negotiation::{apply_negotiation, negotiate, negotiation_variance};
pub use transfer::{
    build_offer, evaluate_player_for_club, evaluate_player_for_clubs, ClubEvaluation,
    TransferOffer, IDEAL_SQUAD_DEPTH,
};
pub use valuation::{market_value, weekly_wage};
