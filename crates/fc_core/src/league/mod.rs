//! League engine: fixture generation, standings and promotion/relegation.
//!
//! Consumes match results, never produces them.

pub mod fixtures;
pub mod promotion;
pub mod standings;

pub use fixtures::{generate_fixtures, schedule_season};
pub use promotion::{apply_promotion_relegation, PromotionMove};
pub use standings::{apply_result, standings, StandingRow};
