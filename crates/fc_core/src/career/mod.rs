//! Career engine: the weekly tick, transfer offers and season rollover.

pub mod offers;
pub mod season;
pub mod session;
pub mod summary;

pub use offers::{merge_offers, scout_offers};
pub use season::{close_season, retirement_chance, SeasonReport};
pub use session::{CareerSession, CareerSnapshot};
pub use summary::{MatchReport, WeeklySummary};
