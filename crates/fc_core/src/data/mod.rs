//! Static generation tables: names by region, personality traits, league templates.
//!
//! Pure data. Nothing here holds state.

pub mod leagues;
pub mod names;
pub mod traits;

pub use leagues::{LeagueTemplate, LEAGUE_TEMPLATES};
pub use names::{Region, CLUB_SUFFIXES};
pub use traits::{PlayerTrait, TraitSpec, TRAIT_TABLE};
