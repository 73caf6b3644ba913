//! Procedural population: players, clubs and the leagues that hold them.
//!
//! Generation happens at creation time (and for academy top-ups at season
//! rollover), never per tick.

pub mod club_generator;
pub mod player_generator;
pub mod world_generator;

pub use club_generator::{generate_club, starter_contract, SQUAD_TEMPLATE};
pub use player_generator::{generate_player, generate_youth, sample_age, sample_position, PlayerSpec};
pub use world_generator::generate_world;
