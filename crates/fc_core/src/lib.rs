//! # fc_core - Football Career Simulation Core
//!
//! Simulates the career of one human-controlled footballer inside a
//! generated world of leagues, clubs and AI players.
//!
//! ## Features
//! - Deterministic simulation: one seeded RNG drives everything
//! - Minute-by-minute match engine with human decision points
//! - Weekly career tick: finances, growth, transfers, season rollover
//! - Pluggable, localized match commentary
//!
//! The core performs no I/O. Hosts persist [`career::CareerSnapshot`] and
//! the [`models::GameDate`] cursor themselves.

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod career;
pub mod config;
pub mod data;
pub mod economy;
pub mod engine;
pub mod error;
pub mod generator;
pub mod growth;
pub mod league;
pub mod math;
pub mod models;
pub mod story;

pub use career::{CareerSession, CareerSnapshot, MatchReport, SeasonReport, WeeklySummary};
pub use config::SimConfig;
pub use engine::{
    simulate_match, AutoDecider, Commentary, DecisionContext, DecisionMaker, FluentCommentary,
    MatchEngine, MatchStep, PlainCommentary,
};
pub use error::{ConfigError, CoreError, MatchError, Result};
pub use generator::generate_world;
pub use models::{GameDate, MatchResult, Player, PlayerId, Team, World};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
