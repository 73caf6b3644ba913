use crate::models::{ClubId, LeagueId, PlayerId, Position};
use thiserror::Error;

/// Malformed input handed to the core. Not recoverable by the core itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Squad of {team} has no available players")]
    EmptySquad { team: String },

    #[error("Squad of {team} has no {group} on the roster")]
    MissingPosition { team: String, group: Position },

    #[error("Invalid league size: need at least 2 clubs, found {found}")]
    InvalidLeagueSize { found: usize },

    #[error("Unknown club: {0}")]
    UnknownClub(ClubId),

    #[error("Fixtures for league {league} season {season} already generated")]
    FixturesAlreadyGenerated { league: LeagueId, season: u16 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Misuse of the two-phase match API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("A decision is pending; resolve it before advancing")]
    DecisionPending,

    #[error("No decision is pending")]
    NoDecisionPending,

    #[error("Invalid decision option {index}: {available} options available")]
    InvalidOption { index: usize, available: usize },

    #[error("Match already finished")]
    AlreadyFinished,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("Offer not found: index {0}")]
    OfferNotFound(usize),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::InvalidConfig(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
