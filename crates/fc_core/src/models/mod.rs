pub mod agent;
pub mod contract;
pub mod date;
pub mod events;
pub mod ids;
pub mod league;
pub mod match_result;
pub mod player;
pub mod team;
pub mod world;

pub use agent::Agent;
pub use contract::Contract;
pub use date::GameDate;
pub use events::{EventType, MatchEvent, Side};
pub use ids::{ClubId, LeagueId, PlayerId};
pub use league::{Fixture, League, Matchday};
pub use match_result::MatchResult;
pub use player::{
    CareerTotals, MatchHistoryEntry, Player, PlayerStatus, Position, SeasonStats, RATING_MAX,
    RATING_MIN, STAT_MAX, STAT_MIN,
};
pub use team::{
    FormResult, Formation, LeagueStats, TacticalStyle, Tactics, Team, TransferPolicy,
};
pub use world::{PlayerLocation, World};
