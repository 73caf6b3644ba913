use super::ids::PlayerId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Goal,
    Miss,
    Save,
    Foul,
    YellowCard,
    RedCard,
    Injury,
    Corner,
    VarCheck,
    /// Goal stood after review.
    VarUpheld,
    /// Goal chalked off after review.
    VarOverturned,
    HalfTime,
}

/// One entry of the match log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub minute: u8,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Side the primary actor plays for.
    pub side: Side,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<PlayerId>,
    /// Assist provider for goals, fouled player for fouls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<PlayerId>,
    /// Localized commentary line.
    pub text: String,
}

impl MatchEvent {
    pub fn is_goal(&self) -> bool {
        self.event_type == EventType::Goal
    }
}
