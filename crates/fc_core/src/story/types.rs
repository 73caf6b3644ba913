//! Narrative event types.

use crate::models::{GameDate, Player};
use serde::{Deserialize, Serialize};

/// Condition under which a narrative event fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Career goals.
    GoalsAtLeast(u32),
    /// Career appearances.
    AppearancesAtLeast(u32),
    RatingAtLeast(f32),
    FormBelow(f32),
    MoraleBelow(f32),
    BalanceBelow(f64),
    Unemployed,
    AgeAtLeast(u8),
    InSeason,
    /// Independent roll each evaluation.
    Chance(f32),
    All(Vec<Trigger>),
    Any(Vec<Trigger>),
    Not(Box<Trigger>),
}

/// State change applied when an event fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    Morale(f32),
    Form(f32),
    Reputation(f32),
    Stamina(f32),
    Cash(f64),
    Potential(f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryEvent {
    pub id: String,
    pub title: String,
    pub text: String,
    pub trigger: Trigger,
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Fires at most once per career.
    #[serde(default)]
    pub once: bool,
}

/// A fired event as reported in the weekly summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryBeat {
    pub id: String,
    pub title: String,
    pub text: String,
}

impl From<&StoryEvent> for StoryBeat {
    fn from(event: &StoryEvent) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            text: event.text.clone(),
        }
    }
}

/// Read-only view of the career that triggers are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct StoryContext<'a> {
    pub player: &'a Player,
    pub balance: f64,
    pub employed: bool,
    pub date: GameDate,
}
