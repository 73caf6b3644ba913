//! Match commentary.
//!
//! The engine picks which template variant to use (from its own random
//! source) and hands it in through [`LineContext::variant`], so every
//! language implementation produces the same event sequence.

use std::fmt;

mod fluent_commentary;
mod plain;

pub use fluent_commentary::{FluentCommentary, SUPPORTED_LOCALES};
pub use plain::PlainCommentary;

/// Variants per event kind. Implementations index with `variant % len`.
pub const TEMPLATE_VARIANTS: usize = 3;

/// Everything a commentary line may refer to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineContext<'a> {
    pub minute: u8,
    /// Primary actor (scorer, shooter, fouler, injured player...).
    pub player: &'a str,
    /// Assist provider, fouled player or goalkeeper.
    pub other: Option<&'a str>,
    /// Club of the primary actor.
    pub team: &'a str,
    /// (home, away) at the time of the event.
    pub score: (u8, u8),
    pub variant: usize,
}

/// Localization capability injected into the match engine.
pub trait Commentary: fmt::Debug {
    fn render_goal(&self, ctx: &LineContext<'_>) -> String;
    fn render_miss(&self, ctx: &LineContext<'_>) -> String;
    fn render_save(&self, ctx: &LineContext<'_>) -> String;
    fn render_foul(&self, ctx: &LineContext<'_>) -> String;
    fn render_card(&self, ctx: &LineContext<'_>, red: bool) -> String;
    fn render_injury(&self, ctx: &LineContext<'_>) -> String;
    fn render_corner(&self, ctx: &LineContext<'_>) -> String;
    fn render_var_check(&self, ctx: &LineContext<'_>) -> String;
    fn render_var_decision(&self, ctx: &LineContext<'_>, overturned: bool) -> String;
    fn render_half_time(&self, ctx: &LineContext<'_>) -> String;
}
