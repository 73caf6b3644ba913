//! Matchday squad selection.
//!
//! Greedy: one goalkeeper, then the formation's defenders, midfielders and
//! forwards by rating, backfilled from whoever is left. Up to six substitutes,
//! a backup goalkeeper first. Ties keep roster order.

use crate::error::ConfigError;
use crate::models::{Formation, Player, PlayerId, Position, Team};

pub const STARTERS: usize = 11;
pub const MAX_SUBSTITUTES: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SquadSelection {
    pub starters: Vec<PlayerId>,
    pub substitutes: Vec<PlayerId>,
}

impl SquadSelection {
    pub fn contains(&self, player: PlayerId) -> bool {
        self.is_starter(player) || self.is_substitute(player)
    }

    pub fn is_starter(&self, player: PlayerId) -> bool {
        self.starters.contains(&player)
    }

    pub fn is_substitute(&self, player: PlayerId) -> bool {
        self.substitutes.contains(&player)
    }
}

fn take_best(pool: &mut Vec<&Player>, group: Option<Position>, count: usize, into: &mut Vec<PlayerId>) {
    let mut taken = 0;
    pool.retain(|p| {
        if taken < count && group.map_or(true, |g| p.position == g) {
            into.push(p.id);
            taken += 1;
            false
        } else {
            true
        }
    });
}

/// Picks the matchday squad from available (active, uninjured) players.
///
/// Fails when nobody is available or when the roster has no goalkeeper at
/// all. An injured keeper corps falls back to an outfield player in goal.
pub fn select_squad(team: &Team, formation: Formation) -> Result<SquadSelection, ConfigError> {
    let mut pool: Vec<&Player> = team.players.iter().filter(|p| p.is_available()).collect();
    if pool.is_empty() {
        return Err(ConfigError::EmptySquad { team: team.name.clone() });
    }
    if team.players_in(Position::GK).next().is_none() {
        return Err(ConfigError::MissingPosition { team: team.name.clone(), group: Position::GK });
    }
    // stable: equal ratings keep roster order
    pool.sort_by(|a, b| b.overall_rating().total_cmp(&a.overall_rating()));

    let mut selection = SquadSelection::default();
    let (defenders, midfielders, forwards) = formation.get_positions();

    take_best(&mut pool, Some(Position::GK), 1, &mut selection.starters);
    if selection.starters.is_empty() {
        log::warn!("{} has no fit goalkeeper, an outfield player goes in goal", team.name);
        take_best(&mut pool, None, 1, &mut selection.starters);
    }
    take_best(&mut pool, Some(Position::DEF), defenders, &mut selection.starters);
    take_best(&mut pool, Some(Position::MID), midfielders, &mut selection.starters);
    take_best(&mut pool, Some(Position::FWD), forwards, &mut selection.starters);
    let shortfall = STARTERS.saturating_sub(selection.starters.len());
    take_best(&mut pool, None, shortfall, &mut selection.starters);

    take_best(&mut pool, Some(Position::GK), 1, &mut selection.substitutes);
    let remaining = MAX_SUBSTITUTES - selection.substitutes.len();
    take_best(&mut pool, None, remaining, &mut selection.substitutes);

    Ok(selection)
}
