//! End-of-season movement between adjacent tiers of the same region.

use super::standings::standings;
use crate::models::{ClubId, LeagueId, World};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionMove {
    pub club_id: ClubId,
    pub from: LeagueId,
    pub to: LeagueId,
}

/// Swaps the bottom `places` of each league with the top `places` of the league
/// one tier below in the same region. Moves are computed from the final tables
/// before any is applied.
pub fn apply_promotion_relegation(world: &mut World, places: usize) -> Vec<PromotionMove> {
    let mut moves = Vec::new();

    for upper in &world.leagues {
        let Some(lower) = world
            .leagues
            .iter()
            .find(|l| l.region == upper.region && l.tier == upper.tier + 1)
        else {
            continue;
        };
        let swaps = places.min(upper.team_ids.len() / 2).min(lower.team_ids.len() / 2);
        if swaps == 0 {
            continue;
        }
        let upper_table = standings(upper, &world.clubs);
        let lower_table = standings(lower, &world.clubs);

        for row in upper_table.iter().rev().take(swaps) {
            moves.push(PromotionMove { club_id: row.club_id, from: upper.id, to: lower.id });
        }
        for row in lower_table.iter().take(swaps) {
            moves.push(PromotionMove { club_id: row.club_id, from: lower.id, to: upper.id });
        }
    }

    for mv in &moves {
        if let Some(from) = world.league_mut(mv.from) {
            from.team_ids.retain(|id| *id != mv.club_id);
        }
        if let Some(to) = world.league_mut(mv.to) {
            to.team_ids.push(mv.club_id);
        }
        if let Some(club) = world.club_mut(mv.club_id) {
            club.league_id = mv.to;
        }
        log::info!("{} moves from {} to {}", mv.club_id, mv.from, mv.to);
    }
    moves
}
