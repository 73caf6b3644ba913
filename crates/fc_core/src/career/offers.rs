//! Transfer-window offers for the human player.

use crate::config::SimConfig;
use crate::economy::{build_offer, evaluate_player_for_clubs, TransferOffer};
use crate::math::bernoulli;
use crate::models::{Player, World};
use rand::Rng;

/// Tier reachable without an agent.
const UNREPRESENTED_TIER: u8 = 4;

/// Rolls this week's offers. Clubs outside the agent's network reach and
/// clubs scoring below the offer threshold never table anything.
pub fn scout_offers<R: Rng + ?Sized>(rng: &mut R, world: &World, player: &Player, cfg: &SimConfig) -> Vec<TransferOffer> {
    if !player.is_active() {
        return Vec::new();
    }
    let (best_tier, scouting) = player
        .agent
        .as_ref()
        .map_or((UNREPRESENTED_TIER, 1.0), |a| (a.best_accessible_tier(), a.scouting));
    if !bernoulli(rng, cfg.career.offer_chance * scouting) {
        return Vec::new();
    }

    let tier_of = |club_league| world.league(club_league).map_or(u8::MAX, |l| l.tier);
    let reachable = world.clubs.iter().filter(|c| tier_of(c.league_id) >= best_tier);
    evaluate_player_for_clubs(player, reachable, &cfg.economy)
        .into_iter()
        .filter(|e| e.score >= cfg.economy.offer_threshold)
        .take(cfg.career.max_offers)
        .filter_map(|e| {
            let club = world.club(e.club_id)?;
            Some(build_offer(player, club, tier_of(club.league_id), e.score, &cfg.economy))
        })
        .collect()
}

/// Adds offers from clubs not already bidding, keeping at most `max`.
pub fn merge_offers(pending: &mut Vec<TransferOffer>, fresh: Vec<TransferOffer>, max: usize) -> Vec<TransferOffer> {
    let mut added = Vec::new();
    for offer in fresh {
        if pending.len() >= max {
            break;
        }
        if pending.iter().any(|o| o.club_id == offer.club_id) {
            continue;
        }
        pending.push(offer.clone());
        added.push(offer);
    }
    added
}
