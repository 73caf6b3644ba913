//! Club desirability scoring and contract offers.

use super::valuation::{market_value, weekly_wage};
use crate::config::EconomyConfig;
use crate::models::{ClubId, Contract, Player, Position, Team, TransferPolicy};
use serde::{Deserialize, Serialize};

/// Squad depth a club aims for per position group (GK, DEF, MID, FWD).
pub const IDEAL_SQUAD_DEPTH: [(Position, usize); 4] =
    [(Position::GK, 3), (Position::DEF, 8), (Position::MID, 8), (Position::FWD, 6)];

const BASE_SCORE: f32 = 50.0;
const DEPTH_NEED_MIN: f32 = -20.0;
const DEPTH_NEED_MAX: f32 = 40.0;
const DEPTH_POINTS_PER_SLOT: f32 = 10.0;
const SURPLUS_POINTS_PER_SLOT: f32 = 5.0;
const SKILL_POINTS_PER_RATING: f32 = 2.0;
const BUDGET_GATE_PENALTY: f32 = 100.0;
const STANDARD_YEARS: u8 = 3;

const PREMIUM_THRESHOLD: f32 = 80.0;
const LOWBALL_THRESHOLD: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClubEvaluation {
    pub club_id: ClubId,
    pub score: f32,
}

/// An offer tabled by a club, before agent negotiation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferOffer {
    pub club_id: ClubId,
    pub club_name: String,
    pub tier: u8,
    pub desirability: f32,
    pub contract: Contract,
}

fn ideal_depth(group: Position) -> usize {
    IDEAL_SQUAD_DEPTH
        .iter()
        .find(|(p, _)| *p == group)
        .map(|(_, n)| *n)
        .unwrap_or(0)
}

fn depth_need(club: &Team, group: Position) -> f32 {
    let have = club.players_in(group).count();
    let ideal = ideal_depth(group);
    if have == 0 {
        return DEPTH_NEED_MAX;
    }
    let score = if have <= ideal {
        (ideal - have) as f32 * DEPTH_POINTS_PER_SLOT
    } else {
        -((have - ideal) as f32) * SURPLUS_POINTS_PER_SLOT
    };
    score.clamp(DEPTH_NEED_MIN, DEPTH_NEED_MAX)
}

fn policy_bonus(policy: TransferPolicy, player: &Player, club: &Team, value: f64) -> f32 {
    let rating = player.overall_rating();
    match policy {
        TransferPolicy::Galactico => {
            let mut bonus = 0.0;
            if rating >= 80.0 {
                bonus += 15.0;
            } else if rating < 70.0 {
                bonus -= 10.0;
            }
            if player.reputation >= 60.0 {
                bonus += 5.0;
            }
            bonus
        }
        TransferPolicy::YouthDevelopment => {
            let mut bonus = 0.0;
            if player.age <= 21 {
                bonus += 15.0;
            } else if player.age >= 30 {
                bonus -= 10.0;
            }
            if player.potential() - rating >= 10.0 {
                bonus += 10.0;
            }
            bonus
        }
        TransferPolicy::Moneyball => {
            let mut bonus = 0.0;
            if player.form() >= 65.0 {
                bonus += 10.0;
            }
            if value < club.budget * 0.05 {
                bonus += 5.0;
            }
            bonus
        }
        TransferPolicy::RelegationBattler => {
            let mut bonus = 0.0;
            if player.age >= 28 {
                bonus += 10.0;
            }
            if rating >= club.squad_average() {
                bonus += 5.0;
            }
            bonus
        }
        TransferPolicy::Balanced => {
            if rating >= club.squad_average() {
                5.0
            } else {
                0.0
            }
        }
    }
}

/// How much `club` wants `player`, in `[0, 100]`.
///
/// A club whose annual budget cannot cover the player's estimated wage bill
/// is gated to 0.
pub fn evaluate_player_for_club(player: &Player, club: &Team, cfg: &EconomyConfig) -> f32 {
    let value = market_value(player, cfg);
    let mut score = BASE_SCORE;

    score += depth_need(club, player.position);

    if let Some(incumbent) = club.incumbent_starter(player.position) {
        if incumbent.id != player.id {
            score += (player.overall_rating() - incumbent.overall_rating()) * SKILL_POINTS_PER_RATING;
        }
    }

    score += policy_bonus(club.transfer_policy, player, club, value);
    let score = score.clamp(0.0, 100.0);

    // gate applies after clamping so bonuses cannot lift a broke club above 0
    let estimated_annual_wage = weekly_wage(value, STANDARD_YEARS, cfg) * 52.0;
    if club.budget < estimated_annual_wage {
        return (score - BUDGET_GATE_PENALTY).max(0.0);
    }
    score
}

/// Scores against every club, dropping the player's own club and any club scoring 0.
/// Sorted by score (desc), ties keep input order.
pub fn evaluate_player_for_clubs<'a>(
    player: &Player,
    clubs: impl IntoIterator<Item = &'a Team>,
    cfg: &EconomyConfig,
) -> Vec<ClubEvaluation> {
    let own = player.club_id();
    let mut evaluations: Vec<ClubEvaluation> = clubs
        .into_iter()
        .filter(|club| Some(club.id) != own)
        .map(|club| ClubEvaluation { club_id: club.id, score: evaluate_player_for_club(player, club, cfg) })
        .filter(|e| e.score > 0.0)
        .collect();
    evaluations.sort_by(|a, b| b.score.total_cmp(&a.score));
    evaluations
}

/// Terms `club` tables for `player` at the given desirability.
pub fn build_offer(
    player: &Player,
    club: &Team,
    tier: u8,
    desirability: f32,
    cfg: &EconomyConfig,
) -> TransferOffer {
    let value = market_value(player, cfg);
    let (years, wage_factor, bonus_factor) = if desirability > PREMIUM_THRESHOLD {
        (4, 1.2, 1.5)
    } else if desirability < LOWBALL_THRESHOLD {
        (2, 0.8, 1.0)
    } else {
        (STANDARD_YEARS, 1.0, 1.0)
    };

    let wage = weekly_wage(value, years, cfg) * wage_factor;
    let signing_bonus = value * cfg.signing_bonus_ratio * bonus_factor;
    let goal_bonus = if player.position.is_attacking() { wage * 0.5 } else { 0.0 };
    let clean_sheet_bonus = if player.position.is_defensive() { wage * 0.3 } else { 0.0 };

    TransferOffer {
        club_id: club.id,
        club_name: club.name.clone(),
        tier,
        desirability,
        contract: Contract {
            club_id: club.id,
            weekly_wage: wage,
            years_remaining: years,
            release_clause: value * cfg.release_clause_multiplier,
            signing_bonus,
            goal_bonus,
            clean_sheet_bonus,
            appearance_bonus: wage * 0.1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Region;
    use crate::models::player::test_player;
    use crate::models::{LeagueId, Tactics};

    fn club(id: u32, budget: f64, policy: TransferPolicy, roster: Vec<Player>) -> Team {
        Team {
            id: ClubId(id),
            name: format!("Club {}", id),
            region: Region::Northland,
            tactics: Tactics::default(),
            players: roster,
            budget,
            reputation: 50.0,
            league_id: LeagueId(1),
            transfer_policy: policy,
            stats: Default::default(),
        }
    }

    fn full_roster(rating: f32) -> Vec<Player> {
        let mut id = 100;
        let mut roster = Vec::new();
        for (group, n) in IDEAL_SQUAD_DEPTH {
            for _ in 0..n {
                roster.push(test_player(id, group, rating));
                id += 1;
            }
        }
        roster
    }

    #[test]
    fn test_zero_budget_club_never_scores() {
        let cfg = EconomyConfig::default();
        for rating in [30.0, 60.0, 90.0] {
            let player = test_player(1, Position::FWD, rating);
            for policy in [
                TransferPolicy::Balanced,
                TransferPolicy::Galactico,
                TransferPolicy::YouthDevelopment,
                TransferPolicy::Moneyball,
                TransferPolicy::RelegationBattler,
            ] {
                let broke = club(1, 0.0, policy, Vec::new());
                assert_eq!(evaluate_player_for_club(&player, &broke, &cfg), 0.0);
                assert!(evaluate_player_for_clubs(&player, [&broke], &cfg).is_empty());
            }
        }
    }

    #[test]
    fn test_empty_position_scores_higher_than_full_squad() {
        let cfg = EconomyConfig::default();
        let player = test_player(1, Position::FWD, 60.0);
        let needy = club(1, 10_000_000.0, TransferPolicy::Balanced, Vec::new());
        let stacked = club(2, 10_000_000.0, TransferPolicy::Balanced, full_roster(60.0));
        assert!(
            evaluate_player_for_club(&player, &needy, &cfg)
                > evaluate_player_for_club(&player, &stacked, &cfg)
        );
    }

    #[test]
    fn test_skill_delta_against_incumbent() {
        let cfg = EconomyConfig::default();
        let squad = club(1, 10_000_000.0, TransferPolicy::Balanced, full_roster(60.0));
        let better = test_player(1, Position::MID, 65.0);
        let worse = test_player(2, Position::MID, 55.0);
        let diff = evaluate_player_for_club(&better, &squad, &cfg)
            - evaluate_player_for_club(&worse, &squad, &cfg);
        // 10 rating points apart: 20 from skill plus the balanced-policy bonus
        assert!((diff - 25.0).abs() < 1e-3, "diff = {}", diff);
    }

    #[test]
    fn test_offer_tiers() {
        let cfg = EconomyConfig::default();
        let player = test_player(1, Position::FWD, 70.0);
        let c = club(1, 10_000_000.0, TransferPolicy::Balanced, Vec::new());
        let normal = build_offer(&player, &c, 2, 60.0, &cfg);
        let premium = build_offer(&player, &c, 2, 90.0, &cfg);
        let lowball = build_offer(&player, &c, 2, 20.0, &cfg);

        assert_eq!(premium.contract.years_remaining, 4);
        assert_eq!(lowball.contract.years_remaining, 2);
        assert!(premium.contract.weekly_wage > normal.contract.weekly_wage);
        assert!(lowball.contract.weekly_wage < normal.contract.weekly_wage);
        assert!((premium.contract.signing_bonus / normal.contract.signing_bonus - 1.5).abs() < 1e-6);

        let value = market_value(&player, &cfg);
        assert!((normal.contract.release_clause - value * 2.5).abs() < 1e-6);
        assert!(normal.contract.goal_bonus > 0.0);
        assert_eq!(normal.contract.clean_sheet_bonus, 0.0);
    }

    #[test]
    fn test_defender_gets_clean_sheet_bonus() {
        let cfg = EconomyConfig::default();
        let player = test_player(1, Position::DEF, 70.0);
        let c = club(1, 10_000_000.0, TransferPolicy::Balanced, Vec::new());
        let offer = build_offer(&player, &c, 1, 60.0, &cfg);
        assert!(offer.contract.clean_sheet_bonus > 0.0);
        assert_eq!(offer.contract.goal_bonus, 0.0);
    }

    #[test]
    fn test_own_club_excluded_and_sorted() {
        let cfg = EconomyConfig::default();
        let mut player = test_player(1, Position::GK, 70.0);
        let own = club(1, 10_000_000.0, TransferPolicy::Balanced, Vec::new());
        player.contract = Some(build_offer(&player, &own, 1, 60.0, &cfg).contract);
        let a = club(2, 10_000_000.0, TransferPolicy::Balanced, full_roster(75.0));
        let b = club(3, 10_000_000.0, TransferPolicy::Balanced, Vec::new());

        let evals = evaluate_player_for_clubs(&player, [&own, &a, &b], &cfg);
        assert!(evals.iter().all(|e| e.club_id != ClubId(1)));
        assert_eq!(evals.first().map(|e| e.club_id), Some(ClubId(3)));
    }
}
