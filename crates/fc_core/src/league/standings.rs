//! Standings: points desc, goal difference desc, goals for desc.

use crate::error::ConfigError;
use crate::models::{ClubId, League, LeagueStats, MatchResult, Team};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct StandingRow {
    /// 1-based table position.
    pub position: usize,
    pub club_id: ClubId,
    pub name: String,
    pub stats: LeagueStats,
}

fn compare_rows(a: &LeagueStats, b: &LeagueStats) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// Applies one result to both clubs. Either both records change or, when a
/// club is unknown, neither does.
pub fn apply_result(clubs: &mut [Team], result: &MatchResult) -> Result<(), ConfigError> {
    let home = clubs
        .iter()
        .position(|c| c.id == result.home_id())
        .ok_or(ConfigError::UnknownClub(result.home_id()))?;
    let away = clubs
        .iter()
        .position(|c| c.id == result.away_id())
        .ok_or(ConfigError::UnknownClub(result.away_id()))?;

    let (home_goals, away_goals) = result.score();
    clubs[home].stats.record(home_goals, away_goals);
    clubs[away].stats.record(away_goals, home_goals);
    Ok(())
}

/// Current table of `league`. Ties past goals-for keep registration order.
pub fn standings(league: &League, clubs: &[Team]) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = league
        .team_ids
        .iter()
        .filter_map(|id| clubs.iter().find(|c| c.id == *id))
        .map(|club| StandingRow {
            position: 0,
            club_id: club.id,
            name: club.name.clone(),
            stats: club.stats.clone(),
        })
        .collect();
    rows.sort_by(|a, b| compare_rows(&a.stats, &b.stats));
    for (i, row) in rows.iter_mut().enumerate() {
        row.position = i + 1;
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Region;
    use crate::models::match_result::MatchResultParts;
    use crate::models::{LeagueId, Tactics, TransferPolicy};
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn club(id: u32) -> Team {
        Team {
            id: ClubId(id),
            name: format!("Club {}", id),
            region: Region::Northland,
            tactics: Tactics::default(),
            players: Vec::new(),
            budget: 0.0,
            reputation: 50.0,
            league_id: LeagueId(1),
            transfer_policy: TransferPolicy::Balanced,
            stats: LeagueStats::default(),
        }
    }

    fn result(home: u32, away: u32, hg: u8, ag: u8) -> MatchResult {
        MatchResult::from_parts(MatchResultParts {
            home_id: ClubId(home),
            away_id: ClubId(away),
            home_goals: hg,
            away_goals: ag,
            home_possession: 50,
            minutes_played: 90,
            events: Vec::new(),
            ratings: BTreeMap::new(),
            participants: BTreeMap::new(),
            injuries: BTreeMap::new(),
            decisions_taken: 0,
        })
    }

    fn league(n: u32) -> League {
        let mut l = League::new(LeagueId(1), "L", Region::Northland, 1);
        l.team_ids = (1..=n).map(ClubId).collect();
        l
    }

    #[test]
    fn test_unknown_club_updates_nothing() {
        let mut clubs = vec![club(1), club(2)];
        let err = apply_result(&mut clubs, &result(1, 9, 3, 0)).unwrap_err();
        assert_eq!(err, ConfigError::UnknownClub(ClubId(9)));
        assert_eq!(clubs[0].stats, LeagueStats::default());
    }

    #[test]
    fn test_ranking_tiebreakers() {
        let mut clubs = vec![club(1), club(2), club(3), club(4)];
        // 1 and 2 both win once; 2 by more goals. 3 draws with 4.
        apply_result(&mut clubs, &result(1, 3, 1, 0)).unwrap();
        apply_result(&mut clubs, &result(2, 4, 3, 0)).unwrap();
        apply_result(&mut clubs, &result(3, 4, 2, 2)).unwrap();

        let table = standings(&league(4), &clubs);
        let order: Vec<u32> = table.iter().map(|r| r.club_id.0).collect();
        assert_eq!(order, vec![2, 1, 3, 4]);
        assert_eq!(table[0].position, 1);
        assert_eq!(table[0].stats.points, 3);
    }

    #[test]
    fn test_full_tie_keeps_registration_order() {
        let clubs = vec![club(1), club(2), club(3)];
        let order: Vec<u32> = standings(&league(3), &clubs).iter().map(|r| r.club_id.0).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    proptest! {
        #[test]
        fn prop_points_and_played_identities(
            games in proptest::collection::vec((0u32..4, 0u32..4, 0u8..6, 0u8..6), 1..60)
        ) {
            let mut clubs = vec![club(0), club(1), club(2), club(3)];
            for (h, a, hg, ag) in games {
                if h == a {
                    continue;
                }
                apply_result(&mut clubs, &result(h, a, hg, ag)).unwrap();
                for c in &clubs {
                    prop_assert_eq!(c.stats.points, 3 * c.stats.won + c.stats.drawn);
                    prop_assert_eq!(c.stats.played, c.stats.won + c.stats.drawn + c.stats.lost);
                    prop_assert!(c.stats.recent_form.len() <= 5);
                }
            }
        }
    }
}
