//! Double round-robin via the circle method.
//!
//! Odd team counts get a synthetic bye slot; a club drawn against the bye sits
//! the matchday out and the pairing never appears as a fixture.

use crate::error::ConfigError;
use crate::models::{ClubId, Fixture, League, Matchday};

/// Matchdays for a double round robin: every pair meets twice, once at each ground.
pub fn generate_fixtures(teams: &[ClubId]) -> Result<Vec<Matchday>, ConfigError> {
    if teams.len() < 2 {
        return Err(ConfigError::InvalidLeagueSize { found: teams.len() });
    }

    let mut slots: Vec<Option<ClubId>> = teams.iter().copied().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();
    let rounds = n - 1;

    let mut first_half = Vec::with_capacity(rounds);
    for round in 0..rounds {
        let mut fixtures = Vec::with_capacity(n / 2);
        for i in 0..n / 2 {
            let (a, b) = (slots[i], slots[n - 1 - i]);
            let (Some(a), Some(b)) = (a, b) else {
                continue;
            };
            // alternate venues so the fixed slot is not always at home
            let fixture = if round % 2 == 1 {
                Fixture { home: b, away: a }
            } else {
                Fixture { home: a, away: b }
            };
            fixtures.push(fixture);
        }
        first_half.push(fixtures);
        // rotate everything except slot 0
        if let Some(last) = slots.pop() {
            slots.insert(1, last);
        }
    }

    let second_half: Vec<Vec<Fixture>> = first_half
        .iter()
        .map(|day| day.iter().map(|f| Fixture { home: f.away, away: f.home }).collect())
        .collect();

    Ok(first_half
        .into_iter()
        .chain(second_half)
        .enumerate()
        .map(|(i, fixtures)| Matchday { number: i + 1, fixtures })
        .collect())
}

/// Generates the fixture list for `season` once. Regenerating an already
/// scheduled season is rejected.
pub fn schedule_season(league: &mut League, season: u16) -> Result<(), ConfigError> {
    if league.season == Some(season) && !league.fixtures.is_empty() {
        return Err(ConfigError::FixturesAlreadyGenerated { league: league.id, season });
    }
    league.fixtures = generate_fixtures(&league.team_ids)?;
    league.current_matchday = 0;
    league.season = Some(season);
    log::info!(
        "{}: {} matchdays scheduled for season {}",
        league.name,
        league.fixtures.len(),
        season
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Region;
    use crate::models::LeagueId;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn ids(n: u32) -> Vec<ClubId> {
        (1..=n).map(ClubId).collect()
    }

    fn all_fixtures(days: &[Matchday]) -> Vec<Fixture> {
        days.iter().flat_map(|d| d.fixtures.iter().copied()).collect()
    }

    #[test]
    fn test_rejects_tiny_leagues() {
        assert_eq!(generate_fixtures(&[]), Err(ConfigError::InvalidLeagueSize { found: 0 }));
        assert_eq!(generate_fixtures(&ids(1)), Err(ConfigError::InvalidLeagueSize { found: 1 }));
    }

    #[test]
    fn test_three_clubs_with_bye() {
        let teams = ids(3);
        let days = generate_fixtures(&teams).unwrap();
        // padded to 4 slots: 3 rounds per half
        assert_eq!(days.len(), 6);
        let fixtures = all_fixtures(&days);
        assert_eq!(fixtures.len(), 6);
        for f in &fixtures {
            assert_ne!(f.home, f.away);
            assert!(teams.contains(&f.home) && teams.contains(&f.away));
        }
        // each club sits out exactly one matchday per half
        for day in &days {
            assert_eq!(day.fixtures.len(), 1);
        }
    }

    #[test]
    fn test_no_club_plays_twice_on_a_matchday() {
        let days = generate_fixtures(&ids(16)).unwrap();
        assert_eq!(days.len(), 30);
        for day in &days {
            let mut seen = Vec::new();
            for f in &day.fixtures {
                assert!(!seen.contains(&f.home) && !seen.contains(&f.away));
                seen.push(f.home);
                seen.push(f.away);
            }
            assert_eq!(day.fixtures.len(), 8);
        }
    }

    #[test]
    fn test_schedule_once_per_season() {
        let mut league = League::new(LeagueId(1), "L", Region::Northland, 1);
        league.team_ids = ids(4);
        schedule_season(&mut league, 2025).unwrap();
        assert_eq!(league.fixtures.len(), 6);
        assert_eq!(
            schedule_season(&mut league, 2025),
            Err(ConfigError::FixturesAlreadyGenerated { league: LeagueId(1), season: 2025 })
        );
        assert!(schedule_season(&mut league, 2026).is_ok());
    }

    proptest! {
        #[test]
        fn prop_double_round_robin(n in 2u32..22) {
            let teams = ids(n);
            let fixtures = all_fixtures(&generate_fixtures(&teams).unwrap());
            let n = n as usize;
            prop_assert_eq!(fixtures.len(), n * (n - 1));

            let mut pairs: BTreeMap<(ClubId, ClubId), usize> = BTreeMap::new();
            for f in &fixtures {
                prop_assert_ne!(f.home, f.away);
                *pairs.entry((f.home, f.away)).or_default() += 1;
            }
            for a in &teams {
                for b in &teams {
                    if a != b {
                        prop_assert_eq!(pairs.get(&(*a, *b)).copied(), Some(1));
                    }
                }
            }
        }
    }
}
