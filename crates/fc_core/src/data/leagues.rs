//! League templates the world generator instantiates.

use super::names::Region;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeagueTemplate {
    pub name: &'static str,
    pub region: Region,
    /// 1 = strongest.
    pub tier: u8,
    pub clubs: usize,
    /// Annual budget of an average club in this league.
    pub base_budget: f64,
    pub reputation: f32,
}

pub const LEAGUE_TEMPLATES: &[LeagueTemplate] = &[
    LeagueTemplate {
        name: "Northland Premier League",
        region: Region::Northland,
        tier: 1,
        clubs: 16,
        base_budget: 6_000_000.0,
        reputation: 85.0,
    },
    LeagueTemplate {
        name: "Northland Championship",
        region: Region::Northland,
        tier: 2,
        clubs: 16,
        base_budget: 2_200_000.0,
        reputation: 65.0,
    },
    LeagueTemplate {
        name: "Northland League One",
        region: Region::Northland,
        tier: 3,
        clubs: 16,
        base_budget: 800_000.0,
        reputation: 45.0,
    },
    LeagueTemplate {
        name: "Northland League Two",
        region: Region::Northland,
        tier: 4,
        clubs: 16,
        base_budget: 300_000.0,
        reputation: 30.0,
    },
    LeagueTemplate {
        name: "Southland Primera",
        region: Region::Southland,
        tier: 1,
        clubs: 16,
        base_budget: 5_500_000.0,
        reputation: 82.0,
    },
    LeagueTemplate {
        name: "Southland Segunda",
        region: Region::Southland,
        tier: 2,
        clubs: 16,
        base_budget: 2_000_000.0,
        reputation: 62.0,
    },
    LeagueTemplate {
        name: "Southland Tercera",
        region: Region::Southland,
        tier: 3,
        clubs: 16,
        base_budget: 700_000.0,
        reputation: 42.0,
    },
    LeagueTemplate {
        name: "Southland Regional",
        region: Region::Southland,
        tier: 4,
        clubs: 16,
        base_budget: 250_000.0,
        reputation: 28.0,
    },
];

pub fn templates_for(region: Region) -> impl Iterator<Item = &'static LeagueTemplate> {
    LEAGUE_TEMPLATES.iter().filter(move |t| t.region == region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_region_has_contiguous_tiers() {
        for region in Region::ALL {
            let mut tiers: Vec<u8> = templates_for(region).map(|t| t.tier).collect();
            tiers.sort_unstable();
            assert_eq!(tiers, vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_double_round_robin_fits_in_a_season() {
        // 36 playable weeks per season
        for t in LEAGUE_TEMPLATES {
            assert!((t.clubs - 1) * 2 <= 36, "{} too large", t.name);
        }
    }
}
