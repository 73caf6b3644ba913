use super::club_generator::generate_club;
use super::player_generator::{generate_player, PlayerSpec};
use crate::config::SimConfig;
use crate::data::{leagues::templates_for, Region, CLUB_SUFFIXES};
use crate::models::{League, LeagueId, World};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// Builds leagues, then clubs, then squads, plus a pool of free agents per region.
pub fn generate_world<R: Rng + ?Sized>(rng: &mut R, cfg: &SimConfig) -> World {
    let mut world = World::new();
    let mut used_names = BTreeSet::new();

    for region in Region::ALL {
        let mut cities: Vec<&str> = region.cities().to_vec();
        cities.shuffle(rng);
        let mut next_city = 0usize;

        let max_tier = cfg.world.tiers_per_region.unwrap_or(u8::MAX);
        for template in templates_for(region).filter(|t| t.tier <= max_tier) {
            let league_id = LeagueId(world.leagues.len() as u32 + 1);
            let mut league = League::new(league_id, template.name, region, template.tier);

            for _ in 0..template.clubs {
                let name = club_name(rng, &cities, &mut next_city, &mut used_names);
                let club = generate_club(rng, &mut world, league_id, template, name, cfg);
                league.team_ids.push(club.id);
                world.clubs.push(club);
            }
            log::debug!("generated {} ({} clubs)", league.name, league.team_ids.len());
            world.leagues.push(league);
        }

        for _ in 0..cfg.world.free_agents_per_region {
            let id = world.allocate_player_id();
            let tier = rng.gen_range(3..=4);
            let player = generate_player(rng, id, PlayerSpec::new(region, tier), &cfg.world, &cfg.economy);
            world.free_agents.push(player);
        }
    }

    log::info!(
        "world generated: {} leagues, {} clubs, {} players",
        world.leagues.len(),
        world.clubs.len(),
        world.player_count()
    );
    world
}

fn club_name<R: Rng + ?Sized>(
    rng: &mut R,
    cities: &[&str],
    next_city: &mut usize,
    used: &mut BTreeSet<String>,
) -> String {
    loop {
        let city = cities.get(*next_city % cities.len().max(1)).copied().unwrap_or("Newtown");
        *next_city += 1;
        let mut suffixes: Vec<&str> = CLUB_SUFFIXES.to_vec();
        suffixes.shuffle(rng);
        for suffix in suffixes {
            let name = format!("{} {}", city, suffix);
            if used.insert(name.clone()) {
                return name;
            }
        }
    }
}
