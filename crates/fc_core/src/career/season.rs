//! Season rollover: tables are closed, clubs move between tiers, everyone
//! ages a year, contracts run down, veterans retire and academies refill
//! the squads.

use crate::config::{CareerConfig, SimConfig};
use crate::economy::market_value;
use crate::generator::{generate_youth, starter_contract, SQUAD_TEMPLATE};
use crate::league::{apply_promotion_relegation, standings, PromotionMove};
use crate::math::bernoulli;
use crate::models::{ClubId, LeagueId, PlayerId, Position, Team, World};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeasonReport {
    pub season: u16,
    pub champions: Vec<(LeagueId, ClubId)>,
    pub promotions: Vec<PromotionMove>,
    pub renewed: usize,
    /// Out of contract and released to free agency.
    pub released: Vec<PlayerId>,
    pub retired: Vec<PlayerId>,
    pub academy_intake: Vec<PlayerId>,
}

/// Closes `season`. `human` never retires voluntarily and is never
/// auto-renewed; their contract simply runs out.
pub fn close_season<R: Rng + ?Sized>(
    rng: &mut R,
    world: &mut World,
    human: PlayerId,
    cfg: &SimConfig,
    season: u16,
) -> SeasonReport {
    let mut report = SeasonReport {
        season,
        ..Default::default()
    };

    for league in &world.leagues {
        if let Some(top) = standings(league, &world.clubs).first() {
            log::info!("{} champions of {} {}", top.name, league.name, season);
            report.champions.push((league.id, top.club_id));
        }
    }
    report.promotions = apply_promotion_relegation(world, cfg.career.promotion_places);

    age_and_renew(rng, world, human, cfg, &mut report);
    retire_players(rng, world, human, &cfg.career, &mut report);

    for club in &mut world.clubs {
        club.stats = Default::default();
    }
    for player in world.active_players_mut() {
        player.reset_season();
    }

    top_up_squads(rng, world, cfg, &mut report);
    log::info!(
        "season {} closed: {} renewed, {} released, {} retired, {} academy signings",
        season,
        report.renewed,
        report.released.len(),
        report.retired.len(),
        report.academy_intake.len()
    );
    report
}

fn age_and_renew<R: Rng + ?Sized>(
    rng: &mut R,
    world: &mut World,
    human: PlayerId,
    cfg: &SimConfig,
    report: &mut SeasonReport,
) {
    for player in world.free_agents.iter_mut() {
        player.age = player.age.saturating_add(1);
        player.market_value = market_value(player, &cfg.economy);
    }

    let mut released = Vec::new();
    for club in world.clubs.iter_mut() {
        let club_id = club.id;
        let mut kept = Vec::with_capacity(club.players.len());
        for mut player in std::mem::take(&mut club.players) {
            player.age = player.age.saturating_add(1);
            player.market_value = market_value(&player, &cfg.economy);
            match player.contract.and_then(|c| c.aged_one_season()) {
                Some(next) => {
                    player.contract = Some(next);
                    kept.push(player);
                }
                None if player.id != human && player.age < cfg.career.renewal_age_limit => {
                    let years = rng.gen_range(1..=3);
                    player.contract = Some(starter_contract(&player, club_id, years, cfg));
                    report.renewed += 1;
                    kept.push(player);
                }
                None => {
                    log::debug!("{} released by {}", player.name, club.name);
                    player.contract = None;
                    report.released.push(player.id);
                    released.push(player);
                }
            }
        }
        club.players = kept;
    }
    world.free_agents.extend(released);
}

/// Chance of retiring this summer for a player of `age`.
pub fn retirement_chance(age: u8, cfg: &CareerConfig) -> f32 {
    if age >= cfg.retirement_forced_age {
        1.0
    } else if age >= cfg.retirement_min_age {
        (age - cfg.retirement_min_age + 1) as f32 * cfg.retirement_chance_per_year
    } else {
        0.0
    }
}

fn retire_players<R: Rng + ?Sized>(
    rng: &mut R,
    world: &mut World,
    human: PlayerId,
    cfg: &CareerConfig,
    report: &mut SeasonReport,
) {
    let mut retiring = Vec::new();
    for player in world
        .clubs
        .iter()
        .flat_map(|c| c.players.iter())
        .chain(world.free_agents.iter())
    {
        let retires = if player.id == human {
            player.age >= cfg.retirement_forced_age
        } else {
            bernoulli(rng, retirement_chance(player.age, cfg))
        };
        if retires {
            retiring.push(player.id);
        }
    }

    for id in retiring {
        if let Some(mut player) = world.take_player(id) {
            log::info!("{} retires at {}", player.name, player.age);
            player.retire();
            world.retired.push(player);
            report.retired.push(id);
        }
    }
}

/// Group furthest below its template count. Ties go to the earlier group.
fn most_needed(club: &Team) -> Position {
    SQUAD_TEMPLATE
        .iter()
        .map(|(group, target)| (*group, *target as i64 - club.players_in(*group).count() as i64))
        .fold(None, |best: Option<(Position, i64)>, (group, deficit)| match best {
            Some((_, d)) if d >= deficit => best,
            _ => Some((group, deficit)),
        })
        .map_or(Position::MID, |(group, _)| group)
}

fn top_up_squads<R: Rng + ?Sized>(rng: &mut R, world: &mut World, cfg: &SimConfig, report: &mut SeasonReport) {
    for idx in 0..world.clubs.len() {
        let (club_id, region, league_id) = {
            let club = &world.clubs[idx];
            (club.id, club.region, club.league_id)
        };
        let tier = world.league(league_id).map_or(4, |l| l.tier);
        while world.clubs[idx].players.len() < cfg.career.squad_size {
            let position = most_needed(&world.clubs[idx]);
            let id = world.allocate_player_id();
            let mut youth = generate_youth(rng, id, region, tier, Some(position), &cfg.world, &cfg.economy);
            youth.contract = Some(starter_contract(&youth, club_id, 3, cfg));
            world.clubs[idx].players.push(youth);
            report.academy_intake.push(id);
        }
    }
}
