use crate::config::{EconomyConfig, WorldConfig};
use crate::data::{PlayerTrait, Region, TRAIT_TABLE};
use crate::economy::market_value;
use crate::math::{bernoulli, truncated_normal, weighted_index};
use crate::models::{Player, PlayerId, Position, RATING_MAX, RATING_MIN};
use rand::Rng;

/// Categorical position distribution (GK, DEF, MID, FWD).
const POSITION_WEIGHTS: [(Position, f32); 4] =
    [(Position::GK, 0.10), (Position::DEF, 0.35), (Position::MID, 0.35), (Position::FWD, 0.20)];

const YOUTH_AGE_MIN: u8 = 16;
const YOUTH_AGE_MAX: u8 = 19;
const WONDERKID_MAX_AGE: u8 = 21;
const HIGH_POTENTIAL: f32 = 80.0;

/// Inputs for one generated player. `None` fields are sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSpec {
    pub region: Region,
    pub tier: u8,
    pub position: Option<Position>,
    pub age: Option<u8>,
}

impl PlayerSpec {
    pub fn new(region: Region, tier: u8) -> Self {
        Self { region, tier, position: None, age: None }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }
}

pub fn sample_position<R: Rng + ?Sized>(rng: &mut R) -> Position {
    let weights = POSITION_WEIGHTS.map(|(_, w)| w);
    weighted_index(rng, &weights)
        .map(|i| POSITION_WEIGHTS[i].0)
        .unwrap_or(Position::MID)
}

/// Truncated Gaussian around the configured mean.
pub fn sample_age<R: Rng + ?Sized>(rng: &mut R, cfg: &WorldConfig) -> u8 {
    let age = truncated_normal(rng, cfg.age_mean, cfg.age_sigma, cfg.age_min as f32, cfg.age_max as f32);
    (age.round() as u8).clamp(cfg.age_min, cfg.age_max)
}

/// Headroom between current rating and potential.
fn sample_potential_gap<R: Rng + ?Sized>(rng: &mut R, age: u8, tier: u8) -> f32 {
    let gap: f32 = match age {
        0..=21 => rng.gen_range(5.0..20.0),
        22..=25 => rng.gen_range(2.0..10.0),
        26..=29 => rng.gen_range(0.0..4.0),
        _ => rng.gen_range(0.0..1.0),
    };
    // weaker leagues hide more unpolished talent
    gap * (1.0 + (tier.clamp(1, 4) - 1) as f32 * 0.1)
}

fn sample_traits<R: Rng + ?Sized>(
    rng: &mut R,
    position: Position,
    age: u8,
    potential: f32,
    cfg: &WorldConfig,
) -> Vec<PlayerTrait> {
    let high_potential = potential >= HIGH_POTENTIAL;
    let chance = if high_potential { cfg.trait_chance * 1.5 } else { cfg.trait_chance };
    if !bernoulli(rng, chance) {
        return Vec::new();
    }
    let count = if high_potential && bernoulli(rng, 0.3) { 2 } else { 1 };

    let mut traits = Vec::with_capacity(count);
    for _ in 0..count {
        let weights: Vec<f32> = TRAIT_TABLE
            .iter()
            .map(|spec| {
                if traits.contains(&spec.kind) || !spec.kind.is_allowed(position, age) {
                    0.0
                } else {
                    spec.weight as f32
                }
            })
            .collect();
        match weighted_index(rng, &weights) {
            Some(i) => traits.push(TRAIT_TABLE[i].kind),
            None => break,
        }
    }
    traits
}

/// A senior player for a club of the given tier.
pub fn generate_player<R: Rng + ?Sized>(
    rng: &mut R,
    id: PlayerId,
    spec: PlayerSpec,
    world: &WorldConfig,
    economy: &EconomyConfig,
) -> Player {
    let position = spec.position.unwrap_or_else(|| sample_position(rng));
    let age = spec.age.unwrap_or_else(|| sample_age(rng, world));

    let mean = world.rating_mean_for_tier(spec.tier);
    let mut rating = truncated_normal(rng, mean, world.rating_sigma, RATING_MIN, RATING_MAX);
    if age < 21 {
        // raw teenagers sit below their tier's level
        rating -= (21 - age) as f32 * 2.0;
    }
    let rating = rating.clamp(RATING_MIN, RATING_MAX);

    let mut potential = rating + sample_potential_gap(rng, age, spec.tier);
    if age <= WONDERKID_MAX_AGE && bernoulli(rng, world.wonderkid_chance) {
        potential += rng.gen_range(15.0..25.0);
        log::debug!("{} generated as a wonderkid", id);
    }
    let potential = potential.clamp(rating, RATING_MAX);

    let name = spec.region.random_name(rng);
    let mut player = Player::new(id, name, spec.region, age, position, rating, potential);
    player.reputation = ((5 - spec.tier.clamp(1, 4)) as f32 * 15.0 + rng.gen_range(0.0..15.0))
        .clamp(0.0, 100.0);
    player.traits = sample_traits(rng, position, age, potential, world);
    player.market_value = market_value(&player, economy);
    player
}

/// Academy prospect: age uniform in 16-19.
pub fn generate_youth<R: Rng + ?Sized>(
    rng: &mut R,
    id: PlayerId,
    region: Region,
    tier: u8,
    position: Option<Position>,
    world: &WorldConfig,
    economy: &EconomyConfig,
) -> Player {
    let age = rng.gen_range(YOUTH_AGE_MIN..=YOUTH_AGE_MAX);
    let mut spec = PlayerSpec::new(region, tier).with_age(age);
    spec.position = position;
    let mut player = generate_player(rng, id, spec, world, economy);
    player.reputation = rng.gen_range(0.0..5.0);
    player.market_value = market_value(&player, economy);
    player
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_position_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut gk = 0;
        let n = 10_000;
        for _ in 0..n {
            if sample_position(&mut rng) == Position::GK {
                gk += 1;
            }
        }
        let share = gk as f32 / n as f32;
        assert!((0.08..0.12).contains(&share), "gk share {}", share);
    }

    #[test]
    fn test_generated_players_respect_invariants() {
        let world = WorldConfig::default();
        let economy = EconomyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for i in 0..500 {
            let tier = (i % 4) as u8 + 1;
            let p = generate_player(&mut rng, PlayerId(i), PlayerSpec::new(Region::Southland, tier), &world, &economy);
            assert!(p.overall_rating() >= RATING_MIN);
            assert!(p.overall_rating() <= p.potential());
            assert!(p.potential() <= RATING_MAX);
            assert!((16..=36).contains(&p.age));
            assert!(p.market_value >= economy.min_market_value);
            for t in &p.traits {
                assert!(t.is_allowed(p.position, p.age), "{:?} on {} aged {}", t, p.position, p.age);
            }
        }
    }

    #[test]
    fn test_tier_one_outrates_tier_four() {
        let world = WorldConfig::default();
        let economy = EconomyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mean = |tier: u8, rng: &mut ChaCha8Rng| {
            let total: f32 = (0..200)
                .map(|i| {
                    let spec = PlayerSpec::new(Region::Northland, tier).with_age(26);
                    generate_player(rng, PlayerId(i), spec, &world, &economy).overall_rating()
                })
                .sum();
            total / 200.0
        };
        let t1 = mean(1, &mut rng);
        let t4 = mean(4, &mut rng);
        assert!(t1 - t4 > 20.0, "tier1 {} tier4 {}", t1, t4);
    }

    #[test]
    fn test_youth_age_range_and_forced_position() {
        let world = WorldConfig::default();
        let economy = EconomyConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for i in 0..200 {
            let p = generate_youth(&mut rng, PlayerId(i), Region::Northland, 4, Some(Position::GK), &world, &economy);
            assert!((16..=19).contains(&p.age));
            assert_eq!(p.position, Position::GK);
            assert!(!p.traits.contains(&PlayerTrait::Speedster));
            assert!(!p.traits.contains(&PlayerTrait::Leader));
        }
    }
}
