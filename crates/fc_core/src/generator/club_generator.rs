use super::player_generator::{generate_player, PlayerSpec};
use crate::config::SimConfig;
use crate::data::LeagueTemplate;
use crate::economy::weekly_wage;
use crate::math::weighted_index;
use crate::models::{
    ClubId, Contract, Formation, LeagueId, Player, Position, TacticalStyle, Tactics, Team,
    TransferPolicy, World,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Forced squad composition: 3 GK, 8 DEF, 8 MID, 6 FWD.
pub const SQUAD_TEMPLATE: [(Position, usize); 4] =
    [(Position::GK, 3), (Position::DEF, 8), (Position::MID, 8), (Position::FWD, 6)];

const FORMATIONS: [Formation; 4] = [Formation::F442, Formation::F433, Formation::F352, Formation::F451];
const STYLES: [TacticalStyle; 4] =
    [TacticalStyle::Balanced, TacticalStyle::Attacking, TacticalStyle::Defensive, TacticalStyle::Counter];
const POLICIES: [TransferPolicy; 5] = [
    TransferPolicy::Balanced,
    TransferPolicy::Galactico,
    TransferPolicy::YouthDevelopment,
    TransferPolicy::Moneyball,
    TransferPolicy::RelegationBattler,
];

/// Policy weights, same order as `POLICIES`.
fn policy_weights(tier: u8) -> [f32; 5] {
    match tier {
        1 => [4.0, 3.0, 1.0, 2.0, 1.0],
        2 => [4.0, 1.0, 2.0, 3.0, 2.0],
        _ => [4.0, 0.0, 3.0, 2.0, 3.0],
    }
}

/// Standard terms for a player joining `club_id`.
pub fn starter_contract(player: &Player, club_id: ClubId, years: u8, cfg: &SimConfig) -> Contract {
    let economy = &cfg.economy;
    let value = player.market_value;
    let wage = weekly_wage(value, years, economy);
    Contract {
        club_id,
        weekly_wage: wage,
        years_remaining: years.max(1),
        release_clause: value * economy.release_clause_multiplier,
        signing_bonus: value * economy.signing_bonus_ratio,
        goal_bonus: if player.position.is_attacking() { wage * 0.5 } else { 0.0 },
        clean_sheet_bonus: if player.position.is_defensive() { wage * 0.3 } else { 0.0 },
        appearance_bonus: wage * 0.1,
    }
}

/// A club with a full 25-player squad, every player under contract.
pub fn generate_club<R: Rng + ?Sized>(
    rng: &mut R,
    world: &mut World,
    league_id: LeagueId,
    template: &LeagueTemplate,
    name: String,
    cfg: &SimConfig,
) -> Team {
    let id = world.allocate_club_id();
    let tier = template.tier;

    let mut players = Vec::with_capacity(SQUAD_TEMPLATE.iter().map(|(_, n)| n).sum());
    for (position, count) in SQUAD_TEMPLATE {
        for _ in 0..count {
            let pid = world.allocate_player_id();
            let spec = PlayerSpec::new(template.region, tier).with_position(position);
            let mut player = generate_player(rng, pid, spec, &cfg.world, &cfg.economy);
            let years = rng.gen_range(1..=4);
            player.contract = Some(starter_contract(&player, id, years, cfg));
            players.push(player);
        }
    }

    let policy = weighted_index(rng, &policy_weights(tier))
        .map(|i| POLICIES[i])
        .unwrap_or_default();
    let tactics = Tactics {
        formation: FORMATIONS.choose(rng).copied().unwrap_or_default(),
        style: STYLES.choose(rng).copied().unwrap_or_default(),
    };

    Team {
        id,
        name,
        region: template.region,
        tactics,
        players,
        budget: template.base_budget * rng.gen_range(0.7..1.3),
        reputation: (template.reputation + rng.gen_range(-8.0..8.0)).clamp(0.0, 100.0),
        league_id,
        transfer_policy: policy,
        stats: Default::default(),
    }
}
