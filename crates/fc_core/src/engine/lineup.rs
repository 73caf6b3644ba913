//! Per-side match state: who is on the pitch, who is on the bench, and the
//! sector strengths derived from them.

use super::squad::SquadSelection;
use crate::data::PlayerTrait;
use crate::math::weighted_index;
use crate::models::{ClubId, Player, PlayerId, Position, TacticalStyle, Team};
use rand::Rng;

pub const MAX_SUBSTITUTIONS: u8 = 3;

/// Strength lost at zero stamina.
const FATIGUE_PENALTY: f32 = 0.1;

/// Strength multiplier for a sector left without a specialist.
const OUT_OF_POSITION: f32 = 0.8;

/// Shooter group weights: forwards, midfielders, defenders.
const SHOOTER_GROUPS: [(Position, f32); 3] = [(Position::FWD, 0.65), (Position::MID, 0.3), (Position::DEF, 0.05)];

/// Snapshot of a player taken at kick-off.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPlayer {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    /// Rating scaled by freshness.
    pub strength: f32,
    pub traits: Vec<PlayerTrait>,
}

impl MatchPlayer {
    pub fn from_player(player: &Player) -> Self {
        let tiredness = 1.0 - player.stamina() / 100.0;
        let fatigue: f32 = player.traits.iter().map(PlayerTrait::fatigue_factor).product();
        Self {
            id: player.id,
            name: player.name.clone(),
            position: player.position,
            strength: player.overall_rating() * (1.0 - FATIGUE_PENALTY * fatigue * tiredness),
            traits: player.traits.clone(),
        }
    }

    /// Product of a per-trait multiplier over this player's traits.
    pub fn trait_factor(&self, factor: impl Fn(&PlayerTrait) -> f32) -> f32 {
        self.traits.iter().map(factor).product()
    }

    /// Largest per-trait bonus this player carries.
    pub fn trait_bonus(&self, bonus: impl Fn(&PlayerTrait) -> f32) -> f32 {
        self.traits.iter().map(bonus).fold(0.0, f32::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SideState {
    pub club_id: ClubId,
    pub name: String,
    pub style: TacticalStyle,
    pub on_field: Vec<MatchPlayer>,
    pub bench: Vec<MatchPlayer>,
    pub subs_used: u8,
    pub goals: u8,
    pub possession_ticks: u32,
}

impl SideState {
    pub fn new(team: &Team, selection: &SquadSelection) -> Self {
        let snapshot = |ids: &[PlayerId]| -> Vec<MatchPlayer> {
            ids.iter().filter_map(|id| team.player(*id)).map(MatchPlayer::from_player).collect()
        };
        Self {
            club_id: team.id,
            name: team.name.clone(),
            style: team.tactics.style,
            on_field: snapshot(&selection.starters),
            bench: snapshot(&selection.substitutes),
            subs_used: 0,
            goals: 0,
            possession_ticks: 0,
        }
    }

    /// Average strength of the group on the pitch. An empty sector is covered
    /// by the rest of the side at reduced strength.
    pub fn sector_strength(&self, group: Position) -> f32 {
        let (sum, n) = self
            .on_field
            .iter()
            .filter(|p| p.position == group)
            .fold((0.0, 0usize), |(s, n), p| (s + p.strength, n + 1));
        if n > 0 {
            return sum / n as f32 * self.leadership();
        }
        if self.on_field.is_empty() {
            return 1.0;
        }
        let total: f32 = self.on_field.iter().map(|p| p.strength).sum();
        total / self.on_field.len() as f32 * OUT_OF_POSITION * self.leadership()
    }

    /// Strength multiplier from the best leader on the pitch.
    fn leadership(&self) -> f32 {
        self.on_field
            .iter()
            .map(|p| p.trait_factor(PlayerTrait::side_strength_factor))
            .fold(1.0, f32::max)
    }

    /// Largest per-trait bonus among the players on the pitch.
    pub fn best_on_field(&self, bonus: impl Fn(&PlayerTrait) -> f32 + Copy) -> f32 {
        self.on_field.iter().map(|p| p.trait_bonus(bonus)).fold(0.0, f32::max)
    }

    /// Largest per-trait multiplier among the players on the pitch.
    pub fn best_factor_on_field(&self, factor: impl Fn(&PlayerTrait) -> f32 + Copy) -> f32 {
        self.on_field.iter().map(|p| p.trait_factor(factor)).fold(1.0, f32::max)
    }

    pub fn keeper(&self) -> Option<&MatchPlayer> {
        self.on_field.iter().find(|p| p.position.is_goalkeeper())
    }

    pub fn on_field(&self, id: PlayerId) -> Option<&MatchPlayer> {
        self.on_field.iter().find(|p| p.id == id)
    }

    pub fn on_bench(&self, id: PlayerId) -> bool {
        self.bench.iter().any(|p| p.id == id)
    }

    pub fn remove_from_field(&mut self, id: PlayerId) -> Option<MatchPlayer> {
        let idx = self.on_field.iter().position(|p| p.id == id)?;
        Some(self.on_field.remove(idx))
    }

    /// Replaces a departed player with the strongest bench player of the same
    /// group (any group if none). Returns the incoming player. A player kept
    /// on the bench also keeps the last substitution free for their entry.
    pub fn replace(&mut self, group: Position, keep_on_bench: Option<PlayerId>) -> Option<PlayerId> {
        let held_back = u8::from(keep_on_bench.is_some_and(|id| self.on_bench(id)));
        if self.subs_used + held_back >= MAX_SUBSTITUTIONS {
            return None;
        }
        let mut same_group: Option<usize> = None;
        let mut any: Option<usize> = None;
        for (i, p) in self.bench.iter().enumerate() {
            if Some(p.id) == keep_on_bench {
                continue;
            }
            if any.map_or(true, |b| self.bench[b].strength < p.strength) {
                any = Some(i);
            }
            if p.position == group && same_group.map_or(true, |b| self.bench[b].strength < p.strength) {
                same_group = Some(i);
            }
        }
        let idx = same_group.or(any)?;
        let incoming = self.bench.remove(idx);
        let id = incoming.id;
        self.on_field.push(incoming);
        self.subs_used += 1;
        Some(id)
    }

    /// Brings a specific bench player on for the weakest starter of their
    /// group. Returns the player taken off.
    pub fn bring_on(&mut self, id: PlayerId) -> Option<PlayerId> {
        if self.subs_used >= MAX_SUBSTITUTIONS {
            return None;
        }
        let bench_idx = self.bench.iter().position(|p| p.id == id)?;
        let group = self.bench[bench_idx].position;
        let weakest = |group: Option<Position>| {
            self.on_field
                .iter()
                .enumerate()
                .filter(|(_, p)| group.map_or(!p.position.is_goalkeeper(), |g| p.position == g))
                .fold(None, |worst: Option<(usize, f32)>, (i, p)| match worst {
                    Some((_, s)) if s <= p.strength => worst,
                    _ => Some((i, p.strength)),
                })
                .map(|(i, _)| i)
        };
        let field_idx = weakest(Some(group)).or_else(|| weakest(None))?;
        let outgoing = self.on_field.remove(field_idx);
        let incoming = self.bench.remove(bench_idx);
        self.on_field.push(incoming);
        self.subs_used += 1;
        Some(outgoing.id)
    }

    fn eligible(&self, group: Position, exclude: Option<PlayerId>) -> impl Iterator<Item = &MatchPlayer> + '_ {
        self.on_field
            .iter()
            .filter(move |p| p.position == group && Some(p.id) != exclude)
    }

    /// Picks who takes a shot: a group by fixed weights, then a player of
    /// that group by strength.
    pub fn pick_shooter<R: Rng + ?Sized>(&self, rng: &mut R, exclude: Option<PlayerId>) -> Option<PlayerId> {
        let group_weights: Vec<f32> = SHOOTER_GROUPS
            .iter()
            .map(|(g, w)| if self.eligible(*g, exclude).next().is_some() { *w } else { 0.0 })
            .collect();
        let group = SHOOTER_GROUPS[weighted_index(rng, &group_weights)?].0;
        let players: Vec<&MatchPlayer> = self.eligible(group, exclude).collect();
        let weights: Vec<f32> = players.iter().map(|p| p.strength).collect();
        weighted_index(rng, &weights).map(|i| players[i].id)
    }

    /// Random outfield player other than `exclude`, weighted by `weight`.
    pub fn pick_outfield<R, F>(&self, rng: &mut R, exclude: Option<PlayerId>, weight: F) -> Option<PlayerId>
    where
        R: Rng + ?Sized,
        F: Fn(&MatchPlayer) -> f32,
    {
        let players: Vec<&MatchPlayer> = self
            .on_field
            .iter()
            .filter(|p| !p.position.is_goalkeeper() && Some(p.id) != exclude)
            .collect();
        let weights: Vec<f32> = players.iter().map(|p| weight(p)).collect();
        weighted_index(rng, &weights).map(|i| players[i].id)
    }
}
