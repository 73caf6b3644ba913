//! Minute-resolution match simulation.
//!
//! `PreMatch -> 90 minute ticks -> FullTime`. A tick whose highlight involves
//! the human player suspends in `DecisionPending` until the host calls
//! [`MatchEngine::resolve_decision`]; the rest of that minute is played out
//! as part of the resolution, and the next `advance` moves on.

use super::commentary::{Commentary, LineContext, TEMPLATE_VARIANTS};
use super::decision::{AutoDecider, DecisionContext, DecisionKind, DecisionMaker};
use super::lineup::SideState;
use super::squad::select_squad;
use crate::config::MatchConfig;
use crate::data::PlayerTrait;
use crate::error::{ConfigError, MatchError};
use crate::math::{bernoulli, weighted_index};
use crate::models::match_result::MatchResultParts;
use crate::models::{EventType, GameDate, MatchEvent, MatchResult, PlayerId, Position, Side, Team};
use rand::Rng;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::rc::Rc;

const MIN_CONVERSION: f32 = 0.02;
const MAX_CONVERSION: f32 = 0.8;
/// Conversion lost per keeper rating point above 60.
const KEEPER_STOPPING: f32 = 0.002;
/// Failed shot outcome weights: miss, save, foul.
const SHOT_FAILURE_WEIGHTS: [f32; 3] = [0.5, 0.4, 0.1];
/// Share of fouls committed by the side out of possession.
const DEFENDING_FOUL_SHARE: f32 = 0.6;
const SLIDING_CARD_FACTOR: f32 = 2.0;
const WIN_BONUS: f32 = 0.3;
const LOSS_PENALTY: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    PreMatch,
    InPlay,
    DecisionPending,
    FullTime,
}

/// What one `advance` call produced.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchStep {
    /// A minute was played to the end.
    Minute { minute: u8, events: Vec<MatchEvent> },
    /// The minute is suspended on a human decision.
    AwaitingDecision(DecisionContext),
    FullTime(MatchResult),
}

#[derive(Debug, Clone)]
struct PendingDecision {
    context: DecisionContext,
    /// Side in possession.
    attacking: Side,
    /// Opposition shooter when the human defends.
    shooter: Option<PlayerId>,
}

fn attacking_involvement(group: Position) -> f32 {
    match group {
        Position::FWD => 1.0,
        Position::MID => 0.7,
        Position::DEF | Position::GK => 0.0,
    }
}

fn defending_involvement(group: Position) -> f32 {
    match group {
        Position::GK => 0.8,
        Position::DEF => 0.6,
        Position::MID => 0.25,
        Position::FWD => 0.1,
    }
}

#[derive(Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    commentary: Rc<dyn Commentary>,
    home: SideState,
    away: SideState,
    human: Option<(PlayerId, Side)>,
    human_entry: Option<u8>,
    phase: MatchPhase,
    pending: Option<PendingDecision>,
    minute: u8,
    /// First event of the current minute.
    minute_start: usize,
    possession: Side,
    events: Vec<MatchEvent>,
    ratings: BTreeMap<PlayerId, f32>,
    participants: BTreeMap<PlayerId, Side>,
    injuries: BTreeMap<PlayerId, u8>,
    bookings: BTreeMap<PlayerId, u8>,
    names: BTreeMap<PlayerId, String>,
    decisions_taken: u32,
    result: Option<MatchResult>,
}

impl MatchEngine {
    /// Selects both squads and lines them up.
    ///
    /// `human` only matters if that player makes the matchday squad of
    /// either side.
    pub fn new(
        home: &Team,
        away: &Team,
        human: Option<PlayerId>,
        config: MatchConfig,
        commentary: Rc<dyn Commentary>,
    ) -> Result<Self, ConfigError> {
        let home_selection = select_squad(home, home.tactics.formation)?;
        let away_selection = select_squad(away, away.tactics.formation)?;
        let home_side = SideState::new(home, &home_selection);
        let away_side = SideState::new(away, &away_selection);

        let names = home_side
            .on_field
            .iter()
            .chain(&home_side.bench)
            .chain(&away_side.on_field)
            .chain(&away_side.bench)
            .map(|p| (p.id, p.name.clone()))
            .collect();
        let human = human.and_then(|id| {
            if home_selection.contains(id) {
                Some((id, Side::Home))
            } else if away_selection.contains(id) {
                Some((id, Side::Away))
            } else {
                None
            }
        });

        let mut engine = Self {
            config,
            commentary,
            home: home_side,
            away: away_side,
            human,
            human_entry: None,
            phase: MatchPhase::PreMatch,
            pending: None,
            minute: 0,
            minute_start: 0,
            possession: Side::Home,
            events: Vec::new(),
            ratings: BTreeMap::new(),
            participants: BTreeMap::new(),
            injuries: BTreeMap::new(),
            bookings: BTreeMap::new(),
            names,
            decisions_taken: 0,
            result: None,
        };
        for side in [Side::Home, Side::Away] {
            let starters: Vec<PlayerId> = engine.side(side).on_field.iter().map(|p| p.id).collect();
            for id in starters {
                engine.enter(id, side);
            }
        }
        Ok(engine)
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn score(&self) -> (u8, u8) {
        (self.home.goals, self.away.goals)
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn rating_of(&self, player: PlayerId) -> Option<f32> {
        self.ratings.get(&player).copied()
    }

    pub fn pending_decision(&self) -> Option<&DecisionContext> {
        self.pending.as_ref().map(|p| &p.context)
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Whether the human player is currently on the pitch.
    pub fn human_on_field(&self) -> bool {
        self.human
            .map_or(false, |(id, side)| self.side(side).on_field(id).is_some())
    }

    /// Plays the next minute, or finalizes after the last one.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<MatchStep, MatchError> {
        match self.phase {
            MatchPhase::FullTime => return Err(MatchError::AlreadyFinished),
            MatchPhase::DecisionPending => return Err(MatchError::DecisionPending),
            MatchPhase::PreMatch => {
                self.kick_off(rng);
                self.phase = MatchPhase::InPlay;
            }
            MatchPhase::InPlay => {}
        }

        if self.minute >= self.config.minutes {
            return Ok(MatchStep::FullTime(self.finalize()));
        }

        self.minute += 1;
        self.minute_start = self.events.len();
        if let Some(context) = self.start_minute(rng) {
            return Ok(MatchStep::AwaitingDecision(context));
        }
        self.finish_minute(rng);
        Ok(MatchStep::Minute {
            minute: self.minute,
            events: self.events[self.minute_start..].to_vec(),
        })
    }

    /// Applies the human's choice and plays out the rest of the minute.
    /// Returns every event of that minute.
    pub fn resolve_decision<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<Vec<MatchEvent>, MatchError> {
        match self.phase {
            MatchPhase::FullTime => return Err(MatchError::AlreadyFinished),
            MatchPhase::DecisionPending => {}
            MatchPhase::PreMatch | MatchPhase::InPlay => return Err(MatchError::NoDecisionPending),
        }
        let available = self.pending.as_ref().map_or(0, |p| p.context.options.len());
        if index >= available {
            return Err(MatchError::InvalidOption { index, available });
        }
        let Some(pending) = self.pending.take() else {
            return Err(MatchError::NoDecisionPending);
        };
        self.phase = MatchPhase::InPlay;
        self.decisions_taken += 1;

        let human = pending.context.player_id;
        let option = &pending.context.options[index];
        let success = bernoulli(rng, option.success_chance);
        log::debug!(
            "{}' decision {:?} by {} -> {}",
            self.minute,
            option.kind,
            human,
            if success { "success" } else { "failure" }
        );
        if success {
            self.adjust_rating(human, option.reward_rating);
        } else {
            self.adjust_rating(human, -option.risk_rating);
        }

        if pending.context.defending {
            if let Some(shooter) = pending.shooter {
                self.resolve_defending(rng, option.kind, success, human, pending.attacking, shooter);
            }
        } else {
            self.resolve_attacking(rng, option.kind, success, human, pending.attacking);
        }

        self.finish_minute(rng);
        Ok(self.events[self.minute_start..].to_vec())
    }

    /// Drives the match to full time, handing decisions to `decider`.
    pub fn run_to_completion<R, D>(&mut self, rng: &mut R, decider: &mut D) -> Result<MatchResult, MatchError>
    where
        R: Rng + ?Sized,
        D: DecisionMaker + ?Sized,
    {
        loop {
            match self.advance(rng)? {
                MatchStep::Minute { .. } => {}
                MatchStep::AwaitingDecision(context) => {
                    let choice = decider.decide(&context);
                    self.resolve_decision(choice, rng)?;
                }
                MatchStep::FullTime(result) => return Ok(result),
            }
        }
    }

    fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    fn enter(&mut self, id: PlayerId, side: Side) {
        self.participants.insert(id, side);
        self.ratings.entry(id).or_insert(self.config.rating_baseline);
    }

    fn adjust_rating(&mut self, id: PlayerId, delta: f32) {
        let (min, max) = (self.config.rating_min, self.config.rating_max);
        if let Some(rating) = self.ratings.get_mut(&id) {
            *rating = (*rating + delta).clamp(min, max);
        }
    }

    fn kick_off<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some((id, side)) = self.human {
            if self.side(side).on_bench(id) {
                let earliest = self.config.sub_entry_earliest.min(self.config.sub_entry_latest);
                let latest = self.config.sub_entry_earliest.max(self.config.sub_entry_latest);
                self.human_entry = Some(rng.gen_range(earliest..=latest));
            }
        }
        log::debug!("kick-off: {} vs {}", self.home.name, self.away.name);
    }

    fn bring_on_human(&mut self) {
        let Some((id, side)) = self.human else { return };
        if self.human_entry != Some(self.minute) {
            return;
        }
        self.human_entry = None;
        if let Some(off) = self.side_mut(side).bring_on(id) {
            self.enter(id, side);
            log::debug!("{}' {} on for {}", self.minute, id, off);
        }
    }

    fn roll_possession<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Side {
        let home_mid = self.home.sector_strength(Position::MID);
        let away_mid = self.away.sector_strength(Position::MID);
        let share = home_mid / (home_mid + away_mid).max(f32::EPSILON) + self.config.home_advantage;
        let side = if bernoulli(rng, share.clamp(0.2, 0.8)) {
            Side::Home
        } else {
            Side::Away
        };
        self.side_mut(side).possession_ticks += 1;
        self.possession = side;
        side
    }

    /// Substitutions, possession and the highlight. Returns a context when
    /// the minute suspends.
    fn start_minute<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<DecisionContext> {
        self.bring_on_human();
        let attacking = self.roll_possession(rng);
        let highlight = self.config.highlight_chance * self.side(attacking).style.highlight_factor();
        if !bernoulli(rng, highlight) {
            return None;
        }
        let is_shot = bernoulli(rng, self.config.shot_share);

        if let Some(context) = self.attacking_decision(rng, attacking) {
            return Some(context);
        }
        if is_shot {
            let shooter = self.side(attacking).pick_shooter(rng, None)?;
            if let Some(context) = self.defending_decision(rng, attacking, shooter) {
                return Some(context);
            }
            self.auto_shot(rng, attacking, shooter);
        } else if bernoulli(rng, self.config.corner_share) {
            if let Some(taker) = self.side(attacking).pick_outfield(rng, None, |_| 1.0) {
                self.push_event(rng, EventType::Corner, attacking, Some(taker), None);
            }
        }
        None
    }

    /// Fouls, cards, injuries and the half-time whistle.
    fn finish_minute<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if bernoulli(rng, self.config.foul_chance) {
            let offender = if bernoulli(rng, DEFENDING_FOUL_SHARE) {
                self.possession.opposite()
            } else {
                self.possession
            };
            if let Some(fouler) = self.side(offender).pick_outfield(rng, None, |_| 1.0) {
                let victim = self.side(offender.opposite()).pick_outfield(rng, None, |_| 1.0);
                self.commit_foul(rng, offender, fouler, victim, self.config.card_chance);
            }
        }
        if bernoulli(rng, self.config.injury_chance) {
            self.injure(rng);
        }
        if self.config.minutes >= 2 && self.minute == self.config.minutes / 2 {
            self.push_event(rng, EventType::HalfTime, Side::Home, None, None);
        }
    }

    fn human_on_pitch(&self) -> Option<(PlayerId, Side, Position, f32)> {
        let (id, side) = self.human?;
        let player = self.side(side).on_field(id)?;
        Some((id, side, player.position, player.strength))
    }

    fn suspend(&mut self, context: DecisionContext, attacking: Side, shooter: Option<PlayerId>) -> DecisionContext {
        self.pending = Some(PendingDecision {
            context: context.clone(),
            attacking,
            shooter,
        });
        self.phase = MatchPhase::DecisionPending;
        context
    }

    fn attacking_decision<R: Rng + ?Sized>(&mut self, rng: &mut R, attacking: Side) -> Option<DecisionContext> {
        let (id, side, group, strength) = self.human_on_pitch()?;
        if side != attacking {
            return None;
        }
        let weight = attacking_involvement(group);
        if weight <= 0.0 || !bernoulli(rng, self.config.human_involvement * weight) {
            return None;
        }
        let opposition = self.side(attacking.opposite()).sector_strength(Position::DEF);
        let context = DecisionContext::build(self.minute, id, group, false, strength - opposition);
        Some(self.suspend(context, attacking, None))
    }

    fn defending_decision<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        attacking: Side,
        shooter: PlayerId,
    ) -> Option<DecisionContext> {
        let (id, side, group, strength) = self.human_on_pitch()?;
        if side == attacking || !bernoulli(rng, self.config.human_involvement * defending_involvement(group)) {
            return None;
        }
        let threat = self.side(attacking).sector_strength(Position::FWD);
        let context = DecisionContext::build(self.minute, id, group, true, strength - threat);
        Some(self.suspend(context, attacking, Some(shooter)))
    }

    fn resolve_attacking<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        kind: DecisionKind,
        success: bool,
        human: PlayerId,
        side: Side,
    ) {
        if kind.is_shot() {
            if success {
                self.score_goal(rng, side, human, None);
            } else {
                self.shot_failure(rng, side, human, false);
            }
        } else if kind.is_creative() {
            let finisher = self.side(side).pick_shooter(rng, Some(human)).unwrap_or(human);
            if !success {
                self.shot_failure(rng, side, finisher, finisher != human);
                return;
            }
            let assist = (finisher != human).then_some(human);
            if self.score_goal(rng, side, finisher, assist) && finisher != human {
                self.adjust_rating(finisher, self.config.rating_goal);
            }
        } else if success {
            self.push_event(rng, EventType::Corner, side, Some(human), None);
        }
    }

    fn resolve_defending<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        kind: DecisionKind,
        success: bool,
        human: PlayerId,
        attacking: Side,
        shooter: PlayerId,
    ) {
        let defending = attacking.opposite();
        if success {
            match kind {
                DecisionKind::Dive | DecisionKind::RushOut => {
                    self.push_event(rng, EventType::Save, attacking, Some(shooter), Some(human));
                }
                DecisionKind::Parry => {
                    self.push_event(rng, EventType::Save, attacking, Some(shooter), Some(human));
                    self.push_event(rng, EventType::Corner, attacking, Some(shooter), None);
                }
                DecisionKind::Block => {
                    self.push_event(rng, EventType::Corner, attacking, Some(shooter), None);
                }
                _ => {
                    self.push_event(rng, EventType::Miss, attacking, Some(shooter), None);
                }
            }
            return;
        }
        if kind == DecisionKind::SlidingTackle {
            let card_chance = self.config.card_chance * SLIDING_CARD_FACTOR;
            self.commit_foul(rng, defending, human, Some(shooter), card_chance);
            return;
        }
        let assist = self.roll_assist(rng, attacking, shooter);
        if self.score_goal(rng, attacking, shooter, assist) {
            self.credit_goal(shooter, assist);
        }
    }

    fn conversion(&self, side: Side, shooter: PlayerId) -> f32 {
        let attack = self.side(side);
        let defence = self.side(side.opposite());
        let Some(player) = attack.on_field(shooter) else {
            return 0.0;
        };
        let cover = defence.sector_strength(Position::DEF);
        let mut chance = self.config.base_conversion * 2.0 * player.strength / (player.strength + cover).max(1.0)
            * attack.style.conversion_factor();
        chance *= player.trait_factor(PlayerTrait::conversion_factor);
        chance -= defence.best_on_field(PlayerTrait::block_bonus);
        if let Some(keeper) = defence.keeper() {
            chance -= (keeper.strength - 60.0) * KEEPER_STOPPING;
            chance -= keeper.trait_bonus(PlayerTrait::save_bonus);
        }
        chance.clamp(MIN_CONVERSION, MAX_CONVERSION)
    }

    fn auto_shot<R: Rng + ?Sized>(&mut self, rng: &mut R, side: Side, shooter: PlayerId) {
        if bernoulli(rng, self.conversion(side, shooter)) {
            let assist = self.roll_assist(rng, side, shooter);
            if self.score_goal(rng, side, shooter, assist) {
                self.credit_goal(shooter, assist);
            }
        } else {
            self.shot_failure(rng, side, shooter, true);
        }
    }

    fn credit_goal(&mut self, scorer: PlayerId, assist: Option<PlayerId>) {
        self.adjust_rating(scorer, self.config.rating_goal);
        if let Some(assist) = assist {
            self.adjust_rating(assist, self.config.rating_assist);
        }
    }

    fn roll_assist<R: Rng + ?Sized>(&self, rng: &mut R, side: Side, scorer: PlayerId) -> Option<PlayerId> {
        let attack = self.side(side);
        let chance = self.config.assist_chance * attack.best_factor_on_field(PlayerTrait::assist_chance_factor);
        if !bernoulli(rng, chance) {
            return None;
        }
        attack.pick_outfield(rng, Some(scorer), |p| p.trait_factor(PlayerTrait::assist_weight))
    }

    /// Goal attempt that beat the keeper. A VAR review may still rule it out.
    /// Returns whether the goal stood.
    fn score_goal<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        side: Side,
        scorer: PlayerId,
        assist: Option<PlayerId>,
    ) -> bool {
        if bernoulli(rng, self.config.var_check_chance) {
            self.push_event(rng, EventType::VarCheck, side, Some(scorer), None);
            if bernoulli(rng, self.config.var_overturn_chance) {
                self.push_event(rng, EventType::VarOverturned, side, Some(scorer), None);
                return false;
            }
            self.push_event(rng, EventType::VarUpheld, side, Some(scorer), None);
        }

        self.side_mut(side).goals += 1;
        self.push_event(rng, EventType::Goal, side, Some(scorer), assist);

        let conceding: Vec<PlayerId> = self
            .side(side.opposite())
            .on_field
            .iter()
            .filter(|p| p.position.is_defensive())
            .map(|p| p.id)
            .collect();
        for id in conceding {
            self.adjust_rating(id, self.config.rating_concede);
        }
        true
    }

    /// `rate_shooter` is off when the shooter's rating was already settled
    /// by a decision.
    fn shot_failure<R: Rng + ?Sized>(&mut self, rng: &mut R, side: Side, shooter: PlayerId, rate_shooter: bool) {
        let defending = side.opposite();
        let keeper = self.side(defending).keeper().map(|k| k.id);
        let mut weights = SHOT_FAILURE_WEIGHTS;
        if keeper.is_none() {
            weights[1] = 0.0;
        }
        match (weighted_index(rng, &weights), keeper) {
            (Some(1), Some(keeper)) => {
                self.push_event(rng, EventType::Save, side, Some(shooter), Some(keeper));
                self.adjust_rating(keeper, self.config.rating_save);
            }
            (Some(2), _) => match self.side(defending).pick_outfield(rng, None, |_| 1.0) {
                Some(fouler) => self.commit_foul(rng, defending, fouler, Some(shooter), self.config.card_chance),
                None => self.push_event(rng, EventType::Miss, side, Some(shooter), None),
            },
            _ => {
                self.push_event(rng, EventType::Miss, side, Some(shooter), None);
                if rate_shooter {
                    self.adjust_rating(shooter, self.config.rating_miss);
                }
            }
        }
    }

    fn commit_foul<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        side: Side,
        fouler: PlayerId,
        victim: Option<PlayerId>,
        card_chance: f32,
    ) {
        self.push_event(rng, EventType::Foul, side, Some(fouler), victim);
        self.adjust_rating(fouler, self.config.rating_foul);
        if bernoulli(rng, card_chance) {
            self.book(rng, side, fouler);
        }
    }

    fn book<R: Rng + ?Sized>(&mut self, rng: &mut R, side: Side, player: PlayerId) {
        if bernoulli(rng, self.config.straight_red_share) {
            self.send_off(rng, side, player);
            return;
        }
        let count = self.bookings.entry(player).or_insert(0);
        *count += 1;
        let second = *count >= 2;
        self.push_event(rng, EventType::YellowCard, side, Some(player), None);
        self.adjust_rating(player, self.config.rating_yellow);
        if second {
            self.send_off(rng, side, player);
        }
    }

    fn send_off<R: Rng + ?Sized>(&mut self, rng: &mut R, side: Side, player: PlayerId) {
        self.push_event(rng, EventType::RedCard, side, Some(player), None);
        self.adjust_rating(player, self.config.rating_red);
        self.side_mut(side).remove_from_field(player);
    }

    fn injure<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let candidates: Vec<(Side, PlayerId, Position, f32)> = [Side::Home, Side::Away]
            .into_iter()
            .flat_map(|side| {
                self.side(side).on_field.iter().map(move |p| {
                    (side, p.id, p.position, p.trait_factor(PlayerTrait::injury_weight))
                })
            })
            .collect();
        let weights: Vec<f32> = candidates.iter().map(|c| c.3).collect();
        let Some(idx) = weighted_index(rng, &weights) else { return };
        let (side, id, position, _) = candidates[idx];
        let weeks = rng.gen_range(1..=self.config.max_injury_weeks.max(1));
        self.injuries.insert(id, weeks);
        self.push_event(rng, EventType::Injury, side, Some(id), None);
        self.side_mut(side).remove_from_field(id);

        let reserved = self
            .human
            .filter(|(human, human_side)| *human_side == side && self.human_entry.is_some() && *human != id)
            .map(|(human, _)| human);
        if let Some(sub) = self.side_mut(side).replace(position, reserved) {
            self.enter(sub, side);
            log::debug!("{}' {} replaces injured {}", self.minute, sub, id);
        }
    }

    fn push_event<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        event_type: EventType,
        side: Side,
        actor: Option<PlayerId>,
        secondary: Option<PlayerId>,
    ) {
        let variant = rng.gen_range(0..TEMPLATE_VARIANTS);
        let name_of = |id: Option<PlayerId>| id.and_then(|id| self.names.get(&id)).map(String::as_str);
        let ctx = LineContext {
            minute: self.minute,
            player: name_of(actor).unwrap_or(""),
            other: name_of(secondary),
            team: &self.side(side).name,
            score: (self.home.goals, self.away.goals),
            variant,
        };
        let commentary = &self.commentary;
        let text = match event_type {
            EventType::Goal => commentary.render_goal(&ctx),
            EventType::Miss => commentary.render_miss(&ctx),
            EventType::Save => commentary.render_save(&ctx),
            EventType::Foul => commentary.render_foul(&ctx),
            EventType::YellowCard => commentary.render_card(&ctx, false),
            EventType::RedCard => commentary.render_card(&ctx, true),
            EventType::Injury => commentary.render_injury(&ctx),
            EventType::Corner => commentary.render_corner(&ctx),
            EventType::VarCheck => commentary.render_var_check(&ctx),
            EventType::VarUpheld => commentary.render_var_decision(&ctx, false),
            EventType::VarOverturned => commentary.render_var_decision(&ctx, true),
            EventType::HalfTime => commentary.render_half_time(&ctx),
        };
        log::trace!("{}", text);
        self.events.push(MatchEvent {
            minute: self.minute,
            event_type,
            side,
            actor,
            secondary,
            text,
        });
    }

    fn finalize(&mut self) -> MatchResult {
        let ticks = self.home.possession_ticks + self.away.possession_ticks;
        let home_possession = if ticks == 0 {
            50
        } else {
            (self.home.possession_ticks as f32 * 100.0 / ticks as f32).round() as u8
        };

        let (home_goals, away_goals) = self.score();
        let deltas: Vec<(PlayerId, f32)> = self
            .participants
            .iter()
            .map(|(id, side)| {
                let (gf, ga) = match side {
                    Side::Home => (home_goals, away_goals),
                    Side::Away => (away_goals, home_goals),
                };
                let delta = match gf.cmp(&ga) {
                    Ordering::Greater => WIN_BONUS,
                    Ordering::Less => -LOSS_PENALTY,
                    Ordering::Equal => 0.0,
                };
                (*id, delta)
            })
            .collect();
        for (id, delta) in deltas {
            self.adjust_rating(id, delta);
        }

        let result = MatchResult::from_parts(MatchResultParts {
            home_id: self.home.club_id,
            away_id: self.away.club_id,
            home_goals,
            away_goals,
            home_possession,
            minutes_played: self.minute,
            events: self.events.clone(),
            ratings: self.ratings.clone(),
            participants: self.participants.clone(),
            injuries: self.injuries.clone(),
            decisions_taken: self.decisions_taken,
        });
        log::debug!(
            "full time: {} {}-{} {}",
            self.home.name,
            home_goals,
            away_goals,
            self.away.name
        );
        self.phase = MatchPhase::FullTime;
        self.result = Some(result.clone());
        result
    }
}

/// AI-vs-AI match with no human involvement.
pub fn simulate_match<R: Rng + ?Sized>(
    rng: &mut R,
    home: &Team,
    away: &Team,
    config: &MatchConfig,
    commentary: Rc<dyn Commentary>,
) -> crate::error::Result<MatchResult> {
    let mut engine = MatchEngine::new(home, away, None, config.clone(), commentary)?;
    Ok(engine.run_to_completion(rng, &mut AutoDecider)?)
}

/// Folds a finished match into a roster: history, season and career totals,
/// form, cards and injuries. Returns how many players were recorded.
pub fn record_match(team: &mut Team, result: &MatchResult, date: GameDate) -> usize {
    let mut recorded = 0;
    for player in team.players.iter_mut() {
        if let Some(weeks) = result.injuries().get(&player.id) {
            player.injury_weeks = player.injury_weeks.max(*weeks);
        }
        let Some(entry) = result.history_entry_for(player.id, date) else {
            continue;
        };
        player.record_match(entry);
        player.update_form(entry.rating);
        for event in result.events().iter().filter(|e| e.actor == Some(player.id)) {
            match event.event_type {
                EventType::YellowCard => player.season.yellow_cards += 1,
                EventType::RedCard => player.season.red_cards += 1,
                _ => {}
            }
        }
        recorded += 1;
    }
    recorded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Region;
    use crate::engine::commentary::PlainCommentary;
    use crate::models::{ClubId, LeagueId, Player, Tactics, TransferPolicy};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn team(id: u32, rating: f32) -> Team {
        let mut players = Vec::new();
        let mut next = id * 100;
        for (group, n) in [(Position::GK, 3), (Position::DEF, 8), (Position::MID, 8), (Position::FWD, 6)] {
            for _ in 0..n {
                next += 1;
                players.push(Player::new(
                    PlayerId(next),
                    format!("P{}", next),
                    Region::Northland,
                    25,
                    group,
                    rating,
                    99.0,
                ));
            }
        }
        Team {
            id: ClubId(id),
            name: format!("Club {}", id),
            region: Region::Northland,
            tactics: Tactics::default(),
            players,
            budget: 0.0,
            reputation: 50.0,
            league_id: LeagueId(1),
            transfer_policy: TransferPolicy::Balanced,
            stats: Default::default(),
        }
    }

    fn commentary() -> Rc<dyn Commentary> {
        Rc::new(PlainCommentary)
    }

    #[test]
    fn test_full_match_invariants() {
        let (home, away) = (team(1, 70.0), team(2, 70.0));
        let cfg = MatchConfig::default();
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let result = simulate_match(&mut rng, &home, &away, &cfg, commentary()).unwrap();
            assert_eq!(result.minutes_played(), 90);
            let (hp, ap) = result.possession();
            assert_eq!(hp as u16 + ap as u16, 100);
            assert!(result.events().iter().all(|e| e.minute >= 1 && e.minute <= 90));

            let goals = |side: Side| {
                result
                    .events()
                    .iter()
                    .filter(|e| e.is_goal() && e.side == side)
                    .count() as u8
            };
            assert_eq!(result.score(), (goals(Side::Home), goals(Side::Away)));
            assert!(result.ratings().values().all(|r| (3.0..=10.0).contains(r)));
            assert!(result.participants().len() >= 22);
            assert_eq!(result.events().iter().filter(|e| e.event_type == EventType::HalfTime).count(), 1);
        }
    }

    #[test]
    fn test_same_seed_same_match() {
        let (home, away) = (team(1, 72.0), team(2, 65.0));
        let run = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            simulate_match(&mut rng, &home, &away, &MatchConfig::default(), commentary()).unwrap()
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn test_two_phase_protocol() {
        let (mut home, away) = (team(1, 70.0), team(2, 70.0));
        let cfg = MatchConfig {
            highlight_chance: 1.0,
            human_involvement: 1.0,
            ..MatchConfig::default()
        };
        // the best forward always starts
        let human = PlayerId(125);
        if let Some(p) = home.player_mut(human) {
            p.set_overall_rating(85.0);
        }
        let mut engine = MatchEngine::new(&home, &away, Some(human), cfg, commentary()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let context = loop {
            match engine.advance(&mut rng).unwrap() {
                MatchStep::AwaitingDecision(ctx) => break ctx,
                MatchStep::Minute { .. } => {}
                MatchStep::FullTime(_) => panic!("no decision point in 90 minutes"),
            }
        };
        assert_eq!(context.player_id, human);
        assert_eq!(context.options.len(), 3);
        assert_eq!(engine.phase(), MatchPhase::DecisionPending);
        let minute = engine.minute();

        assert_eq!(engine.advance(&mut rng), Err(MatchError::DecisionPending));
        assert_eq!(
            engine.resolve_decision(7, &mut rng),
            Err(MatchError::InvalidOption { index: 7, available: 3 })
        );
        let events = engine.resolve_decision(0, &mut rng).unwrap();
        assert!(events.iter().all(|e| e.minute == minute));
        assert_eq!(engine.resolve_decision(0, &mut rng), Err(MatchError::NoDecisionPending));

        let mut decider = |ctx: &DecisionContext| ctx.options.len() - 1;
        let result = engine.run_to_completion(&mut rng, &mut decider).unwrap();
        assert!(result.decisions_taken() >= 1);
        assert_eq!(engine.advance(&mut rng), Err(MatchError::AlreadyFinished));
    }

    #[test]
    fn test_bench_player_enters_in_window() {
        let mut home = team(1, 70.0);
        let mut eleven = Vec::new();
        for (group, n) in [(Position::GK, 1), (Position::DEF, 4), (Position::MID, 4), (Position::FWD, 2)] {
            eleven.extend(home.players.iter().filter(|p| p.position == group).take(n).cloned());
        }
        home.players = eleven;
        // a weaker forward is the only substitute
        let human = PlayerId(999);
        home.players
            .push(Player::new(human, "Sub", Region::Northland, 19, Position::FWD, 55.0, 80.0));
        let away = team(2, 70.0);
        let cfg = MatchConfig {
            injury_chance: 0.0,
            human_involvement: 0.0,
            ..MatchConfig::default()
        };
        let mut engine = MatchEngine::new(&home, &away, Some(human), cfg, commentary()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        loop {
            match engine.advance(&mut rng).unwrap() {
                MatchStep::Minute { minute, .. } => {
                    if minute < 55 {
                        assert!(!engine.human_on_field());
                    }
                    if minute >= 75 {
                        assert!(engine.human_on_field() || engine.rating_of(human).is_some());
                    }
                }
                MatchStep::AwaitingDecision(_) => panic!("human involvement disabled"),
                MatchStep::FullTime(result) => {
                    assert!(result.played(human));
                    break;
                }
            }
        }
    }

    #[test]
    fn test_injuries_leave_a_substitution_for_the_bench_player() {
        let mut home = team(1, 70.0);
        let mut squad = Vec::new();
        for (group, n) in [(Position::GK, 1), (Position::DEF, 6), (Position::MID, 6), (Position::FWD, 2)] {
            squad.extend(home.players.iter().filter(|p| p.position == group).take(n).cloned());
        }
        home.players = squad;
        let human = PlayerId(999);
        home.players
            .push(Player::new(human, "Sub", Region::Northland, 19, Position::FWD, 55.0, 80.0));
        let away = team(2, 70.0);
        let cfg = MatchConfig {
            injury_chance: 0.06,
            foul_chance: 0.0,
            human_involvement: 0.0,
            ..MatchConfig::default()
        };
        for seed in 0..30 {
            let mut engine = MatchEngine::new(&home, &away, Some(human), cfg.clone(), commentary()).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let result = engine.run_to_completion(&mut rng, &mut AutoDecider).unwrap();
            assert!(result.played(human), "seed {}: bench player never came on", seed);
        }
    }

    #[test]
    fn test_clinical_finisher_converts_more() {
        let (mut home, away) = (team(1, 70.0), team(2, 70.0));
        let engine = MatchEngine::new(&home, &away, None, MatchConfig::default(), commentary()).unwrap();
        let shooter = engine.home.on_field.iter().find(|p| p.position == Position::FWD).unwrap().id;
        let plain = engine.conversion(Side::Home, shooter);

        if let Some(p) = home.player_mut(shooter) {
            p.traits.push(PlayerTrait::ClinicalFinisher);
        }
        let engine = MatchEngine::new(&home, &away, None, MatchConfig::default(), commentary()).unwrap();
        let clinical = engine.conversion(Side::Home, shooter);
        assert!(plain > MIN_CONVERSION && clinical < MAX_CONVERSION);
        assert!(clinical > plain);
    }

    #[test]
    fn test_empty_squad_fails_fast() {
        let mut home = team(1, 70.0);
        home.players.clear();
        let err = MatchEngine::new(&home, &team(2, 70.0), None, MatchConfig::default(), commentary()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptySquad { .. }));
    }

    #[test]
    fn test_record_match_updates_roster() {
        let (mut home, away) = (team(1, 70.0), team(2, 70.0));
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let result = simulate_match(&mut rng, &home, &away, &MatchConfig::default(), commentary()).unwrap();
        let date = GameDate::new(2025, 9, 1);
        let recorded = record_match(&mut home, &result, date);
        assert_eq!(recorded, result.participants().values().filter(|s| **s == Side::Home).count());

        let goals: u32 = home.players.iter().map(|p| p.season.goals).sum();
        assert_eq!(goals, result.score().0 as u32);
        for player in home.players.iter().filter(|p| result.played(p.id)) {
            assert_eq!(player.season.appearances, 1);
            assert_eq!(player.match_history().len(), 1);
        }
    }
}
