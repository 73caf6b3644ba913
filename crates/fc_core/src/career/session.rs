//! The weekly orchestrator. A `CareerSession` owns everything one career
//! needs, so several sessions can run side by side.

use super::offers::{merge_offers, scout_offers};
use super::season::close_season;
use super::summary::{MatchReport, WeeklySummary};
use crate::config::SimConfig;
use crate::economy::{living_cost, negotiate, weekly_statement, MatchPerformance, TransferOffer};
use crate::engine::{
    record_match, select_squad, simulate_match, Commentary, DecisionMaker, MatchEngine, PlainCommentary,
};
use crate::error::{ConfigError, CoreError, Result};
use crate::generator::{generate_world, generate_youth, starter_contract};
use crate::growth::apply_week;
use crate::league::{apply_result, schedule_season, standings, StandingRow};
use crate::models::{Agent, ClubId, Contract, Fixture, FormResult, GameDate, MatchResult, Player, PlayerId, Team, World};
use crate::story::{StoryBeat, Storyteller};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Contract length of the debut deal.
const DEBUT_CONTRACT_YEARS: u8 = 2;

/// Persistable career state. The calendar cursor is not part of it; the
/// host stores the date itself and hands it back to [`CareerSession::restore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSnapshot {
    pub world: World,
    pub human: PlayerId,
    pub balance: f64,
    pub pending_offers: Vec<TransferOffer>,
    pub storyteller: Storyteller,
    pub config: SimConfig,
}

#[derive(Debug)]
pub struct CareerSession {
    world: World,
    human: PlayerId,
    date: GameDate,
    rng: ChaCha8Rng,
    config: SimConfig,
    balance: f64,
    pending_offers: Vec<TransferOffer>,
    storyteller: Storyteller,
    commentary: Rc<dyn Commentary>,
}

/// What the week's fixtures meant for the human player.
#[derive(Default)]
struct Matchweek {
    report: Option<MatchReport>,
    selected: Option<bool>,
    performance: MatchPerformance,
    outcome: Option<FormResult>,
    background: usize,
}

impl CareerSession {
    /// Generates a world and debuts the human as an academy graduate at a
    /// random club of the lowest tier.
    pub fn start(seed: u64, config: SimConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut world = generate_world(&mut rng, &config);

        let lowest_tier = world
            .leagues
            .iter()
            .map(|l| l.tier)
            .max()
            .ok_or_else(|| ConfigError::InvalidConfig("world has no leagues".into()))?;
        let candidates: Vec<(ClubId, _)> = world
            .clubs
            .iter()
            .filter(|c| world.league(c.league_id).map_or(false, |l| l.tier == lowest_tier))
            .map(|c| (c.id, c.region))
            .collect();
        let &(club_id, region) = candidates
            .choose(&mut rng)
            .ok_or_else(|| ConfigError::InvalidConfig("lowest tier has no clubs".into()))?;

        let id = world.allocate_player_id();
        let mut human = generate_youth(&mut rng, id, region, lowest_tier, None, &config.world, &config.economy);
        let mut agent = Agent::new(region.random_name(&mut rng), config.career.starting_agent_level);
        agent.sign_client(id);
        human.agent = Some(agent);
        human.contract = Some(starter_contract(&human, club_id, DEBUT_CONTRACT_YEARS, &config));
        log::info!("{} ({}, {}) debuts at {}", human.name, human.position, human.age, club_id);
        world
            .club_mut(club_id)
            .ok_or(ConfigError::UnknownClub(club_id))?
            .add_player(human);

        let date = GameDate::preseason(config.career.start_year);
        for league in &mut world.leagues {
            schedule_season(league, date.season())?;
        }

        Ok(Self {
            world,
            human: id,
            date,
            rng,
            balance: config.career.starting_balance,
            config,
            pending_offers: Vec::new(),
            storyteller: Storyteller::default(),
            commentary: Rc::new(PlainCommentary),
        })
    }

    /// Rebuilds a session from a snapshot. `date` is the cursor the host
    /// persisted alongside it; `seed` restarts the random stream.
    pub fn restore(snapshot: CareerSnapshot, date: GameDate, seed: u64) -> Result<Self> {
        snapshot.config.validate()?;
        if snapshot.world.player(snapshot.human).is_none() {
            return Err(CoreError::PlayerNotFound(snapshot.human));
        }
        Ok(Self {
            world: snapshot.world,
            human: snapshot.human,
            date,
            rng: ChaCha8Rng::seed_from_u64(seed),
            config: snapshot.config,
            balance: snapshot.balance,
            pending_offers: snapshot.pending_offers,
            storyteller: snapshot.storyteller,
            commentary: Rc::new(PlainCommentary),
        })
    }

    pub fn snapshot(&self) -> CareerSnapshot {
        CareerSnapshot {
            world: self.world.clone(),
            human: self.human,
            balance: self.balance,
            pending_offers: self.pending_offers.clone(),
            storyteller: self.storyteller.clone(),
            config: self.config.clone(),
        }
    }

    pub fn set_commentary(&mut self, commentary: Rc<dyn Commentary>) {
        self.commentary = commentary;
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn human_id(&self) -> PlayerId {
        self.human
    }

    pub fn human(&self) -> Option<&Player> {
        self.world.player(self.human)
    }

    pub fn human_club(&self) -> Option<&Team> {
        self.human()
            .and_then(|p| p.club_id())
            .and_then(|id| self.world.club(id))
    }

    /// Table of the league the human's club plays in.
    pub fn human_league_table(&self) -> Vec<StandingRow> {
        self.human_club()
            .and_then(|club| self.world.league_of_club(club.id))
            .map(|league| standings(league, &self.world.clubs))
            .unwrap_or_default()
    }

    pub fn date(&self) -> GameDate {
        self.date
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn pending_offers(&self) -> &[TransferOffer] {
        &self.pending_offers
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn storyteller(&self) -> &Storyteller {
        &self.storyteller
    }

    /// Simulates one week and moves the calendar on. Human decisions in
    /// this week's match go to `decider`.
    pub fn advance_week<D>(&mut self, decider: &mut D) -> Result<WeeklySummary>
    where
        D: DecisionMaker + ?Sized,
    {
        let date = self.date;
        let cfg = &self.config;
        let mut summary = WeeklySummary::new(date);

        for player in self.world.active_players_mut() {
            player.adjust_stamina(cfg.career.stamina_recovery);
            player.injury_weeks = player.injury_weeks.saturating_sub(1);
        }

        // Charged on the reputation the week starts with.
        let mut charged = 0.0;
        if let Some(human) = self.world.player_mut(self.human).filter(|p| p.is_active()) {
            if human.contract.is_none() {
                let decayed = human.overall_rating() - cfg.career.unemployed_decay;
                human.set_overall_rating(decayed);
            }
            summary.injured = human.injury_weeks > 0;
            charged = living_cost(human.reputation, &cfg.career);
            self.balance -= charged;
        }

        let week = if date.is_in_season() {
            play_fixtures(
                &mut self.world,
                &mut self.rng,
                cfg,
                &self.commentary,
                self.human,
                date,
                decider,
            )?
        } else {
            Matchweek::default()
        };
        summary.background_matches = week.background;
        summary.selected = week.selected;
        summary.human_match = week.report;

        if let Some(human) = self.world.player_mut(self.human).filter(|p| p.is_active()) {
            if week.performance.appeared {
                human.adjust_stamina(-cfg.career.match_fatigue);
                human.adjust_reputation(cfg.career.reputation_per_goal * week.performance.goals as f32);
                match week.outcome {
                    Some(FormResult::Win) => human.adjust_morale(cfg.career.result_morale),
                    Some(FormResult::Loss) => human.adjust_morale(-cfg.career.result_morale),
                    _ => {}
                }
            } else if week.selected == Some(false) && human.injury_weeks == 0 {
                human.adjust_morale(-cfg.career.non_selection_morale);
            }
            let mut statement = weekly_statement(human, week.performance, &cfg.career);
            statement.living_cost = charged;
            self.balance += statement.income() - statement.agent_commission;
            summary.statement = statement;
        }

        for club in &mut self.world.clubs {
            club.players = std::mem::take(&mut club.players)
                .into_iter()
                .map(|p| apply_week(p, &cfg.growth))
                .collect();
        }
        self.world.free_agents = std::mem::take(&mut self.world.free_agents)
            .into_iter()
            .map(|p| apply_week(p, &cfg.growth))
            .collect();

        if date.is_transfer_window() {
            if let Some(human) = self.world.player(self.human) {
                let fresh = scout_offers(&mut self.rng, &self.world, human, cfg);
                summary.new_offers = merge_offers(&mut self.pending_offers, fresh, cfg.career.max_offers);
            }
        }

        summary.story = self.tell_story(date);

        let next = date.next_week();
        if date.closes_season(&next) {
            let report = close_season(&mut self.rng, &mut self.world, self.human, &self.config, date.season());
            summary.retired = report.retired.contains(&self.human);
            summary.season = Some(report);
        }
        if next.is_season_start() {
            for league in &mut self.world.leagues {
                if league.season != Some(next.season()) {
                    schedule_season(league, next.season())?;
                }
            }
        }
        if date.is_transfer_window() && !next.is_transfer_window() && !self.pending_offers.is_empty() {
            log::debug!("transfer window closed, {} offer(s) expired", self.pending_offers.len());
            self.pending_offers.clear();
        }

        self.date = next;
        summary.balance = self.balance;
        Ok(summary)
    }

    fn tell_story(&mut self, date: GameDate) -> Vec<StoryBeat> {
        match self.world.player_mut(self.human).filter(|p| p.is_active()) {
            Some(human) => {
                let employed = human.contract.is_some();
                self.storyteller
                    .tick(&mut self.rng, human, &mut self.balance, employed, date)
            }
            None => Vec::new(),
        }
    }

    /// Signs the pending offer at `index`. The agent negotiates the final
    /// terms; the signing bonus is paid out of the club's budget.
    pub fn accept_offer(&mut self, index: usize) -> Result<Contract> {
        let offer = self
            .pending_offers
            .get(index)
            .cloned()
            .ok_or(CoreError::OfferNotFound(index))?;
        if self.world.club(offer.club_id).is_none() {
            return Err(ConfigError::UnknownClub(offer.club_id).into());
        }
        let player = self
            .world
            .player(self.human)
            .filter(|p| p.is_active())
            .ok_or(CoreError::PlayerNotFound(self.human))?;
        let contract = negotiate(&mut self.rng, &offer.contract, player.agent.as_ref(), &self.config.economy);
        let from = player.club_id();

        self.world.move_player(self.human, Some(offer.club_id));
        if let Some(player) = self.world.player_mut(self.human) {
            player.contract = Some(contract);
            log::info!(
                "{} joins {} from {} for {} year(s)",
                player.name,
                offer.club_name,
                from.map_or_else(|| "free agency".to_string(), |c| c.to_string()),
                contract.years_remaining
            );
        }
        if let Some(club) = self.world.club_mut(offer.club_id) {
            club.budget -= contract.signing_bonus;
        }
        self.balance += contract.signing_bonus;
        self.pending_offers.clear();
        Ok(contract)
    }

    pub fn decline_offers(&mut self) {
        self.pending_offers.clear();
    }

    /// Pays for the next agent level. False when the player cannot afford
    /// it, has no agent or the agent is already at the top level.
    pub fn upgrade_agent(&mut self) -> bool {
        let base_cost = self.config.career.agent_upgrade_base_cost;
        let Some(agent) = self
            .world
            .player_mut(self.human)
            .filter(|p| p.is_active())
            .and_then(|p| p.agent.as_mut())
        else {
            return false;
        };
        let cost = agent.upgrade_cost(base_cost);
        if self.balance < cost || !agent.upgrade() {
            return false;
        }
        self.balance -= cost;
        log::info!("agent {} upgraded to level {} for {:.0}", agent.name, agent.level(), cost);
        true
    }
}

fn fixture_clubs(world: &World, fixture: &Fixture) -> Option<(usize, usize)> {
    let home = world.clubs.iter().position(|c| c.id == fixture.home)?;
    let away = world.clubs.iter().position(|c| c.id == fixture.away)?;
    Some((home, away))
}

/// Plays every league's next matchday. The human's fixture goes through
/// the interactive engine; the rest are simulated in the background.
fn play_fixtures<D>(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    cfg: &SimConfig,
    commentary: &Rc<dyn Commentary>,
    human: PlayerId,
    date: GameDate,
    decider: &mut D,
) -> Result<Matchweek>
where
    D: DecisionMaker + ?Sized,
{
    let human_club = world.player(human).filter(|p| p.is_active()).and_then(|p| p.club_id());
    let mut week = Matchweek::default();

    for li in 0..world.leagues.len() {
        let Some(matchday) = world.leagues[li].next_matchday().cloned() else {
            continue;
        };
        for fixture in &matchday.fixtures {
            let Some((h, a)) = fixture_clubs(world, fixture) else {
                log::warn!("skipping fixture with unknown club: {:?}", fixture);
                continue;
            };
            let result = match human_club.filter(|c| fixture.involves(*c)) {
                Some(club) => {
                    let own = if fixture.home == club { h } else { a };
                    let picked = select_squad(&world.clubs[own], world.clubs[own].tactics.formation)?
                        .contains(human);
                    week.selected = Some(picked);
                    let human = picked.then_some(human);
                    let mut engine = MatchEngine::new(
                        &world.clubs[h],
                        &world.clubs[a],
                        human,
                        cfg.matches.clone(),
                        Rc::clone(commentary),
                    )?;
                    let result = engine.run_to_completion(rng, decider)?;
                    if let Some(human) = human {
                        week.report = Some(report_for(world, &result, club, human));
                        week.performance = MatchPerformance {
                            appeared: result.played(human),
                            goals: result.goals_by(human),
                            clean_sheet: result.side_of(club).map_or(false, |s| result.kept_clean_sheet(s)),
                        };
                        week.outcome = result.outcome_for(club);
                    }
                    result
                }
                None => {
                    week.background += 1;
                    simulate_match(rng, &world.clubs[h], &world.clubs[a], &cfg.matches, Rc::clone(commentary))?
                }
            };
            record_match(&mut world.clubs[h], &result, date);
            record_match(&mut world.clubs[a], &result, date);
            apply_result(&mut world.clubs, &result)?;
        }
        world.leagues[li].current_matchday += 1;
    }
    Ok(week)
}

fn report_for(world: &World, result: &MatchResult, club: ClubId, human: PlayerId) -> MatchReport {
    let opponent = result.opponent_of(club).unwrap_or(club);
    let (goals_for, goals_against) = result.goals_for(club).unwrap_or_default();
    let commentary = result
        .events()
        .iter()
        .filter(|e| e.is_goal() || e.actor == Some(human) || e.secondary == Some(human))
        .map(|e| e.text.clone())
        .collect();
    MatchReport {
        opponent,
        opponent_name: world.club(opponent).map_or_else(String::new, |c| c.name.clone()),
        home: result.home_id() == club,
        goals_for,
        goals_against,
        played: result.played(human),
        rating: result.rating_of(human),
        goals: result.goals_by(human),
        assists: result.assists_by(human),
        commentary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AutoDecider;
    use crate::models::{Position, RATING_MIN};

    fn small_config() -> SimConfig {
        let mut cfg = SimConfig::default();
        cfg.world.tiers_per_region = Some(2);
        cfg.world.free_agents_per_region = 5;
        cfg
    }

    /// Session without narrative events, so weekly effects can be measured.
    fn quiet_session(seed: u64) -> CareerSession {
        let mut session = CareerSession::start(seed, small_config()).unwrap();
        session.storyteller = Storyteller::new(Vec::new());
        session
    }

    fn human_mut(session: &mut CareerSession) -> &mut Player {
        let id = session.human;
        session.world.player_mut(id).unwrap()
    }

    /// Holds the human at the peak age so growth and decay are both zero.
    fn freeze_growth(session: &mut CareerSession) {
        let peak = session.config.growth.peak_age;
        let human = human_mut(session);
        human.traits.clear();
        human.age = peak;
    }

    fn play_until_season(session: &mut CareerSession) {
        while !session.date().is_in_season() {
            session.advance_week(&mut AutoDecider).unwrap();
        }
    }

    /// Makes the human the best forward of the club by a distance.
    fn make_star(session: &mut CareerSession) {
        let human = human_mut(session);
        human.position = Position::FWD;
        human.set_potential(99.0);
        human.set_overall_rating(99.0);
    }

    #[test]
    fn test_start_places_human_in_lowest_tier() {
        let session = CareerSession::start(3, small_config()).unwrap();
        let human = session.human().unwrap();
        assert!(human.age >= 16 && human.age <= 19);
        assert!(human.agent.is_some());
        let club = session.human_club().unwrap();
        assert_eq!(human.club_id(), Some(club.id));
        assert_eq!(session.world().league(club.league_id).unwrap().tier, 2);
        assert!(session.world().leagues.iter().all(|l| !l.fixtures.is_empty()));
        assert_eq!(session.date(), GameDate::preseason(session.config().career.start_year));
    }

    #[test]
    fn test_preseason_week_has_no_matches() {
        let mut session = CareerSession::start(3, small_config()).unwrap();
        let balance = session.balance();
        let summary = session.advance_week(&mut AutoDecider).unwrap();
        assert!(summary.human_match.is_none());
        assert_eq!(summary.background_matches, 0);
        if summary.story.is_empty() {
            assert!((summary.balance - (balance + summary.statement.net())).abs() < 1e-6);
        }
        assert_eq!(session.date(), GameDate::preseason(session.config().career.start_year).next_week());
    }

    #[test]
    fn test_in_season_week_plays_every_fixture() {
        let mut session = CareerSession::start(9, small_config()).unwrap();
        while !session.date().is_in_season() {
            session.advance_week(&mut AutoDecider).unwrap();
        }
        let fixtures: usize = session
            .world()
            .leagues
            .iter()
            .filter_map(|l| l.next_matchday())
            .map(|m| m.fixtures.len())
            .sum();
        let summary = session.advance_week(&mut AutoDecider).unwrap();
        let human_fixture = usize::from(summary.selected.is_some());
        assert_eq!(summary.background_matches + human_fixture, fixtures);
        let table = session.human_league_table();
        assert!(table.iter().all(|row| row.stats.played == 1));
    }

    #[test]
    fn test_stamina_recovery_is_capped() {
        let mut session = quiet_session(4);
        let recovery = session.config.career.stamina_recovery;
        human_mut(&mut session).adjust_stamina(-100.0);
        human_mut(&mut session).adjust_stamina(100.0 - recovery / 2.0);
        session.advance_week(&mut AutoDecider).unwrap();
        assert_eq!(session.human().unwrap().stamina(), 100.0);

        human_mut(&mut session).adjust_stamina(-100.0);
        session.advance_week(&mut AutoDecider).unwrap();
        assert!((session.human().unwrap().stamina() - recovery).abs() < 1e-4);
    }

    #[test]
    fn test_unemployed_human_loses_decay_down_to_floor() {
        let mut session = quiet_session(6);
        freeze_growth(&mut session);
        let id = session.human;
        session.world.move_player(id, None);
        let human = human_mut(&mut session);
        human.contract = None;
        human.set_potential(99.0);
        human.set_overall_rating(50.0);

        let decay = session.config.career.unemployed_decay;
        session.advance_week(&mut AutoDecider).unwrap();
        assert!((session.human().unwrap().overall_rating() - (50.0 - decay)).abs() < 1e-4);

        human_mut(&mut session).set_overall_rating(RATING_MIN);
        session.advance_week(&mut AutoDecider).unwrap();
        assert_eq!(session.human().unwrap().overall_rating(), RATING_MIN);
    }

    #[test]
    fn test_left_out_human_loses_morale() {
        let mut session = quiet_session(12);
        play_until_season(&mut session);
        let human = human_mut(&mut session);
        human.position = Position::FWD;
        human.set_overall_rating(RATING_MIN);
        let morale = human.morale();

        let summary = session.advance_week(&mut AutoDecider).unwrap();
        assert_eq!(summary.selected, Some(false));
        assert!(summary.human_match.is_none());
        let expected = (morale - session.config.career.non_selection_morale).max(0.0);
        assert!((session.human().unwrap().morale() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_injured_human_is_not_penalised_for_missing_out() {
        let mut session = quiet_session(12);
        play_until_season(&mut session);
        let human = human_mut(&mut session);
        human.injury_weeks = 3;
        let morale = human.morale();

        let summary = session.advance_week(&mut AutoDecider).unwrap();
        assert!(summary.injured);
        assert_eq!(summary.selected, Some(false));
        assert_eq!(session.human().unwrap().morale(), morale);
        assert_eq!(session.human().unwrap().injury_weeks, 2);
    }

    #[test]
    fn test_appearance_costs_fatigue_and_updates_form() {
        let mut session = quiet_session(15);
        play_until_season(&mut session);
        make_star(&mut session);
        let before = session.human().unwrap().clone();

        let summary = session.advance_week(&mut AutoDecider).unwrap();
        assert_eq!(summary.selected, Some(true));
        let report = summary.human_match.unwrap();
        assert!(report.played);
        let after = session.human().unwrap();
        let expected_stamina = (before.stamina() + session.config.career.stamina_recovery).min(100.0)
            - session.config.career.match_fatigue;
        assert!((after.stamina() - expected_stamina).abs() < 1e-4);

        let mut expected = before.clone();
        expected.update_form(report.rating.unwrap());
        assert!((after.form() - expected.form()).abs() < 1e-4);
        assert!(summary.statement.appearance_bonus > 0.0);
    }

    #[test]
    fn test_scoring_week_statement_matches_balance() {
        let mut session = quiet_session(4);
        play_until_season(&mut session);
        make_star(&mut session);

        for _ in 0..30 {
            let reputation = session.human().unwrap().reputation;
            let balance = session.balance();
            let summary = session.advance_week(&mut AutoDecider).unwrap();
            assert!((summary.balance - balance - summary.statement.net()).abs() < 1e-6);
            assert_eq!(summary.statement.living_cost, living_cost(reputation, &session.config.career));
            if summary.human_match.map_or(false, |m| m.goals > 0) {
                assert!(session.human().unwrap().reputation > reputation);
                return;
            }
        }
        panic!("the star forward never scored");
    }

    #[test]
    fn test_offers_accept_and_decline() {
        let mut cfg = small_config();
        cfg.career.offer_chance = 1.0;
        cfg.economy.offer_threshold = 0.0;
        let mut session = CareerSession::start(21, cfg).unwrap();
        assert!(matches!(session.accept_offer(0), Err(CoreError::OfferNotFound(0))));

        let summary = session.advance_week(&mut AutoDecider).unwrap();
        if summary.new_offers.is_empty() {
            return;
        }
        let target = session.pending_offers()[0].club_id;
        let before = session.balance();
        let contract = session.accept_offer(0).unwrap();
        assert_eq!(contract.club_id, target);
        assert_eq!(session.human_club().unwrap().id, target);
        assert!(session.pending_offers().is_empty());
        assert!(session.balance() >= before);

        session.decline_offers();
        assert!(session.pending_offers().is_empty());
    }

    #[test]
    fn test_agent_upgrade_needs_funds() {
        let mut session = CareerSession::start(5, small_config()).unwrap();
        session.balance = 0.0;
        assert!(!session.upgrade_agent());
        session.balance = 1e9;
        let level = session.human().unwrap().agent.as_ref().unwrap().level();
        assert!(session.upgrade_agent());
        assert_eq!(session.human().unwrap().agent.as_ref().unwrap().level(), level + 1);
        assert!(session.balance() < 1e9);
    }

    #[test]
    fn test_snapshot_restore_keeps_state_but_not_date() {
        let mut session = CareerSession::start(8, small_config()).unwrap();
        for _ in 0..3 {
            session.advance_week(&mut AutoDecider).unwrap();
        }
        let snapshot = session.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: CareerSnapshot = serde_json::from_str(&json).unwrap();
        let date = session.date();
        let resumed = CareerSession::restore(restored, date, 99).unwrap();
        assert_eq!(resumed.date(), date);
        assert_eq!(resumed.human_id(), session.human_id());
        assert_eq!(resumed.world().player_count(), session.world().player_count());
        assert_eq!(resumed.human().unwrap().name, session.human().unwrap().name);
        assert!((resumed.balance() - session.balance()).abs() < 1e-9);
    }
}
