use fc_core::engine::{AutoDecider, Commentary, FluentCommentary, MatchEngine, MatchStep, PlainCommentary};
use fc_core::{generate_world, simulate_match, MatchResult, PlayerId, SimConfig, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use std::rc::Rc;

fn small_world(seed: u64) -> (World, SimConfig) {
    let mut cfg = SimConfig::default();
    cfg.world.tiers_per_region = Some(1);
    cfg.world.free_agents_per_region = 0;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (generate_world(&mut rng, &cfg), cfg)
}

fn event_log_digest(seed: u64) -> String {
    let (world, cfg) = small_world(7);
    let (home, away) = (&world.clubs[0], &world.clubs[1]);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let result = simulate_match(&mut rng, home, away, &cfg.matches, Rc::new(PlainCommentary)).unwrap();

    let log = serde_json::to_vec(result.events()).unwrap();
    let mut hasher = Sha256::new();
    hasher.update(&log);
    hasher.update([result.score().0, result.score().1]);
    hasher.finalize().iter().map(|b| format!("{:02x}", b)).collect()
}

#[test]
fn same_seed_same_event_log_hash() {
    for seed in [1, 42, 123_456] {
        assert_eq!(event_log_digest(seed), event_log_digest(seed));
    }
}

#[test]
fn different_seeds_diverge() {
    let digests: Vec<String> = (0..5).map(event_log_digest).collect();
    assert!(digests.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn stepwise_and_batch_runs_agree() {
    let (world, cfg) = small_world(3);
    let (home, away) = (&world.clubs[0], &world.clubs[1]);

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let batch = simulate_match(&mut rng, home, away, &cfg.matches, Rc::new(PlainCommentary)).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut engine = MatchEngine::new(home, away, None, cfg.matches.clone(), Rc::new(PlainCommentary)).unwrap();
    let mut minutes = 0;
    let stepped = loop {
        match engine.advance(&mut rng).unwrap() {
            MatchStep::Minute { .. } => minutes += 1,
            MatchStep::AwaitingDecision(_) => panic!("no human on the pitch"),
            MatchStep::FullTime(result) => break result,
        }
    };
    assert_eq!(minutes, cfg.matches.minutes as usize);
    assert_eq!(stepped, batch);

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut engine = MatchEngine::new(home, away, None, cfg.matches.clone(), Rc::new(PlainCommentary)).unwrap();
    assert_eq!(engine.run_to_completion(&mut rng, &mut AutoDecider).unwrap(), batch);
}

type Outline = (Vec<(u8, String, Option<PlayerId>, Option<PlayerId>)>, (u8, u8), Vec<(PlayerId, f32)>);

/// Everything about a match except the rendered text.
fn outline(result: &MatchResult) -> Outline {
    let events = result
        .events()
        .iter()
        .map(|e| (e.minute, format!("{:?}", e.event_type), e.actor, e.secondary))
        .collect();
    let ratings = result.ratings().iter().map(|(id, r)| (*id, *r)).collect();
    (events, result.score(), ratings)
}

#[test]
fn commentary_language_does_not_change_the_match() {
    let (world, cfg) = small_world(5);
    let (home, away) = (&world.clubs[0], &world.clubs[1]);
    let human = home
        .players
        .iter()
        .max_by(|a, b| a.overall_rating().total_cmp(&b.overall_rating()))
        .map(|p| p.id);
    let korean: Rc<dyn Commentary> = Rc::new(FluentCommentary::new(&["ko-KR"]).unwrap());

    for seed in 0..20 {
        let play = |commentary: Rc<dyn Commentary>| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut engine = MatchEngine::new(home, away, human, cfg.matches.clone(), commentary).unwrap();
            engine.run_to_completion(&mut rng, &mut AutoDecider).unwrap()
        };
        let plain = play(Rc::new(PlainCommentary));
        let localized = play(Rc::clone(&korean));
        assert_eq!(outline(&plain), outline(&localized), "seed {}", seed);
        assert_eq!(plain.decisions_taken(), localized.decisions_taken());
        assert_ne!(
            plain.events().iter().map(|e| e.text.as_str()).collect::<Vec<_>>(),
            localized.events().iter().map(|e| e.text.as_str()).collect::<Vec<_>>()
        );
    }
}
