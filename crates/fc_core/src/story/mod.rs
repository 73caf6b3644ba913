//! Narrative events: data-driven triggers and effects evaluated once per
//! week against the human player's career.

mod conditions;
mod effects;
pub mod events;
pub mod types;

pub use events::default_catalog;
pub use types::{Effect, StoryBeat, StoryContext, StoryEvent, Trigger};

use crate::error::ConfigError;
use crate::models::{GameDate, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Catalog plus the ids of once-only events that have already fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storyteller {
    catalog: Vec<StoryEvent>,
    #[serde(default)]
    fired: BTreeSet<String>,
}

impl Default for Storyteller {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}

impl Storyteller {
    pub fn new(catalog: Vec<StoryEvent>) -> Self {
        Self {
            catalog,
            fired: BTreeSet::new(),
        }
    }

    /// Catalog from YAML (a list of events).
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let catalog: Vec<StoryEvent> = serde_yaml::from_str(yaml)?;
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &[StoryEvent] {
        &self.catalog
    }

    pub fn fired(&self) -> &BTreeSet<String> {
        &self.fired
    }

    /// Evaluates every event in catalog order, applying the effects of those
    /// that fire. Triggers see the state before this week's effects.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        player: &mut Player,
        balance: &mut f64,
        employed: bool,
        date: GameDate,
    ) -> Vec<StoryBeat> {
        let ctx = StoryContext {
            player: &*player,
            balance: *balance,
            employed,
            date,
        };
        let firing: Vec<usize> = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, event)| !(event.once && self.fired.contains(&event.id)))
            .filter(|(_, event)| event.trigger.evaluate(&ctx, rng))
            .map(|(i, _)| i)
            .collect();

        let mut beats = Vec::with_capacity(firing.len());
        for i in firing {
            let event = &self.catalog[i];
            for effect in &event.effects {
                effect.apply(player, balance);
            }
            if event.once {
                self.fired.insert(event.id.clone());
            }
            log::debug!("story event fired: {}", event.id);
            beats.push(StoryBeat::from(event));
        }
        beats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::test_player;
    use crate::models::Position;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_once_only_events_fire_once() {
        let mut teller = Storyteller::default();
        let mut player = test_player(1, Position::FWD, 60.0);
        player.career.goals = 1;
        let mut balance = 500.0;
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let date = GameDate::new(2025, 9, 1);

        let first = teller.tick(&mut rng, &mut player, &mut balance, true, date);
        assert!(first.iter().any(|b| b.id == "first_goal"));
        let again = teller.tick(&mut rng, &mut player, &mut balance, true, date);
        assert!(again.iter().all(|b| b.id != "first_goal"));
        assert!(teller.fired().contains("first_goal"));
    }

    #[test]
    fn test_yaml_catalog() {
        let yaml = r#"
- id: payday
  title: Payday
  text: A bonus lands.
  trigger: in_season
  effects:
    - !cash 250.0
"#;
        let mut teller = Storyteller::from_yaml_str(yaml).unwrap();
        let mut player = test_player(1, Position::DEF, 60.0);
        let mut balance = 0.0;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let beats = teller.tick(&mut rng, &mut player, &mut balance, true, GameDate::new(2025, 10, 1));
        assert_eq!(beats.len(), 1);
        assert_eq!(balance, 250.0);
        // repeatable event
        teller.tick(&mut rng, &mut player, &mut balance, true, GameDate::new(2025, 10, 2));
        assert_eq!(balance, 500.0);
    }
}
