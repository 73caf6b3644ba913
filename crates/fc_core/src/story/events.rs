//! Built-in narrative catalog.

use super::types::{Effect, StoryEvent, Trigger};

fn event(id: &str, title: &str, text: &str, trigger: Trigger, effects: Vec<Effect>, once: bool) -> StoryEvent {
    StoryEvent {
        id: id.to_string(),
        title: title.to_string(),
        text: text.to_string(),
        trigger,
        effects,
        once,
    }
}

pub fn default_catalog() -> Vec<StoryEvent> {
    vec![
        event(
            "first_goal",
            "Off the mark",
            "Your first professional goal. The dressing room erupts.",
            Trigger::GoalsAtLeast(1),
            vec![Effect::Morale(10.0), Effect::Reputation(2.0)],
            true,
        ),
        event(
            "ten_goals",
            "Double figures",
            "Ten career goals. Scouts are starting to take notes.",
            Trigger::GoalsAtLeast(10),
            vec![Effect::Reputation(5.0), Effect::Morale(5.0)],
            true,
        ),
        event(
            "fifty_goals",
            "Half a century",
            "Fifty goals. Your name is chanted on the terraces.",
            Trigger::GoalsAtLeast(50),
            vec![Effect::Reputation(10.0)],
            true,
        ),
        event(
            "fiftieth_appearance",
            "Fifty not out",
            "Your fiftieth senior appearance. The club presents you with a framed shirt.",
            Trigger::AppearancesAtLeast(50),
            vec![Effect::Morale(5.0), Effect::Reputation(3.0)],
            true,
        ),
        event(
            "boot_deal",
            "Boot deal",
            "A boot manufacturer offers you a sponsorship deal.",
            Trigger::All(vec![Trigger::RatingAtLeast(75.0), Trigger::Chance(0.05)]),
            vec![Effect::Cash(5_000.0), Effect::Reputation(2.0)],
            true,
        ),
        event(
            "slump",
            "Crisis of confidence",
            "Nothing is going in. The manager takes you aside for a quiet word.",
            Trigger::All(vec![Trigger::InSeason, Trigger::FormBelow(35.0), Trigger::Chance(0.25)]),
            vec![Effect::Morale(-5.0)],
            false,
        ),
        event(
            "extra_sessions",
            "Extra sessions",
            "You stay behind after training to work on your game.",
            Trigger::All(vec![
                Trigger::MoraleBelow(40.0),
                Trigger::Not(Box::new(Trigger::Unemployed)),
                Trigger::Chance(0.2),
            ]),
            vec![Effect::Form(5.0), Effect::Stamina(-10.0)],
            false,
        ),
        event(
            "debt_pressure",
            "Debt collectors",
            "The bills are piling up. Sleep does not come easily.",
            Trigger::All(vec![Trigger::BalanceBelow(0.0), Trigger::Chance(0.3)]),
            vec![Effect::Morale(-8.0), Effect::Form(-3.0)],
            false,
        ),
        event(
            "unemployed_trial",
            "Open trial",
            "A lower-league club invites you to an open trial. Staying sharp matters.",
            Trigger::All(vec![Trigger::Unemployed, Trigger::Chance(0.15)]),
            vec![Effect::Form(4.0), Effect::Cash(-100.0)],
            false,
        ),
        event(
            "veteran_reflection",
            "Old head",
            "Younger players ask for your advice. Maybe coaching is in your future.",
            Trigger::All(vec![Trigger::AgeAtLeast(32), Trigger::Chance(0.1)]),
            vec![Effect::Morale(5.0), Effect::Reputation(1.0)],
            true,
        ),
        event(
            "late_spark",
            "Late spark",
            "A new coach spots something in your game nobody else had.",
            Trigger::All(vec![
                Trigger::Not(Box::new(Trigger::AgeAtLeast(24))),
                Trigger::RatingAtLeast(60.0),
                Trigger::Chance(0.01),
            ]),
            vec![Effect::Potential(3.0)],
            true,
        ),
    ]
}
