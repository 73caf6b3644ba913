//! Trigger evaluation.

use super::types::{StoryContext, Trigger};
use crate::math::bernoulli;
use rand::Rng;

impl Trigger {
    /// `All` and `Any` short-circuit, so nested `Chance` rolls are only drawn
    /// when reached.
    pub fn evaluate<R: Rng + ?Sized>(&self, ctx: &StoryContext<'_>, rng: &mut R) -> bool {
        let player = ctx.player;
        match self {
            Trigger::GoalsAtLeast(n) => player.career.goals >= *n,
            Trigger::AppearancesAtLeast(n) => player.career.appearances >= *n,
            Trigger::RatingAtLeast(r) => player.overall_rating() >= *r,
            Trigger::FormBelow(f) => player.form() < *f,
            Trigger::MoraleBelow(m) => player.morale() < *m,
            Trigger::BalanceBelow(b) => ctx.balance < *b,
            Trigger::Unemployed => !ctx.employed,
            Trigger::AgeAtLeast(a) => player.age >= *a,
            Trigger::InSeason => ctx.date.is_in_season(),
            Trigger::Chance(p) => bernoulli(rng, *p),
            Trigger::All(triggers) => triggers.iter().all(|t| t.evaluate(ctx, rng)),
            Trigger::Any(triggers) => triggers.iter().any(|t| t.evaluate(ctx, rng)),
            Trigger::Not(inner) => !inner.evaluate(ctx, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::test_player;
    use crate::models::{GameDate, Position};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_composite_triggers() {
        let mut player = test_player(1, Position::FWD, 70.0);
        player.career.goals = 12;
        let ctx = StoryContext {
            player: &player,
            balance: -50.0,
            employed: true,
            date: GameDate::new(2025, 9, 1),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert!(Trigger::GoalsAtLeast(10).evaluate(&ctx, &mut rng));
        assert!(!Trigger::GoalsAtLeast(13).evaluate(&ctx, &mut rng));
        assert!(Trigger::All(vec![Trigger::InSeason, Trigger::BalanceBelow(0.0)]).evaluate(&ctx, &mut rng));
        assert!(Trigger::Any(vec![Trigger::Unemployed, Trigger::RatingAtLeast(65.0)]).evaluate(&ctx, &mut rng));
        assert!(Trigger::Not(Box::new(Trigger::Unemployed)).evaluate(&ctx, &mut rng));
        assert!(!Trigger::Chance(0.0).evaluate(&ctx, &mut rng));
        assert!(Trigger::Chance(1.0).evaluate(&ctx, &mut rng));
        // empty All is vacuously true, empty Any false
        assert!(Trigger::All(Vec::new()).evaluate(&ctx, &mut rng));
        assert!(!Trigger::Any(Vec::new()).evaluate(&ctx, &mut rng));
    }
}
