//! Effect application.

use super::types::Effect;
use crate::models::Player;

impl Effect {
    /// Bounded stats clamp through the player's own setters; cash is not
    /// clamped.
    pub fn apply(&self, player: &mut Player, balance: &mut f64) {
        match *self {
            Effect::Morale(delta) => player.adjust_morale(delta),
            Effect::Form(delta) => player.adjust_form(delta),
            Effect::Reputation(delta) => player.adjust_reputation(delta),
            Effect::Stamina(delta) => player.adjust_stamina(delta),
            Effect::Cash(amount) => *balance += amount,
            Effect::Potential(delta) => player.set_potential(player.potential() + delta),
        }
    }
}
