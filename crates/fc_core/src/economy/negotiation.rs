use crate::config::EconomyConfig;
use crate::math::clamp_normal;
use crate::models::{Agent, Contract};
use rand::Rng;

/// Per-negotiation noise around 1.0, clamped to the configured band.
pub fn negotiation_variance<R: Rng + ?Sized>(rng: &mut R, cfg: &EconomyConfig) -> f32 {
    clamp_normal(rng, 1.0, cfg.negotiation_sigma, cfg.negotiation_min, cfg.negotiation_max)
}

/// Scales every monetary term by `skill * variance`. Contract length and club are unchanged.
pub fn apply_negotiation(offer: &Contract, negotiation_skill: f32, variance: f32) -> Contract {
    let factor = (negotiation_skill.max(0.0) * variance.max(0.0)) as f64;
    offer.scaled(factor)
}

/// Negotiates through the player's agent. Unrepresented players take the offer as tabled.
pub fn negotiate<R: Rng + ?Sized>(
    rng: &mut R,
    offer: &Contract,
    agent: Option<&Agent>,
    cfg: &EconomyConfig,
) -> Contract {
    match agent {
        Some(agent) => {
            let variance = negotiation_variance(rng, cfg);
            log::debug!(
                "agent {} negotiating: skill {:.3} variance {:.3}",
                agent.name,
                agent.negotiation_skill,
                variance
            );
            apply_negotiation(offer, agent.negotiation_skill, variance)
        }
        None => *offer,
    }
}
