use crate::config::EconomyConfig;
use crate::models::Player;

const VALUE_SCALE: f64 = 1000.0;
const VALUE_EXPONENT: f64 = 2.5;
/// Last age that still earns the potential premium.
const PREMIUM_AGE_LIMIT: u8 = 26;
const POTENTIAL_PREMIUM_DIVISOR: f64 = 50.0;
const DECLINE_PER_YEAR: f64 = 0.1;
const DECLINE_FLOOR: f64 = 0.1;
const REPUTATION_BASE: f64 = 0.5;
const CONTRACT_YEAR_PREMIUM: f64 = 0.1;

/// `1000 * (rating/10)^2.5`, scaled by age and reputation, floored.
pub fn market_value(player: &Player, cfg: &EconomyConfig) -> f64 {
    let rating = player.overall_rating() as f64;
    let base = VALUE_SCALE * (rating / 10.0).powf(VALUE_EXPONENT);

    let age_factor = if player.age <= PREMIUM_AGE_LIMIT {
        1.0 + (player.potential() as f64 - rating).max(0.0) / POTENTIAL_PREMIUM_DIVISOR
    } else {
        (1.0 - (player.age - PREMIUM_AGE_LIMIT) as f64 * DECLINE_PER_YEAR).max(DECLINE_FLOOR)
    };
    let reputation_factor = REPUTATION_BASE + player.reputation as f64 / 100.0;

    (base * age_factor * reputation_factor).max(cfg.min_market_value)
}

/// Weekly wage for a contract of `years` on a player worth `value`.
pub fn weekly_wage(value: f64, years: u8, cfg: &EconomyConfig) -> f64 {
    let years = years.max(1) as f64;
    let wage = value * cfg.wage_ratio * (1.0 + (years - 1.0) * CONTRACT_YEAR_PREMIUM);
    wage.max(cfg.min_wage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Region;
    use crate::models::{PlayerId, Position};

    fn player(age: u8, rating: f32, potential: f32, reputation: f32) -> Player {
        let mut p = Player::new(PlayerId(1), "V", Region::Northland, age, Position::MID, rating, potential);
        p.reputation = reputation;
        p
    }

    #[test]
    fn test_base_value_formula() {
        let cfg = EconomyConfig::default();
        // age 26, no potential gap, reputation 50 -> factors 1.0 * 1.0
        let p = player(26, 80.0, 80.0, 50.0);
        let expected = 1000.0 * 8.0f64.powf(2.5);
        assert!((market_value(&p, &cfg) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_young_potential_premium_and_veteran_decline() {
        let cfg = EconomyConfig::default();
        let prospect = player(19, 70.0, 90.0, 50.0);
        let peak = player(26, 70.0, 70.0, 50.0);
        let veteran = player(33, 70.0, 70.0, 50.0);
        assert!(market_value(&prospect, &cfg) > market_value(&peak, &cfg));
        assert!(market_value(&veteran, &cfg) < market_value(&peak, &cfg));
    }

    #[test]
    fn test_value_and_wage_floors() {
        let cfg = EconomyConfig::default();
        let p = player(40, 5.0, 5.0, 0.0);
        assert_eq!(market_value(&p, &cfg), cfg.min_market_value);
        assert_eq!(weekly_wage(0.0, 3, &cfg), cfg.min_wage);
    }

    #[test]
    fn test_longer_contract_pays_more() {
        let cfg = EconomyConfig::default();
        let one = weekly_wage(500_000.0, 1, &cfg);
        let four = weekly_wage(500_000.0, 4, &cfg);
        assert!((one - 4000.0).abs() < 1e-6);
        assert!((four - 4000.0 * 1.3).abs() < 1e-6);
    }
}
