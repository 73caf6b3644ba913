use super::ids::ClubId;
use serde::{Deserialize, Serialize};

/// Employment terms. Replaced wholesale on renewal or transfer; the only
/// derived value is [`Contract::aged_one_season`], which returns a new contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub club_id: ClubId,
    pub weekly_wage: f64,
    pub years_remaining: u8,
    pub release_clause: f64,
    pub signing_bonus: f64,
    pub goal_bonus: f64,
    pub clean_sheet_bonus: f64,
    pub appearance_bonus: f64,
}

impl Contract {
    /// Contract after one season has elapsed; `None` once it has run out.
    pub fn aged_one_season(&self) -> Option<Contract> {
        if self.years_remaining <= 1 {
            return None;
        }
        Some(Contract { years_remaining: self.years_remaining - 1, ..*self })
    }

    pub fn is_final_year(&self) -> bool {
        self.years_remaining <= 1
    }

    pub fn annual_wage(&self) -> f64 {
        self.weekly_wage * 52.0
    }

    /// Same terms with every monetary field scaled by `factor`.
    pub fn scaled(&self, factor: f64) -> Contract {
        Contract {
            weekly_wage: self.weekly_wage * factor,
            release_clause: self.release_clause * factor,
            signing_bonus: self.signing_bonus * factor,
            goal_bonus: self.goal_bonus * factor,
            clean_sheet_bonus: self.clean_sheet_bonus * factor,
            appearance_bonus: self.appearance_bonus * factor,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(years: u8) -> Contract {
        Contract {
            club_id: ClubId(3),
            weekly_wage: 1000.0,
            years_remaining: years,
            release_clause: 250_000.0,
            signing_bonus: 10_000.0,
            goal_bonus: 100.0,
            clean_sheet_bonus: 0.0,
            appearance_bonus: 50.0,
        }
    }

    #[test]
    fn test_ageing_runs_out() {
        let c = contract(2);
        let next = c.aged_one_season().expect("one year left");
        assert_eq!(next.years_remaining, 1);
        assert!(next.aged_one_season().is_none());
    }

    #[test]
    fn test_scaled_keeps_terms() {
        let c = contract(3).scaled(1.1);
        assert_eq!(c.years_remaining, 3);
        assert_eq!(c.club_id, ClubId(3));
        assert!((c.weekly_wage - 1100.0).abs() < 1e-6);
    }
}
