//! Weekly cash flow of the human player.

use crate::config::CareerConfig;
use crate::models::Player;
use serde::{Deserialize, Serialize};

/// What the player did this week on the pitch, for bonus purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchPerformance {
    pub appeared: bool,
    pub goals: u8,
    pub clean_sheet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WeeklyStatement {
    pub wage: f64,
    pub appearance_bonus: f64,
    pub goal_bonus: f64,
    pub clean_sheet_bonus: f64,
    pub agent_commission: f64,
    pub living_cost: f64,
}

impl WeeklyStatement {
    pub fn income(&self) -> f64 {
        self.wage + self.appearance_bonus + self.goal_bonus + self.clean_sheet_bonus
    }

    pub fn expenses(&self) -> f64 {
        self.agent_commission + self.living_cost
    }

    /// May be negative; the balance is allowed to go into debt.
    pub fn net(&self) -> f64 {
        self.income() - self.expenses()
    }
}

pub fn living_cost(reputation: f32, cfg: &CareerConfig) -> f64 {
    cfg.living_cost_base + reputation.max(0.0) as f64 * cfg.living_cost_per_reputation
}

/// Wages and bonuses under the current contract, minus agent commission and
/// a reputation-scaled living cost.
pub fn weekly_statement(player: &Player, performance: MatchPerformance, cfg: &CareerConfig) -> WeeklyStatement {
    let mut statement = WeeklyStatement { living_cost: living_cost(player.reputation, cfg), ..Default::default() };

    let Some(contract) = player.contract.as_ref() else {
        return statement;
    };
    statement.wage = contract.weekly_wage;
    if performance.appeared {
        statement.appearance_bonus = contract.appearance_bonus;
        statement.goal_bonus = contract.goal_bonus * performance.goals as f64;
        if performance.clean_sheet {
            statement.clean_sheet_bonus = contract.clean_sheet_bonus;
        }
    }
    if let Some(agent) = player.agent.as_ref() {
        statement.agent_commission = agent.commission_on(statement.income());
    }
    statement
}
