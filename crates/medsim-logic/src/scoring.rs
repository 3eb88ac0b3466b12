//! Case outcomes and scoring policies.
//!
//! Two policies are supported:
//! - [`ScoringPolicy::Standard`]: the multi-patient hospital rules:
//!   discharge earns a base plus a share of remaining health, an unresolved
//!   case earns a larger share of health, a death costs a fixed penalty.
//! - [`ScoringPolicy::TimeEfficiency`]: the single-patient rules: half the
//!   remaining health, a bonus for a correct diagnosis, and a bonus for
//!   every hour under the time budget.

use serde::{Deserialize, Serialize};

use crate::constants::scoring::*;

/// How a patient's stay ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Discharged,
    NotDischarged,
    Died,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Discharged => "Discharged",
            Outcome::NotDischarged => "Not discharged",
            Outcome::Died => "Died",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    #[default]
    Standard,
    TimeEfficiency,
}

/// Patient state relevant to scoring, captured at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseFacts {
    pub health: i32,
    /// `None` if no diagnosis was attempted.
    pub diagnosis_correct: Option<bool>,
    /// Hours the patient spent in the simulation.
    pub hours_elapsed: u32,
}

/// Score a resolved case under the given policy.
pub fn case_score(policy: ScoringPolicy, outcome: Outcome, facts: &CaseFacts) -> i32 {
    let health = facts.health.max(0);
    match (policy, outcome) {
        (_, Outcome::Died) => DEATH_SCORE,
        (ScoringPolicy::Standard, Outcome::Discharged) => {
            DISCHARGE_BASE + health * DISCHARGE_HEALTH_PERCENT / 100
        }
        (ScoringPolicy::Standard, Outcome::NotDischarged) => {
            health * UNRESOLVED_HEALTH_PERCENT / 100
        }
        (ScoringPolicy::TimeEfficiency, _) => {
            let diagnosis_bonus = if facts.diagnosis_correct == Some(true) {
                EFFICIENCY_DIAGNOSIS_BONUS
            } else {
                0
            };
            let hours = facts.hours_elapsed.min(i32::MAX as u32) as i32;
            let time_bonus = (EFFICIENCY_TIME_BUDGET_HOURS - hours).max(0);
            health / EFFICIENCY_HEALTH_DIVISOR + diagnosis_bonus + time_bonus
        }
    }
}

/// Sum of a day's case scores.
pub fn day_score<I: IntoIterator<Item = i32>>(scores: I) -> i64 {
    scores.into_iter().map(i64::from).sum()
}
