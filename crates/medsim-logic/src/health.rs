//! Pure health logic - clamping, time decay, therapy effects, death.
//!
//! Health is an integer in `[0, 100]`. Every function here returns a value
//! already clamped to that range, so callers never have to re-check bounds.

use serde::{Deserialize, Serialize};

use crate::constants::health::{MAX_HEALTH, MIN_HEALTH};

/// Coarse health tiers shown on patient records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthTier {
    /// Health >= 70.
    Stable,
    /// Health 40..70.
    Guarded,
    /// Health 20..40.
    Serious,
    /// Health < 20: likely to die within a few hours without help.
    Critical,
}

impl HealthTier {
    pub fn from_health(health: i32) -> Self {
        if health >= 70 {
            Self::Stable
        } else if health >= 40 {
            Self::Guarded
        } else if health >= 20 {
            Self::Serious
        } else {
            Self::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Guarded => "guarded",
            Self::Serious => "serious",
            Self::Critical => "critical",
        }
    }
}

/// Result of a therapeutic action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TherapyOutcome {
    Effective,
    Ineffective,
}

impl TherapyOutcome {
    pub fn label(self) -> &'static str {
        match self {
            Self::Effective => "treatment effective",
            Self::Ineffective => "treatment ineffective",
        }
    }
}

pub fn clamp_health(health: i32) -> i32 {
    health.clamp(MIN_HEALTH, MAX_HEALTH)
}

/// Health lost over `hours` for a disease of the given severity.
///
/// `jitter` is the caller's random multiplier, drawn fresh per call from
/// `[DECAY_JITTER_MIN, DECAY_JITTER_MAX]`.
pub fn decay_amount(severity: f64, hours: u32, jitter: f64) -> f64 {
    (severity * hours as f64 * jitter).max(0.0)
}

/// Apply a decay amount: `max(0, floor(health - decay))`.
pub fn apply_decay(health: i32, decay: f64) -> i32 {
    let decayed = (health as f64 - decay).floor();
    if decayed <= MIN_HEALTH as f64 {
        MIN_HEALTH
    } else {
        clamp_health(decayed as i32)
    }
}

/// Apply a therapeutic treatment.
///
/// A correct treatment adds `effect`, an incorrect one subtracts `penalty`;
/// the result is clamped to `[0, 100]`.
pub fn apply_therapy(health: i32, correct: bool, effect: u32, penalty: u32) -> (i32, TherapyOutcome) {
    if correct {
        let raised = health.saturating_add(effect.min(i32::MAX as u32) as i32);
        (clamp_health(raised), TherapyOutcome::Effective)
    } else {
        let lowered = health.saturating_sub(penalty.min(i32::MAX as u32) as i32);
        (clamp_health(lowered), TherapyOutcome::Ineffective)
    }
}

pub fn is_dead(health: i32) -> bool {
    health <= MIN_HEALTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_tiers() {
        assert_eq!(HealthTier::from_health(100), HealthTier::Stable);
        assert_eq!(HealthTier::from_health(70), HealthTier::Stable);
        assert_eq!(HealthTier::from_health(69), HealthTier::Guarded);
        assert_eq!(HealthTier::from_health(40), HealthTier::Guarded);
        assert_eq!(HealthTier::from_health(39), HealthTier::Serious);
        assert_eq!(HealthTier::from_health(20), HealthTier::Serious);
        assert_eq!(HealthTier::from_health(19), HealthTier::Critical);
        assert_eq!(HealthTier::from_health(0), HealthTier::Critical);
    }

    #[test]
    fn test_clamp_health() {
        assert_eq!(clamp_health(-5), 0);
        assert_eq!(clamp_health(55), 55);
        assert_eq!(clamp_health(130), 100);
    }

    #[test]
    fn test_decay_amount_scales_with_severity_and_hours() {
        assert!((decay_amount(4.0, 2, 0.5) - 4.0).abs() < f64::EPSILON);
        assert!((decay_amount(4.0, 2, 1.0) - 8.0).abs() < f64::EPSILON);
        assert_eq!(decay_amount(0.0, 10, 1.0), 0.0);
        assert_eq!(decay_amount(3.0, 0, 1.0), 0.0);
    }

    #[test]
    fn test_apply_decay_floors() {
        assert_eq!(apply_decay(50, 0.0), 50);
        assert_eq!(apply_decay(50, 2.5), 47);
        assert_eq!(apply_decay(50, 2.0), 48);
    }

    #[test]
    fn test_apply_decay_never_negative() {
        assert_eq!(apply_decay(3, 10.0), 0);
        assert_eq!(apply_decay(0, 0.1), 0);
    }

    #[test]
    fn test_therapy_correct_adds_effect() {
        let (h, outcome) = apply_therapy(50, true, 20, 15);
        assert_eq!(h, 70);
        assert_eq!(outcome, TherapyOutcome::Effective);
    }

    #[test]
    fn test_therapy_incorrect_subtracts_penalty() {
        let (h, outcome) = apply_therapy(50, false, 20, 15);
        assert_eq!(h, 35);
        assert_eq!(outcome, TherapyOutcome::Ineffective);
    }

    #[test]
    fn test_therapy_clamped() {
        assert_eq!(apply_therapy(95, true, 20, 0).0, 100);
        assert_eq!(apply_therapy(5, false, 0, 10).0, 0);
    }

    #[test]
    fn test_is_dead() {
        assert!(is_dead(0));
        assert!(is_dead(-1));
        assert!(!is_dead(1));
        assert!(!is_dead(100));
    }
}
