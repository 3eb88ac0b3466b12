//! Simulation configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Two presets cover the supported deployments: the default
//! multi-patient hospital and [`SimulationConfig::single_patient`].

use std::fmt;
use std::io::Read;

use medsim_logic::constants::arrivals::{
    ARRIVAL_CUTOFF_HOUR, ARRIVAL_PROBABILITY, FIRST_ARRIVAL_HOUR,
};
use medsim_logic::constants::vitals::NOISY_BASELINE_PROBABILITY;
use medsim_logic::diagnosis::IncorrectGuessPolicy;
use medsim_logic::scoring::ScoringPolicy;
use serde::{Deserialize, Serialize};

use crate::components::VitalsMode;

/// Arrival window and rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrivalConfig {
    pub first_hour: u32,
    /// Arrivals only while the hour is below this.
    pub cutoff_hour: u32,
    /// Chance of one arrival per hour tick.
    pub probability: f64,
}

impl Default for ArrivalConfig {
    fn default() -> Self {
        Self {
            first_hour: FIRST_ARRIVAL_HOUR,
            cutoff_hour: ARRIVAL_CUTOFF_HOUR,
            probability: ARRIVAL_PROBABILITY,
        }
    }
}

impl ArrivalConfig {
    pub fn disabled() -> Self {
        Self {
            probability: 0.0,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub waiting_room_capacity: usize,
    pub max_days: u32,
    pub arrivals: ArrivalConfig,
    pub vitals: VitalsMode,
    pub incorrect_guess: IncorrectGuessPolicy,
    pub scoring: ScoringPolicy,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            waiting_room_capacity: 4,
            max_days: 5,
            arrivals: ArrivalConfig::default(),
            vitals: VitalsMode::Baseline,
            incorrect_guess: IncorrectGuessPolicy::KeepWaiting,
            scoring: ScoringPolicy::Standard,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// One patient per day, no arrivals, time-efficiency scoring, and a
    /// wrong guess ends the day.
    pub fn single_patient() -> Self {
        Self {
            waiting_room_capacity: 1,
            arrivals: ArrivalConfig::disabled(),
            vitals: VitalsMode::Noisy {
                baseline_probability: NOISY_BASELINE_PROBABILITY,
            },
            incorrect_guess: IncorrectGuessPolicy::EndDay,
            scoring: ScoringPolicy::TimeEfficiency,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_days == 0 {
            return Err(ConfigError::Invalid("max_days must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.arrivals.probability) {
            return Err(ConfigError::Invalid(format!(
                "arrivals.probability must be within [0, 1], got {}",
                self.arrivals.probability
            )));
        }
        if let VitalsMode::Noisy {
            baseline_probability,
        } = self.vitals
        {
            if !(0.0..=1.0).contains(&baseline_probability) {
                return Err(ConfigError::Invalid(format!(
                    "vitals baseline_probability must be within [0, 1], got {}",
                    baseline_probability
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

/// Errors that can occur while loading a config file
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "Config parse error: {}", e),
            ConfigError::Invalid(reason) => write!(f, "Invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.waiting_room_capacity, 4);
        assert_eq!(config.max_days, 5);
        assert_eq!(config.arrivals.cutoff_hour, 7);
        assert_eq!(config.vitals, VitalsMode::Baseline);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimulationConfig::from_json_str(
            r#"{ "max_days": 3, "incorrect_guess": "end_day", "arrivals": { "probability": 0.25 } }"#,
        )
        .unwrap();
        assert_eq!(config.max_days, 3);
        assert_eq!(config.incorrect_guess, IncorrectGuessPolicy::EndDay);
        assert_eq!(config.arrivals.probability, 0.25);
        assert_eq!(config.arrivals.first_hour, 1);
        assert_eq!(config.waiting_room_capacity, 4);
    }

    #[test]
    fn test_noisy_vitals_from_json() {
        let config = SimulationConfig::from_json_str(
            r#"{ "vitals": { "noisy": { "baseline_probability": 0.75 } }, "scoring": "time_efficiency" }"#,
        )
        .unwrap();
        assert_eq!(
            config.vitals,
            VitalsMode::Noisy {
                baseline_probability: 0.75
            }
        );
        assert_eq!(config.scoring, ScoringPolicy::TimeEfficiency);
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let err = SimulationConfig::from_json_str(r#"{ "arrivals": { "probability": 1.5 } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_zero_days_rejected() {
        let err = SimulationConfig::from_json_str(r#"{ "max_days": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = SimulationConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_single_patient_preset() {
        let config = SimulationConfig::single_patient();
        assert_eq!(config.waiting_room_capacity, 1);
        assert_eq!(config.arrivals.probability, 0.0);
        assert_eq!(config.scoring, ScoringPolicy::TimeEfficiency);
        assert_eq!(config.incorrect_guess, IncorrectGuessPolicy::EndDay);
        assert!(config.validate().is_ok());
    }
}
