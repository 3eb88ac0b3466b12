//! Game constants - day length, arrival window, scoring weights, etc.
//!
//! Plain constants with no engine dependency. The engine uses them as
//! defaults; most of them can be overridden through the engine config.

pub mod clock {
    /// Hours in a working day. The day is over once the hour reaches this.
    pub const DAY_LENGTH_HOURS: u32 = 12;
}

pub mod health {
    pub const MIN_HEALTH: i32 = 0;
    pub const MAX_HEALTH: i32 = 100;

    /// Lower bound of the per-call decay jitter multiplier.
    pub const DECAY_JITTER_MIN: f64 = 0.5;
    /// Upper bound of the per-call decay jitter multiplier.
    pub const DECAY_JITTER_MAX: f64 = 1.0;
}

pub mod arrivals {
    /// No arrivals are attempted before this hour.
    pub const FIRST_ARRIVAL_HOUR: u32 = 1;
    /// Arrivals are attempted only while the hour is below this.
    pub const ARRIVAL_CUTOFF_HOUR: u32 = 7;
    /// Chance of one new patient per hour tick inside the arrival window.
    pub const ARRIVAL_PROBABILITY: f64 = 0.5;
}

pub mod scoring {
    pub const DISCHARGE_BASE: i32 = 100;
    /// Share of remaining health added to the discharge score, in percent.
    pub const DISCHARGE_HEALTH_PERCENT: i32 = 30;
    /// Share of remaining health scored for an unresolved case, in percent.
    pub const UNRESOLVED_HEALTH_PERCENT: i32 = 80;
    pub const DEATH_SCORE: i32 = -100;

    // Time-efficiency policy (single-patient mode)
    pub const EFFICIENCY_HEALTH_DIVISOR: i32 = 2;
    pub const EFFICIENCY_DIAGNOSIS_BONUS: i32 = 30;
    pub const EFFICIENCY_TIME_BUDGET_HOURS: i32 = 20;
}

pub mod diagnosis {
    /// Health granted for a correct disease-name guess.
    pub const CORRECT_GUESS_BONUS: i32 = 10;
    /// Health lost for an incorrect disease-name guess.
    pub const INCORRECT_GUESS_PENALTY: i32 = 30;
}

pub mod identity {
    pub const MIN_AGE: u32 = 18;
    pub const MAX_AGE: u32 = 85;
}

pub mod vitals {
    /// Chance that a noisy vitals reading reports the disease baseline.
    pub const NOISY_BASELINE_PROBABILITY: f64 = 0.75;
    pub const NOISY_TEMPERATURE_RANGE: (f64, f64) = (35.5, 38.5);
    pub const NOISY_SYSTOLIC_RANGE: (u32, u32) = (100, 140);
}
