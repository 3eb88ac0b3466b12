//! Pure simulation rules for MedSim.
//!
//! This crate contains the arithmetic of the clinical simulation that is
//! independent of randomness, storage, or any console. Functions take plain
//! data and return results, so the engine crate and the CLI share one
//! definition of every rule and each rule is unit-testable on its own.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`clock`] | Day/hour counter and end-of-day detection |
//! | [`constants`] | Day length, arrival window, scoring and guess constants |
//! | [`diagnosis`] | Disease-name guess matching and guess health effects |
//! | [`health`] | Health clamping, decay arithmetic, therapy deltas, tiers |
//! | [`scoring`] | Case outcomes and the two scoring policies |

pub mod clock;
pub mod constants;
pub mod diagnosis;
pub mod health;
pub mod scoring;
