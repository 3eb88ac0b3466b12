//! MedSim Core - Clinical Triage Simulation Engine
//!
//! A turn-based simulation of a hospital shift: patients with randomly
//! assigned diseases arrive in a bounded waiting room, their health decays
//! hour by hour, and the player orders tests and treatments against the
//! clock. Every case ends in a discharge, a death, or an unresolved stay,
//! and is scored.
//!
//! # Architecture
//!
//! - **Components**: diseases and treatments (immutable templates),
//!   patients (mutable per-visit state), case results
//! - **Systems**: the waiting room and its arrival process, action dispatch
//! - **Generation**: random patients and the standard treatment catalog
//! - **Engine**: [`Hospital`](engine::Hospital), the only mutator of the
//!   clock, the waiting room and every patient
//!
//! All randomness flows through the hospital's owned random source, so a
//! seeded hospital replays exactly.
//!
//! # Example
//!
//! ```rust,no_run
//! use medsim_core::prelude::*;
//!
//! let json = std::fs::read_to_string("data/diseases.json").unwrap();
//! let catalog = Catalog::from_json_str(&json, standard_treatments()).unwrap();
//! let mut hospital = Hospital::new(catalog, SimulationConfig::default().with_seed(7)).unwrap();
//!
//! while !hospital.is_simulation_over() {
//!     hospital.start_new_day();
//!     while !hospital.is_day_over() {
//!         hospital.wait_and_observe(1);
//!     }
//!     hospital.end_day();
//! }
//! ```

pub mod catalog;
pub mod components;
pub mod config;
pub mod engine;
pub mod generation;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogError};
    pub use crate::components::*;
    pub use crate::config::{ArrivalConfig, ConfigError, SimulationConfig};
    pub use crate::engine::{DaySummary, DiagnosisVerdict, Hospital};
    pub use crate::generation::standard_treatments;
    pub use crate::systems::{ActionReport, WaitingRoom};
}
