//! Simulation entities.
//!
//! Diseases and treatments are immutable templates loaded once per run.
//! Patients carry the mutable per-visit state; case results are the
//! records left behind when a patient leaves the simulation.

mod case_result;
mod disease;
mod patient;
mod treatment;

pub use case_result::*;
pub use disease::*;
pub use patient::*;
pub use treatment::*;
