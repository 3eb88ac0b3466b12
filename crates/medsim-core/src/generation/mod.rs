//! Generation - random patients and the standard treatment catalog

mod names;
mod patients;
mod treatments;

pub use names::*;
pub use patients::*;
pub use treatments::*;
