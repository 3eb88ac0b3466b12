//! Systems - logic that operates on patients

mod actions;
mod waiting_room;

pub use actions::*;
pub use waiting_room::*;
