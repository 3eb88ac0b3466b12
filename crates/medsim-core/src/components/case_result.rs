//! Case results - one record per patient resolution.

use medsim_logic::scoring::Outcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    pub patient_name: String,
    pub outcome: Outcome,
    pub score: i32,
    pub notes: String,
}

impl CaseResult {
    pub fn new(
        patient_name: impl Into<String>,
        outcome: Outcome,
        score: i32,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            patient_name: patient_name.into(),
            outcome,
            score,
            notes: notes.into(),
        }
    }
}
