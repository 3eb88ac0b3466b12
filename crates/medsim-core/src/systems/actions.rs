//! Clinical action dispatch - diagnostic tests and therapeutic treatments
//!
//! These functions apply an action's clinical effect only. Charging the
//! action's time cost is the hospital's job and happens beforehand.

use medsim_logic::health::{self, TherapyOutcome};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{Modality, Patient, TestType, Treatment, VitalSigns, VitalsMode};

/// What an action revealed or did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionReport {
    Findings {
        modality: Modality,
        findings: Vec<String>,
    },
    Vitals(VitalSigns),
    Therapy(TherapyOutcome),
}

/// Apply a therapeutic treatment: `+effect` if the disease lists it as
/// correct, `-penalty` otherwise, clamped to `[0, 100]`. No randomness.
pub fn apply_treatment(patient: &mut Patient, treatment: &Treatment) -> TherapyOutcome {
    let correct = patient.disease().is_correct_treatment(&treatment.name);
    let (new_health, outcome) =
        health::apply_therapy(patient.health(), correct, treatment.effect, treatment.penalty);
    patient.set_health(new_health);

    log::debug!(
        "{} on {}: {} (health {})",
        treatment.name,
        patient.name(),
        outcome.label(),
        new_health
    );
    outcome
}

/// Run a treatment's clinical effect, dispatching on its test type.
pub fn dispatch_action(
    patient: &mut Patient,
    treatment: &Treatment,
    vitals_mode: VitalsMode,
    rng: &mut impl Rng,
) -> ActionReport {
    let modality = match treatment.test_type {
        TestType::Blood => Modality::Blood,
        TestType::Xray => Modality::Xray,
        TestType::Ecg => Modality::Ecg,
        TestType::Vitals => {
            return ActionReport::Vitals(patient.apply_vital_signs_test(vitals_mode, rng));
        }
        TestType::None => return ActionReport::Therapy(apply_treatment(patient, treatment)),
    };

    ActionReport::Findings {
        modality,
        findings: patient.run_test(modality),
    }
}
