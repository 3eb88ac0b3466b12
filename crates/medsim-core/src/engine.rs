//! Hospital - the simulation orchestrator
//!
//! Owns the clock, the waiting room, the catalogs and the random source,
//! and is the only thing that mutates them. Time always advances one hour
//! at a time so arrivals, decay and deaths stay tied to hour boundaries.

use medsim_logic::clock::Clock;
use medsim_logic::diagnosis::{self, IncorrectGuessPolicy};
use medsim_logic::scoring::{self, CaseFacts, Outcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::components::*;
use crate::config::{ConfigError, SimulationConfig};
use crate::generation::generate_random_patient;
use crate::systems::{dispatch_action, ActionReport, WaitingRoom};

const UNRESOLVED_NOTE: &str = "Patient still under observation";

/// Outcome of a disease-name guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosisVerdict {
    /// The patient was discharged.
    Correct { disease: String, case: CaseResult },
    /// The patient stays; `day_ended` is set when the policy ends the day.
    Incorrect { health: i32, day_ended: bool },
}

/// End-of-day report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub day: u32,
    pub results: Vec<CaseResult>,
    pub day_score: i64,
    pub total_score: i64,
}

pub struct Hospital<R: Rng = StdRng> {
    clock: Clock,
    waiting_room: WaitingRoom,
    catalog: Catalog,
    config: SimulationConfig,
    /// Score folded in from every finished day
    total_score: i64,
    /// Cases resolved so far today; cleared by `end_day`
    daily_case_results: Vec<CaseResult>,
    day_ended_early: bool,
    rng: R,
}

impl Hospital<StdRng> {
    /// Build a hospital seeded from `config.seed`, or from OS entropy.
    pub fn new(catalog: Catalog, config: SimulationConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(catalog, config, rng)
    }
}

impl<R: Rng> Hospital<R> {
    /// Build a hospital around an explicit random source. `config.seed` is
    /// ignored; the config is validated as in [`Hospital::new`].
    pub fn with_rng(catalog: Catalog, config: SimulationConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let waiting_room = WaitingRoom::new(config.waiting_room_capacity);
        Ok(Self {
            clock: Clock::new(),
            waiting_room,
            catalog,
            config,
            total_score: 0,
            daily_case_results: Vec::new(),
            day_ended_early: false,
            rng,
        })
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn waiting_room(&self) -> &WaitingRoom {
        &self.waiting_room
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn treatments(&self) -> &[Treatment] {
        self.catalog.treatments()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    pub fn daily_case_results(&self) -> &[CaseResult] {
        &self.daily_case_results
    }

    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.waiting_room.find(id)
    }

    /// Put a specific patient in the waiting room.
    pub fn admit_patient(&mut self, patient: Patient) -> PatientId {
        self.waiting_room.add_patient(patient)
    }

    /// Start the next day. An empty waiting room gets one random patient so
    /// no day starts with nobody to treat.
    pub fn start_new_day(&mut self) {
        self.clock.start_new_day();
        self.day_ended_early = false;

        if self.waiting_room.is_empty() {
            if let Some(patient) = generate_random_patient(self.catalog.diseases(), &mut self.rng) {
                let name = patient.name().to_string();
                let id = self.waiting_room.add_patient(patient);
                log::info!("First patient of the day: {} (#{})", name, id);
            }
        }

        log::info!(
            "Day {} started with {} waiting",
            self.clock.day,
            self.waiting_room.len()
        );
    }

    pub fn is_day_over(&self) -> bool {
        self.clock.is_day_over() || self.day_ended_early
    }

    pub fn is_simulation_over(&self) -> bool {
        self.clock.day >= self.config.max_days
    }

    /// Advance the clock hour by hour. Each hour: the arrival check runs,
    /// then every patient already waiting ages one hour, and anyone who
    /// dies is resolved before the next hour. Patients arriving in an hour
    /// start aging the hour after.
    pub fn advance_time(&mut self, hours: u32) {
        for _ in 0..hours {
            self.clock.advance(1);
            let hour = self.clock.hour;
            log::debug!("Day {} hour {}", self.clock.day, hour);

            let waiting = self.waiting_room.ids();
            self.waiting_room.maybe_add_new_patients(
                hour,
                self.catalog.diseases(),
                &self.config.arrivals,
                &mut self.rng,
            );

            for id in waiting {
                let died = match self.waiting_room.find_mut(id) {
                    Some(patient) => {
                        patient.advance_time(1, &mut self.rng);
                        patient.is_dead()
                    }
                    None => false,
                };
                if died {
                    self.patient_died(id);
                }
            }
        }
    }

    pub fn wait_and_observe(&mut self, hours: u32) {
        log::debug!("Waiting {}h", hours);
        self.advance_time(hours);
    }

    /// Perform the catalog treatment at `treatment_index` on a patient.
    pub fn perform_action(&mut self, id: PatientId, treatment_index: usize) -> Option<ActionReport> {
        let treatment = self.catalog.treatment(treatment_index)?.clone();
        self.perform_treatment(id, &treatment)
    }

    /// Charge the treatment's time cost, then apply its clinical effect.
    ///
    /// Returns `None` if the patient is not waiting, is already dead, or
    /// dies while the time is being charged; the time is still spent in
    /// the last case.
    pub fn perform_treatment(&mut self, id: PatientId, treatment: &Treatment) -> Option<ActionReport> {
        if self.waiting_room.find(id)?.is_dead() {
            return None;
        }

        self.advance_time(treatment.time_cost);

        let vitals_mode = self.config.vitals;
        let patient = self.waiting_room.find_mut(id)?;
        if patient.is_dead() {
            return None;
        }
        log::debug!("{} performed on {}", treatment.name, patient.name());
        Some(dispatch_action(patient, treatment, vitals_mode, &mut self.rng))
    }

    /// Guess the patient's disease. A correct guess adds health and
    /// discharges; an incorrect one costs health and, under
    /// [`IncorrectGuessPolicy::EndDay`], ends the day.
    pub fn guess_diagnosis(&mut self, id: PatientId, guess: &str) -> Option<DiagnosisVerdict> {
        let patient = self.waiting_room.find_mut(id)?;
        if patient.is_dead() {
            return None;
        }

        let correct = diagnosis::guess_matches(guess, &patient.disease().name);
        patient.diagnosis_correct = Some(correct);
        patient.set_health(diagnosis::health_after_guess(patient.health(), correct));

        if correct {
            let disease = patient.disease().name.clone();
            let case = self.discharge_patient(id)?;
            return Some(DiagnosisVerdict::Correct { disease, case });
        }

        let health = patient.health();
        let day_ended = self.config.incorrect_guess == IncorrectGuessPolicy::EndDay;
        if day_ended {
            self.day_ended_early = true;
        }
        log::info!("Incorrect diagnosis '{}' (health now {})", guess, health);
        Some(DiagnosisVerdict::Incorrect { health, day_ended })
    }

    /// Discharge a living patient: score `100 + floor(0.3 × health)` under
    /// the standard policy.
    pub fn discharge_patient(&mut self, id: PatientId) -> Option<CaseResult> {
        if self.waiting_room.find(id)?.is_dead() {
            return None;
        }
        let patient = self.waiting_room.remove_patient(id)?;
        let notes = format!("Health at discharge: {}", patient.health());
        let case = self.record_case(&patient, Outcome::Discharged, notes);
        log::info!("{} discharged ({} points)", patient.name(), case.score);
        Some(case)
    }

    /// Resolve a patient as dead: fixed `-100`, removed from the room.
    pub fn patient_died(&mut self, id: PatientId) -> Option<CaseResult> {
        let patient = self.waiting_room.remove_patient(id)?;
        let case = self.record_case(&patient, Outcome::Died, "Critical deterioration");
        log::info!("Patient {} has died", patient.name());
        Some(case)
    }

    /// Resolve a patient who is neither discharged nor dead: scored
    /// `floor(0.8 × health)` under the standard policy, removed from the room.
    pub fn unresolved_patient(&mut self, id: PatientId) -> Option<CaseResult> {
        let patient = self.waiting_room.remove_patient(id)?;
        Some(self.record_case(&patient, Outcome::NotDischarged, UNRESOLVED_NOTE))
    }

    fn record_case(&mut self, patient: &Patient, outcome: Outcome, notes: impl Into<String>) -> CaseResult {
        let facts = CaseFacts {
            health: patient.health(),
            diagnosis_correct: patient.diagnosis_correct,
            hours_elapsed: patient.time_elapsed(),
        };
        let score = scoring::case_score(self.config.scoring, outcome, &facts);
        let case = CaseResult::new(patient.name(), outcome, score, notes);
        self.daily_case_results.push(case.clone());
        case
    }

    /// Resolve everyone still waiting as unresolved, fold the day's scores
    /// into the total, and clear the day's results.
    ///
    /// A patient whose health reached 0 after the last hour tick has not
    /// been resolved as a death yet, so it is scored as unresolved too.
    pub fn end_day(&mut self) -> DaySummary {
        for patient in self.waiting_room.drain() {
            self.record_case(&patient, Outcome::NotDischarged, UNRESOLVED_NOTE);
        }

        let results = std::mem::take(&mut self.daily_case_results);
        let day_score = scoring::day_score(results.iter().map(|r| r.score));
        self.total_score += day_score;

        log::info!(
            "Day {} ended: {} cases, {} points (total {})",
            self.clock.day,
            results.len(),
            day_score,
            self.total_score
        );

        DaySummary {
            day: self.clock.day,
            results,
            day_score,
            total_score: self.total_score,
        }
    }
}
