//! Waiting room - bounded patient collection and the arrival process
//!
//! Arrivals are a per-hour Bernoulli trial inside an early-day window, so
//! [`WaitingRoom::maybe_add_new_patients`] must be called exactly once per
//! simulated hour to keep the rate calibrated.

use std::rc::Rc;

use rand::Rng;

use crate::components::{Disease, Patient, PatientId};
use crate::config::ArrivalConfig;
use crate::generation::generate_random_patient;

#[derive(Debug, Clone)]
pub struct WaitingRoom {
    patients: Vec<Patient>,
    capacity: usize,
    next_id: PatientId,
}

impl WaitingRoom {
    pub fn new(capacity: usize) -> Self {
        Self {
            patients: Vec::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.patients.len() >= self.capacity
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Patient at `index` (waiting-room order), or `None` if out of range.
    pub fn get_patient(&self, index: usize) -> Option<&Patient> {
        self.patients.get(index)
    }

    pub fn get_patient_mut(&mut self, index: usize) -> Option<&mut Patient> {
        self.patients.get_mut(index)
    }

    pub fn find(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn find_mut(&mut self, id: PatientId) -> Option<&mut Patient> {
        self.patients.iter_mut().find(|p| p.id == id)
    }

    pub fn ids(&self) -> Vec<PatientId> {
        self.patients.iter().map(|p| p.id).collect()
    }

    /// Admit a patient, assigning it a fresh id. Capacity is not checked
    /// here; the arrival process is what respects it.
    pub fn add_patient(&mut self, mut patient: Patient) -> PatientId {
        let id = self.next_id;
        self.next_id += 1;
        patient.id = id;
        self.patients.push(patient);
        id
    }

    pub fn remove_patient(&mut self, id: PatientId) -> Option<Patient> {
        let index = self.patients.iter().position(|p| p.id == id)?;
        Some(self.patients.remove(index))
    }

    /// Remove and return every waiting patient, in order.
    pub fn drain(&mut self) -> Vec<Patient> {
        std::mem::take(&mut self.patients)
    }

    /// Hourly arrival check. Admits at most one random patient if the hour
    /// is inside the arrival window, the room has space, and the draw
    /// succeeds.
    pub fn maybe_add_new_patients(
        &mut self,
        current_hour: u32,
        diseases: &[Rc<Disease>],
        arrivals: &ArrivalConfig,
        rng: &mut impl Rng,
    ) -> Option<PatientId> {
        if current_hour < arrivals.first_hour || self.is_full() {
            return None;
        }
        if current_hour >= arrivals.cutoff_hour {
            return None;
        }
        if !rng.gen_bool(arrivals.probability.clamp(0.0, 1.0)) {
            return None;
        }

        let patient = generate_random_patient(diseases, rng)?;
        let name = patient.name().to_string();
        let id = self.add_patient(patient);
        log::info!("New patient arrived at hour {}: {} (#{})", current_hour, name, id);
        Some(id)
    }
}
