//! Patient state: health, elapsed time, revealed symptoms and findings.
//!
//! A patient evolves only through [`Patient::advance_time`] (time passing),
//! the diagnostic test methods (which reveal findings but never touch
//! health), and health adjustments applied by the hospital for therapy and
//! diagnosis guesses.

use std::collections::HashSet;
use std::rc::Rc;

use medsim_logic::constants::health::{DECAY_JITTER_MAX, DECAY_JITTER_MIN};
use medsim_logic::constants::vitals::{NOISY_SYSTOLIC_RANGE, NOISY_TEMPERATURE_RANGE};
use medsim_logic::health::{self, HealthTier};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Disease;

/// Waiting-room assigned identifier, unique within a run.
pub type PatientId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub sex: Sex,
    pub age: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Degrees Celsius
    pub temperature: f64,
    /// mmHg
    pub systolic_bp: f64,
}

/// How a vital-signs test produces its reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalsMode {
    /// Always report the disease baseline.
    #[default]
    Baseline,
    /// Report the baseline with the given probability, otherwise a
    /// plausible reading unrelated to the disease.
    Noisy { baseline_probability: f64 },
}

/// Imaging and lab modalities that reveal findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Blood,
    Xray,
    Ecg,
}

impl Modality {
    pub fn label(self) -> &'static str {
        match self {
            Modality::Blood => "Blood test",
            Modality::Xray => "X-Ray",
            Modality::Ecg => "ECG",
        }
    }

    /// Finding reported when the disease has none for this modality.
    pub fn normal_finding(self) -> &'static str {
        match self {
            Modality::Blood => "No abnormal blood values",
            Modality::Xray => "Clear chest X-ray",
            Modality::Ecg => "Normal sinus rhythm",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Patient {
    pub id: PatientId,
    /// Assigned by patient generation; `None` for anonymous patients.
    pub identity: Option<Identity>,
    disease: Rc<Disease>,
    health: i32,
    time_elapsed: u32,
    visible_symptoms: Vec<String>,
    revealed_symptoms: HashSet<String>,
    discovered_blood_findings: Vec<String>,
    discovered_xray_findings: Vec<String>,
    discovered_ecg_findings: Vec<String>,
    vital_signs: Option<VitalSigns>,
    /// `None` until a diagnosis is attempted.
    pub diagnosis_correct: Option<bool>,
}

impl Patient {
    /// New patient with starting health drawn from the disease's range.
    pub fn new(disease: Rc<Disease>, rng: &mut impl Rng) -> Self {
        let range = disease.initial_health_range;
        let (lo, hi) = if range.min <= range.max {
            (range.min, range.max)
        } else {
            (range.max, range.min)
        };
        let starting = rng.gen_range(lo..=hi);
        Self::with_health(disease, starting)
    }

    /// New patient with an explicit starting health (clamped to `[0, 100]`).
    pub fn with_health(disease: Rc<Disease>, starting_health: i32) -> Self {
        let mut patient = Self {
            id: 0,
            identity: None,
            disease,
            health: health::clamp_health(starting_health),
            time_elapsed: 0,
            visible_symptoms: Vec::new(),
            revealed_symptoms: HashSet::new(),
            discovered_blood_findings: Vec::new(),
            discovered_xray_findings: Vec::new(),
            discovered_ecg_findings: Vec::new(),
            vital_signs: None,
            diagnosis_correct: None,
        };
        // Hour-zero symptoms are visible on arrival
        patient.update_symptoms();
        patient
    }

    pub fn with_identity(mut self, identity: Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn name(&self) -> &str {
        self.identity
            .as_ref()
            .map(|i| i.name.as_str())
            .unwrap_or("Unknown patient")
    }

    pub fn disease(&self) -> &Disease {
        &self.disease
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn health_tier(&self) -> HealthTier {
        HealthTier::from_health(self.health)
    }

    pub fn time_elapsed(&self) -> u32 {
        self.time_elapsed
    }

    pub fn visible_symptoms(&self) -> &[String] {
        &self.visible_symptoms
    }

    pub fn discovered_blood_findings(&self) -> &[String] {
        &self.discovered_blood_findings
    }

    pub fn discovered_xray_findings(&self) -> &[String] {
        &self.discovered_xray_findings
    }

    pub fn discovered_ecg_findings(&self) -> &[String] {
        &self.discovered_ecg_findings
    }

    pub fn discovered_findings(&self, modality: Modality) -> &[String] {
        match modality {
            Modality::Blood => &self.discovered_blood_findings,
            Modality::Xray => &self.discovered_xray_findings,
            Modality::Ecg => &self.discovered_ecg_findings,
        }
    }

    pub fn vital_signs(&self) -> Option<VitalSigns> {
        self.vital_signs
    }

    pub fn is_dead(&self) -> bool {
        health::is_dead(self.health)
    }

    /// Set health, clamped to `[0, 100]`.
    pub fn set_health(&mut self, value: i32) {
        self.health = health::clamp_health(value);
    }

    /// Let `hours` pass: age the patient, reveal due symptoms, decay health.
    ///
    /// Decay is `severity × hours × U(0.5, 1.0)` with a fresh draw per call.
    /// Zero hours is a no-op.
    pub fn advance_time(&mut self, hours: u32, rng: &mut impl Rng) {
        if hours == 0 {
            return;
        }
        self.time_elapsed = self.time_elapsed.saturating_add(hours);
        self.update_symptoms();

        let jitter = rng.gen_range(DECAY_JITTER_MIN..=DECAY_JITTER_MAX);
        let decay = health::decay_amount(self.disease.severity, hours, jitter);
        self.health = health::apply_decay(self.health, decay);

        log::debug!(
            "{} aged {}h (t={}h): decay {:.2}, health {}",
            self.name(),
            hours,
            self.time_elapsed,
            decay,
            self.health
        );
    }

    /// Reveal every symptom whose onset hour has been reached, once each,
    /// in timeline order.
    fn update_symptoms(&mut self) {
        for onset in &self.disease.symptoms_timeline {
            if self.time_elapsed >= onset.from_hour && !self.revealed_symptoms.contains(&onset.name) {
                self.revealed_symptoms.insert(onset.name.clone());
                self.visible_symptoms.push(onset.name.clone());
            }
        }
    }

    pub fn apply_blood_test(&mut self) -> Vec<String> {
        self.run_test(Modality::Blood)
    }

    pub fn apply_xray(&mut self) -> Vec<String> {
        self.run_test(Modality::Xray)
    }

    pub fn apply_ecg(&mut self) -> Vec<String> {
        self.run_test(Modality::Ecg)
    }

    /// Report the disease's findings for `modality` (or the modality's
    /// normal finding if there are none) and record any new ones.
    pub fn run_test(&mut self, modality: Modality) -> Vec<String> {
        let configured = match modality {
            Modality::Blood => &self.disease.blood_findings,
            Modality::Xray => &self.disease.xray_findings,
            Modality::Ecg => &self.disease.ecg_findings,
        };
        let findings = if configured.is_empty() {
            vec![modality.normal_finding().to_string()]
        } else {
            configured.clone()
        };

        let discovered = match modality {
            Modality::Blood => &mut self.discovered_blood_findings,
            Modality::Xray => &mut self.discovered_xray_findings,
            Modality::Ecg => &mut self.discovered_ecg_findings,
        };
        for finding in &findings {
            if !discovered.contains(finding) {
                discovered.push(finding.clone());
            }
        }

        findings
    }

    pub fn apply_vital_signs_test(&mut self, mode: VitalsMode, rng: &mut impl Rng) -> VitalSigns {
        let baseline = VitalSigns {
            temperature: self.disease.base_temperature,
            systolic_bp: self.disease.base_systolic_bp,
        };

        let reading = match mode {
            VitalsMode::Baseline => baseline,
            VitalsMode::Noisy {
                baseline_probability,
            } => {
                if rng.gen_bool(baseline_probability.clamp(0.0, 1.0)) {
                    baseline
                } else {
                    let (t_lo, t_hi) = NOISY_TEMPERATURE_RANGE;
                    let (bp_lo, bp_hi) = NOISY_SYSTOLIC_RANGE;
                    let temperature = rng.gen_range(t_lo..=t_hi);
                    VitalSigns {
                        temperature: (temperature * 10.0).round() / 10.0,
                        systolic_bp: rng.gen_range(bp_lo..=bp_hi) as f64,
                    }
                }
            }
        };

        self.vital_signs = Some(reading);
        reading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pneumonia() -> Rc<Disease> {
        Rc::new(
            Disease::new("Pneumonia")
                .with_symptom("Cough", 0)
                .with_symptom("Fever", 2)
                .with_symptom("Dyspnea", 5)
                .with_blood_findings(&["Leukocytosis", "Elevated CRP"])
                .with_xray_findings(&["Right lower lobe consolidation"])
                .with_vitals(38.9, 105.0)
                .with_severity(3.0)
                .with_health_range(40, 60),
        )
    }

    #[test]
    fn test_initial_health_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let p = Patient::new(pneumonia(), &mut rng);
            assert!((40..=60).contains(&p.health()));
        }
    }

    #[test]
    fn test_hour_zero_symptoms_visible_on_arrival() {
        let p = Patient::with_health(pneumonia(), 50);
        assert_eq!(p.visible_symptoms(), &["Cough".to_string()]);
    }

    #[test]
    fn test_symptoms_revealed_in_order_once() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = Patient::with_health(pneumonia(), 100);
        p.advance_time(2, &mut rng);
        assert_eq!(p.visible_symptoms(), &["Cough".to_string(), "Fever".to_string()]);
        p.advance_time(1, &mut rng);
        p.advance_time(10, &mut rng);
        assert_eq!(
            p.visible_symptoms(),
            &["Cough".to_string(), "Fever".to_string(), "Dyspnea".to_string()]
        );
    }

    #[test]
    fn test_split_advance_reveals_same_symptoms() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut split = Patient::with_health(pneumonia(), 100);
        split.advance_time(3, &mut rng);
        split.advance_time(2, &mut rng);

        let mut single = Patient::with_health(pneumonia(), 100);
        single.advance_time(5, &mut rng);

        assert_eq!(split.visible_symptoms(), single.visible_symptoms());
        assert_eq!(split.time_elapsed(), single.time_elapsed());
    }

    #[test]
    fn test_decay_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Patient::with_health(pneumonia(), 50);
        p.advance_time(2, &mut rng);
        // severity 3 × 2h × [0.5, 1.0] = [3, 6]
        assert!(p.health() >= 44 && p.health() <= 47, "health {}", p.health());
    }

    #[test]
    fn test_zero_hours_is_noop() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Patient::with_health(pneumonia(), 50);
        p.advance_time(0, &mut rng);
        assert_eq!(p.health(), 50);
        assert_eq!(p.time_elapsed(), 0);
    }

    #[test]
    fn test_zero_severity_never_decays() {
        let mut rng = StdRng::seed_from_u64(9);
        let disease = Rc::new(Disease::new("Benign").with_health_range(50, 50));
        let mut p = Patient::new(disease, &mut rng);
        for hours in [1, 3, 7, 12, 40] {
            p.advance_time(hours, &mut rng);
        }
        assert_eq!(p.health(), 50);
    }

    #[test]
    fn test_health_never_below_zero() {
        let mut rng = StdRng::seed_from_u64(11);
        let disease = Rc::new(Disease::new("Sepsis").with_severity(40.0));
        let mut p = Patient::with_health(disease, 30);
        for _ in 0..5 {
            p.advance_time(1, &mut rng);
            assert!((0..=100).contains(&p.health()));
        }
        assert!(p.is_dead());
    }

    #[test]
    fn test_blood_test_idempotent() {
        let mut p = Patient::with_health(pneumonia(), 50);
        let first = p.apply_blood_test();
        let second = p.apply_blood_test();
        assert_eq!(first, second);
        assert_eq!(
            p.discovered_blood_findings(),
            &["Leukocytosis".to_string(), "Elevated CRP".to_string()]
        );
    }

    #[test]
    fn test_empty_findings_report_normal_sentinel() {
        let mut p = Patient::with_health(pneumonia(), 50);
        let ecg = p.apply_ecg();
        assert_eq!(ecg, vec![Modality::Ecg.normal_finding().to_string()]);
        p.apply_ecg();
        assert_eq!(p.discovered_ecg_findings().len(), 1);
        assert_ne!(Modality::Blood.normal_finding(), Modality::Xray.normal_finding());
        assert_ne!(Modality::Xray.normal_finding(), Modality::Ecg.normal_finding());
    }

    #[test]
    fn test_tests_do_not_change_health_or_time() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = Patient::with_health(pneumonia(), 50);
        p.apply_blood_test();
        p.apply_xray();
        p.apply_ecg();
        p.apply_vital_signs_test(VitalsMode::Baseline, &mut rng);
        assert_eq!(p.health(), 50);
        assert_eq!(p.time_elapsed(), 0);
    }

    #[test]
    fn test_baseline_vitals_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = Patient::with_health(pneumonia(), 50);
        assert!(p.vital_signs().is_none());
        let v = p.apply_vital_signs_test(VitalsMode::Baseline, &mut rng);
        assert_eq!(v.temperature, 38.9);
        assert_eq!(v.systolic_bp, 105.0);
        assert_eq!(p.vital_signs(), Some(v));
    }

    #[test]
    fn test_noisy_vitals_stay_plausible() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut p = Patient::with_health(pneumonia(), 50);
        let mode = VitalsMode::Noisy {
            baseline_probability: 0.0,
        };
        for _ in 0..50 {
            let v = p.apply_vital_signs_test(mode, &mut rng);
            assert!((35.5..=38.5).contains(&v.temperature));
            assert!((100.0..=140.0).contains(&v.systolic_bp));
        }
    }

    #[test]
    fn test_name_defaults_when_anonymous() {
        let p = Patient::with_health(pneumonia(), 50);
        assert_eq!(p.name(), "Unknown patient");
        let named = p.with_identity(Identity {
            name: "Anna".into(),
            sex: Sex::Female,
            age: 34,
        });
        assert_eq!(named.name(), "Anna");
    }
}
