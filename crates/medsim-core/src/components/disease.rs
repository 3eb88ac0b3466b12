//! Disease templates.

use serde::{Deserialize, Serialize};

/// A symptom and the hour (since the patient arrived) it becomes visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomOnset {
    pub name: String,
    pub from_hour: u32,
}

impl SymptomOnset {
    pub fn new(name: impl Into<String>, from_hour: u32) -> Self {
        Self {
            name: name.into(),
            from_hour,
        }
    }
}

/// Inclusive range a new patient's starting health is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthRange {
    pub min: i32,
    pub max: i32,
}

impl HealthRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn fixed(value: i32) -> Self {
        Self::new(value, value)
    }
}

/// Immutable description of a disease's presentation and decay.
///
/// Shared by every patient assigned this disease; never mutated after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Disease {
    pub name: String,
    /// Symptoms in reveal order.
    pub symptoms_timeline: Vec<SymptomOnset>,
    pub blood_findings: Vec<String>,
    pub xray_findings: Vec<String>,
    pub ecg_findings: Vec<String>,
    pub base_temperature: f64,
    pub base_systolic_bp: f64,
    /// Health lost per hour, before jitter.
    pub severity: f64,
    pub initial_health_range: HealthRange,
    pub correct_treatments: Vec<String>,
}

impl Disease {
    /// A disease with no symptoms, no findings, normal vitals and no decay.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symptoms_timeline: Vec::new(),
            blood_findings: Vec::new(),
            xray_findings: Vec::new(),
            ecg_findings: Vec::new(),
            base_temperature: 37.0,
            base_systolic_bp: 120.0,
            severity: 0.0,
            initial_health_range: HealthRange::new(50, 80),
            correct_treatments: Vec::new(),
        }
    }

    pub fn with_symptom(mut self, name: impl Into<String>, from_hour: u32) -> Self {
        self.symptoms_timeline.push(SymptomOnset::new(name, from_hour));
        self
    }

    pub fn with_blood_findings(mut self, findings: &[&str]) -> Self {
        self.blood_findings = findings.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_xray_findings(mut self, findings: &[&str]) -> Self {
        self.xray_findings = findings.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_ecg_findings(mut self, findings: &[&str]) -> Self {
        self.ecg_findings = findings.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_vitals(mut self, temperature: f64, systolic_bp: f64) -> Self {
        self.base_temperature = temperature;
        self.base_systolic_bp = systolic_bp;
        self
    }

    pub fn with_severity(mut self, severity: f64) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_health_range(mut self, min: i32, max: i32) -> Self {
        self.initial_health_range = HealthRange::new(min, max);
        self
    }

    pub fn with_correct_treatments(mut self, treatments: &[&str]) -> Self {
        self.correct_treatments = treatments.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn is_correct_treatment(&self, treatment_name: &str) -> bool {
        self.correct_treatments.iter().any(|t| t == treatment_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let disease = Disease::new("Pneumonia")
            .with_symptom("Cough", 0)
            .with_symptom("Fever", 2)
            .with_blood_findings(&["Leukocytosis"])
            .with_severity(2.5)
            .with_health_range(40, 60)
            .with_correct_treatments(&["Antibiotics"]);

        assert_eq!(disease.symptoms_timeline.len(), 2);
        assert_eq!(disease.symptoms_timeline[1], SymptomOnset::new("Fever", 2));
        assert_eq!(disease.blood_findings, vec!["Leukocytosis".to_string()]);
        assert!(disease.ecg_findings.is_empty());
        assert_eq!(disease.initial_health_range, HealthRange::new(40, 60));
    }

    #[test]
    fn test_is_correct_treatment_is_exact() {
        let disease = Disease::new("Pneumonia").with_correct_treatments(&["Antibiotics"]);
        assert!(disease.is_correct_treatment("Antibiotics"));
        assert!(!disease.is_correct_treatment("antibiotics"));
        assert!(!disease.is_correct_treatment("IV Fluids"));
    }
}
