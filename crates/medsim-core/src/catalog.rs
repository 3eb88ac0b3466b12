//! Disease and treatment catalogs.
//!
//! Diseases are loaded from JSON (an array of records); treatments are
//! defined in code. Loading is all-or-nothing: any missing field or invalid
//! value fails the whole load before a hospital can be built.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::rc::Rc;

use serde::Deserialize;

use crate::components::{Disease, HealthRange, SymptomOnset, Treatment};

/// Disease record as it appears in the catalog file.
#[derive(Debug, Deserialize)]
struct DiseaseRecord {
    name: String,
    symptoms_timeline: Vec<SymptomOnset>,
    blood_findings: Vec<String>,
    xray_findings: Vec<String>,
    #[serde(default)]
    ecg_findings: Vec<String>,
    base_temperature: f64,
    base_systolic_bp: f64,
    severity: f64,
    initial_health_range: [i32; 2],
    correct_treatments: Vec<String>,
}

impl TryFrom<DiseaseRecord> for Disease {
    type Error = CatalogError;

    fn try_from(record: DiseaseRecord) -> Result<Self, Self::Error> {
        let invalid = |reason: String| CatalogError::InvalidDisease {
            disease: record.name.clone(),
            reason,
        };

        if record.name.trim().is_empty() {
            return Err(invalid("name is empty".into()));
        }
        if !record.severity.is_finite() || record.severity < 0.0 {
            return Err(invalid(format!(
                "severity must be a non-negative number, got {}",
                record.severity
            )));
        }
        if !record.base_temperature.is_finite() || !record.base_systolic_bp.is_finite() {
            return Err(invalid("base vitals must be finite".into()));
        }
        let [min, max] = record.initial_health_range;
        if min > max || min < 0 || max > 100 {
            return Err(invalid(format!(
                "initial_health_range [{}, {}] must satisfy 0 <= min <= max <= 100",
                min, max
            )));
        }
        if record.symptoms_timeline.is_empty() {
            log::warn!("Disease '{}' has no symptoms", record.name);
        }

        Ok(Disease {
            name: record.name,
            symptoms_timeline: record.symptoms_timeline,
            blood_findings: record.blood_findings,
            xray_findings: record.xray_findings,
            ecg_findings: record.ecg_findings,
            base_temperature: record.base_temperature,
            base_systolic_bp: record.base_systolic_bp,
            severity: record.severity,
            initial_health_range: HealthRange::new(min, max),
            correct_treatments: record.correct_treatments,
        })
    }
}

/// Parse a JSON array of disease records.
pub fn parse_diseases(json: &str) -> Result<Vec<Disease>, CatalogError> {
    let records: Vec<DiseaseRecord> = serde_json::from_str(json)?;
    records.into_iter().map(Disease::try_from).collect()
}

pub fn load_diseases<R: Read>(reader: R) -> Result<Vec<Disease>, CatalogError> {
    let records: Vec<DiseaseRecord> = serde_json::from_reader(reader)?;
    records.into_iter().map(Disease::try_from).collect()
}

pub fn load_diseases_from_path(path: impl AsRef<Path>) -> Result<Vec<Disease>, CatalogError> {
    let file = File::open(path)?;
    load_diseases(BufReader::new(file))
}

/// Validated, immutable catalogs shared by a whole run.
#[derive(Debug, Clone)]
pub struct Catalog {
    diseases: Vec<Rc<Disease>>,
    treatments: Vec<Treatment>,
}

impl Catalog {
    /// Build the catalogs, checking that disease names are unique
    /// (case-insensitively, as guesses are) and that every listed correct
    /// treatment exists.
    pub fn new(diseases: Vec<Disease>, treatments: Vec<Treatment>) -> Result<Self, CatalogError> {
        if diseases.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for disease in &diseases {
            if !seen.insert(disease.name.trim().to_lowercase()) {
                return Err(CatalogError::DuplicateDisease(disease.name.clone()));
            }
            for name in &disease.correct_treatments {
                if !treatments.iter().any(|t| &t.name == name) {
                    return Err(CatalogError::UnknownTreatment {
                        disease: disease.name.clone(),
                        treatment: name.clone(),
                    });
                }
            }
        }

        log::info!(
            "Catalog loaded: {} diseases, {} treatments",
            diseases.len(),
            treatments.len()
        );

        Ok(Self {
            diseases: diseases.into_iter().map(Rc::new).collect(),
            treatments,
        })
    }

    pub fn from_json_str(json: &str, treatments: Vec<Treatment>) -> Result<Self, CatalogError> {
        Self::new(parse_diseases(json)?, treatments)
    }

    pub fn diseases(&self) -> &[Rc<Disease>] {
        &self.diseases
    }

    pub fn treatments(&self) -> &[Treatment] {
        &self.treatments
    }

    pub fn treatment(&self, index: usize) -> Option<&Treatment> {
        self.treatments.get(index)
    }

    pub fn find_disease(&self, name: &str) -> Option<&Rc<Disease>> {
        self.diseases.iter().find(|d| d.name == name)
    }
}

/// Errors that can occur while loading catalogs
#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidDisease { disease: String, reason: String },
    DuplicateDisease(String),
    UnknownTreatment { disease: String, treatment: String },
    Empty,
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Json(e)
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "IO error: {}", e),
            CatalogError::Json(e) => write!(f, "Catalog parse error: {}", e),
            CatalogError::InvalidDisease { disease, reason } => {
                write!(f, "Invalid disease '{}': {}", disease, reason)
            }
            CatalogError::DuplicateDisease(name) => write!(f, "Duplicate disease '{}'", name),
            CatalogError::UnknownTreatment { disease, treatment } => write!(
                f,
                "Disease '{}' lists unknown treatment '{}'",
                disease, treatment
            ),
            CatalogError::Empty => write!(f, "Disease catalog is empty"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::standard_treatments;

    const PNEUMONIA: &str = r#"[{
        "name": "Pneumonia",
        "symptoms_timeline": [
            { "name": "Cough", "from_hour": 0 },
            { "name": "Fever", "from_hour": 2 }
        ],
        "blood_findings": ["Leukocytosis"],
        "xray_findings": ["Lobar consolidation"],
        "ecg_findings": [],
        "base_temperature": 38.9,
        "base_systolic_bp": 110,
        "severity": 2.5,
        "initial_health_range": [40, 60],
        "correct_treatments": ["Antibiotics"]
    }]"#;

    #[test]
    fn test_parse_valid_catalog() {
        let diseases = parse_diseases(PNEUMONIA).unwrap();
        assert_eq!(diseases.len(), 1);
        let d = &diseases[0];
        assert_eq!(d.name, "Pneumonia");
        assert_eq!(d.symptoms_timeline[1], SymptomOnset::new("Fever", 2));
        assert_eq!(d.base_systolic_bp, 110.0);
        assert_eq!(d.initial_health_range, HealthRange::new(40, 60));
    }

    #[test]
    fn test_ecg_findings_default_to_empty() {
        let json = PNEUMONIA.replace(r#""ecg_findings": [],"#, "");
        let diseases = parse_diseases(&json).unwrap();
        assert!(diseases[0].ecg_findings.is_empty());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = PNEUMONIA.replace(r#""severity": 2.5,"#, "");
        let err = parse_diseases(&json).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(err.to_string().contains("severity"));
    }

    #[test]
    fn test_inverted_health_range_fails() {
        let json = PNEUMONIA.replace("[40, 60]", "[60, 40]");
        assert!(matches!(
            parse_diseases(&json),
            Err(CatalogError::InvalidDisease { .. })
        ));
    }

    #[test]
    fn test_negative_severity_fails() {
        let json = PNEUMONIA.replace("2.5", "-1.0");
        assert!(matches!(
            parse_diseases(&json),
            Err(CatalogError::InvalidDisease { .. })
        ));
    }

    #[test]
    fn test_catalog_rejects_unknown_treatment() {
        let json = PNEUMONIA.replace("\"Antibiotics\"", "\"Leeches\"");
        let err = Catalog::from_json_str(&json, standard_treatments()).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownTreatment { .. }));
    }

    #[test]
    fn test_catalog_rejects_duplicates_case_insensitively() {
        let a = Disease::new("Asthma");
        let b = Disease::new("ASTHMA");
        let err = Catalog::new(vec![a, b], standard_treatments()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateDisease(_)));
    }

    #[test]
    fn test_catalog_rejects_empty() {
        assert!(matches!(
            Catalog::new(Vec::new(), standard_treatments()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::from_json_str(PNEUMONIA, standard_treatments()).unwrap();
        assert!(catalog.find_disease("Pneumonia").is_some());
        assert!(catalog.find_disease("Asthma").is_none());
        assert!(catalog.treatment(0).is_some());
        assert!(catalog.treatment(catalog.treatments().len()).is_none());
    }

    #[test]
    fn test_bundled_catalog_is_valid() {
        let json = include_str!("../../../data/diseases.json");
        let catalog = Catalog::from_json_str(json, standard_treatments()).unwrap();
        assert!(catalog.diseases().len() >= 5);
    }
}
