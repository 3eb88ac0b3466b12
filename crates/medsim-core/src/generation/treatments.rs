//! The standard treatment catalog.

use crate::components::{TestType, Treatment};

pub fn standard_treatments() -> Vec<Treatment> {
    vec![
        Treatment::therapy("IV Fluids", 10, 2, 1, "Hydration support"),
        Treatment::therapy("Antibiotics", 20, 15, 1, "Broad-spectrum antibiotics"),
        Treatment::therapy("Aspirin", 15, 5, 1, "Antiplatelet therapy"),
        Treatment::therapy("Bronchodilator", 15, 5, 1, "Nebulized salbutamol"),
        Treatment::therapy("Insulin Infusion", 25, 20, 2, "Continuous IV insulin"),
        Treatment::test(
            "Vital Signs Check",
            TestType::Vitals,
            1,
            "Measure temperature and blood pressure",
        ),
        Treatment::test("Blood Test", TestType::Blood, 2, "Laboratory analysis"),
        Treatment::test("X-Ray", TestType::Xray, 2, "Chest imaging"),
        Treatment::test("ECG", TestType::Ecg, 1, "Electrocardiogram"),
    ]
}
