//! Treatment templates - therapeutic actions and diagnostic tests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a treatment. `None` is a therapeutic action; every
/// other variant is a diagnostic test with no direct health effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestType {
    #[default]
    None,
    Blood,
    Xray,
    Vitals,
    Ecg,
}

impl TestType {
    pub fn is_diagnostic(self) -> bool {
        !matches!(self, TestType::None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treatment {
    pub name: String,
    /// Health gained when the treatment is correct for the disease.
    pub effect: u32,
    /// Health lost when it is not.
    pub penalty: u32,
    /// Hours charged to the clock, always at least one.
    pub time_cost: u32,
    pub description: String,
    pub test_type: TestType,
}

impl Treatment {
    pub fn therapy(
        name: impl Into<String>,
        effect: u32,
        penalty: u32,
        time_cost: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            effect,
            penalty,
            time_cost: time_cost.max(1),
            description: description.into(),
            test_type: TestType::None,
        }
    }

    pub fn test(
        name: impl Into<String>,
        test_type: TestType,
        time_cost: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            effect: 0,
            penalty: 0,
            time_cost: time_cost.max(1),
            description: description.into(),
            test_type,
        }
    }

    pub fn is_diagnostic(&self) -> bool {
        self.test_type.is_diagnostic()
    }
}

impl fmt::Display for Treatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}h) – {}", self.name, self.time_cost, self.description)
    }
}
