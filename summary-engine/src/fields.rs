use serde::{Deserialize, Serialize};

/// Clinician-assessed severity, 1 (mild) to 3 (severe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn level(&self) -> u8 {
        match self {
            Severity::Mild => 1,
            Severity::Moderate => 2,
            Severity::Severe => 3,
        }
    }
}

/// One prescribed item; `priority` orders the patient's action list,
/// lowest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub name: String,
    pub instructions: String,
    pub priority: u8,
}

/// Clinician-entered structured fields. These are data, not generated text:
/// the summaries append them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicianFields {
    pub diagnosis: String,
    pub severity: Severity,
    pub treatment_duration_days: u32,
    #[serde(default)]
    pub prescriptions: Vec<Prescription>,
}
