use serde::{Deserialize, Serialize};

use crate::fields::Severity;

/// Three-stage report status shown to the patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Submitted,
    Viewed,
    Issued,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Submitted => "submitted",
            ReportStatus::Viewed => "viewed",
            ReportStatus::Issued => "issued",
        }
    }
}

/// Severity signal for the patient view. Stateless and recomputed on every
/// render, derived from the severity field and never cached. The exclamation
/// marks repeat the severity level so the signal survives color-blind
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeveritySignal {
    pub color: &'static str,
    pub marks: String,
}

pub fn severity_signal(severity: Severity) -> SeveritySignal {
    let color = match severity {
        Severity::Mild => "green",
        Severity::Moderate => "amber",
        Severity::Severe => "red",
    };
    SeveritySignal {
        color,
        marks: "!".repeat(severity.level() as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_mark_count_equals_severity_level() {
        assert_eq!(severity_signal(Severity::Mild).marks, "!");
        assert_eq!(severity_signal(Severity::Moderate).marks, "!!");
        assert_eq!(severity_signal(Severity::Severe).marks, "!!!");
    }

    #[test]
    fn test_signal_colors() {
        assert_eq!(severity_signal(Severity::Mild).color, "green");
        assert_eq!(severity_signal(Severity::Moderate).color, "amber");
        assert_eq!(severity_signal(Severity::Severe).color, "red");
    }
}
