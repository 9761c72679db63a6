use provenance_index::Anchor;
use serde::{Deserialize, Serialize};

use crate::bullets::SummaryBullet;
use crate::fields::Severity;
use crate::signal::{severity_signal, ReportStatus};

/// One ordered action item derived from a prescription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    pub priority: u8,
    pub text: String,
}

/// Conversational patient summary sharing the clinician summary's anchors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientSummary {
    pub bullets: Vec<SummaryBullet>,
    pub status: ReportStatus,
    pub severity: Severity,
    /// Action items ordered by priority, lowest first
    pub actions: Vec<ActionItem>,
}

impl PatientSummary {
    pub fn anchors(&self) -> Vec<Anchor> {
        self.bullets.iter().map(|b| b.anchor).collect()
    }

    /// Advance the three-stage status indicator. Moves forward only.
    pub fn advance_status(&mut self) {
        self.status = match self.status {
            ReportStatus::Submitted => ReportStatus::Viewed,
            ReportStatus::Viewed | ReportStatus::Issued => ReportStatus::Issued,
        };
    }

    pub fn render(&self) -> String {
        let signal = severity_signal(self.severity);
        let mut lines = vec!["What this means for you:".to_string()];
        for b in &self.bullets {
            lines.push(format!("- {}", b.render()));
        }

        lines.push(format!(
            "Status: {} [{}] {}",
            self.status.label(),
            signal.color,
            signal.marks
        ));

        lines.push("Action:".to_string());
        for action in &self.actions {
            lines.push(format!("{}. {}", action.priority, action.text));
        }

        lines.push("Reminder:".to_string());
        lines.push("- If symptoms worsen, consider a clinic visit promptly.".to_string());
        lines.join("\n")
    }
}
