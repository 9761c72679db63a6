use provenance_index::Anchor;
use serde::{Deserialize, Serialize};

use crate::bullets::SummaryBullet;
use crate::fields::ClinicianFields;

/// Clinician bullet: the shared bullet plus the flag enabling reveal of the
/// original (redacted) span text in the rendering surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicianBullet {
    pub bullet: SummaryBullet,
    /// Taxonomy category in effect for this complaint
    pub category_code: String,
    pub category_name: String,
    pub reveal_source: bool,
}

/// Structured clinician summary, one bullet per standardized complaint in
/// anchor order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicianSummary {
    pub bullets: Vec<ClinicianBullet>,
    pub fields: ClinicianFields,
}

impl ClinicianSummary {
    pub fn anchors(&self) -> Vec<Anchor> {
        self.bullets.iter().map(|b| b.bullet.anchor).collect()
    }

    /// Glanceable sectioned rendering
    pub fn render(&self) -> String {
        let mut lines = vec!["Chief Complaint:".to_string()];
        if let Some(first) = self.bullets.first() {
            lines.push(format!("- {}", first.bullet.render()));
        }

        lines.push("Findings:".to_string());
        for b in &self.bullets {
            lines.push(format!(
                "- {} (category {} - {})",
                b.bullet.render(),
                b.category_code,
                b.category_name
            ));
        }

        lines.push("Plan:".to_string());
        lines.push(format!("- Diagnosis: {}", self.fields.diagnosis));
        lines.push(format!("- Severity: {}/3", self.fields.severity.level()));
        lines.push(format!(
            "- Treatment duration: {} days",
            self.fields.treatment_duration_days
        ));
        lines.join("\n")
    }
}
