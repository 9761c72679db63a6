use complaint_classifier::{ClassificationResult, DiseaseTaxonomy, StandardizedComplaint};
use tracing::debug;

use crate::bullets::{Audience, SummaryBullet};
use crate::clinician::{ClinicianBullet, ClinicianSummary};
use crate::error::{SummaryError, SummaryResult};
use crate::fields::ClinicianFields;
use crate::patient::{ActionItem, PatientSummary};
use crate::signal::ReportStatus;

/// Both renderings of one consultation
#[derive(Debug, Clone)]
pub struct SummaryPair {
    pub clinician: ClinicianSummary,
    pub patient: PatientSummary,
}

impl SummaryPair {
    /// Grounding property: the two summaries reference identical anchor sets
    pub fn anchors_match(&self) -> bool {
        let mut clinician = self.clinician.anchors();
        let mut patient = self.patient.anchors();
        clinician.sort_by_key(|a| a.id);
        patient.sort_by_key(|a| a.id);
        clinician == patient
    }
}

/// Composes clinician and patient summaries from the classification output
/// plus clinician-entered fields
pub struct SummaryGenerator;

impl SummaryGenerator {
    /// `complaints` and `results` are parallel, one entry per complaint.
    /// Bullets are emitted in anchor order for both audiences.
    pub fn generate(
        complaints: &[StandardizedComplaint],
        results: &[ClassificationResult],
        fields: ClinicianFields,
        taxonomy: &DiseaseTaxonomy,
    ) -> SummaryResult<SummaryPair> {
        if complaints.len() != results.len() {
            return Err(SummaryError::InputMismatch {
                complaints: complaints.len(),
                results: results.len(),
            });
        }
        if complaints.is_empty() {
            return Err(SummaryError::Empty);
        }

        let mut paired: Vec<(&StandardizedComplaint, &ClassificationResult)> =
            complaints.iter().zip(results.iter()).collect();
        paired.sort_by_key(|(c, _)| c.anchor.id);

        let mut clinician_bullets = Vec::with_capacity(paired.len());
        let mut patient_bullets = Vec::with_capacity(paired.len());
        for (complaint, result) in &paired {
            let category_name = taxonomy
                .category(&result.effective)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Unknown".to_string());
            clinician_bullets.push(ClinicianBullet {
                bullet: SummaryBullet {
                    anchor: complaint.anchor,
                    audience: Audience::Clinician,
                    text: complaint.text.clone(),
                },
                category_code: result.effective.clone(),
                category_name,
                reveal_source: true,
            });
            patient_bullets.push(SummaryBullet {
                anchor: complaint.anchor,
                audience: Audience::Patient,
                text: format!("You reported: {}", complaint.text),
            });
        }

        let mut actions: Vec<ActionItem> = fields
            .prescriptions
            .iter()
            .map(|p| ActionItem {
                priority: p.priority,
                text: format!("{} - {}", p.name, p.instructions),
            })
            .collect();
        actions.sort_by_key(|a| a.priority);

        let severity = fields.severity;
        let pair = SummaryPair {
            clinician: ClinicianSummary {
                bullets: clinician_bullets,
                fields,
            },
            patient: PatientSummary {
                bullets: patient_bullets,
                status: ReportStatus::Submitted,
                severity,
                actions,
            },
        };
        debug!(bullets = pair.clinician.bullets.len(), "summaries generated");
        Ok(pair)
    }
}
