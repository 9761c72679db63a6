use std::sync::Arc;

use audit_log::{AuditEntry, AuditSink};
use complaint_classifier::{
    complaint_candidates, segment, ClassificationResult, ClassifierConfig,
    ComplaintStandardizer, DiseaseClassifier, ReferenceData, StandardizedComplaint,
};
use phi_redaction::{DetectorSet, RedactionConfig, RedactionEvent, Redactor};
use provenance_index::{Anchor, ProvenanceIndexer};
use summary_engine::{ClinicianFields, SummaryGenerator, SummaryPair};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{PipelineError, PipelineResult};

/// Everything one session produced. All referenced spans index
/// `redacted_text`; the raw transcript is gone by the time this exists.
pub struct ConsultationReport {
    pub session_id: Uuid,
    pub redacted_text: String,
    pub redaction_events: Vec<RedactionEvent>,
    pub complaints: Vec<StandardizedComplaint>,
    pub results: Vec<ClassificationResult>,
    pub summaries: SummaryPair,
}

impl ConsultationReport {
    /// Redacted span text behind an anchor, for the clinician reveal toggle
    pub fn anchor_text(&self, anchor: &Anchor) -> Option<&str> {
        self.redacted_text.get(anchor.start..anchor.end)
    }
}

/// Stage-1 + Stage-2 output for one free-text complaint (the CLI surface).
/// Category display names are resolved here so callers never reload the
/// taxonomy.
#[derive(Debug)]
pub struct ComplaintReport {
    pub complaint: StandardizedComplaint,
    pub result: ClassificationResult,
    pub suggested_name: String,
    pub effective_name: String,
}

/// One configured pipeline. Holds only immutable configuration and shared
/// read-only reference data, so a single instance serves concurrent
/// sessions; per-session state (indexer, anchors) lives inside `run`.
pub struct ConsultationPipeline {
    redaction_config: RedactionConfig,
    classifier_config: ClassifierConfig,
    reference: ReferenceData,
    audit: Arc<AuditSink>,
}

impl ConsultationPipeline {
    pub fn new(
        redaction_config: RedactionConfig,
        classifier_config: ClassifierConfig,
        reference: ReferenceData,
        audit: Arc<AuditSink>,
    ) -> Self {
        Self {
            redaction_config,
            classifier_config,
            reference,
            audit,
        }
    }

    /// Pipeline with default configuration and embedded reference data
    pub fn with_defaults() -> PipelineResult<Self> {
        Ok(Self::new(
            RedactionConfig::default(),
            ClassifierConfig::default(),
            ReferenceData::load_default()?,
            Arc::new(AuditSink::new()),
        ))
    }

    pub fn audit(&self) -> &AuditSink {
        &self.audit
    }

    /// Process one consultation session end to end
    #[instrument(skip_all, fields(session_id))]
    pub async fn run(
        &self,
        raw_transcript: &str,
        fields: ClinicianFields,
    ) -> PipelineResult<ConsultationReport> {
        let session_id = Uuid::new_v4();
        tracing::Span::current().record("session_id", tracing::field::display(session_id));

        // Redact, then log counts (never values) to the audit sink
        let redactor = Redactor::new(self.redaction_config.clone());
        let outcome = redactor.redact(raw_transcript);
        let counts: Vec<(&str, usize)> = outcome
            .category_counts()
            .iter()
            .map(|(category, n)| (category.as_str(), *n))
            .collect();
        self.audit
            .log(AuditEntry::redaction_applied(session_id, &counts));

        // Anchor allocation is single-writer: one indexer per session
        let mut indexer = ProvenanceIndexer::new(
            outcome.text.clone(),
            DetectorSet::build(&self.redaction_config),
        );

        let spans = segment(&outcome.text);
        let candidates = complaint_candidates(&spans);
        if candidates.is_empty() {
            return Err(PipelineError::EmptyTranscript);
        }

        let standardizer = ComplaintStandardizer::new(
            self.classifier_config.clone(),
            self.reference.terminology.clone(),
        );
        let mut complaints = Vec::with_capacity(candidates.len());
        for span in candidates {
            let anchor = indexer.anchor_for(span.start, span.end, &span.text)?;
            let standardization = standardizer.standardize(&span.text, anchor).await;
            if let Some(reason) = standardization.fallback_reason {
                if reason.is_unavailability() {
                    self.audit
                        .log(AuditEntry::classifier_fallback(session_id, reason.as_str()));
                }
            }
            complaints.push(standardization.complaint);
        }

        let disease = DiseaseClassifier::new(self.reference.taxonomy.clone());
        let results: Vec<ClassificationResult> =
            complaints.iter().map(|c| disease.classify(c)).collect();

        let summaries = SummaryGenerator::generate(
            &complaints,
            &results,
            fields,
            &self.reference.taxonomy,
        )?;

        info!(
            complaints = complaints.len(),
            redactions = outcome.events.len(),
            "session complete"
        );
        Ok(ConsultationReport {
            session_id,
            redacted_text: outcome.text,
            redaction_events: outcome.events,
            complaints,
            results,
            summaries,
        })
    }

    /// Classify one free-text complaint without rendering summaries: the
    /// whole (redacted) input is treated as a single anchored span. An
    /// optional clinician override is validated against the taxonomy and
    /// applied to the effective category.
    pub async fn classify_complaint(
        &self,
        complaint_text: &str,
        override_code: Option<&str>,
    ) -> PipelineResult<ComplaintReport> {
        let trimmed = complaint_text.trim();
        if trimmed.is_empty() {
            return Err(PipelineError::EmptyTranscript);
        }
        let session_id = Uuid::new_v4();

        let redactor = Redactor::new(self.redaction_config.clone());
        let outcome = redactor.redact(trimmed);

        let mut indexer = ProvenanceIndexer::new(
            outcome.text.clone(),
            DetectorSet::build(&self.redaction_config),
        );
        let anchor = indexer.anchor_for(0, outcome.text.len(), &outcome.text)?;

        let standardizer = ComplaintStandardizer::new(
            self.classifier_config.clone(),
            self.reference.terminology.clone(),
        );
        let standardization = standardizer.standardize(&outcome.text, anchor).await;
        if let Some(reason) = standardization.fallback_reason {
            if reason.is_unavailability() {
                self.audit
                    .log(AuditEntry::classifier_fallback(session_id, reason.as_str()));
            }
        }

        let disease = DiseaseClassifier::new(self.reference.taxonomy.clone());
        let mut result = disease.classify(&standardization.complaint);
        if let Some(code) = override_code {
            disease.apply_override(&mut result, code)?;
        }

        let suggested_name = self.category_name(&result.suggested);
        let effective_name = self.category_name(&result.effective);
        Ok(ComplaintReport {
            complaint: standardization.complaint,
            result,
            suggested_name,
            effective_name,
        })
    }

    fn category_name(&self, code: &str) -> String {
        self.reference
            .taxonomy
            .category(code)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }
}
