use thiserror::Error;

/// Pipeline failure taxonomy. Everything except `AnchorIntegrity` is
/// recovered inside the stages; these variants are what can still halt a
/// session.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Fatal: continuing would risk a PHI leak or broken traceability
    #[error("anchor integrity violation: {0}")]
    AnchorIntegrity(#[from] provenance_index::AnchorIntegrityViolation),

    #[error("classifier error: {0}")]
    Classifier(#[from] complaint_classifier::ClassifierError),

    #[error("summary error: {0}")]
    Summary(#[from] summary_engine::SummaryError),

    #[error("transcript contains no complaint spans")]
    EmptyTranscript,
}

pub type PipelineResult<T> = Result<T, PipelineError>;
