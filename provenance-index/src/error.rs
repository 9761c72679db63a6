use thiserror::Error;

/// Fatal anchor integrity conditions. None of these are recoverable: the
/// pipeline must halt before emitting any summary, since continuing risks a
/// PHI leak or broken traceability.
#[derive(Error, Debug)]
pub enum AnchorIntegrityViolation {
    #[error("span {start}..{end} is out of bounds for the redacted transcript")]
    OutOfBounds { start: usize, end: usize },

    #[error("span {start}..{end} does not fall on character boundaries")]
    NotCharAligned { start: usize, end: usize },

    #[error("span {start}..{end} text does not match the indexed redacted transcript")]
    TextMismatch { start: usize, end: usize },

    #[error("span {start}..{end} still contains an unredacted PHI match")]
    UnredactedPhi { start: usize, end: usize },

    #[error("span start {start} precedes the last anchored span start {last}")]
    NonMonotonicSpan { start: usize, last: usize },
}

pub type ProvenanceResult<T> = Result<T, AnchorIntegrityViolation>;
