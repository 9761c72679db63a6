//! Consultation processing pipeline
//!
//! One sequential invocation per session: redact → anchor → classify Stage-1
//! → classify Stage-2 → summarize. Each stage depends on the previous
//! stage's output; independent sessions are fully isolated and may run
//! concurrently, sharing only the read-only reference data.
//!
//! Only an anchor integrity violation aborts a session before summaries are
//! emitted. Detector failures recover by over-redaction, classifier
//! unavailability falls through to the keyword fallback, and unmatched spans
//! surface as ordinary sentinel values.

pub mod error;
pub mod pipeline;

pub use error::*;
pub use pipeline::*;
