//! Audit sink for the consultation pipeline
//!
//! Receives redaction counts/categories and classifier-fallback events, and
//! never raw PHI or transcript text: entry constructors accept only counts,
//! category labels, and reason codes, so the log is PHI-free by construction.

pub mod entry;
pub mod error;
pub mod sink;

pub use entry::*;
pub use error::*;
pub use sink::*;
