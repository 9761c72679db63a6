//! Provenance anchors for consultation summaries
//!
//! Every claim a summary makes must be traceable to a span of the *redacted*
//! transcript. This crate assigns immutable `[S#]` anchors to those spans.
//!
//! Anchoring pre-redaction text is a fatal integrity violation, not a
//! recoverable error: the indexer verifies the span text against its own copy
//! of the redacted transcript and rescans it with the PHI detector set before
//! allocating an anchor.

pub mod anchor;
pub mod error;
pub mod indexer;

pub use anchor::*;
pub use error::*;
pub use indexer::*;
