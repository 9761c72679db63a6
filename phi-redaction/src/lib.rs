//! Fail-safe PHI redaction for consultation transcripts
//!
//! Detects and masks personally identifiable health information (names,
//! phone numbers, postal addresses, email addresses, custom patterns) before
//! any downstream stage sees the text.
//!
//! # Policy
//!
//! **Fail-safe, never fail-open.** A detector that cannot be built (for
//! example a custom pattern that fails to compile) is replaced by a broad
//! over-redaction detector for its category rather than being skipped; the
//! substitution is logged as a warning and never surfaced as an error.
//!
//! The redaction event log records only the PHI category, span offsets into
//! the raw text, and the replacement token. The matched value itself is never
//! stored.
//!
//! # Example
//!
//! ```rust
//! use phi_redaction::{Redactor, RedactionConfig};
//!
//! let redactor = Redactor::new(RedactionConfig::default());
//! let outcome = redactor.redact("call me at 555-123-4567 about my headache");
//! assert!(!outcome.text.contains("555-123-4567"));
//! ```

pub mod config;
pub mod detectors;
pub mod redactor;

pub use config::*;
pub use detectors::*;
pub use redactor::*;
