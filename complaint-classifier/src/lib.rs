//! Two-stage complaint classification
//!
//! Maps free-text complaint spans from a redacted consultation transcript to
//! standardized descriptors (Stage-1) and on to taxonomy categories
//! (Stage-2), with a deterministic keyword fallback that keeps both stages
//! working when the primary classification model is degraded or absent.
//!
//! # Stages
//!
//! - **Stage-1** ([`ComplaintStandardizer`]): complaint span → standardized
//!   descriptor + shorthand code. Primary path is a similarity search against
//!   the reference terminology library, bounded by a timeout; below-threshold
//!   scores, timeouts, and errors fall through to ordered keyword rules, and
//!   an unmatched span emits the `UNSPECIFIED` sentinel. A non-empty span
//!   always yields exactly one result.
//! - **Stage-2** ([`DiseaseClassifier`]): standardized text → taxonomy
//!   category by keyword-match counting; ties break to the lowest category
//!   code; no match resolves to the designated unclassified category. A
//!   clinician may override the effective category exactly once.
//!
//! Reference data (terminology library, disease taxonomy) is embedded YAML
//! loaded once and shared immutably across sessions.

pub mod config;
pub mod disease;
pub mod error;
pub mod providers;
pub mod reference;
pub mod segmentation;
pub mod standardizer;
pub mod taxonomy;
pub mod terminology;

pub use config::*;
pub use disease::*;
pub use error::*;
pub use providers::{ClassifierScore, ComplaintClassifier};
pub use reference::*;
pub use segmentation::*;
pub use standardizer::*;
pub use taxonomy::*;
pub use terminology::*;
