//! Dual-audience consultation summaries
//!
//! Renders a clinician summary (structured, glanceable, with a reveal toggle
//! for source spans) and a patient summary (conversational, actionable) from
//! the same classification output, never duplicating or losing anchor
//! references between the two renderings: every anchor in one summary has a
//! matching bullet in the other.

pub mod bullets;
pub mod clinician;
pub mod error;
pub mod fields;
pub mod generator;
pub mod patient;
pub mod signal;

pub use bullets::*;
pub use clinician::*;
pub use error::*;
pub use fields::*;
pub use generator::*;
pub use patient::*;
pub use signal::*;
