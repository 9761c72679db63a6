use std::collections::HashMap;

use phi_redaction::DetectorSet;
use tracing::debug;

use crate::anchor::Anchor;
use crate::error::{AnchorIntegrityViolation, ProvenanceResult};

/// Allocates anchors over one session's redacted transcript.
///
/// Single-writer within a session: all anchor allocation goes through one
/// indexer instance, and spans must arrive in non-decreasing start order.
pub struct ProvenanceIndexer {
    text: String,
    detectors: DetectorSet,
    by_span: HashMap<(usize, usize), Anchor>,
    next_id: u32,
    last_start: usize,
}

impl ProvenanceIndexer {
    /// Build an indexer over the redacted transcript. The detector set must
    /// be the one the transcript was redacted with, so the precondition
    /// rescan sees exactly what the redactor saw.
    pub fn new(redacted_text: impl Into<String>, detectors: DetectorSet) -> Self {
        Self {
            text: redacted_text.into(),
            detectors,
            by_span: HashMap::new(),
            next_id: 1,
            last_start: 0,
        }
    }

    /// Return the anchor for a span, creating one if none exists for that
    /// exact span. Idempotent per distinct span; ids are monotonic and never
    /// reused. `span_text` must be the caller's copy of the span, which is
    /// verified against the indexed redacted transcript; a mismatch means
    /// the caller is holding pre-redaction text and is fatal.
    pub fn anchor_for(
        &mut self,
        start: usize,
        end: usize,
        span_text: &str,
    ) -> ProvenanceResult<Anchor> {
        if let Some(anchor) = self.by_span.get(&(start, end)) {
            return Ok(*anchor);
        }

        if start >= end || end > self.text.len() {
            return Err(AnchorIntegrityViolation::OutOfBounds { start, end });
        }
        if !self.text.is_char_boundary(start) || !self.text.is_char_boundary(end) {
            return Err(AnchorIntegrityViolation::NotCharAligned { start, end });
        }
        let indexed = &self.text[start..end];
        if indexed != span_text {
            return Err(AnchorIntegrityViolation::TextMismatch { start, end });
        }
        if self.detectors.contains_phi(indexed) {
            return Err(AnchorIntegrityViolation::UnredactedPhi { start, end });
        }
        if start < self.last_start {
            return Err(AnchorIntegrityViolation::NonMonotonicSpan {
                start,
                last: self.last_start,
            });
        }

        let anchor = Anchor {
            id: self.next_id,
            start,
            end,
        };
        self.next_id += 1;
        self.last_start = start;
        self.by_span.insert((start, end), anchor);
        debug!(anchor = %anchor, "anchor allocated");
        Ok(anchor)
    }

    /// Span text an anchor resolves to, for the clinician reveal toggle.
    /// Returns `None` for anchors this indexer did not allocate.
    pub fn resolve(&self, anchor: &Anchor) -> Option<&str> {
        self.by_span
            .contains_key(&(anchor.start, anchor.end))
            .then(|| &self.text[anchor.start..anchor.end])
    }

    /// The redacted transcript this indexer was built over
    pub fn redacted_text(&self) -> &str {
        &self.text
    }

    pub fn anchor_count(&self) -> usize {
        self.by_span.len()
    }
}
