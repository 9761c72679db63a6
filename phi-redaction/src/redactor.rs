use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RedactionConfig;
use crate::detectors::{DetectorSet, PhiCategory};

/// One masking applied to the raw transcript. Offsets index the raw text;
/// the matched value is never carried, only its category and replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionEvent {
    pub start: usize,
    pub end: usize,
    pub category: PhiCategory,
    pub replacement: String,
}

/// Result of one redaction pass
#[derive(Debug, Clone)]
pub struct RedactionOutcome {
    /// Transcript with every detected PHI substring replaced by its
    /// category token
    pub text: String,
    /// Events ordered by raw-text start offset
    pub events: Vec<RedactionEvent>,
}

impl RedactionOutcome {
    /// Per-category event counts, suitable for the audit sink
    pub fn category_counts(&self) -> Vec<(PhiCategory, usize)> {
        let mut counts: Vec<(PhiCategory, usize)> = Vec::new();
        for event in &self.events {
            match counts.iter_mut().find(|(c, _)| *c == event.category) {
                Some((_, n)) => *n += 1,
                None => counts.push((event.category, 1)),
            }
        }
        counts
    }
}

/// PHI redactor for consultation transcripts
pub struct Redactor {
    detectors: DetectorSet,
}

impl Redactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self {
            detectors: DetectorSet::build(&config),
        }
    }

    /// Mask every detected PHI substring. Replacements are applied
    /// right-to-left so the recorded raw-text offsets stay valid.
    pub fn redact(&self, text: &str) -> RedactionOutcome {
        let matches = self.detectors.scan(text);
        let mut redacted = text.to_string();
        let mut events: Vec<RedactionEvent> = matches
            .iter()
            .map(|m| RedactionEvent {
                start: m.start,
                end: m.end,
                category: m.category,
                replacement: m.category.replacement_token().to_string(),
            })
            .collect();

        for event in events.iter().rev() {
            redacted.replace_range(event.start..event.end, &event.replacement);
        }
        events.sort_by_key(|e| e.start);

        debug!(events = events.len(), "transcript redacted");
        RedactionOutcome {
            text: redacted,
            events,
        }
    }

    /// Detector view shared with the provenance precondition rescan
    pub fn detectors(&self) -> &DetectorSet {
        &self.detectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_redaction() {
        let redactor = Redactor::new(RedactionConfig::default());
        let outcome = redactor.redact("call me at 555-123-4567 about my headache");
        assert!(!outcome.text.contains("555-123-4567"));
        assert!(outcome.text.contains("[PHONE]"));
        assert!(outcome.text.contains("headache"));
    }

    #[test]
    fn test_name_and_email_redaction() {
        let redactor = Redactor::new(RedactionConfig::default());
        let raw = "My name is Alex Tan. Email: alex.tan@example.com. I have had a fever for two days.";
        let outcome = redactor.redact(raw);
        assert!(!outcome.text.contains("Alex Tan"));
        assert!(!outcome.text.contains("alex.tan@example.com"));
        assert!(outcome.text.contains("fever for two days"));
    }

    #[test]
    fn test_address_redaction() {
        let redactor = Redactor::new(RedactionConfig::default());
        let outcome = redactor.redact("I live at 42 Orchard Road and feel dizzy");
        assert!(!outcome.text.contains("42 Orchard Road"));
        assert!(outcome.text.contains("[ADDRESS]"));
    }

    #[test]
    fn test_event_log_carries_no_raw_values() {
        let redactor = Redactor::new(RedactionConfig::default());
        let raw = "Mobile: 555-123-4567, name Alex Tan";
        let outcome = redactor.redact(raw);
        assert!(!outcome.events.is_empty());
        let serialized = serde_json::to_string(&outcome.events).unwrap();
        assert!(!serialized.contains("555-123-4567"));
        assert!(!serialized.contains("Alex Tan"));
    }

    #[test]
    fn test_overlapping_matches_masked_to_their_union() {
        let redactor = Redactor::new(RedactionConfig::default());
        // The address match ends inside a trailing name-pair match; the
        // whole union must be masked, not just the earlier span.
        let outcome = redactor.redact("I live at 9 Alex Tan Way Lee and feel unwell");
        assert!(!outcome.text.contains("Alex"));
        assert!(!outcome.text.contains("Lee"));
        assert!(outcome.text.contains("feel unwell"));
    }

    #[test]
    fn test_bad_custom_pattern_over_redacts() {
        let config = RedactionConfig::default().with_custom_pattern("[unclosed");
        let redactor = Redactor::new(config);
        // Digit run that the standard phone detector alone would not mask
        let outcome = redactor.redact("policy number 12 34 56 78 on file");
        assert!(!outcome.text.contains("12 34 56 78"));
    }
}
