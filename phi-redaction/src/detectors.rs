use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::RedactionConfig;

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(
        r"\b(?:\+\d{1,3}[-.\s]?)?\(?([0-9]{3,4})\)?[-.\s]?([0-9]{3,4})[-.\s]?([0-9]{4})\b"
    )
    .unwrap();
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    static ref ADDRESS_REGEX: Regex = Regex::new(
        r"\b\d{1,5}\s+[A-Z][A-Za-z]*(?:\s+[A-Z][A-Za-z]*)*\s+(?:Street|St|Avenue|Ave|Road|Rd|Lane|Ln|Drive|Dr|Boulevard|Blvd|Court|Ct|Way)\b\.?"
    )
    .unwrap();
    static ref HONORIFIC_NAME_REGEX: Regex = Regex::new(
        r"\b(?:Mr|Mrs|Ms|Dr|Prof)\.?\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?\b"
    )
    .unwrap();
    static ref NAME_PAIR_REGEX: Regex =
        Regex::new(r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b").unwrap();
    // Broad pattern used when a configured detector cannot be built: masks
    // digit runs and capitalized word pairs so ambiguous matches never pass
    // through unmasked.
    static ref OVER_REDACT_REGEX: Regex = Regex::new(
        r"(?:\d[\s.-]?){5,}\d|\b[A-Z][a-z]+\s+[A-Z][a-z]+\b"
    )
    .unwrap();
}

/// PHI category of a detected substring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhiCategory {
    Name,
    Phone,
    Address,
    Email,
    Other,
}

impl PhiCategory {
    /// Replacement token written into the redacted text for this category
    pub fn replacement_token(&self) -> &'static str {
        match self {
            PhiCategory::Name => "[NAME]",
            PhiCategory::Phone => "[PHONE]",
            PhiCategory::Address => "[ADDRESS]",
            PhiCategory::Email => "[EMAIL]",
            PhiCategory::Other => "[REDACTED]",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PhiCategory::Name => "name",
            PhiCategory::Phone => "phone",
            PhiCategory::Address => "address",
            PhiCategory::Email => "email",
            PhiCategory::Other => "other",
        }
    }
}

/// A raw-text match reported by a detector. Carries offsets and category
/// only; the matched value is read from the text exactly once, at masking
/// time, and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhiMatch {
    pub start: usize,
    pub end: usize,
    pub category: PhiCategory,
}

struct Detector {
    category: PhiCategory,
    pattern: Regex,
}

/// Compiled detector set for one redaction configuration
pub struct DetectorSet {
    detectors: Vec<Detector>,
}

impl DetectorSet {
    /// Build the detector set. Custom patterns that fail to compile are
    /// replaced by the broad over-redaction detector for the `Other`
    /// category; the failure is logged and never propagated.
    pub fn build(config: &RedactionConfig) -> Self {
        let mut detectors = Vec::new();

        if config.redact_phones {
            detectors.push(Detector {
                category: PhiCategory::Phone,
                pattern: PHONE_REGEX.clone(),
            });
        }
        if config.redact_emails {
            detectors.push(Detector {
                category: PhiCategory::Email,
                pattern: EMAIL_REGEX.clone(),
            });
        }
        if config.redact_addresses {
            detectors.push(Detector {
                category: PhiCategory::Address,
                pattern: ADDRESS_REGEX.clone(),
            });
        }
        if config.redact_names {
            detectors.push(Detector {
                category: PhiCategory::Name,
                pattern: HONORIFIC_NAME_REGEX.clone(),
            });
            detectors.push(Detector {
                category: PhiCategory::Name,
                pattern: NAME_PAIR_REGEX.clone(),
            });
        }

        let mut over_redact = false;
        for source in &config.custom_patterns {
            match Regex::new(source) {
                Ok(pattern) => detectors.push(Detector {
                    category: PhiCategory::Other,
                    pattern,
                }),
                Err(error) => {
                    warn!(
                        category = "other",
                        %error,
                        "custom PHI pattern failed to compile, over-redacting"
                    );
                    over_redact = true;
                }
            }
        }
        if over_redact {
            detectors.push(Detector {
                category: PhiCategory::Other,
                pattern: OVER_REDACT_REGEX.clone(),
            });
        }

        Self { detectors }
    }

    /// Scan text for PHI matches. Matches are ordered by start offset;
    /// overlapping matches are merged into their union under the earliest
    /// (then longest) match's category, so no tail of a detected match is
    /// left unmasked and the result can be masked right-to-left without
    /// offset drift.
    pub fn scan(&self, text: &str) -> Vec<PhiMatch> {
        let mut matches: Vec<PhiMatch> = Vec::new();
        for detector in &self.detectors {
            for m in detector.pattern.find_iter(text) {
                matches.push(PhiMatch {
                    start: m.start(),
                    end: m.end(),
                    category: detector.category,
                });
            }
        }
        matches.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut resolved: Vec<PhiMatch> = Vec::new();
        for m in matches {
            if let Some(prev) = resolved.last_mut() {
                if m.start < prev.end {
                    prev.end = prev.end.max(m.end);
                    continue;
                }
            }
            resolved.push(m);
        }
        resolved
    }

    /// True if any detector matches anywhere in the text
    pub fn contains_phi(&self, text: &str) -> bool {
        self.detectors.iter().any(|d| d.pattern.is_match(text))
    }
}
