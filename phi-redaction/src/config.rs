use serde::{Deserialize, Serialize};

/// PHI redaction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    pub redact_names: bool,
    pub redact_phones: bool,
    pub redact_addresses: bool,
    pub redact_emails: bool,
    /// Custom PHI patterns as regex source strings. A pattern that fails to
    /// compile triggers over-redaction for the `Other` category instead of
    /// being skipped.
    pub custom_patterns: Vec<String>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_names: true,
            redact_phones: true,
            redact_addresses: true,
            redact_emails: true,
            custom_patterns: Vec::new(),
        }
    }
}

impl RedactionConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let flag = |key: &str| {
            std::env::var(key)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true)
        };

        let custom_patterns = std::env::var("PHI_CUSTOM_PATTERNS")
            .map(|s| {
                s.split(';')
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            redact_names: flag("PHI_REDACT_NAMES"),
            redact_phones: flag("PHI_REDACT_PHONES"),
            redact_addresses: flag("PHI_REDACT_ADDRESSES"),
            redact_emails: flag("PHI_REDACT_EMAILS"),
            custom_patterns,
        }
    }

    pub fn with_custom_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.custom_patterns.push(pattern.into());
        self
    }
}
