use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, ClassifierResult};

const DEFAULT_TERMINOLOGY: &str = include_str!("../data/terminology.yaml");

/// One standardized complaint descriptor from the terminology library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Descriptor {
    /// Shorthand code, e.g. `RESP_ACUTE`
    pub code: String,
    /// Standardized descriptor text, patient-friendly and glanceable
    pub text: String,
    /// Cue vocabulary feeding the similarity classifier's lexicon
    #[serde(default)]
    pub cues: Vec<String>,
    /// Ordered fallback keyword rules; a rule matches when every keyword
    /// appears in the lowercased complaint span
    #[serde(default)]
    pub rules: Vec<Vec<String>>,
}

/// Static read-only terminology library: standardized descriptor ↔ shorthand
/// code, plus the ordered keyword rules the fallback path uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminologyLibrary {
    pub descriptors: Vec<Descriptor>,
    /// Sentinel descriptor emitted when nothing matches
    pub unspecified: Descriptor,
}

impl TerminologyLibrary {
    /// Library embedded at build time
    pub fn load_default() -> ClassifierResult<Self> {
        Self::from_yaml(DEFAULT_TERMINOLOGY)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ClassifierResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> ClassifierResult<Self> {
        let library: Self = serde_yaml::from_str(raw)?;
        if library.descriptors.is_empty() {
            return Err(ClassifierError::ReferenceData(
                "terminology library has no descriptors".to_string(),
            ));
        }
        Ok(library)
    }

    pub fn descriptor(&self, code: &str) -> Option<&Descriptor> {
        if code == self.unspecified.code {
            return Some(&self.unspecified);
        }
        self.descriptors.iter().find(|d| d.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_library_loads() {
        let library = TerminologyLibrary::load_default().unwrap();
        assert!(library.descriptors.len() >= 6);
        assert_eq!(library.unspecified.code, "UNSPECIFIED");
    }

    #[test]
    fn test_descriptor_lookup_covers_sentinel() {
        let library = TerminologyLibrary::load_default().unwrap();
        let resp = library.descriptor("RESP_ACUTE").unwrap();
        assert_eq!(resp.text, "Acute cough with fever and yellow sputum (~3 days)");
        assert!(library.descriptor("UNSPECIFIED").is_some());
        assert!(library.descriptor("NO_SUCH_CODE").is_none());
    }
}
