use std::sync::Arc;

use provenance_index::Anchor;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClassifierError, ClassifierResult};
use crate::standardizer::StandardizedComplaint;
use crate::taxonomy::DiseaseTaxonomy;

/// Stage-2 output. `suggested` is computed here; `effective` starts equal to
/// `suggested` and may be overridden by a clinician exactly once; the core
/// never changes it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub suggested: String,
    pub effective: String,
    /// Carried through from the Stage-1 complaint
    pub confidence: f32,
    pub anchor: Anchor,
    overridden: bool,
}

impl ClassificationResult {
    pub fn is_overridden(&self) -> bool {
        self.overridden
    }
}

/// Stage-2: standardized descriptor text → taxonomy category.
///
/// Counts keyword matches between the standardized text and each category's
/// keyword set; the highest count wins, ties break to the lowest category
/// code, and zero matches resolve to the designated unclassified category.
pub struct DiseaseClassifier {
    taxonomy: Arc<DiseaseTaxonomy>,
}

impl DiseaseClassifier {
    pub fn new(taxonomy: Arc<DiseaseTaxonomy>) -> Self {
        Self { taxonomy }
    }

    pub fn classify(&self, complaint: &StandardizedComplaint) -> ClassificationResult {
        let code = self.classify_text(&complaint.text);
        debug!(complaint = %complaint.code, category = %code, "stage-2 classified");
        ClassificationResult {
            suggested: code.clone(),
            effective: code,
            confidence: complaint.confidence,
            anchor: complaint.anchor,
            overridden: false,
        }
    }

    /// Keyword-count match over the taxonomy; deterministic by construction
    /// (categories are kept in ascending code order, strict improvement
    /// required to displace the current best)
    pub fn classify_text(&self, standardized_text: &str) -> String {
        let lowered = standardized_text.to_lowercase();
        let mut best_code: Option<&str> = None;
        let mut best_count = 0usize;

        for category in &self.taxonomy.categories {
            let count = category
                .keywords
                .iter()
                .filter(|k| lowered.contains(k.as_str()))
                .count();
            if count > best_count {
                best_count = count;
                best_code = Some(&category.code);
            }
        }

        best_code
            .unwrap_or(self.taxonomy.unclassified.as_str())
            .to_string()
    }

    /// Apply a clinician override. The code must exist in the taxonomy and
    /// the result must not already be overridden.
    pub fn apply_override(
        &self,
        result: &mut ClassificationResult,
        code: &str,
    ) -> ClassifierResult<()> {
        if result.overridden {
            return Err(ClassifierError::AlreadyOverridden);
        }
        if !self.taxonomy.contains(code) {
            return Err(ClassifierError::UnknownCode(code.to_string()));
        }
        result.effective = code.to_string();
        result.overridden = true;
        Ok(())
    }

    pub fn taxonomy(&self) -> &DiseaseTaxonomy {
        &self.taxonomy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standardizer::Method;

    fn classifier() -> DiseaseClassifier {
        DiseaseClassifier::new(Arc::new(DiseaseTaxonomy::load_default().unwrap()))
    }

    fn complaint(code: &str, text: &str) -> StandardizedComplaint {
        StandardizedComplaint {
            code: code.to_string(),
            text: text.to_string(),
            anchor: Anchor {
                id: 1,
                start: 0,
                end: 10,
            },
            confidence: 0.8,
            method: Method::Model,
        }
    }

    #[test]
    fn test_respiratory_descriptor_maps_to_chapter_12() {
        let result = classifier().classify(&complaint(
            "RESP_ACUTE",
            "Acute cough with fever and yellow sputum (~3 days)",
        ));
        assert_eq!(result.suggested, "12");
        assert_eq!(result.effective, "12");
        assert!(!result.is_overridden());
    }

    #[test]
    fn test_equal_match_counts_break_to_lowest_code() {
        // One visual-system keyword, one skin keyword: codes 09 and 14 tie
        let code = classifier().classify_text("eye irritation with a mild rash");
        assert_eq!(code, "09");
    }

    #[test]
    fn test_no_keyword_match_resolves_to_unclassified() {
        let code = classifier().classify_text("General symptoms requiring further triage");
        assert_eq!(code, "21");
    }

    #[test]
    fn test_override_applies_exactly_once() {
        let classifier = classifier();
        let mut result = classifier.classify(&complaint(
            "ENDO_CHRONIC_GLYC",
            "Chronic polydipsia/polyuria suggestive of glycemic dysregulation",
        ));
        assert_eq!(result.suggested, "05");

        classifier.apply_override(&mut result, "21").unwrap();
        assert_eq!(result.effective, "21");
        assert_eq!(result.suggested, "05");

        let err = classifier.apply_override(&mut result, "12").unwrap_err();
        assert!(matches!(err, ClassifierError::AlreadyOverridden));
        assert_eq!(result.effective, "21");
    }

    #[test]
    fn test_override_rejects_unknown_code() {
        let classifier = classifier();
        let mut result = classifier.classify(&complaint("RESP_ACUTE", "cough"));
        let err = classifier.apply_override(&mut result, "99").unwrap_err();
        assert!(matches!(err, ClassifierError::UnknownCode(_)));
        assert_eq!(result.effective, result.suggested);
    }
}
