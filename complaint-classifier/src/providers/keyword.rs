//! Deterministic keyword fallback.
//!
//! Applies the terminology library's ordered rule list: the first rule whose
//! every keyword appears in the lowercased span wins. Used when the primary
//! model is unavailable, times out, or scores below threshold.

use async_trait::async_trait;

use crate::error::ClassifierResult;
use crate::providers::{ClassifierScore, ComplaintClassifier};
use crate::terminology::TerminologyLibrary;

struct Rule {
    keywords: Vec<String>,
    code: String,
}

pub struct KeywordFallback {
    rules: Vec<Rule>,
    confidence: f32,
}

impl KeywordFallback {
    pub fn new(library: &TerminologyLibrary, confidence: f32) -> Self {
        let mut rules = Vec::new();
        for descriptor in &library.descriptors {
            for rule in &descriptor.rules {
                rules.push(Rule {
                    keywords: rule.iter().map(|k| k.to_lowercase()).collect(),
                    code: descriptor.code.clone(),
                });
            }
        }
        Self { rules, confidence }
    }

    /// Synchronous rule match, also used directly by the standardizer
    pub fn match_rules(&self, span_text: &str) -> Option<ClassifierScore> {
        let lowered = span_text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().all(|k| lowered.contains(k.as_str())))
            .map(|rule| ClassifierScore {
                code: rule.code.clone(),
                score: self.confidence,
            })
    }
}

#[async_trait]
impl ComplaintClassifier for KeywordFallback {
    async fn classify(&self, span_text: &str) -> ClassifierResult<Option<ClassifierScore>> {
        Ok(self.match_rules(span_text))
    }

    fn name(&self) -> &'static str {
        "keyword-fallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback() -> KeywordFallback {
        KeywordFallback::new(&TerminologyLibrary::load_default().unwrap(), 0.50)
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let score = fallback()
            .match_rules("I've had a fever and cough for three days.")
            .unwrap();
        assert_eq!(score.code, "RESP_ACUTE");
        assert_eq!(score.score, 0.50);
    }

    #[test]
    fn test_multi_keyword_rule_requires_all_keywords() {
        let fallback = fallback();
        assert!(fallback.match_rules("just a fever today").is_none());
        let score = fallback
            .match_rules("my joints feel stiff in the morning")
            .unwrap();
        assert_eq!(score.code, "MSK_STIFF_PAIN");
    }

    #[test]
    fn test_no_rule_match_yields_none() {
        assert!(fallback().match_rules("I feel generally unwell").is_none());
    }
}
