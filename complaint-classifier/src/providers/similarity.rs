//! Similarity-search primary classifier.
//!
//! Deterministic token-set overlap between the complaint span and each
//! descriptor's lexicon (descriptor text plus cue vocabulary). The overlap
//! coefficient |A ∩ B| / min(|A|, |B|) keeps short utterances comparable to
//! the richer lexicons.

use std::collections::HashSet;

use async_trait::async_trait;
use lazy_static::lazy_static;

use crate::error::ClassifierResult;
use crate::providers::{ClassifierScore, ComplaintClassifier};
use crate::terminology::TerminologyLibrary;

lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> = [
        "a", "an", "and", "the", "i", "ve", "m", "s", "is", "am", "are", "was",
        "had", "have", "has", "been", "for", "of", "with", "in", "on", "at",
        "my", "me", "it", "to", "since", "about", "some", "also", "this",
        "that", "lately", "when", "or",
    ]
    .into_iter()
    .collect();
}

pub(crate) fn tokenize(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty() && !STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}

struct Lexicon {
    code: String,
    tokens: HashSet<String>,
}

pub struct SimilarityClassifier {
    lexicons: Vec<Lexicon>,
}

impl SimilarityClassifier {
    pub fn new(library: &TerminologyLibrary) -> Self {
        let lexicons = library
            .descriptors
            .iter()
            .map(|d| {
                let mut tokens = tokenize(&d.text);
                for cue in &d.cues {
                    tokens.extend(tokenize(cue));
                }
                Lexicon {
                    code: d.code.clone(),
                    tokens,
                }
            })
            .collect();
        Self { lexicons }
    }

    fn overlap(span_tokens: &HashSet<String>, lexicon: &HashSet<String>) -> f32 {
        let smaller = span_tokens.len().min(lexicon.len());
        if smaller == 0 {
            return 0.0;
        }
        let shared = span_tokens.intersection(lexicon).count();
        shared as f32 / smaller as f32
    }
}

#[async_trait]
impl ComplaintClassifier for SimilarityClassifier {
    async fn classify(&self, span_text: &str) -> ClassifierResult<Option<ClassifierScore>> {
        let span_tokens = tokenize(span_text);
        if span_tokens.is_empty() {
            return Ok(None);
        }

        // Ties keep the first descriptor in library order
        let mut best: Option<ClassifierScore> = None;
        for lexicon in &self.lexicons {
            let score = Self::overlap(&span_tokens, &lexicon.tokens);
            if score > 0.0 && best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(ClassifierScore {
                    code: lexicon.code.clone(),
                    score,
                });
            }
        }
        Ok(best)
    }

    fn name(&self) -> &'static str {
        "similarity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> SimilarityClassifier {
        SimilarityClassifier::new(&TerminologyLibrary::load_default().unwrap())
    }

    #[tokio::test]
    async fn test_fever_cough_scores_respiratory() {
        let best = classifier()
            .classify("I've had a fever and cough for three days.")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(best.code, "RESP_ACUTE");
        assert!(best.score >= 0.30, "score {} below threshold", best.score);
    }

    #[tokio::test]
    async fn test_headache_scores_neurological() {
        let best = classifier()
            .classify("about my headache")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(best.code, "NEURO_HEADACHE");
    }

    #[tokio::test]
    async fn test_no_overlap_yields_none() {
        let best = classifier().classify("zzz qqq").await.unwrap();
        assert!(best.is_none());
    }

    #[test]
    fn test_tokenize_drops_stopwords() {
        let tokens = tokenize("I've had a fever and cough for three days.");
        assert!(tokens.contains("fever"));
        assert!(tokens.contains("cough"));
        assert!(!tokens.contains("and"));
        assert!(!tokens.contains("ve"));
    }
}
