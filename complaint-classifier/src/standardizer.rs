use std::sync::Arc;
use std::time::Duration;

use provenance_index::Anchor;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ClassifierConfig;
use crate::providers::keyword::KeywordFallback;
use crate::providers::{create_primary, ComplaintClassifier};
use crate::terminology::TerminologyLibrary;

/// How a standardized complaint was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Model,
    Fallback,
    Unspecified,
}

/// Stage-1 output: one standardized complaint bound to its source anchor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardizedComplaint {
    /// Shorthand descriptor code, e.g. `RESP_ACUTE`
    pub code: String,
    /// Standardized descriptor text
    pub text: String,
    pub anchor: Anchor,
    /// In [0, 1]; the model's score, the fixed fallback constant, or 0
    pub confidence: f32,
    pub method: Method,
}

/// Why the model path was abandoned for one span. `LowConfidence` is an
/// ordinary outcome; the others are audit-worthy unavailability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    Disabled,
    Timeout,
    Error,
    LowConfidence,
}

impl FallbackReason {
    pub fn is_unavailability(&self) -> bool {
        !matches!(self, FallbackReason::LowConfidence)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::Disabled => "disabled",
            FallbackReason::Timeout => "timeout",
            FallbackReason::Error => "error",
            FallbackReason::LowConfidence => "low_confidence",
        }
    }
}

/// One standardization outcome, with the fallback reason (if any) for the
/// audit sink
#[derive(Debug, Clone)]
pub struct Standardization {
    pub complaint: StandardizedComplaint,
    pub fallback_reason: Option<FallbackReason>,
}

/// Stage-1: maps complaint spans to standardized descriptors.
///
/// Selection strategy per call: try the primary model under a bounded
/// timeout; accept its best match at or above the similarity threshold;
/// otherwise apply the ordered keyword rules; otherwise emit the
/// `UNSPECIFIED` sentinel. A non-empty span always produces exactly one
/// complaint, which the downstream fixed-format summaries rely on.
pub struct ComplaintStandardizer {
    config: ClassifierConfig,
    library: Arc<TerminologyLibrary>,
    primary: Box<dyn ComplaintClassifier>,
    fallback: KeywordFallback,
}

impl ComplaintStandardizer {
    pub fn new(config: ClassifierConfig, library: Arc<TerminologyLibrary>) -> Self {
        let primary = create_primary(&library);
        Self::with_primary(config, library, primary)
    }

    /// Build the standardizer around a caller-supplied primary classifier
    pub fn with_primary(
        config: ClassifierConfig,
        library: Arc<TerminologyLibrary>,
        primary: Box<dyn ComplaintClassifier>,
    ) -> Self {
        let fallback = KeywordFallback::new(&library, config.fallback_confidence);
        Self {
            config,
            library,
            primary,
            fallback,
        }
    }

    /// Standardize one complaint span already bound to its anchor
    pub async fn standardize(&self, span_text: &str, anchor: Anchor) -> Standardization {
        let (model_score, reason) = self.try_model(span_text).await;

        if let Some(score) = model_score {
            debug!(code = %score.code, score = score.score, "model match accepted");
            return Standardization {
                complaint: self.complaint(score.code, anchor, score.score, Method::Model),
                fallback_reason: None,
            };
        }

        if let Some(score) = self.fallback.match_rules(span_text) {
            debug!(code = %score.code, "keyword fallback match");
            return Standardization {
                complaint: self.complaint(score.code, anchor, score.score, Method::Fallback),
                fallback_reason: reason,
            };
        }

        Standardization {
            complaint: self.complaint(
                self.library.unspecified.code.clone(),
                anchor,
                0.0,
                Method::Unspecified,
            ),
            fallback_reason: reason,
        }
    }

    /// Model attempt: `Some(score)` only for an accepted match; otherwise
    /// the reason the model path fell through
    async fn try_model(
        &self,
        span_text: &str,
    ) -> (Option<crate::providers::ClassifierScore>, Option<FallbackReason>) {
        if !self.config.model_enabled {
            return (None, Some(FallbackReason::Disabled));
        }

        let timeout = Duration::from_millis(self.config.model_timeout_ms);
        match tokio::time::timeout(timeout, self.primary.classify(span_text)).await {
            Ok(Ok(Some(score))) if score.score >= self.config.similarity_threshold => {
                (Some(score), None)
            }
            Ok(Ok(_)) => (None, Some(FallbackReason::LowConfidence)),
            Ok(Err(error)) => {
                warn!(classifier = self.primary.name(), %error, "primary classifier error");
                (None, Some(FallbackReason::Error))
            }
            Err(_) => {
                warn!(
                    classifier = self.primary.name(),
                    timeout_ms = self.config.model_timeout_ms,
                    "primary classifier timed out"
                );
                (None, Some(FallbackReason::Timeout))
            }
        }
    }

    fn complaint(
        &self,
        code: String,
        anchor: Anchor,
        confidence: f32,
        method: Method,
    ) -> StandardizedComplaint {
        let text = self
            .library
            .descriptor(&code)
            .map(|d| d.text.clone())
            .unwrap_or_else(|| code.clone());
        StandardizedComplaint {
            code,
            text,
            anchor,
            confidence: confidence.clamp(0.0, 1.0),
            method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::error::{ClassifierError, ClassifierResult};
    use crate::providers::ClassifierScore;

    struct SlowClassifier;

    #[async_trait]
    impl ComplaintClassifier for SlowClassifier {
        async fn classify(&self, _span_text: &str) -> ClassifierResult<Option<ClassifierScore>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(None)
        }

        fn name(&self) -> &'static str {
            "slow"
        }
    }

    struct FailingClassifier;

    #[async_trait]
    impl ComplaintClassifier for FailingClassifier {
        async fn classify(&self, _span_text: &str) -> ClassifierResult<Option<ClassifierScore>> {
            Err(ClassifierError::Unavailable("connection refused".into()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn anchor(id: u32) -> Anchor {
        Anchor {
            id,
            start: 0,
            end: 10,
        }
    }

    fn standardizer(config: ClassifierConfig) -> ComplaintStandardizer {
        let library = Arc::new(TerminologyLibrary::load_default().unwrap());
        ComplaintStandardizer::new(config, library)
    }

    #[tokio::test]
    async fn test_model_path_standardizes_fever_and_cough() {
        let s = standardizer(ClassifierConfig::default());
        let out = s
            .standardize("I've had a fever and cough for three days.", anchor(1))
            .await;
        assert_eq!(out.complaint.code, "RESP_ACUTE");
        assert_eq!(
            out.complaint.text,
            "Acute cough with fever and yellow sputum (~3 days)"
        );
        assert_eq!(out.complaint.method, Method::Model);
        assert!(out.complaint.confidence >= 0.30);
        assert!(out.fallback_reason.is_none());
    }

    #[tokio::test]
    async fn test_disabled_model_falls_back_to_keyword_rules() {
        let config = ClassifierConfig {
            model_enabled: false,
            ..ClassifierConfig::default()
        };
        let s = standardizer(config);
        let out = s
            .standardize("I've had a fever and cough for three days.", anchor(1))
            .await;
        assert_eq!(out.complaint.code, "RESP_ACUTE");
        assert_eq!(out.complaint.method, Method::Fallback);
        assert_eq!(out.complaint.confidence, 0.50);
        assert_eq!(out.fallback_reason, Some(FallbackReason::Disabled));
    }

    #[tokio::test]
    async fn test_timed_out_model_falls_back_to_keyword_rules() {
        let config = ClassifierConfig {
            model_timeout_ms: 10,
            ..ClassifierConfig::default()
        };
        let library = Arc::new(TerminologyLibrary::load_default().unwrap());
        let s = ComplaintStandardizer::with_primary(config, library, Box::new(SlowClassifier));
        let out = s
            .standardize("I've had a fever and cough for three days.", anchor(1))
            .await;
        assert_eq!(out.complaint.code, "RESP_ACUTE");
        assert_eq!(out.complaint.method, Method::Fallback);
        assert_eq!(out.complaint.confidence, 0.50);
        assert_eq!(out.fallback_reason, Some(FallbackReason::Timeout));
        assert!(out.fallback_reason.unwrap().is_unavailability());
    }

    #[tokio::test]
    async fn test_erroring_model_falls_back_to_keyword_rules() {
        let library = Arc::new(TerminologyLibrary::load_default().unwrap());
        let s = ComplaintStandardizer::with_primary(
            ClassifierConfig::default(),
            library,
            Box::new(FailingClassifier),
        );
        let out = s
            .standardize("Loose stools since yesterday.", anchor(2))
            .await;
        assert_eq!(out.complaint.code, "GI_ACUTE");
        assert_eq!(out.complaint.method, Method::Fallback);
        assert_eq!(out.complaint.confidence, 0.50);
        assert_eq!(out.fallback_reason, Some(FallbackReason::Error));
    }

    #[tokio::test]
    async fn test_unmatched_span_yields_unspecified_sentinel() {
        let s = standardizer(ClassifierConfig::default());
        let out = s.standardize("I feel generally unwell", anchor(2)).await;
        assert_eq!(out.complaint.code, "UNSPECIFIED");
        assert_eq!(out.complaint.method, Method::Unspecified);
        assert_eq!(out.complaint.confidence, 0.0);
    }

    #[tokio::test]
    async fn test_determinism_across_runs() {
        let s = standardizer(ClassifierConfig::default());
        let a = s.standardize("Loose stools since yesterday.", anchor(3)).await;
        let b = s.standardize("Loose stools since yesterday.", anchor(3)).await;
        assert_eq!(a.complaint.code, b.complaint.code);
        assert_eq!(a.complaint.confidence, b.complaint.confidence);
        assert_eq!(a.complaint.method, b.complaint.method);
    }
}
