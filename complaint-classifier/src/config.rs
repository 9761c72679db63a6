use serde::{Deserialize, Serialize};

/// Stage-1 classification policy constants.
///
/// The similarity threshold, fallback confidence, and model timeout are
/// fixed configuration rather than values inferred from data, so the
/// classifier behaves identically across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Minimum similarity score (T1) for accepting the primary model's best
    /// match. Below this the keyword fallback is applied.
    pub similarity_threshold: f32,
    /// Fixed confidence recorded for keyword-fallback matches
    pub fallback_confidence: f32,
    /// Bound on one primary model call; on expiry the call is abandoned and
    /// the fallback runs, with no retry
    pub model_timeout_ms: u64,
    /// When false the primary model is never consulted (degraded mode)
    pub model_enabled: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.30,
            fallback_confidence: 0.50,
            model_timeout_ms: 500,
            model_enabled: true,
        }
    }
}

impl ClassifierConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let similarity_threshold = std::env::var("CLASSIFIER_SIMILARITY_THRESHOLD")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.similarity_threshold);

        let fallback_confidence = std::env::var("CLASSIFIER_FALLBACK_CONFIDENCE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.fallback_confidence);

        let model_timeout_ms = std::env::var("CLASSIFIER_MODEL_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.model_timeout_ms);

        let model_enabled = std::env::var("CLASSIFIER_MODEL_ENABLED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.model_enabled);

        Self {
            similarity_threshold,
            fallback_confidence,
            model_timeout_ms,
            model_enabled,
        }
    }
}
