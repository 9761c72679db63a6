pub mod keyword;
pub mod similarity;

use async_trait::async_trait;

use crate::error::ClassifierResult;
use crate::terminology::TerminologyLibrary;

/// A scored match against the terminology library
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierScore {
    /// Shorthand descriptor code
    pub code: String,
    /// Similarity score in [0, 1]
    pub score: f32,
}

/// Polymorphic complaint classifier capability.
///
/// Two implementations exist: the similarity-search "model"
/// ([`similarity::SimilarityClassifier`]) and the deterministic keyword
/// fallback ([`keyword::KeywordFallback`]). The standardizer selects between
/// them per call: try the model under a bounded timeout, fall back on low
/// confidence, timeout, or unavailability.
#[async_trait]
pub trait ComplaintClassifier: Send + Sync {
    /// Best-scoring descriptor for a complaint span, or `None` when the
    /// implementation has no match at all
    async fn classify(&self, span_text: &str) -> ClassifierResult<Option<ClassifierScore>>;

    fn name(&self) -> &'static str;
}

/// Build the primary (model) classifier over the shared terminology library
pub fn create_primary(library: &TerminologyLibrary) -> Box<dyn ComplaintClassifier> {
    Box::new(similarity::SimilarityClassifier::new(library))
}
