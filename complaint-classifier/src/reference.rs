use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::ClassifierResult;
use crate::taxonomy::DiseaseTaxonomy;
use crate::terminology::TerminologyLibrary;

/// Process-wide immutable reference data: terminology library and disease
/// taxonomy. Loaded once at startup and passed explicitly into each stage;
/// concurrent sessions share it read-only with no locking.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub terminology: Arc<TerminologyLibrary>,
    pub taxonomy: Arc<DiseaseTaxonomy>,
}

impl ReferenceData {
    /// Datasets embedded at build time
    pub fn load_default() -> ClassifierResult<Self> {
        let terminology = TerminologyLibrary::load_default()?;
        let taxonomy = DiseaseTaxonomy::load_default()?;
        info!(
            descriptors = terminology.descriptors.len(),
            categories = taxonomy.categories.len(),
            "reference data loaded"
        );
        Ok(Self {
            terminology: Arc::new(terminology),
            taxonomy: Arc::new(taxonomy),
        })
    }

    pub fn from_paths(
        terminology_path: impl AsRef<Path>,
        taxonomy_path: impl AsRef<Path>,
    ) -> ClassifierResult<Self> {
        Ok(Self {
            terminology: Arc::new(TerminologyLibrary::from_path(terminology_path)?),
            taxonomy: Arc::new(DiseaseTaxonomy::from_path(taxonomy_path)?),
        })
    }
}
