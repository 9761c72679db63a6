use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, ClassifierResult};

const DEFAULT_TAXONOMY: &str = include_str!("../data/disease_taxonomy.yaml");

/// One taxonomy category: code, display name, matching keyword set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseCategory {
    /// Zero-padded two-digit code; codes are totally ordered lexicographically
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Static read-only disease taxonomy consumed by Stage-2
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseTaxonomy {
    /// Code of the designated unclassified category
    pub unclassified: String,
    pub categories: Vec<DiseaseCategory>,
}

impl DiseaseTaxonomy {
    /// Taxonomy embedded at build time
    pub fn load_default() -> ClassifierResult<Self> {
        Self::from_yaml(DEFAULT_TAXONOMY)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ClassifierResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> ClassifierResult<Self> {
        let mut taxonomy: Self = serde_yaml::from_str(raw)?;
        if taxonomy.categories.is_empty() {
            return Err(ClassifierError::ReferenceData(
                "disease taxonomy has no categories".to_string(),
            ));
        }
        // Tie-breaking relies on ascending code order
        taxonomy.categories.sort_by(|a, b| a.code.cmp(&b.code));
        if taxonomy.category(&taxonomy.unclassified).is_none() {
            return Err(ClassifierError::ReferenceData(format!(
                "unclassified code {} is not a taxonomy category",
                taxonomy.unclassified
            )));
        }
        Ok(taxonomy)
    }

    pub fn category(&self, code: &str) -> Option<&DiseaseCategory> {
        self.categories.iter().find(|c| c.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.category(code).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy_loads_sorted() {
        let taxonomy = DiseaseTaxonomy::load_default().unwrap();
        assert!(taxonomy
            .categories
            .windows(2)
            .all(|w| w[0].code < w[1].code));
        assert_eq!(taxonomy.unclassified, "21");
    }

    #[test]
    fn test_category_lookup() {
        let taxonomy = DiseaseTaxonomy::load_default().unwrap();
        let resp = taxonomy.category("12").unwrap();
        assert_eq!(resp.name, "Diseases of the respiratory system");
        assert!(!taxonomy.contains("99"));
    }
}
