use provenance_index::Anchor;
use serde::{Deserialize, Serialize};

/// Audience a bullet was rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Clinician,
    Patient,
}

/// One summary claim, always traceable to its source span
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryBullet {
    pub anchor: Anchor,
    pub audience: Audience,
    pub text: String,
}

impl SummaryBullet {
    /// Bullet line with its trailing anchor tag, e.g.
    /// `Acute cough with fever and yellow sputum (~3 days) [S1]`
    pub fn render(&self) -> String {
        format!("{} {}", self.text, self.anchor)
    }
}
