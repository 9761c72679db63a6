use serde::{Deserialize, Serialize};

/// Immutable link from a summary claim to a span of the redacted transcript.
///
/// Ids are monotonic within one session and never reused; two anchors never
/// share a span and no anchor is ever rebound to a different span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    pub id: u32,
    /// Byte offsets into the redacted transcript
    pub start: usize,
    pub end: usize,
}

impl Anchor {
    /// Rendered form used in summary text, e.g. `[S3]`
    pub fn render(&self) -> String {
        format!("[S{}]", self.id)
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[S{}]", self.id)
    }
}
