use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

/// Audit event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditKind {
    RedactionApplied,
    ClassifierFallback,
}

/// One audit entry. `data` carries aggregate values only (counts, category
/// labels, reason codes), never matched text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub session_id: Uuid,
    pub kind: AuditKind,
    pub data: serde_json::Value,
}

impl AuditEntry {
    pub fn new(session_id: Uuid, kind: AuditKind, data: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            session_id,
            kind,
            data,
        }
    }

    /// Redaction outcome for one transcript: per-category mask counts
    pub fn redaction_applied(session_id: Uuid, counts: &[(&str, usize)]) -> Self {
        let counts: serde_json::Map<String, serde_json::Value> = counts
            .iter()
            .map(|(category, n)| (category.to_string(), json!(n)))
            .collect();
        Self::new(
            session_id,
            AuditKind::RedactionApplied,
            json!({ "counts": counts }),
        )
    }

    /// Primary classifier unavailability for one span
    pub fn classifier_fallback(session_id: Uuid, reason: &str) -> Self {
        Self::new(
            session_id,
            AuditKind::ClassifierFallback,
            json!({ "reason": reason }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redaction_entry_carries_counts_only() {
        let entry =
            AuditEntry::redaction_applied(Uuid::new_v4(), &[("phone", 1), ("name", 2)]);
        assert_eq!(entry.kind, AuditKind::RedactionApplied);
        assert_eq!(entry.data["counts"]["phone"], 1);
        assert_eq!(entry.data["counts"]["name"], 2);
    }

    #[test]
    fn test_fallback_entry_records_reason() {
        let entry = AuditEntry::classifier_fallback(Uuid::new_v4(), "timeout");
        assert_eq!(entry.kind, AuditKind::ClassifierFallback);
        assert_eq!(entry.data["reason"], "timeout");
    }
}
