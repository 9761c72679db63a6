use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::entry::{AuditEntry, AuditKind};

/// Append-only in-memory audit sink. Concurrent sessions may log to one
/// shared sink; entries are never mutated or removed.
#[derive(Default)]
pub struct AuditSink {
    entries: RwLock<Vec<AuditEntry>>,
}

impl AuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self, entry: AuditEntry) {
        debug!(kind = ?entry.kind, session_id = %entry.session_id, "audit entry");
        self.entries.write().push(entry);
    }

    /// Entries of one kind, in insertion order
    pub fn search(&self, kind: AuditKind) -> Vec<AuditEntry> {
        self.entries
            .read()
            .iter()
            .filter(|e| e.kind == kind)
            .cloned()
            .collect()
    }

    /// Entries for one session, in insertion order
    pub fn session_entries(&self, session_id: Uuid) -> Vec<AuditEntry> {
        self.entries
            .read()
            .iter()
            .filter(|e| e.session_id == session_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_by_kind() {
        let sink = AuditSink::new();
        let session = Uuid::new_v4();
        sink.log(AuditEntry::redaction_applied(session, &[("phone", 1)]));
        sink.log(AuditEntry::classifier_fallback(session, "disabled"));
        sink.log(AuditEntry::classifier_fallback(session, "timeout"));

        assert_eq!(sink.len(), 3);
        assert_eq!(sink.search(AuditKind::RedactionApplied).len(), 1);
        assert_eq!(sink.search(AuditKind::ClassifierFallback).len(), 2);
        assert_eq!(sink.session_entries(session).len(), 3);
    }
}
