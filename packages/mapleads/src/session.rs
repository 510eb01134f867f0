//! Session-local accumulation of extracted records.

use crate::types::BusinessInfo;

/// Ordered collection of extraction results for one UI session.
///
/// New batches go in front (most recent first). There is no deduplication
/// across calls: re-extracting the same page yields duplicate rows, which
/// is expected when users paginate Maps results to build a larger list.
/// Nothing is persisted; the session dies with the process.
#[derive(Debug, Default)]
pub struct Session {
    results: Vec<BusinessInfo>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a batch of records, keeping the batch's internal order.
    pub fn prepend(&mut self, batch: Vec<BusinessInfo>) {
        self.results.splice(0..0, batch);
    }

    /// All accumulated records, most recent batch first.
    pub fn results(&self) -> &[BusinessInfo] {
        &self.results
    }

    /// Number of accumulated records.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when nothing has been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Drop all accumulated results. Callers gate this behind an explicit
    /// confirmation.
    pub fn clear(&mut self) {
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> BusinessInfo {
        BusinessInfo {
            name: name.to_string(),
            address: "N/A".to_string(),
            phone: "555-0000".to_string(),
        }
    }

    #[test]
    fn test_prepend_puts_latest_batch_first() {
        let mut session = Session::new();
        session.prepend(vec![record("A")]);
        session.prepend(vec![record("B")]);

        let names: Vec<_> = session.results().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_prepend_preserves_batch_internal_order() {
        let mut session = Session::new();
        session.prepend(vec![record("A")]);
        session.prepend(vec![record("B1"), record("B2")]);

        let names: Vec<_> = session.results().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["B1", "B2", "A"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut session = Session::new();
        session.prepend(vec![record("A")]);
        session.prepend(vec![record("A")]);
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_clear_empties_the_session() {
        let mut session = Session::new();
        session.prepend(vec![record("A")]);
        session.clear();
        assert!(session.is_empty());
    }
}
