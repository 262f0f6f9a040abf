//! Diagnostic sinks
//!
//! Models report rejected mutations and noteworthy decisions through an
//! injected [`DiagnosticSink`]. Two sinks ship with the store.

use std::sync::{Arc, Mutex, PoisonError};

use ontograph_domain::{Diagnostic, DiagnosticSink, Relation, Severity};
use ontograph_gatekeeper::ValidationResult;

/// Forwards diagnostics to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        let relation = diagnostic.relation.map(|r| r.as_str()).unwrap_or("-");
        match diagnostic.severity {
            Severity::Warning => tracing::warn!(relation, "{}", diagnostic.message),
            Severity::Info => tracing::info!(relation, "{}", diagnostic.message),
        }
    }
}

/// Records every diagnostic for later inspection
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sink behind an `Arc`, ready to hand to a model
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Snapshot of every recorded diagnostic
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Snapshot of the recorded warnings
    pub fn warnings(&self) -> Vec<Diagnostic> {
        self.diagnostics()
            .into_iter()
            .filter(|d| d.severity == Severity::Warning)
            .collect()
    }

    /// Number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every recorded diagnostic
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.clone());
    }
}

/// Default sink for new models
pub(crate) fn default_sink() -> Arc<dyn DiagnosticSink> {
    Arc::new(TracingSink)
}

/// Emit one warning for a rejected result; returns whether it was accepted
pub(crate) fn report(sink: &dyn DiagnosticSink, relation: Relation, result: &ValidationResult) -> bool {
    if result.is_accepted() {
        return true;
    }
    sink.emit(&Diagnostic::warning(relation, result.message()));
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.emit(&Diagnostic::warning(Relation::SubClassOf, "rejected"));
        sink.emit(&Diagnostic::info(None, "noted"));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.warnings().len(), 1);
        assert_eq!(sink.warnings()[0].relation, Some(Relation::SubClassOf));

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_report_accepted_is_silent() {
        let sink = CollectingSink::new();
        assert!(report(&sink, Relation::SameAs, &ValidationResult::accepted()));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_tracing_sink_does_not_panic() {
        TracingSink.emit(&Diagnostic::warning(Relation::DisjointWith, "rejected"));
        TracingSink.emit(&Diagnostic::info(None, "noted"));
    }
}
