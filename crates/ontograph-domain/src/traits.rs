//! Trait definitions for the reasoning boundary
//!
//! The consistency guards only see a model through these traits. The
//! in-memory implementations live in `ontograph-store`.

use std::fmt;

use crate::{Fingerprint, Relation};

/// Read-only view over the class taxonomies
///
/// Implemented by the infrastructure layer (ontograph-store)
pub trait ClassTaxonomy {
    /// Whether `child` is (transitively) subsumed by `mother`
    fn is_subclass_of(&self, child: Fingerprint, mother: Fingerprint) -> bool;

    /// Whether the classes are (transitively) equivalent
    fn is_equivalent_class_of(&self, a: Fingerprint, b: Fingerprint) -> bool;

    /// Whether the classes are (possibly by inference) disjoint
    fn is_disjoint_class_with(&self, a: Fingerprint, b: Fingerprint) -> bool;

    /// Whether the class denotes literals rather than individuals
    fn is_literal_compatible_class(&self, class: Fingerprint) -> bool;
}

/// Read-only view over the property taxonomies
pub trait PropertyTaxonomy {
    /// Whether `child` is (transitively) subsumed by `mother`
    fn is_subproperty_of(&self, child: Fingerprint, mother: Fingerprint) -> bool;

    /// Whether the properties are (transitively) equivalent
    fn is_equivalent_property_of(&self, a: Fingerprint, b: Fingerprint) -> bool;

    /// Whether the properties are inverse of each other
    fn is_inverse_property_of(&self, a: Fingerprint, b: Fingerprint) -> bool;
}

/// Read-only view over individual identity
pub trait IndividualTaxonomy {
    /// Whether the individuals are (transitively) the same
    fn is_same_individual_as(&self, a: Fingerprint, b: Fingerprint) -> bool;

    /// Whether the individuals are (possibly by inference) different
    fn is_different_individual_from(&self, a: Fingerprint, b: Fingerprint) -> bool;
}

/// Severity of a diagnostic event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Noteworthy inference-layer decision
    Info,

    /// Rejected mutation
    Warning,
}

impl Severity {
    /// Get the severity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

/// A diagnostic event emitted by a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the event
    pub severity: Severity,

    /// Relation the event concerns, if any
    pub relation: Option<Relation>,

    /// Human readable description
    pub message: String,
}

impl Diagnostic {
    /// Warning about a rejected relation
    pub fn warning(relation: Relation, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            relation: Some(relation),
            message: message.into(),
        }
    }

    /// Informational event
    pub fn info(relation: Option<Relation>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            relation,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.relation {
            Some(relation) => write!(f, "[{}] {}: {}", self.severity.as_str(), relation, self.message),
            None => write!(f, "[{}] {}", self.severity.as_str(), self.message),
        }
    }
}

/// Receiver of diagnostic events
pub trait DiagnosticSink: Send + Sync + fmt::Debug {
    /// Deliver one event
    fn emit(&self, diagnostic: &Diagnostic);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let warning = Diagnostic::warning(Relation::SubClassOf, "ex:A cannot be its own subclass");
        assert_eq!(
            warning.to_string(),
            "[warning] subClassOf: ex:A cannot be its own subclass"
        );

        let info = Diagnostic::info(None, "nothing to do");
        assert_eq!(info.severity, Severity::Info);
        assert_eq!(info.to_string(), "[info] nothing to do");
    }
}
