//! Ontograph Domain Layer
//!
//! This crate contains the value types every other layer builds on: resource
//! identity, classes, properties, individuals and literals, the relation
//! vocabulary and the `Taxonomy` entry store with its set algebra.
//!
//! ## Key Concepts
//!
//! - **Fingerprint**: Stable 128-bit identity derived from a canonical name
//! - **Class / Property**: T-BOX resources, modelled as closed sum types
//! - **Individual / Literal**: A-BOX leaves
//! - **Taxonomy**: Set of `(subject, predicate, object)` entries with provenance
//! - **Traits**: The read-only views the gatekeeper reasons over
//!
//! ## Architecture
//!
//! - No I/O and no global state
//! - Fallible construction returns [`DomainError`]
//! - Model containers and their guards live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod class;
pub mod error;
pub mod fingerprint;
pub mod individual;
pub mod property;
pub mod provenance;
pub mod relation;
pub mod taxonomy;
pub mod traits;
pub mod vocabulary;

// Re-exports for convenience
pub use class::{Cardinality, Class, ClassKind, CompositeKind, Restriction, RestrictionKind};
pub use error::DomainError;
pub use fingerprint::Fingerprint;
pub use individual::{Individual, Literal, LiteralForm, Value};
pub use property::{Characteristics, Property, PropertyKind};
pub use provenance::Provenance;
pub use relation::Relation;
pub use taxonomy::{Entry, EntryView, Taxonomy};
pub use traits::{
    ClassTaxonomy, Diagnostic, DiagnosticSink, IndividualTaxonomy, PropertyTaxonomy, Severity,
};

/// Trim a canonical name, rejecting blank ones
pub(crate) fn canonical_name(name: String, kind: &'static str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyName(kind));
    }
    if trimmed.len() == name.len() {
        Ok(name)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name_trims() {
        assert_eq!(canonical_name("  ex:Dog ".to_string(), "class").unwrap(), "ex:Dog");
        assert_eq!(canonical_name("ex:Dog".to_string(), "class").unwrap(), "ex:Dog");
        assert_eq!(
            canonical_name("\t\n".to_string(), "class"),
            Err(DomainError::EmptyName("class"))
        );
    }
}
