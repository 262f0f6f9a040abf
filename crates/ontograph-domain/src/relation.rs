//! Relation module - the named relations a taxonomy can hold

use std::fmt;

use crate::vocabulary::{self, Term};
use crate::Fingerprint;

/// Kind of relation stored in a taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Class subsumption
    SubClassOf,

    /// Class equivalence (stored symmetrically)
    EquivalentClass,

    /// Class disjointness (stored symmetrically)
    DisjointWith,

    /// Enumeration or data range operand
    OneOf,

    /// Intersection operand
    IntersectionOf,

    /// Union operand
    UnionOf,

    /// Property subsumption
    SubPropertyOf,

    /// Property equivalence (stored symmetrically)
    EquivalentProperty,

    /// Inverse properties (stored symmetrically)
    InverseOf,

    /// Class membership of an individual
    ClassType,

    /// Individual identity (stored symmetrically)
    SameAs,

    /// Individual distinctness (stored symmetrically)
    DifferentFrom,

    /// User property assertion; the predicate is the asserted property
    Assertion,
}

impl Relation {
    /// Reserved predicate term of a built-in relation
    ///
    /// `Assertion` has no fixed predicate.
    pub fn term(&self) -> Option<Term> {
        match self {
            Relation::SubClassOf => Some(vocabulary::RDFS_SUBCLASSOF),
            Relation::EquivalentClass => Some(vocabulary::OWL_EQUIVALENTCLASS),
            Relation::DisjointWith => Some(vocabulary::OWL_DISJOINTWITH),
            Relation::OneOf => Some(vocabulary::OWL_ONEOF),
            Relation::IntersectionOf => Some(vocabulary::OWL_INTERSECTIONOF),
            Relation::UnionOf => Some(vocabulary::OWL_UNIONOF),
            Relation::SubPropertyOf => Some(vocabulary::RDFS_SUBPROPERTYOF),
            Relation::EquivalentProperty => Some(vocabulary::OWL_EQUIVALENTPROPERTY),
            Relation::InverseOf => Some(vocabulary::OWL_INVERSEOF),
            Relation::ClassType => Some(vocabulary::RDF_TYPE),
            Relation::SameAs => Some(vocabulary::OWL_SAMEAS),
            Relation::DifferentFrom => Some(vocabulary::OWL_DIFFERENTFROM),
            Relation::Assertion => None,
        }
    }

    /// Fingerprint of the reserved predicate, if any
    pub fn predicate(&self) -> Option<Fingerprint> {
        self.term().map(|term| term.fingerprint())
    }

    /// Short relation name
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::SubClassOf => "subClassOf",
            Relation::EquivalentClass => "equivalentClass",
            Relation::DisjointWith => "disjointWith",
            Relation::OneOf => "oneOf",
            Relation::IntersectionOf => "intersectionOf",
            Relation::UnionOf => "unionOf",
            Relation::SubPropertyOf => "subPropertyOf",
            Relation::EquivalentProperty => "equivalentProperty",
            Relation::InverseOf => "inverseOf",
            Relation::ClassType => "classType",
            Relation::SameAs => "sameAs",
            Relation::DifferentFrom => "differentFrom",
            Relation::Assertion => "assertion",
        }
    }

    /// Whether the relation is always stored in both directions
    pub fn is_symmetric(&self) -> bool {
        matches!(
            self,
            Relation::EquivalentClass
                | Relation::DisjointWith
                | Relation::EquivalentProperty
                | Relation::InverseOf
                | Relation::SameAs
                | Relation::DifferentFrom
        )
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_are_reserved_terms() {
        assert_eq!(
            Relation::SubClassOf.predicate(),
            Some(vocabulary::RDFS_SUBCLASSOF.fingerprint())
        );
        assert_eq!(Relation::ClassType.term(), Some(vocabulary::RDF_TYPE));
        assert_eq!(Relation::Assertion.predicate(), None);
    }

    #[test]
    fn test_symmetric_relations() {
        assert!(Relation::EquivalentClass.is_symmetric());
        assert!(Relation::SameAs.is_symmetric());
        assert!(!Relation::SubClassOf.is_symmetric());
        assert!(!Relation::ClassType.is_symmetric());
    }
}
