//! Foundation - the reserved vocabulary as an ontology
//!
//! Built once at start-up and passed by reference to whatever needs the
//! reserved classes resolved (membership inference merges it in).

use ontograph_domain::vocabulary::{self, Term, DATATYPE_LADDER};
use ontograph_domain::Class;

use crate::Ontology;

/// Canonical name of the foundational ontology
pub const FOUNDATION_NAME: &str = "urn:ontograph:foundation";

/// The foundational ontology: `owl:Thing`, `owl:Nothing`, `rdfs:Literal` and
/// the datatype ladder rooted at `rdfs:Literal`
#[derive(Debug, Clone)]
pub struct Foundation {
    ontology: Ontology,
}

impl Default for Foundation {
    fn default() -> Self {
        Self::new()
    }
}

impl Foundation {
    /// Build the foundational ontology
    pub fn new() -> Self {
        let mut ontology = Ontology::builtin(FOUNDATION_NAME);
        let classes = ontology.class_model_mut();

        for term in [vocabulary::OWL_THING, vocabulary::OWL_NOTHING, vocabulary::RDFS_LITERAL] {
            classes.add_class(Class::reserved(term));
        }
        for (child, mother) in DATATYPE_LADDER {
            classes.add_subclass_of(&Class::reserved(*child), &Class::reserved(*mother));
        }

        tracing::debug!(
            classes = classes.class_count(),
            entries = classes.sub_class_of().len(),
            "Foundation built"
        );
        Self { ontology }
    }

    /// The foundational ontology
    pub fn ontology(&self) -> &Ontology {
        &self.ontology
    }

    /// Class for a reserved term, if the foundation declares it
    pub fn class(&self, term: Term) -> Option<&Class> {
        self.ontology.class_model().class(term.fingerprint())
    }
}
