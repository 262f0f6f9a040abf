//! Ontograph Storage Layer
//!
//! In-memory models for an ontology, each guarded by the gatekeeper.
//!
//! # Architecture
//!
//! - [`ClassModel`]: classes and the class taxonomies with their closures
//! - [`PropertyModel`]: properties and the property taxonomies
//! - [`Data`]: individuals, literals, identity and property assertions
//! - [`Ontology`]: composition root with whole-ontology set algebra
//! - [`Foundation`]: the reserved vocabulary, built once and passed by reference
//!
//! Rejected mutations leave the model unchanged and are reported to the
//! model's [`DiagnosticSink`](ontograph_domain::DiagnosticSink).
//!
//! # Examples
//!
//! ```
//! use ontograph_store::Ontology;
//! use ontograph_domain::Class;
//!
//! let mut ontology = Ontology::new("ex:zoo").unwrap();
//! let (a, b) = (Class::plain("ex:A").unwrap(), Class::plain("ex:B").unwrap());
//! ontology.class_model_mut().add_subclass_of(&a, &b);
//! assert!(ontology.class_model_mut().add_disjoint_with(&a, &b).is_rejected());
//! ```

#![warn(missing_docs)]

use ontograph_domain::DomainError;
use thiserror::Error;

mod class_model;
mod closure;
mod data;
mod diagnostics;
mod foundation;
mod ontology;
mod property_model;
mod stats;

pub use class_model::ClassModel;
pub use data::Data;
pub use diagnostics::{CollectingSink, TracingSink};
pub use foundation::{Foundation, FOUNDATION_NAME};
pub use ontology::Ontology;
pub use property_model::PropertyModel;
pub use stats::OntologyStats;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Invalid resource or ontology construction
    #[error("Invalid resource: {0}")]
    Domain(#[from] DomainError),

    /// Name lookup failed
    #[error("Unknown {kind}: {name}")]
    NotFound {
        /// Kind of resource looked up
        kind: &'static str,
        /// Name that was not found
        name: String,
    },
}
