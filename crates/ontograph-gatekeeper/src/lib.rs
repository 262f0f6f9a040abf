//! Ontograph Gatekeeper
//!
//! Consistency guards evaluated before a relation is committed to a model.
//!
//! The Gatekeeper provides:
//! - Self-relation and reserved-class checks
//! - Contradiction detection against existing subsumption, equivalence,
//!   disjointness, inverse and identity edges
//! - Operand kind checks (composites, enumerations, property kinds)
//! - An optional deprecation policy
//!
//! Guards never fail: they return a [`ValidationResult`] and the caller
//! decides whether to commit.
//!
//! # Examples
//!
//! ```no_run
//! use ontograph_gatekeeper::{Gatekeeper, ValidationConfig};
//!
//! let config = ValidationConfig::default();
//! let gatekeeper = Gatekeeper::new(config);
//!
//! // Check a relation before inserting it
//! // let result = gatekeeper.check_subclass_of(&class_model, &dog, &animal);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod validator;

pub use config::ValidationConfig;
pub use error::GatekeeperError;
pub use validator::{Gatekeeper, RejectionReason, ValidationResult, ValidationStatus};
