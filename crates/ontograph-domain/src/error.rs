//! Domain error types

use thiserror::Error;

/// Errors raised while constructing or reconfiguring a resource
///
/// These are the fatal tier: no partially-built resource is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Canonical name was empty or whitespace
    #[error("Canonical name of a {0} cannot be empty")]
    EmptyName(&'static str),

    /// Deprecation requested on a class that is not a plain class
    #[error("Class '{0}' is not a plain class and cannot be deprecated")]
    NotPlainClass(String),

    /// Composite class names itself as an operand
    #[error("Class '{0}' cannot reference itself")]
    SelfReference(String),

    /// Cardinality bounds are inverted
    #[error("Invalid cardinality: min {min} is greater than max {max}")]
    InvalidCardinality {
        /// Lower bound
        min: u32,
        /// Upper bound
        max: u32,
    },

    /// Characteristic or domain/range not allowed for this kind of property
    #[error("Property '{property}' cannot be {characteristic}")]
    CharacteristicNotAllowed {
        /// Property name
        property: String,
        /// Rejected characteristic
        characteristic: &'static str,
    },
}
