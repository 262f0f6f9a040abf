//! Fingerprint module - the identity layer of every ontology resource

use std::fmt;

/// Stable integer identity of an ontology resource
///
/// Derived from the canonical name with a name-based UUID (v5, URL namespace),
/// so two resources with the same canonical name always share a fingerprint,
/// within a process and across processes.
///
/// # Examples
///
/// ```
/// use ontograph_domain::Fingerprint;
///
/// let a = Fingerprint::of("http://example.org/Dog");
/// let b = Fingerprint::of("http://example.org/Dog");
/// assert_eq!(a, b);
/// assert_ne!(a, Fingerprint::of("http://example.org/Cat"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(u128);

impl Fingerprint {
    /// Lowest possible fingerprint, used as a range bound by indexes
    pub const MIN: Fingerprint = Fingerprint(u128::MIN);

    /// Highest possible fingerprint, used as a range bound by indexes
    pub const MAX: Fingerprint = Fingerprint(u128::MAX);

    /// Compute the fingerprint of a canonical name
    pub fn of(name: &str) -> Self {
        Self(uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_URL, name.as_bytes()).as_u128())
    }

    /// Create a fingerprint from a raw u128 value
    ///
    /// This is primarily for callers that persist fingerprints elsewhere.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}
