//! Provenance tracking for taxonomy entries

use std::fmt;

/// Where a taxonomy entry came from
///
/// Provenance never takes part in entry equality; it only lets derived
/// entries be purged without touching what the caller asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provenance {
    /// Supplied by the caller
    #[default]
    Asserted,

    /// Produced by reasoning or by a symmetric insert
    Inferred,
}

impl Provenance {
    /// Get the provenance name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Asserted => "asserted",
            Provenance::Inferred => "inferred",
        }
    }

    /// Whether the entry was produced by reasoning
    pub fn is_inferred(&self) -> bool {
        matches!(self, Provenance::Inferred)
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
