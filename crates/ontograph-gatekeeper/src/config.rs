//! Gatekeeper configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::GatekeeperError;

/// Configuration for the consistency guards
///
/// Each flag switches one family of rules. Loadable from the `[validation]`
/// table of a TOML file; missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject relations between a resource and itself
    pub reject_self_relations: bool,

    /// Reject subsumption/equivalence/disjointness that misuse owl:Thing or owl:Nothing
    pub protect_reserved_classes: bool,

    /// Reject relations contradicting an existing subsumption, equivalence,
    /// disjointness, inverse, sameAs or differentFrom edge
    pub reject_contradictions: bool,

    /// Reject relations whose operands have the wrong kind (annotation
    /// properties, literal classes for individuals, mismatched composites)
    pub enforce_kinds: bool,

    /// Reject new relations touching deprecated classes or properties
    pub reject_deprecated: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            reject_self_relations: true,
            protect_reserved_classes: true,
            reject_contradictions: true,
            enforce_kinds: true,
            reject_deprecated: false,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (structural rules only)
    pub fn permissive() -> Self {
        Self {
            reject_self_relations: true,
            protect_reserved_classes: false,
            reject_contradictions: false,
            enforce_kinds: false,
            reject_deprecated: false,
        }
    }

    /// Create a strict configuration (all rules enabled)
    pub fn strict() -> Self {
        Self {
            reject_deprecated: true,
            ..Self::default()
        }
    }

    /// Parse a configuration from TOML text
    ///
    /// # Errors
    /// Returns [`GatekeeperError::Config`] when the text is not valid TOML
    /// or a key has the wrong type
    pub fn from_toml_str(text: &str) -> Result<Self, GatekeeperError> {
        toml::from_str(text).map_err(|e| GatekeeperError::Config(e.to_string()))
    }

    /// Load a configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, GatekeeperError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            GatekeeperError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }
}
