//! Property module - object, datatype and annotation properties

use std::fmt;

use crate::{canonical_name, Class, DomainError, Fingerprint};

/// Kind of property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Relates individuals to individuals
    Object,

    /// Relates individuals to literals
    Datatype,

    /// Metadata only; excluded from semantic reasoning
    Annotation,
}

impl PropertyKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Object => "object",
            PropertyKind::Datatype => "datatype",
            PropertyKind::Annotation => "annotation",
        }
    }
}

/// Boolean characteristics of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Characteristics {
    /// At most one value per subject
    pub functional: bool,

    /// At most one subject per value
    pub inverse_functional: bool,

    /// `a p b` implies `b p a`
    pub symmetric: bool,

    /// `a p b` and `b p c` imply `a p c`
    pub transitive: bool,

    /// Kept for compatibility only
    pub deprecated: bool,
}

/// A property of the T-BOX
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    id: Fingerprint,
    name: String,
    kind: PropertyKind,
    domain: Option<Fingerprint>,
    range: Option<Fingerprint>,
    characteristics: Characteristics,
}

impl Property {
    fn build(name: String, kind: PropertyKind) -> Result<Self, DomainError> {
        let name = canonical_name(name, "property")?;
        Ok(Self {
            id: Fingerprint::of(&name),
            name,
            kind,
            domain: None,
            range: None,
            characteristics: Characteristics::default(),
        })
    }

    /// Create an object property
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyName`] when the name is blank
    pub fn object(name: impl Into<String>) -> Result<Self, DomainError> {
        Self::build(name.into(), PropertyKind::Object)
    }

    /// Create a datatype property
    pub fn datatype(name: impl Into<String>) -> Result<Self, DomainError> {
        Self::build(name.into(), PropertyKind::Datatype)
    }

    /// Create an annotation property
    pub fn annotation(name: impl Into<String>) -> Result<Self, DomainError> {
        Self::build(name.into(), PropertyKind::Annotation)
    }

    /// Fingerprint of the property
    pub fn id(&self) -> Fingerprint {
        self.id
    }

    /// Canonical name of the property
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind of property
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Declared domain class
    pub fn domain(&self) -> Option<Fingerprint> {
        self.domain
    }

    /// Declared range class
    pub fn range(&self) -> Option<Fingerprint> {
        self.range
    }

    /// All boolean characteristics
    pub fn characteristics(&self) -> Characteristics {
        self.characteristics
    }

    /// Whether the property is an object property
    pub fn is_object(&self) -> bool {
        self.kind == PropertyKind::Object
    }

    /// Whether the property is an annotation property
    pub fn is_annotation(&self) -> bool {
        self.kind == PropertyKind::Annotation
    }

    /// Whether the property is functional
    pub fn is_functional(&self) -> bool {
        self.characteristics.functional
    }

    /// Whether the property is inverse functional
    pub fn is_inverse_functional(&self) -> bool {
        self.characteristics.inverse_functional
    }

    /// Whether the property is symmetric
    pub fn is_symmetric(&self) -> bool {
        self.characteristics.symmetric
    }

    /// Whether the property is transitive
    pub fn is_transitive(&self) -> bool {
        self.characteristics.transitive
    }

    /// Whether the property is deprecated
    pub fn is_deprecated(&self) -> bool {
        self.characteristics.deprecated
    }

    fn not_allowed(&self, characteristic: &'static str) -> DomainError {
        DomainError::CharacteristicNotAllowed {
            property: self.name.clone(),
            characteristic,
        }
    }

    /// Declare the domain class
    ///
    /// # Errors
    /// Annotation properties have no domain
    pub fn set_domain(&mut self, class: Option<&Class>) -> Result<(), DomainError> {
        if self.is_annotation() {
            return Err(self.not_allowed("given a domain"));
        }
        self.domain = class.map(Class::id);
        Ok(())
    }

    /// Declare the range class
    ///
    /// # Errors
    /// Annotation properties have no range
    pub fn set_range(&mut self, class: Option<&Class>) -> Result<(), DomainError> {
        if self.is_annotation() {
            return Err(self.not_allowed("given a range"));
        }
        self.range = class.map(Class::id);
        Ok(())
    }

    /// Mark as functional (object and datatype properties)
    pub fn set_functional(&mut self, functional: bool) -> Result<(), DomainError> {
        if self.is_annotation() {
            return Err(self.not_allowed("functional"));
        }
        self.characteristics.functional = functional;
        Ok(())
    }

    /// Mark as inverse functional (object properties only)
    pub fn set_inverse_functional(&mut self, inverse_functional: bool) -> Result<(), DomainError> {
        if !self.is_object() {
            return Err(self.not_allowed("inverse functional"));
        }
        self.characteristics.inverse_functional = inverse_functional;
        Ok(())
    }

    /// Mark as symmetric (object properties only)
    pub fn set_symmetric(&mut self, symmetric: bool) -> Result<(), DomainError> {
        if !self.is_object() {
            return Err(self.not_allowed("symmetric"));
        }
        self.characteristics.symmetric = symmetric;
        Ok(())
    }

    /// Mark as transitive (object properties only)
    pub fn set_transitive(&mut self, transitive: bool) -> Result<(), DomainError> {
        if !self.is_object() {
            return Err(self.not_allowed("transitive"));
        }
        self.characteristics.transitive = transitive;
        Ok(())
    }

    /// Mark as deprecated (any property)
    pub fn set_deprecated(&mut self, deprecated: bool) {
        self.characteristics.deprecated = deprecated;
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
