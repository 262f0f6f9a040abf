//! Class module - the closed family of class expressions

use std::fmt;

use crate::vocabulary::Term;
use crate::{canonical_name, DomainError, Fingerprint, Property, Value};

/// A class of the T-BOX
///
/// Operands of unions, intersections and enumerations are not stored here:
/// they live in the class model's `unionOf`/`intersectionOf`/`oneOf` taxonomies.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    id: Fingerprint,
    name: String,
    kind: ClassKind,
    deprecated: bool,
}

/// Kind of class expression
#[derive(Debug, Clone, PartialEq)]
pub enum ClassKind {
    /// A named category
    Plain,

    /// A constraint on the values of a property
    Restriction(Restriction),

    /// A boolean combination of other classes
    Composite(CompositeKind),

    /// An explicit set of individuals
    Enumeration,

    /// An explicit set of literals
    DataRange,
}

/// Boolean combinator of a composite class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKind {
    /// Members of any operand
    Union,

    /// Members of every operand
    Intersection,

    /// Individuals that are not members of the target class
    Complement(Fingerprint),
}

/// A restriction on one property
#[derive(Debug, Clone, PartialEq)]
pub struct Restriction {
    on_property: Fingerprint,
    kind: RestrictionKind,
}

/// What a restriction requires of the restricted property
#[derive(Debug, Clone, PartialEq)]
pub enum RestrictionKind {
    /// Every value belongs to the class
    AllValuesFrom(Fingerprint),

    /// Some value belongs to the class
    SomeValuesFrom(Fingerprint),

    /// Some value is the given individual or literal
    HasValue(Value),

    /// The number of values lies within the bounds
    Cardinality(Cardinality),
}

/// Cardinality bounds; an absent bound is unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardinality {
    min: Option<u32>,
    max: Option<u32>,
}

impl Cardinality {
    /// Build bounds where `0` means absent
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidCardinality`] when both bounds are present and `min > max`
    pub fn new(min: u32, max: u32) -> Result<Self, DomainError> {
        if min > 0 && max > 0 && min > max {
            return Err(DomainError::InvalidCardinality { min, max });
        }
        Ok(Self {
            min: (min > 0).then_some(min),
            max: (max > 0).then_some(max),
        })
    }

    /// Exact cardinality (`min == max`)
    pub fn exactly(count: u32) -> Self {
        let bound = (count > 0).then_some(count);
        Self { min: bound, max: bound }
    }

    /// Lower bound
    pub fn min(&self) -> Option<u32> {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> Option<u32> {
        self.max
    }

    /// Whether the count satisfies both bounds
    pub fn admits(&self, count: usize) -> bool {
        self.min.map_or(true, |min| count >= min as usize)
            && self.max.map_or(true, |max| count <= max as usize)
    }
}

impl Restriction {
    /// Property the restriction is on
    pub fn on_property(&self) -> Fingerprint {
        self.on_property
    }

    /// Requirement on the property's values
    pub fn kind(&self) -> &RestrictionKind {
        &self.kind
    }
}

impl Class {
    fn build(name: String, kind: ClassKind) -> Result<Self, DomainError> {
        let name = canonical_name(name, "class")?;
        Ok(Self {
            id: Fingerprint::of(&name),
            name,
            kind,
            deprecated: false,
        })
    }

    /// Create a plain class
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyName`] when the name is blank
    ///
    /// # Examples
    ///
    /// ```
    /// use ontograph_domain::Class;
    ///
    /// let dog = Class::plain("ex:Dog").unwrap();
    /// assert_eq!(dog.name(), "ex:Dog");
    /// assert!(Class::plain("").is_err());
    /// ```
    pub fn plain(name: impl Into<String>) -> Result<Self, DomainError> {
        Self::build(name.into(), ClassKind::Plain)
    }

    /// Plain class for a reserved vocabulary term
    pub fn reserved(term: Term) -> Self {
        Self {
            id: term.fingerprint(),
            name: term.as_str().to_string(),
            kind: ClassKind::Plain,
            deprecated: false,
        }
    }

    /// Create a restriction on a property
    pub fn restriction(
        name: impl Into<String>,
        on_property: &Property,
        kind: RestrictionKind,
    ) -> Result<Self, DomainError> {
        Self::build(
            name.into(),
            ClassKind::Restriction(Restriction {
                on_property: on_property.id(),
                kind,
            }),
        )
    }

    /// Create a union; operands are attached through the class model
    pub fn union(name: impl Into<String>) -> Result<Self, DomainError> {
        Self::build(name.into(), ClassKind::Composite(CompositeKind::Union))
    }

    /// Create an intersection; operands are attached through the class model
    pub fn intersection(name: impl Into<String>) -> Result<Self, DomainError> {
        Self::build(name.into(), ClassKind::Composite(CompositeKind::Intersection))
    }

    /// Create the complement of a class
    ///
    /// # Errors
    /// Returns [`DomainError::SelfReference`] when `of` has the same name
    pub fn complement(name: impl Into<String>, of: &Class) -> Result<Self, DomainError> {
        let class = Self::build(name.into(), ClassKind::Composite(CompositeKind::Complement(of.id())))?;
        if class.id == of.id() {
            return Err(DomainError::SelfReference(class.name));
        }
        Ok(class)
    }

    /// Create an enumeration of individuals
    pub fn enumeration(name: impl Into<String>) -> Result<Self, DomainError> {
        Self::build(name.into(), ClassKind::Enumeration)
    }

    /// Create a data range (enumeration of literals)
    pub fn data_range(name: impl Into<String>) -> Result<Self, DomainError> {
        Self::build(name.into(), ClassKind::DataRange)
    }

    /// Fingerprint of the class
    pub fn id(&self) -> Fingerprint {
        self.id
    }

    /// Canonical name of the class
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind of class expression
    pub fn kind(&self) -> &ClassKind {
        &self.kind
    }

    /// Whether the class is deprecated
    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    /// Whether this is a plain class
    pub fn is_plain(&self) -> bool {
        matches!(self.kind, ClassKind::Plain)
    }

    /// Whether this is a restriction
    pub fn is_restriction(&self) -> bool {
        matches!(self.kind, ClassKind::Restriction(_))
    }

    /// Whether this is a union, intersection or complement
    pub fn is_composite(&self) -> bool {
        matches!(self.kind, ClassKind::Composite(_))
    }

    /// Mark the class as deprecated
    ///
    /// # Errors
    /// Returns [`DomainError::NotPlainClass`] for anything but a plain class
    pub fn set_deprecated(&mut self, deprecated: bool) -> Result<(), DomainError> {
        if !self.is_plain() {
            return Err(DomainError::NotPlainClass(self.name.clone()));
        }
        self.deprecated = deprecated;
        Ok(())
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
