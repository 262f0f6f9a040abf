//! Individuals, literals and the values that can fill a property

use std::fmt;

use crate::vocabulary::{self, DatatypeFamily};
use crate::{canonical_name, DomainError, Fingerprint};

/// A named individual (A-BOX leaf)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Individual {
    id: Fingerprint,
    name: String,
}

impl Individual {
    /// Create an individual from its canonical name
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyName`] when the name is blank
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = canonical_name(name.into(), "individual")?;
        Ok(Self {
            id: Fingerprint::of(&name),
            name,
        })
    }

    /// Fingerprint of the individual
    pub fn id(&self) -> Fingerprint {
        self.id
    }

    /// Canonical name of the individual
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A literal value, either plain (optionally language-tagged) or typed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    id: Fingerprint,
    value: String,
    form: LiteralForm,
}

/// Shape of a literal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralForm {
    /// Plain literal with an optional (lowercased) language tag
    Plain {
        /// Language tag
        language: Option<String>,
    },

    /// Typed literal carrying a datatype class reference
    Typed {
        /// Fingerprint of the datatype class
        datatype: Fingerprint,
        /// Canonical name of the datatype class
        datatype_name: String,
    },
}

impl Literal {
    /// Create a plain literal
    ///
    /// An empty value is a legal literal; an empty language tag is treated as absent.
    pub fn plain(value: impl Into<String>, language: Option<&str>) -> Self {
        let value = value.into();
        let language = language
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty());
        let name = match &language {
            Some(tag) => format!("\"{}\"@{}", value, tag),
            None => format!("\"{}\"", value),
        };

        Self {
            id: Fingerprint::of(&name),
            value,
            form: LiteralForm::Plain { language },
        }
    }

    /// Create a typed literal whose datatype is the named class
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyName`] when the datatype name is blank
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let datatype_name = canonical_name(datatype.into(), "datatype")?;
        let name = format!("\"{}\"^^<{}>", value, datatype_name);

        Ok(Self {
            id: Fingerprint::of(&name),
            value,
            form: LiteralForm::Typed {
                datatype: Fingerprint::of(&datatype_name),
                datatype_name,
            },
        })
    }

    /// Create a typed literal from a reserved datatype term
    pub fn of_datatype(value: impl Into<String>, datatype: vocabulary::Term) -> Self {
        let value = value.into();
        let name = format!("\"{}\"^^<{}>", value, datatype.as_str());

        Self {
            id: Fingerprint::of(&name),
            value,
            form: LiteralForm::Typed {
                datatype: datatype.fingerprint(),
                datatype_name: datatype.as_str().to_string(),
            },
        }
    }

    /// Fingerprint of the literal
    pub fn id(&self) -> Fingerprint {
        self.id
    }

    /// Lexical value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Shape of the literal
    pub fn form(&self) -> &LiteralForm {
        &self.form
    }

    /// Language tag of a plain literal
    pub fn language(&self) -> Option<&str> {
        match &self.form {
            LiteralForm::Plain { language } => language.as_deref(),
            LiteralForm::Typed { .. } => None,
        }
    }

    /// Datatype of a typed literal
    pub fn datatype(&self) -> Option<Fingerprint> {
        match &self.form {
            LiteralForm::Typed { datatype, .. } => Some(*datatype),
            LiteralForm::Plain { .. } => None,
        }
    }

    /// Canonical name, e.g. `"42"^^<http://www.w3.org/2001/XMLSchema#int>`
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Semantic equality between literals
    ///
    /// Typed literals are compared in the value space of their datatype family,
    /// so `"1"^^xsd:int` equals `"1.0"^^xsd:decimal`. A plain literal without a
    /// language tag equals an `xsd:string` literal with the same value.
    pub fn semantically_equals(&self, other: &Literal) -> bool {
        match (&self.form, &other.form) {
            (LiteralForm::Plain { language: a }, LiteralForm::Plain { language: b }) => {
                a == b && self.value == other.value
            }
            (LiteralForm::Plain { language: None }, LiteralForm::Typed { datatype_name, .. })
            | (LiteralForm::Typed { datatype_name, .. }, LiteralForm::Plain { language: None }) => {
                vocabulary::datatype_family(datatype_name) == DatatypeFamily::String
                    && self.value == other.value
            }
            (LiteralForm::Plain { .. }, LiteralForm::Typed { .. })
            | (LiteralForm::Typed { .. }, LiteralForm::Plain { .. }) => false,
            (
                LiteralForm::Typed { datatype: da, datatype_name: na },
                LiteralForm::Typed { datatype: db, datatype_name: nb },
            ) => {
                let family = vocabulary::datatype_family(na);
                if family != vocabulary::datatype_family(nb) {
                    return false;
                }
                match family {
                    DatatypeFamily::Numeric => numeric_equals(&self.value, &other.value),
                    DatatypeFamily::Boolean => {
                        match (parse_boolean(&self.value), parse_boolean(&other.value)) {
                            (Some(a), Some(b)) => a == b,
                            _ => false,
                        }
                    }
                    DatatypeFamily::String => self.value == other.value,
                    DatatypeFamily::Other => da == db && self.value.trim() == other.value.trim(),
                }
            }
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.form {
            LiteralForm::Plain { language: Some(tag) } => write!(f, "\"{}\"@{}", self.value, tag),
            LiteralForm::Plain { language: None } => write!(f, "\"{}\"", self.value),
            LiteralForm::Typed { datatype_name, .. } => {
                write!(f, "\"{}\"^^<{}>", self.value, datatype_name)
            }
        }
    }
}

fn numeric_equals(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    let (a, b) = (a.strip_prefix('+').unwrap_or(a), b.strip_prefix('+').unwrap_or(b));
    if let (Ok(x), Ok(y)) = (a.parse::<i128>(), b.parse::<i128>()) {
        return x == y;
    }
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}

fn parse_boolean(value: &str) -> Option<bool> {
    match value.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// A resource that can fill a property: an individual or a literal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Named individual
    Individual(Individual),

    /// Literal value
    Literal(Literal),
}

impl Value {
    /// Fingerprint of the underlying resource
    pub fn id(&self) -> Fingerprint {
        match self {
            Value::Individual(individual) => individual.id(),
            Value::Literal(literal) => literal.id(),
        }
    }

    /// Display name of the underlying resource
    pub fn name(&self) -> String {
        match self {
            Value::Individual(individual) => individual.name().to_string(),
            Value::Literal(literal) => literal.name(),
        }
    }

    /// Borrow the individual, if this is one
    pub fn as_individual(&self) -> Option<&Individual> {
        match self {
            Value::Individual(individual) => Some(individual),
            Value::Literal(_) => None,
        }
    }

    /// Borrow the literal, if this is one
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Value::Literal(literal) => Some(literal),
            Value::Individual(_) => None,
        }
    }
}

impl From<Individual> for Value {
    fn from(individual: Individual) -> Self {
        Value::Individual(individual)
    }
}

impl From<&Individual> for Value {
    fn from(individual: &Individual) -> Self {
        Value::Individual(individual.clone())
    }
}

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        Value::Literal(literal)
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        Value::Literal(literal.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{XSD_BOOLEAN, XSD_DATE, XSD_DECIMAL, XSD_INT, XSD_STRING};

    #[test]
    fn test_individual_requires_name() {
        assert!(Individual::new("ex:fido").is_ok());
        assert_eq!(Individual::new(""), Err(DomainError::EmptyName("individual")));
        assert!(Individual::new("   ").is_err());
    }

    #[test]
    fn test_literal_names() {
        assert_eq!(Literal::plain("hello", None).name(), "\"hello\"");
        assert_eq!(Literal::plain("hello", Some("EN")).name(), "\"hello\"@en");
        assert_eq!(
            Literal::of_datatype("42", XSD_INT).name(),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#int>"
        );
        assert!(Literal::typed("42", "").is_err());
    }

    #[test]
    fn test_literal_identity_follows_canonical_name() {
        assert_eq!(Literal::plain("a", Some("en")).id(), Literal::plain("a", Some("EN")).id());
        assert_ne!(Literal::plain("a", None).id(), Literal::of_datatype("a", XSD_STRING).id());
    }

    #[test]
    fn test_numeric_semantic_equality() {
        let int_one = Literal::of_datatype("1", XSD_INT);
        let decimal_one = Literal::of_datatype("1.0", XSD_DECIMAL);
        let int_two = Literal::of_datatype("2", XSD_INT);

        assert!(int_one.semantically_equals(&decimal_one));
        assert!(!int_one.semantically_equals(&int_two));
        assert_ne!(int_one, decimal_one);
    }

    #[test]
    fn test_boolean_semantic_equality() {
        let t = Literal::of_datatype("true", XSD_BOOLEAN);
        let one = Literal::of_datatype("1", XSD_BOOLEAN);
        let int_one = Literal::of_datatype("1", XSD_INT);

        assert!(t.semantically_equals(&one));
        assert!(!one.semantically_equals(&int_one));
    }

    #[test]
    fn test_plain_and_string_semantic_equality() {
        let plain = Literal::plain("dog", None);
        let tagged = Literal::plain("dog", Some("en"));
        let string = Literal::of_datatype("dog", XSD_STRING);

        assert!(plain.semantically_equals(&string));
        assert!(string.semantically_equals(&plain));
        assert!(!tagged.semantically_equals(&string));
        assert!(!tagged.semantically_equals(&plain));
    }

    #[test]
    fn test_other_datatypes_compare_lexically() {
        let a = Literal::of_datatype("2024-01-01", XSD_DATE);
        let b = Literal::of_datatype("2024-01-01", XSD_DATE);
        let c = Literal::of_datatype("2024-01-02", XSD_DATE);

        assert!(a.semantically_equals(&b));
        assert!(!a.semantically_equals(&c));
    }

    #[test]
    fn test_value_conversions() {
        let fido = Individual::new("ex:fido").unwrap();
        let value: Value = (&fido).into();
        assert_eq!(value.id(), fido.id());
        assert!(value.as_individual().is_some());
        assert!(value.as_literal().is_none());
    }
}
