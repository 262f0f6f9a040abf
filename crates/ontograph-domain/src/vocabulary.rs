//! Reserved vocabulary (the foundational terms every ontology can rely on)
//!
//! Terms are plain constants: resolving one is a fingerprint computation, so
//! no process-wide instance has to be initialized before guards run.

use crate::Fingerprint;

/// OWL namespace
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
/// RDF namespace
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// XML Schema namespace
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// A reserved vocabulary name
///
/// The field is private, so every `Term` is one of the non-empty constants
/// declared in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term(&'static str);

impl Term {
    /// Canonical name of the term
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Fingerprint of the term
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self.0)
    }

    /// Local part of the name (after `#`)
    pub fn local_name(&self) -> &'static str {
        self.0.rsplit('#').next().unwrap_or(self.0)
    }
}

macro_rules! terms {
    ($($(#[$doc:meta])* $name:ident = $iri:expr;)*) => {
        $( $(#[$doc])* pub const $name: Term = Term($iri); )*

        /// Every reserved term
        pub const ALL_TERMS: &[Term] = &[$($name),*];
    };
}

terms! {
    /// Universal top class
    OWL_THING = "http://www.w3.org/2002/07/owl#Thing";
    /// Universal bottom class
    OWL_NOTHING = "http://www.w3.org/2002/07/owl#Nothing";
    /// Root literal class
    RDFS_LITERAL = "http://www.w3.org/2000/01/rdf-schema#Literal";
    /// XML literal datatype
    RDF_XMLLITERAL = "http://www.w3.org/1999/02/22-rdf-syntax-ns#XMLLiteral";

    /// Subsumption between classes
    RDFS_SUBCLASSOF = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// Equivalence between classes
    OWL_EQUIVALENTCLASS = "http://www.w3.org/2002/07/owl#equivalentClass";
    /// Disjointness between classes
    OWL_DISJOINTWITH = "http://www.w3.org/2002/07/owl#disjointWith";
    /// Enumeration operand
    OWL_ONEOF = "http://www.w3.org/2002/07/owl#oneOf";
    /// Intersection operand
    OWL_INTERSECTIONOF = "http://www.w3.org/2002/07/owl#intersectionOf";
    /// Union operand
    OWL_UNIONOF = "http://www.w3.org/2002/07/owl#unionOf";
    /// Subsumption between properties
    RDFS_SUBPROPERTYOF = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    /// Equivalence between properties
    OWL_EQUIVALENTPROPERTY = "http://www.w3.org/2002/07/owl#equivalentProperty";
    /// Inverse properties
    OWL_INVERSEOF = "http://www.w3.org/2002/07/owl#inverseOf";
    /// Individual identity
    OWL_SAMEAS = "http://www.w3.org/2002/07/owl#sameAs";
    /// Individual distinctness
    OWL_DIFFERENTFROM = "http://www.w3.org/2002/07/owl#differentFrom";
    /// Class membership of an individual
    RDF_TYPE = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// xsd:string
    XSD_STRING = "http://www.w3.org/2001/XMLSchema#string";
    /// xsd:normalizedString
    XSD_NORMALIZEDSTRING = "http://www.w3.org/2001/XMLSchema#normalizedString";
    /// xsd:token
    XSD_TOKEN = "http://www.w3.org/2001/XMLSchema#token";
    /// xsd:language
    XSD_LANGUAGE = "http://www.w3.org/2001/XMLSchema#language";
    /// xsd:Name
    XSD_NAME = "http://www.w3.org/2001/XMLSchema#Name";
    /// xsd:NCName
    XSD_NCNAME = "http://www.w3.org/2001/XMLSchema#NCName";
    /// xsd:ID
    XSD_ID = "http://www.w3.org/2001/XMLSchema#ID";
    /// xsd:NMTOKEN
    XSD_NMTOKEN = "http://www.w3.org/2001/XMLSchema#NMTOKEN";
    /// xsd:anyURI
    XSD_ANYURI = "http://www.w3.org/2001/XMLSchema#anyURI";
    /// xsd:boolean
    XSD_BOOLEAN = "http://www.w3.org/2001/XMLSchema#boolean";
    /// xsd:decimal
    XSD_DECIMAL = "http://www.w3.org/2001/XMLSchema#decimal";
    /// xsd:integer
    XSD_INTEGER = "http://www.w3.org/2001/XMLSchema#integer";
    /// xsd:long
    XSD_LONG = "http://www.w3.org/2001/XMLSchema#long";
    /// xsd:int
    XSD_INT = "http://www.w3.org/2001/XMLSchema#int";
    /// xsd:short
    XSD_SHORT = "http://www.w3.org/2001/XMLSchema#short";
    /// xsd:byte
    XSD_BYTE = "http://www.w3.org/2001/XMLSchema#byte";
    /// xsd:nonNegativeInteger
    XSD_NONNEGATIVEINTEGER = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    /// xsd:positiveInteger
    XSD_POSITIVEINTEGER = "http://www.w3.org/2001/XMLSchema#positiveInteger";
    /// xsd:unsignedLong
    XSD_UNSIGNEDLONG = "http://www.w3.org/2001/XMLSchema#unsignedLong";
    /// xsd:unsignedInt
    XSD_UNSIGNEDINT = "http://www.w3.org/2001/XMLSchema#unsignedInt";
    /// xsd:unsignedShort
    XSD_UNSIGNEDSHORT = "http://www.w3.org/2001/XMLSchema#unsignedShort";
    /// xsd:unsignedByte
    XSD_UNSIGNEDBYTE = "http://www.w3.org/2001/XMLSchema#unsignedByte";
    /// xsd:nonPositiveInteger
    XSD_NONPOSITIVEINTEGER = "http://www.w3.org/2001/XMLSchema#nonPositiveInteger";
    /// xsd:negativeInteger
    XSD_NEGATIVEINTEGER = "http://www.w3.org/2001/XMLSchema#negativeInteger";
    /// xsd:float
    XSD_FLOAT = "http://www.w3.org/2001/XMLSchema#float";
    /// xsd:double
    XSD_DOUBLE = "http://www.w3.org/2001/XMLSchema#double";
    /// xsd:duration
    XSD_DURATION = "http://www.w3.org/2001/XMLSchema#duration";
    /// xsd:dateTime
    XSD_DATETIME = "http://www.w3.org/2001/XMLSchema#dateTime";
    /// xsd:date
    XSD_DATE = "http://www.w3.org/2001/XMLSchema#date";
    /// xsd:time
    XSD_TIME = "http://www.w3.org/2001/XMLSchema#time";
    /// xsd:gYear
    XSD_GYEAR = "http://www.w3.org/2001/XMLSchema#gYear";
    /// xsd:gYearMonth
    XSD_GYEARMONTH = "http://www.w3.org/2001/XMLSchema#gYearMonth";
    /// xsd:hexBinary
    XSD_HEXBINARY = "http://www.w3.org/2001/XMLSchema#hexBinary";
    /// xsd:base64Binary
    XSD_BASE64BINARY = "http://www.w3.org/2001/XMLSchema#base64Binary";
}

/// Subclass ladder of the literal datatypes, as `(child, mother)` pairs
///
/// Every datatype reaches `rdfs:Literal` through this ladder.
pub const DATATYPE_LADDER: &[(Term, Term)] = &[
    (RDF_XMLLITERAL, RDFS_LITERAL),
    (XSD_STRING, RDFS_LITERAL),
    (XSD_NORMALIZEDSTRING, XSD_STRING),
    (XSD_TOKEN, XSD_NORMALIZEDSTRING),
    (XSD_LANGUAGE, XSD_TOKEN),
    (XSD_NAME, XSD_TOKEN),
    (XSD_NCNAME, XSD_NAME),
    (XSD_ID, XSD_NCNAME),
    (XSD_NMTOKEN, XSD_TOKEN),
    (XSD_ANYURI, RDFS_LITERAL),
    (XSD_BOOLEAN, RDFS_LITERAL),
    (XSD_DECIMAL, RDFS_LITERAL),
    (XSD_INTEGER, XSD_DECIMAL),
    (XSD_LONG, XSD_INTEGER),
    (XSD_INT, XSD_LONG),
    (XSD_SHORT, XSD_INT),
    (XSD_BYTE, XSD_SHORT),
    (XSD_NONNEGATIVEINTEGER, XSD_INTEGER),
    (XSD_POSITIVEINTEGER, XSD_NONNEGATIVEINTEGER),
    (XSD_UNSIGNEDLONG, XSD_NONNEGATIVEINTEGER),
    (XSD_UNSIGNEDINT, XSD_UNSIGNEDLONG),
    (XSD_UNSIGNEDSHORT, XSD_UNSIGNEDINT),
    (XSD_UNSIGNEDBYTE, XSD_UNSIGNEDSHORT),
    (XSD_NONPOSITIVEINTEGER, XSD_INTEGER),
    (XSD_NEGATIVEINTEGER, XSD_NONPOSITIVEINTEGER),
    (XSD_FLOAT, RDFS_LITERAL),
    (XSD_DOUBLE, RDFS_LITERAL),
    (XSD_DURATION, RDFS_LITERAL),
    (XSD_DATETIME, RDFS_LITERAL),
    (XSD_DATE, RDFS_LITERAL),
    (XSD_TIME, RDFS_LITERAL),
    (XSD_GYEAR, RDFS_LITERAL),
    (XSD_GYEARMONTH, RDFS_LITERAL),
    (XSD_HEXBINARY, RDFS_LITERAL),
    (XSD_BASE64BINARY, RDFS_LITERAL),
];

/// Resolve a reserved name to its term
pub fn lookup(name: &str) -> Option<Term> {
    ALL_TERMS.iter().copied().find(|term| term.as_str() == name)
}

/// Resolve a reserved fingerprint to its term
pub fn lookup_fingerprint(fingerprint: Fingerprint) -> Option<Term> {
    ALL_TERMS.iter().copied().find(|term| term.fingerprint() == fingerprint)
}

/// Whether the fingerprint is the root literal class or a reserved datatype
pub fn is_literal_class(fingerprint: Fingerprint) -> bool {
    fingerprint == RDFS_LITERAL.fingerprint()
        || DATATYPE_LADDER
            .iter()
            .any(|(child, _)| child.fingerprint() == fingerprint)
}

/// Whether the fingerprint is owl:Thing or owl:Nothing
pub fn is_universal_class(fingerprint: Fingerprint) -> bool {
    fingerprint == OWL_THING.fingerprint() || fingerprint == OWL_NOTHING.fingerprint()
}

/// Value space a datatype belongs to, used for semantic literal comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatatypeFamily {
    /// Decimal, integer and floating point types
    Numeric,
    /// xsd:boolean
    Boolean,
    /// String-derived types
    String,
    /// Anything else (compared lexically)
    Other,
}

/// Classify a datatype by its canonical name
pub fn datatype_family(datatype: &str) -> DatatypeFamily {
    let Some(local) = datatype.strip_prefix(XSD_NS) else {
        return DatatypeFamily::Other;
    };

    match local {
        "decimal" | "integer" | "long" | "int" | "short" | "byte" | "nonNegativeInteger"
        | "positiveInteger" | "unsignedLong" | "unsignedInt" | "unsignedShort"
        | "unsignedByte" | "nonPositiveInteger" | "negativeInteger" | "float" | "double" => {
            DatatypeFamily::Numeric
        }
        "boolean" => DatatypeFamily::Boolean,
        "string" | "normalizedString" | "token" | "language" | "Name" | "NCName" | "ID"
        | "NMTOKEN" => DatatypeFamily::String,
        _ => DatatypeFamily::Other,
    }
}
