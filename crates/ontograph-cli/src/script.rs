//! Statement parsing for scripts and the REPL.
//!
//! One statement per line. Names are whitespace-separated; literals are
//! double-quoted and may carry a language tag (`"chien"@fr`) or a datatype
//! (`"42"^^xsd:int`). Lines starting with `#` are comments.

use crate::error::{CliError, Result};
use ontograph_domain::vocabulary::{OWL_NS, RDFS_NS, RDF_NS, XSD_NS};
use ontograph_domain::{Literal, PropertyKind};

/// A parsed statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Declare a plain class
    Class(String),
    /// `child subClassOf mother`
    SubClass {
        /// Subsumed class
        child: String,
        /// Subsuming class
        mother: String,
    },
    /// `a equivalentClass b`
    Equivalent(String, String),
    /// `a disjointWith b`
    Disjoint(String, String),
    /// Declare a property
    Property(PropertyDecl),
    /// `child subPropertyOf mother`
    SubProperty {
        /// Subsumed property
        child: String,
        /// Subsuming property
        mother: String,
    },
    /// `a equivalentProperty b`
    EquivalentProperty(String, String),
    /// `a inverseOf b`
    Inverse(String, String),
    /// Declare an individual
    Individual(String),
    /// Define a restriction class
    Restriction {
        /// Restriction class name
        name: String,
        /// Restricted property
        property: String,
        /// Requirement on the property's values
        constraint: Constraint,
    },
    /// Define a union or intersection
    Composite {
        /// Composite class name
        name: String,
        /// `true` for a union, `false` for an intersection
        union: bool,
        /// Operand classes
        operands: Vec<String>,
    },
    /// Define a complement
    Complement {
        /// Complement class name
        name: String,
        /// Complemented class
        target: String,
    },
    /// Define an enumeration of individuals
    Enumeration {
        /// Enumeration class name
        name: String,
        /// Listed individuals
        members: Vec<String>,
    },
    /// Define a data range of literals
    DataRange {
        /// Data range name
        name: String,
        /// Listed literals
        literals: Vec<LiteralToken>,
    },
    /// `individual classType class`
    Type {
        /// Typed individual
        individual: String,
        /// Class
        class: String,
    },
    /// `a sameAs b`
    Same(String, String),
    /// `a differentFrom b`
    Different(String, String),
    /// `subject property value`
    Assert {
        /// Subject individual
        subject: String,
        /// Asserted property
        property: String,
        /// Individual or literal
        value: ValueToken,
    },
    /// Remove a class and every entry mentioning it
    RemoveClass(String),
    /// A read-only query
    Query(Query),
    /// Ontology statistics
    Stats,
    /// Purge inferred entries
    ClearInferred,
}

/// A property declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDecl {
    /// Property kind
    pub kind: PropertyKind,
    /// Property name
    pub name: String,
    /// Domain class
    pub domain: Option<String>,
    /// Range class
    pub range: Option<String>,
    /// Characteristic flags
    pub flags: Vec<Flag>,
}

/// Property characteristic flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// At most one value per subject
    Functional,
    /// At most one subject per value
    InverseFunctional,
    /// `a p b` implies `b p a`
    Symmetric,
    /// `a p b` and `b p c` imply `a p c`
    Transitive,
    /// Deprecated property
    Deprecated,
}

/// Requirement of a restriction.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Every value belongs to the class
    All(String),
    /// Some value belongs to the class
    Some(String),
    /// Some value is the given one
    Value(ValueToken),
    /// Value count bounds, `0` meaning absent
    Cardinality {
        /// Lower bound
        min: u32,
        /// Upper bound
        max: u32,
    },
}

/// A read-only query.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Subclasses of a class
    Subclasses(String),
    /// Superclasses of a class
    Superclasses(String),
    /// Equivalent classes of a class
    Equivalents(String),
    /// Classes disjoint with a class
    Disjoints(String),
    /// Members of a class expression
    Members(String),
    /// Synonyms of an individual
    SameAs(String),
    /// Individuals different from an individual
    DifferentFrom(String),
    /// Inverses of a property
    Inverses(String),
    /// Objects reachable through a transitive property
    Reachable {
        /// Starting individual
        individual: String,
        /// Transitive property
        property: String,
    },
}

/// An individual name or a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueToken {
    /// Individual name
    Name(String),
    /// Literal
    Literal(LiteralToken),
}

/// A quoted literal with its optional language tag or datatype.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralToken {
    /// Lexical value
    pub value: String,
    /// Language tag
    pub language: Option<String>,
    /// Datatype name, already expanded
    pub datatype: Option<String>,
}

impl LiteralToken {
    /// Build the literal.
    pub fn to_literal(&self) -> Result<Literal> {
        match &self.datatype {
            Some(datatype) => Ok(Literal::typed(self.value.clone(), datatype.clone())?),
            None => Ok(Literal::plain(self.value.clone(), self.language.as_deref())),
        }
    }
}

/// Expand the `xsd:`, `rdfs:`, `rdf:` and `owl:` prefixes.
pub fn expand_name(name: &str) -> String {
    let prefixes = [("xsd:", XSD_NS), ("rdfs:", RDFS_NS), ("rdf:", RDF_NS), ("owl:", OWL_NS)];
    for (prefix, namespace) in prefixes {
        if let Some(local) = name.strip_prefix(prefix) {
            return format!("{}{}", namespace, local);
        }
    }
    name.to_string()
}

/// Parse one line; blank lines and comments yield `None`.
pub fn parse_statement(line: &str) -> Result<Option<Statement>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(line)?;
    let (keyword, args) = match tokens.split_first() {
        Some((keyword, args)) => (keyword.as_str(), args),
        None => return Ok(None),
    };

    let statement = match keyword {
        "class" => Statement::Class(one(args, "class <name>")?),
        "subclass" => {
            let (child, mother) = two(args, "subclass <child> <mother>")?;
            Statement::SubClass { child, mother }
        }
        "equivalent" => {
            let (a, b) = two(args, "equivalent <class> <class>")?;
            Statement::Equivalent(a, b)
        }
        "disjoint" => {
            let (a, b) = two(args, "disjoint <class> <class>")?;
            Statement::Disjoint(a, b)
        }
        "object-property" => Statement::Property(property(PropertyKind::Object, args)?),
        "datatype-property" => Statement::Property(property(PropertyKind::Datatype, args)?),
        "annotation-property" => Statement::Property(property(PropertyKind::Annotation, args)?),
        "subproperty" => {
            let (child, mother) = two(args, "subproperty <child> <mother>")?;
            Statement::SubProperty { child, mother }
        }
        "equivalent-property" => {
            let (a, b) = two(args, "equivalent-property <property> <property>")?;
            Statement::EquivalentProperty(a, b)
        }
        "inverse" => {
            let (a, b) = two(args, "inverse <property> <property>")?;
            Statement::Inverse(a, b)
        }
        "individual" => Statement::Individual(one(args, "individual <name>")?),
        "restriction" => restriction(args)?,
        "union" | "intersection" => {
            let usage = "union|intersection <name> <class>...";
            let (name, operands) = args.split_first().ok_or_else(|| usage_error(usage))?;
            Statement::Composite {
                name: name_token(name, usage)?,
                union: keyword == "union",
                operands: names(operands, usage)?,
            }
        }
        "complement" => {
            let (name, target) = two(args, "complement <name> <class>")?;
            Statement::Complement { name, target }
        }
        "enum" => {
            let usage = "enum <name> <individual>...";
            let (name, members) = args.split_first().ok_or_else(|| usage_error(usage))?;
            Statement::Enumeration {
                name: name_token(name, usage)?,
                members: names(members, usage)?,
            }
        }
        "datarange" => {
            let usage = "datarange <name> <\"literal\">...";
            let (name, literals) = args.split_first().ok_or_else(|| usage_error(usage))?;
            let literals = literals
                .iter()
                .map(|token| match value_token(token)? {
                    ValueToken::Literal(literal) => Ok(literal),
                    ValueToken::Name(_) => Err(usage_error(usage)),
                })
                .collect::<Result<Vec<_>>>()?;
            Statement::DataRange {
                name: name_token(name, usage)?,
                literals,
            }
        }
        "type" => {
            let (individual, class) = two(args, "type <individual> <class>")?;
            Statement::Type { individual, class }
        }
        "same" => {
            let (a, b) = two(args, "same <individual> <individual>")?;
            Statement::Same(a, b)
        }
        "different" => {
            let (a, b) = two(args, "different <individual> <individual>")?;
            Statement::Different(a, b)
        }
        "assert" => match args {
            [subject, property, value] => Statement::Assert {
                subject: name_token(subject, "assert <subject> <property> <value>")?,
                property: name_token(property, "assert <subject> <property> <value>")?,
                value: value_token(value)?,
            },
            _ => return Err(usage_error("assert <subject> <property> <value>")),
        },
        "remove-class" => Statement::RemoveClass(one(args, "remove-class <name>")?),
        "subclasses" => Statement::Query(Query::Subclasses(one(args, "subclasses <class>")?)),
        "superclasses" => Statement::Query(Query::Superclasses(one(args, "superclasses <class>")?)),
        "equivalents" => Statement::Query(Query::Equivalents(one(args, "equivalents <class>")?)),
        "disjoints" => Statement::Query(Query::Disjoints(one(args, "disjoints <class>")?)),
        "members" => Statement::Query(Query::Members(one(args, "members <class>")?)),
        "same-as" => Statement::Query(Query::SameAs(one(args, "same-as <individual>")?)),
        "different-from" => Statement::Query(Query::DifferentFrom(one(args, "different-from <individual>")?)),
        "inverses" => Statement::Query(Query::Inverses(one(args, "inverses <property>")?)),
        "reachable" => {
            let (individual, property) = two(args, "reachable <individual> <property>")?;
            Statement::Query(Query::Reachable { individual, property })
        }
        "stats" => Statement::Stats,
        "clear-inferred" => Statement::ClearInferred,
        other => {
            return Err(CliError::InvalidInput(format!(
                "Unknown statement: {}. Type 'help' for available statements.",
                other
            )))
        }
    };
    Ok(Some(statement))
}

fn usage_error(usage: &str) -> CliError {
    CliError::InvalidInput(format!("Usage: {}", usage))
}

fn name_token(token: &str, usage: &str) -> Result<String> {
    if token.starts_with('"') {
        return Err(usage_error(usage));
    }
    Ok(expand_name(token))
}

fn names(tokens: &[String], usage: &str) -> Result<Vec<String>> {
    tokens.iter().map(|token| name_token(token, usage)).collect()
}

fn one(args: &[String], usage: &str) -> Result<String> {
    match args {
        [name] => name_token(name, usage),
        _ => Err(usage_error(usage)),
    }
}

fn two(args: &[String], usage: &str) -> Result<(String, String)> {
    match args {
        [a, b] => Ok((name_token(a, usage)?, name_token(b, usage)?)),
        _ => Err(usage_error(usage)),
    }
}

fn property(kind: PropertyKind, args: &[String]) -> Result<PropertyDecl> {
    let usage = "<kind>-property <name> [domain <class>] [range <class>] [functional] [inverse-functional] [symmetric] [transitive] [deprecated]";
    let (name, rest) = args.split_first().ok_or_else(|| usage_error(usage))?;
    let mut decl = PropertyDecl {
        kind,
        name: name_token(name, usage)?,
        domain: None,
        range: None,
        flags: Vec::new(),
    };

    let mut rest = rest.iter();
    while let Some(token) = rest.next() {
        match token.as_str() {
            "domain" => {
                let class = rest.next().ok_or_else(|| usage_error(usage))?;
                decl.domain = Some(name_token(class, usage)?);
            }
            "range" => {
                let class = rest.next().ok_or_else(|| usage_error(usage))?;
                decl.range = Some(name_token(class, usage)?);
            }
            "functional" => decl.flags.push(Flag::Functional),
            "inverse-functional" => decl.flags.push(Flag::InverseFunctional),
            "symmetric" => decl.flags.push(Flag::Symmetric),
            "transitive" => decl.flags.push(Flag::Transitive),
            "deprecated" => decl.flags.push(Flag::Deprecated),
            _ => return Err(usage_error(usage)),
        }
    }
    Ok(decl)
}

fn restriction(args: &[String]) -> Result<Statement> {
    let usage = "restriction <name> <property> (all <class> | some <class> | value <value> | cardinality <min> [max] | exactly <n>)";
    let (name, property, kind, rest) = match args {
        [name, property, kind, rest @ ..] => (name, property, kind.as_str(), rest),
        _ => return Err(usage_error(usage)),
    };

    let constraint = match (kind, rest) {
        ("all", [class]) => Constraint::All(name_token(class, usage)?),
        ("some", [class]) => Constraint::Some(name_token(class, usage)?),
        ("value", [value]) => Constraint::Value(value_token(value)?),
        ("cardinality", [min]) => Constraint::Cardinality {
            min: bound(min)?,
            max: 0,
        },
        ("cardinality", [min, max]) => Constraint::Cardinality {
            min: bound(min)?,
            max: bound(max)?,
        },
        ("exactly", [count]) => {
            let count = bound(count)?;
            Constraint::Cardinality { min: count, max: count }
        }
        _ => return Err(usage_error(usage)),
    };

    Ok(Statement::Restriction {
        name: name_token(name, usage)?,
        property: name_token(property, usage)?,
        constraint,
    })
}

fn bound(token: &str) -> Result<u32> {
    token
        .parse()
        .map_err(|_| CliError::InvalidInput(format!("Invalid cardinality bound: {}", token)))
}

/// Parse an individual name or a quoted literal.
fn value_token(token: &str) -> Result<ValueToken> {
    let Some(quoted) = token.strip_prefix('"') else {
        return Ok(ValueToken::Name(expand_name(token)));
    };

    let end = quoted
        .rfind('"')
        .ok_or_else(|| CliError::InvalidInput(format!("Unterminated literal: {}", token)))?;
    let value = quoted[..end].replace("\\\"", "\"");
    let suffix = &quoted[end + 1..];

    let (language, datatype) = if let Some(tag) = suffix.strip_prefix('@') {
        (Some(tag.to_string()), None)
    } else if let Some(datatype) = suffix.strip_prefix("^^") {
        (None, Some(expand_name(datatype.trim_start_matches('<').trim_end_matches('>'))))
    } else if suffix.is_empty() {
        (None, None)
    } else {
        return Err(CliError::InvalidInput(format!("Invalid literal suffix: {}", suffix)));
    };

    Ok(ValueToken::Literal(LiteralToken {
        value,
        language,
        datatype,
    }))
}

/// Split on whitespace, keeping quoted sections (with their suffix) together.
fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut escaped = false;

    for ch in line.chars() {
        if quoted {
            current.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                quoted = false;
            }
            continue;
        }
        match ch {
            '"' => {
                quoted = true;
                current.push(ch);
            }
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if quoted {
        return Err(CliError::InvalidInput("Unterminated literal".to_string()));
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}
