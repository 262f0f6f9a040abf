//! Session state: one ontology built statement by statement.

use crate::error::Result;
use crate::script::{Constraint, Flag, PropertyDecl, Query, Statement, ValueToken};
use ontograph_domain::{
    vocabulary, Cardinality, Class, Diagnostic, Fingerprint, Individual, Property, PropertyKind,
    RestrictionKind, Severity, Value,
};
use ontograph_gatekeeper::{Gatekeeper, ValidationConfig, ValidationResult};
use ontograph_inference::MembershipReasoner;
use ontograph_store::{CollectingSink, Foundation, Ontology, OntologyStats};
use std::sync::Arc;

/// Result of executing a statement.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The statement changed the ontology
    Applied(String),
    /// A consistency guard refused the statement; nothing changed
    Rejected(String),
    /// Names returned by a query
    Resources {
        /// Query description
        title: String,
        /// Sorted resource names
        names: Vec<String>,
    },
    /// Ontology statistics
    Stats(OntologyStats),
}

/// An interactive or scripted session over one ontology.
pub struct Session {
    ontology: Ontology,
    foundation: Foundation,
    sink: Arc<CollectingSink>,
}

impl Session {
    /// Create a session with an empty ontology guarded by `validation`.
    pub fn new(name: &str, validation: ValidationConfig) -> Result<Self> {
        let sink = CollectingSink::shared();
        let ontology = Ontology::with_gatekeeper(name, Gatekeeper::new(validation), sink.clone())?;
        Ok(Self {
            ontology,
            foundation: Foundation::new(),
            sink,
        })
    }

    /// The ontology built so far.
    pub fn ontology(&self) -> &Ontology {
        &self.ontology
    }

    /// Informational diagnostics emitted since the last call.
    ///
    /// Warnings are left out: rejections are already reported by [`Outcome::Rejected`].
    pub fn take_notes(&self) -> Vec<Diagnostic> {
        let notes = self
            .sink
            .diagnostics()
            .into_iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Info)
            .collect();
        self.sink.clear();
        notes
    }

    /// Execute one statement.
    pub fn execute(&mut self, statement: Statement) -> Result<Outcome> {
        tracing::trace!(?statement, "Executing statement");
        match statement {
            Statement::Class(name) => {
                let class = self.class(&name)?;
                let added = self.ontology.class_model_mut().add_class(class);
                Ok(declared("Class", &name, added))
            }
            Statement::SubClass { child, mother } => {
                let (child_class, mother_class) = (self.class(&child)?, self.class(&mother)?);
                let result = self.ontology.class_model_mut().add_subclass_of(&child_class, &mother_class);
                Ok(outcome(result, format!("{} subClassOf {}", child, mother)))
            }
            Statement::Equivalent(a, b) => {
                let (first, second) = (self.class(&a)?, self.class(&b)?);
                let result = self.ontology.class_model_mut().add_equivalent_class(&first, &second);
                Ok(outcome(result, format!("{} equivalentClass {}", a, b)))
            }
            Statement::Disjoint(a, b) => {
                let (first, second) = (self.class(&a)?, self.class(&b)?);
                let result = self.ontology.class_model_mut().add_disjoint_with(&first, &second);
                Ok(outcome(result, format!("{} disjointWith {}", a, b)))
            }
            Statement::Property(decl) => self.declare_property(decl),
            Statement::SubProperty { child, mother } => {
                let (child_property, mother_property) = (self.property(&child)?, self.property(&mother)?);
                let result = self
                    .ontology
                    .property_model_mut()
                    .add_subproperty_of(&child_property, &mother_property);
                Ok(outcome(result, format!("{} subPropertyOf {}", child, mother)))
            }
            Statement::EquivalentProperty(a, b) => {
                let (first, second) = (self.property(&a)?, self.property(&b)?);
                let result = self.ontology.property_model_mut().add_equivalent_property(&first, &second);
                Ok(outcome(result, format!("{} equivalentProperty {}", a, b)))
            }
            Statement::Inverse(a, b) => {
                let (first, second) = (self.property(&a)?, self.property(&b)?);
                let result = self.ontology.property_model_mut().add_inverse_of(&first, &second);
                Ok(outcome(result, format!("{} inverseOf {}", a, b)))
            }
            Statement::Individual(name) => {
                let individual = self.individual(&name)?;
                let added = self.ontology.data_mut().add_individual(individual);
                Ok(declared("Individual", &name, added))
            }
            Statement::Restriction {
                name,
                property,
                constraint,
            } => self.define_restriction(name, &property, constraint),
            Statement::Composite { name, union, operands } => {
                let composite = if union {
                    Class::union(name.as_str())?
                } else {
                    Class::intersection(name.as_str())?
                };
                self.ontology.class_model_mut().add_class(composite.clone());
                let mut results = Vec::new();
                for operand in &operands {
                    let operand = self.class(operand)?;
                    let classes = self.ontology.class_model_mut();
                    results.push(if union {
                        classes.add_union_of(&composite, &operand)
                    } else {
                        classes.add_intersection_of(&composite, &operand)
                    });
                }
                Ok(combined(results, format!("{} defined over {} operand(s)", name, operands.len())))
            }
            Statement::Complement { name, target } => {
                let target_class = self.class(&target)?;
                let complement = Class::complement(name.as_str(), &target_class)?;
                let classes = self.ontology.class_model_mut();
                classes.add_class(target_class);
                classes.add_class(complement);
                Ok(Outcome::Applied(format!("{} defined as the complement of {}", name, target)))
            }
            Statement::Enumeration { name, members } => {
                let enumeration = Class::enumeration(name.as_str())?;
                self.ontology.class_model_mut().add_class(enumeration.clone());
                let mut results = Vec::new();
                for member in &members {
                    let individual = self.individual(member)?;
                    results.push(self.ontology.class_model_mut().add_one_of(&enumeration, &individual));
                }
                Ok(combined(results, format!("{} enumerates {} individual(s)", name, members.len())))
            }
            Statement::DataRange { name, literals } => {
                let range = Class::data_range(name.as_str())?;
                self.ontology.class_model_mut().add_class(range.clone());
                let mut results = Vec::new();
                for literal in &literals {
                    let literal = literal.to_literal()?;
                    results.push(self.ontology.class_model_mut().add_one_of(&range, literal));
                }
                Ok(combined(results, format!("{} lists {} literal(s)", name, literals.len())))
            }
            Statement::Type { individual, class } => {
                let (member, type_class) = (self.individual(&individual)?, self.class(&class)?);
                let result = self.ontology.add_class_type(&member, &type_class);
                Ok(outcome(result, format!("{} classType {}", individual, class)))
            }
            Statement::Same(a, b) => {
                let (first, second) = (self.individual(&a)?, self.individual(&b)?);
                let result = self.ontology.data_mut().add_same_as(&first, &second);
                Ok(outcome(result, format!("{} sameAs {}", a, b)))
            }
            Statement::Different(a, b) => {
                let (first, second) = (self.individual(&a)?, self.individual(&b)?);
                let result = self.ontology.data_mut().add_different_from(&first, &second);
                Ok(outcome(result, format!("{} differentFrom {}", a, b)))
            }
            Statement::Assert {
                subject,
                property,
                value,
            } => {
                let subject_individual = self.individual(&subject)?;
                let asserted = self.property(&property)?;
                let value = self.value(&value)?;
                let message = format!("{} {} {}", subject, property, value.name());
                let result = self
                    .ontology
                    .data_mut()
                    .add_assertion(&subject_individual, &asserted, value);
                Ok(outcome(result, message))
            }
            Statement::RemoveClass(name) => {
                let removed = self.ontology.class_model_mut().remove_class(Fingerprint::of(&name));
                Ok(Outcome::Applied(if removed {
                    format!("Class {} removed", name)
                } else {
                    format!("Class {} was not present", name)
                }))
            }
            Statement::Query(query) => self.query(query),
            Statement::Stats => Ok(Outcome::Stats(self.ontology.stats())),
            Statement::ClearInferred => {
                let purged = self.ontology.clear_inferred();
                Ok(Outcome::Applied(format!("Cleared {} inferred entr{}", purged, plural(purged))))
            }
        }
    }

    fn declare_property(&mut self, decl: PropertyDecl) -> Result<Outcome> {
        let mut property = match decl.kind {
            PropertyKind::Object => Property::object(decl.name.as_str())?,
            PropertyKind::Datatype => Property::datatype(decl.name.as_str())?,
            PropertyKind::Annotation => Property::annotation(decl.name.as_str())?,
        };

        if let Some(domain) = &decl.domain {
            let class = self.class(domain)?;
            property.set_domain(Some(&class))?;
            self.ontology.class_model_mut().add_class(class);
        }
        if let Some(range) = &decl.range {
            let class = self.class(range)?;
            property.set_range(Some(&class))?;
            self.ontology.class_model_mut().add_class(class);
        }
        for flag in &decl.flags {
            match flag {
                Flag::Functional => property.set_functional(true)?,
                Flag::InverseFunctional => property.set_inverse_functional(true)?,
                Flag::Symmetric => property.set_symmetric(true)?,
                Flag::Transitive => property.set_transitive(true)?,
                Flag::Deprecated => property.set_deprecated(true),
            }
        }

        let added = self.ontology.property_model_mut().add_property(property);
        Ok(declared("Property", &decl.name, added))
    }

    fn define_restriction(&mut self, name: String, property: &str, constraint: Constraint) -> Result<Outcome> {
        let on_property = self.property(property)?;
        let kind = match constraint {
            Constraint::All(class) => {
                let class = self.class(&class)?;
                let id = class.id();
                self.ontology.class_model_mut().add_class(class);
                RestrictionKind::AllValuesFrom(id)
            }
            Constraint::Some(class) => {
                let class = self.class(&class)?;
                let id = class.id();
                self.ontology.class_model_mut().add_class(class);
                RestrictionKind::SomeValuesFrom(id)
            }
            Constraint::Value(value) => RestrictionKind::HasValue(self.value(&value)?),
            Constraint::Cardinality { min, max } => RestrictionKind::Cardinality(Cardinality::new(min, max)?),
        };

        let restriction = Class::restriction(name.as_str(), &on_property, kind)?;
        let added = self.ontology.class_model_mut().add_class(restriction);
        Ok(declared("Restriction", &name, added))
    }

    fn query(&self, query: Query) -> Result<Outcome> {
        // Closures see the reserved vocabulary too
        let view = self.ontology.union(self.foundation.ontology());
        let (title, found) = match query {
            Query::Subclasses(name) => (
                format!("Subclasses of {}", name),
                view.class_model().enlist_subclasses_of(Fingerprint::of(&name)),
            ),
            Query::Superclasses(name) => (
                format!("Superclasses of {}", name),
                view.class_model().enlist_superclasses_of(Fingerprint::of(&name)),
            ),
            Query::Equivalents(name) => (
                format!("Equivalents of {}", name),
                view.class_model().enlist_equivalent_classes_of(Fingerprint::of(&name)),
            ),
            Query::Disjoints(name) => (
                format!("Disjoint with {}", name),
                view.class_model().enlist_disjoint_classes_with(Fingerprint::of(&name)),
            ),
            Query::Members(name) => {
                let reasoner = MembershipReasoner::new(&self.foundation);
                (
                    format!("Members of {}", name),
                    reasoner.enlist_members_of(&self.ontology, Fingerprint::of(&name)),
                )
            }
            Query::SameAs(name) => (
                format!("Same as {}", name),
                view.data().enlist_same_individuals_as(Fingerprint::of(&name)),
            ),
            Query::DifferentFrom(name) => (
                format!("Different from {}", name),
                view.data().enlist_different_individuals_from(Fingerprint::of(&name)),
            ),
            Query::Inverses(name) => (
                format!("Inverses of {}", name),
                view.property_model().enlist_inverse_properties_of(Fingerprint::of(&name)),
            ),
            Query::Reachable { individual, property } => {
                let property = self.property(&property)?;
                (
                    format!("Reachable from {} through {}", individual, property.name()),
                    self.ontology
                        .data()
                        .enlist_transitive_assertions_of(Fingerprint::of(&individual), &property),
                )
            }
        };

        let mut names: Vec<String> = found.into_iter().map(|id| view.display_name(id)).collect();
        names.sort();
        Ok(Outcome::Resources { title, names })
    }

    /// Registered class, reserved class, or a new plain class
    fn class(&self, name: &str) -> Result<Class> {
        if let Ok(class) = self.ontology.resolve_class(name) {
            return Ok(class.clone());
        }
        if let Some(term) = vocabulary::lookup(name) {
            return Ok(Class::reserved(term));
        }
        Ok(Class::plain(name)?)
    }

    /// Properties must be declared before use
    fn property(&self, name: &str) -> Result<Property> {
        Ok(self.ontology.resolve_property(name)?.clone())
    }

    fn individual(&self, name: &str) -> Result<Individual> {
        if let Ok(individual) = self.ontology.resolve_individual(name) {
            return Ok(individual.clone());
        }
        Ok(Individual::new(name)?)
    }

    fn value(&self, token: &ValueToken) -> Result<Value> {
        match token {
            ValueToken::Name(name) => Ok(Value::from(self.individual(name)?)),
            ValueToken::Literal(literal) => Ok(Value::from(literal.to_literal()?)),
        }
    }
}

fn outcome(result: ValidationResult, applied: String) -> Outcome {
    if result.is_accepted() {
        Outcome::Applied(applied)
    } else {
        Outcome::Rejected(result.message())
    }
}

fn combined(results: Vec<ValidationResult>, applied: String) -> Outcome {
    let rejected: Vec<String> = results
        .iter()
        .filter(|result| result.is_rejected())
        .map(|result| result.message())
        .collect();
    if rejected.is_empty() {
        Outcome::Applied(applied)
    } else {
        Outcome::Rejected(rejected.join("; "))
    }
}

fn declared(kind: &str, name: &str, added: bool) -> Outcome {
    if added {
        Outcome::Applied(format!("{} {} declared", kind, name))
    } else {
        Outcome::Applied(format!("{} {} already declared", kind, name))
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "y"
    } else {
        "ies"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_statement;

    fn run(session: &mut Session, line: &str) -> Outcome {
        let statement = parse_statement(line).unwrap().unwrap();
        session.execute(statement).unwrap()
    }

    fn names(outcome: Outcome) -> Vec<String> {
        match outcome {
            Outcome::Resources { names, .. } => names,
            other => panic!("expected resources, got {:?}", other),
        }
    }

    fn session() -> Session {
        Session::new("ex:test", ValidationConfig::default()).unwrap()
    }

    #[test]
    fn test_subclass_queries() {
        let mut session = session();
        run(&mut session, "subclass ex:Dog ex:Animal");
        run(&mut session, "subclass ex:Puppy ex:Dog");

        assert_eq!(names(run(&mut session, "subclasses ex:Animal")), vec!["ex:Dog", "ex:Puppy"]);
        assert_eq!(names(run(&mut session, "superclasses ex:Puppy")), vec!["ex:Animal", "ex:Dog"]);
    }

    #[test]
    fn test_contradiction_is_rejected() {
        let mut session = session();
        run(&mut session, "subclass ex:A ex:B");
        let outcome = run(&mut session, "disjoint ex:A ex:B");

        assert!(matches!(outcome, Outcome::Rejected(_)));
        assert!(names(run(&mut session, "disjoints ex:A")).is_empty());
        // Rejections are reported through the outcome, not as notes
        assert!(session.take_notes().is_empty());
    }

    #[test]
    fn test_properties_must_be_declared() {
        let mut session = session();
        let statement = parse_statement("assert ex:a ex:knows ex:b").unwrap().unwrap();
        assert!(session.execute(statement).is_err());

        run(&mut session, "object-property ex:knows");
        assert!(matches!(run(&mut session, "assert ex:a ex:knows ex:b"), Outcome::Applied(_)));
    }

    #[test]
    fn test_members_through_restriction() {
        let mut session = session();
        run(&mut session, "datatype-property ex:age");
        run(&mut session, "restriction ex:Aged ex:age cardinality 1 1");
        run(&mut session, "assert ex:ann ex:age \"30\"^^xsd:integer");
        run(&mut session, "assert ex:bob ex:age \"30\"^^xsd:integer");
        run(&mut session, "assert ex:bob ex:age \"31\"^^xsd:integer");

        assert_eq!(names(run(&mut session, "members ex:Aged")), vec!["ex:ann"]);
    }

    #[test]
    fn test_enumeration_members() {
        let mut session = session();
        run(&mut session, "enum ex:Primary ex:red ex:green ex:blue");
        run(&mut session, "same ex:red ex:rouge");

        assert_eq!(
            names(run(&mut session, "members ex:Primary")),
            vec!["ex:blue", "ex:green", "ex:red", "ex:rouge"]
        );
    }

    #[test]
    fn test_reachable_notes_non_transitive_property() {
        let mut session = session();
        run(&mut session, "object-property ex:partOf transitive");
        run(&mut session, "object-property ex:knows");
        run(&mut session, "assert ex:wheel ex:partOf ex:car");
        run(&mut session, "assert ex:car ex:partOf ex:fleet");
        run(&mut session, "assert ex:ann ex:knows ex:bob");
        session.take_notes();

        assert_eq!(
            names(run(&mut session, "reachable ex:wheel ex:partOf")),
            vec!["ex:car", "ex:fleet"]
        );
        assert!(session.take_notes().is_empty());

        run(&mut session, "reachable ex:ann ex:knows");
        assert_eq!(session.take_notes().len(), 1);
    }

    #[test]
    fn test_reserved_vocabulary_in_queries() {
        let mut session = session();
        run(&mut session, "subclass ex:Adult owl:Thing");

        let superclasses = names(run(&mut session, "superclasses ex:Adult"));
        assert_eq!(superclasses, vec![vocabulary::OWL_THING.as_str()]);
    }

    #[test]
    fn test_stats_and_clear_inferred() {
        let mut session = session();
        run(&mut session, "subclass ex:Dog ex:Animal");

        match run(&mut session, "stats") {
            Outcome::Stats(stats) => assert_eq!(stats.classes, 2),
            other => panic!("expected stats, got {:?}", other),
        }
        assert!(matches!(run(&mut session, "clear-inferred"), Outcome::Applied(_)));
    }
}
