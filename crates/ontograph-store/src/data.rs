//! Data - individuals, literals and the A-BOX taxonomies

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

use ontograph_domain::traits::{ClassTaxonomy, IndividualTaxonomy};
use ontograph_domain::vocabulary;
use ontograph_domain::{
    Class, Diagnostic, DiagnosticSink, Entry, Fingerprint, Individual, Literal, Property,
    Relation, Taxonomy, Value,
};
use ontograph_gatekeeper::{Gatekeeper, ValidationResult};

use crate::class_model::{add_symmetric, remove_symmetric};
use crate::closure::{equivalence_closure, transitive_objects};
use crate::diagnostics::{default_sink, report};

/// Individuals, literals and the `classType`, `sameAs`, `differentFrom` and
/// assertion taxonomies
#[derive(Debug, Clone)]
pub struct Data {
    individuals: BTreeMap<Fingerprint, Individual>,
    literals: BTreeMap<Fingerprint, Literal>,
    class_type: Taxonomy,
    same_as: Taxonomy,
    different_from: Taxonomy,
    assertions: Taxonomy,
    gatekeeper: Gatekeeper,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for Data {
    fn default() -> Self {
        Self::new()
    }
}

impl Data {
    /// Create empty data with the default guards, reporting to `tracing`
    pub fn new() -> Self {
        Self::with_gatekeeper(Gatekeeper::default_config(), default_sink())
    }

    /// Create empty data with explicit guards and diagnostic sink
    pub fn with_gatekeeper(gatekeeper: Gatekeeper, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            individuals: BTreeMap::new(),
            literals: BTreeMap::new(),
            class_type: Taxonomy::new(),
            same_as: Taxonomy::new(),
            different_from: Taxonomy::new(),
            assertions: Taxonomy::new(),
            gatekeeper,
            sink,
        }
    }

    // Registry

    /// Register an individual; returns `false` when it was already present
    pub fn add_individual(&mut self, individual: Individual) -> bool {
        if self.individuals.contains_key(&individual.id()) {
            return false;
        }
        self.individuals.insert(individual.id(), individual);
        true
    }

    /// Remove an individual and every entry mentioning it
    pub fn remove_individual(&mut self, id: Fingerprint) -> bool {
        let Some(individual) = self.individuals.remove(&id) else {
            return false;
        };
        let dropped = self.class_type.remove_mentions(id)
            + self.same_as.remove_mentions(id)
            + self.different_from.remove_mentions(id)
            + self.assertions.remove_mentions(id);
        tracing::debug!(individual = individual.name(), dropped, "Individual removed");
        true
    }

    /// Register a literal; returns `false` when it was already present
    pub fn add_literal(&mut self, literal: Literal) -> bool {
        if self.literals.contains_key(&literal.id()) {
            return false;
        }
        self.literals.insert(literal.id(), literal);
        true
    }

    /// Remove a literal and every assertion pointing at it
    pub fn remove_literal(&mut self, id: Fingerprint) -> bool {
        if self.literals.remove(&id).is_none() {
            return false;
        }
        self.assertions.remove_mentions(id);
        true
    }

    /// Look up an individual
    pub fn individual(&self, id: Fingerprint) -> Option<&Individual> {
        self.individuals.get(&id)
    }

    /// Look up a literal
    pub fn literal(&self, id: Fingerprint) -> Option<&Literal> {
        self.literals.get(&id)
    }

    /// Look up an individual or literal
    pub fn value(&self, id: Fingerprint) -> Option<Value> {
        self.individual(id)
            .map(Value::from)
            .or_else(|| self.literal(id).map(Value::from))
    }

    /// Every registered individual, ordered by fingerprint
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> + '_ {
        self.individuals.values()
    }

    /// Every registered literal, ordered by fingerprint
    pub fn literals(&self) -> impl Iterator<Item = &Literal> + '_ {
        self.literals.values()
    }

    /// Whether the individual is registered
    pub fn contains_individual(&self, id: Fingerprint) -> bool {
        self.individuals.contains_key(&id)
    }

    /// Number of registered individuals
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    /// Number of registered literals
    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }

    // Taxonomies

    /// The `classType` taxonomy
    pub fn class_type(&self) -> &Taxonomy {
        &self.class_type
    }

    /// The `sameAs` taxonomy
    pub fn same_as(&self) -> &Taxonomy {
        &self.same_as
    }

    /// The `differentFrom` taxonomy
    pub fn different_from(&self) -> &Taxonomy {
        &self.different_from
    }

    /// The property assertion taxonomy
    pub fn assertions(&self) -> &Taxonomy {
        &self.assertions
    }

    /// Every taxonomy with its relation
    pub fn taxonomies(&self) -> [(Relation, &Taxonomy); 4] {
        [
            (Relation::ClassType, &self.class_type),
            (Relation::SameAs, &self.same_as),
            (Relation::DifferentFrom, &self.different_from),
            (Relation::Assertion, &self.assertions),
        ]
    }

    /// Purge every inferred entry, returning how many were removed
    pub fn clear_inferred(&mut self) -> usize {
        self.class_type.clear_inferred()
            + self.same_as.clear_inferred()
            + self.different_from.clear_inferred()
            + self.assertions.clear_inferred()
    }

    // Guarded mutators

    /// Add `individual classType class`
    ///
    /// The class taxonomy is consulted to refuse literal-compatible classes.
    pub fn add_class_type<T: ClassTaxonomy + ?Sized>(
        &mut self,
        classes: &T,
        individual: &Individual,
        class: &Class,
    ) -> ValidationResult {
        let result = self.gatekeeper.check_class_type(classes, individual, class);
        if report(self.sink.as_ref(), Relation::ClassType, &result) {
            self.register_individual(individual);
            self.class_type.add(Entry::asserted(
                individual.id(),
                vocabulary::RDF_TYPE.fingerprint(),
                class.id(),
            ));
            tracing::debug!(individual = individual.name(), class = class.name(), "classType added");
        }
        result
    }

    /// Add `a sameAs b`, stored in both directions
    pub fn add_same_as(&mut self, a: &Individual, b: &Individual) -> ValidationResult {
        let result = self.gatekeeper.check_same_as(self, a, b);
        if report(self.sink.as_ref(), Relation::SameAs, &result) {
            self.register_individual(a);
            self.register_individual(b);
            add_symmetric(
                &mut self.same_as,
                Entry::asserted(a.id(), vocabulary::OWL_SAMEAS.fingerprint(), b.id()),
            );
            tracing::debug!(a = a.name(), b = b.name(), "sameAs added");
        }
        result
    }

    /// Add `a differentFrom b`, stored in both directions
    pub fn add_different_from(&mut self, a: &Individual, b: &Individual) -> ValidationResult {
        let result = self.gatekeeper.check_different_from(self, a, b);
        if report(self.sink.as_ref(), Relation::DifferentFrom, &result) {
            self.register_individual(a);
            self.register_individual(b);
            add_symmetric(
                &mut self.different_from,
                Entry::asserted(a.id(), vocabulary::OWL_DIFFERENTFROM.fingerprint(), b.id()),
            );
            tracing::debug!(a = a.name(), b = b.name(), "differentFrom added");
        }
        result
    }

    /// Add `subject property value`
    pub fn add_assertion(
        &mut self,
        subject: &Individual,
        property: &Property,
        value: impl Into<Value>,
    ) -> ValidationResult {
        let value = value.into();
        let result = self.gatekeeper.check_assertion(subject, property, &value);
        if report(self.sink.as_ref(), Relation::Assertion, &result) {
            self.register_individual(subject);
            self.assertions
                .add(Entry::asserted(subject.id(), property.id(), value.id()));
            tracing::debug!(
                subject = subject.name(),
                property = property.name(),
                value = %value.name(),
                "Assertion added"
            );
            match value {
                Value::Individual(individual) => self.register_individual(&individual),
                Value::Literal(literal) => {
                    self.add_literal(literal);
                }
            }
        }
        result
    }

    fn register_individual(&mut self, individual: &Individual) {
        if !self.individuals.contains_key(&individual.id()) {
            self.individuals.insert(individual.id(), individual.clone());
        }
    }

    // Removers

    /// Remove `individual classType class`
    pub fn remove_class_type(&mut self, individual: Fingerprint, class: Fingerprint) -> bool {
        self.class_type
            .remove(&Entry::asserted(individual, vocabulary::RDF_TYPE.fingerprint(), class))
    }

    /// Remove `a sameAs b` in both directions
    pub fn remove_same_as(&mut self, a: Fingerprint, b: Fingerprint) -> bool {
        remove_symmetric(
            &mut self.same_as,
            Entry::asserted(a, vocabulary::OWL_SAMEAS.fingerprint(), b),
        )
    }

    /// Remove `a differentFrom b` in both directions
    pub fn remove_different_from(&mut self, a: Fingerprint, b: Fingerprint) -> bool {
        remove_symmetric(
            &mut self.different_from,
            Entry::asserted(a, vocabulary::OWL_DIFFERENTFROM.fingerprint(), b),
        )
    }

    /// Remove `subject property value`
    pub fn remove_assertion(&mut self, subject: Fingerprint, property: Fingerprint, value: Fingerprint) -> bool {
        self.assertions.remove(&Entry::asserted(subject, property, value))
    }

    // Closures

    /// Transitive sameAs closure of `individual`, excluding it
    pub fn enlist_same_individuals_as(&self, individual: Fingerprint) -> BTreeSet<Fingerprint> {
        equivalence_closure(&self.same_as, individual)
    }

    /// Every individual different from `individual`
    ///
    /// `a differentFrom b` and `b sameAs c` give `a differentFrom c`, and what
    /// is different from a synonym of `a` is different from `a`.
    pub fn enlist_different_individuals_from(&self, individual: Fingerprint) -> BTreeSet<Fingerprint> {
        let mut result = self.different_internal(individual, &mut HashSet::new());
        result.remove(&individual);
        result
    }

    fn different_internal(
        &self,
        individual: Fingerprint,
        visited: &mut HashSet<Fingerprint>,
    ) -> BTreeSet<Fingerprint> {
        if !visited.insert(individual) {
            return BTreeSet::new();
        }

        let mut result = BTreeSet::new();
        let direct = self
            .different_from
            .by_subject(individual)
            .objects()
            .chain(self.different_from.by_object(individual).subjects());
        for different in direct {
            result.insert(different);
            result.extend(self.enlist_same_individuals_as(different));
        }

        for same in self.enlist_same_individuals_as(individual) {
            result.extend(self.different_internal(same, visited));
        }
        result
    }

    /// Objects reachable from `individual` through a transitive property
    ///
    /// A non-transitive property yields the empty set and an informational
    /// diagnostic.
    pub fn enlist_transitive_assertions_of(
        &self,
        individual: Fingerprint,
        property: &Property,
    ) -> BTreeSet<Fingerprint> {
        if !property.is_transitive() {
            self.sink.emit(&Diagnostic::info(
                Some(Relation::Assertion),
                format!(
                    "property '{}' is not transitive; no transitive assertions enlisted",
                    property.name()
                ),
            ));
            return BTreeSet::new();
        }
        transitive_objects(&self.assertions, individual, property.id())
    }

    /// Direct classType objects of `individual`
    pub fn class_types_of(&self, individual: Fingerprint) -> BTreeSet<Fingerprint> {
        self.class_type.by_subject(individual).objects().collect()
    }

    /// Whether the individuals are the same
    pub fn is_same_individual_as(&self, a: Fingerprint, b: Fingerprint) -> bool {
        self.enlist_same_individuals_as(a).contains(&b)
    }

    /// Whether the individuals are different
    pub fn is_different_individual_from(&self, a: Fingerprint, b: Fingerprint) -> bool {
        self.enlist_different_individuals_from(a).contains(&b)
    }

    // Set algebra

    /// New data with the resources and entries of both
    pub fn union(&self, other: &Data) -> Data {
        let mut result = self.clone();
        for (id, individual) in &other.individuals {
            result.individuals.entry(*id).or_insert_with(|| individual.clone());
        }
        for (id, literal) in &other.literals {
            result.literals.entry(*id).or_insert_with(|| literal.clone());
        }
        result.class_type = self.class_type.union(&other.class_type);
        result.same_as = self.same_as.union(&other.same_as);
        result.different_from = self.different_from.union(&other.different_from);
        result.assertions = self.assertions.union(&other.assertions);
        result
    }

    /// New data with the resources and entries present in both
    pub fn intersect(&self, other: &Data) -> Data {
        let mut result = self.emptied();
        result.individuals = self
            .individuals
            .iter()
            .filter(|(id, _)| other.individuals.contains_key(id))
            .map(|(id, individual)| (*id, individual.clone()))
            .collect();
        result.literals = self
            .literals
            .iter()
            .filter(|(id, _)| other.literals.contains_key(id))
            .map(|(id, literal)| (*id, literal.clone()))
            .collect();
        result.class_type = self.class_type.intersect(&other.class_type);
        result.same_as = self.same_as.intersect(&other.same_as);
        result.different_from = self.different_from.intersect(&other.different_from);
        result.assertions = self.assertions.intersect(&other.assertions);
        result
    }

    /// New data with the resources and entries of `self` absent from `other`
    pub fn difference(&self, other: &Data) -> Data {
        let mut result = self.emptied();
        result.individuals = self
            .individuals
            .iter()
            .filter(|(id, _)| !other.individuals.contains_key(id))
            .map(|(id, individual)| (*id, individual.clone()))
            .collect();
        result.literals = self
            .literals
            .iter()
            .filter(|(id, _)| !other.literals.contains_key(id))
            .map(|(id, literal)| (*id, literal.clone()))
            .collect();
        result.class_type = self.class_type.difference(&other.class_type);
        result.same_as = self.same_as.difference(&other.same_as);
        result.different_from = self.different_from.difference(&other.different_from);
        result.assertions = self.assertions.difference(&other.assertions);
        result
    }

    fn emptied(&self) -> Data {
        Data::with_gatekeeper(self.gatekeeper.clone(), Arc::clone(&self.sink))
    }
}

impl IndividualTaxonomy for Data {
    fn is_same_individual_as(&self, a: Fingerprint, b: Fingerprint) -> bool {
        Data::is_same_individual_as(self, a, b)
    }

    fn is_different_individual_from(&self, a: Fingerprint, b: Fingerprint) -> bool {
        Data::is_different_individual_from(self, a, b)
    }
}
