//! Class model - classes plus the class-level taxonomies
//!
//! Closures are recomputed on every query; nothing is cached.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

use ontograph_domain::traits::ClassTaxonomy;
use ontograph_domain::vocabulary::{self, RDFS_LITERAL};
use ontograph_domain::{
    Class, ClassKind, DiagnosticSink, Entry, Fingerprint, Property, Relation, Taxonomy, Value,
};
use ontograph_gatekeeper::{Gatekeeper, ValidationResult};

use crate::closure::Hierarchy;
use crate::diagnostics::{default_sink, report};

/// Classes and the `subClassOf`, `equivalentClass`, `disjointWith`, `oneOf`,
/// `intersectionOf` and `unionOf` taxonomies
#[derive(Debug, Clone)]
pub struct ClassModel {
    classes: BTreeMap<Fingerprint, Class>,
    operands: BTreeMap<Fingerprint, Value>,
    sub_class_of: Taxonomy,
    equivalent_class: Taxonomy,
    disjoint_with: Taxonomy,
    one_of: Taxonomy,
    intersection_of: Taxonomy,
    union_of: Taxonomy,
    gatekeeper: Gatekeeper,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for ClassModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassModel {
    /// Create an empty model with the default guards, reporting to `tracing`
    pub fn new() -> Self {
        Self::with_gatekeeper(Gatekeeper::default_config(), default_sink())
    }

    /// Create an empty model with explicit guards and diagnostic sink
    pub fn with_gatekeeper(gatekeeper: Gatekeeper, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            classes: BTreeMap::new(),
            operands: BTreeMap::new(),
            sub_class_of: Taxonomy::new(),
            equivalent_class: Taxonomy::new(),
            disjoint_with: Taxonomy::new(),
            one_of: Taxonomy::new(),
            intersection_of: Taxonomy::new(),
            union_of: Taxonomy::new(),
            gatekeeper,
            sink,
        }
    }

    // Registry

    /// Register a class; returns `false` when it was already present
    pub fn add_class(&mut self, class: Class) -> bool {
        if self.classes.contains_key(&class.id()) {
            return false;
        }
        tracing::trace!(class = class.name(), "Class registered");
        self.classes.insert(class.id(), class);
        true
    }

    /// Remove a class and every entry mentioning it
    ///
    /// Removing an absent class is a no-op.
    pub fn remove_class(&mut self, id: Fingerprint) -> bool {
        let Some(class) = self.classes.remove(&id) else {
            return false;
        };
        let dropped: usize = self
            .taxonomies_mut()
            .into_iter()
            .map(|taxonomy| taxonomy.remove_mentions(id))
            .sum();
        tracing::debug!(class = class.name(), dropped, "Class removed");
        true
    }

    /// Look up a class
    pub fn class(&self, id: Fingerprint) -> Option<&Class> {
        self.classes.get(&id)
    }

    /// Mutable access to a registered class
    pub fn class_mut(&mut self, id: Fingerprint) -> Option<&mut Class> {
        self.classes.get_mut(&id)
    }

    /// Every registered class, ordered by fingerprint
    pub fn classes(&self) -> impl Iterator<Item = &Class> + '_ {
        self.classes.values()
    }

    /// Whether the class is registered
    pub fn contains_class(&self, id: Fingerprint) -> bool {
        self.classes.contains_key(&id)
    }

    /// Number of registered classes
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Individual or literal attached through `oneOf`
    pub fn operand(&self, id: Fingerprint) -> Option<&Value> {
        self.operands.get(&id)
    }

    // Taxonomies

    /// The `subClassOf` taxonomy
    pub fn sub_class_of(&self) -> &Taxonomy {
        &self.sub_class_of
    }

    /// The `equivalentClass` taxonomy
    pub fn equivalent_class(&self) -> &Taxonomy {
        &self.equivalent_class
    }

    /// The `disjointWith` taxonomy
    pub fn disjoint_with(&self) -> &Taxonomy {
        &self.disjoint_with
    }

    /// The `oneOf` taxonomy
    pub fn one_of(&self) -> &Taxonomy {
        &self.one_of
    }

    /// The `intersectionOf` taxonomy
    pub fn intersection_of(&self) -> &Taxonomy {
        &self.intersection_of
    }

    /// The `unionOf` taxonomy
    pub fn union_of(&self) -> &Taxonomy {
        &self.union_of
    }

    /// Every taxonomy with its relation
    pub fn taxonomies(&self) -> [(Relation, &Taxonomy); 6] {
        [
            (Relation::SubClassOf, &self.sub_class_of),
            (Relation::EquivalentClass, &self.equivalent_class),
            (Relation::DisjointWith, &self.disjoint_with),
            (Relation::OneOf, &self.one_of),
            (Relation::IntersectionOf, &self.intersection_of),
            (Relation::UnionOf, &self.union_of),
        ]
    }

    fn taxonomies_mut(&mut self) -> [&mut Taxonomy; 6] {
        [
            &mut self.sub_class_of,
            &mut self.equivalent_class,
            &mut self.disjoint_with,
            &mut self.one_of,
            &mut self.intersection_of,
            &mut self.union_of,
        ]
    }

    /// Purge every inferred entry, returning how many were removed
    pub fn clear_inferred(&mut self) -> usize {
        self.taxonomies_mut()
            .into_iter()
            .map(Taxonomy::clear_inferred)
            .sum()
    }

    // Guarded mutators

    /// Add `child subClassOf mother`
    ///
    /// Rejected (model unchanged, one warning emitted) for self subsumption,
    /// `mother = owl:Nothing`, `child = owl:Thing`, or a pair that is already
    /// reverse-subsumed, equivalent or disjoint.
    pub fn add_subclass_of(&mut self, child: &Class, mother: &Class) -> ValidationResult {
        let result = self.gatekeeper.check_subclass_of(self, child, mother);
        if report(self.sink.as_ref(), Relation::SubClassOf, &result) {
            self.register(child);
            self.register(mother);
            self.sub_class_of.add(Entry::asserted(
                child.id(),
                vocabulary::RDFS_SUBCLASSOF.fingerprint(),
                mother.id(),
            ));
            tracing::debug!(child = child.name(), mother = mother.name(), "subClassOf added");
        }
        result
    }

    /// Add `a equivalentClass b`, stored in both directions
    pub fn add_equivalent_class(&mut self, a: &Class, b: &Class) -> ValidationResult {
        let result = self.gatekeeper.check_equivalent_class(self, a, b);
        if report(self.sink.as_ref(), Relation::EquivalentClass, &result) {
            self.register(a);
            self.register(b);
            add_symmetric(
                &mut self.equivalent_class,
                Entry::asserted(a.id(), vocabulary::OWL_EQUIVALENTCLASS.fingerprint(), b.id()),
            );
            tracing::debug!(a = a.name(), b = b.name(), "equivalentClass added");
        }
        result
    }

    /// Add `a disjointWith b`, stored in both directions
    pub fn add_disjoint_with(&mut self, a: &Class, b: &Class) -> ValidationResult {
        let result = self.gatekeeper.check_disjoint_with(self, a, b);
        if report(self.sink.as_ref(), Relation::DisjointWith, &result) {
            self.register(a);
            self.register(b);
            add_symmetric(
                &mut self.disjoint_with,
                Entry::asserted(a.id(), vocabulary::OWL_DISJOINTWITH.fingerprint(), b.id()),
            );
            tracing::debug!(a = a.name(), b = b.name(), "disjointWith added");
        }
        result
    }

    /// Add a member to an enumeration (individual) or data range (literal)
    pub fn add_one_of(&mut self, class: &Class, member: impl Into<Value>) -> ValidationResult {
        let member = member.into();
        let result = self.gatekeeper.check_one_of(class, &member);
        if report(self.sink.as_ref(), Relation::OneOf, &result) {
            self.register(class);
            self.one_of.add(Entry::asserted(
                class.id(),
                vocabulary::OWL_ONEOF.fingerprint(),
                member.id(),
            ));
            tracing::debug!(class = class.name(), member = %member.name(), "oneOf added");
            self.operands.insert(member.id(), member);
        }
        result
    }

    /// Add an operand to an intersection
    pub fn add_intersection_of(&mut self, composite: &Class, operand: &Class) -> ValidationResult {
        self.add_composite_operand(Relation::IntersectionOf, composite, operand)
    }

    /// Add an operand to a union
    pub fn add_union_of(&mut self, composite: &Class, operand: &Class) -> ValidationResult {
        self.add_composite_operand(Relation::UnionOf, composite, operand)
    }

    fn add_composite_operand(
        &mut self,
        relation: Relation,
        composite: &Class,
        operand: &Class,
    ) -> ValidationResult {
        let result = self
            .gatekeeper
            .check_composite_operand(relation, composite, operand);
        if report(self.sink.as_ref(), relation, &result) {
            self.register(composite);
            self.register(operand);
            let (taxonomy, predicate) = match relation {
                Relation::IntersectionOf => (
                    &mut self.intersection_of,
                    vocabulary::OWL_INTERSECTIONOF.fingerprint(),
                ),
                _ => (&mut self.union_of, vocabulary::OWL_UNIONOF.fingerprint()),
            };
            taxonomy.add(Entry::asserted(composite.id(), predicate, operand.id()));
            tracing::debug!(%relation, composite = composite.name(), operand = operand.name(), "Operand added");
        }
        result
    }

    fn register(&mut self, class: &Class) {
        if !self.classes.contains_key(&class.id()) {
            self.classes.insert(class.id(), class.clone());
        }
    }

    // Removers

    /// Remove `child subClassOf mother`
    pub fn remove_subclass_of(&mut self, child: Fingerprint, mother: Fingerprint) -> bool {
        self.sub_class_of.remove(&Entry::asserted(
            child,
            vocabulary::RDFS_SUBCLASSOF.fingerprint(),
            mother,
        ))
    }

    /// Remove `a equivalentClass b` in both directions
    pub fn remove_equivalent_class(&mut self, a: Fingerprint, b: Fingerprint) -> bool {
        remove_symmetric(
            &mut self.equivalent_class,
            Entry::asserted(a, vocabulary::OWL_EQUIVALENTCLASS.fingerprint(), b),
        )
    }

    /// Remove `a disjointWith b` in both directions
    pub fn remove_disjoint_with(&mut self, a: Fingerprint, b: Fingerprint) -> bool {
        remove_symmetric(
            &mut self.disjoint_with,
            Entry::asserted(a, vocabulary::OWL_DISJOINTWITH.fingerprint(), b),
        )
    }

    /// Remove a member from an enumeration or data range
    pub fn remove_one_of(&mut self, class: Fingerprint, member: Fingerprint) -> bool {
        self.one_of
            .remove(&Entry::asserted(class, vocabulary::OWL_ONEOF.fingerprint(), member))
    }

    /// Remove an operand from an intersection
    pub fn remove_intersection_of(&mut self, composite: Fingerprint, operand: Fingerprint) -> bool {
        self.intersection_of.remove(&Entry::asserted(
            composite,
            vocabulary::OWL_INTERSECTIONOF.fingerprint(),
            operand,
        ))
    }

    /// Remove an operand from a union
    pub fn remove_union_of(&mut self, composite: Fingerprint, operand: Fingerprint) -> bool {
        self.union_of
            .remove(&Entry::asserted(composite, vocabulary::OWL_UNIONOF.fingerprint(), operand))
    }

    // Closures

    fn hierarchy(&self) -> Hierarchy<'_> {
        Hierarchy::new(&self.sub_class_of, &self.equivalent_class)
    }

    /// Every class subsumed by `class`, including the subclasses of its
    /// equivalents and the equivalents of its subclasses
    pub fn enlist_subclasses_of(&self, class: Fingerprint) -> BTreeSet<Fingerprint> {
        self.hierarchy().descendants(class)
    }

    /// Every class subsuming `class` (mirror of [`Self::enlist_subclasses_of`])
    pub fn enlist_superclasses_of(&self, class: Fingerprint) -> BTreeSet<Fingerprint> {
        self.hierarchy().ancestors(class)
    }

    /// Transitive equivalence closure of `class`, excluding `class`
    pub fn enlist_equivalent_classes_of(&self, class: Fingerprint) -> BTreeSet<Fingerprint> {
        self.hierarchy().equivalents(class)
    }

    /// Every class disjoint with `class`
    ///
    /// Disjointness is inherited from equivalents and superclasses, extends to
    /// the equivalents of each directly disjoint class, and flows down to the
    /// subclasses of every class found disjoint.
    pub fn enlist_disjoint_classes_with(&self, class: Fingerprint) -> BTreeSet<Fingerprint> {
        let mut result = self.disjoint_internal(class, &mut HashSet::new());
        result.remove(&class);
        result
    }

    fn disjoint_internal(
        &self,
        class: Fingerprint,
        visited: &mut HashSet<Fingerprint>,
    ) -> BTreeSet<Fingerprint> {
        if !visited.insert(class) {
            return BTreeSet::new();
        }

        let mut result = BTreeSet::new();
        for related in self
            .enlist_equivalent_classes_of(class)
            .into_iter()
            .chain(self.enlist_superclasses_of(class))
        {
            result.extend(self.disjoint_internal(related, visited));
        }

        // Either stored direction counts; the mirror entry may have been purged
        let direct: Vec<Fingerprint> = self
            .disjoint_with
            .by_subject(class)
            .objects()
            .chain(self.disjoint_with.by_object(class).subjects())
            .collect();
        for disjoint in direct {
            result.insert(disjoint);
            result.extend(self.enlist_equivalent_classes_of(disjoint));
        }

        let found: Vec<Fingerprint> = result.iter().copied().collect();
        for disjoint in found {
            result.extend(self.enlist_subclasses_of(disjoint));
        }
        result
    }

    /// Domain class of the property with its subclasses and equivalents
    pub fn enlist_domain_classes_of(&self, property: &Property) -> BTreeSet<Fingerprint> {
        property
            .domain()
            .map(|domain| self.compatible_classes(domain))
            .unwrap_or_default()
    }

    /// Range class of the property with its subclasses and equivalents
    pub fn enlist_range_classes_of(&self, property: &Property) -> BTreeSet<Fingerprint> {
        property
            .range()
            .map(|range| self.compatible_classes(range))
            .unwrap_or_default()
    }

    /// `{class} ∪ subclasses ∪ equivalents`
    pub fn compatible_classes(&self, class: Fingerprint) -> BTreeSet<Fingerprint> {
        let mut result = self.enlist_subclasses_of(class);
        result.extend(self.enlist_equivalent_classes_of(class));
        result.insert(class);
        result
    }

    /// Whether `child` is subsumed by `mother`
    pub fn is_subclass_of(&self, child: Fingerprint, mother: Fingerprint) -> bool {
        self.enlist_subclasses_of(mother).contains(&child)
    }

    /// Whether `mother` subsumes `child`
    pub fn is_superclass_of(&self, mother: Fingerprint, child: Fingerprint) -> bool {
        self.enlist_superclasses_of(child).contains(&mother)
    }

    /// Whether the classes are equivalent
    pub fn is_equivalent_class_of(&self, a: Fingerprint, b: Fingerprint) -> bool {
        self.enlist_equivalent_classes_of(a).contains(&b)
    }

    /// Whether the classes are disjoint
    pub fn is_disjoint_class_with(&self, a: Fingerprint, b: Fingerprint) -> bool {
        self.enlist_disjoint_classes_with(a).contains(&b)
    }

    /// Whether the class denotes literals
    ///
    /// True for data ranges, `rdfs:Literal`, the reserved datatypes and
    /// anything subsumed by one of those.
    pub fn is_literal_compatible_class(&self, class: Fingerprint) -> bool {
        if matches!(self.class(class).map(Class::kind), Some(ClassKind::DataRange)) {
            return true;
        }
        if class == RDFS_LITERAL.fingerprint() || vocabulary::is_literal_class(class) {
            return true;
        }
        self.enlist_superclasses_of(class)
            .into_iter()
            .any(vocabulary::is_literal_class)
    }

    // Set algebra

    /// New model with the classes and entries of both
    pub fn union(&self, other: &ClassModel) -> ClassModel {
        let mut result = self.clone();
        for (id, class) in &other.classes {
            result.classes.entry(*id).or_insert_with(|| class.clone());
        }
        for (id, operand) in &other.operands {
            result.operands.entry(*id).or_insert_with(|| operand.clone());
        }
        result.sub_class_of = self.sub_class_of.union(&other.sub_class_of);
        result.equivalent_class = self.equivalent_class.union(&other.equivalent_class);
        result.disjoint_with = self.disjoint_with.union(&other.disjoint_with);
        result.one_of = self.one_of.union(&other.one_of);
        result.intersection_of = self.intersection_of.union(&other.intersection_of);
        result.union_of = self.union_of.union(&other.union_of);
        result
    }

    /// New model with the classes and entries present in both
    pub fn intersect(&self, other: &ClassModel) -> ClassModel {
        let mut result = self.emptied();
        result.classes = self
            .classes
            .iter()
            .filter(|(id, _)| other.classes.contains_key(id))
            .map(|(id, class)| (*id, class.clone()))
            .collect();
        result.operands = self
            .operands
            .iter()
            .filter(|(id, _)| other.operands.contains_key(id))
            .map(|(id, operand)| (*id, operand.clone()))
            .collect();
        result.sub_class_of = self.sub_class_of.intersect(&other.sub_class_of);
        result.equivalent_class = self.equivalent_class.intersect(&other.equivalent_class);
        result.disjoint_with = self.disjoint_with.intersect(&other.disjoint_with);
        result.one_of = self.one_of.intersect(&other.one_of);
        result.intersection_of = self.intersection_of.intersect(&other.intersection_of);
        result.union_of = self.union_of.intersect(&other.union_of);
        result
    }

    /// New model with the classes and entries of `self` absent from `other`
    pub fn difference(&self, other: &ClassModel) -> ClassModel {
        let mut result = self.emptied();
        result.classes = self
            .classes
            .iter()
            .filter(|(id, _)| !other.classes.contains_key(id))
            .map(|(id, class)| (*id, class.clone()))
            .collect();
        result.operands = self.operands.clone();
        result.sub_class_of = self.sub_class_of.difference(&other.sub_class_of);
        result.equivalent_class = self.equivalent_class.difference(&other.equivalent_class);
        result.disjoint_with = self.disjoint_with.difference(&other.disjoint_with);
        result.one_of = self.one_of.difference(&other.one_of);
        result.intersection_of = self.intersection_of.difference(&other.intersection_of);
        result.union_of = self.union_of.difference(&other.union_of);
        result
    }

    fn emptied(&self) -> ClassModel {
        ClassModel::with_gatekeeper(self.gatekeeper.clone(), Arc::clone(&self.sink))
    }
}

impl ClassTaxonomy for ClassModel {
    fn is_subclass_of(&self, child: Fingerprint, mother: Fingerprint) -> bool {
        ClassModel::is_subclass_of(self, child, mother)
    }

    fn is_equivalent_class_of(&self, a: Fingerprint, b: Fingerprint) -> bool {
        ClassModel::is_equivalent_class_of(self, a, b)
    }

    fn is_disjoint_class_with(&self, a: Fingerprint, b: Fingerprint) -> bool {
        ClassModel::is_disjoint_class_with(self, a, b)
    }

    fn is_literal_compatible_class(&self, class: Fingerprint) -> bool {
        ClassModel::is_literal_compatible_class(self, class)
    }
}

/// Insert an asserted entry and its inferred mirror
pub(crate) fn add_symmetric(taxonomy: &mut Taxonomy, entry: Entry) {
    taxonomy.add(entry);
    taxonomy.add(entry.mirrored());
}

/// Remove an entry and its mirror; true when either was present
pub(crate) fn remove_symmetric(taxonomy: &mut Taxonomy, entry: Entry) -> bool {
    let forward = taxonomy.remove(&entry);
    let backward = taxonomy.remove(&entry.mirrored());
    forward || backward
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CollectingSink;
    use ontograph_domain::vocabulary::{OWL_NOTHING, OWL_THING, XSD_INTEGER};
    use ontograph_domain::{Individual, Literal, Severity};

    fn class(name: &str) -> Class {
        Class::plain(name).unwrap()
    }

    fn collecting_model() -> (ClassModel, Arc<CollectingSink>) {
        let sink = CollectingSink::shared();
        let model = ClassModel::with_gatekeeper(Gatekeeper::default_config(), sink.clone());
        (model, sink)
    }

    #[test]
    fn test_subclass_chain() {
        let mut model = ClassModel::new();
        let (animal, dog, puppy) = (class("ex:Animal"), class("ex:Dog"), class("ex:Puppy"));

        assert!(model.add_subclass_of(&dog, &animal).is_accepted());
        assert!(model.add_subclass_of(&puppy, &dog).is_accepted());

        assert!(model.enlist_superclasses_of(puppy.id()).contains(&animal.id()));
        assert!(model.enlist_subclasses_of(animal.id()).contains(&puppy.id()));
        assert!(model.is_subclass_of(puppy.id(), animal.id()));
        assert!(model.is_superclass_of(animal.id(), puppy.id()));
        assert!(!model.is_subclass_of(animal.id(), puppy.id()));
        assert_eq!(model.class_count(), 3);
    }

    #[test]
    fn test_duplicate_subclass_is_single_entry() {
        let mut model = ClassModel::new();
        let (a, b) = (class("ex:A"), class("ex:B"));

        model.add_subclass_of(&a, &b);
        model.add_subclass_of(&a, &b);
        assert_eq!(model.sub_class_of().len(), 1);
    }

    #[test]
    fn test_equivalence_is_symmetric() {
        let mut model = ClassModel::new();
        let (a, b) = (class("ex:A"), class("ex:B"));
        model.add_equivalent_class(&a, &b);

        assert_eq!(model.equivalent_class().len(), 2);
        assert_eq!(model.equivalent_class().inferred_count(), 1);
        assert!(model.is_equivalent_class_of(a.id(), b.id()));
        assert!(model.is_equivalent_class_of(b.id(), a.id()));
        assert_eq!(model.enlist_equivalent_classes_of(a.id()), BTreeSet::from([b.id()]));
    }

    #[test]
    fn test_equivalent_classes_share_subclasses() {
        let mut model = ClassModel::new();
        let (a, b, c) = (class("ex:A"), class("ex:B"), class("ex:C"));
        model.add_equivalent_class(&a, &b);
        model.add_subclass_of(&c, &a);

        assert_eq!(model.enlist_subclasses_of(a.id()), model.enlist_subclasses_of(b.id()));
        assert!(model.is_subclass_of(c.id(), b.id()));
    }

    #[test]
    fn test_disjoint_rejected_after_subclass() {
        let (mut model, sink) = collecting_model();
        let (a, b) = (class("ex:A"), class("ex:B"));
        model.add_subclass_of(&a, &b);

        let result = model.add_disjoint_with(&a, &b);
        assert!(result.is_rejected());
        assert!(model.disjoint_with().is_empty());
        assert!(!model.is_disjoint_class_with(a.id(), b.id()));

        let warnings = sink.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].relation, Some(Relation::DisjointWith));
        assert_eq!(warnings[0].severity, Severity::Warning);
    }

    #[test]
    fn test_reserved_class_guards() {
        let (mut model, sink) = collecting_model();
        let dog = class("ex:Dog");
        let thing = Class::reserved(OWL_THING);
        let nothing = Class::reserved(OWL_NOTHING);

        assert!(model.add_subclass_of(&dog, &nothing).is_rejected());
        assert!(model.add_subclass_of(&thing, &dog).is_rejected());
        assert!(model.add_equivalent_class(&dog, &thing).is_rejected());
        assert!(model.sub_class_of().is_empty());
        assert_eq!(sink.len(), 3);
        // Nothing was registered by the rejected calls
        assert_eq!(model.class_count(), 0);
    }

    #[test]
    fn test_subclass_cycle_rejected() {
        let mut model = ClassModel::new();
        let (a, b, c) = (class("ex:A"), class("ex:B"), class("ex:C"));
        model.add_subclass_of(&a, &b);
        model.add_subclass_of(&b, &c);

        assert!(model.add_subclass_of(&c, &a).is_rejected());
        assert_eq!(model.sub_class_of().len(), 2);
    }

    #[test]
    fn test_disjointness_inference() {
        let mut model = ClassModel::new();
        let (animal, plant) = (class("ex:Animal"), class("ex:Plant"));
        let (dog, tree, oak, flora) = (
            class("ex:Dog"),
            class("ex:Tree"),
            class("ex:Oak"),
            class("ex:Flora"),
        );
        model.add_disjoint_with(&animal, &plant);
        model.add_subclass_of(&dog, &animal);
        model.add_subclass_of(&tree, &plant);
        model.add_subclass_of(&oak, &tree);
        model.add_equivalent_class(&flora, &plant);

        let disjoint = model.enlist_disjoint_classes_with(dog.id());
        // Inherited from the superclass, pushed down to subclasses
        assert!(disjoint.contains(&plant.id()));
        assert!(disjoint.contains(&oak.id()));
        // Extended to equivalents of the disjoint class
        assert!(disjoint.contains(&flora.id()));
        assert!(!disjoint.contains(&animal.id()));

        assert!(model.is_disjoint_class_with(oak.id(), dog.id()));
        // Guards see inferred disjointness
        assert!(model.add_subclass_of(&oak, &dog).is_rejected());
    }

    #[test]
    fn test_enumeration_members() {
        let mut model = ClassModel::new();
        let colours = Class::enumeration("ex:Colours").unwrap();
        let red = Individual::new("ex:red").unwrap();

        assert!(model.add_one_of(&colours, &red).is_accepted());
        assert!(model.add_one_of(&colours, Literal::plain("red", None)).is_rejected());
        assert_eq!(model.one_of().by_subject(colours.id()).count(), 1);
        assert!(model.operand(red.id()).is_some());
        assert!(model.remove_one_of(colours.id(), red.id()));
    }

    #[test]
    fn test_composite_operands() {
        let mut model = ClassModel::new();
        let union = Class::union("ex:Pet").unwrap();
        let (dog, cat) = (class("ex:Dog"), class("ex:Cat"));

        model.add_union_of(&union, &dog);
        model.add_union_of(&union, &cat);
        assert!(model.add_union_of(&union, &union).is_rejected());
        assert!(model.add_intersection_of(&union, &dog).is_rejected());
        assert_eq!(model.union_of().by_subject(union.id()).count(), 2);
        assert!(model.intersection_of().is_empty());
    }

    #[test]
    fn test_remove_class_is_idempotent() {
        let mut model = ClassModel::new();
        let (a, b, c) = (class("ex:A"), class("ex:B"), class("ex:C"));
        model.add_subclass_of(&a, &b);
        model.add_equivalent_class(&b, &c);

        assert!(model.remove_class(b.id()));
        assert!(!model.remove_class(b.id()));
        assert!(model.sub_class_of().is_empty());
        assert!(model.equivalent_class().is_empty());
        assert!(model.contains_class(a.id()));
    }

    #[test]
    fn test_remove_symmetric_relations() {
        let mut model = ClassModel::new();
        let (a, b) = (class("ex:A"), class("ex:B"));
        model.add_disjoint_with(&a, &b);

        assert!(model.remove_disjoint_with(b.id(), a.id()));
        assert!(model.disjoint_with().is_empty());
        assert!(!model.remove_disjoint_with(a.id(), b.id()));
    }

    #[test]
    fn test_domain_and_range_classes() {
        let mut model = ClassModel::new();
        let (person, student, human) = (class("ex:Person"), class("ex:Student"), class("ex:Human"));
        model.add_subclass_of(&student, &person);
        model.add_equivalent_class(&human, &person);

        let mut enrolled = Property::object("ex:enrolledIn").unwrap();
        enrolled.set_domain(Some(&person)).unwrap();

        assert_eq!(
            model.enlist_domain_classes_of(&enrolled),
            BTreeSet::from([person.id(), student.id(), human.id()])
        );
        assert!(model.enlist_range_classes_of(&enrolled).is_empty());
    }

    #[test]
    fn test_literal_compatibility() {
        let mut model = ClassModel::new();
        let celsius = class("ex:Celsius");
        let sizes = Class::data_range("ex:Sizes").unwrap();
        model.add_subclass_of(&celsius, &Class::reserved(XSD_INTEGER));
        model.add_class(sizes.clone());

        assert!(model.is_literal_compatible_class(celsius.id()));
        assert!(model.is_literal_compatible_class(sizes.id()));
        assert!(model.is_literal_compatible_class(RDFS_LITERAL.fingerprint()));
        assert!(!model.is_literal_compatible_class(class("ex:Dog").id()));
    }

    #[test]
    fn test_clear_inferred_keeps_closure() {
        let mut model = ClassModel::new();
        let (a, b) = (class("ex:A"), class("ex:B"));
        model.add_equivalent_class(&a, &b);

        assert_eq!(model.clear_inferred(), 1);
        assert_eq!(model.equivalent_class().len(), 1);
        assert!(model.is_equivalent_class_of(b.id(), a.id()));
    }

    #[test]
    fn test_clear_inferred_keeps_disjointness_symmetric() {
        let mut model = ClassModel::new();
        let (a, b) = (class("ex:A"), class("ex:B"));
        model.add_disjoint_with(&a, &b);

        assert_eq!(model.clear_inferred(), 1);
        assert!(model.is_disjoint_class_with(a.id(), b.id()));
        assert!(model.is_disjoint_class_with(b.id(), a.id()));
        assert!(model.add_subclass_of(&b, &a).is_rejected());
        assert!(model.sub_class_of().is_empty());
    }

    #[test]
    fn test_model_set_algebra() {
        let mut left = ClassModel::new();
        let mut right = ClassModel::new();
        let (a, b, c) = (class("ex:A"), class("ex:B"), class("ex:C"));
        left.add_subclass_of(&a, &b);
        right.add_subclass_of(&a, &b);
        right.add_subclass_of(&b, &c);

        let union = left.union(&right);
        assert_eq!(union.sub_class_of().len(), 2);
        assert!(union.is_subclass_of(a.id(), c.id()));

        let intersection = left.intersect(&right);
        assert_eq!(intersection.sub_class_of().len(), 1);
        assert_eq!(intersection.class_count(), 2);

        let difference = right.difference(&left);
        assert_eq!(difference.sub_class_of().len(), 1);
        assert!(difference.contains_class(c.id()));
        assert!(!difference.contains_class(a.id()));
    }
}
