//! Property model - properties plus the property-level taxonomies

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use ontograph_domain::traits::PropertyTaxonomy;
use ontograph_domain::vocabulary;
use ontograph_domain::{DiagnosticSink, Entry, Fingerprint, Property, Relation, Taxonomy};
use ontograph_gatekeeper::{Gatekeeper, ValidationResult};

use crate::class_model::{add_symmetric, remove_symmetric};
use crate::closure::Hierarchy;
use crate::diagnostics::{default_sink, report};

/// Properties and the `subPropertyOf`, `equivalentProperty` and `inverseOf` taxonomies
#[derive(Debug, Clone)]
pub struct PropertyModel {
    properties: BTreeMap<Fingerprint, Property>,
    sub_property_of: Taxonomy,
    equivalent_property: Taxonomy,
    inverse_of: Taxonomy,
    gatekeeper: Gatekeeper,
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for PropertyModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyModel {
    /// Create an empty model with the default guards, reporting to `tracing`
    pub fn new() -> Self {
        Self::with_gatekeeper(Gatekeeper::default_config(), default_sink())
    }

    /// Create an empty model with explicit guards and diagnostic sink
    pub fn with_gatekeeper(gatekeeper: Gatekeeper, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            properties: BTreeMap::new(),
            sub_property_of: Taxonomy::new(),
            equivalent_property: Taxonomy::new(),
            inverse_of: Taxonomy::new(),
            gatekeeper,
            sink,
        }
    }

    /// Register a property; returns `false` when it was already present
    pub fn add_property(&mut self, property: Property) -> bool {
        if self.properties.contains_key(&property.id()) {
            return false;
        }
        tracing::trace!(property = property.name(), kind = property.kind().as_str(), "Property registered");
        self.properties.insert(property.id(), property);
        true
    }

    /// Remove a property and every entry mentioning it
    pub fn remove_property(&mut self, id: Fingerprint) -> bool {
        let Some(property) = self.properties.remove(&id) else {
            return false;
        };
        let dropped = self.sub_property_of.remove_mentions(id)
            + self.equivalent_property.remove_mentions(id)
            + self.inverse_of.remove_mentions(id);
        tracing::debug!(property = property.name(), dropped, "Property removed");
        true
    }

    /// Look up a property
    pub fn property(&self, id: Fingerprint) -> Option<&Property> {
        self.properties.get(&id)
    }

    /// Mutable access to a registered property (characteristics, domain, range)
    pub fn property_mut(&mut self, id: Fingerprint) -> Option<&mut Property> {
        self.properties.get_mut(&id)
    }

    /// Every registered property, ordered by fingerprint
    pub fn properties(&self) -> impl Iterator<Item = &Property> + '_ {
        self.properties.values()
    }

    /// Whether the property is registered
    pub fn contains_property(&self, id: Fingerprint) -> bool {
        self.properties.contains_key(&id)
    }

    /// Number of registered properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// The `subPropertyOf` taxonomy
    pub fn sub_property_of(&self) -> &Taxonomy {
        &self.sub_property_of
    }

    /// The `equivalentProperty` taxonomy
    pub fn equivalent_property(&self) -> &Taxonomy {
        &self.equivalent_property
    }

    /// The `inverseOf` taxonomy
    pub fn inverse_of(&self) -> &Taxonomy {
        &self.inverse_of
    }

    /// Every taxonomy with its relation
    pub fn taxonomies(&self) -> [(Relation, &Taxonomy); 3] {
        [
            (Relation::SubPropertyOf, &self.sub_property_of),
            (Relation::EquivalentProperty, &self.equivalent_property),
            (Relation::InverseOf, &self.inverse_of),
        ]
    }

    /// Purge every inferred entry, returning how many were removed
    pub fn clear_inferred(&mut self) -> usize {
        self.sub_property_of.clear_inferred()
            + self.equivalent_property.clear_inferred()
            + self.inverse_of.clear_inferred()
    }

    /// Add `child subPropertyOf mother`
    pub fn add_subproperty_of(&mut self, child: &Property, mother: &Property) -> ValidationResult {
        let result = self.gatekeeper.check_subproperty_of(self, child, mother);
        if report(self.sink.as_ref(), Relation::SubPropertyOf, &result) {
            self.register(child);
            self.register(mother);
            self.sub_property_of.add(Entry::asserted(
                child.id(),
                vocabulary::RDFS_SUBPROPERTYOF.fingerprint(),
                mother.id(),
            ));
            tracing::debug!(child = child.name(), mother = mother.name(), "subPropertyOf added");
        }
        result
    }

    /// Add `a equivalentProperty b`, stored in both directions
    pub fn add_equivalent_property(&mut self, a: &Property, b: &Property) -> ValidationResult {
        let result = self.gatekeeper.check_equivalent_property(self, a, b);
        if report(self.sink.as_ref(), Relation::EquivalentProperty, &result) {
            self.register(a);
            self.register(b);
            add_symmetric(
                &mut self.equivalent_property,
                Entry::asserted(a.id(), vocabulary::OWL_EQUIVALENTPROPERTY.fingerprint(), b.id()),
            );
            tracing::debug!(a = a.name(), b = b.name(), "equivalentProperty added");
        }
        result
    }

    /// Add `a inverseOf b`, stored in both directions
    pub fn add_inverse_of(&mut self, a: &Property, b: &Property) -> ValidationResult {
        let result = self.gatekeeper.check_inverse_of(self, a, b);
        if report(self.sink.as_ref(), Relation::InverseOf, &result) {
            self.register(a);
            self.register(b);
            add_symmetric(
                &mut self.inverse_of,
                Entry::asserted(a.id(), vocabulary::OWL_INVERSEOF.fingerprint(), b.id()),
            );
            tracing::debug!(a = a.name(), b = b.name(), "inverseOf added");
        }
        result
    }

    fn register(&mut self, property: &Property) {
        if !self.properties.contains_key(&property.id()) {
            self.properties.insert(property.id(), property.clone());
        }
    }

    /// Remove `child subPropertyOf mother`
    pub fn remove_subproperty_of(&mut self, child: Fingerprint, mother: Fingerprint) -> bool {
        self.sub_property_of.remove(&Entry::asserted(
            child,
            vocabulary::RDFS_SUBPROPERTYOF.fingerprint(),
            mother,
        ))
    }

    /// Remove `a equivalentProperty b` in both directions
    pub fn remove_equivalent_property(&mut self, a: Fingerprint, b: Fingerprint) -> bool {
        remove_symmetric(
            &mut self.equivalent_property,
            Entry::asserted(a, vocabulary::OWL_EQUIVALENTPROPERTY.fingerprint(), b),
        )
    }

    /// Remove `a inverseOf b` in both directions
    pub fn remove_inverse_of(&mut self, a: Fingerprint, b: Fingerprint) -> bool {
        remove_symmetric(
            &mut self.inverse_of,
            Entry::asserted(a, vocabulary::OWL_INVERSEOF.fingerprint(), b),
        )
    }

    fn hierarchy(&self) -> Hierarchy<'_> {
        Hierarchy::new(&self.sub_property_of, &self.equivalent_property)
    }

    /// Every property subsumed by `property` (with equivalence fan-out)
    pub fn enlist_subproperties_of(&self, property: Fingerprint) -> BTreeSet<Fingerprint> {
        self.hierarchy().descendants(property)
    }

    /// Every property subsuming `property` (with equivalence fan-out)
    pub fn enlist_superproperties_of(&self, property: Fingerprint) -> BTreeSet<Fingerprint> {
        self.hierarchy().ancestors(property)
    }

    /// Transitive equivalence closure of `property`, excluding `property`
    pub fn enlist_equivalent_properties_of(&self, property: Fingerprint) -> BTreeSet<Fingerprint> {
        self.hierarchy().equivalents(property)
    }

    /// Direct inverses of `property`; inverse is not transitive
    pub fn enlist_inverse_properties_of(&self, property: Fingerprint) -> BTreeSet<Fingerprint> {
        let mut result: BTreeSet<Fingerprint> = self.inverse_of.by_subject(property).objects().collect();
        result.extend(self.inverse_of.by_object(property).subjects());
        result.remove(&property);
        result
    }

    /// `{property} ∪ subproperties ∪ equivalents`
    pub fn compatible_properties(&self, property: Fingerprint) -> BTreeSet<Fingerprint> {
        let mut result = self.enlist_subproperties_of(property);
        result.extend(self.enlist_equivalent_properties_of(property));
        result.insert(property);
        result
    }

    /// Whether `child` is subsumed by `mother`
    pub fn is_subproperty_of(&self, child: Fingerprint, mother: Fingerprint) -> bool {
        self.enlist_subproperties_of(mother).contains(&child)
    }

    /// Whether `mother` subsumes `child`
    pub fn is_superproperty_of(&self, mother: Fingerprint, child: Fingerprint) -> bool {
        self.enlist_superproperties_of(child).contains(&mother)
    }

    /// Whether the properties are equivalent
    pub fn is_equivalent_property_of(&self, a: Fingerprint, b: Fingerprint) -> bool {
        self.enlist_equivalent_properties_of(a).contains(&b)
    }

    /// Whether the properties are inverse of each other
    pub fn is_inverse_property_of(&self, a: Fingerprint, b: Fingerprint) -> bool {
        self.enlist_inverse_properties_of(a).contains(&b)
    }

    /// New model with the properties and entries of both
    pub fn union(&self, other: &PropertyModel) -> PropertyModel {
        let mut result = self.clone();
        for (id, property) in &other.properties {
            result.properties.entry(*id).or_insert_with(|| property.clone());
        }
        result.sub_property_of = self.sub_property_of.union(&other.sub_property_of);
        result.equivalent_property = self.equivalent_property.union(&other.equivalent_property);
        result.inverse_of = self.inverse_of.union(&other.inverse_of);
        result
    }

    /// New model with the properties and entries present in both
    pub fn intersect(&self, other: &PropertyModel) -> PropertyModel {
        let mut result = self.emptied();
        result.properties = self
            .properties
            .iter()
            .filter(|(id, _)| other.properties.contains_key(id))
            .map(|(id, property)| (*id, property.clone()))
            .collect();
        result.sub_property_of = self.sub_property_of.intersect(&other.sub_property_of);
        result.equivalent_property = self.equivalent_property.intersect(&other.equivalent_property);
        result.inverse_of = self.inverse_of.intersect(&other.inverse_of);
        result
    }

    /// New model with the properties and entries of `self` absent from `other`
    pub fn difference(&self, other: &PropertyModel) -> PropertyModel {
        let mut result = self.emptied();
        result.properties = self
            .properties
            .iter()
            .filter(|(id, _)| !other.properties.contains_key(id))
            .map(|(id, property)| (*id, property.clone()))
            .collect();
        result.sub_property_of = self.sub_property_of.difference(&other.sub_property_of);
        result.equivalent_property = self.equivalent_property.difference(&other.equivalent_property);
        result.inverse_of = self.inverse_of.difference(&other.inverse_of);
        result
    }

    fn emptied(&self) -> PropertyModel {
        PropertyModel::with_gatekeeper(self.gatekeeper.clone(), Arc::clone(&self.sink))
    }
}

impl PropertyTaxonomy for PropertyModel {
    fn is_subproperty_of(&self, child: Fingerprint, mother: Fingerprint) -> bool {
        PropertyModel::is_subproperty_of(self, child, mother)
    }

    fn is_equivalent_property_of(&self, a: Fingerprint, b: Fingerprint) -> bool {
        PropertyModel::is_equivalent_property_of(self, a, b)
    }

    fn is_inverse_property_of(&self, a: Fingerprint, b: Fingerprint) -> bool {
        PropertyModel::is_inverse_property_of(self, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CollectingSink;

    fn object(name: &str) -> Property {
        Property::object(name).unwrap()
    }

    #[test]
    fn test_subproperty_closure() {
        let mut model = PropertyModel::new();
        let (relative, parent, mother) = (object("ex:relativeOf"), object("ex:parentOf"), object("ex:motherOf"));
        model.add_subproperty_of(&parent, &relative);
        model.add_subproperty_of(&mother, &parent);

        assert_eq!(
            model.enlist_subproperties_of(relative.id()),
            BTreeSet::from([parent.id(), mother.id()])
        );
        assert!(model.enlist_superproperties_of(mother.id()).contains(&relative.id()));
        assert!(model.is_superproperty_of(relative.id(), mother.id()));
        assert_eq!(model.property_count(), 3);
    }

    #[test]
    fn test_equivalent_properties_fan_out() {
        let mut model = PropertyModel::new();
        let (knows, acquainted, befriends) = (object("ex:knows"), object("ex:acquainted"), object("ex:befriends"));
        model.add_equivalent_property(&knows, &acquainted);
        model.add_subproperty_of(&befriends, &knows);

        assert!(model.is_subproperty_of(befriends.id(), acquainted.id()));
        assert_eq!(
            model.compatible_properties(acquainted.id()),
            BTreeSet::from([acquainted.id(), knows.id(), befriends.id()])
        );
    }

    #[test]
    fn test_inverse_is_one_hop() {
        let mut model = PropertyModel::new();
        let (a, b, c) = (object("ex:a"), object("ex:b"), object("ex:c"));
        model.add_inverse_of(&a, &b);
        model.add_inverse_of(&b, &c);

        assert_eq!(model.enlist_inverse_properties_of(a.id()), BTreeSet::from([b.id()]));
        assert_eq!(model.enlist_inverse_properties_of(b.id()), BTreeSet::from([a.id(), c.id()]));
        assert!(!model.is_inverse_property_of(a.id(), c.id()));
        assert_eq!(model.inverse_of().inferred_count(), 2);
    }

    #[test]
    fn test_guards_reject_and_report() {
        let sink = CollectingSink::shared();
        let mut model = PropertyModel::with_gatekeeper(Gatekeeper::default_config(), sink.clone());
        let knows = object("ex:knows");
        let age = Property::datatype("ex:age").unwrap();
        let note = Property::annotation("ex:note").unwrap();

        assert!(model.add_subproperty_of(&knows, &knows).is_rejected());
        assert!(model.add_subproperty_of(&age, &knows).is_rejected());
        assert!(model.add_equivalent_property(&note, &knows).is_rejected());
        assert!(model.add_inverse_of(&knows, &age).is_rejected());

        assert_eq!(sink.warnings().len(), 4);
        assert!(model.sub_property_of().is_empty());
        assert!(model.equivalent_property().is_empty());
        assert!(model.inverse_of().is_empty());
    }

    #[test]
    fn test_inverse_rejected_when_subsumed() {
        let mut model = PropertyModel::new();
        let (parent, ancestor) = (object("ex:parentOf"), object("ex:ancestorOf"));
        model.add_subproperty_of(&parent, &ancestor);

        assert!(model.add_inverse_of(&ancestor, &parent).is_rejected());
        assert!(model.add_subproperty_of(&ancestor, &parent).is_rejected());
    }

    #[test]
    fn test_remove_property() {
        let mut model = PropertyModel::new();
        let (a, b) = (object("ex:a"), object("ex:b"));
        model.add_equivalent_property(&a, &b);

        assert!(model.remove_property(a.id()));
        assert!(!model.remove_property(a.id()));
        assert!(model.equivalent_property().is_empty());
        assert!(model.contains_property(b.id()));
    }

    #[test]
    fn test_property_mut_updates_characteristics() {
        let mut model = PropertyModel::new();
        let ancestor = object("ex:ancestorOf");
        model.add_property(ancestor.clone());

        model.property_mut(ancestor.id()).unwrap().set_transitive(true).unwrap();
        assert!(model.property(ancestor.id()).unwrap().is_transitive());
    }
}
