//! Integration tests for ontograph-store
//!
//! These tests drive whole ontologies through the public API: closures,
//! guards, diagnostics and set algebra working together.

use std::collections::BTreeSet;

use ontograph_domain::{Class, Individual, Property, Relation, Severity};
use ontograph_gatekeeper::{Gatekeeper, ValidationConfig};
use ontograph_store::{CollectingSink, Foundation, Ontology};
use proptest::prelude::*;

fn class(name: &str) -> Class {
    Class::plain(name).unwrap()
}

#[test]
fn test_animal_dog_puppy() {
    let mut ontology = Ontology::new("ex:animals").unwrap();
    let (animal, dog, puppy) = (class("ex:Animal"), class("ex:Dog"), class("ex:Puppy"));

    let classes = ontology.class_model_mut();
    assert!(classes.add_subclass_of(&dog, &animal).is_accepted());
    assert!(classes.add_subclass_of(&puppy, &dog).is_accepted());

    let classes = ontology.class_model();
    assert!(classes.enlist_superclasses_of(puppy.id()).contains(&animal.id()));
    assert!(classes.enlist_subclasses_of(animal.id()).contains(&puppy.id()));
}

#[test]
fn test_equivalence_cycle_terminates() {
    let mut ontology = Ontology::new("ex:cycle").unwrap();
    let (a, b) = (class("ex:A"), class("ex:B"));
    ontology.class_model_mut().add_equivalent_class(&a, &b);
    // The symmetric entry already exists; asserting it again is a no-op
    ontology.class_model_mut().add_equivalent_class(&b, &a);

    let classes = ontology.class_model();
    assert_eq!(classes.enlist_equivalent_classes_of(a.id()), BTreeSet::from([b.id()]));
    assert_eq!(classes.equivalent_class().len(), 2);
}

#[test]
fn test_contradiction_rejected_with_warning() {
    let sink = CollectingSink::shared();
    let mut ontology =
        Ontology::with_gatekeeper("ex:contradiction", Gatekeeper::default_config(), sink.clone()).unwrap();
    let (a, b) = (class("ex:A"), class("ex:B"));

    ontology.class_model_mut().add_subclass_of(&a, &b);
    let before = ontology.class_model().disjoint_with().len();
    let result = ontology.class_model_mut().add_disjoint_with(&a, &b);

    assert!(result.is_rejected());
    assert_eq!(ontology.class_model().disjoint_with().len(), before);
    assert!(!ontology.class_model().is_disjoint_class_with(a.id(), b.id()));

    let warnings = sink.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].severity, Severity::Warning);
    assert_eq!(warnings[0].relation, Some(Relation::DisjointWith));
    assert!(warnings[0].message.contains("ex:A"));
}

#[test]
fn test_idempotent_add_and_remove() {
    let mut ontology = Ontology::new("ex:idempotent").unwrap();
    let (a, b) = (class("ex:A"), class("ex:B"));
    let classes = ontology.class_model_mut();

    classes.add_subclass_of(&a, &b);
    classes.add_subclass_of(&a, &b);
    assert_eq!(classes.sub_class_of().len(), 1);

    assert!(classes.remove_class(a.id()));
    assert!(!classes.remove_class(a.id()));
    assert!(classes.sub_class_of().is_empty());
}

#[test]
fn test_strict_policy_shared_by_all_models() {
    let sink = CollectingSink::shared();
    let mut ontology =
        Ontology::with_gatekeeper("ex:strict", Gatekeeper::new(ValidationConfig::strict()), sink.clone()).unwrap();
    let mut old = Property::object("ex:oldLink").unwrap();
    old.set_deprecated(true);
    let link = Property::object("ex:link").unwrap();
    let (x, y) = (Individual::new("ex:x").unwrap(), Individual::new("ex:y").unwrap());

    assert!(ontology.property_model_mut().add_subproperty_of(&link, &old).is_rejected());
    assert!(ontology.data_mut().add_assertion(&x, &old, &y).is_rejected());
    assert!(ontology.data_mut().add_assertion(&x, &link, &y).is_accepted());
    assert_eq!(sink.warnings().len(), 2);
}

#[test]
fn test_foundation_union_resolves_datatypes() {
    let foundation = Foundation::new();
    let mut ontology = Ontology::new("ex:measures").unwrap();
    let celsius = class("ex:Celsius");
    let decimal = Class::reserved(ontograph_domain::vocabulary::XSD_DECIMAL);
    ontology.class_model_mut().add_subclass_of(&celsius, &decimal);

    let merged = ontology.union(foundation.ontology());
    let literal = ontograph_domain::vocabulary::RDFS_LITERAL.fingerprint();
    assert!(merged.class_model().is_subclass_of(celsius.id(), literal));
    // The caller's ontology is untouched
    assert!(!ontology.class_model().is_subclass_of(celsius.id(), literal));
    assert!(ontology.class_model().is_literal_compatible_class(celsius.id()));
}

fn chain(len: usize) -> (Ontology, Vec<Class>) {
    let mut ontology = Ontology::new("ex:chain").unwrap();
    let classes: Vec<Class> = (0..len).map(|i| class(&format!("ex:C{}", i))).collect();
    for pair in classes.windows(2) {
        ontology.class_model_mut().add_subclass_of(&pair[0], &pair[1]);
    }
    (ontology, classes)
}

proptest! {
    /// Property: subsumption is transitive along any chain
    #[test]
    fn test_chain_transitivity(len in 2usize..10, i in 0usize..10, j in 0usize..10) {
        let (ontology, classes) = chain(len);
        let (i, j) = (i % len, j % len);
        let model = ontology.class_model();
        prop_assert_eq!(model.is_subclass_of(classes[i].id(), classes[j].id()), i < j);
        prop_assert_eq!(model.enlist_superclasses_of(classes[0].id()).len(), len - 1);
    }

    /// Property: equivalent classes share their subclasses, in both directions
    #[test]
    fn test_equivalents_share_subclasses(len in 2usize..8, k in 0usize..8) {
        let (mut ontology, classes) = chain(len);
        let k = k % len;
        let twin = class("ex:Twin");
        ontology.class_model_mut().add_equivalent_class(&twin, &classes[k]);

        let model = ontology.class_model();
        prop_assert_eq!(
            model.enlist_subclasses_of(twin.id()),
            model.enlist_subclasses_of(classes[k].id())
        );
        prop_assert_eq!(
            model.is_equivalent_class_of(twin.id(), classes[k].id()),
            model.is_equivalent_class_of(classes[k].id(), twin.id())
        );
    }

    /// Property: closing the chain into a cycle is always rejected
    #[test]
    fn test_cycle_rejected(len in 2usize..10) {
        let (mut ontology, classes) = chain(len);
        let result = ontology.class_model_mut().add_subclass_of(&classes[len - 1], &classes[0]);
        prop_assert!(result.is_rejected());
        prop_assert_eq!(ontology.class_model().sub_class_of().len(), len - 1);
    }
}
