//! Integration tests for ontograph-inference
//!
//! Whole ontologies are built through the store API and queried through
//! the reasoner.

use std::collections::BTreeSet;

use ontograph_domain::{Cardinality, Class, Fingerprint, Individual, Property, RestrictionKind};
use ontograph_inference::MembershipReasoner;
use ontograph_store::{Foundation, Ontology};
use proptest::prelude::*;

fn individual(name: &str) -> Individual {
    Individual::new(name).unwrap()
}

#[test]
fn test_exact_cardinality_excludes_two_values() {
    let foundation = Foundation::new();
    let reasoner = MembershipReasoner::new(&foundation);
    let mut ontology = Ontology::new("ex:o").unwrap();
    let p = Property::object("ex:p").unwrap();
    ontology.property_model_mut().add_property(p.clone());

    let (i1, v1, v2) = (individual("ex:i1"), individual("ex:v1"), individual("ex:v2"));
    ontology.data_mut().add_assertion(&i1, &p, &v1);
    ontology.data_mut().add_assertion(&i1, &p, &v2);

    let exactly_one = Class::restriction(
        "ex:ExactlyOneP",
        &p,
        RestrictionKind::Cardinality(Cardinality::new(1, 1).unwrap()),
    )
    .unwrap();
    ontology.class_model_mut().add_class(exactly_one.clone());

    assert!(!reasoner.is_member_of(&ontology, i1.id(), exactly_one.id()));
}

#[test]
fn test_all_values_from_scenario() {
    let foundation = Foundation::new();
    let reasoner = MembershipReasoner::new(&foundation);
    let mut ontology = Ontology::new("ex:o").unwrap();
    let p = Property::object("ex:p").unwrap();
    let c = Class::plain("ex:C").unwrap();
    ontology.property_model_mut().add_property(p.clone());

    let (lonely, typed, v) = (individual("ex:lonely"), individual("ex:typed"), individual("ex:v"));
    ontology.data_mut().add_individual(lonely.clone());
    ontology.add_class_type(&v, &c);
    ontology.data_mut().add_assertion(&typed, &p, &v);

    let only_c = Class::restriction("ex:OnlyC", &p, RestrictionKind::AllValuesFrom(c.id())).unwrap();
    ontology.class_model_mut().add_class(only_c.clone());

    let members = reasoner.enlist_members_of(&ontology, only_c.id());
    assert!(!members.contains(&lonely.id()));
    assert!(members.contains(&typed.id()));
}

#[test]
fn test_members_of_restricted_intersection() {
    let foundation = Foundation::new();
    let reasoner = MembershipReasoner::new(&foundation);
    let mut ontology = Ontology::new("ex:o").unwrap();
    let owns = Property::object("ex:owns").unwrap();
    ontology.property_model_mut().add_property(owns.clone());
    let (person, dog) = (Class::plain("ex:Person").unwrap(), Class::plain("ex:Dog").unwrap());
    let (alice, acme, rex) = (individual("ex:alice"), individual("ex:acme"), individual("ex:rex"));

    ontology.add_class_type(&alice, &person);
    ontology.add_class_type(&rex, &dog);
    ontology.data_mut().add_assertion(&alice, &owns, &rex);
    ontology.data_mut().add_assertion(&acme, &owns, &rex);

    let dog_owner = Class::restriction("ex:OwnsDog", &owns, RestrictionKind::SomeValuesFrom(dog.id())).unwrap();
    let owner = Class::intersection("ex:DogOwningPerson").unwrap();
    ontology.class_model_mut().add_intersection_of(&owner, &person);
    ontology.class_model_mut().add_intersection_of(&owner, &dog_owner);

    assert_eq!(
        reasoner.enlist_members_of(&ontology, owner.id()),
        BTreeSet::from([alice.id()])
    );
}

fn union_fixture(a_members: &[usize], b_members: &[usize]) -> (Ontology, Class, Class, Class) {
    let mut ontology = Ontology::new("ex:union").unwrap();
    let (a, b) = (Class::plain("ex:A").unwrap(), Class::plain("ex:B").unwrap());
    for i in a_members {
        ontology.add_class_type(&individual(&format!("ex:i{}", i)), &a);
    }
    for i in b_members {
        ontology.add_class_type(&individual(&format!("ex:i{}", i)), &b);
    }
    let either = Class::union("ex:AorB").unwrap();
    ontology.class_model_mut().add_union_of(&either, &a);
    ontology.class_model_mut().add_union_of(&either, &b);
    (ontology, a, b, either)
}

#[test]
fn test_union_overlapping_and_disjoint_members() {
    let foundation = Foundation::new();
    let reasoner = MembershipReasoner::new(&foundation);
    let (ontology, a, b, either) = union_fixture(&[1, 2], &[2, 3]);

    let mut expected = reasoner.enlist_members_of(&ontology, a.id());
    expected.extend(reasoner.enlist_members_of(&ontology, b.id()));
    let members = reasoner.enlist_members_of(&ontology, either.id());
    assert_eq!(members, expected);
    assert_eq!(members.len(), 3);
}

proptest! {
    /// Property: union membership is the union of operand memberships
    #[test]
    fn test_union_law(
        a_members in prop::collection::vec(0usize..12, 0..8),
        b_members in prop::collection::vec(0usize..12, 0..8),
    ) {
        let foundation = Foundation::new();
        let reasoner = MembershipReasoner::new(&foundation);
        let (ontology, a, b, either) = union_fixture(&a_members, &b_members);

        let mut expected: BTreeSet<Fingerprint> = reasoner.enlist_members_of(&ontology, a.id());
        expected.extend(reasoner.enlist_members_of(&ontology, b.id()));
        prop_assert_eq!(reasoner.enlist_members_of(&ontology, either.id()), expected);
    }

    /// Property: a complement never shares a member with its target
    #[test]
    fn test_complement_is_disjoint(a_members in prop::collection::vec(0usize..12, 0..8)) {
        let foundation = Foundation::new();
        let reasoner = MembershipReasoner::new(&foundation);
        let (mut ontology, a, _, _) = union_fixture(&a_members, &[]);
        let not_a = Class::complement("ex:NotA", &a).unwrap();
        ontology.class_model_mut().add_class(not_a.clone());

        let inside = reasoner.enlist_members_of(&ontology, a.id());
        let outside = reasoner.enlist_members_of(&ontology, not_a.id());
        prop_assert!(inside.is_disjoint(&outside));
        prop_assert_eq!(inside.len() + outside.len(), ontology.data().individual_count());
    }
}
