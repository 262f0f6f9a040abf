//! Restriction evaluation
//!
//! Assertions are first narrowed to the restricted property and its sub- and
//! equivalent properties, then grouped by subject.

use std::collections::{BTreeMap, BTreeSet};

use ontograph_domain::vocabulary::{RDFS_LITERAL, XSD_STRING};
use ontograph_domain::{Fingerprint, Literal, LiteralForm, Restriction, RestrictionKind, Value};

use crate::reasoner::Evaluation;

/// Subjects satisfying `restriction`
pub(crate) fn members(evaluation: &mut Evaluation<'_>, restriction: &Restriction) -> BTreeSet<Fingerprint> {
    let ontology = evaluation.ontology;
    let property = restriction.on_property();

    match ontology.property_model().property(property) {
        Some(declared) if !declared.is_annotation() => {}
        _ => {
            tracing::trace!(property = %property, "Restriction on an undeclared or annotation property");
            return BTreeSet::new();
        }
    }

    let groups = group_by_subject(evaluation, property);
    match restriction.kind() {
        RestrictionKind::Cardinality(bounds) => groups
            .into_iter()
            .filter(|(_, objects)| bounds.admits(objects.len()))
            .map(|(subject, _)| subject)
            .collect(),
        RestrictionKind::AllValuesFrom(class) => {
            let target = Target::new(evaluation, *class);
            groups
                .into_iter()
                .filter(|(_, objects)| !objects.is_empty() && objects.iter().all(|o| target.matches(evaluation, *o)))
                .map(|(subject, _)| subject)
                .collect()
        }
        RestrictionKind::SomeValuesFrom(class) => {
            let target = Target::new(evaluation, *class);
            groups
                .into_iter()
                .filter(|(_, objects)| objects.iter().any(|o| target.matches(evaluation, *o)))
                .map(|(subject, _)| subject)
                .collect()
        }
        RestrictionKind::HasValue(value) => {
            let accepted = accepted_values(evaluation, value);
            groups
                .into_iter()
                .filter(|(_, objects)| objects.iter().any(|o| accepted.admits(evaluation, *o)))
                .map(|(subject, _)| subject)
                .collect()
        }
    }
}

/// Objects of the matching assertions per subject, one per assertion
fn group_by_subject(evaluation: &Evaluation<'_>, property: Fingerprint) -> BTreeMap<Fingerprint, Vec<Fingerprint>> {
    let ontology = evaluation.ontology;
    let compatible = ontology.property_model().compatible_properties(property);

    let mut groups: BTreeMap<Fingerprint, Vec<Fingerprint>> = BTreeMap::new();
    for entry in ontology
        .data()
        .assertions()
        .iter()
        .filter(|entry| compatible.contains(&entry.predicate))
    {
        groups.entry(entry.subject).or_default().push(entry.object);
    }
    groups
}

/// Class an object is tested against by allValuesFrom and someValuesFrom
struct Target {
    members: BTreeSet<Fingerprint>,
    compatible: BTreeSet<Fingerprint>,
}

impl Target {
    fn new(evaluation: &mut Evaluation<'_>, class: Fingerprint) -> Self {
        Self {
            members: evaluation.members(class),
            compatible: evaluation.ontology.class_model().compatible_classes(class),
        }
    }

    fn matches(&self, evaluation: &Evaluation<'_>, object: Fingerprint) -> bool {
        if self.members.contains(&object) {
            return true;
        }
        evaluation
            .ontology
            .data()
            .literal(object)
            .is_some_and(|literal| literal_types(literal).any(|t| self.compatible.contains(&t)))
    }
}

/// Classes a literal object counts as
fn literal_types(literal: &Literal) -> impl Iterator<Item = Fingerprint> {
    let types = match literal.form() {
        LiteralForm::Typed { datatype, .. } => vec![*datatype],
        LiteralForm::Plain { language: None } => vec![RDFS_LITERAL.fingerprint(), XSD_STRING.fingerprint()],
        LiteralForm::Plain { language: Some(_) } => vec![RDFS_LITERAL.fingerprint()],
    };
    types.into_iter()
}

/// Values a hasValue restriction accepts
enum Accepted<'a> {
    Individuals(BTreeSet<Fingerprint>),
    Literal(&'a Literal),
}

fn accepted_values<'a>(evaluation: &Evaluation<'_>, value: &'a Value) -> Accepted<'a> {
    match value {
        Value::Individual(individual) => {
            Accepted::Individuals(evaluation.with_synonyms(BTreeSet::from([individual.id()])))
        }
        Value::Literal(literal) => Accepted::Literal(literal),
    }
}

impl Accepted<'_> {
    fn admits(&self, evaluation: &Evaluation<'_>, object: Fingerprint) -> bool {
        match self {
            Accepted::Individuals(accepted) => accepted.contains(&object),
            Accepted::Literal(required) => evaluation
                .ontology
                .data()
                .literal(object)
                .is_some_and(|literal| literal.semantically_equals(required)),
        }
    }
}
