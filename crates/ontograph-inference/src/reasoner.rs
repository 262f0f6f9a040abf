//! Core membership reasoner

use std::collections::{BTreeSet, HashSet};

use ontograph_domain::vocabulary::{OWL_NOTHING, OWL_THING, RDFS_LITERAL};
use ontograph_domain::{ClassKind, CompositeKind, Fingerprint, Taxonomy};
use ontograph_store::{Foundation, Ontology};

use crate::restriction;

/// Enlists the members of class expressions
///
/// The reasoner holds the [`Foundation`] built at start-up and merges it into
/// every ontology it evaluates.
///
/// # Examples
///
/// ```
/// use ontograph_domain::{Class, Individual};
/// use ontograph_inference::MembershipReasoner;
/// use ontograph_store::{Foundation, Ontology};
///
/// let foundation = Foundation::new();
/// let reasoner = MembershipReasoner::new(&foundation);
///
/// let mut ontology = Ontology::new("ex:zoo").unwrap();
/// let colour = Class::enumeration("ex:Colour").unwrap();
/// let red = Individual::new("ex:red").unwrap();
/// ontology.class_model_mut().add_one_of(&colour, &red);
///
/// let members = reasoner.enlist_members_of(&ontology, colour.id());
/// assert!(members.contains(&red.id()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MembershipReasoner<'f> {
    foundation: &'f Foundation,
}

impl<'f> MembershipReasoner<'f> {
    /// Create a reasoner over the given foundation
    pub fn new(foundation: &'f Foundation) -> Self {
        Self { foundation }
    }

    /// Every individual or literal that belongs to `class`
    ///
    /// Unknown classes and ill-formed restrictions yield the empty set.
    pub fn enlist_members_of(&self, ontology: &Ontology, class: Fingerprint) -> BTreeSet<Fingerprint> {
        let merged = ontology.union(self.foundation.ontology());
        let members = Evaluation::new(&merged).members(class);
        tracing::debug!(
            ontology = ontology.name(),
            class = %merged.display_name(class),
            members = members.len(),
            "Members enlisted"
        );
        members
    }

    /// Whether `resource` belongs to `class`
    pub fn is_member_of(&self, ontology: &Ontology, resource: Fingerprint, class: Fingerprint) -> bool {
        self.enlist_members_of(ontology, class).contains(&resource)
    }
}

/// One evaluation over a merged ontology
///
/// `active` holds the classes currently being evaluated; re-entering one
/// yields the empty set for that branch.
pub(crate) struct Evaluation<'o> {
    pub(crate) ontology: &'o Ontology,
    active: HashSet<Fingerprint>,
}

impl<'o> Evaluation<'o> {
    pub(crate) fn new(ontology: &'o Ontology) -> Self {
        Self {
            ontology,
            active: HashSet::new(),
        }
    }

    pub(crate) fn members(&mut self, class: Fingerprint) -> BTreeSet<Fingerprint> {
        if !self.active.insert(class) {
            tracing::trace!(class = %class, "Class re-entered during evaluation");
            return BTreeSet::new();
        }
        let members = self.dispatch(class);
        self.active.remove(&class);
        members
    }

    fn dispatch(&mut self, class: Fingerprint) -> BTreeSet<Fingerprint> {
        let ontology = self.ontology;
        let classes = ontology.class_model();

        if classes.is_literal_compatible_class(class) {
            return self.literal_members(class);
        }

        match classes.class(class).map(|class| class.kind()) {
            Some(ClassKind::Restriction(restriction)) => restriction::members(self, restriction),
            Some(ClassKind::Composite(CompositeKind::Union)) => {
                let mut members = BTreeSet::new();
                for operand in operands(classes.union_of(), class) {
                    members.extend(self.members(operand));
                }
                members
            }
            Some(ClassKind::Composite(CompositeKind::Intersection)) => {
                let mut operands = operands(classes.intersection_of(), class).into_iter();
                let Some(first) = operands.next() else {
                    return BTreeSet::new();
                };
                let seed = self.members(first);
                operands.fold(seed, |members, operand| {
                    let next = self.members(operand);
                    members.intersection(&next).copied().collect()
                })
            }
            Some(ClassKind::Composite(CompositeKind::Complement(target))) => {
                let excluded = self.members(*target);
                ontology
                    .data()
                    .individuals()
                    .map(|individual| individual.id())
                    .filter(|id| !excluded.contains(id))
                    .collect()
            }
            Some(ClassKind::Enumeration) => {
                let listed: BTreeSet<Fingerprint> = classes.one_of().by_subject(class).objects().collect();
                self.with_synonyms(listed)
            }
            Some(ClassKind::DataRange) => self.literal_members(class),
            Some(ClassKind::Plain) | None => self.plain_members(class),
        }
    }

    fn plain_members(&self, class: Fingerprint) -> BTreeSet<Fingerprint> {
        let data = self.ontology.data();
        if class == OWL_THING.fingerprint() {
            return data.individuals().map(|individual| individual.id()).collect();
        }
        if class == OWL_NOTHING.fingerprint() {
            return BTreeSet::new();
        }

        let compatible = self.ontology.class_model().compatible_classes(class);
        let typed = data
            .class_type()
            .iter()
            .filter(|entry| compatible.contains(&entry.object))
            .map(|entry| entry.subject)
            .collect();
        self.with_synonyms(typed)
    }

    fn literal_members(&self, class: Fingerprint) -> BTreeSet<Fingerprint> {
        let classes = self.ontology.class_model();
        let data = self.ontology.data();

        if matches!(classes.class(class).map(|class| class.kind()), Some(ClassKind::DataRange)) {
            return classes
                .one_of()
                .by_subject(class)
                .objects()
                .filter(|id| classes.operand(*id).and_then(|value| value.as_literal()).is_some())
                .collect();
        }
        if class == RDFS_LITERAL.fingerprint() {
            return data.literals().map(|literal| literal.id()).collect();
        }

        let compatible = classes.compatible_classes(class);
        data.literals()
            .filter(|literal| {
                literal
                    .datatype()
                    .is_some_and(|datatype| compatible.contains(&datatype))
            })
            .map(|literal| literal.id())
            .collect()
    }

    /// Members plus every sameAs synonym of each
    pub(crate) fn with_synonyms(&self, members: BTreeSet<Fingerprint>) -> BTreeSet<Fingerprint> {
        let data = self.ontology.data();
        let mut result = members.clone();
        for member in members {
            result.extend(data.enlist_same_individuals_as(member));
        }
        result
    }
}

fn operands(taxonomy: &Taxonomy, composite: Fingerprint) -> Vec<Fingerprint> {
    taxonomy.by_subject(composite).objects().collect()
}
