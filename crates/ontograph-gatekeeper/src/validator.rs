//! Consistency guard logic

use std::fmt;

use ontograph_domain::traits::{ClassTaxonomy, IndividualTaxonomy, PropertyTaxonomy};
use ontograph_domain::vocabulary::{OWL_NOTHING, OWL_THING};
use ontograph_domain::{
    Class, ClassKind, CompositeKind, Individual, Property, PropertyKind, Relation, Value,
};

use crate::ValidationConfig;

/// Result of evaluating a relation against the guards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the relation may be committed
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,
}

impl ValidationResult {
    /// An accepted result with no reasons
    pub fn accepted() -> Self {
        Self {
            status: ValidationStatus::Accepted,
            reasons: Vec::new(),
        }
    }

    fn from_reasons(reasons: Vec<RejectionReason>) -> Self {
        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };
        Self { status, reasons }
    }

    /// Whether the relation was accepted
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }

    /// Whether the relation was rejected
    pub fn is_rejected(&self) -> bool {
        self.status == ValidationStatus::Rejected
    }

    /// All reasons joined into one line
    pub fn message(&self) -> String {
        self.reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Relation accepted
    Accepted,

    /// Relation rejected; the model must stay unchanged
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// A resource related to itself
    SelfRelation {
        /// Rejected relation
        relation: Relation,
        /// Name of the resource
        resource: String,
    },

    /// Illegal use of owl:Thing or owl:Nothing
    ReservedClass {
        /// Rejected relation
        relation: Relation,
        /// Name of the reserved class
        class: String,
    },

    /// The pair already stands in a conflicting relation
    Contradiction {
        /// Rejected relation
        relation: Relation,
        /// Relation already holding
        existing: Relation,
        /// Subject of the existing relation
        subject: String,
        /// Object of the existing relation
        object: String,
    },

    /// An operand has the wrong kind for the relation
    KindMismatch {
        /// Rejected relation
        relation: Relation,
        /// Description of the issue
        issue: String,
    },

    /// A deprecated resource was used
    Deprecated {
        /// Rejected relation
        relation: Relation,
        /// Name of the deprecated resource
        resource: String,
    },
}

impl RejectionReason {
    /// Relation that was rejected
    pub fn relation(&self) -> Relation {
        match self {
            RejectionReason::SelfRelation { relation, .. }
            | RejectionReason::ReservedClass { relation, .. }
            | RejectionReason::Contradiction { relation, .. }
            | RejectionReason::KindMismatch { relation, .. }
            | RejectionReason::Deprecated { relation, .. } => *relation,
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::SelfRelation { relation, resource } => {
                write!(f, "'{}' cannot be in {} with itself", resource, relation)
            }
            RejectionReason::ReservedClass { relation, class } => {
                write!(f, "reserved class '{}' cannot take part in this {}", class, relation)
            }
            RejectionReason::Contradiction {
                relation,
                existing,
                subject,
                object,
            } => write!(
                f,
                "{} would contradict existing '{}' {} '{}'",
                relation, subject, existing, object
            ),
            RejectionReason::KindMismatch { issue, .. } => f.write_str(issue),
            RejectionReason::Deprecated { relation, resource } => {
                write!(f, "'{}' is deprecated and cannot enter a new {}", resource, relation)
            }
        }
    }
}

/// The Gatekeeper evaluates relations before a model commits them
///
/// It never mutates anything: models call a `check_*` method, and only
/// insert the relation when the result is accepted.
#[derive(Debug, Clone, Default)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Guard `child subClassOf mother`
    ///
    /// Rejects self subsumption, `mother = owl:Nothing`, `child = owl:Thing`,
    /// and pairs that are already reverse-subsumed, equivalent or disjoint.
    pub fn check_subclass_of<T: ClassTaxonomy + ?Sized>(
        &self,
        model: &T,
        child: &Class,
        mother: &Class,
    ) -> ValidationResult {
        let relation = Relation::SubClassOf;
        let mut reasons = Vec::new();

        if self.config.reject_self_relations && child.id() == mother.id() {
            reasons.push(self_relation(relation, child.name()));
        }

        if self.config.protect_reserved_classes {
            if mother.id() == OWL_NOTHING.fingerprint() {
                reasons.push(reserved(relation, mother));
            }
            if child.id() == OWL_THING.fingerprint() {
                reasons.push(reserved(relation, child));
            }
        }

        if self.config.reject_contradictions && child.id() != mother.id() {
            if model.is_subclass_of(mother.id(), child.id()) {
                reasons.push(contradiction(relation, Relation::SubClassOf, mother.name(), child.name()));
            }
            if model.is_equivalent_class_of(child.id(), mother.id()) {
                reasons.push(contradiction(relation, Relation::EquivalentClass, child.name(), mother.name()));
            }
            if model.is_disjoint_class_with(child.id(), mother.id()) {
                reasons.push(contradiction(relation, Relation::DisjointWith, child.name(), mother.name()));
            }
        }

        self.check_deprecated_classes(relation, &[child, mother], &mut reasons);
        finish(relation, reasons)
    }

    /// Guard `a equivalentClass b`
    pub fn check_equivalent_class<T: ClassTaxonomy + ?Sized>(
        &self,
        model: &T,
        a: &Class,
        b: &Class,
    ) -> ValidationResult {
        let relation = Relation::EquivalentClass;
        let mut reasons = Vec::new();

        if self.config.reject_self_relations && a.id() == b.id() {
            reasons.push(self_relation(relation, a.name()));
        }

        if self.config.protect_reserved_classes {
            for class in [a, b] {
                if class.id() == OWL_THING.fingerprint() || class.id() == OWL_NOTHING.fingerprint() {
                    reasons.push(reserved(relation, class));
                }
            }
        }

        if self.config.reject_contradictions && a.id() != b.id() {
            self.check_class_subsumption(model, relation, a, b, &mut reasons);
            if model.is_disjoint_class_with(a.id(), b.id()) {
                reasons.push(contradiction(relation, Relation::DisjointWith, a.name(), b.name()));
            }
        }

        self.check_deprecated_classes(relation, &[a, b], &mut reasons);
        finish(relation, reasons)
    }

    /// Guard `a disjointWith b`
    pub fn check_disjoint_with<T: ClassTaxonomy + ?Sized>(
        &self,
        model: &T,
        a: &Class,
        b: &Class,
    ) -> ValidationResult {
        let relation = Relation::DisjointWith;
        let mut reasons = Vec::new();

        if self.config.reject_self_relations && a.id() == b.id() {
            reasons.push(self_relation(relation, a.name()));
        }

        if self.config.protect_reserved_classes {
            for class in [a, b] {
                if class.id() == OWL_THING.fingerprint() {
                    reasons.push(reserved(relation, class));
                }
            }
        }

        if self.config.reject_contradictions && a.id() != b.id() {
            self.check_class_subsumption(model, relation, a, b, &mut reasons);
            if model.is_equivalent_class_of(a.id(), b.id()) {
                reasons.push(contradiction(relation, Relation::EquivalentClass, a.name(), b.name()));
            }
        }

        self.check_deprecated_classes(relation, &[a, b], &mut reasons);
        finish(relation, reasons)
    }

    /// Guard `class oneOf member`
    ///
    /// Enumerations take individuals, data ranges take literals.
    pub fn check_one_of(&self, class: &Class, member: &Value) -> ValidationResult {
        let relation = Relation::OneOf;
        let mut reasons = Vec::new();

        if self.config.reject_self_relations && class.id() == member.id() {
            reasons.push(self_relation(relation, class.name()));
        }

        if self.config.enforce_kinds {
            let compatible = match (class.kind(), member) {
                (ClassKind::Enumeration, Value::Individual(_)) => true,
                (ClassKind::DataRange, Value::Literal(_)) => true,
                _ => false,
            };
            if !compatible {
                reasons.push(RejectionReason::KindMismatch {
                    relation,
                    issue: format!(
                        "'{}' cannot be a oneOf member of '{}'",
                        member.name(),
                        class.name()
                    ),
                });
            }
        }

        finish(relation, reasons)
    }

    /// Guard `composite intersectionOf operand` or `composite unionOf operand`
    pub fn check_composite_operand(
        &self,
        relation: Relation,
        composite: &Class,
        operand: &Class,
    ) -> ValidationResult {
        let mut reasons = Vec::new();

        if self.config.reject_self_relations && composite.id() == operand.id() {
            reasons.push(self_relation(relation, composite.name()));
        }

        if self.config.enforce_kinds {
            let expected = match relation {
                Relation::IntersectionOf => Some(CompositeKind::Intersection),
                Relation::UnionOf => Some(CompositeKind::Union),
                _ => None,
            };
            let matches = matches!(
                (composite.kind(), expected),
                (ClassKind::Composite(kind), Some(expected)) if *kind == expected
            );
            if !matches {
                reasons.push(RejectionReason::KindMismatch {
                    relation,
                    issue: format!("'{}' does not accept {} operands", composite.name(), relation),
                });
            }
        }

        self.check_deprecated_classes(relation, &[operand], &mut reasons);
        finish(relation, reasons)
    }

    /// Guard `child subPropertyOf mother`
    pub fn check_subproperty_of<T: PropertyTaxonomy + ?Sized>(
        &self,
        model: &T,
        child: &Property,
        mother: &Property,
    ) -> ValidationResult {
        let relation = Relation::SubPropertyOf;
        let mut reasons = Vec::new();

        if self.config.reject_self_relations && child.id() == mother.id() {
            reasons.push(self_relation(relation, child.name()));
        }

        self.check_property_kinds(relation, child, mother, &mut reasons);

        if self.config.reject_contradictions && child.id() != mother.id() {
            if model.is_subproperty_of(mother.id(), child.id()) {
                reasons.push(contradiction(relation, Relation::SubPropertyOf, mother.name(), child.name()));
            }
            if model.is_equivalent_property_of(child.id(), mother.id()) {
                reasons.push(contradiction(relation, Relation::EquivalentProperty, child.name(), mother.name()));
            }
            self.check_inverse(model, relation, child, mother, &mut reasons);
        }

        self.check_deprecated_properties(relation, &[child, mother], &mut reasons);
        finish(relation, reasons)
    }

    /// Guard `a equivalentProperty b`
    pub fn check_equivalent_property<T: PropertyTaxonomy + ?Sized>(
        &self,
        model: &T,
        a: &Property,
        b: &Property,
    ) -> ValidationResult {
        let relation = Relation::EquivalentProperty;
        let mut reasons = Vec::new();

        if self.config.reject_self_relations && a.id() == b.id() {
            reasons.push(self_relation(relation, a.name()));
        }

        self.check_property_kinds(relation, a, b, &mut reasons);

        if self.config.reject_contradictions && a.id() != b.id() {
            self.check_property_subsumption(model, relation, a, b, &mut reasons);
            self.check_inverse(model, relation, a, b, &mut reasons);
        }

        self.check_deprecated_properties(relation, &[a, b], &mut reasons);
        finish(relation, reasons)
    }

    /// Guard `a inverseOf b`; both must be object properties
    pub fn check_inverse_of<T: PropertyTaxonomy + ?Sized>(
        &self,
        model: &T,
        a: &Property,
        b: &Property,
    ) -> ValidationResult {
        let relation = Relation::InverseOf;
        let mut reasons = Vec::new();

        if self.config.reject_self_relations && a.id() == b.id() {
            reasons.push(self_relation(relation, a.name()));
        }

        if self.config.enforce_kinds {
            for property in [a, b] {
                if !property.is_object() {
                    reasons.push(RejectionReason::KindMismatch {
                        relation,
                        issue: format!(
                            "'{}' is a {} property, inverseOf needs object properties",
                            property.name(),
                            property.kind().as_str()
                        ),
                    });
                }
            }
        }

        if self.config.reject_contradictions && a.id() != b.id() {
            self.check_property_subsumption(model, relation, a, b, &mut reasons);
            if model.is_equivalent_property_of(a.id(), b.id()) {
                reasons.push(contradiction(relation, Relation::EquivalentProperty, a.name(), b.name()));
            }
        }

        self.check_deprecated_properties(relation, &[a, b], &mut reasons);
        finish(relation, reasons)
    }

    /// Guard `individual classType class`
    ///
    /// Individuals cannot be typed with literal classes nor with owl:Nothing.
    pub fn check_class_type<T: ClassTaxonomy + ?Sized>(
        &self,
        model: &T,
        individual: &Individual,
        class: &Class,
    ) -> ValidationResult {
        let relation = Relation::ClassType;
        let mut reasons = Vec::new();

        if self.config.enforce_kinds && model.is_literal_compatible_class(class.id()) {
            reasons.push(RejectionReason::KindMismatch {
                relation,
                issue: format!(
                    "individual '{}' cannot be typed with literal class '{}'",
                    individual.name(),
                    class.name()
                ),
            });
        }

        if self.config.protect_reserved_classes && class.id() == OWL_NOTHING.fingerprint() {
            reasons.push(reserved(relation, class));
        }

        self.check_deprecated_classes(relation, &[class], &mut reasons);
        finish(relation, reasons)
    }

    /// Guard `a sameAs b`
    pub fn check_same_as<T: IndividualTaxonomy + ?Sized>(
        &self,
        model: &T,
        a: &Individual,
        b: &Individual,
    ) -> ValidationResult {
        let relation = Relation::SameAs;
        let mut reasons = Vec::new();

        if self.config.reject_self_relations && a.id() == b.id() {
            reasons.push(self_relation(relation, a.name()));
        }

        if self.config.reject_contradictions && model.is_different_individual_from(a.id(), b.id()) {
            reasons.push(contradiction(relation, Relation::DifferentFrom, a.name(), b.name()));
        }

        finish(relation, reasons)
    }

    /// Guard `a differentFrom b`
    pub fn check_different_from<T: IndividualTaxonomy + ?Sized>(
        &self,
        model: &T,
        a: &Individual,
        b: &Individual,
    ) -> ValidationResult {
        let relation = Relation::DifferentFrom;
        let mut reasons = Vec::new();

        if self.config.reject_self_relations && a.id() == b.id() {
            reasons.push(self_relation(relation, a.name()));
        }

        if self.config.reject_contradictions && model.is_same_individual_as(a.id(), b.id()) {
            reasons.push(contradiction(relation, Relation::SameAs, a.name(), b.name()));
        }

        finish(relation, reasons)
    }

    /// Guard `subject property value`
    ///
    /// Annotation properties never carry assertions; object properties take
    /// individuals and datatype properties take literals.
    pub fn check_assertion(
        &self,
        subject: &Individual,
        property: &Property,
        value: &Value,
    ) -> ValidationResult {
        let relation = Relation::Assertion;
        let mut reasons = Vec::new();

        if self.config.enforce_kinds {
            let issue = match (property.kind(), value) {
                (PropertyKind::Annotation, _) => Some(format!(
                    "annotation property '{}' cannot carry assertions",
                    property.name()
                )),
                (PropertyKind::Datatype, Value::Individual(individual)) => Some(format!(
                    "datatype property '{}' cannot link '{}' to individual '{}'",
                    property.name(),
                    subject.name(),
                    individual.name()
                )),
                (PropertyKind::Object, Value::Literal(literal)) => Some(format!(
                    "object property '{}' cannot link '{}' to literal {}",
                    property.name(),
                    subject.name(),
                    literal
                )),
                _ => None,
            };
            if let Some(issue) = issue {
                reasons.push(RejectionReason::KindMismatch { relation, issue });
            }
        }

        self.check_deprecated_properties(relation, &[property], &mut reasons);
        finish(relation, reasons)
    }

    /// Subsumption in either direction contradicts equivalence and disjointness
    fn check_class_subsumption<T: ClassTaxonomy + ?Sized>(
        &self,
        model: &T,
        relation: Relation,
        a: &Class,
        b: &Class,
        reasons: &mut Vec<RejectionReason>,
    ) {
        if model.is_subclass_of(a.id(), b.id()) {
            reasons.push(contradiction(relation, Relation::SubClassOf, a.name(), b.name()));
        }
        if model.is_subclass_of(b.id(), a.id()) {
            reasons.push(contradiction(relation, Relation::SubClassOf, b.name(), a.name()));
        }
    }

    fn check_property_subsumption<T: PropertyTaxonomy + ?Sized>(
        &self,
        model: &T,
        relation: Relation,
        a: &Property,
        b: &Property,
        reasons: &mut Vec<RejectionReason>,
    ) {
        if model.is_subproperty_of(a.id(), b.id()) {
            reasons.push(contradiction(relation, Relation::SubPropertyOf, a.name(), b.name()));
        }
        if model.is_subproperty_of(b.id(), a.id()) {
            reasons.push(contradiction(relation, Relation::SubPropertyOf, b.name(), a.name()));
        }
    }

    /// Inverse object properties cannot also be subsumed or equivalent
    fn check_inverse<T: PropertyTaxonomy + ?Sized>(
        &self,
        model: &T,
        relation: Relation,
        a: &Property,
        b: &Property,
        reasons: &mut Vec<RejectionReason>,
    ) {
        if a.is_object() && b.is_object() && model.is_inverse_property_of(a.id(), b.id()) {
            reasons.push(contradiction(relation, Relation::InverseOf, a.name(), b.name()));
        }
    }

    /// Annotation properties and mixed object/datatype pairs are rejected
    fn check_property_kinds(
        &self,
        relation: Relation,
        a: &Property,
        b: &Property,
        reasons: &mut Vec<RejectionReason>,
    ) {
        if !self.config.enforce_kinds {
            return;
        }

        if a.is_annotation() || b.is_annotation() {
            reasons.push(RejectionReason::KindMismatch {
                relation,
                issue: format!(
                    "annotation properties cannot take part in {} ('{}', '{}')",
                    relation,
                    a.name(),
                    b.name()
                ),
            });
        } else if a.kind() != b.kind() {
            reasons.push(RejectionReason::KindMismatch {
                relation,
                issue: format!(
                    "'{}' is a {} property but '{}' is a {} property",
                    a.name(),
                    a.kind().as_str(),
                    b.name(),
                    b.kind().as_str()
                ),
            });
        }
    }

    fn check_deprecated_classes(
        &self,
        relation: Relation,
        classes: &[&Class],
        reasons: &mut Vec<RejectionReason>,
    ) {
        if !self.config.reject_deprecated {
            return;
        }
        for class in classes.iter().filter(|class| class.is_deprecated()) {
            reasons.push(RejectionReason::Deprecated {
                relation,
                resource: class.name().to_string(),
            });
        }
    }

    fn check_deprecated_properties(
        &self,
        relation: Relation,
        properties: &[&Property],
        reasons: &mut Vec<RejectionReason>,
    ) {
        if !self.config.reject_deprecated {
            return;
        }
        for property in properties.iter().filter(|property| property.is_deprecated()) {
            reasons.push(RejectionReason::Deprecated {
                relation,
                resource: property.name().to_string(),
            });
        }
    }
}

fn self_relation(relation: Relation, resource: &str) -> RejectionReason {
    RejectionReason::SelfRelation {
        relation,
        resource: resource.to_string(),
    }
}

fn reserved(relation: Relation, class: &Class) -> RejectionReason {
    RejectionReason::ReservedClass {
        relation,
        class: class.name().to_string(),
    }
}

fn contradiction(relation: Relation, existing: Relation, subject: &str, object: &str) -> RejectionReason {
    RejectionReason::Contradiction {
        relation,
        existing,
        subject: subject.to_string(),
        object: object.to_string(),
    }
}

fn finish(relation: Relation, reasons: Vec<RejectionReason>) -> ValidationResult {
    if !reasons.is_empty() {
        tracing::debug!(%relation, reasons = reasons.len(), "Relation rejected by gatekeeper");
    }
    ValidationResult::from_reasons(reasons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontograph_domain::{Fingerprint, Literal};
    use std::collections::HashSet;

    fn class(name: &str) -> Class {
        Class::plain(name).unwrap()
    }

    #[test]
    fn test_valid_subclass() {
        let gatekeeper = Gatekeeper::default_config();
        let result = gatekeeper.check_subclass_of(&MockModel::default(), &class("ex:Dog"), &class("ex:Animal"));

        assert_eq!(result.status, ValidationStatus::Accepted);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_self_subclass_rejected() {
        let gatekeeper = Gatekeeper::default_config();
        let dog = class("ex:Dog");
        let result = gatekeeper.check_subclass_of(&MockModel::default(), &dog, &dog);

        assert_eq!(result.status, ValidationStatus::Rejected);
        assert_eq!(result.reasons.len(), 1);
        match &result.reasons[0] {
            RejectionReason::SelfRelation { resource, .. } => assert_eq!(resource, "ex:Dog"),
            _ => panic!("Expected SelfRelation"),
        }
    }

    #[test]
    fn test_reserved_classes_in_subsumption() {
        let gatekeeper = Gatekeeper::default_config();
        let model = MockModel::default();
        let thing = Class::reserved(OWL_THING);
        let nothing = Class::reserved(OWL_NOTHING);
        let dog = class("ex:Dog");

        assert!(gatekeeper.check_subclass_of(&model, &dog, &nothing).is_rejected());
        assert!(gatekeeper.check_subclass_of(&model, &thing, &dog).is_rejected());
        // Subsumption under owl:Thing is always fine
        assert!(gatekeeper.check_subclass_of(&model, &dog, &thing).is_accepted());
        assert!(gatekeeper.check_equivalent_class(&model, &dog, &thing).is_rejected());
        assert!(gatekeeper.check_disjoint_with(&model, &thing, &dog).is_rejected());
    }

    #[test]
    fn test_subclass_contradictions() {
        let gatekeeper = Gatekeeper::default_config();
        let (dog, animal, cat) = (class("ex:Dog"), class("ex:Animal"), class("ex:Cat"));
        let mut model = MockModel::default();
        model.subclass.insert((dog.id(), animal.id()));
        model.disjoint.insert((dog.id(), cat.id()));

        // Reverse subsumption would close a cycle
        let result = gatekeeper.check_subclass_of(&model, &animal, &dog);
        assert!(result.is_rejected());
        match &result.reasons[0] {
            RejectionReason::Contradiction { existing, .. } => assert_eq!(*existing, Relation::SubClassOf),
            _ => panic!("Expected Contradiction"),
        }

        assert!(gatekeeper.check_subclass_of(&model, &dog, &cat).is_rejected());
    }

    #[test]
    fn test_disjoint_rejected_after_subclass() {
        let gatekeeper = Gatekeeper::default_config();
        let (a, b) = (class("ex:A"), class("ex:B"));
        let mut model = MockModel::default();
        model.subclass.insert((a.id(), b.id()));

        let result = gatekeeper.check_disjoint_with(&model, &a, &b);
        assert!(result.is_rejected());
        assert!(result.message().contains("subClassOf"));

        // Order of the pair does not matter
        assert!(gatekeeper.check_disjoint_with(&model, &b, &a).is_rejected());
        assert!(gatekeeper.check_equivalent_class(&model, &b, &a).is_rejected());
    }

    #[test]
    fn test_equivalent_rejected_when_disjoint() {
        let gatekeeper = Gatekeeper::default_config();
        let (a, b) = (class("ex:A"), class("ex:B"));
        let mut model = MockModel::default();
        model.disjoint.insert((a.id(), b.id()));

        assert!(gatekeeper.check_equivalent_class(&model, &a, &b).is_rejected());
        assert!(gatekeeper.check_disjoint_with(&model, &a, &b).is_accepted());
    }

    #[test]
    fn test_one_of_kinds() {
        let gatekeeper = Gatekeeper::default_config();
        let colours = Class::enumeration("ex:Colours").unwrap();
        let sizes = Class::data_range("ex:Sizes").unwrap();
        let red: Value = Individual::new("ex:red").unwrap().into();
        let small: Value = Literal::plain("small", None).into();

        assert!(gatekeeper.check_one_of(&colours, &red).is_accepted());
        assert!(gatekeeper.check_one_of(&sizes, &small).is_accepted());
        assert!(gatekeeper.check_one_of(&colours, &small).is_rejected());
        assert!(gatekeeper.check_one_of(&sizes, &red).is_rejected());
        assert!(gatekeeper.check_one_of(&class("ex:Plain"), &red).is_rejected());
    }

    #[test]
    fn test_composite_operands() {
        let gatekeeper = Gatekeeper::default_config();
        let union = Class::union("ex:DogOrCat").unwrap();
        let intersection = Class::intersection("ex:SmallDog").unwrap();
        let dog = class("ex:Dog");

        assert!(gatekeeper.check_composite_operand(Relation::UnionOf, &union, &dog).is_accepted());
        assert!(gatekeeper.check_composite_operand(Relation::IntersectionOf, &union, &dog).is_rejected());
        assert!(gatekeeper.check_composite_operand(Relation::IntersectionOf, &intersection, &dog).is_accepted());
        // A composite cannot reference itself
        assert!(gatekeeper.check_composite_operand(Relation::UnionOf, &union, &union).is_rejected());
    }

    #[test]
    fn test_property_kind_rules() {
        let gatekeeper = Gatekeeper::default_config();
        let model = MockModel::default();
        let knows = Property::object("ex:knows").unwrap();
        let likes = Property::object("ex:likes").unwrap();
        let age = Property::datatype("ex:age").unwrap();
        let note = Property::annotation("ex:note").unwrap();

        assert!(gatekeeper.check_subproperty_of(&model, &likes, &knows).is_accepted());
        assert!(gatekeeper.check_subproperty_of(&model, &age, &knows).is_rejected());
        assert!(gatekeeper.check_equivalent_property(&model, &note, &knows).is_rejected());
        assert!(gatekeeper.check_inverse_of(&model, &knows, &age).is_rejected());
        assert!(gatekeeper.check_inverse_of(&model, &knows, &knows).is_rejected());
    }

    #[test]
    fn test_property_contradictions() {
        let gatekeeper = Gatekeeper::default_config();
        let parent = Property::object("ex:parentOf").unwrap();
        let child = Property::object("ex:childOf").unwrap();
        let mut model = MockModel::default();
        model.inverse.insert((parent.id(), child.id()));

        assert!(gatekeeper.check_subproperty_of(&model, &parent, &child).is_rejected());
        assert!(gatekeeper.check_equivalent_property(&model, &child, &parent).is_rejected());

        let mut model = MockModel::default();
        model.subproperty.insert((child.id(), parent.id()));
        assert!(gatekeeper.check_inverse_of(&model, &parent, &child).is_rejected());
        assert!(gatekeeper.check_subproperty_of(&model, &parent, &child).is_rejected());
    }

    #[test]
    fn test_class_type_rules() {
        let gatekeeper = Gatekeeper::default_config();
        let fido = Individual::new("ex:fido").unwrap();
        let dog = class("ex:Dog");
        let literal_class = class("ex:Celsius");
        let mut model = MockModel::default();
        model.literal.insert(literal_class.id());

        assert!(gatekeeper.check_class_type(&model, &fido, &dog).is_accepted());
        assert!(gatekeeper.check_class_type(&model, &fido, &literal_class).is_rejected());
        assert!(gatekeeper
            .check_class_type(&model, &fido, &Class::reserved(OWL_NOTHING))
            .is_rejected());
    }

    #[test]
    fn test_same_and_different() {
        let gatekeeper = Gatekeeper::default_config();
        let a = Individual::new("ex:a").unwrap();
        let b = Individual::new("ex:b").unwrap();
        let mut model = MockModel::default();
        model.same.insert((a.id(), b.id()));

        assert!(gatekeeper.check_same_as(&model, &a, &a).is_rejected());
        assert!(gatekeeper.check_same_as(&model, &a, &b).is_accepted());
        assert!(gatekeeper.check_different_from(&model, &b, &a).is_rejected());
    }

    #[test]
    fn test_assertion_kinds() {
        let gatekeeper = Gatekeeper::default_config();
        let fido = Individual::new("ex:fido").unwrap();
        let rex: Value = Individual::new("ex:rex").unwrap().into();
        let three: Value = Literal::plain("3", None).into();
        let knows = Property::object("ex:knows").unwrap();
        let age = Property::datatype("ex:age").unwrap();
        let note = Property::annotation("ex:note").unwrap();

        assert!(gatekeeper.check_assertion(&fido, &knows, &rex).is_accepted());
        assert!(gatekeeper.check_assertion(&fido, &age, &three).is_accepted());
        assert!(gatekeeper.check_assertion(&fido, &knows, &three).is_rejected());
        assert!(gatekeeper.check_assertion(&fido, &age, &rex).is_rejected());
        assert!(gatekeeper.check_assertion(&fido, &note, &three).is_rejected());
    }

    #[test]
    fn test_deprecated_policy() {
        let mut old = class("ex:Old");
        old.set_deprecated(true).unwrap();
        let new = class("ex:New");
        let model = MockModel::default();

        let default = Gatekeeper::default_config();
        assert!(default.check_subclass_of(&model, &new, &old).is_accepted());

        let strict = Gatekeeper::new(ValidationConfig::strict());
        let result = strict.check_subclass_of(&model, &new, &old);
        assert!(result.is_rejected());
        assert!(matches!(result.reasons[0], RejectionReason::Deprecated { .. }));
    }

    #[test]
    fn test_permissive_config() {
        let gatekeeper = Gatekeeper::new(ValidationConfig::permissive());
        let (a, b) = (class("ex:A"), class("ex:B"));
        let mut model = MockModel::default();
        model.subclass.insert((a.id(), b.id()));

        // Contradictions pass, self relations still do not
        assert!(gatekeeper.check_disjoint_with(&model, &a, &b).is_accepted());
        assert!(gatekeeper.check_disjoint_with(&model, &a, &a).is_rejected());
    }

    #[test]
    fn test_multiple_reasons() {
        let gatekeeper = Gatekeeper::default_config();
        let thing = Class::reserved(OWL_THING);
        let nothing = Class::reserved(OWL_NOTHING);

        let result = gatekeeper.check_subclass_of(&MockModel::default(), &thing, &nothing);
        assert_eq!(result.reasons.len(), 2);
        assert!(result.reasons.iter().all(|r| r.relation() == Relation::SubClassOf));
    }

    // Mock model: every relation is a plain set of pairs (no closure)
    #[derive(Default)]
    struct MockModel {
        subclass: HashSet<(Fingerprint, Fingerprint)>,
        equivalent: HashSet<(Fingerprint, Fingerprint)>,
        disjoint: HashSet<(Fingerprint, Fingerprint)>,
        literal: HashSet<Fingerprint>,
        subproperty: HashSet<(Fingerprint, Fingerprint)>,
        inverse: HashSet<(Fingerprint, Fingerprint)>,
        same: HashSet<(Fingerprint, Fingerprint)>,
    }

    fn either(set: &HashSet<(Fingerprint, Fingerprint)>, a: Fingerprint, b: Fingerprint) -> bool {
        set.contains(&(a, b)) || set.contains(&(b, a))
    }

    impl ClassTaxonomy for MockModel {
        fn is_subclass_of(&self, child: Fingerprint, mother: Fingerprint) -> bool {
            self.subclass.contains(&(child, mother))
        }

        fn is_equivalent_class_of(&self, a: Fingerprint, b: Fingerprint) -> bool {
            either(&self.equivalent, a, b)
        }

        fn is_disjoint_class_with(&self, a: Fingerprint, b: Fingerprint) -> bool {
            either(&self.disjoint, a, b)
        }

        fn is_literal_compatible_class(&self, class: Fingerprint) -> bool {
            self.literal.contains(&class)
        }
    }

    impl PropertyTaxonomy for MockModel {
        fn is_subproperty_of(&self, child: Fingerprint, mother: Fingerprint) -> bool {
            self.subproperty.contains(&(child, mother))
        }

        fn is_equivalent_property_of(&self, _a: Fingerprint, _b: Fingerprint) -> bool {
            false
        }

        fn is_inverse_property_of(&self, a: Fingerprint, b: Fingerprint) -> bool {
            either(&self.inverse, a, b)
        }
    }

    impl IndividualTaxonomy for MockModel {
        fn is_same_individual_as(&self, a: Fingerprint, b: Fingerprint) -> bool {
            either(&self.same, a, b)
        }

        fn is_different_individual_from(&self, _a: Fingerprint, _b: Fingerprint) -> bool {
            false
        }
    }
}
