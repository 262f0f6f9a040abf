//! Ontology - composition root of the class model, property model and data

use std::sync::Arc;

use ontograph_domain::{
    Class, DiagnosticSink, DomainError, Fingerprint, Individual, Property,
};
use ontograph_gatekeeper::{Gatekeeper, ValidationResult};

use crate::diagnostics::default_sink;
use crate::{ClassModel, Data, OntologyStats, PropertyModel, StoreError};

/// An ontology: T-BOX (classes, properties) plus A-BOX (data)
///
/// The three parts are owned; set algebra always produces a new ontology.
#[derive(Debug, Clone)]
pub struct Ontology {
    id: Fingerprint,
    name: String,
    class_model: ClassModel,
    property_model: PropertyModel,
    data: Data,
}

impl Ontology {
    /// Create an empty ontology with default guards, reporting to `tracing`
    ///
    /// # Errors
    /// Returns [`StoreError::Domain`] when the name is blank
    ///
    /// # Examples
    ///
    /// ```
    /// use ontograph_store::Ontology;
    /// use ontograph_domain::Class;
    ///
    /// let mut ontology = Ontology::new("ex:animals").unwrap();
    /// let dog = Class::plain("ex:Dog").unwrap();
    /// let animal = Class::plain("ex:Animal").unwrap();
    /// ontology.class_model_mut().add_subclass_of(&dog, &animal);
    /// assert!(ontology.class_model().is_subclass_of(dog.id(), animal.id()));
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, StoreError> {
        Self::with_gatekeeper(name, Gatekeeper::default_config(), default_sink())
    }

    /// Create an empty ontology whose models share the guards and sink
    pub fn with_gatekeeper(
        name: impl Into<String>,
        gatekeeper: Gatekeeper,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Result<Self, StoreError> {
        Self::with_parts(
            name,
            ClassModel::with_gatekeeper(gatekeeper.clone(), Arc::clone(&sink)),
            PropertyModel::with_gatekeeper(gatekeeper.clone(), Arc::clone(&sink)),
            Data::with_gatekeeper(gatekeeper, sink),
        )
    }

    /// Assemble an ontology from existing parts
    pub fn with_parts(
        name: impl Into<String>,
        class_model: ClassModel,
        property_model: PropertyModel,
        data: Data,
    ) -> Result<Self, StoreError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(StoreError::Domain(DomainError::EmptyName("ontology")));
        }
        Ok(Self {
            id: Fingerprint::of(&name),
            name,
            class_model,
            property_model,
            data,
        })
    }

    /// Built-in ontology with a fixed, non-empty name
    pub(crate) fn builtin(name: &'static str) -> Self {
        Self {
            id: Fingerprint::of(name),
            name: name.to_string(),
            class_model: ClassModel::new(),
            property_model: PropertyModel::new(),
            data: Data::new(),
        }
    }

    /// Fingerprint of the ontology name
    pub fn id(&self) -> Fingerprint {
        self.id
    }

    /// Name of the ontology
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The class model
    pub fn class_model(&self) -> &ClassModel {
        &self.class_model
    }

    /// Mutable class model
    pub fn class_model_mut(&mut self) -> &mut ClassModel {
        &mut self.class_model
    }

    /// The property model
    pub fn property_model(&self) -> &PropertyModel {
        &self.property_model
    }

    /// Mutable property model
    pub fn property_model_mut(&mut self) -> &mut PropertyModel {
        &mut self.property_model
    }

    /// The data
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Mutable data
    pub fn data_mut(&mut self) -> &mut Data {
        &mut self.data
    }

    /// Add `individual classType class`, guarded against this ontology's classes
    pub fn add_class_type(&mut self, individual: &Individual, class: &Class) -> ValidationResult {
        let result = self.data.add_class_type(&self.class_model, individual, class);
        if result.is_accepted() {
            self.class_model.add_class(class.clone());
        }
        result
    }

    /// Resolve a registered class by canonical name
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] for unknown names
    pub fn resolve_class(&self, name: &str) -> Result<&Class, StoreError> {
        self.class_model
            .class(Fingerprint::of(name.trim()))
            .ok_or_else(|| StoreError::NotFound {
                kind: "class",
                name: name.to_string(),
            })
    }

    /// Resolve a registered property by canonical name
    pub fn resolve_property(&self, name: &str) -> Result<&Property, StoreError> {
        self.property_model
            .property(Fingerprint::of(name.trim()))
            .ok_or_else(|| StoreError::NotFound {
                kind: "property",
                name: name.to_string(),
            })
    }

    /// Resolve a registered individual by canonical name
    pub fn resolve_individual(&self, name: &str) -> Result<&Individual, StoreError> {
        self.data
            .individual(Fingerprint::of(name.trim()))
            .ok_or_else(|| StoreError::NotFound {
                kind: "individual",
                name: name.to_string(),
            })
    }

    /// Display name of any registered resource
    pub fn display_name(&self, id: Fingerprint) -> String {
        if let Some(class) = self.class_model.class(id) {
            return class.name().to_string();
        }
        if let Some(property) = self.property_model.property(id) {
            return property.name().to_string();
        }
        if let Some(value) = self.data.value(id) {
            return value.name();
        }
        if let Some(value) = self.class_model.operand(id) {
            return value.name();
        }
        id.to_string()
    }

    /// New ontology with everything from both; `self`'s name and guards are kept
    pub fn union(&self, other: &Ontology) -> Ontology {
        self.combine(
            self.class_model.union(&other.class_model),
            self.property_model.union(&other.property_model),
            self.data.union(&other.data),
        )
    }

    /// New ontology with what both have in common
    pub fn intersect(&self, other: &Ontology) -> Ontology {
        self.combine(
            self.class_model.intersect(&other.class_model),
            self.property_model.intersect(&other.property_model),
            self.data.intersect(&other.data),
        )
    }

    /// New ontology with what `self` has and `other` lacks
    pub fn difference(&self, other: &Ontology) -> Ontology {
        self.combine(
            self.class_model.difference(&other.class_model),
            self.property_model.difference(&other.property_model),
            self.data.difference(&other.data),
        )
    }

    fn combine(&self, class_model: ClassModel, property_model: PropertyModel, data: Data) -> Ontology {
        Ontology {
            id: self.id,
            name: self.name.clone(),
            class_model,
            property_model,
            data,
        }
    }

    /// Purge every inferred entry in every taxonomy
    pub fn clear_inferred(&mut self) -> usize {
        let purged =
            self.class_model.clear_inferred() + self.property_model.clear_inferred() + self.data.clear_inferred();
        tracing::debug!(ontology = %self.name, purged, "Inferred entries cleared");
        purged
    }

    /// Resource and entry counts
    pub fn stats(&self) -> OntologyStats {
        OntologyStats::collect(self)
    }
}
