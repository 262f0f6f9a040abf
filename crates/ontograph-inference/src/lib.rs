//! Ontograph Membership Inference
//!
//! Evaluates class expressions against an ontology and enlists their members.
//!
//! # Overview
//!
//! Membership is computed by dispatching on the kind of the class:
//! - **Literal classes**: data-range literals, every literal, or typed literals of a datatype
//! - **Plain classes**: individuals typed with the class, a subclass or an equivalent
//! - **Composites**: union, intersection and complement of operand members
//! - **Enumerations**: the listed individuals and their synonyms
//! - **Restrictions**: subjects whose assertions satisfy the constraint
//!
//! Every evaluation runs against the ontology merged with the [`Foundation`],
//! so reserved datatypes resolve. The caller's ontology is never modified.
//!
//! # Usage
//!
//! ```
//! use ontograph_domain::{Class, Individual};
//! use ontograph_inference::MembershipReasoner;
//! use ontograph_store::{Foundation, Ontology};
//!
//! let foundation = Foundation::new();
//! let reasoner = MembershipReasoner::new(&foundation);
//!
//! let mut ontology = Ontology::new("ex:pets").unwrap();
//! let dog = Class::plain("ex:Dog").unwrap();
//! let puppy = Class::plain("ex:Puppy").unwrap();
//! let rex = Individual::new("ex:rex").unwrap();
//! ontology.class_model_mut().add_subclass_of(&puppy, &dog);
//! ontology.add_class_type(&rex, &puppy);
//!
//! assert!(reasoner.is_member_of(&ontology, rex.id(), dog.id()));
//! ```
//!
//! [`Foundation`]: ontograph_store::Foundation

#![warn(missing_docs)]

mod reasoner;
mod restriction;

pub use reasoner::MembershipReasoner;
