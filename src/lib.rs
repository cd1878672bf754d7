//! # sbml-completeness
//!
//! Required-elements validation for SBML element trees.
//!
//! SBML documents are declared against a (Level, Version) pair, and which
//! children an element must carry depends on that pair. A Level 1 Version 1
//! model needs a compartment, a species and a reaction; a Level 2 model
//! needs nothing at the container level; a Level 2 unit definition needs at
//! least one unit while a Level 1 one does not. This crate answers one
//! question per element: are its structurally required children present
//! for its declared schema version?
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Literal rule matrix covering L1V1 through L3V1
//! - Gap and overlap checking when a rule table is built
//! - Lock-free sharing of the standard table across threads
//! - Tree-wide reports of incomplete elements
//!
//! ## Example
//!
//! ```
//! use sbml_completeness::{Model, RequiredElements, SchemaVersion};
//!
//! # fn main() -> sbml_completeness::Result<()> {
//! let mut model = Model::new(SchemaVersion::new(1, 1));
//! assert!(!model.has_required_elements()?);
//!
//! model.create_compartment();
//! model.create_species();
//! model.create_reaction();
//! assert!(model.has_required_elements()?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod model;
pub mod rules;
pub mod validator;
pub mod version;

pub use error::{Error, Result};
pub use model::{
    ChildRole, Compartment, CompartmentType, Constraint, Delay, Element, ElementKind, Event,
    EventAssignment, FunctionDefinition, InitialAssignment, KineticLaw, Math, Model,
    ModifierSpeciesReference, Parameter, Reaction, Rule, RuleTarget, RuleType, Species,
    SpeciesReference, SpeciesType, StoichiometryMath, Trigger, Unit, UnitDefinition,
};
pub use rules::{CompletenessRule, Requirement, RuleTable, RuleTableBuilder};
pub use validator::{
    IncompleteElement, RequiredElements, Validator, check_tree, has_required_elements,
};
pub use version::{SchemaVersion, VersionRange};
