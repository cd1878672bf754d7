//! Element kinds and the schema window each one exists in

use std::fmt;

use crate::version::{SchemaVersion, VersionRange};

/// Structural type of an SBML element
///
/// The three rule flavours are separate kinds because each is its own
/// element in Level 2 and later markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementKind {
    /// `<model>`
    Model,
    /// `<functionDefinition>`
    FunctionDefinition,
    /// `<unitDefinition>`
    UnitDefinition,
    /// `<unit>`
    Unit,
    /// `<compartmentType>`
    CompartmentType,
    /// `<speciesType>`
    SpeciesType,
    /// `<compartment>`
    Compartment,
    /// `<species>`
    Species,
    /// `<parameter>`
    Parameter,
    /// `<initialAssignment>`
    InitialAssignment,
    /// `<algebraicRule>`
    AlgebraicRule,
    /// `<assignmentRule>`
    AssignmentRule,
    /// `<rateRule>`
    RateRule,
    /// `<constraint>`
    Constraint,
    /// `<reaction>`
    Reaction,
    /// `<speciesReference>` (reactant or product)
    SpeciesReference,
    /// `<modifierSpeciesReference>`
    ModifierSpeciesReference,
    /// `<kineticLaw>`
    KineticLaw,
    /// `<stoichiometryMath>`
    StoichiometryMath,
    /// `<event>`
    Event,
    /// `<trigger>`
    Trigger,
    /// `<delay>`
    Delay,
    /// `<eventAssignment>`
    EventAssignment,
}

impl ElementKind {
    /// Every element kind, in document order
    pub const ALL: [ElementKind; 23] = [
        ElementKind::Model,
        ElementKind::FunctionDefinition,
        ElementKind::UnitDefinition,
        ElementKind::Unit,
        ElementKind::CompartmentType,
        ElementKind::SpeciesType,
        ElementKind::Compartment,
        ElementKind::Species,
        ElementKind::Parameter,
        ElementKind::InitialAssignment,
        ElementKind::AlgebraicRule,
        ElementKind::AssignmentRule,
        ElementKind::RateRule,
        ElementKind::Constraint,
        ElementKind::Reaction,
        ElementKind::SpeciesReference,
        ElementKind::ModifierSpeciesReference,
        ElementKind::KineticLaw,
        ElementKind::StoichiometryMath,
        ElementKind::Event,
        ElementKind::Trigger,
        ElementKind::Delay,
        ElementKind::EventAssignment,
    ];

    /// Kinds whose only required substructure is a math expression
    pub const MATH_BEARING: [ElementKind; 11] = [
        ElementKind::AlgebraicRule,
        ElementKind::AssignmentRule,
        ElementKind::RateRule,
        ElementKind::Constraint,
        ElementKind::Delay,
        ElementKind::EventAssignment,
        ElementKind::FunctionDefinition,
        ElementKind::InitialAssignment,
        ElementKind::KineticLaw,
        ElementKind::StoichiometryMath,
        ElementKind::Trigger,
    ];

    /// Get a human-readable name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Model => "Model",
            ElementKind::FunctionDefinition => "FunctionDefinition",
            ElementKind::UnitDefinition => "UnitDefinition",
            ElementKind::Unit => "Unit",
            ElementKind::CompartmentType => "CompartmentType",
            ElementKind::SpeciesType => "SpeciesType",
            ElementKind::Compartment => "Compartment",
            ElementKind::Species => "Species",
            ElementKind::Parameter => "Parameter",
            ElementKind::InitialAssignment => "InitialAssignment",
            ElementKind::AlgebraicRule => "AlgebraicRule",
            ElementKind::AssignmentRule => "AssignmentRule",
            ElementKind::RateRule => "RateRule",
            ElementKind::Constraint => "Constraint",
            ElementKind::Reaction => "Reaction",
            ElementKind::SpeciesReference => "SpeciesReference",
            ElementKind::ModifierSpeciesReference => "ModifierSpeciesReference",
            ElementKind::KineticLaw => "KineticLaw",
            ElementKind::StoichiometryMath => "StoichiometryMath",
            ElementKind::Event => "Event",
            ElementKind::Trigger => "Trigger",
            ElementKind::Delay => "Delay",
            ElementKind::EventAssignment => "EventAssignment",
        }
    }

    /// Get the markup element name used at `version`
    ///
    /// Level 1 Version 1 spells species as `specie`. Level 1 names its
    /// assignment and rate rules after the target's class, which the kind
    /// alone does not know, so the Level 2 names are returned for them;
    /// [`Rule`](crate::model::Rule) refines this through
    /// [`Element::element_name`](crate::model::Element::element_name).
    pub fn element_name(&self, version: SchemaVersion) -> &'static str {
        match self {
            ElementKind::Model => "model",
            ElementKind::FunctionDefinition => "functionDefinition",
            ElementKind::UnitDefinition => "unitDefinition",
            ElementKind::Unit => "unit",
            ElementKind::CompartmentType => "compartmentType",
            ElementKind::SpeciesType => "speciesType",
            ElementKind::Compartment => "compartment",
            ElementKind::Species if version == SchemaVersion::L1V1 => "specie",
            ElementKind::Species => "species",
            ElementKind::Parameter => "parameter",
            ElementKind::InitialAssignment => "initialAssignment",
            ElementKind::AlgebraicRule => "algebraicRule",
            ElementKind::AssignmentRule => "assignmentRule",
            ElementKind::RateRule => "rateRule",
            ElementKind::Constraint => "constraint",
            ElementKind::Reaction => "reaction",
            ElementKind::SpeciesReference if version == SchemaVersion::L1V1 => "specieReference",
            ElementKind::SpeciesReference => "speciesReference",
            ElementKind::ModifierSpeciesReference => "modifierSpeciesReference",
            ElementKind::KineticLaw => "kineticLaw",
            ElementKind::StoichiometryMath => "stoichiometryMath",
            ElementKind::Event => "event",
            ElementKind::Trigger => "trigger",
            ElementKind::Delay => "delay",
            ElementKind::EventAssignment => "eventAssignment",
        }
    }

    /// The versions in which this kind is part of the format
    ///
    /// Open-ended windows run through the newest supported version.
    pub fn availability(&self) -> VersionRange {
        match self {
            ElementKind::Model
            | ElementKind::UnitDefinition
            | ElementKind::Unit
            | ElementKind::Compartment
            | ElementKind::Species
            | ElementKind::Parameter
            | ElementKind::AlgebraicRule
            | ElementKind::AssignmentRule
            | ElementKind::RateRule
            | ElementKind::Reaction
            | ElementKind::SpeciesReference
            | ElementKind::KineticLaw => VersionRange::from_version(SchemaVersion::L1V1),

            ElementKind::FunctionDefinition
            | ElementKind::ModifierSpeciesReference
            | ElementKind::Event
            | ElementKind::Trigger
            | ElementKind::Delay
            | ElementKind::EventAssignment => VersionRange::from_version(SchemaVersion::L2V1),

            // Dropped again in Level 3
            ElementKind::StoichiometryMath => {
                VersionRange::between(SchemaVersion::L2V1, SchemaVersion::L2V5)
            }
            ElementKind::CompartmentType | ElementKind::SpeciesType => {
                VersionRange::between(SchemaVersion::L2V2, SchemaVersion::L2V5)
            }

            ElementKind::InitialAssignment | ElementKind::Constraint => {
                VersionRange::from_version(SchemaVersion::L2V2)
            }
        }
    }

    /// Whether this kind exists at `version`
    pub fn is_available_in(&self, version: SchemaVersion) -> bool {
        self.availability().contains(version)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
