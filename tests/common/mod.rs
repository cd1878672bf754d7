//! Shared utilities for the conformance matrix
//!
//! The matrix in `tests/required_elements_matrix.json` lists, for every
//! element kind and schema version, how an element is populated and what the
//! validator is expected to answer.

use sbml_completeness::{
    Compartment, CompartmentType, Constraint, Delay, Element, ElementKind, Event, EventAssignment,
    FunctionDefinition, InitialAssignment, KineticLaw, Math, Model, ModifierSpeciesReference,
    Parameter, Reaction, Rule, SchemaVersion, Species, SpeciesReference, SpeciesType,
    StoichiometryMath, Trigger, Unit, UnitDefinition,
};
use serde::Deserialize;
use std::fs;

pub const MATRIX_PATH: &str = "tests/required_elements_matrix.json";

/// Something to add to a freshly constructed element before checking it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Populate {
    Math,
    Trigger,
    EventAssignment,
    Compartment,
    Species,
    Reaction,
    Unit,
}

/// Configuration failures a case can expect instead of an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Failure {
    MissingRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Expected {
    Complete(bool),
    Failure(Failure),
}

/// One row of the matrix
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixCase {
    pub kind: String,
    pub level: u32,
    pub version: u32,
    #[serde(default)]
    pub populate: Vec<Populate>,
    pub expected: Expected,
}

impl MatrixCase {
    /// Test name, e.g. `Model::L1V1::compartment+species`
    pub fn name(&self) -> String {
        let populated = if self.populate.is_empty() {
            "fresh".to_string()
        } else {
            self.populate
                .iter()
                .map(|p| format!("{:?}", p).to_lowercase())
                .collect::<Vec<_>>()
                .join("+")
        };
        format!("{}::L{}V{}::{}", self.kind, self.level, self.version, populated)
    }
}

#[derive(Debug, Deserialize)]
struct MatrixFile {
    cases: Vec<MatrixCase>,
}

/// Load every case from the matrix file
pub fn load_matrix() -> Vec<MatrixCase> {
    let content = fs::read_to_string(MATRIX_PATH)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", MATRIX_PATH, e));
    let file: MatrixFile = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", MATRIX_PATH, e));
    file.cases
}

pub fn parse_kind(name: &str) -> Option<ElementKind> {
    ElementKind::ALL.into_iter().find(|k| k.name() == name)
}

fn unsupported(kind: ElementKind, what: Populate) -> String {
    format!("{:?} cannot be added to {}", what, kind)
}

/// Construct an element of `kind` at `version` and apply `populate`
pub fn build_element(
    kind: ElementKind,
    version: SchemaVersion,
    populate: &[Populate],
) -> Result<Box<dyn Element>, String> {
    let math = || Math::new("x + 1");

    let element: Box<dyn Element> = match kind {
        ElementKind::Model => {
            let mut m = Model::new(version);
            for p in populate {
                match p {
                    Populate::Compartment => {
                        m.create_compartment();
                    }
                    Populate::Species => {
                        m.create_species();
                    }
                    Populate::Reaction => {
                        m.create_reaction();
                    }
                    other => return Err(unsupported(kind, *other)),
                }
            }
            Box::new(m)
        }
        ElementKind::UnitDefinition => {
            let mut ud = UnitDefinition::new(version);
            for p in populate {
                match p {
                    Populate::Unit => {
                        ud.create_unit();
                    }
                    other => return Err(unsupported(kind, *other)),
                }
            }
            Box::new(ud)
        }
        ElementKind::Event => {
            let mut e = Event::new(version);
            for p in populate {
                match p {
                    Populate::Trigger => {
                        e.create_trigger();
                    }
                    Populate::EventAssignment => {
                        e.create_event_assignment();
                    }
                    other => return Err(unsupported(kind, *other)),
                }
            }
            Box::new(e)
        }
        _ => {
            let with_math = match populate {
                [] => false,
                [Populate::Math] => true,
                [other, ..] => return Err(unsupported(kind, *other)),
            };
            math_or_plain(kind, version, with_math.then(math))?
        }
    };
    Ok(element)
}

fn math_or_plain(
    kind: ElementKind,
    version: SchemaVersion,
    math: Option<Math>,
) -> Result<Box<dyn Element>, String> {
    macro_rules! with_math {
        ($ty:expr) => {{
            let mut e = $ty;
            if let Some(m) = math {
                e.set_math(m);
            }
            Box::new(e) as Box<dyn Element>
        }};
    }

    let has_math = math.is_some();
    let plain = |e: Box<dyn Element>| {
        if has_math {
            Err(unsupported(kind, Populate::Math))
        } else {
            Ok(e)
        }
    };

    match kind {
        ElementKind::AlgebraicRule => Ok(with_math!(Rule::algebraic(version))),
        ElementKind::AssignmentRule => Ok(with_math!(Rule::assignment(version))),
        ElementKind::RateRule => Ok(with_math!(Rule::rate(version))),
        ElementKind::Constraint => Ok(with_math!(Constraint::new(version))),
        ElementKind::Delay => Ok(with_math!(Delay::new(version))),
        ElementKind::EventAssignment => Ok(with_math!(EventAssignment::new(version))),
        ElementKind::FunctionDefinition => Ok(with_math!(FunctionDefinition::new(version))),
        ElementKind::InitialAssignment => Ok(with_math!(InitialAssignment::new(version))),
        ElementKind::KineticLaw => Ok(with_math!(KineticLaw::new(version))),
        ElementKind::StoichiometryMath => Ok(with_math!(StoichiometryMath::new(version))),
        ElementKind::Trigger => Ok(with_math!(Trigger::new(version))),
        ElementKind::Compartment => plain(Box::new(Compartment::new(version))),
        ElementKind::CompartmentType => plain(Box::new(CompartmentType::new(version))),
        ElementKind::ModifierSpeciesReference => {
            plain(Box::new(ModifierSpeciesReference::new(version)))
        }
        ElementKind::Parameter => plain(Box::new(Parameter::new(version))),
        ElementKind::Reaction => plain(Box::new(Reaction::new(version))),
        ElementKind::Species => plain(Box::new(Species::new(version))),
        ElementKind::SpeciesReference => plain(Box::new(SpeciesReference::new(version))),
        ElementKind::SpeciesType => plain(Box::new(SpeciesType::new(version))),
        ElementKind::Unit => plain(Box::new(Unit::new(version))),
        ElementKind::Model | ElementKind::UnitDefinition | ElementKind::Event => {
            Err(format!("{} is built with its children", kind))
        }
    }
}
