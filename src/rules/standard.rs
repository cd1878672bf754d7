//! The required-elements matrix of the published SBML Levels and Versions
//!
//! Each entry below is written out for the versions it applies to. The
//! history of the format has no closed form: Level 1 Version 1 models needed
//! compartments, species and reactions, Level 1 Version 2 only compartments,
//! and Level 2 dropped the container requirement altogether while unit
//! definitions went the other way.

use std::sync::OnceLock;

use super::requirement::Requirement;
use super::table::{RuleTable, RuleTableBuilder};
use crate::error::Result;
use crate::model::{ChildRole, ElementKind};
use crate::version::{SchemaVersion as V, VersionRange};

/// Kinds that never require a child, over their whole availability
const SELF_SUFFICIENT: [ElementKind; 9] = [
    ElementKind::Compartment,
    ElementKind::CompartmentType,
    ElementKind::ModifierSpeciesReference,
    ElementKind::Parameter,
    ElementKind::Reaction,
    ElementKind::Species,
    ElementKind::SpeciesReference,
    ElementKind::SpeciesType,
    ElementKind::Unit,
];

/// Builder pre-loaded with the standard matrix
///
/// Useful as a starting point for narrowed tables, e.g. a table restricted to
/// Level 2 via [`RuleTableBuilder::with_supported_versions`].
pub fn standard_builder() -> RuleTableBuilder {
    RuleTableBuilder::new()
        .rule_over_availability(ElementKind::MATH_BEARING, Requirement::Math)
        .rule_over_availability(SELF_SUFFICIENT, Requirement::Nothing)
        // Model
        .rule(
            ElementKind::Model,
            VersionRange::only(V::L1V1),
            Requirement::AllOf(vec![
                Requirement::Child(ChildRole::Compartment),
                Requirement::Child(ChildRole::Species),
                Requirement::Child(ChildRole::Reaction),
            ]),
        )
        .rule(
            ElementKind::Model,
            VersionRange::only(V::L1V2),
            Requirement::Child(ChildRole::Compartment),
        )
        .rule(
            ElementKind::Model,
            VersionRange::from_version(V::L2V1),
            Requirement::Nothing,
        )
        // UnitDefinition
        .rule(
            ElementKind::UnitDefinition,
            VersionRange::between(V::L1V1, V::L1V2),
            Requirement::Nothing,
        )
        .rule(
            ElementKind::UnitDefinition,
            VersionRange::from_version(V::L2V1),
            Requirement::Child(ChildRole::Unit),
        )
        // Event: assignments optional from Level 3
        .rule(
            ElementKind::Event,
            VersionRange::between(V::L2V1, V::L2V5),
            Requirement::AllOf(vec![
                Requirement::Child(ChildRole::Trigger),
                Requirement::Child(ChildRole::EventAssignment),
            ]),
        )
        .rule(
            ElementKind::Event,
            VersionRange::from_version(V::L3V1),
            Requirement::Child(ChildRole::Trigger),
        )
}

static STANDARD: OnceLock<Result<RuleTable>> = OnceLock::new();

impl RuleTable {
    /// The process-wide table for the published matrix
    ///
    /// Built once on first use and shared read-only afterwards.
    ///
    /// # Errors
    ///
    /// A configuration error from [`RuleTableBuilder::build`]; this would be
    /// a defect in the matrix above and is returned on every call.
    pub fn standard() -> Result<&'static RuleTable> {
        STANDARD
            .get_or_init(|| standard_builder().build())
            .as_ref()
            .map_err(|e| e.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_builds() {
        let table = RuleTable::standard().unwrap();
        assert_eq!(table.supported_versions(), &V::SUPPORTED);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_standard_table_is_shared() {
        let a = RuleTable::standard().unwrap();
        let b = RuleTable::standard().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_every_available_pair_resolves() {
        let table = RuleTable::standard().unwrap();
        for kind in ElementKind::ALL {
            for version in V::SUPPORTED {
                let found = table.rule_for(kind, version);
                assert_eq!(
                    found.is_ok(),
                    kind.is_available_in(version),
                    "{} at {}",
                    kind,
                    version
                );
            }
        }
    }

    #[test]
    fn test_math_kinds_are_version_invariant() {
        let table = RuleTable::standard().unwrap();
        for kind in ElementKind::MATH_BEARING {
            let rules = table.rules_for_kind(kind);
            assert_eq!(rules.len(), 1, "{}", kind);
            assert_eq!(rules[0].requirement(), &Requirement::Math);
        }
    }

    #[test]
    fn test_model_matrix() {
        let table = RuleTable::standard().unwrap();
        let model = |v| table.rule_for(ElementKind::Model, v).unwrap().requirement();

        assert!(matches!(model(V::L1V1), Requirement::AllOf(parts) if parts.len() == 3));
        assert_eq!(model(V::L1V2), &Requirement::Child(ChildRole::Compartment));
        for v in [V::L2V1, V::L2V4, V::L3V1] {
            assert_eq!(model(v), &Requirement::Nothing);
        }
    }

    #[test]
    fn test_narrowed_standard_table() {
        let table = standard_builder()
            .with_supported_versions([V::L2V4])
            .build()
            .unwrap();
        assert!(table.rule_for(ElementKind::Model, V::L2V4).is_ok());
        assert!(table.rule_for(ElementKind::Model, V::L1V1).is_err());
    }
}
