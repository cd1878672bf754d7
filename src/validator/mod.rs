//! Required-elements validation
//!
//! The dispatcher resolves an element's kind and declared schema version,
//! looks the pair up in a [`RuleTable`] and evaluates the rule against the
//! element as it currently stands. Nothing is cached: callers are expected
//! to add children and ask again.
//!
//! A `false` answer means "not complete yet". An `Err` means the table has
//! no rule for the element, which is a configuration defect.

mod tree;

pub use tree::IncompleteElement;

use crate::error::Result;
use crate::model::Element;
use crate::rules::RuleTable;

/// Evaluates elements against a rule table
///
/// # Example
///
/// ```
/// use sbml_completeness::{Math, SchemaVersion, Trigger, Validator};
///
/// # fn main() -> sbml_completeness::Result<()> {
/// let validator = Validator::standard()?;
/// let mut trigger = Trigger::new(SchemaVersion::new(2, 4));
/// assert!(!validator.has_required_elements(&trigger)?);
///
/// trigger.set_math(Math::new("time > 5"));
/// assert!(validator.has_required_elements(&trigger)?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Validator<'t> {
    table: &'t RuleTable,
}

impl Validator<'static> {
    /// Validator backed by the shared standard table
    pub fn standard() -> Result<Self> {
        Ok(Self {
            table: RuleTable::standard()?,
        })
    }
}

impl<'t> Validator<'t> {
    /// Validator backed by a caller-supplied table
    pub fn with_table(table: &'t RuleTable) -> Self {
        Self { table }
    }

    /// The table rules are looked up in
    pub fn table(&self) -> &'t RuleTable {
        self.table
    }

    /// Whether every child required at the element's schema version is present
    ///
    /// # Errors
    ///
    /// `MissingRule` when the table has no rule for the element's kind at
    /// its declared version.
    pub fn has_required_elements(&self, element: &dyn Element) -> Result<bool> {
        let rule = self
            .table
            .rule_for(element.kind(), element.schema_version())?;
        Ok(rule.requirement().is_satisfied_by(element))
    }

    /// Walk `root` and everything below it, reporting each incomplete element
    ///
    /// Elements are visited in document order, parents before children.
    /// The walk stops at the first element the table has no rule for.
    pub fn check_tree(&self, root: &dyn Element) -> Result<Vec<IncompleteElement>> {
        let mut found = Vec::new();
        tree::walk(self.table, root, &mut Vec::new(), &mut found)?;
        Ok(found)
    }
}

/// Check one element against the standard table
pub fn has_required_elements(element: &dyn Element) -> Result<bool> {
    Validator::standard()?.has_required_elements(element)
}

/// Check a whole tree against the standard table
pub fn check_tree(root: &dyn Element) -> Result<Vec<IncompleteElement>> {
    Validator::standard()?.check_tree(root)
}

/// Method-call form of [`has_required_elements`] for every element type
///
/// ```
/// use sbml_completeness::{Model, RequiredElements, SchemaVersion};
///
/// let mut model = Model::new(SchemaVersion::new(1, 2));
/// assert_eq!(model.has_required_elements(), Ok(false));
/// model.create_compartment();
/// assert_eq!(model.has_required_elements(), Ok(true));
/// ```
pub trait RequiredElements {
    /// Whether every child required at this element's schema version is present
    fn has_required_elements(&self) -> Result<bool>;
}

impl<T: Element> RequiredElements for T {
    fn has_required_elements(&self) -> Result<bool> {
        has_required_elements(self)
    }
}

impl RequiredElements for dyn Element + '_ {
    fn has_required_elements(&self) -> Result<bool> {
        has_required_elements(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{ElementKind, Event, Math, Model, StoichiometryMath};
    use crate::rules::{Requirement, standard_builder};
    use crate::version::{SchemaVersion, VersionRange};

    #[test]
    fn test_event_sequence() {
        let validator = Validator::standard().unwrap();
        let mut event = Event::new(SchemaVersion::L2V4);
        assert!(!validator.has_required_elements(&event).unwrap());

        event.create_trigger();
        assert!(!validator.has_required_elements(&event).unwrap());

        event.create_event_assignment();
        assert!(validator.has_required_elements(&event).unwrap());
    }

    #[test]
    fn test_unavailable_kind_is_configuration_error() {
        let sm = StoichiometryMath::new(SchemaVersion::L3V1);
        let err = has_required_elements(&sm).unwrap_err();
        assert_eq!(
            err,
            Error::MissingRule {
                kind: ElementKind::StoichiometryMath,
                version: SchemaVersion::L3V1,
            }
        );
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_custom_table() {
        // Stricter Level 2 matrix: models need at least one compartment
        let table = standard_builder()
            .with_supported_versions([SchemaVersion::L2V4])
            .build()
            .unwrap();
        let strict = RuleTable::builder()
            .with_supported_versions([SchemaVersion::L2V4])
            .rule(
                ElementKind::Model,
                VersionRange::from_version(SchemaVersion::L2V1),
                Requirement::Child(crate::model::ChildRole::Compartment),
            );
        let strict = ElementKind::ALL
            .into_iter()
            .filter(|k| *k != ElementKind::Model)
            .flat_map(|k| table.rules_for_kind(k).to_vec())
            .fold(strict, |b, r| b.rule(r.kind(), r.range(), r.requirement().clone()))
            .build()
            .unwrap();

        let model = Model::new(SchemaVersion::L2V4);
        assert!(Validator::with_table(&table).has_required_elements(&model).unwrap());
        assert!(!Validator::with_table(&strict).has_required_elements(&model).unwrap());
    }

    #[test]
    fn test_extension_trait_on_trait_object() {
        let mut model = Model::new(SchemaVersion::L2V4);
        model.create_reaction().create_kinetic_law();
        let element: &dyn Element = &model;
        assert_eq!(element.has_required_elements(), Ok(true));
    }

    #[test]
    fn test_math_blank_formula_not_enough() {
        let mut law = crate::model::KineticLaw::new(SchemaVersion::L2V4);
        law.set_math(Math::new("   "));
        assert_eq!(law.has_required_elements(), Ok(false));
        law.set_math(Math::new("k1 * S1"));
        assert_eq!(law.has_required_elements(), Ok(true));
    }
}
