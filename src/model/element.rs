//! Read-only presence queries shared by every element

use std::fmt;

use super::kind::ElementKind;
use crate::version::SchemaVersion;

/// Named child slots an element can be asked about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildRole {
    /// Function definitions of a model
    FunctionDefinition,
    /// Unit definitions of a model
    UnitDefinition,
    /// Units of a unit definition
    Unit,
    /// Compartments of a model
    Compartment,
    /// Species of a model
    Species,
    /// Parameters of a model or kinetic law
    Parameter,
    /// Rules of a model, any flavour
    Rule,
    /// Reactions of a model
    Reaction,
    /// Events of a model
    Event,
    /// Reactants of a reaction
    Reactant,
    /// Products of a reaction
    Product,
    /// Modifiers of a reaction
    Modifier,
    /// Kinetic law of a reaction
    KineticLaw,
    /// Stoichiometry math of a species reference
    StoichiometryMath,
    /// Trigger of an event
    Trigger,
    /// Delay of an event
    Delay,
    /// Event assignments of an event
    EventAssignment,
}

impl fmt::Display for ChildRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A math expression attached to an element
///
/// Formula parsing happens elsewhere; this only records the expression so
/// its presence can be observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Math {
    formula: String,
}

impl Math {
    /// Wrap an already-parsed formula
    pub fn new(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
        }
    }

    /// The formula text
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// A blank formula does not count as math
    pub fn is_empty(&self) -> bool {
        self.formula.trim().is_empty()
    }
}

/// Read-only view of an element used by the validator
///
/// Implementors report their kind, their declared schema version and the
/// presence of their children. None of these queries mutate anything.
///
/// # Example
///
/// ```
/// use sbml_completeness::{ChildRole, Element, Model, SchemaVersion};
///
/// let mut model = Model::new(SchemaVersion::L1V2);
/// model.create_compartment();
/// assert_eq!(model.child_count(ChildRole::Compartment), 1);
/// assert!(!model.has_child(ChildRole::Reaction));
/// ```
pub trait Element {
    /// Structural type of this element
    fn kind(&self) -> ElementKind;

    /// (Level, Version) fixed when the element was constructed
    fn schema_version(&self) -> SchemaVersion;

    /// Whether a non-empty math expression is attached
    fn has_math(&self) -> bool {
        false
    }

    /// Number of children in the given slot
    fn child_count(&self, _role: ChildRole) -> usize {
        0
    }

    /// Whether at least one child is present in the given slot
    fn has_child(&self, role: ChildRole) -> bool {
        self.child_count(role) > 0
    }

    /// Markup element name at this element's schema version
    fn element_name(&self) -> &'static str {
        self.kind().element_name(self.schema_version())
    }

    /// Identifier (`id`, or `variable`/`symbol` for assignments) when set
    fn label(&self) -> Option<&str> {
        None
    }

    /// Direct children, in document order
    fn children(&self) -> Vec<&dyn Element> {
        Vec::new()
    }
}

pub(crate) fn math_present(math: &Option<Math>) -> bool {
    math.as_ref().is_some_and(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_math_is_empty() {
        assert!(Math::new("").is_empty());
        assert!(Math::new("  \n").is_empty());
        assert!(!Math::new("a+b").is_empty());
        assert_eq!(Math::new("k1*S1").formula(), "k1*S1");
    }

    #[test]
    fn test_math_present() {
        assert!(!math_present(&None));
        assert!(!math_present(&Some(Math::new(" "))));
        assert!(math_present(&Some(Math::new("ar"))));
    }
}
