//! Math-carrying model components: rules, constraints, function definitions
//! and initial assignments

use super::element::{Element, Math, math_present};
use super::kind::ElementKind;
use crate::version::SchemaVersion;

/// Flavour of a [`Rule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleType {
    /// `0 = f(x)`
    Algebraic,
    /// `x = f(y)`
    Assignment,
    /// `dx/dt = f(y)`
    Rate,
}

/// Class of symbol a Level 1 assignment or rate rule targets
///
/// Level 1 has one element per target class (`compartmentVolumeRule`,
/// `specieConcentrationRule`, `parameterRule`) and tells assignment from
/// rate through a `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleTarget {
    /// `compartmentVolumeRule`
    Compartment,
    /// `specieConcentrationRule` (L1V1) or `speciesConcentrationRule` (L1V2)
    Species,
    /// `parameterRule`
    Parameter,
}

/// A rule of any flavour
///
/// The flavour decides the reported [`ElementKind`]; all three carry the
/// same content.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    version: SchemaVersion,
    rule_type: RuleType,
    /// Target symbol of an assignment or rate rule
    pub variable: Option<String>,
    /// Class of `variable`, which names the element in Level 1
    pub target: Option<RuleTarget>,
    math: Option<Math>,
}

impl Rule {
    /// Create a rule of the given flavour without math
    pub fn new(rule_type: RuleType, version: SchemaVersion) -> Self {
        Self {
            version,
            rule_type,
            variable: None,
            target: None,
            math: None,
        }
    }

    /// Shorthand for `Rule::new(RuleType::Algebraic, version)`
    pub fn algebraic(version: SchemaVersion) -> Self {
        Self::new(RuleType::Algebraic, version)
    }

    /// Shorthand for `Rule::new(RuleType::Assignment, version)`
    pub fn assignment(version: SchemaVersion) -> Self {
        Self::new(RuleType::Assignment, version)
    }

    /// Shorthand for `Rule::new(RuleType::Rate, version)`
    pub fn rate(version: SchemaVersion) -> Self {
        Self::new(RuleType::Rate, version)
    }

    /// Flavour of this rule
    pub fn rule_type(&self) -> RuleType {
        self.rule_type
    }

    /// Attached math expression
    pub fn math(&self) -> Option<&Math> {
        self.math.as_ref()
    }

    /// Attach or replace the math expression
    pub fn set_math(&mut self, math: Math) {
        self.math = Some(math);
    }

    /// Detach the math expression
    pub fn unset_math(&mut self) {
        self.math = None;
    }
}

impl Element for Rule {
    fn kind(&self) -> ElementKind {
        match self.rule_type {
            RuleType::Algebraic => ElementKind::AlgebraicRule,
            RuleType::Assignment => ElementKind::AssignmentRule,
            RuleType::Rate => ElementKind::RateRule,
        }
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn has_math(&self) -> bool {
        math_present(&self.math)
    }

    fn label(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    fn element_name(&self) -> &'static str {
        if self.version.level() != 1 || self.rule_type == RuleType::Algebraic {
            return self.kind().element_name(self.version);
        }
        match self.target {
            Some(RuleTarget::Compartment) => "compartmentVolumeRule",
            Some(RuleTarget::Species) if self.version == SchemaVersion::L1V1 => {
                "specieConcentrationRule"
            }
            Some(RuleTarget::Species) => "speciesConcentrationRule",
            Some(RuleTarget::Parameter) => "parameterRule",
            None => self.kind().element_name(self.version),
        }
    }
}

/// A named, reusable lambda expression
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    version: SchemaVersion,
    /// Identifier
    pub id: Option<String>,
    math: Option<Math>,
}

impl FunctionDefinition {
    /// Create a function definition without math
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            id: None,
            math: None,
        }
    }

    /// Attached lambda expression
    pub fn math(&self) -> Option<&Math> {
        self.math.as_ref()
    }

    /// Attach or replace the lambda expression
    pub fn set_math(&mut self, math: Math) {
        self.math = Some(math);
    }

    /// Detach the lambda expression
    pub fn unset_math(&mut self) {
        self.math = None;
    }
}

impl Element for FunctionDefinition {
    fn kind(&self) -> ElementKind {
        ElementKind::FunctionDefinition
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn has_math(&self) -> bool {
        math_present(&self.math)
    }

    fn label(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Value assigned to a symbol at time zero
#[derive(Debug, Clone, PartialEq)]
pub struct InitialAssignment {
    version: SchemaVersion,
    /// Assigned symbol
    pub symbol: Option<String>,
    math: Option<Math>,
}

impl InitialAssignment {
    /// Create an initial assignment without math
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            symbol: None,
            math: None,
        }
    }

    /// Attached math expression
    pub fn math(&self) -> Option<&Math> {
        self.math.as_ref()
    }

    /// Attach or replace the math expression
    pub fn set_math(&mut self, math: Math) {
        self.math = Some(math);
    }

    /// Detach the math expression
    pub fn unset_math(&mut self) {
        self.math = None;
    }
}

impl Element for InitialAssignment {
    fn kind(&self) -> ElementKind {
        ElementKind::InitialAssignment
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn has_math(&self) -> bool {
        math_present(&self.math)
    }

    fn label(&self) -> Option<&str> {
        self.symbol.as_deref()
    }
}

math_only_element! {
    /// Boolean condition the model must satisfy during simulation
    Constraint => Constraint
}
