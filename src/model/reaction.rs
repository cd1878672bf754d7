//! Reactions and their participants

use super::core::{Parameter, check_child_version, push_new};
use super::element::{ChildRole, Element, Math, math_present};
use super::kind::ElementKind;
use crate::error::Result;
use crate::version::SchemaVersion;

/// A process converting reactants into products
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    version: SchemaVersion,
    /// Identifier
    pub id: Option<String>,
    /// Whether the reaction can run in both directions
    pub reversible: bool,
    reactants: Vec<SpeciesReference>,
    products: Vec<SpeciesReference>,
    modifiers: Vec<ModifierSpeciesReference>,
    kinetic_law: Option<KineticLaw>,
}

impl Reaction {
    /// Create a reaction with no participants
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            id: None,
            reversible: true,
            reactants: Vec::new(),
            products: Vec::new(),
            modifiers: Vec::new(),
            kinetic_law: None,
        }
    }

    /// Reactants in document order
    pub fn reactants(&self) -> &[SpeciesReference] {
        &self.reactants
    }

    /// Products in document order
    pub fn products(&self) -> &[SpeciesReference] {
        &self.products
    }

    /// Modifiers in document order
    pub fn modifiers(&self) -> &[ModifierSpeciesReference] {
        &self.modifiers
    }

    /// The kinetic law, if one has been set
    pub fn kinetic_law(&self) -> Option<&KineticLaw> {
        self.kinetic_law.as_ref()
    }

    /// Create a reactant with this reaction's version
    pub fn create_reactant(&mut self) -> &mut SpeciesReference {
        push_new(&mut self.reactants, SpeciesReference::new(self.version))
    }

    /// Create a product with this reaction's version
    pub fn create_product(&mut self) -> &mut SpeciesReference {
        push_new(&mut self.products, SpeciesReference::new(self.version))
    }

    /// Create a modifier with this reaction's version
    pub fn create_modifier(&mut self) -> &mut ModifierSpeciesReference {
        push_new(
            &mut self.modifiers,
            ModifierSpeciesReference::new(self.version),
        )
    }

    /// Replace the kinetic law with an empty one and return it
    pub fn create_kinetic_law(&mut self) -> &mut KineticLaw {
        self.kinetic_law.insert(KineticLaw::new(self.version))
    }

    /// Attach an existing reactant
    pub fn add_reactant(&mut self, child: SpeciesReference) -> Result<()> {
        check_child_version(ElementKind::Reaction, self.version, &child)?;
        self.reactants.push(child);
        Ok(())
    }

    /// Attach an existing product
    pub fn add_product(&mut self, child: SpeciesReference) -> Result<()> {
        check_child_version(ElementKind::Reaction, self.version, &child)?;
        self.products.push(child);
        Ok(())
    }

    /// Attach an existing modifier
    pub fn add_modifier(&mut self, child: ModifierSpeciesReference) -> Result<()> {
        check_child_version(ElementKind::Reaction, self.version, &child)?;
        self.modifiers.push(child);
        Ok(())
    }

    /// Set the kinetic law
    pub fn set_kinetic_law(&mut self, law: KineticLaw) -> Result<()> {
        check_child_version(ElementKind::Reaction, self.version, &law)?;
        self.kinetic_law = Some(law);
        Ok(())
    }
}

impl Element for Reaction {
    fn kind(&self) -> ElementKind {
        ElementKind::Reaction
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn child_count(&self, role: ChildRole) -> usize {
        match role {
            ChildRole::Reactant => self.reactants.len(),
            ChildRole::Product => self.products.len(),
            ChildRole::Modifier => self.modifiers.len(),
            ChildRole::KineticLaw => usize::from(self.kinetic_law.is_some()),
            _ => 0,
        }
    }

    fn label(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn children(&self) -> Vec<&dyn Element> {
        let mut out: Vec<&dyn Element> = Vec::new();
        out.extend(self.reactants.iter().map(|r| r as &dyn Element));
        out.extend(self.products.iter().map(|r| r as &dyn Element));
        out.extend(self.modifiers.iter().map(|r| r as &dyn Element));
        if let Some(law) = &self.kinetic_law {
            out.push(law);
        }
        out
    }
}

/// Reactant or product of a reaction
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesReference {
    version: SchemaVersion,
    /// Referenced species
    pub species: Option<String>,
    /// Constant stoichiometry
    pub stoichiometry: Option<f64>,
    stoichiometry_math: Option<StoichiometryMath>,
}

impl SpeciesReference {
    /// Create a species reference
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            species: None,
            stoichiometry: None,
            stoichiometry_math: None,
        }
    }

    /// Variable stoichiometry, Level 2 only
    pub fn stoichiometry_math(&self) -> Option<&StoichiometryMath> {
        self.stoichiometry_math.as_ref()
    }

    /// Set the variable stoichiometry
    pub fn set_stoichiometry_math(&mut self, math: StoichiometryMath) -> Result<()> {
        check_child_version(ElementKind::SpeciesReference, self.version, &math)?;
        self.stoichiometry_math = Some(math);
        Ok(())
    }
}

impl Element for SpeciesReference {
    fn kind(&self) -> ElementKind {
        ElementKind::SpeciesReference
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn child_count(&self, role: ChildRole) -> usize {
        match role {
            ChildRole::StoichiometryMath => usize::from(self.stoichiometry_math.is_some()),
            _ => 0,
        }
    }

    fn label(&self) -> Option<&str> {
        self.species.as_deref()
    }

    fn children(&self) -> Vec<&dyn Element> {
        self.stoichiometry_math
            .iter()
            .map(|m| m as &dyn Element)
            .collect()
    }
}

/// Species that affects a reaction without being consumed or produced
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierSpeciesReference {
    version: SchemaVersion,
    /// Referenced species
    pub species: Option<String>,
}

impl ModifierSpeciesReference {
    /// Create a modifier reference
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            species: None,
        }
    }
}

impl Element for ModifierSpeciesReference {
    fn kind(&self) -> ElementKind {
        ElementKind::ModifierSpeciesReference
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn label(&self) -> Option<&str> {
        self.species.as_deref()
    }
}

/// Rate expression of a reaction, with optional local parameters
///
/// In Level 1 the rate is written as a `formula` attribute; it is stored as
/// math here all the same.
#[derive(Debug, Clone, PartialEq)]
pub struct KineticLaw {
    version: SchemaVersion,
    math: Option<Math>,
    parameters: Vec<Parameter>,
}

impl KineticLaw {
    /// Create a kinetic law without math
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            math: None,
            parameters: Vec::new(),
        }
    }

    /// Attached rate expression
    pub fn math(&self) -> Option<&Math> {
        self.math.as_ref()
    }

    /// Attach or replace the rate expression
    pub fn set_math(&mut self, math: Math) {
        self.math = Some(math);
    }

    /// Detach the rate expression
    pub fn unset_math(&mut self) {
        self.math = None;
    }

    /// Local parameters
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Create a local parameter with this law's version
    pub fn create_parameter(&mut self) -> &mut Parameter {
        push_new(&mut self.parameters, Parameter::new(self.version))
    }

    /// Attach an existing local parameter
    pub fn add_parameter(&mut self, child: Parameter) -> Result<()> {
        check_child_version(ElementKind::KineticLaw, self.version, &child)?;
        self.parameters.push(child);
        Ok(())
    }
}

impl Element for KineticLaw {
    fn kind(&self) -> ElementKind {
        ElementKind::KineticLaw
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn has_math(&self) -> bool {
        math_present(&self.math)
    }

    fn child_count(&self, role: ChildRole) -> usize {
        match role {
            ChildRole::Parameter => self.parameters.len(),
            _ => 0,
        }
    }

    fn children(&self) -> Vec<&dyn Element> {
        self.parameters.iter().map(|p| p as &dyn Element).collect()
    }
}

math_only_element! {
    /// Variable stoichiometry of a species reference (Level 2)
    StoichiometryMath => StoichiometryMath
}
