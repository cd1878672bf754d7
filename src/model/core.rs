//! Core SBML types: the model container, compartments, species, parameters and units

use super::element::{ChildRole, Element};
use super::event::Event;
use super::kind::ElementKind;
use super::math::{Constraint, FunctionDefinition, InitialAssignment, Rule, RuleType};
use super::reaction::Reaction;
use crate::error::{Error, Result};
use crate::version::SchemaVersion;

/// Reject a child whose schema version differs from its parent's
pub(crate) fn check_child_version(
    parent: ElementKind,
    expected: SchemaVersion,
    child: &dyn Element,
) -> Result<()> {
    if child.schema_version() != expected {
        return Err(Error::version_mismatch(
            parent,
            child.kind(),
            expected,
            child.schema_version(),
        ));
    }
    Ok(())
}

/// Push a freshly constructed child and hand back a mutable reference to it
pub(crate) fn push_new<T>(list: &mut Vec<T>, child: T) -> &mut T {
    let index = list.len();
    list.push(child);
    &mut list[index]
}

/// SBML model, the container of all other components
///
/// Children are created through the `create_*` methods, which give them the
/// model's schema version, or attached with the `add_*` methods, which
/// reject children declared for another version.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    version: SchemaVersion,
    /// Model identifier
    pub id: Option<String>,
    /// Human-readable name
    pub name: Option<String>,
    function_definitions: Vec<FunctionDefinition>,
    unit_definitions: Vec<UnitDefinition>,
    compartment_types: Vec<CompartmentType>,
    species_types: Vec<SpeciesType>,
    compartments: Vec<Compartment>,
    species: Vec<Species>,
    parameters: Vec<Parameter>,
    initial_assignments: Vec<InitialAssignment>,
    rules: Vec<Rule>,
    constraints: Vec<Constraint>,
    reactions: Vec<Reaction>,
    events: Vec<Event>,
}

impl Model {
    /// Create an empty model
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            id: None,
            name: None,
            function_definitions: Vec::new(),
            unit_definitions: Vec::new(),
            compartment_types: Vec::new(),
            species_types: Vec::new(),
            compartments: Vec::new(),
            species: Vec::new(),
            parameters: Vec::new(),
            initial_assignments: Vec::new(),
            rules: Vec::new(),
            constraints: Vec::new(),
            reactions: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Function definitions in document order
    pub fn function_definitions(&self) -> &[FunctionDefinition] {
        &self.function_definitions
    }

    /// Unit definitions in document order
    pub fn unit_definitions(&self) -> &[UnitDefinition] {
        &self.unit_definitions
    }

    /// Compartment types in document order
    pub fn compartment_types(&self) -> &[CompartmentType] {
        &self.compartment_types
    }

    /// Species types in document order
    pub fn species_types(&self) -> &[SpeciesType] {
        &self.species_types
    }

    /// Compartments in document order
    pub fn compartments(&self) -> &[Compartment] {
        &self.compartments
    }

    /// Species in document order
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    /// Global parameters in document order
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Initial assignments in document order
    pub fn initial_assignments(&self) -> &[InitialAssignment] {
        &self.initial_assignments
    }

    /// Rules of every flavour in document order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Constraints in document order
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Reactions in document order
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// Events in document order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Create a function definition with this model's version
    pub fn create_function_definition(&mut self) -> &mut FunctionDefinition {
        push_new(
            &mut self.function_definitions,
            FunctionDefinition::new(self.version),
        )
    }

    /// Create a unit definition with this model's version
    pub fn create_unit_definition(&mut self) -> &mut UnitDefinition {
        push_new(&mut self.unit_definitions, UnitDefinition::new(self.version))
    }

    /// Create a compartment type with this model's version
    pub fn create_compartment_type(&mut self) -> &mut CompartmentType {
        push_new(&mut self.compartment_types, CompartmentType::new(self.version))
    }

    /// Create a species type with this model's version
    pub fn create_species_type(&mut self) -> &mut SpeciesType {
        push_new(&mut self.species_types, SpeciesType::new(self.version))
    }

    /// Create a compartment with this model's version
    pub fn create_compartment(&mut self) -> &mut Compartment {
        push_new(&mut self.compartments, Compartment::new(self.version))
    }

    /// Create a species with this model's version
    pub fn create_species(&mut self) -> &mut Species {
        push_new(&mut self.species, Species::new(self.version))
    }

    /// Create a parameter with this model's version
    pub fn create_parameter(&mut self) -> &mut Parameter {
        push_new(&mut self.parameters, Parameter::new(self.version))
    }

    /// Create an initial assignment with this model's version
    pub fn create_initial_assignment(&mut self) -> &mut InitialAssignment {
        push_new(
            &mut self.initial_assignments,
            InitialAssignment::new(self.version),
        )
    }

    /// Create an algebraic rule with this model's version
    pub fn create_algebraic_rule(&mut self) -> &mut Rule {
        push_new(&mut self.rules, Rule::new(RuleType::Algebraic, self.version))
    }

    /// Create an assignment rule with this model's version
    pub fn create_assignment_rule(&mut self) -> &mut Rule {
        push_new(&mut self.rules, Rule::new(RuleType::Assignment, self.version))
    }

    /// Create a rate rule with this model's version
    pub fn create_rate_rule(&mut self) -> &mut Rule {
        push_new(&mut self.rules, Rule::new(RuleType::Rate, self.version))
    }

    /// Create a constraint with this model's version
    pub fn create_constraint(&mut self) -> &mut Constraint {
        push_new(&mut self.constraints, Constraint::new(self.version))
    }

    /// Create a reaction with this model's version
    pub fn create_reaction(&mut self) -> &mut Reaction {
        push_new(&mut self.reactions, Reaction::new(self.version))
    }

    /// Create an event with this model's version
    pub fn create_event(&mut self) -> &mut Event {
        push_new(&mut self.events, Event::new(self.version))
    }

    /// Attach an existing function definition
    pub fn add_function_definition(&mut self, child: FunctionDefinition) -> Result<()> {
        check_child_version(ElementKind::Model, self.version, &child)?;
        self.function_definitions.push(child);
        Ok(())
    }

    /// Attach an existing unit definition
    pub fn add_unit_definition(&mut self, child: UnitDefinition) -> Result<()> {
        check_child_version(ElementKind::Model, self.version, &child)?;
        self.unit_definitions.push(child);
        Ok(())
    }

    /// Attach an existing compartment type
    pub fn add_compartment_type(&mut self, child: CompartmentType) -> Result<()> {
        check_child_version(ElementKind::Model, self.version, &child)?;
        self.compartment_types.push(child);
        Ok(())
    }

    /// Attach an existing species type
    pub fn add_species_type(&mut self, child: SpeciesType) -> Result<()> {
        check_child_version(ElementKind::Model, self.version, &child)?;
        self.species_types.push(child);
        Ok(())
    }

    /// Attach an existing compartment
    pub fn add_compartment(&mut self, child: Compartment) -> Result<()> {
        check_child_version(ElementKind::Model, self.version, &child)?;
        self.compartments.push(child);
        Ok(())
    }

    /// Attach an existing species
    pub fn add_species(&mut self, child: Species) -> Result<()> {
        check_child_version(ElementKind::Model, self.version, &child)?;
        self.species.push(child);
        Ok(())
    }

    /// Attach an existing parameter
    pub fn add_parameter(&mut self, child: Parameter) -> Result<()> {
        check_child_version(ElementKind::Model, self.version, &child)?;
        self.parameters.push(child);
        Ok(())
    }

    /// Attach an existing initial assignment
    pub fn add_initial_assignment(&mut self, child: InitialAssignment) -> Result<()> {
        check_child_version(ElementKind::Model, self.version, &child)?;
        self.initial_assignments.push(child);
        Ok(())
    }

    /// Attach an existing constraint
    pub fn add_constraint(&mut self, child: Constraint) -> Result<()> {
        check_child_version(ElementKind::Model, self.version, &child)?;
        self.constraints.push(child);
        Ok(())
    }

    /// Attach an existing rule of any flavour
    pub fn add_rule(&mut self, child: Rule) -> Result<()> {
        check_child_version(ElementKind::Model, self.version, &child)?;
        self.rules.push(child);
        Ok(())
    }

    /// Attach an existing reaction
    pub fn add_reaction(&mut self, child: Reaction) -> Result<()> {
        check_child_version(ElementKind::Model, self.version, &child)?;
        self.reactions.push(child);
        Ok(())
    }

    /// Attach an existing event
    pub fn add_event(&mut self, child: Event) -> Result<()> {
        check_child_version(ElementKind::Model, self.version, &child)?;
        self.events.push(child);
        Ok(())
    }
}

impl Element for Model {
    fn kind(&self) -> ElementKind {
        ElementKind::Model
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn child_count(&self, role: ChildRole) -> usize {
        match role {
            ChildRole::FunctionDefinition => self.function_definitions.len(),
            ChildRole::UnitDefinition => self.unit_definitions.len(),
            ChildRole::Compartment => self.compartments.len(),
            ChildRole::Species => self.species.len(),
            ChildRole::Parameter => self.parameters.len(),
            ChildRole::Rule => self.rules.len(),
            ChildRole::Reaction => self.reactions.len(),
            ChildRole::Event => self.events.len(),
            _ => 0,
        }
    }

    fn label(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn children(&self) -> Vec<&dyn Element> {
        let mut out: Vec<&dyn Element> = Vec::new();
        out.extend(self.function_definitions.iter().map(|c| c as &dyn Element));
        out.extend(self.unit_definitions.iter().map(|c| c as &dyn Element));
        out.extend(self.compartment_types.iter().map(|c| c as &dyn Element));
        out.extend(self.species_types.iter().map(|c| c as &dyn Element));
        out.extend(self.compartments.iter().map(|c| c as &dyn Element));
        out.extend(self.species.iter().map(|c| c as &dyn Element));
        out.extend(self.parameters.iter().map(|c| c as &dyn Element));
        out.extend(self.initial_assignments.iter().map(|c| c as &dyn Element));
        out.extend(self.rules.iter().map(|c| c as &dyn Element));
        out.extend(self.constraints.iter().map(|c| c as &dyn Element));
        out.extend(self.reactions.iter().map(|c| c as &dyn Element));
        out.extend(self.events.iter().map(|c| c as &dyn Element));
        out
    }
}

/// Unit definition, a named product of units
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDefinition {
    version: SchemaVersion,
    /// Unit definition identifier
    pub id: Option<String>,
    units: Vec<Unit>,
}

impl UnitDefinition {
    /// Create a unit definition without units
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            id: None,
            units: Vec::new(),
        }
    }

    /// Units in document order
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Create a unit with this definition's version
    pub fn create_unit(&mut self) -> &mut Unit {
        push_new(&mut self.units, Unit::new(self.version))
    }

    /// Attach an existing unit
    pub fn add_unit(&mut self, unit: Unit) -> Result<()> {
        check_child_version(ElementKind::UnitDefinition, self.version, &unit)?;
        self.units.push(unit);
        Ok(())
    }
}

impl Element for UnitDefinition {
    fn kind(&self) -> ElementKind {
        ElementKind::UnitDefinition
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn child_count(&self, role: ChildRole) -> usize {
        match role {
            ChildRole::Unit => self.units.len(),
            _ => 0,
        }
    }

    fn label(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn children(&self) -> Vec<&dyn Element> {
        self.units.iter().map(|u| u as &dyn Element).collect()
    }
}

/// A single unit factor: `(multiplier * 10^scale * kind)^exponent`
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    version: SchemaVersion,
    /// Base unit kind, e.g. `"mole"` or `"litre"`
    pub unit_kind: Option<String>,
    /// Exponent
    pub exponent: f64,
    /// Power-of-ten scale
    pub scale: i32,
    /// Multiplier
    pub multiplier: f64,
}

impl Unit {
    /// Create a unit with default factors
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            unit_kind: None,
            exponent: 1.0,
            scale: 0,
            multiplier: 1.0,
        }
    }
}

impl Element for Unit {
    fn kind(&self) -> ElementKind {
        ElementKind::Unit
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }
}

/// Compartment type (Level 2 Versions 2 to 5)
#[derive(Debug, Clone, PartialEq)]
pub struct CompartmentType {
    version: SchemaVersion,
    /// Identifier
    pub id: Option<String>,
}

impl CompartmentType {
    /// Create a compartment type
    pub fn new(version: SchemaVersion) -> Self {
        Self { version, id: None }
    }
}

impl Element for CompartmentType {
    fn kind(&self) -> ElementKind {
        ElementKind::CompartmentType
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn label(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Species type (Level 2 Versions 2 to 5)
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesType {
    version: SchemaVersion,
    /// Identifier
    pub id: Option<String>,
}

impl SpeciesType {
    /// Create a species type
    pub fn new(version: SchemaVersion) -> Self {
        Self { version, id: None }
    }
}

impl Element for SpeciesType {
    fn kind(&self) -> ElementKind {
        ElementKind::SpeciesType
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn label(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A bounded container in which species are located
#[derive(Debug, Clone, PartialEq)]
pub struct Compartment {
    version: SchemaVersion,
    /// Identifier
    pub id: Option<String>,
    /// Size (volume in Level 1)
    pub size: Option<f64>,
    /// Units of `size`
    pub units: Option<String>,
    /// Enclosing compartment
    pub outside: Option<String>,
}

impl Compartment {
    /// Create a compartment
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            id: None,
            size: None,
            units: None,
            outside: None,
        }
    }
}

impl Element for Compartment {
    fn kind(&self) -> ElementKind {
        ElementKind::Compartment
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn label(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A pool of entities located in a compartment
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    version: SchemaVersion,
    /// Identifier
    pub id: Option<String>,
    /// Compartment the species lives in
    pub compartment: Option<String>,
    /// Initial amount
    pub initial_amount: Option<f64>,
    /// Initial concentration (Level 2 and later)
    pub initial_concentration: Option<f64>,
    /// Whether the species is a boundary condition
    pub boundary_condition: bool,
}

impl Species {
    /// Create a species
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            id: None,
            compartment: None,
            initial_amount: None,
            initial_concentration: None,
            boundary_condition: false,
        }
    }
}

impl Element for Species {
    fn kind(&self) -> ElementKind {
        ElementKind::Species
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn label(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A named quantity, global or local to a kinetic law
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    version: SchemaVersion,
    /// Identifier
    pub id: Option<String>,
    /// Value
    pub value: Option<f64>,
    /// Units of `value`
    pub units: Option<String>,
    /// Whether the value may change during simulation
    pub constant: bool,
}

impl Parameter {
    /// Create a parameter
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            id: None,
            value: None,
            units: None,
            constant: true,
        }
    }
}

impl Element for Parameter {
    fn kind(&self) -> ElementKind {
        ElementKind::Parameter
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn label(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
