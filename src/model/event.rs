//! Discontinuous state changes: events and their parts

use super::core::{check_child_version, push_new};
use super::element::{ChildRole, Element, Math, math_present};
use super::kind::ElementKind;
use crate::error::Result;
use crate::version::SchemaVersion;

/// A set of assignments carried out when a trigger fires
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    version: SchemaVersion,
    /// Identifier
    pub id: Option<String>,
    trigger: Option<Trigger>,
    delay: Option<Delay>,
    event_assignments: Vec<EventAssignment>,
}

impl Event {
    /// Create an event with no trigger and no assignments
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            id: None,
            trigger: None,
            delay: None,
            event_assignments: Vec::new(),
        }
    }

    /// The trigger, if set
    pub fn trigger(&self) -> Option<&Trigger> {
        self.trigger.as_ref()
    }

    /// The delay, if set
    pub fn delay(&self) -> Option<&Delay> {
        self.delay.as_ref()
    }

    /// Event assignments in document order
    pub fn event_assignments(&self) -> &[EventAssignment] {
        &self.event_assignments
    }

    /// Set the trigger
    ///
    /// Fails with `VersionMismatch` when the trigger was built for another
    /// schema version; the event keeps its previous trigger in that case.
    pub fn set_trigger(&mut self, trigger: Trigger) -> Result<()> {
        check_child_version(ElementKind::Event, self.version, &trigger)?;
        self.trigger = Some(trigger);
        Ok(())
    }

    /// Set the delay
    pub fn set_delay(&mut self, delay: Delay) -> Result<()> {
        check_child_version(ElementKind::Event, self.version, &delay)?;
        self.delay = Some(delay);
        Ok(())
    }

    /// Create an empty trigger with this event's version, replacing any other
    pub fn create_trigger(&mut self) -> &mut Trigger {
        self.trigger.insert(Trigger::new(self.version))
    }

    /// Create an empty delay with this event's version, replacing any other
    pub fn create_delay(&mut self) -> &mut Delay {
        self.delay.insert(Delay::new(self.version))
    }

    /// Create an event assignment with this event's version
    pub fn create_event_assignment(&mut self) -> &mut EventAssignment {
        push_new(
            &mut self.event_assignments,
            EventAssignment::new(self.version),
        )
    }

    /// Attach an existing event assignment
    pub fn add_event_assignment(&mut self, assignment: EventAssignment) -> Result<()> {
        check_child_version(ElementKind::Event, self.version, &assignment)?;
        self.event_assignments.push(assignment);
        Ok(())
    }
}

impl Element for Event {
    fn kind(&self) -> ElementKind {
        ElementKind::Event
    }

    fn schema_version(&self) -> SchemaVersion {
        self.version
    }

    fn child_count(&self, role: ChildRole) -> usize {
        match role {
            ChildRole::Trigger => usize::from(self.trigger.is_some()),
            ChildRole::Delay => usize::from(self.delay.is_some()),
            ChildRole::EventAssignment => self.event_assignments.len(),
            _ => 0,
        }
    }

    fn label(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn children(&self) -> Vec<&dyn Element> {
        let mut out: Vec<&dyn Element> = Vec::new();
        if let Some(trigger) = &self.trigger {
            out.push(trigger);
        }
        if let Some(delay) = &self.delay {
            out.push(delay);
        }
        out.extend(self.event_assignments.iter().map(|a| a as &dyn Element));
        out
    }
}

/// Assignment carried out when an event fires
#[derive(Debug, Clone, PartialEq)]
pub struct EventAssignment {
    version: SchemaVersion,
    /// Assigned symbol
    pub variable: Option<String>,
    math: Option<Math>,
}

impl EventAssignment {
    /// Create an event assignment without math
    pub fn new(version: SchemaVersion) -> Self {
        Self {
            version,
            variable: None,
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

impl Element for EventAssignment {
    fn kind(&self) -> ElementKind {
        ElementKind::EventAssignment
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
}

math_only_element! {
    /// Condition whose transition to true fires an event
    Trigger => Trigger
}

math_only_element! {
    /// Time between an event firing and its assignments taking effect
    Delay => Delay
}
