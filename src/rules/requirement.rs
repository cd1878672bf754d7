//! Structural requirements evaluated against an element

use std::fmt;

use crate::model::{ChildRole, Element};

/// What an element must contain to be structurally complete
///
/// Requirements are plain data so a table of them can be inspected,
/// compared and printed. Evaluation only reads the element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// Complete as soon as constructed
    Nothing,
    /// A non-empty math expression must be attached
    Math,
    /// At least one child must be present in the slot
    Child(ChildRole),
    /// Every listed requirement must hold
    AllOf(Vec<Requirement>),
}

impl Requirement {
    /// Evaluate against the element's current children
    pub fn is_satisfied_by(&self, element: &dyn Element) -> bool {
        match self {
            Requirement::Nothing => true,
            Requirement::Math => element.has_math(),
            Requirement::Child(role) => element.has_child(*role),
            Requirement::AllOf(parts) => parts.iter().all(|r| r.is_satisfied_by(element)),
        }
    }

    /// Leaf requirements the element does not meet, in declaration order
    pub fn unmet<'r>(&'r self, element: &dyn Element) -> Vec<&'r Requirement> {
        let mut out = Vec::new();
        self.collect_unmet(element, &mut out);
        out
    }

    fn collect_unmet<'r>(&'r self, element: &dyn Element, out: &mut Vec<&'r Requirement>) {
        match self {
            Requirement::AllOf(parts) => {
                for part in parts {
                    part.collect_unmet(element, out);
                }
            }
            leaf => {
                if !leaf.is_satisfied_by(element) {
                    out.push(leaf);
                }
            }
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Nothing => f.write_str("nothing"),
            Requirement::Math => f.write_str("math"),
            Requirement::Child(role) => write!(f, "at least one {}", role),
            Requirement::AllOf(parts) => {
                let parts: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
                f.write_str(&parts.join(" and "))
            }
        }
    }
}
