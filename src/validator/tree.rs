//! Whole-tree completeness report built on the per-element check

use std::fmt;

use crate::error::Result;
use crate::model::{Element, ElementKind};
use crate::rules::RuleTable;
use crate::version::SchemaVersion;

/// An element found lacking required children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteElement {
    /// Slash-separated element names from the root, with `#id` where known,
    /// e.g. `model#m/reaction#r1/kineticLaw`
    ///
    /// Names are the ones used at the element's schema version. A Level 1
    /// assignment or rate rule without a [`RuleTarget`](crate::model::RuleTarget)
    /// falls back to its Level 2 name.
    pub path: String,
    /// Kind of the incomplete element
    pub kind: ElementKind,
    /// Its declared schema version
    pub version: SchemaVersion,
    /// The unmet requirements, in rule order
    pub missing: Vec<String>,
}

impl fmt::Display for IncompleteElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}) is missing {}",
            self.path,
            self.kind,
            self.version,
            self.missing.join(", ")
        )
    }
}

fn segment(element: &dyn Element) -> String {
    let name = element.element_name();
    match element.label() {
        Some(label) => format!("{}#{}", name, label),
        None => name.to_string(),
    }
}

pub(super) fn walk(
    table: &RuleTable,
    element: &dyn Element,
    path: &mut Vec<String>,
    found: &mut Vec<IncompleteElement>,
) -> Result<()> {
    path.push(segment(element));

    let rule = table.rule_for(element.kind(), element.schema_version())?;
    let unmet = rule.requirement().unmet(element);
    if !unmet.is_empty() {
        found.push(IncompleteElement {
            path: path.join("/"),
            kind: element.kind(),
            version: element.schema_version(),
            missing: unmet.iter().map(|r| r.to_string()).collect(),
        });
    }

    for child in element.children() {
        walk(table, child, path, found)?;
    }

    path.pop();
    Ok(())
}
