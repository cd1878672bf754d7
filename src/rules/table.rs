//! Version-partitioned rule table and its builder

use std::collections::HashMap;

use super::requirement::Requirement;
use crate::error::{Error, Result};
use crate::model::ElementKind;
use crate::version::{SchemaVersion, VersionRange};

/// One entry of a rule table: what `kind` requires over `range`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletenessRule {
    kind: ElementKind,
    range: VersionRange,
    requirement: Requirement,
}

impl CompletenessRule {
    /// Create a rule
    pub fn new(kind: ElementKind, range: VersionRange, requirement: Requirement) -> Self {
        Self {
            kind,
            range,
            requirement,
        }
    }

    /// Element kind this rule applies to
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Versions this rule applies to
    pub fn range(&self) -> VersionRange {
        self.range
    }

    /// The requirement itself
    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }
}

/// Immutable lookup from (kind, version) to a [`CompletenessRule`]
///
/// Only obtainable through [`RuleTableBuilder::build`], which guarantees that
/// for every kind the rules cover each supported version the kind exists in
/// exactly once.
#[derive(Debug, Clone)]
pub struct RuleTable {
    supported: Vec<SchemaVersion>,
    rules: HashMap<ElementKind, Vec<CompletenessRule>>,
}

impl RuleTable {
    /// Start a new, empty builder
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::new()
    }

    /// Find the rule for `kind` at `version`
    ///
    /// # Errors
    ///
    /// `MissingRule` when `version` is outside the supported matrix, when
    /// `kind` does not exist at `version`, or when no rule was registered.
    pub fn rule_for(&self, kind: ElementKind, version: SchemaVersion) -> Result<&CompletenessRule> {
        let missing = || Error::MissingRule { kind, version };

        if self.supported.binary_search(&version).is_err() || !kind.is_available_in(version) {
            return Err(missing());
        }

        self.rules
            .get(&kind)
            .and_then(|rules| rules.iter().find(|r| r.range.contains(version)))
            .ok_or_else(missing)
    }

    /// Versions this table claims to support, ascending
    pub fn supported_versions(&self) -> &[SchemaVersion] {
        &self.supported
    }

    /// Whether `version` is part of the supported matrix
    pub fn supports(&self, version: SchemaVersion) -> bool {
        self.supported.binary_search(&version).is_ok()
    }

    /// Rules registered for `kind`, ordered by range start
    pub fn rules_for_kind(&self, kind: ElementKind) -> &[CompletenessRule] {
        self.rules.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of rules
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    /// Whether the table holds no rules at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builder for a [`RuleTable`]
///
/// # Example
///
/// ```
/// use sbml_completeness::{ElementKind, Requirement, RuleTable, SchemaVersion, VersionRange};
///
/// let table = RuleTable::builder()
///     .with_supported_versions([SchemaVersion::L1V2])
///     .rule(
///         ElementKind::Model,
///         VersionRange::from_version(SchemaVersion::L1V1),
///         Requirement::Nothing,
///     );
///
/// // Every other kind available at L1V2 is left uncovered
/// assert!(table.build().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RuleTableBuilder {
    supported: Vec<SchemaVersion>,
    rules: Vec<CompletenessRule>,
}

impl RuleTableBuilder {
    /// Create a builder claiming the full published matrix
    pub fn new() -> Self {
        Self {
            supported: SchemaVersion::SUPPORTED.to_vec(),
            rules: Vec::new(),
        }
    }

    /// Replace the set of versions the table claims to support
    pub fn with_supported_versions(
        mut self,
        versions: impl IntoIterator<Item = SchemaVersion>,
    ) -> Self {
        self.supported = versions.into_iter().collect();
        self.supported.sort();
        self.supported.dedup();
        self
    }

    /// Register a rule
    pub fn rule(mut self, kind: ElementKind, range: VersionRange, requirement: Requirement) -> Self {
        self.rules
            .push(CompletenessRule::new(kind, range, requirement));
        self
    }

    /// Register the same requirement for several kinds, each over its own
    /// availability window
    pub fn rule_over_availability(
        mut self,
        kinds: impl IntoIterator<Item = ElementKind>,
        requirement: Requirement,
    ) -> Self {
        for kind in kinds {
            self.rules.push(CompletenessRule::new(
                kind,
                kind.availability(),
                requirement.clone(),
            ));
        }
        self
    }

    /// Check coverage and freeze the table
    ///
    /// # Errors
    ///
    /// - `InvalidRange` for a rule whose range runs backwards
    /// - `CoverageGap` when a supported version inside a kind's
    ///   availability has no rule
    /// - `OverlappingRules` when it has more than one
    /// - `RuleOutsideAvailability` when a rule covers a supported version
    ///   at which its kind does not exist
    pub fn build(self) -> Result<RuleTable> {
        for rule in &self.rules {
            rule.range.check()?;
        }

        let mut rules: HashMap<ElementKind, Vec<CompletenessRule>> = HashMap::new();
        for rule in self.rules {
            rules.entry(rule.kind).or_default().push(rule);
        }

        for kind in ElementKind::ALL {
            let registered = rules.get(&kind).map(Vec::as_slice).unwrap_or(&[]);
            check_kind_coverage(kind, registered, &self.supported)?;
        }

        for list in rules.values_mut() {
            list.sort_by_key(|r| r.range.start());
        }

        Ok(RuleTable {
            supported: self.supported,
            rules,
        })
    }
}

impl Default for RuleTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_kind_coverage(
    kind: ElementKind,
    rules: &[CompletenessRule],
    supported: &[SchemaVersion],
) -> Result<()> {
    for &version in supported {
        let mut matching = rules.iter().filter(|r| r.range.contains(version));
        let first = matching.next();

        if !kind.is_available_in(version) {
            if let Some(rule) = first {
                return Err(Error::RuleOutsideAvailability {
                    kind,
                    range: rule.range,
                    version,
                });
            }
            continue;
        }

        match (first, matching.next()) {
            (None, _) => return Err(Error::CoverageGap { kind, version }),
            (Some(a), Some(b)) => {
                return Err(Error::OverlappingRules {
                    kind,
                    version,
                    first: a.range,
                    second: b.range,
                });
            }
            (Some(_), None) => {}
        }
    }
    Ok(())
}
