//! Error types for required-elements validation
//!
//! A `false` answer from the validator is a normal outcome and never shows up
//! here. The errors in this module are configuration defects in a rule table
//! or misuse of the tree construction API.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: Rule table configuration errors
//! - **E2xxx**: Element construction errors
//!
//! ## Common Error Codes
//!
//! - `E1001`: No rule registered for a (kind, version) pair
//! - `E1002`: Two rules for the same kind cover one version
//! - `E1003`: A supported version is not covered for a kind
//! - `E1004`: A rule covers a version where its kind does not exist
//! - `E1005`: A version range whose start lies after its end
//! - `E2001`: Child element attached to a parent of another schema version
//! - `E2002`: Level or version of zero

use thiserror::Error;

use crate::model::ElementKind;
use crate::version::{SchemaVersion, VersionRange};

/// Result type for validation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building rule tables or element trees
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No rule is registered for the requested element kind and version
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - The element was constructed for a version outside the supported matrix
    /// - The element kind does not exist at that version (e.g. `Event` at Level 1)
    /// - A custom table registered no rule for the kind
    #[error("[E1001] No required-elements rule for {kind} at {version}")]
    MissingRule {
        /// Element kind being looked up
        kind: ElementKind,
        /// Declared schema version of the element
        version: SchemaVersion,
    },

    /// Two rules for the same kind both apply to one version
    ///
    /// **Error Code**: E1002
    ///
    /// **Suggestions**:
    /// - Make the ranges of consecutive rules meet without sharing a version
    #[error("[E1002] Overlapping rules for {kind} at {version}: {first} and {second}")]
    OverlappingRules {
        /// Element kind with overlapping rules
        kind: ElementKind,
        /// First version covered twice
        version: SchemaVersion,
        /// Range of the earlier registered rule
        first: VersionRange,
        /// Range of the later registered rule
        second: VersionRange,
    },

    /// A supported version inside a kind's availability has no rule
    ///
    /// **Error Code**: E1003
    #[error("[E1003] Rules for {kind} do not cover {version}")]
    CoverageGap {
        /// Element kind with the gap
        kind: ElementKind,
        /// First uncovered version
        version: SchemaVersion,
    },

    /// A rule covers a supported version at which the kind does not exist
    ///
    /// **Error Code**: E1004
    #[error("[E1004] Rule {range} for {kind} covers {version}, where {kind} is not defined")]
    RuleOutsideAvailability {
        /// Element kind of the rule
        kind: ElementKind,
        /// Range of the offending rule
        range: VersionRange,
        /// First supported version outside the kind's availability
        version: SchemaVersion,
    },

    /// Version range with its start after its end
    ///
    /// **Error Code**: E1005
    #[error("[E1005] Invalid version range: {start} is after {end}")]
    InvalidRange {
        /// Lower bound given
        start: SchemaVersion,
        /// Upper bound given
        end: SchemaVersion,
    },

    /// Child element attached to a parent declared for another schema version
    ///
    /// **Error Code**: E2001
    ///
    /// **Suggestions**:
    /// - Construct the child with the parent's `schema_version()`
    /// - Use the parent's `create_*` methods, which inherit the version
    #[error("[E2001] Version mismatch: {parent} is {expected}, {child} is {found}")]
    VersionMismatch {
        /// Kind of the parent element
        parent: ElementKind,
        /// Kind of the child element
        child: ElementKind,
        /// Version of the parent
        expected: SchemaVersion,
        /// Version of the rejected child
        found: SchemaVersion,
    },

    /// Level or version number below one
    ///
    /// **Error Code**: E2002
    #[error("[E2002] Invalid schema version: level {level}, version {version}")]
    InvalidSchemaVersion {
        /// Level given
        level: u32,
        /// Version given
        version: u32,
    },
}

impl Error {
    /// Whether this error reports a defect in a rule table (E1xxx)
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Error::MissingRule { .. }
                | Error::OverlappingRules { .. }
                | Error::CoverageGap { .. }
                | Error::RuleOutsideAvailability { .. }
                | Error::InvalidRange { .. }
        )
    }

    pub(crate) fn version_mismatch(
        parent: ElementKind,
        child: ElementKind,
        expected: SchemaVersion,
        found: SchemaVersion,
    ) -> Self {
        Error::VersionMismatch {
            parent,
            child,
            expected,
            found,
        }
    }
}
