//! Schema version descriptors
//!
//! Every SBML element is declared against a (Level, Version) pair. The pair
//! is stored literally: adjacent revisions such as L1V1 and L1V2 are distinct
//! keys and nothing is normalized.

use std::fmt;

use crate::error::{Error, Result};

/// An SBML (Level, Version) pair
///
/// Ordered lexicographically by level, then version, so it can be used both
/// as a lookup key and as a bound in a [`VersionRange`].
///
/// # Example
///
/// ```
/// use sbml_completeness::SchemaVersion;
///
/// let v = SchemaVersion::new(2, 4);
/// assert!(v > SchemaVersion::L1V2);
/// assert!(v < SchemaVersion::L3V1);
/// assert_eq!(v.to_string(), "L2V4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion {
    level: u32,
    version: u32,
}

impl SchemaVersion {
    /// Level 1 Version 1
    pub const L1V1: SchemaVersion = SchemaVersion::new(1, 1);
    /// Level 1 Version 2
    pub const L1V2: SchemaVersion = SchemaVersion::new(1, 2);
    /// Level 2 Version 1
    pub const L2V1: SchemaVersion = SchemaVersion::new(2, 1);
    /// Level 2 Version 2
    pub const L2V2: SchemaVersion = SchemaVersion::new(2, 2);
    /// Level 2 Version 3
    pub const L2V3: SchemaVersion = SchemaVersion::new(2, 3);
    /// Level 2 Version 4
    pub const L2V4: SchemaVersion = SchemaVersion::new(2, 4);
    /// Level 2 Version 5
    pub const L2V5: SchemaVersion = SchemaVersion::new(2, 5);
    /// Level 3 Version 1
    pub const L3V1: SchemaVersion = SchemaVersion::new(3, 1);
    /// Level 3 Version 2
    pub const L3V2: SchemaVersion = SchemaVersion::new(3, 2);

    /// The (Level, Version) pairs the standard table covers, ascending
    ///
    /// This is the default matrix a rule table claims to support. L3V2 is
    /// left out: it relaxed required math on most elements and its rules
    /// are not in the table, so lookups at L3V2 report `MissingRule`.
    pub const SUPPORTED: [SchemaVersion; 8] = [
        Self::L1V1,
        Self::L1V2,
        Self::L2V1,
        Self::L2V2,
        Self::L2V3,
        Self::L2V4,
        Self::L2V5,
        Self::L3V1,
    ];

    /// Create a descriptor from a level and a version
    ///
    /// # Panics
    ///
    /// Panics if either number is zero. Use `SchemaVersion::try_from((level, version))`
    /// for values that come from untrusted input.
    pub const fn new(level: u32, version: u32) -> Self {
        assert!(level >= 1 && version >= 1, "level and version start at 1");
        Self { level, version }
    }

    /// The SBML Level
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// The version within the level
    pub const fn version(&self) -> u32 {
        self.version
    }
}

impl TryFrom<(u32, u32)> for SchemaVersion {
    type Error = Error;

    fn try_from((level, version): (u32, u32)) -> Result<Self> {
        if level == 0 || version == 0 {
            return Err(Error::InvalidSchemaVersion { level, version });
        }
        Ok(Self { level, version })
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}V{}", self.level, self.version)
    }
}

/// A contiguous span of schema versions
///
/// The start bound is inclusive. The end bound is either inclusive or open,
/// in which case the range extends through the newest version a table
/// supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionRange {
    start: SchemaVersion,
    end: Option<SchemaVersion>,
}

impl VersionRange {
    /// `start..=end`
    pub const fn between(start: SchemaVersion, end: SchemaVersion) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// `version..=version`
    pub const fn only(version: SchemaVersion) -> Self {
        Self::between(version, version)
    }

    /// `start..` with no upper bound
    pub const fn from_version(start: SchemaVersion) -> Self {
        Self { start, end: None }
    }

    /// Inclusive lower bound
    pub fn start(&self) -> SchemaVersion {
        self.start
    }

    /// Inclusive upper bound, `None` when open
    pub fn end(&self) -> Option<SchemaVersion> {
        self.end
    }

    /// Whether `version` falls inside the range
    pub fn contains(&self, version: SchemaVersion) -> bool {
        version >= self.start && self.end.is_none_or(|end| version <= end)
    }

    /// A range is well formed when its start does not lie after its end
    pub(crate) fn check(&self) -> Result<()> {
        match self.end {
            Some(end) if end < self.start => Err(Error::InvalidRange {
                start: self.start,
                end,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}..={}", self.start, end),
            None => write!(f, "{}..", self.start),
        }
    }
}
