//! Required-elements rule tables
//!
//! A table maps each element kind to a set of version-ranged rules. Tables
//! are checked for gaps and overlaps when built and never change afterwards,
//! so one table can be shared by any number of threads.

mod requirement;
mod standard;
mod table;

pub use requirement::Requirement;
pub use standard::standard_builder;
pub use table::{CompletenessRule, RuleTable, RuleTableBuilder};
