//! Data structures representing SBML element trees
//!
//! Only the parts of each element that decide structural completeness are
//! modelled in depth: child lists, math expressions and the declared schema
//! version. Attributes are carried as plain public fields.

/// Declare an element whose whole content is a single math expression.
macro_rules! math_only_element {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            version: $crate::version::SchemaVersion,
            math: Option<$crate::model::Math>,
        }

        impl $name {
            #[doc = concat!("Create a `", stringify!($name), "` without math")]
            pub fn new(version: $crate::version::SchemaVersion) -> Self {
                Self {
                    version,
                    math: None,
                }
            }

            /// Attached math expression
            pub fn math(&self) -> Option<&$crate::model::Math> {
                self.math.as_ref()
            }

            /// Attach or replace the math expression
            pub fn set_math(&mut self, math: $crate::model::Math) {
                self.math = Some(math);
            }

            /// Detach the math expression
            pub fn unset_math(&mut self) {
                self.math = None;
            }
        }

        impl $crate::model::Element for $name {
            fn kind(&self) -> $crate::model::ElementKind {
                $crate::model::ElementKind::$kind
            }

            fn schema_version(&self) -> $crate::version::SchemaVersion {
                self.version
            }

            fn has_math(&self) -> bool {
                $crate::model::element::math_present(&self.math)
            }
        }
    };
}

mod core;
mod element;
mod event;
mod kind;
mod math;
mod reaction;

pub use core::{
    Compartment, CompartmentType, Model, Parameter, Species, SpeciesType, Unit, UnitDefinition,
};
pub use element::{ChildRole, Element, Math};
pub use event::{Delay, Event, EventAssignment, Trigger};
pub use kind::ElementKind;
pub use math::{Constraint, FunctionDefinition, InitialAssignment, Rule, RuleTarget, RuleType};
pub use reaction::{
    KineticLaw, ModifierSpeciesReference, Reaction, SpeciesReference, StoichiometryMath,
};
