//! Individual conformance tests - each matrix row is a separate test
//!
//! This test binary uses libtest-mimic to generate one test case per row of
//! `tests/required_elements_matrix.json`, so every (kind, version, population)
//! combination shows up on its own in the test output.
//!
//! Run with: cargo test --test conformance_individual
//! Run one kind: cargo test --test conformance_individual Event::

#[path = "../common/mod.rs"]
mod common;

use common::{Expected, Failure, MatrixCase};
use libtest_mimic::{Arguments, Failed, Trial};
use sbml_completeness::{Error, RequiredElements, SchemaVersion};

/// Build the element a case describes and compare the validator's answer
fn run_case(case: MatrixCase) -> Result<(), Failed> {
    let kind = common::parse_kind(&case.kind)
        .ok_or_else(|| format!("Unknown element kind: {}", case.kind))?;
    let version = SchemaVersion::try_from((case.level, case.version))
        .map_err(|e| format!("Bad schema version in matrix: {}", e))?;
    let element = common::build_element(kind, version, &case.populate)?;

    match (element.has_required_elements(), case.expected) {
        (Ok(actual), Expected::Complete(expected)) if actual == expected => Ok(()),
        (Ok(actual), Expected::Complete(expected)) => Err(format!(
            "Expected has_required_elements() == {}, got {}",
            expected, actual
        )
        .into()),
        (Err(Error::MissingRule { .. }), Expected::Failure(Failure::MissingRule)) => Ok(()),
        (Ok(actual), Expected::Failure(failure)) => Err(format!(
            "Expected {:?}, but the check answered {}",
            failure, actual
        )
        .into()),
        (Err(e), _) => Err(format!("Check failed: {}", e).into()),
    }
}

fn main() {
    let args = Arguments::from_args();

    let tests: Vec<Trial> = common::load_matrix()
        .into_iter()
        .map(|case| Trial::test(case.name(), move || run_case(case)))
        .collect();

    libtest_mimic::run(&args, tests).exit();
}
