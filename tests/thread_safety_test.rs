//! Concurrent validation against the shared standard table

use sbml_completeness::{Math, Model, RequiredElements, RuleTable, SchemaVersion, check_tree};
use std::sync::Arc;
use std::thread;

#[test]
fn test_standard_table_initialised_once_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| RuleTable::standard().unwrap() as *const RuleTable as usize))
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_shared_model_validated_from_many_threads() {
    let mut model = Model::new(SchemaVersion::L2V4);
    for i in 0..50 {
        let law = model.create_reaction().create_kinetic_law();
        if i % 5 != 0 {
            law.set_math(Math::new("k * S"));
        }
    }
    let model = Arc::new(model);

    let mut handles = Vec::new();
    for _ in 0..10 {
        let model = Arc::clone(&model);
        handles.push(thread::spawn(move || {
            let mut reports = Vec::new();
            for _ in 0..20 {
                assert_eq!(model.has_required_elements(), Ok(true));
                reports.push(check_tree(&*model).unwrap().len());
            }
            reports
        }));
    }

    for handle in handles {
        let reports = handle.join().unwrap();
        assert!(reports.iter().all(|&n| n == 10));
    }
}

#[test]
fn test_level_one_answers_do_not_leak_between_threads() {
    let handles: Vec<_> = [SchemaVersion::L1V1, SchemaVersion::L1V2, SchemaVersion::L2V1]
        .into_iter()
        .map(|version| {
            thread::spawn(move || {
                let mut model = Model::new(version);
                model.create_compartment();
                (version, model.has_required_elements().unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (version, complete) = handle.join().unwrap();
        assert_eq!(complete, version != SchemaVersion::L1V1, "{}", version);
    }
}
