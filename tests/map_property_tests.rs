//! Property-based testing for both map variants
//!
//! Random operation sequences are replayed against a `std::HashMap` model;
//! results and lengths must agree at every step. Keys are drawn from a small
//! universe so sequences hit collisions, overwrites, and removals often.

use proptest::prelude::*;
use std::collections::HashMap;
use strmap::{ChainingMap, OpenAddressingMap, StringTable};

#[derive(Debug, Clone)]
enum MapOp {
    Insert(String, i32),
    Remove(String),
    Get(String),
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "", "a", "b", "c", "i", "q", "Hobbit", "Wizard", "Maiar", "Ent", "key0", "key1", "key2",
        "key3", "key4", "key5",
    ])
    .prop_map(String::from)
}

fn op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        3 => (key_strategy(), any::<i32>()).prop_map(|(key, value)| MapOp::Insert(key, value)),
        1 => key_strategy().prop_map(MapOp::Remove),
        2 => key_strategy().prop_map(MapOp::Get),
    ]
}

fn check_against_model<T: StringTable<i32>>(mut table: T, ops: &[MapOp]) {
    let mut model: HashMap<String, i32> = HashMap::new();
    for op in ops {
        match op {
            MapOp::Insert(key, value) => {
                assert_eq!(
                    table.insert(key.clone(), *value),
                    model.insert(key.clone(), *value)
                );
            }
            MapOp::Remove(key) => {
                assert_eq!(table.remove(key).ok(), model.remove(key));
            }
            MapOp::Get(key) => {
                assert_eq!(table.get(key).ok(), model.get(key));
            }
        }
        assert_eq!(table.len(), model.len());
    }
    for (key, value) in &model {
        assert_eq!(table.get(key), Ok(value));
    }
}

proptest! {
    #[test]
    fn open_addressing_matches_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        check_against_model(OpenAddressingMap::with_capacity(4), &ops);
    }

    #[test]
    fn chaining_matches_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        check_against_model(ChainingMap::with_capacity(4), &ops);
    }

    #[test]
    fn variants_agree(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut probed = OpenAddressingMap::with_capacity(4);
        let mut chained = ChainingMap::with_capacity(4);
        for op in &ops {
            match op {
                MapOp::Insert(key, value) => {
                    prop_assert_eq!(
                        probed.insert(key.clone(), *value),
                        chained.insert(key.clone(), *value)
                    );
                }
                MapOp::Remove(key) => {
                    prop_assert_eq!(probed.remove(key), chained.remove(key));
                }
                MapOp::Get(key) => {
                    prop_assert_eq!(probed.get(key), chained.get(key));
                }
            }
            prop_assert_eq!(probed.len(), chained.len());
        }
    }
}
