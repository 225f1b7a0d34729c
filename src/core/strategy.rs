//! Property-based generators for [`Key`], [`Value`], [`Record`] and
//! [`Sequence`].
//!
//! Keys are drawn from a small alphabet so that generated records overlap
//! and collide often enough to exercise the algebra. Floats are finite, so
//! every generated value is equal to itself.
//!
//! This module is only included in test builds (`#[cfg(test)]`).

use proptest::prelude::*;

use crate::core::record::Record;
use crate::core::types::{Key, Sequence, Value};

pub fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        "[a-e]".prop_map(Key::Str),
        "[a-e]".prop_map(Key::Sym),
        (0i64..4).prop_map(Key::Int),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-3i64..3).prop_map(Value::Int),
        (-1.0e3f64..1.0e3).prop_map(Value::Float),
        Just(Value::Float(f64::NAN)),
        "[x-z]{0,2}".prop_map(Value::Str),
        "[x-z]".prop_map(Value::Sym),
    ]
}

/// Values nested at most `depth` collections deep.
pub fn arb_value(depth: u32) -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(depth, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4)
                .prop_map(|items| Value::List(Sequence::from(items))),
            proptest::collection::vec((arb_key(), inner), 0..4)
                .prop_map(|pairs| Value::Map(pairs.into_iter().collect())),
        ]
    })
}

pub fn arb_record() -> impl Strategy<Value = Record> {
    proptest::collection::vec((arb_key(), arb_value(2)), 0..6)
        .prop_map(|pairs| pairs.into_iter().collect::<Record>())
}

pub fn arb_sequence() -> impl Strategy<Value = Sequence> {
    proptest::collection::vec(arb_value(1), 0..6).prop_map(Sequence::from)
}

/// Two records with disjoint key sets.
pub fn arb_disjoint_records() -> impl Strategy<Value = (Record, Record)> {
    (arb_record(), arb_record()).prop_map(|(a, b)| {
        let b: Record = b
            .into_iter()
            .filter(|(k, _)| !a.contains_key(k))
            .collect();
        (a, b)
    })
}
