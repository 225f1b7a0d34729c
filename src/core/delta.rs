// merge (+) and restricted difference (-)
use std::ops::{Add, Sub};

use crate::core::record::{AlgebraError, Record};
use crate::core::types::Value;

impl Record {
    /// Deep copy of `self` with every pair of `other` applied on top;
    /// `other` wins on key collisions.
    pub fn merge(&self, other: &Record) -> Record {
        let mut out = self.deep_dup();
        for (k, v) in other.iter() {
            out.entries.insert(k.clone(), v.clone());
        }
        out
    }

    /// Deep copy of `self` without the keys of `other`.
    ///
    /// `other` must be a subset of `self` (same keys bound to equal
    /// values), which makes this the inverse of a collision-free
    /// [`Record::merge`]. To drop keys regardless of their values use
    /// [`Record::without`].
    pub fn subtract(&self, other: &Record) -> Result<Record, AlgebraError> {
        if !self.is_superset_of(other) {
            tracing::debug!(receiver = %self, operand = %other, "subtract: operand is not a subset");
            return Err(AlgebraError::InvalidOperand {
                receiver: Box::new(self.clone()),
                operand: Box::new(other.clone()),
            });
        }

        Ok(self
            .iter()
            .filter(|(k, _)| !other.contains_key(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

impl Add<&Record> for &Record {
    type Output = Record;

    fn add(self, rhs: &Record) -> Record {
        self.merge(rhs)
    }
}

impl Add for Record {
    type Output = Record;

    fn add(mut self, rhs: Record) -> Record {
        for (k, v) in rhs {
            self.entries.insert(k, v);
        }
        self
    }
}

impl Sub<&Record> for &Record {
    type Output = Result<Record, AlgebraError>;

    fn sub(self, rhs: &Record) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Value {
    /// Dynamic merge: both operands must be records.
    pub fn merge(&self, other: &Value) -> Result<Value, AlgebraError> {
        match (self, other) {
            (Value::Map(a), Value::Map(b)) => Ok(Value::Map(a.merge(b))),
            _ => Err(self.mismatch("merge", other)),
        }
    }

    /// Dynamic difference: both operands must be records.
    pub fn subtract(&self, other: &Value) -> Result<Value, AlgebraError> {
        match (self, other) {
            (Value::Map(a), Value::Map(b)) => a.subtract(b).map(Value::Map),
            _ => Err(self.mismatch("subtract", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::strategy::{arb_disjoint_records, arb_record};
    use crate::core::types::{Key, Sequence, ValueKind};
    use proptest::prelude::*;

    fn foo_baz() -> Record {
        Record::from([(Key::sym("foo"), "bar"), (Key::sym("baz"), "qux")])
    }

    #[test]
    fn merge_lets_argument_win_and_keeps_receiver() {
        let r = foo_baz();
        let patch = Record::from([(Key::sym("baz"), "zap")]);

        let merged = &r + &patch;
        assert_eq!(merged, Record::from([(Key::sym("foo"), "bar"), (Key::sym("baz"), "zap")]));
        assert_eq!(r, foo_baz());

        let owned = r.clone() + patch.clone();
        assert_eq!(owned, merged);
    }

    #[test]
    fn merge_result_is_independent_of_receiver() {
        let mut r = Record::new();
        r.insert("nested", Record::from([("n", 1)]));

        let mut merged = r.merge(&Record::new());
        if let Some(Value::Map(m)) = merged.get_mut(&Key::from("nested")) {
            m.insert("n", 2);
        }
        assert_eq!(r, Record::from([("nested", Record::from([("n", 1)]))]));
    }

    #[test]
    fn subtract_removes_merged_pairs() {
        let merged = &foo_baz() + &Record::from([(Key::sym("baz"), "zap")]);
        let out = (&merged - &Record::from([(Key::sym("baz"), "zap")])).unwrap();
        assert_eq!(out, Record::from([(Key::sym("foo"), "bar")]));
    }

    #[test]
    fn subtract_rejects_non_subset() {
        let r = Record::from([(Key::sym("foo"), "bar")]);

        let err = r.subtract(&Record::from([(Key::sym("nope"), 1)])).unwrap_err();
        assert!(matches!(err, AlgebraError::InvalidOperand { .. }));

        //same key, different value
        let err = r.subtract(&Record::from([(Key::sym("foo"), "other")])).unwrap_err();
        match err {
            AlgebraError::InvalidOperand { receiver, operand } => {
                assert_eq!(*receiver, r);
                assert_eq!(*operand, Record::from([(Key::sym("foo"), "other")]));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn nan_record_subtracts_from_itself_and_round_trips() {
        let a = Record::from([("x", f64::NAN)]);
        assert_eq!(a.subtract(&a).unwrap(), Record::new());

        let base = Record::from([("y", 1)]);
        let merged = &base + &a;
        assert_eq!(merged.subtract(&a).unwrap(), base);
    }

    #[test]
    fn subtracting_empty_record_is_a_copy() {
        let r = foo_baz();
        assert_eq!(r.subtract(&Record::new()).unwrap(), r);
    }

    #[test]
    fn dynamic_merge_and_subtract_require_records() {
        let r = Value::Map(foo_baz());
        let seq = Value::List(Sequence::from([1]));

        assert_eq!(
            r.merge(&seq).unwrap_err(),
            AlgebraError::TypeMismatch {
                operation: "merge",
                receiver: ValueKind::Map,
                argument: ValueKind::List,
            }
        );
        assert!(matches!(
            seq.subtract(&r),
            Err(AlgebraError::TypeMismatch { operation: "subtract", .. })
        ));

        let merged = r.merge(&Value::Map(Record::from([("x", 1)]))).unwrap();
        let back = merged.subtract(&Value::Map(Record::from([("x", 1)]))).unwrap();
        assert_eq!(back, r);
    }

    proptest! {
        #[test]
        fn merge_then_subtract_round_trips_for_disjoint_keys((a, b) in arb_disjoint_records()) {
            let merged = &a + &b;
            prop_assert_eq!(merged.subtract(&b).unwrap(), a);
        }

        #[test]
        fn merge_contains_argument(a in arb_record(), b in arb_record()) {
            let merged = a.merge(&b);
            prop_assert!(b.is_subset_of(&merged));
            prop_assert!(merged.is_superset_of(&b));
        }
    }
}
