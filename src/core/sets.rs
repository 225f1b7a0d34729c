// subset / superset relations
use crate::core::record::{AlgebraError, Record};
use crate::core::types::{Sequence, Value};

impl Record {
    /// True when every pair of `self` is present in `other` with an equal
    /// value. The empty record is a subset of every record.
    pub fn is_subset_of(&self, other: &Record) -> bool {
        self.iter().all(|(k, v)| other.get(k) == Some(v))
    }

    pub fn is_superset_of(&self, other: &Record) -> bool {
        other.is_subset_of(self)
    }
}

impl Sequence {
    /// Set semantics: every element of `self` occurs somewhere in `other`.
    /// Order and multiplicity are ignored.
    pub fn is_subset_of(&self, other: &Sequence) -> bool {
        self.iter().all(|item| other.contains(item))
    }

    pub fn is_superset_of(&self, other: &Sequence) -> bool {
        other.is_subset_of(self)
    }
}

impl Value {
    /// Dynamic form of the subset relation. Both operands must be records
    /// or both sequences.
    pub fn is_subset_of(&self, other: &Value) -> Result<bool, AlgebraError> {
        match (self, other) {
            (Value::Map(a), Value::Map(b)) => Ok(a.is_subset_of(b)),
            (Value::List(a), Value::List(b)) => Ok(a.is_subset_of(b)),
            _ => Err(self.mismatch("is_subset_of", other)),
        }
    }

    pub fn is_superset_of(&self, other: &Value) -> Result<bool, AlgebraError> {
        match (self, other) {
            (Value::Map(a), Value::Map(b)) => Ok(a.is_superset_of(b)),
            (Value::List(a), Value::List(b)) => Ok(a.is_superset_of(b)),
            _ => Err(self.mismatch("is_superset_of", other)),
        }
    }

    pub(crate) fn mismatch(&self, operation: &'static str, other: &Value) -> AlgebraError {
        tracing::debug!(operation, receiver = %self.kind(), argument = %other.kind(), "type mismatch");
        AlgebraError::TypeMismatch {
            operation,
            receiver: self.kind(),
            argument: other.kind(),
        }
    }
}
