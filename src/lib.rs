//! An algebra over insertion-ordered keyed records and sequences of them:
//! key normalization, projection, standardization, subset relations, merge
//! and restricted difference, and value-scoped filtering.
//!
//! Every operation has a non-destructive form returning an independent
//! result; most also have an `*_in_place` form that rewrites the receiver
//! and hands it back.

pub mod core;
pub mod invoke;
pub mod sequence;

pub use crate::core::options::StandardizeOptions;
pub use crate::core::record::{AlgebraError, Record};
pub use crate::core::sanitation::KeyList;
pub use crate::core::types::{Key, Sequence, Value, ValueKind};
pub use crate::invoke::{try_invoke, InvokeError};
pub use crate::sequence::{exclude_scope, scope, Field};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
