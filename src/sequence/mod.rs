pub mod scope;

pub use scope::{exclude_scope, scope, Field};
