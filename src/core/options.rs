// recognized options for record operations
use serde::{Deserialize, Serialize};

use crate::core::record::Record;
use crate::core::types::Key;

/// Options accepted by [`Record::standardize`].
///
/// Unknown keys are ignored whether the options come from serde or from a
/// record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandardizeOptions {
    /// Fail on the first missing key instead of filling it with null.
    pub errors: bool,
}

impl StandardizeOptions {
    pub fn strict() -> Self {
        StandardizeOptions { errors: true }
    }

    pub fn lenient() -> Self {
        StandardizeOptions { errors: false }
    }

    //reads `errors` under a symbolic or textual key, symbolic first
    pub fn from_record(options: &Record) -> Self {
        let errors = options
            .get(&Key::sym("errors"))
            .or_else(|| options.get(&Key::text("errors")))
            .is_some_and(|v| v.is_truthy());
        StandardizeOptions { errors }
    }
}

impl From<&Record> for StandardizeOptions {
    fn from(options: &Record) -> Self {
        Self::from_record(options)
    }
}
