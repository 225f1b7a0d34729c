pub mod types;
pub mod record;
pub mod keys;
pub mod options;
pub mod sanitation;
pub mod sets;
pub mod delta;
pub mod json;

#[cfg(test)]
pub(crate) mod strategy;
