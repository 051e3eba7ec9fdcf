//! Registration/address line splitter
//!
//! Name lines and street lines share one flat block of six registration
//! fields in the master file. The record's address start point is the only
//! signal separating them, and this module is the single place where that
//! split is made.
//!
//! - [`splitter`] - Non-blank field partitioning and start point validation

pub mod splitter;

#[cfg(test)]
pub mod tests;

pub use splitter::{SplitFailure, address_start_point, split, split_fields};
