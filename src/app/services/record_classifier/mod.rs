//! Record classification for the parse pass
//!
//! Routes every decoded master record into one of three buckets:
//!
//! 1. **Filtered**: the company number, or company + account key, is on the
//!    filter list. Kept only as an audit entry and never split.
//! 2. **Eligible**: blank status; split into a normalized row.
//! 3. **Ineligible**: populated status; split into a normalized row.
//!
//! Buckets keep input order and are returned by value from
//! [`classify_records`]; nothing is accumulated in shared state.
//!
//! - [`filter_list`] - Company / account filter list loading and matching
//! - [`classifier`] - Per-record classification and the batch run
//! - [`result`] - Bucket container returned by the batch run

pub mod classifier;
pub mod filter_list;
pub mod result;

#[cfg(test)]
pub mod tests;

pub use classifier::{Classification, classify, classify_records};
pub use filter_list::FilterList;
pub use result::ClassificationResult;
