//! Address merge engine for the merge pass
//!
//! Combines each move-update feed row with the original master record of
//! the same account, pulling missing registration lines back in from the
//! original according to the backfill policy in [`merge`].
//!
//! # Processing Pipeline
//!
//! 1. **Schema resolution**: the feed header is checked for every expected
//!    column before any row is read
//! 2. **Index build**: the whole master file is decoded into an in-memory
//!    index keyed by company + account number
//! 3. **Merge**: each feed row is joined to its original record, split and
//!    merged, then routed by status
//!
//! The index holds every decoded master record at once, so memory grows
//! linearly with the master file. There is no streaming join.
//!
//! - [`original_index`] - Join key → original record lookup
//! - [`update_feed`] - Feed schema resolution and row reading
//! - [`merge`] - Registration-line backfill and row assembly
//! - [`processor`] - Batch merge over a whole feed

pub mod merge;
pub mod original_index;
pub mod processor;
pub mod update_feed;

#[cfg(test)]
pub mod tests;

pub use merge::{backfill_registration_lines, merge};
pub use original_index::OriginalIndex;
pub use processor::{MergeResult, merge_feed};
pub use update_feed::{FeedSchema, UpdateFeedReader};
