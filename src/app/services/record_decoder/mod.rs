//! Fixed-width record decoder for the account master file
//!
//! Turns one raw master file line into a [`ParsedRecord`](crate::app::models::ParsedRecord).
//! Slicing is byte-offset based, so every record is first scrubbed down to
//! plain ASCII: a multi-byte character left in place would shift every field
//! boundary after it.
//!
//! ## Architecture
//!
//! - [`normalize`] - UTF-8 / Latin-1 / ASCII normalization pipeline
//! - [`decoder`] - Length validation and field slicing
//! - [`reader`] - Line reader over the master file that keeps line terminators
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ncoa_processor::app::services::record_decoder::{FixedWidthReader, decode_records};
//!
//! # fn example() -> ncoa_processor::Result<()> {
//! let reader = FixedWidthReader::open(std::path::Path::new("master.txt"))?;
//! for record in decode_records(reader) {
//!     let record = record?;
//!     println!("{} -> {}", record.company_account_key(), record.company_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod decoder;
pub mod normalize;
pub mod reader;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use decoder::{decode_record, decode_records, field_spans};
pub use normalize::normalize_record;
pub use reader::{FixedWidthReader, RawLine};
