//! Output assembly for both processing passes
//!
//! The core services hand over fully formed rows and headers; this module
//! only turns them into files and console feedback.
//!
//! - [`csv_output`] - Fully quoted CSV files (normalized, filtered, merged)
//! - [`workbook`] - Eligible/Ineligible sheet workbook for the merged rows
//! - [`counts`] - Plain-text counts report of the parse pass
//! - [`progress`] - Progress bar and periodic progress logging

pub mod counts;
pub mod csv_output;
pub mod progress;
pub mod workbook;

#[cfg(test)]
pub mod tests;

pub use counts::CountsReport;
pub use csv_output::write_csv;
pub use progress::ProgressReporter;
pub use workbook::{Sheet, Workbook};
