//! NCOA Processor Library
//!
//! A Rust library for reconciling a fixed-width account master file with an
//! externally standardized NCOA (National Change of Address) move-update feed.
//!
//! This library provides tools for:
//! - Decoding 295-byte fixed-width records with strict ASCII normalization
//! - Splitting the flat registration/address lines using the address start point
//! - Routing records into eligible, ineligible and filtered buckets
//! - Merging original registration lines with updated addresses
//! - Writing the normalized, merged, audit and counts outputs

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod address_merge;
        pub mod address_splitter;
        pub mod record_classifier;
        pub mod record_decoder;
        pub mod report_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    AddressStartPoint, Eligibility, MergedOutputRecord, ParsedRecord, SplitAddress,
    UpdatedAddressRecord,
};
pub use config::Config;

/// Result type alias for the NCOA processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for NCOA processing operations
///
/// Every record-level variant is fatal: the batch aborts on the first one.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading or writing error
    #[error("CSV error in file '{file}': {message}")]
    Csv {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Record length after normalization is not the fixed record width
    #[error(
        "Character error found in line {line}: record is {length} bytes after normalization, expected {expected}\n{content}"
    )]
    Decode {
        line: usize,
        length: usize,
        expected: usize,
        content: String,
    },

    /// Address start point invalid or registration/address lines do not fit
    #[error("Address split error for {record}: {message}")]
    Split { record: String, message: String },

    /// Spreadsheet workbook could not be written
    #[error("Workbook error in file '{file}': {message}")]
    Workbook {
        file: String,
        message: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// Update feed references an account that is not in the original file
    #[error("No original record for account '{key}' (update feed row {row})")]
    MissingOriginalRecord { key: String, row: usize },

    /// Update feed header or row does not carry an expected column
    #[error("Update feed schema error: {message}")]
    Schema { message: String },

    /// Merged address lines exceed the output slots
    #[error("Merged address for account '{key}' has {count} lines, only {capacity} fit")]
    AddressOverflow {
        key: String,
        count: usize,
        capacity: usize,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV error with context
    pub fn csv(file: impl Into<String>, message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::Csv {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a workbook error with context
    pub fn workbook(
        file: impl Into<String>,
        message: impl Into<String>,
        source: rust_xlsxwriter::XlsxError,
    ) -> Self {
        Self::Workbook {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a decode error for a record of the wrong width
    pub fn decode(line: usize, length: usize, expected: usize, content: impl Into<String>) -> Self {
        Self::Decode {
            line,
            length,
            expected,
            content: content.into(),
        }
    }

    /// Create an address split error
    pub fn split(record: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Split {
            record: record.into(),
            message: message.into(),
        }
    }

    /// Create a missing original record error
    pub fn missing_original_record(key: impl Into<String>, row: usize) -> Self {
        Self::MissingOriginalRecord {
            key: key.into(),
            row,
        }
    }

    /// Create an update feed schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Create an address overflow error
    pub fn address_overflow(key: impl Into<String>, count: usize, capacity: usize) -> Self {
        Self::AddressOverflow {
            key: key.into(),
            count,
            capacity,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            file: "unknown".to_string(),
            message: "CSV operation failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid configuration file: {}", error),
        }
    }
}
