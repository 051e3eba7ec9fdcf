//! Fully quoted CSV output
//!
//! Every field is quoted and records end in CRLF, matching what the address
//! standardization software expects on import.

use crate::{Error, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write a header and rows to a CSV file, quoting every field
///
/// Returns the number of data rows written.
pub fn write_csv<I, R, S>(path: &Path, header: &[&str], rows: I) -> Result<usize>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let file = std::fs::File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

    let count = write_csv_to(file, header, rows)
        .map_err(|e| Error::csv(path.display().to_string(), "Failed to write rows", Some(e)))?;

    info!("Wrote {} rows to {}", count, path.display());
    Ok(count)
}

/// Write a header and rows to any writer, quoting every field
pub fn write_csv_to<W, I, R, S>(writer: W, header: &[&str], rows: I) -> csv::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(header)?;

    let mut count = 0;
    for row in rows {
        csv_writer.write_record(row)?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}
