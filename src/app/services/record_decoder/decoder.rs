//! Field slicing and length validation for master file records

use tracing::debug;

use super::normalize::normalize_record;
use super::reader::{FixedWidthReader, RawLine};
use crate::app::models::{Field, ParsedRecord};
use crate::constants::{FIELD_LAYOUT, RECORD_WIDTH};
use crate::{Error, Result};
use std::io::BufRead;

/// Decode one raw master file line into a parsed record
///
/// `raw` is the full line including its `\n` terminator. The record must be
/// exactly [`RECORD_WIDTH`] bytes once normalized; anything else is a fatal
/// [`Error::Decode`] carrying the line number, the observed length and the
/// offending content.
pub fn decode_record(raw: &[u8], line_number: usize) -> Result<ParsedRecord> {
    let normalized = normalize_record(raw);

    if normalized.len() != RECORD_WIDTH {
        let content = String::from_utf8_lossy(raw);
        return Err(Error::decode(
            line_number,
            normalized.len(),
            RECORD_WIDTH,
            content.trim_end_matches(['\r', '\n']),
        ));
    }

    let spans = field_spans(&normalized).ok_or_else(|| {
        Error::decode(line_number, normalized.len(), RECORD_WIDTH, normalized.as_str())
    })?;

    let mut record = ParsedRecord::new(line_number);
    for (field, span) in spans {
        record.set(field, span.trim().to_string());
    }

    debug!("Decoded {}", record.describe());
    Ok(record)
}

/// Untrimmed byte spans of every layout field, in layout order
///
/// Returns `None` if the record is shorter than the layout. Bytes past the
/// layout (the line terminator) are not part of any span.
pub fn field_spans(normalized: &str) -> Option<Vec<(Field, &str)>> {
    let mut offset = 0;
    FIELD_LAYOUT
        .iter()
        .map(|&(field, width)| {
            let span = normalized.get(offset..offset + width)?;
            offset += width;
            Some((field, span))
        })
        .collect()
}

/// Decode every line of a master file reader, stopping callers at the first error
pub fn decode_records<R: BufRead>(
    reader: FixedWidthReader<R>,
) -> impl Iterator<Item = Result<ParsedRecord>> {
    reader.map(|line| {
        line.and_then(|RawLine { line_number, bytes }| decode_record(&bytes, line_number))
    })
}
