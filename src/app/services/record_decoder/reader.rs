//! Line reader for the fixed-width master file
//!
//! Lines keep their `\n` terminator because it is counted in the record
//! width. An unterminated final line is given one.

use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::constants::RECORD_WIDTH;

/// One raw line of the master file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// One-based line number
    pub line_number: usize,
    /// Line bytes including the terminator
    pub bytes: Vec<u8>,
}

/// Iterator over the raw lines of a master file
#[derive(Debug)]
pub struct FixedWidthReader<R> {
    reader: R,
    line_number: usize,
    failed: bool,
}

impl FixedWidthReader<BufReader<File>> {
    /// Open a master file for reading
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> FixedWidthReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for FixedWidthReader<R> {
    type Item = Result<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut bytes = Vec::with_capacity(RECORD_WIDTH + 1);
        match self.reader.read_until(b'\n', &mut bytes) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                if bytes.last() != Some(&b'\n') {
                    bytes.push(b'\n');
                }
                Some(Ok(RawLine {
                    line_number: self.line_number,
                    bytes,
                }))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(Error::io(
                    format!("Failed to read line {}", self.line_number + 1),
                    e,
                )))
            }
        }
    }
}
