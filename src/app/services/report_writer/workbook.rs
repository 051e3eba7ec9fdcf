//! Two-sheet workbook for the merged output
//!
//! The workbook is a single `.xlsx` file named after the workbook. Each sheet
//! starts with the same header row, followed by its rows as text cells.

use crate::{Error, Result};
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use std::path::{Path, PathBuf};
use tracing::info;

/// One sheet of rows under a shared header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

/// Ordered set of sheets sharing one header
#[derive(Debug, Clone)]
pub struct Workbook {
    name: String,
    header: Vec<String>,
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(name: impl Into<String>, header: &[&str]) -> Self {
        Self {
            name: name.into(),
            header: header.iter().map(|h| h.to_string()).collect(),
            sheets: Vec::new(),
        }
    }

    /// Append a sheet; sheet order is preserved
    pub fn add_sheet(&mut self, sheet: Sheet) -> &mut Self {
        self.sheets.push(sheet);
        self
    }

    /// File the workbook is written to under `output_dir`
    pub fn path_in(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.xlsx", self.name))
    }

    /// Write every sheet in order, returning the workbook file
    pub fn save(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = self.path_in(output_dir);
        let file = path.display().to_string();

        let mut workbook = XlsxWorkbook::new();
        for sheet in &self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(&sheet.name)
                .map_err(|e| Error::workbook(&file, format!("Invalid sheet name '{}'", sheet.name), e))?;

            let rows = std::iter::once(&self.header).chain(&sheet.rows);
            for (row_num, row) in (0u32..).zip(rows) {
                for (col_num, value) in (0u16..).zip(row) {
                    worksheet
                        .write_string(row_num, col_num, value.as_str())
                        .map_err(|e| {
                            Error::workbook(
                                &file,
                                format!("Failed to write row {} of sheet '{}'", row_num, sheet.name),
                                e,
                            )
                        })?;
                }
            }
        }

        workbook
            .save(&path)
            .map_err(|e| Error::workbook(&file, "Failed to save workbook", e))?;

        info!("Saved workbook {} with {} sheets", file, self.sheets.len());
        Ok(path)
    }
}
