//! Test utilities for fixed-width record decoding
//!
//! The builders here are shared with the splitter, classifier and merge
//! tests, which all start from raw master file lines.

use crate::constants::FIELD_LAYOUT;


/// Field values of a master record in layout order
#[derive(Debug, Clone)]
pub struct RawRecordBuilder {
    pub company_number: String,
    pub account_number: String,
    pub company_name: String,
    pub registration_lines: [String; 6],
    pub address_start_point: String,
    pub status: String,
}

impl RawRecordBuilder {
    pub fn new(company_number: &str, account_number: &str) -> Self {
        Self {
            company_number: company_number.to_string(),
            account_number: account_number.to_string(),
            company_name: "ACME MUTUAL FUNDS".to_string(),
            registration_lines: Default::default(),
            address_start_point: "2".to_string(),
            status: String::new(),
        }
    }

    pub fn company_name(mut self, name: &str) -> Self {
        self.company_name = name.to_string();
        self
    }

    pub fn lines(mut self, lines: [&str; 6]) -> Self {
        self.registration_lines = lines.map(str::to_string);
        self
    }

    pub fn start_point(mut self, start_point: &str) -> Self {
        self.address_start_point = start_point.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    /// Field values in layout order
    pub fn values(&self) -> Vec<&str> {
        let mut values = vec![
            self.company_number.as_str(),
            self.account_number.as_str(),
            self.company_name.as_str(),
        ];
        values.extend(self.registration_lines.iter().map(String::as_str));
        values.push(self.address_start_point.as_str());
        values.push(self.status.as_str());
        values
    }

    /// Render the 295-byte line, terminator included
    pub fn build(&self) -> Vec<u8> {
        self.build_line().into_bytes()
    }

    /// Render the line as text, terminator included
    pub fn build_line(&self) -> String {
        let mut line = String::new();
        for ((_, width), value) in FIELD_LAYOUT.iter().zip(self.values()) {
            line.push_str(&format!("{:<width$.width$}", value, width = *width));
        }
        line.push('\n');
        line
    }
}

/// Typical eligible individual account: two name lines, one street line
pub fn sample_record() -> RawRecordBuilder {
    RawRecordBuilder::new("00012", "0000098765")
        .lines([
            "JOHN A SMITH",
            "JANE B SMITH JT TEN",
            "1200 OAK HOLLOW RD",
            "AUSTIN TX 78701",
            "",
            "",
        ])
        .start_point("3")
}
