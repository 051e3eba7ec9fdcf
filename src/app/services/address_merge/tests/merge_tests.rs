//! Tests for registration-line backfill and merged row assembly

use super::super::merge::{backfill_registration_lines, merge};
use super::updated_record;
use crate::Error;
use crate::app::models::{AddressStartPoint, ParsedRecord};
use crate::app::services::address_splitter::split;
use crate::app::services::record_decoder::decode_record;
use crate::app::services::record_decoder::tests::RawRecordBuilder;
use crate::constants::MERGED_HEADER;

fn original(lines: [&str; 6], start_point: &str, status: &str) -> ParsedRecord {
    let raw = RawRecordBuilder::new("00012", "0000098765")
        .lines(lines)
        .start_point(start_point)
        .status(status)
        .build();
    decode_record(&raw, 1).unwrap()
}

fn lines(values: [&str; 6]) -> [String; 6] {
    values.map(str::to_string)
}

fn slots(values: [&str; 4]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_all_blank_slots_backfill_from_start_position() {
    let original = original(["ACME", "LLC", "", "", "", " "], "2", "");
    let split = split(&original).unwrap();
    let update = updated_record("000120000098765", ["", "", "", "", "", ""], ["", "", "", ""]);

    let merged = merge(&original, &split, &update).unwrap();

    // Position start+0 is "LLC"; the blank at start+1 is taken once
    assert_eq!(merged.new_address_lines[0], "LLC");
    assert_eq!(
        merged.new_address_lines,
        vec!["LLC", "", "DALLAS, TX 75201-1234", "", "", ""]
    );
}

#[test]
fn test_backfill_stops_at_first_non_blank_slot() {
    let original_lines = lines([
        "JOHN SMITH",
        "SMITH FAMILY TRUST",
        "500 ELM ST",
        "DALLAS TX 75201",
        "",
        "",
    ]);
    let mut accumulator = vec!["JOHN SMITH".to_string()];

    backfill_registration_lines(
        &original_lines,
        AddressStartPoint::new(2).unwrap(),
        &slots(["", "123 MAIN ST", "", ""]),
        &mut accumulator,
    );

    assert_eq!(
        accumulator,
        vec!["JOHN SMITH", "SMITH FAMILY TRUST", "123 MAIN ST"]
    );
}

#[test]
fn test_backfill_skips_values_already_present() {
    let original_lines = lines(["JOHN SMITH", "SMITH FAMILY TRUST", "500 ELM ST", "DALLAS TX", "", ""]);
    let mut accumulator = vec!["JOHN SMITH".to_string(), "SMITH FAMILY TRUST".to_string()];

    backfill_registration_lines(
        &original_lines,
        AddressStartPoint::new(2).unwrap(),
        &slots(["", "700 PINE AVE", "", ""]),
        &mut accumulator,
    );

    assert_eq!(
        accumulator,
        vec!["JOHN SMITH", "SMITH FAMILY TRUST", "700 PINE AVE"]
    );
}

#[test]
fn test_non_blank_slots_are_taken_verbatim() {
    let original_lines = lines(["JOHN SMITH", "500 ELM ST", "DALLAS TX", "", "", ""]);
    let mut accumulator = vec!["JOHN SMITH".to_string()];

    backfill_registration_lines(
        &original_lines,
        AddressStartPoint::new(2).unwrap(),
        &slots(["700 PINE AVE", "", "STE 200", ""]),
        &mut accumulator,
    );

    // Interior blank after a non-blank line is not backfilled
    assert_eq!(accumulator, vec!["JOHN SMITH", "700 PINE AVE", "STE 200"]);
}

#[test]
fn test_backfill_past_last_registration_line_is_skipped() {
    let original_lines = lines(["A", "B", "C", "D", "E", "F"]);
    let mut accumulator = Vec::new();

    backfill_registration_lines(
        &original_lines,
        AddressStartPoint::new(6).unwrap(),
        &slots(["", "", "", ""]),
        &mut accumulator,
    );

    assert_eq!(accumulator, vec!["F"]);
}

#[test]
fn test_merged_row_layout() {
    let original = original(
        ["JOHN SMITH", "SMITH FAMILY TRUST", "500 ELM ST", "DALLAS TX 75201", "", ""],
        "2",
        "W9",
    );
    let split = split(&original).unwrap();
    let update = updated_record(
        "000120000098765",
        ["JOHN SMITH", "", "", "", "", ""],
        ["", "123 MAIN ST", "", ""],
    );

    let merged = merge(&original, &split, &update).unwrap();
    let row = merged.to_row();

    assert_eq!(row.len(), MERGED_HEADER.len());
    assert_eq!(
        row,
        vec![
            "W9",
            "00012",
            "0000098765",
            "ACME MUTUAL FUNDS",
            "JOHN SMITH",
            "SMITH FAMILY TRUST",
            "500 ELM ST",
            "DALLAS TX 75201",
            "",
            "",
            "2",
            "JOHN SMITH",
            "SMITH FAMILY TRUST",
            "123 MAIN ST",
            "DALLAS, TX 75201-1234",
            "",
            "",
            "A",
            "91",
            "M",
            "202407",
            "I",
        ]
    );
}

#[test]
fn test_null_feed_name_lines_are_dropped() {
    let original = original(["JOHN SMITH", "500 ELM ST", "DALLAS TX", "", "", ""], "2", "");
    let split = split(&original).unwrap();
    let update = updated_record(
        "000120000098765",
        ["JOHN SMITH", "NULL", "null", "", "", ""],
        ["700 PINE AVE", "", "", ""],
    );

    let merged = merge(&original, &split, &update).unwrap();

    assert_eq!(
        merged.new_address_lines,
        vec!["JOHN SMITH", "700 PINE AVE", "DALLAS, TX 75201-1234", "", "", ""]
    );
}

#[test]
fn test_too_many_lines_is_overflow_error() {
    let original = original(["JOHN SMITH", "500 ELM ST", "DALLAS TX", "", "", ""], "2", "");
    let split = split(&original).unwrap();
    let update = updated_record(
        "000120000098765",
        ["N1", "N2", "N3", "N4", "N5", "N6"],
        ["700 PINE AVE", "", "", ""],
    );

    let error = merge(&original, &split, &update).unwrap_err();

    assert!(matches!(
        error,
        Error::AddressOverflow {
            count: 8,
            capacity: 6,
            ..
        }
    ));
}
