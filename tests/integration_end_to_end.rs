//! End-to-end tests for the parse and merge passes
//!
//! Each test writes a small master file (and feed) into a temporary
//! directory, runs a whole pass through the library API and reads the
//! produced files back.

use ncoa_processor::Error;
use ncoa_processor::cli::commands::{merge_files, parse_file};
use ncoa_processor::config::Config;
use ncoa_processor::constants::{FIELD_LAYOUT, FILTERED_HEADER, MERGED_HEADER, NORMALIZED_HEADER};
use calamine::{Reader, Xlsx, open_workbook};
use std::path::Path;
use tempfile::TempDir;

/// Render one fixed-width master line from field values in layout order
fn master_line(values: [&str; 11]) -> String {
    let mut line = String::new();
    for ((_, width), value) in FIELD_LAYOUT.iter().zip(values) {
        line.push_str(&format!("{:<width$.width$}", value, width = *width));
    }
    line.push('\n');
    line
}

fn eligible_record() -> String {
    master_line([
        "00012",
        "0000098765",
        "ACME MUTUAL FUNDS",
        "JOHN A SMITH",
        "JANE B SMITH JT TEN",
        "1200 OAK HOLLOW RD",
        "AUSTIN TX 78701",
        "",
        "",
        "3",
        "",
    ])
}

fn ineligible_record() -> String {
    master_line([
        "00012",
        "0000011111",
        "ACME MUTUAL FUNDS",
        "MARY JONES",
        "9 ELM ST",
        "WACO TX 76701",
        "",
        "",
        "",
        "2",
        "W9",
    ])
}

fn filtered_record() -> String {
    master_line([
        "00099",
        "0000000001",
        "OTHER FUND CO",
        "ROBERT BROWN",
        "77 PINE CT",
        "TYLER TX 75701",
        "",
        "",
        "",
        "2",
        "",
    ])
}

const FEED_HEADER: &str = "CompAcctNo,FullName,Company,Company2,Company3,Company4,Company5,\
Updated Address 1,Updated Address 2,Updated Address 3,Updated Address 4,City,State,Zip 4,\
Return Code,Footnote,NCOALink Return Code,Move Date,Move Type";

fn quiet_config() -> Config {
    let mut config = Config::default();
    config.processing.show_progress = false;
    config
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect()
}

fn read_sheet(workbook: &mut Xlsx<std::io::BufReader<std::fs::File>>, sheet: &str) -> Vec<Vec<String>> {
    workbook
        .worksheet_range(sheet)
        .unwrap()
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn write_master(dir: &Path) -> std::path::PathBuf {
    let master = dir.join("NCOA_master.txt");
    let data = [eligible_record(), filtered_record(), ineligible_record()].concat();
    std::fs::write(&master, data).unwrap();
    master
}

#[test]
fn test_parse_pass_writes_all_outputs() {
    let temp_dir = TempDir::new().unwrap();
    let master = write_master(temp_dir.path());
    std::fs::write(
        temp_dir.path().join("records_to_filter.txt"),
        "000990000000001\n\n",
    )
    .unwrap();

    let outcome = parse_file(&master, None, temp_dir.path(), &quiet_config()).unwrap();

    assert_eq!(outcome.counts.eligible, 1);
    assert_eq!(outcome.counts.ineligible, 1);
    assert_eq!(outcome.counts.filtered, 1);
    assert_eq!(outcome.counts.total_records(), 3);

    let parsed = read_rows(&outcome.parsed_file);
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[0], NORMALIZED_HEADER.to_vec());
    assert!(parsed.iter().all(|row| row.len() == NORMALIZED_HEADER.len()));
    assert_eq!(
        parsed[1],
        vec![
            "000120000098765",
            "JOHN A SMITH",
            "JANE B SMITH JT TEN",
            "",
            "",
            "",
            "",
            "1200 OAK HOLLOW RD",
            "",
            "",
            "",
            "AUSTIN TX 78701",
            "3",
            "",
        ]
    );
    assert_eq!(parsed[2][0], "000120000011111");
    assert_eq!(parsed[2][13], "W9");

    let filtered = read_rows(&outcome.filtered_file);
    assert_eq!(filtered[0], FILTERED_HEADER.to_vec());
    assert_eq!(filtered[1], vec!["2", "00099", "0000000001", "ROBERT BROWN"]);

    let counts = std::fs::read_to_string(&outcome.counts_file).unwrap();
    assert!(counts.starts_with("Filename: NCOA_master.txt\r\nTotal Record count: 3\r\n"));
    assert!(counts.contains("Company Numbers filtered: ['000990000000001', '']"));
    assert!(counts.ends_with("Address Start Points: 2, 3"));
}

#[test]
fn test_parse_pass_without_filter_list() {
    let temp_dir = TempDir::new().unwrap();
    let master = write_master(temp_dir.path());

    let outcome = parse_file(&master, None, temp_dir.path(), &quiet_config()).unwrap();

    assert_eq!(outcome.counts.filtered, 0);
    assert_eq!(outcome.counts.records_to_process(), 3);
    assert_eq!(read_rows(&outcome.filtered_file).len(), 1);
}

#[test]
fn test_parse_pass_stops_on_malformed_record() {
    let temp_dir = TempDir::new().unwrap();
    let master = temp_dir.path().join("NCOA_master.txt");
    std::fs::write(&master, [eligible_record(), "SHORT LINE\n".to_string()].concat()).unwrap();

    let error = parse_file(&master, None, temp_dir.path(), &quiet_config()).unwrap_err();

    assert!(matches!(error, Error::Decode { line: 2, .. }));
    assert!(!temp_dir.path().join("ParsedData.csv").exists());
}

#[test]
fn test_merge_pass_writes_merged_file_and_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let master = write_master(temp_dir.path());
    let feed = temp_dir.path().join("ParsedData_MM.csv");
    std::fs::write(
        &feed,
        format!(
            "{}\n{}\n{}\n",
            FEED_HEADER,
            "000120000011111,MARY JONES,,,,,,,1 RIVER RD,,,WACO,TX,76710-2222,A,91,M,202406,F",
            "000120000098765,JOHN A SMITH,JANE B SMITH JT TEN,,,,,400 LAKE DR,,,,AUSTIN,TX,78702-1111,A,91,M,202407,I",
        ),
    )
    .unwrap();

    let outcome = merge_files(&master, &feed, temp_dir.path(), &quiet_config()).unwrap();

    assert_eq!(outcome.result.eligible.len(), 1);
    assert_eq!(outcome.result.ineligible.len(), 1);

    let merged = read_rows(&outcome.merged_file);
    assert_eq!(merged.len(), 3);
    assert_eq!(merged[0], MERGED_HEADER.to_vec());
    assert!(merged.iter().all(|row| row.len() == MERGED_HEADER.len()));
    assert_eq!(
        merged[1],
        vec![
            "",
            "00012",
            "0000098765",
            "ACME MUTUAL FUNDS",
            "JOHN A SMITH",
            "JANE B SMITH JT TEN",
            "1200 OAK HOLLOW RD",
            "AUSTIN TX 78701",
            "",
            "",
            "3",
            "JOHN A SMITH",
            "JANE B SMITH JT TEN",
            "400 LAKE DR",
            "AUSTIN, TX 78702-1111",
            "",
            "",
            "A",
            "91",
            "M",
            "202407",
            "I",
        ]
    );

    // Leading blank slot is restored from the original registration lines
    assert_eq!(merged[2][0], "W9");
    assert_eq!(
        merged[2][11..17].to_vec(),
        vec!["MARY JONES", "9 ELM ST", "1 RIVER RD", "WACO, TX 76710-2222", "", ""]
    );

    assert_eq!(
        outcome.workbook_file,
        temp_dir.path().join("Quarterly NCOA_36_37_38.xlsx")
    );
    let mut workbook: Xlsx<_> = open_workbook(&outcome.workbook_file).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Eligible", "Ineligible"]);
    let eligible = read_sheet(&mut workbook, "Eligible");
    let ineligible = read_sheet(&mut workbook, "Ineligible");
    assert_eq!(eligible.len(), 2);
    assert_eq!(ineligible.len(), 2);
    assert_eq!(eligible[0], MERGED_HEADER.to_vec());
    assert_eq!(ineligible[0], MERGED_HEADER.to_vec());
    assert_eq!(eligible[1], merged[1]);
    assert_eq!(ineligible[1], merged[2]);
}

#[test]
fn test_merge_pass_unknown_account() {
    let temp_dir = TempDir::new().unwrap();
    let master = write_master(temp_dir.path());
    let feed = temp_dir.path().join("feed.csv");
    std::fs::write(
        &feed,
        format!(
            "{}\n{}\n",
            FEED_HEADER, "000550000000055,NOBODY,,,,,,1 MAIN ST,,,,DALLAS,TX,75201,A,,,,"
        ),
    )
    .unwrap();

    let error = merge_files(&master, &feed, temp_dir.path(), &quiet_config()).unwrap_err();

    match error {
        Error::MissingOriginalRecord { key, row } => {
            assert_eq!(key, "000550000000055");
            assert_eq!(row, 1);
        }
        other => panic!("expected missing original record, got {:?}", other),
    }
    assert!(!temp_dir.path().join("NCOA_Records.csv").exists());
}

#[test]
fn test_merge_pass_rejects_feed_without_state() {
    let temp_dir = TempDir::new().unwrap();
    let master = write_master(temp_dir.path());
    let feed = temp_dir.path().join("feed.csv");
    std::fs::write(&feed, FEED_HEADER.replace(",State,", ",Province,")).unwrap();

    let error = merge_files(&master, &feed, temp_dir.path(), &quiet_config()).unwrap_err();

    match error {
        Error::Schema { message } => assert!(message.contains("State")),
        other => panic!("expected schema error, got {:?}", other),
    }
}
