// tests/extract_rows.rs
//
// Extractor behavior over in-memory grids and small CSV inputs.
//
use std::fs;
use std::path::PathBuf;

use deed_desk::config::options::ExtractOptions;
use deed_desk::error::DeedError;
use deed_desk::extract::{self, extract_records, grid_from_rows, Cell, Grid};
use deed_desk::model::Status;
use deed_desk::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("deed_extract_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const HEADER: [&str; 8] = [
    "PARCEL NO.", "ADDRESS", "CASE NO.", "DEFENDANT", "", "OPENING BID", "", "TYPE",
];

/// Title block, header, then the given data rows.
fn sheet(rows: &[[&str; 8]]) -> Grid {
    let mut all: Vec<Vec<&str>> = vec![
        vec!["CUYAHOGA COUNTY FORFEITED LAND SALE"],
        vec![],
        HEADER.to_vec(),
    ];
    all.extend(rows.iter().map(|r| r.to_vec()));
    grid_from_rows(&all)
}

#[test]
fn example_row_maps_to_record() {
    let grid = sheet(&[[
        "105-20-013", "8215 ST CLAIR AVE", "CV948061", "BOB NANCE, ET AL", "", "212204.35", "", "land",
    ]]);
    let out = extract_records(&grid, &ExtractOptions::default(), None).unwrap();

    assert_eq!(out.records.len(), 1);
    let r = &out.records[0];
    assert_eq!(r.parcel_no, "105-20-013");
    assert_eq!(r.address, "8215 ST CLAIR AVE");
    assert_eq!(r.case_no, "CV948061");
    assert_eq!(r.defendant, "BOB NANCE, ET AL");
    assert_eq!(r.opening_bid, 212204.35);
    assert_eq!(r.property_type, "land");
    assert_eq!(r.sale_date, "September 3, 2025");
    assert_eq!(r.status, Status::Available);
    assert_eq!(out.report.header_row, 2);
}

#[test]
fn only_parcel_shaped_rows_survive() {
    let grid = sheet(&[
        ["105-20-013", "A ST", "CV1", "D1", "", "10", "", "land"],
        ["THE FOLLOWING PARCELS WILL BE OFFERED SEPTEMBER 4", "", "", "", "", "", "", ""],
        ["PARCEL NO.", "ADDRESS", "", "", "", "", "", ""],
        ["", "ORPHAN CONTINUATION LINE", "", "", "", "", "", ""],
        ["TOTAL", "", "", "", "", "99", "", ""],
        ["10520013", "NO DASHES", "CV2", "D2", "", "5", "", "land"],
        ["110-01-001A", "SUFFIXED", "CV3", "D3", "", "7", "", "land"],
    ]);
    let out = extract_records(&grid, &ExtractOptions::default(), None).unwrap();

    let parcels: Vec<_> = out.records.iter().map(|r| r.parcel_no.as_str()).collect();
    assert_eq!(parcels, ["105-20-013", "110-01-001A"]);
    assert_eq!(out.report.skipped_marker, 2);
    assert_eq!(out.report.skipped_blank, 1);
    assert_eq!(out.report.invalid, 2);
    assert_eq!(out.report.kept, 2);
}

#[test]
fn bad_bids_become_zero() {
    let grid = sheet(&[
        ["100-00-001", "A", "C", "D", "", "TBD", "", "land"],
        ["100-00-002", "A", "C", "D", "", "", "", "land"],
        ["100-00-003", "A", "C", "D", "", "-40", "", "land"],
        ["100-00-004", "A", "C", "D", "", "$1,250.50", "", "land"],
    ]);
    let out = extract_records(&grid, &ExtractOptions::default(), None).unwrap();
    let bids: Vec<f64> = out.records.iter().map(|r| r.opening_bid).collect();
    assert_eq!(bids, [0.0, 0.0, 0.0, 1250.5]);
}

#[test]
fn multi_line_cells_are_flattened_and_defaults_filled() {
    let grid = sheet(&[[
        "100-00-001", "8215 ST CLAIR AVE\nCLEVELAND", "CV1", "nan", "", "1", "", "",
    ]]);
    let r = &extract_records(&grid, &ExtractOptions::default(), None).unwrap().records[0];
    assert_eq!(r.address, "8215 ST CLAIR AVE CLEVELAND");
    assert_eq!(r.defendant, "");
    assert_eq!(r.property_type, "land");
}

#[test]
fn numeric_cells_keep_sheet_text() {
    let mut grid = sheet(&[["100-00-001", "A", "", "D", "", "", "", "land"]]);
    grid[3][2] = Cell::Number(948061.0);
    grid[3][5] = Cell::Number(1500.25);
    let r = &extract_records(&grid, &ExtractOptions::default(), None).unwrap().records[0];
    assert_eq!(r.case_no, "948061");
    assert_eq!(r.opening_bid, 1500.25);
}

#[test]
fn sale_date_follows_row_position() {
    let mut opts = ExtractOptions::default();
    // title is the first non-empty row, so sheet row 3 is frame row 2
    opts.sale_date.split_row = 3;

    let grid = sheet(&[
        ["100-00-001", "A", "C", "D", "", "1", "", "land"],
        ["100-00-002", "A", "C", "D", "", "1", "", "land"],
    ]);
    let out = extract_records(&grid, &opts, None).unwrap();
    assert_eq!(out.records[0].sale_date, "September 3, 2025");
    assert_eq!(out.records[1].sale_date, "September 4, 2025");
}

#[test]
fn default_split_counts_rows_under_the_column_names() {
    // title row is the names row; frame 0 is the blank row under it
    let mut rows: Vec<Vec<String>> = vec![
        vec!["TAX SALE".into()],
        vec![],
        HEADER.iter().map(|h| h.to_string()).collect(),
    ];
    for j in 0..150 {
        rows.push(vec![format!("100-00-{:03}", j), "A".into(), "C".into(), "D".into()]);
    }
    let out = extract_records(&grid_from_rows(&rows), &ExtractOptions::default(), None).unwrap();

    // data row j sits on frame row j + 2
    assert_eq!(out.records[147].sale_date, "September 3, 2025");
    assert_eq!(out.records[148].sale_date, "September 4, 2025");
}

#[test]
fn duplicate_parcels_keep_first() {
    let grid = sheet(&[
        ["100-00-001", "FIRST", "C", "D", "", "1", "", "land"],
        ["100-00-001", "SECOND", "C", "D", "", "2", "", "land"],
    ]);
    let out = extract_records(&grid, &ExtractOptions::default(), None).unwrap();
    assert_eq!(out.records.len(), 1);
    assert_eq!(out.records[0].address, "FIRST");
    assert_eq!(out.report.duplicates, 1);
}

#[test]
fn missing_header_writes_nothing() {
    let dir = tmp_dir("no_header");
    let input = dir.join("sheet.csv");
    fs::write(&input, "SOME TITLE\n105-20-013,A,C,D,,1,,land\n").unwrap();
    let out = dir.join("records.csv");

    let err = extract::run(&input, Some(&out), &ExtractOptions::default(), None).unwrap_err();
    assert!(matches!(err, DeedError::HeaderNotFound { .. }));
    assert!(!out.exists());
}

#[test]
fn extraction_is_idempotent() {
    let dir = tmp_dir("idem");
    let input = dir.join("sheet.csv");
    fs::write(
        &input,
        "FORFEITED LAND SALE\n\
         PARCEL NO.,ADDRESS,CASE NO.,DEFENDANT,,OPENING BID,,TYPE\n\
         105-20-013,8215 ST CLAIR AVE,CV948061,\"BOB NANCE, ET AL\",,212204.35,,land\n\
         110-01-001,\"1 MAIN ST\nREAR\",CV1,JANE ROE,,nope,,\n",
    )
    .unwrap();

    let a = dir.join("a.csv");
    let b = dir.join("b.csv");
    let opts = ExtractOptions::default();
    let (first, _) = extract::run(&input, Some(&a), &opts, None).unwrap();
    extract::run(&input, Some(&b), &opts, None).unwrap();

    assert_eq!(first.records.len(), 2);
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());

    // and the written file loads back to the same records
    let loaded = store::load_records(&a).unwrap();
    assert_eq!(loaded, first.records);
}

#[test]
fn unterminated_quote_in_source_is_rejected() {
    let dir = tmp_dir("open_quote");
    let input = dir.join("sheet.csv");
    fs::write(
        &input,
        "PARCEL NO.,ADDRESS,CASE NO.,DEFENDANT,,OPENING BID,,TYPE\n\
         105-20-013,\"8215 ST CLAIR AVE,CV948061,BOB NANCE,,1,,land\n\
         110-01-001,1 MAIN ST,CV1,JANE ROE,,2,,land\n",
    )
    .unwrap();
    let out = dir.join("records.csv");

    let err = extract::run(&input, Some(&out), &ExtractOptions::default(), None).unwrap_err();
    assert!(matches!(err, DeedError::Source { .. }));
    assert!(!out.exists());
}
