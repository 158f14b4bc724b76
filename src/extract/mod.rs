// src/extract/mod.rs
//! # Spreadsheet extractor
//!
//! Turns the county's forfeited-land-sale sheet into clean `PropertyRecord`s.
//! The sheet is only semi-structured: a title block, then a header row whose
//! first cell reads `PARCEL NO.`, then data rows; each sale day reintroduces a
//! section title and the header.
//!
//! ## Pipeline
//! 1. **Locate header**: first row whose first cell contains the header marker.
//!    None → `DeedError::HeaderNotFound`, nothing is written.
//! 2. **Candidate rows**: every later row, minus blank first cells and rows
//!    carrying a section title or a repeated header.
//! 3. **Field mapping** through `ColumnMap` (positions, not names).
//! 4. **Normalization**: `core::sanitize::clean_text` on text, bids coerced to
//!    a non-negative number (0 when unparseable).
//! 5. **Sale date** from `SaleDateRule` by frame row: the position below the
//!    first non-empty row, which a spreadsheet reader takes as column names.
//!    Blank rows after it still count. A guess, not data.
//! 6. **Validity**: parcel must match `DDD-DD-DDD…`; other rows are dropped
//!    and only counted.
//!
//! Duplicate parcels keep the first occurrence. Same grid + same options →
//! same records, in sheet order.
//!
//! ## Typical call chain
//! ```text
//! CLI extract / GUI import → extract::run → source::load_grid
//!                                         ↘ extract_records → store::save_records
//! ```

pub mod source;

use std::borrow::Cow;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::{
    config::options::ExtractOptions,
    core::sanitize::{amount_or_zero, clean_text, property_type_or_default},
    error::{DeedError, Result},
    model::{is_valid_parcel, PropertyRecord, Status},
    progress::Progress,
    store,
};

/// One spreadsheet cell as the extractor sees it.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

pub type Grid = Vec<Vec<Cell>>;

impl Cell {
    /// Display text; whole numbers print without a fraction (`105.0` → `"105"`).
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Cell::Empty => Cow::Borrowed(""),
            Cell::Text(s) => Cow::Borrowed(s.as_str()),
            Cell::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => Cow::Owned((*v as i64).to_string()),
            Cell::Number(v) => Cow::Owned(v.to_string()),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    fn amount(&self) -> f64 {
        match self {
            Cell::Empty => 0.0,
            Cell::Number(v) if v.is_finite() && *v >= 0.0 => *v,
            Cell::Number(_) => 0.0,
            Cell::Text(s) => amount_or_zero(s),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() { Cell::Empty } else { Cell::Text(s!(s)) }
    }
}

/// Turn a text-only grid (CSV input, tests) into cells.
pub fn grid_from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Grid {
    rows.iter()
        .map(|r| r.iter().map(|c| Cell::from(c.as_ref())).collect())
        .collect()
}

/// Counts from one extraction pass. Rows after the header only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractReport {
    pub header_row: usize,
    pub scanned: usize,
    pub skipped_blank: usize,
    pub skipped_marker: usize,
    pub invalid: usize,
    pub duplicates: usize,
    pub kept: usize,
}

#[derive(Clone, Debug)]
pub struct Extracted {
    pub records: Vec<PropertyRecord>,
    pub report: ExtractReport,
}

/// Index of the header row: the first row whose first cell contains `marker`.
pub fn find_header(grid: &[Vec<Cell>], marker: &str) -> Option<usize> {
    grid.iter().position(|row| {
        row.first()
            .map(|c| c.text().contains(marker))
            .unwrap_or(false)
    })
}

fn is_marker_row(first: &str, opts: &ExtractOptions) -> bool {
    first.contains(opts.header_marker.as_str())
        || opts.section_markers.iter().any(|m| first.contains(m.as_str()))
}

/// Map one sheet row to a record (steps 3–6). `frame_ix` picks the sale date.
pub fn map_row(
    row_ix: usize,
    frame_ix: usize,
    row: &[Cell],
    opts: &ExtractOptions,
) -> Result<PropertyRecord> {
    let cols = &opts.columns;
    let cell = |ix: usize| row.get(ix).filter(|c| !c.is_blank());
    let text = |ix: usize| cell(ix).map(|c| clean_text(&c.text())).unwrap_or_default();

    let parcel_no = cell(cols.parcel_no)
        .map(|c| c.text().trim().to_string())
        .unwrap_or_default();
    if !is_valid_parcel(&parcel_no) {
        return Err(DeedError::InvalidRecord {
            row: row_ix,
            reason: format!("parcel number {:?} does not look like DDD-DD-DDD", parcel_no),
        });
    }

    let property_type = property_type_or_default(&text(cols.property_type));

    Ok(PropertyRecord {
        parcel_no,
        address: text(cols.address),
        case_no: text(cols.case_no),
        defendant: text(cols.defendant),
        opening_bid: cell(cols.opening_bid).map(Cell::amount).unwrap_or(0.0),
        property_type,
        sale_date: s!(opts.sale_date.label_for(frame_ix)),
        status: Status::Available,
    })
}

/// Run steps 1–6 over an in-memory grid.
pub fn extract_records(
    grid: &[Vec<Cell>],
    opts: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Extracted> {
    let header_row = find_header(grid, &opts.header_marker).ok_or_else(|| {
        loge!("Extract: header marker {:?} not found in {} row(s)", opts.header_marker, grid.len());
        DeedError::HeaderNotFound { marker: opts.header_marker.clone() }
    })?;
    logd!("Extract: header at row {}", header_row);

    // Row 0 of the frame sits right under the first non-empty row.
    let names_row = grid
        .iter()
        .position(|r| r.iter().any(|c| !c.is_blank()))
        .unwrap_or(header_row);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(grid.len() - header_row - 1);
    }

    let mut report = ExtractReport { header_row, ..ExtractReport::default() };
    let mut records = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (i, row) in grid.iter().enumerate().skip(header_row + 1) {
        report.scanned += 1;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i);
        }

        let first = match row.first() {
            Some(c) if !c.is_blank() => c.text(),
            _ => {
                report.skipped_blank += 1;
                continue;
            }
        };
        if is_marker_row(&first, opts) {
            report.skipped_marker += 1;
            continue;
        }

        match map_row(i, i - names_row - 1, row, opts) {
            Ok(rec) => {
                if seen.insert(rec.parcel_no.clone()) {
                    records.push(rec);
                } else {
                    logd!("Extract: duplicate parcel {} at row {}, keeping first", rec.parcel_no, i);
                    report.duplicates += 1;
                }
            }
            Err(e) => {
                logd!("Extract: {}", e);
                report.invalid += 1;
            }
        }
    }

    report.kept = records.len();
    logf!(
        "Extract: kept={} scanned={} blank={} marker={} invalid={} dup={}",
        report.kept, report.scanned, report.skipped_blank,
        report.skipped_marker, report.invalid, report.duplicates
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(Extracted { records, report })
}

/// Load `input`, extract, and (when `output` is given) write the record file.
/// All-or-nothing: on `HeaderNotFound` nothing is written.
pub fn run(
    input: &Path,
    output: Option<&Path>,
    opts: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(Extracted, Option<PathBuf>)> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Reading {}", input.display()));
    }
    let grid = source::load_grid(input, opts.sheet.as_deref())?;
    logf!("Extract: Loaded {} ({} rows)", input.display(), grid.len());

    let extracted = extract_records(&grid, opts, progress)?;

    let written = match output {
        Some(out) => {
            store::save_records(out, &extracted.records)?;
            logf!("Extract: Wrote {} record(s) → {}", extracted.records.len(), out.display());
            Some(out.to_path_buf())
        }
        None => None,
    };

    Ok((extracted, written))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_cells_print_like_sheet_text() {
        assert_eq!(Cell::Number(105.0).text(), "105");
        assert_eq!(Cell::Number(212204.35).text(), "212204.35");
        assert!(Cell::Text(s!("  ")).is_blank());
        assert!(!Cell::Number(0.0).is_blank());
    }

    #[test]
    fn numeric_bid_cells_are_clamped() {
        assert_eq!(Cell::Number(-3.0).amount(), 0.0);
        assert_eq!(Cell::Number(f64::NAN).amount(), 0.0);
        assert_eq!(Cell::Number(1500.5).amount(), 1500.5);
    }

    #[test]
    fn header_is_first_matching_row() {
        let grid = grid_from_rows(&[
            vec!["2025 FORFEITED LAND SALE"],
            vec!["PARCEL NO.", "ADDRESS"],
            vec!["PARCEL NO.", "ADDRESS"],
        ]);
        assert_eq!(find_header(&grid, "PARCEL NO."), Some(1));
        assert_eq!(find_header(&grid, "NOPE"), None);
    }
}
