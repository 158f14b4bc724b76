// src/extract/source.rs
//
// Reads a cell grid from disk. Workbooks go through calamine; CSV/TSV through
// core::csv. Grid coordinates are absolute sheet coordinates (A1 = [0][0]),
// so column offsets and the row-based sale date survive leading blank
// rows/columns that a workbook's used range would otherwise trim.

use std::fs;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use super::{grid_from_rows, Cell, Grid};
use crate::{core::csv::parse_rows, error::{DeedError, Result}};

fn source_err(path: &Path, reason: impl ToString) -> DeedError {
    DeedError::Source { path: path.to_path_buf(), reason: reason.to_string() }
}

/// Detect the format from the extension and load the grid.
/// `sheet` picks a worksheet by name (workbooks only); `None` → first sheet.
pub fn load_grid(path: &Path, sheet: Option<&str>) -> Result<Grid> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("csv") => from_delimited(path, ','),
        Some("tsv") | Some("txt") => from_delimited(path, '\t'),
        Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => from_workbook(path, sheet),
        Some(other) => Err(source_err(path, format!("unsupported file extension: {}", other))),
        None => Err(source_err(path, "file has no extension")),
    }
}

fn from_delimited(path: &Path, sep: char) -> Result<Grid> {
    let text = fs::read_to_string(path).map_err(|e| source_err(path, e))?;
    let rows = parse_rows(&text, sep).map_err(|e| source_err(path, e))?;
    Ok(grid_from_rows(&rows))
}

fn from_workbook(path: &Path, sheet: Option<&str>) -> Result<Grid> {
    let mut workbook = open_workbook_auto(path).map_err(|e| source_err(path, e))?;

    let range = match sheet {
        Some(name) => workbook
            .worksheet_range(name)
            .map_err(|e| source_err(path, format!("sheet {:?}: {}", name, e)))?,
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| source_err(path, "workbook has no sheets"))?
            .map_err(|e| source_err(path, e))?,
    };

    Ok(range_to_grid(&range))
}

/// Pad the used range back out to A1 so positions are absolute.
pub fn range_to_grid(range: &Range<Data>) -> Grid {
    let (row0, col0) = match range.start() {
        Some((r, c)) => (r as usize, c as usize),
        None => return Vec::new(),
    };

    let mut grid: Grid = vec![Vec::new(); row0];
    for row in range.rows() {
        let mut out = vec![Cell::Empty; col0];
        out.extend(row.iter().map(cell_from_data));
        grid.push(out);
    }
    grid
}

fn cell_from_data(d: &Data) -> Cell {
    match d {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Error(_) => Cell::Empty,
        other => Cell::Text(other.to_string()),
    }
}
