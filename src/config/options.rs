// src/config/options.rs
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub export: ExportOptions,
    pub dashboard: DashboardOptions,
}

/* ---------------- Extract ---------------- */

/// Which source column feeds which record field (0-based).
/// Sale date and status are never read from the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    pub parcel_no: usize,
    pub address: usize,
    pub case_no: usize,
    pub defendant: usize,
    pub opening_bid: usize,
    pub property_type: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            parcel_no: 0,
            address: 1,
            case_no: 2,
            defendant: 3,
            opening_bid: 5,
            property_type: 7,
        }
    }
}

/// Parses `"address=2,opening_bid=6"`. Fields not named keep their default.
impl FromStr for ColumnMap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut map = ColumnMap::default();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() { continue; }
            let (name, ix) = part
                .split_once('=')
                .ok_or_else(|| format!("expected field=index, got {:?}", part))?;
            let ix: usize = ix
                .trim()
                .parse()
                .map_err(|_| format!("bad column index in {:?}", part))?;
            let slot = match name.trim() {
                "parcel_no" => &mut map.parcel_no,
                "address" => &mut map.address,
                "case_no" => &mut map.case_no,
                "defendant" => &mut map.defendant,
                "opening_bid" => &mut map.opening_bid,
                "property_type" => &mut map.property_type,
                other => return Err(format!("unknown field: {}", other)),
            };
            *slot = ix;
        }
        Ok(map)
    }
}

/// Frame rows before `split_row` get `before`, the rest `after`.
///
/// Frame row 0 is the row right below the first non-empty sheet row, the one
/// a spreadsheet reader takes as column names. Blank rows inside the sheet
/// still count; blank CSV lines do not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaleDateRule {
    pub split_row: usize,
    pub before: String,
    pub after: String,
}

impl Default for SaleDateRule {
    fn default() -> Self {
        Self {
            split_row: SALE_DATE_SPLIT_ROW,
            before: s!(FIRST_SALE_DATE),
            after: s!(SECOND_SALE_DATE),
        }
    }
}

impl SaleDateRule {
    pub fn label_for(&self, row: usize) -> &str {
        if row < self.split_row { &self.before } else { &self.after }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub header_marker: String,
    pub section_markers: Vec<String>,
    pub columns: ColumnMap,
    pub sale_date: SaleDateRule,
    /// Worksheet name; `None` → first sheet.
    pub sheet: Option<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            header_marker: s!(HEADER_MARKER),
            section_markers: SECTION_MARKERS.iter().map(|m| s!(*m)).collect(),
            columns: ColumnMap::default(),
            sale_date: SaleDateRule::default(),
            sheet: None,
        }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {}", other)),
        }
    }
}

/// Filtered = what the dashboard currently shows (all pages); All = every record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportScope {
    Filtered,
    All,
}

impl ExportScope {
    pub fn as_str(&self) -> &'static str {
        match self { ExportScope::Filtered => "filtered", ExportScope::All => "all" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    pub out_dir: PathBuf,
    /// Explicit target file. When unset a timestamped name is generated in `out_dir`.
    pub out_file: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            out_file: None,
        }
    }
}

impl ExportOptions {
    /// `tax_deed_properties_<scope>_<stamp>.<ext>`
    pub fn default_file_name(&self, scope: ExportScope, stamp: &str) -> String {
        format!("{}_{}_{}.{}", EXPORT_STEM, scope.as_str(), stamp, self.format.ext())
    }

    /// Target path for an export taken at `stamp`.
    pub fn out_path_at(&self, scope: ExportScope, stamp: &str) -> PathBuf {
        match &self.out_file {
            Some(p) => p.clone(),
            None => self.out_dir.join(self.default_file_name(scope, stamp)),
        }
    }

    /// Target path for an export taken now.
    pub fn out_path(&self, scope: ExportScope) -> PathBuf {
        let stamp = chrono::Local::now().format(EXPORT_STAMP_FMT).to_string();
        self.out_path_at(scope, &stamp)
    }

    /// Parse GUI/CLI text: a trailing separator or an existing directory means
    /// "directory", anything else is taken as the exact file.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_file = None;
            return;
        }
        let p = Path::new(s);
        if crate::file::looks_like_dir_hint(p) || p.is_dir() {
            self.out_dir = p.to_path_buf();
            self.out_file = None;
        } else {
            self.out_file = Some(p.to_path_buf());
        }
    }
}

/* ---------------- Dashboard ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardOptions {
    pub data_file: PathBuf,
    pub page_size: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            page_size: PAGE_SIZE,
        }
    }
}
