// src/store.rs
//
// The persisted record file: eight named columns, one record per line.
// Saves always rewrite the whole file (temp file + rename, so a failed save
// leaves the previous file intact). No append path, no journal.

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{
    config::consts::STORE_SEP,
    core::csv::{parse_rows, write_row},
    core::sanitize::{amount_or_zero, property_type_or_default},
    data::RecordSet,
    error::{DeedError, Result},
    file::ensure_directory,
    model::{PropertyRecord, Status, FIELD_NAMES},
};

/// Location of the record file. Loading and saving always go through here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Load the whole set. A missing file is an empty set (first save creates it).
    pub fn load(&self) -> Result<RecordSet> {
        if !self.path.exists() {
            logd!("Store: {} missing, starting empty", self.path.display());
            return Ok(RecordSet::default());
        }
        let records = load_records(&self.path)?;
        let set = RecordSet::from_records(records);
        logf!("Store: Loaded {} record(s) ← {}", set.len(), self.path.display());
        Ok(set)
    }

    pub fn save(&self, set: &RecordSet) -> Result<()> {
        save_records(&self.path, set.records())?;
        logf!("Store: Saved {} record(s) → {}", set.len(), self.path.display());
        Ok(())
    }
}

/// Parse a record file. Columns are found by header name, so column order
/// in hand-edited files does not matter.
pub fn load_records(path: &Path) -> Result<Vec<PropertyRecord>> {
    let text = fs::read_to_string(path)?;
    let schema_err = |reason: String| DeedError::Schema { path: path.to_path_buf(), reason };

    let mut rows = parse_rows(&text, STORE_SEP)
        .map_err(|e| schema_err(e.to_string()))?
        .into_iter();

    let header = rows.next().ok_or_else(|| schema_err(s!("file is empty")))?;
    let mut ix = [0usize; FIELD_NAMES.len()];
    for (slot, name) in ix.iter_mut().zip(FIELD_NAMES) {
        *slot = header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| schema_err(format!("missing column {:?}", name)))?;
    }

    let mut out = Vec::new();
    for (line, row) in rows.enumerate() {
        let get = |field: usize| row.get(ix[field]).map(|s| s.trim()).unwrap_or("");

        let status = match get(7) {
            "" => Status::Available,
            s => s.parse().unwrap_or_else(|e| {
                logd!("Store: line {}: {} (using Available)", line + 2, e);
                Status::Available
            }),
        };

        out.push(PropertyRecord {
            parcel_no: s!(get(0)),
            address: s!(get(1)),
            case_no: s!(get(2)),
            defendant: s!(get(3)),
            opening_bid: amount_or_zero(get(4)),
            property_type: property_type_or_default(get(5)),
            sale_date: s!(get(6)),
            status,
        });
    }
    Ok(out)
}

/// Rewrite the file with `records` (header first).
/// Any I/O failure surfaces as `PersistenceFailure` and leaves the old file.
pub fn save_records(path: &Path, records: &[PropertyRecord]) -> Result<()> {
    write_atomic(path, records).map_err(|source| {
        loge!("Store: Save failed {}: {}", path.display(), source);
        DeedError::PersistenceFailure { path: path.to_path_buf(), source }
    })
}

fn write_atomic(path: &Path, records: &[PropertyRecord]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_directory(dir)?;

    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(tmp.as_file());
        write_row(&mut out, &FIELD_NAMES, STORE_SEP)?;
        for rec in records {
            write_row(&mut out, &rec.to_row(), STORE_SEP)?;
        }
        out.flush()?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
