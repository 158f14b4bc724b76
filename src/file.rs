// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::options::{ExportOptions, ExportScope},
    core::csv::rows_to_string,
    data::QueryView,
    error::{DeedError, Result},
    model::FIELD_NAMES,
};

/// Render a view as CSV/TSV text per `export` (delimiter, header policy).
pub fn to_export_string(view: &QueryView<'_>, export: &ExportOptions) -> String {
    let headers = export.include_headers.then_some(&FIELD_NAMES[..]);
    rows_to_string(headers, &view.to_owned_rows(), export.format.delim())
}

/// Write `view` to the path `export` resolves for `scope`.
/// Returns the final path written to.
pub fn write_export(view: &QueryView<'_>, export: &ExportOptions, scope: ExportScope) -> Result<PathBuf> {
    let path = export.out_path(scope);
    write_export_to(view, export, &path)?;
    Ok(path)
}

/// Same as `write_export` with an explicit target.
pub fn write_export_to(view: &QueryView<'_>, export: &ExportOptions, path: &Path) -> Result<()> {
    logf!(
        "Export: Begin rows={}, format={}, headers={} → {}",
        view.len(),
        export.format.ext(),
        export.include_headers,
        path.display()
    );

    let contents = to_export_string(view, export);
    let res = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_directory(parent),
        _ => Ok(()),
    }
    .and_then(|_| fs::write(path, contents));

    res.map_err(|source| {
        loge!("Export: Error {}: {}", path.display(), source);
        DeedError::PersistenceFailure { path: path.to_path_buf(), source }
    })
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
