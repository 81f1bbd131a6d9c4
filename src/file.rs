// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportFormat;
use crate::error::{JobError, Result};
use crate::record::JobRecord;

/// Write `records` to `path` in the chosen format. Returns the path written to.
pub fn export_records(records: &[JobRecord], path: &Path, format: ExportFormat) -> Result<PathBuf> {
    match format {
        ExportFormat::Json => crate::store::save_records(path, records)?,
        ExportFormat::Csv => {
            ensure_parent(path)?;
            let file = File::create(path)?; // truncate/overwrite
            let mut out = BufWriter::new(file);
            crate::csv::write_records(&mut out, records)?;
            out.flush()?;
        }
    }
    logf!("Exported {} records as {} to {}", records.len(), format.ext(), path.display());
    Ok(path.to_path_buf())
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(JobError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
