// src/store.rs
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::consts::JSON_INDENT;
use crate::error::{JobError, Result};
use crate::file::ensure_parent;
use crate::record::JobRecord;

/// Read a record collection written by `save_records`.
pub fn load_records(path: &Path) -> Result<Vec<JobRecord>> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(JobError::FileNotFound { path: path.to_path_buf() });
        }
        Err(e) => return Err(e.into()),
    };
    let records: Vec<JobRecord> = serde_json::from_str(&text)?;
    logd!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write `records` as an indented JSON array. Non-ASCII text is kept as-is.
pub fn save_records(path: &Path, records: &[JobRecord]) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_records(&mut out, records)?;
    out.flush()?;
    Ok(())
}

/// Serialize `records` into any writer with the on-disk formatting.
pub fn write_records<W: Write>(w: W, records: &[JobRecord]) -> Result<()> {
    let mut ser = Serializer::with_formatter(w, PrettyFormatter::with_indent(JSON_INDENT));
    records.serialize(&mut ser)?;
    Ok(())
}

pub fn to_json_string(records: &[JobRecord]) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_records(&mut buf, records)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
