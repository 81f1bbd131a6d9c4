// src/csv.rs
use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::Result;
use crate::record::JobRecord;
use crate::report::HEADERS;

/// Header row + one row per record, columns in report order.
/// Fields are quoted only when they need it; rows end in CRLF.
pub fn write_records<W: Write>(w: W, records: &[JobRecord]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(w);

    wtr.write_record(HEADERS)?;
    for r in records {
        wtr.write_record(r.table_row())?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(records: &[JobRecord]) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_records(&mut buf, records)?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}
