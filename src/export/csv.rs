use crate::errors::AppResult;
use crate::export::model::{NormalizedRecord, get_headers};
use csv::WriterBuilder;
use std::path::Path;

/// Scrive i record normalizzati in CSV nel file indicato.
///
/// The header row is written unconditionally, so an empty source table
/// still yields a valid (header-only) CSV file.
pub(crate) fn write_normalized(path: &Path, records: &[NormalizedRecord]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;

    wtr.write_record(get_headers())?;

    for rec in records {
        wtr.serialize(rec)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Raw passthrough: one CSV row per source row, no header, values verbatim.
pub(crate) fn write_raw(path: &Path, rows: &[Vec<String>]) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;

    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
