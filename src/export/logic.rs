// src/export/logic.rs

use crate::db::queries;
use crate::errors::AppResult;
use crate::export::csv::{write_normalized, write_raw};
use crate::export::fs_utils::{ensure_fresh_output, ensure_source_exists};
use crate::export::model::NormalizedRecord;
use crate::export::notify_export_success;
use crate::ui::messages::{info, warning};
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExtractLogic;

impl ExtractLogic {
    /// Export delle attività registrate.
    ///
    /// - `source`: path of the .db backup file (must exist)
    /// - `output`: path of the CSV to create (must NOT exist)
    /// - `raw`: dump every source column verbatim instead of the
    ///   normalized projection
    ///
    /// Single linear pass, no retry and no partial-completion handling:
    /// a failure mid-write leaves a partial or absent output file.
    pub fn extract(source: &Path, output: &Path, raw: bool) -> AppResult<()> {
        ensure_source_exists(source)?;
        ensure_fresh_output(output)?;

        let conn = queries::open_readonly(source)?;

        info(format!("Exporting to CSV: {}", output.display()));

        if raw {
            let rows = queries::load_raw_rows(&conn)?;
            if rows.is_empty() {
                warning("No activities found in the source database.");
            }
            write_raw(output, &rows)?;
        } else {
            let activities = queries::load_activities(&conn)?;
            if activities.is_empty() {
                warning("No activities found in the source database.");
            }

            let records: Vec<NormalizedRecord> = activities
                .iter()
                .map(NormalizedRecord::from_activity)
                .collect();

            write_normalized(output, &records)?;
        }

        notify_export_success("CSV", output);
        Ok(())
    }
}
