// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Verifica che il file sorgente esista davvero prima di aprirlo.
pub(crate) fn ensure_source_exists(path: &Path) -> AppResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AppError::SourceNotFound(path.to_path_buf()))
    }
}

/// The export never overwrites: the destination must not exist yet.
pub(crate) fn ensure_fresh_output(path: &Path) -> AppResult<()> {
    if path.exists() {
        Err(AppError::OutputExists(path.to_path_buf()))
    } else {
        Ok(())
    }
}
