// src/export/mod.rs

mod csv;
mod fs_utils;
pub mod logic;
pub mod model;

pub use logic::ExtractLogic;
pub use model::NormalizedRecord;

use crate::ui::messages::success;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
