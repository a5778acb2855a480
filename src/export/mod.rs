// src/export/mod.rs

mod fs_utils;
mod json;
pub mod logic;
pub mod model;

pub use logic::ExportLogic;
pub use model::{ExportFile, ImportFile};

use crate::ui::messages::success;
use std::path::Path;

/// Common completion message for export/import.
pub(crate) fn notify_success(label: &str, path: &Path) {
    success(format!("{label} completed: {}", path.display()));
}
