use super::fs_utils::{ensure_parent, ensure_writable};
use super::json::{read_json, write_json};
use super::model::{ExportFile, ImportFile};
use super::notify_success;
use crate::core::planner::Planner;
use crate::errors::{AppError, AppResult};
use crate::utils::{date, path::expand_tilde};
use std::path::{Path, PathBuf};

/// `training-schedule-YYYY-MM-DD.json`, stamped with today's date.
pub fn default_file_name() -> String {
    format!("training-schedule-{}.json", date::today().format("%Y-%m-%d"))
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write the whole schedule and the reference date to a JSON file.
    ///
    /// - `file`: explicit output path; when `None` the default file name is
    ///   placed inside `export_dir`
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        planner: &Planner,
        file: Option<&str>,
        export_dir: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => expand_tilde(f),
            None => expand_tilde(export_dir).join(default_file_name()),
        };

        ensure_writable(&path, force)?;
        ensure_parent(&path)?;

        let doc = ExportFile::new(&planner.schedule, planner.reference_date());
        write_json(&path, &doc)?;

        notify_success("Export", &path);
        Ok(path)
    }

    /// Read an exported file. Shape checks beyond valid JSON happen when the
    /// import command is applied to the planner.
    pub fn read_import(file: &str) -> AppResult<ImportFile> {
        let path = expand_tilde(file);
        if !path.exists() {
            return Err(AppError::Import(format!(
                "file not found: {}",
                path.display()
            )));
        }
        read_json(&path).map_err(|e| match e {
            AppError::Json(err) => AppError::Import(format!("not a valid schedule file: {err}")),
            other => other,
        })
    }

    pub fn notify_import(file: &str) {
        notify_success("Import", Path::new(file));
    }
}
