use super::model::{ExportFile, ImportFile};
use crate::errors::AppResult;
use std::path::Path;

/// Scrive lo schedule in JSON formattato.
pub fn write_json(path: &Path, file: &ExportFile<'_>) -> AppResult<()> {
    let json = serde_json::to_string_pretty(file)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Legge un file esportato. Un JSON non valido è un errore, un `schedule`
/// mancante viene verificato dopo.
pub fn read_json(path: &Path) -> AppResult<ImportFile> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
