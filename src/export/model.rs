use crate::models::schedule::{RawSchedule, WeekSchedule};
use crate::utils::date;
use chrono::{NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Document written by `export`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile<'a> {
    pub schedule: &'a WeekSchedule,
    pub current_date: String,
    pub export_date: String,
}

impl<'a> ExportFile<'a> {
    pub fn new(schedule: &'a WeekSchedule, reference_date: NaiveDate) -> Self {
        Self {
            schedule,
            current_date: date::format_reference_date(reference_date),
            export_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Document accepted by `import`.
///
/// Every field is optional at this stage and unknown fields (`exportDate`
/// included) are ignored; the presence of `schedule` is checked when the
/// import is applied. `currentDate` is kept as raw JSON so that a value of
/// the wrong type only loses the date, not the whole file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportFile {
    #[serde(default)]
    pub schedule: Option<RawSchedule>,
    #[serde(default)]
    pub current_date: Option<serde_json::Value>,
}
