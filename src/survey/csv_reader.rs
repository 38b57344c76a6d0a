//! # Survey CSV reader
//!
//! Minimal reader for directional-survey logs stored as CSV. A valid file carries a
//! header row with at least the columns `md` (measured depth), `azi` (azimuth, degrees)
//! and `inc` (inclination, degrees), in any order; extra columns are ignored.
//!
//! ## Error handling
//! -----------------
//! Failures are wrapped into [`WellPathError::SurveyCsvParsing`] with a
//! [`ParseSurveyError`] payload for precise diagnostics (missing required columns,
//! malformed row). I/O failures surface as [`WellPathError::IoError`].
use camino::Utf8Path;
use thiserror::Error;

use crate::survey::SurveyRecord;
use crate::wellpath_errors::WellPathError;

/// Required column names for a survey CSV.
const REQUIRED_COLUMNS: [&str; 3] = ["md", "azi", "inc"];

/// Row/header-level parsing errors for survey CSV files.
#[derive(Error, Debug, PartialEq)]
pub enum ParseSurveyError {
    #[error("input well data is missing required columns: {0:?}")]
    MissingColumns(Vec<String>),
    #[error("invalid value in CSV record {record}: {message}")]
    InvalidRecord { record: usize, message: String },
}

/// Read a survey CSV file into raw [`SurveyRecord`]s.
///
/// The header is checked against the required column set before any row is parsed,
/// so a structurally wrong file is reported once with the full list of missing
/// columns rather than failing on the first row.
///
/// Arguments
/// -----------------
/// * `path` – Path to the CSV file.
///
/// Return
/// ----------
/// * The raw records in file order (validation and MD-sorting happen in
///   [`SurveyStationTable::from_records`](crate::survey::SurveyStationTable::from_records)).
pub(crate) fn read_survey_csv(path: &Utf8Path) -> Result<Vec<SurveyRecord>, WellPathError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h.trim() == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(WellPathError::SurveyCsvParsing(
            ParseSurveyError::MissingColumns(missing),
        ));
    }

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize::<SurveyRecord>().enumerate() {
        let record = row.map_err(|e| {
            WellPathError::SurveyCsvParsing(ParseSurveyError::InvalidRecord {
                // header is record 0 in csv position terms; report 1-based data rows
                record: idx + 1,
                message: e.to_string(),
            })
        })?;
        records.push(record);
    }
    Ok(records)
}
