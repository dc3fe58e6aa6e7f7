//! Parsing of the decrypted CSV measurement export.

use serde::Deserialize;
use tracing::{debug, warn};

use statura_core::{Metric, Sex};

use crate::error::DataError;

/// One parsed export row, before age computation.
#[derive(Debug, Clone)]
pub struct PatientRow {
    pub mrn: String,
    pub dob: jiff::civil::Date,
    pub sex: Sex,
    pub metric: Metric,
    pub value: f64,
    pub taken_at: jiff::civil::Date,
}

/// The export's column layout. Name, Row, and Misc are present in the
/// file but never consumed.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "MRN")]
    mrn: String,
    #[serde(rename = "DOB")]
    dob: String,
    #[serde(rename = "Sex")]
    sex: String,
    #[serde(rename = "Metric")]
    metric: String,
    #[serde(rename = "Val")]
    value: f64,
    #[serde(rename = "TS")]
    taken_at: String,
}

/// Parse the CSV export into rows the dashboard can chart.
///
/// Rows carrying vitals the dashboard does not chart (the export mixes
/// in temperatures and the like) are skipped, as are rows whose sex
/// label is unrecognized; both are logged, neither is fatal. Dates must
/// be ISO `YYYY-MM-DD`; a bad date is a hard error since it poisons the
/// age computation.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<PatientRow>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let raw: RawRecord = result?;

        let Some(metric) = Metric::from_label(&raw.metric) else {
            debug!(metric = %raw.metric, "skipping uncharted metric");
            continue;
        };
        let Ok(sex) = raw.sex.parse::<Sex>() else {
            warn!(mrn = %raw.mrn, sex = %raw.sex, "skipping row with unrecognized sex");
            continue;
        };
        let dob: jiff::civil::Date = raw.dob.parse().map_err(|source| DataError::Date {
            mrn: raw.mrn.clone(),
            source,
        })?;
        let taken_at: jiff::civil::Date = raw.taken_at.parse().map_err(|source| DataError::Date {
            mrn: raw.mrn.clone(),
            source,
        })?;

        rows.push(PatientRow {
            mrn: raw.mrn,
            dob,
            sex,
            metric,
            value: raw.value,
            taken_at,
        });
    }
    Ok(rows)
}
