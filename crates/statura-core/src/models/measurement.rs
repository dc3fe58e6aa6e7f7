use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The anthropometric quantity a measurement records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Metric {
    Weight,
    Height,
    HeadCircumference,
}

impl Metric {
    /// Map the metric labels used by the EHR export to a [`Metric`].
    /// Returns `None` for vitals the dashboard does not chart.
    pub fn from_label(label: &str) -> Option<Metric> {
        match label.trim() {
            "Weight Measured" => Some(Metric::Weight),
            "Height/Length Measured" => Some(Metric::Height),
            "Head Circumference Measured" => Some(Metric::HeadCircumference),
            _ => None,
        }
    }
}

/// One patient measurement, ready to score against a reference table.
///
/// The statistics engine only ever reads `(age_months, value)`; the MRN
/// and timestamp ride along so the frontend can group and label series.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Measurement {
    /// Medical record number, the grouping key for one patient.
    pub mrn: String,
    pub metric: Metric,
    pub taken_at: jiff::civil::Date,
    /// Age at measurement in months. For weight-for-length scoring the
    /// independent variable is length instead; see statura-stats.
    pub age_months: f64,
    pub value: f64,
}
