use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Identifies a growth metric and the reference population its LMS
/// tables were normed on (e.g. weight-for-age on the WHO standard).
///
/// The set is closed: these are exactly the datasets shipped in the
/// reference-data file, and callers select tables by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChartType {
    HeightOlsen,
    HeightFenton,
    HeightWho,
    HeightCdc,
    WeightOlsen,
    WeightFenton,
    WeightWho,
    WeightCdc,
    /// Head circumference.
    HcOlsen,
    HcFenton,
    HcWho,
    HcCdc,
    BmiCdc,
    /// Weight-for-length: the independent variable is length in cm,
    /// not age in months.
    WflWho,
}

impl ChartType {
    /// Every chart type, in reference-data file order.
    pub const ALL: [ChartType; 14] = [
        ChartType::HeightOlsen,
        ChartType::HeightFenton,
        ChartType::HeightWho,
        ChartType::HeightCdc,
        ChartType::WeightOlsen,
        ChartType::WeightFenton,
        ChartType::WeightWho,
        ChartType::WeightCdc,
        ChartType::HcOlsen,
        ChartType::HcFenton,
        ChartType::HcWho,
        ChartType::HcCdc,
        ChartType::BmiCdc,
        ChartType::WflWho,
    ];

    /// The stable identifier used in the reference-data file and by the
    /// frontend to select a chart.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::HeightOlsen => "height_olsen",
            ChartType::HeightFenton => "height_fenton",
            ChartType::HeightWho => "height_who",
            ChartType::HeightCdc => "height_cdc",
            ChartType::WeightOlsen => "weight_olsen",
            ChartType::WeightFenton => "weight_fenton",
            ChartType::WeightWho => "weight_who",
            ChartType::WeightCdc => "weight_cdc",
            ChartType::HcOlsen => "hc_olsen",
            ChartType::HcFenton => "hc_fenton",
            ChartType::HcWho => "hc_who",
            ChartType::HcCdc => "hc_cdc",
            ChartType::BmiCdc => "bmi_cdc",
            ChartType::WflWho => "wfl_who",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownChartType(s.to_string()))
    }
}

/// Reference tables are normed per sex; some chart types ship data for
/// only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    /// Accepts the canonical identifiers plus the single-letter labels
    /// found in EHR exports.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(CoreError::UnknownSex(s.to_string())),
        }
    }
}
