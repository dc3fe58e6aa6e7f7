use statura_core::{ChartType, Sex};
use thiserror::Error;

/// Invalid mathematical input to a conversion.
///
/// These are never clamped or suppressed: a silently-clamped
/// anthropometric statistic would plot a plausible-looking wrong value.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("probability {0} is outside the open interval (0, 1)")]
    ProbabilityOutOfRange(f64),

    #[error("percentile {0} is outside the open interval (0, 100)")]
    PercentileOutOfRange(f64),

    #[error("median parameter M must be positive, got {0}")]
    NonPositiveMedian(f64),

    #[error("measured value must be positive, got {0}")]
    NonPositiveValue(f64),

    #[error("Box-Cox transform undefined: 1 + L*S*Z = {0} is not positive")]
    BoxCoxUndefined(f64),
}

/// A malformed LMS table, caught at load time so interpolation never
/// sees it.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("table has no rows")]
    Empty,

    #[error("x values must be strictly increasing (row {index} has x = {x})")]
    NonIncreasingX { index: usize, x: f64 },

    #[error("non-positive median M = {m} at x = {x}")]
    NonPositiveMedian { x: f64, m: f64 },
}

/// Reference data could not be loaded. Fatal: the registry cannot serve
/// any request, and the host should fail fast rather than chart partial
/// data.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read reference data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse reference data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid LMS table for {chart}/{sex}: {source}")]
    InvalidTable {
        chart: ChartType,
        sex: Sex,
        source: TableError,
    },

    #[error("precomputing default curves for {chart}/{sex}: {source}")]
    Precompute {
        chart: ChartType,
        sex: Sex,
        source: StatsError,
    },
}
