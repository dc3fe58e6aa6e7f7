use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown chart type: {0}")]
    UnknownChartType(String),

    #[error("unknown sex: {0}")]
    UnknownSex(String),

    #[error("unknown metric label: {0}")]
    UnknownMetricLabel(String),
}
