//! statura-stats
//!
//! The LMS growth-statistics engine. Converts tabulated Lambda-Mu-Sigma
//! (Box-Cox) reference parameters into percentile and Z-score
//! conversions, and materializes the percentile curves the dashboard
//! draws as comparison lines.
//!
//! Percentiles are ranks on the 0–100 scale everywhere in the public
//! API; probabilities in (0, 1) appear only inside [`normal`].

pub mod curve;
pub mod dataset;
pub mod error;
pub mod lms;
pub mod normal;
pub mod table;

pub use curve::{materialize_curve, CurveRow, PercentileCurve, DEFAULT_PERCENTILES};
pub use dataset::{GrowthCharts, CACHED_CHART_TYPES};
pub use error::{DatasetError, StatsError, TableError};
pub use lms::LmsParams;
pub use table::{LmsRow, LmsTable};
