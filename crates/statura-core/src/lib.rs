//! statura-core
//!
//! Pure domain types for the growth dashboard: chart, sex, and metric
//! enumerations plus patient measurement records. No I/O; every other
//! crate in the workspace speaks in these types.

pub mod error;
pub mod models;

pub use models::chart::{ChartType, Sex};
pub use models::measurement::{Measurement, Metric};
