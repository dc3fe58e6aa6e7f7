//! statura-data
//!
//! The measurement-loading pipeline: reads an encrypted CSV container
//! exported from the EHR, recovers the plaintext, and preprocesses the
//! rows into chartable per-metric series. File paths only: the
//! dashboard never fetches data over the network.

pub mod container;
pub mod error;
pub mod records;
pub mod transform;

use std::path::Path;

use tracing::info;

pub use container::{open, seal};
pub use error::DataError;
pub use records::{parse_csv, PatientRow};
pub use transform::{transform, GrowthData, DAYS_PER_MONTH};

/// Load, decrypt, parse, and preprocess a measurement export in one
/// step. `password = None` expects a passwordless (compressed-only)
/// container.
pub fn load_growth_data(
    path: impl AsRef<Path>,
    password: Option<&str>,
) -> Result<GrowthData, DataError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let plaintext = container::open(&contents, password)?;
    let rows = records::parse_csv(&plaintext)?;
    info!(path = %path.display(), rows = rows.len(), "parsed measurement rows");
    transform::transform(rows)
}
