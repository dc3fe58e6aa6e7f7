//! Ordered LMS reference tables and parameter lookup.

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::lms::LmsParams;
use crate::normal::weighted_avg;

/// One tabulated growth-chart data point: LMS parameters at `x`, the
/// age in months (or length in cm for weight-for-length charts).
///
/// Field names mirror the reference-data file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsRow {
    pub x: f64,
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "M")]
    pub m: f64,
    #[serde(rename = "S")]
    pub s: f64,
}

impl LmsRow {
    pub fn params(&self) -> LmsParams {
        LmsParams::new(self.l, self.m, self.s)
    }
}

/// The ordered LMS table for one (chart type, sex).
///
/// Construction validates everything interpolation relies on: at least
/// one row, strictly increasing `x` (which also rules out duplicates),
/// and positive medians. A table that exists is therefore always safe
/// to interpolate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LmsTable {
    rows: Vec<LmsRow>,
}

impl LmsTable {
    pub fn new(rows: Vec<LmsRow>) -> Result<Self, TableError> {
        if rows.is_empty() {
            return Err(TableError::Empty);
        }
        for (index, pair) in rows.windows(2).enumerate() {
            if pair[1].x <= pair[0].x {
                return Err(TableError::NonIncreasingX {
                    index: index + 1,
                    x: pair[1].x,
                });
            }
        }
        if let Some(row) = rows.iter().find(|r| r.m <= 0.0) {
            return Err(TableError::NonPositiveMedian { x: row.x, m: row.m });
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[LmsRow] {
        &self.rows
    }

    /// LMS parameters at an arbitrary `x`.
    ///
    /// An exact match on a tabulated `x` returns that row's parameters
    /// unmodified. Between two rows, each of L/M/S is interpolated
    /// linearly at `weight = (x - x0) / (x1 - x0)`. Outside the
    /// tabulated range the table does not extrapolate: the answer is
    /// `None` and the caller omits the point.
    ///
    /// Tables are small (≤ ~30 rows), so a linear scan is fine.
    pub fn params_at(&self, x: f64) -> Option<LmsParams> {
        let n = self.rows.len();
        for i in 0..n {
            let row = &self.rows[i];
            if x == row.x {
                return Some(row.params());
            }
            if i + 1 < n {
                let next = &self.rows[i + 1];
                if x > row.x && x <= next.x {
                    let weight = (x - row.x) / (next.x - row.x);
                    return Some(LmsParams::new(
                        weighted_avg(row.l, next.l, weight),
                        weighted_avg(row.m, next.m, weight),
                        weighted_avg(row.s, next.s, weight),
                    ));
                }
            }
        }
        None
    }
}
