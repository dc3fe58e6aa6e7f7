//! Percentile-curve materialization and the default-percentile cache.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use statura_core::{ChartType, Sex};

use crate::error::{DatasetError, StatsError};
use crate::table::LmsTable;

/// The percentile ranks charted by default: the standard clinical set.
pub const DEFAULT_PERCENTILES: [f64; 9] = [3.0, 5.0, 10.0, 25.0, 50.0, 75.0, 90.0, 95.0, 97.0];

/// Reference values at one tabulated `x`, one per requested percentile,
/// in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CurveRow {
    pub x: f64,
    pub values: Vec<f64>,
}

/// Percentile reference lines for one (chart type, sex).
///
/// Plain tabular data: rows keyed by the source table's own tabulated
/// `x` values (curve knots are never interpolated), one column per
/// requested percentile in request order. Suitable for direct rendering
/// by any charting layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PercentileCurve {
    pub percentiles: Vec<f64>,
    pub rows: Vec<CurveRow>,
}

/// Compute the percentile curve for `table`: the expected value at each
/// requested percentile, for every tabulated row.
pub fn materialize_curve(
    table: &LmsTable,
    percentiles: &[f64],
) -> Result<PercentileCurve, StatsError> {
    let mut rows = Vec::with_capacity(table.rows().len());
    for row in table.rows() {
        let params = row.params();
        let values = percentiles
            .iter()
            .map(|&p| params.value_at_percentile(p))
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(CurveRow { x: row.x, values });
    }
    Ok(PercentileCurve {
        percentiles: percentiles.to_vec(),
        rows,
    })
}

/// Precomputed default-percentile curves for the commonly charted
/// types.
///
/// Not a general cache: it holds exactly one percentile-list shape
/// fixed at build time, and nothing is ever inserted afterwards. A
/// request hits only when its list is element-wise identical (same
/// values, same order) to the build list; everything else recomputes.
#[derive(Debug)]
pub(crate) struct PercentileCache {
    percentiles: Vec<f64>,
    curves: HashMap<(ChartType, Sex), Arc<PercentileCurve>>,
}

impl PercentileCache {
    pub(crate) fn build(
        entries: Vec<(ChartType, Sex, &LmsTable)>,
        percentiles: &[f64],
    ) -> Result<Self, DatasetError> {
        let mut curves = HashMap::new();
        for (chart, sex, table) in entries {
            let curve = materialize_curve(table, percentiles)
                .map_err(|source| DatasetError::Precompute { chart, sex, source })?;
            curves.insert((chart, sex), Arc::new(curve));
        }
        info!(curves = curves.len(), "precomputed default percentile curves");
        Ok(Self {
            percentiles: percentiles.to_vec(),
            curves,
        })
    }

    pub(crate) fn get(
        &self,
        chart: ChartType,
        sex: Sex,
        requested: &[f64],
    ) -> Option<Arc<PercentileCurve>> {
        if requested != self.percentiles.as_slice() {
            return None;
        }
        self.curves.get(&(chart, sex)).cloned()
    }
}
