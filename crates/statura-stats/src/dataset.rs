//! The loaded LMS reference dataset and the conversions the dashboard
//! calls against it.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use statura_core::{ChartType, Sex};

use crate::curve::{materialize_curve, PercentileCache, PercentileCurve, DEFAULT_PERCENTILES};
use crate::error::{DatasetError, StatsError};
use crate::table::{LmsRow, LmsTable};

/// Chart types whose default percentile curves are precomputed at load
/// time: the ones the dashboard always draws.
pub const CACHED_CHART_TYPES: [ChartType; 3] = [
    ChartType::WeightWho,
    ChartType::HeightWho,
    ChartType::WflWho,
];

/// On-file shape of one chart entry. Sibling keys next to `data`
/// (display name, units) belong to the frontend and are ignored here.
#[derive(Debug, Deserialize)]
struct ChartEntry {
    data: HashMap<Sex, Vec<LmsRow>>,
}

/// The full LMS reference dataset, loaded and validated once,
/// immutable thereafter.
///
/// The host constructs this at startup and passes it by reference (or
/// behind an `Arc`) into every call. Construction is the one
/// initialization step, so there is no "uninitialized registry" state
/// to guard against. All methods are pure reads over immutable data
/// and are safe to call concurrently without synchronization.
#[derive(Debug)]
pub struct GrowthCharts {
    tables: HashMap<ChartType, HashMap<Sex, LmsTable>>,
    cache: PercentileCache,
}

impl GrowthCharts {
    /// Load and validate the reference-data file. Any parse or
    /// validation failure is fatal: the dashboard must not start with
    /// partial charts.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let charts = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            charts = charts.tables.len(),
            "loaded growth-chart reference data"
        );
        Ok(charts)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let raw: HashMap<ChartType, ChartEntry> = serde_json::from_str(json)?;

        let mut tables: HashMap<ChartType, HashMap<Sex, LmsTable>> = HashMap::new();
        for (chart, entry) in raw {
            let mut by_sex = HashMap::new();
            for (sex, rows) in entry.data {
                let table = LmsTable::new(rows)
                    .map_err(|source| DatasetError::InvalidTable { chart, sex, source })?;
                by_sex.insert(sex, table);
            }
            tables.insert(chart, by_sex);
        }

        // Precompute the default curves for every sex the common chart
        // types actually ship.
        let mut to_cache = Vec::new();
        for &chart in &CACHED_CHART_TYPES {
            if let Some(by_sex) = tables.get(&chart) {
                for (&sex, table) in by_sex {
                    to_cache.push((chart, sex, table));
                }
            }
        }
        let cache = PercentileCache::build(to_cache, &DEFAULT_PERCENTILES)?;

        Ok(Self { tables, cache })
    }

    /// The LMS table for a chart/sex, if the dataset provides one.
    pub fn table(&self, chart: ChartType, sex: Sex) -> Option<&LmsTable> {
        self.tables.get(&chart)?.get(&sex)
    }

    /// Chart types present in the dataset.
    pub fn chart_types(&self) -> impl Iterator<Item = ChartType> + '_ {
        self.tables.keys().copied()
    }

    /// Sexes the dataset provides for a chart type.
    pub fn sexes(&self, chart: ChartType) -> impl Iterator<Item = Sex> + '_ {
        self.tables
            .get(&chart)
            .into_iter()
            .flat_map(|by_sex| by_sex.keys().copied())
    }

    /// Percentile rank (0–100) of a measured value at `x` (age in
    /// months, or length for weight-for-length charts).
    ///
    /// `Ok(None)` means "no answer" (the chart/sex has no table, or
    /// `x` is outside its tabulated range) and the caller omits the
    /// point rather than substituting a default. Mathematical domain
    /// errors are `Err`, never suppressed.
    pub fn percentile_of(
        &self,
        chart: ChartType,
        sex: Sex,
        x: f64,
        value: f64,
    ) -> Result<Option<f64>, StatsError> {
        let Some(table) = self.table(chart, sex) else {
            return Ok(None);
        };
        let Some(params) = table.params_at(x) else {
            return Ok(None);
        };
        params.percentile_of(value).map(Some)
    }

    /// Z-score variant of [`GrowthCharts::percentile_of`].
    pub fn zscore_of(
        &self,
        chart: ChartType,
        sex: Sex,
        x: f64,
        value: f64,
    ) -> Result<Option<f64>, StatsError> {
        let Some(table) = self.table(chart, sex) else {
            return Ok(None);
        };
        let Some(params) = table.params_at(x) else {
            return Ok(None);
        };
        params.zscore_of(value).map(Some)
    }

    /// Percentile reference lines for a chart.
    ///
    /// A request for the default percentile list on a precomputed chart
    /// type returns the shared cached curve; any other list, order, or
    /// chart type is materialized fresh and never stored (the cache is
    /// write-once at load). Unknown chart/sex combinations yield
    /// `Ok(None)`: nothing to plot, not an error.
    pub fn percentile_lines(
        &self,
        chart: ChartType,
        sex: Sex,
        percentiles: &[f64],
    ) -> Result<Option<Arc<PercentileCurve>>, StatsError> {
        let Some(table) = self.table(chart, sex) else {
            return Ok(None);
        };
        if let Some(curve) = self.cache.get(chart, sex, percentiles) {
            return Ok(Some(curve));
        }
        materialize_curve(table, percentiles).map(|curve| Some(Arc::new(curve)))
    }
}
