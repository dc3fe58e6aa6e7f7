//! Preprocessing of parsed rows into the per-metric series the
//! dashboard charts.

use std::collections::HashMap;

use statura_core::{Measurement, Metric, Sex};

use crate::error::DataError;
use crate::records::PatientRow;

/// Mean month length used for the age-in-months conversion.
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// The dashboard charts ages 0–2 years; anything at or past this cutoff
/// is dropped.
const MAX_AGE_MONTHS: f64 = 24.5;

/// The preprocessed data set: every retained measurement, the same
/// measurements split per metric, each patient's sex (for selecting the
/// normed table), and the distinct MRNs.
#[derive(Debug, Clone)]
pub struct GrowthData {
    pub all: Vec<Measurement>,
    pub weight: Vec<Measurement>,
    pub height: Vec<Measurement>,
    pub head_circumference: Vec<Measurement>,
    pub sexes: HashMap<String, Sex>,
    pub mrns: Vec<String>,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Compute ages, drop out-of-window measurements, and split by metric.
///
/// Age is `(taken_at - dob)` in days over the mean month length,
/// rounded to the two decimals the charts' age axis displays. Ordering
/// is by MRN, then by the original row order.
pub fn transform(rows: Vec<PatientRow>) -> Result<GrowthData, DataError> {
    let mut all = Vec::with_capacity(rows.len());
    let mut sexes = HashMap::new();

    for row in rows {
        let span = row
            .dob
            .until(row.taken_at)
            .map_err(|source| DataError::Age {
                mrn: row.mrn.clone(),
                source,
            })?;
        let age_months = round2(span.get_days() as f64 / DAYS_PER_MONTH);
        if age_months >= MAX_AGE_MONTHS {
            continue;
        }

        // First sex seen for an MRN wins, as in the source export.
        sexes.entry(row.mrn.clone()).or_insert(row.sex);
        all.push(Measurement {
            mrn: row.mrn,
            metric: row.metric,
            taken_at: row.taken_at,
            age_months,
            value: row.value,
        });
    }

    all.sort_by(|a, b| a.mrn.cmp(&b.mrn));

    let split = |metric: Metric| -> Vec<Measurement> {
        all.iter().filter(|m| m.metric == metric).cloned().collect()
    };
    let weight = split(Metric::Weight);
    let height = split(Metric::Height);
    let head_circumference = split(Metric::HeadCircumference);

    let mut mrns: Vec<String> = sexes.keys().cloned().collect();
    mrns.sort();

    Ok(GrowthData {
        all,
        weight,
        height,
        head_circumference,
        sexes,
        mrns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn row(mrn: &str, metric: Metric, dob: jiff::civil::Date, taken_at: jiff::civil::Date) -> PatientRow {
        PatientRow {
            mrn: mrn.to_string(),
            dob,
            sex: Sex::Male,
            metric,
            value: 4.0,
            taken_at,
        }
    }

    #[test]
    fn age_is_days_over_mean_month_length() {
        let rows = vec![row(
            "1001",
            Metric::Weight,
            date(2020, 1, 1),
            date(2020, 3, 1),
        )];
        let data = transform(rows).unwrap();
        // 60 days / 30.4375 = 1.9712... rounds to 1.97.
        assert_eq!(data.all[0].age_months, 1.97);
    }

    #[test]
    fn measurements_past_two_years_are_dropped() {
        let rows = vec![
            row("1001", Metric::Weight, date(2020, 1, 1), date(2020, 6, 1)),
            row("1001", Metric::Weight, date(2020, 1, 1), date(2023, 1, 1)),
        ];
        let data = transform(rows).unwrap();
        assert_eq!(data.all.len(), 1);
        assert!(data.all[0].age_months < 24.5);
    }

    #[test]
    fn splits_by_metric_and_collects_unique_mrns() {
        let dob = date(2020, 1, 1);
        let ts = date(2020, 2, 1);
        let rows = vec![
            row("1002", Metric::Weight, dob, ts),
            row("1001", Metric::Height, dob, ts),
            row("1001", Metric::Weight, dob, ts),
            row("1001", Metric::HeadCircumference, dob, ts),
        ];
        let data = transform(rows).unwrap();
        assert_eq!(data.all.len(), 4);
        assert_eq!(data.weight.len(), 2);
        assert_eq!(data.height.len(), 1);
        assert_eq!(data.head_circumference.len(), 1);
        assert_eq!(data.mrns, vec!["1001".to_string(), "1002".to_string()]);
        assert_eq!(data.sexes.len(), 2);
        // Sorted by MRN.
        assert_eq!(data.all[0].mrn, "1001");
        assert_eq!(data.all[3].mrn, "1002");
    }
}
