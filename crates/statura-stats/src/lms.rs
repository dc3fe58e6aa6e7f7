//! The LMS (Box-Cox) transform between measured values, Z-scores, and
//! percentile ranks.
//!
//! From the CDC's description of its percentile data files: the LMS
//! parameters are the power of the Box-Cox transformation (L), the
//! median (M), and the generalized coefficient of variation (S), and
//!
//! ```text
//! Z = ((X/M)^L - 1) / (L*S)    L != 0
//! Z = ln(X/M) / S              L  = 0
//! ```
//!
//! with the forward direction `X = M*(1 + L*S*Z)^(1/L)` (or `M*e^(S*Z)`
//! on the log-normal branch).

use serde::{Deserialize, Serialize};

use crate::error::StatsError;
use crate::normal::{inverse_normal_cdf, normal_cdf};

/// LMS parameters describing the skewed reference distribution at one
/// age/length point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsParams {
    /// Box-Cox power. Zero selects the log-normal branch.
    pub l: f64,
    /// Median. Must be positive for the transform to be defined.
    pub m: f64,
    /// Generalized coefficient of variation.
    pub s: f64,
}

impl LmsParams {
    pub fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }

    /// Expected measurement at standard-normal deviate `z`.
    ///
    /// Fails when `M <= 0`, or when `L != 0` and `1 + L*S*Z <= 0` (a
    /// fractional power of a non-positive base): a defined failure of
    /// the transform, not a crash.
    pub fn value_at_zscore(&self, z: f64) -> Result<f64, StatsError> {
        if self.m <= 0.0 {
            return Err(StatsError::NonPositiveMedian(self.m));
        }
        if self.l != 0.0 {
            let base = 1.0 + self.l * self.s * z;
            if base <= 0.0 {
                return Err(StatsError::BoxCoxUndefined(base));
            }
            Ok(self.m * base.powf(1.0 / self.l))
        } else {
            Ok(self.m * (self.s * z).exp())
        }
    }

    /// Z-score of a measured value. Requires `value > 0` and `M > 0`.
    pub fn zscore_of(&self, value: f64) -> Result<f64, StatsError> {
        if self.m <= 0.0 {
            return Err(StatsError::NonPositiveMedian(self.m));
        }
        if value <= 0.0 {
            return Err(StatsError::NonPositiveValue(value));
        }
        if self.l != 0.0 {
            Ok(((value / self.m).powf(self.l) - 1.0) / (self.l * self.s))
        } else {
            Ok((value / self.m).ln() / self.s)
        }
    }

    /// Expected measurement at a percentile rank in `(0, 100)`.
    pub fn value_at_percentile(&self, percentile: f64) -> Result<f64, StatsError> {
        if !(0.0 < percentile && percentile < 100.0) {
            return Err(StatsError::PercentileOutOfRange(percentile));
        }
        let z = inverse_normal_cdf(percentile / 100.0)?;
        self.value_at_zscore(z)
    }

    /// Percentile rank (0–100) of a measured value.
    pub fn percentile_of(&self, value: f64) -> Result<f64, StatsError> {
        let z = self.zscore_of(value)?;
        Ok(100.0 * normal_cdf(z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_percentile_reproduces_m_exactly() {
        // The 50th percentile maps to Z = 0 exactly, so the expected
        // value is M regardless of L and S, on both branches.
        let skewed = LmsParams::new(-1.6, 9.476, 0.11218);
        assert_eq!(skewed.value_at_percentile(50.0).unwrap(), 9.476);

        let lognormal = LmsParams::new(0.0, 9.476, 0.11218);
        assert_eq!(lognormal.value_at_percentile(50.0).unwrap(), 9.476);
    }

    #[test]
    fn transform_round_trips_on_both_branches() {
        let cases = [
            LmsParams::new(-1.6, 9.476, 0.11218),
            LmsParams::new(1.0, 3.3, 0.1),
            LmsParams::new(0.0, 46.0, 0.035),
        ];
        for params in cases {
            for value in [
                0.5 * params.m,
                0.9 * params.m,
                params.m,
                1.1 * params.m,
                1.8 * params.m,
            ] {
                let z = params.zscore_of(value).unwrap();
                let back = params.value_at_zscore(z).unwrap();
                assert!(
                    (back - value).abs() <= 1e-6,
                    "round trip drifted for L={} at value={value}: got {back}",
                    params.l
                );
            }
        }
    }

    #[test]
    fn zscore_of_median_is_zero() {
        let params = LmsParams::new(-1.2, 7.5, 0.09);
        assert!(params.zscore_of(7.5).unwrap().abs() < 1e-12);
    }

    #[test]
    fn non_positive_median_is_a_domain_error() {
        let params = LmsParams::new(1.0, 0.0, 0.1);
        assert!(matches!(
            params.zscore_of(5.0),
            Err(StatsError::NonPositiveMedian(_))
        ));
        assert!(matches!(
            params.value_at_zscore(0.0),
            Err(StatsError::NonPositiveMedian(_))
        ));
    }

    #[test]
    fn non_positive_value_is_a_domain_error() {
        let params = LmsParams::new(1.0, 3.3, 0.1);
        assert!(matches!(
            params.zscore_of(0.0),
            Err(StatsError::NonPositiveValue(_))
        ));
        assert!(matches!(
            params.zscore_of(-2.0),
            Err(StatsError::NonPositiveValue(_))
        ));
    }

    #[test]
    fn box_cox_base_at_or_below_zero_fails() {
        // L*S = 1, so Z = -1 drives the base to exactly zero.
        let params = LmsParams::new(2.0, 10.0, 0.5);
        assert!(matches!(
            params.value_at_zscore(-1.0),
            Err(StatsError::BoxCoxUndefined(_))
        ));
        assert!(matches!(
            params.value_at_zscore(-5.0),
            Err(StatsError::BoxCoxUndefined(_))
        ));
        // Just inside the domain still succeeds.
        assert!(params.value_at_zscore(-0.99).is_ok());
    }

    #[test]
    fn percentile_of_is_on_the_0_to_100_scale() {
        let params = LmsParams::new(1.0, 3.3, 0.1);
        let p = params.percentile_of(3.3).unwrap();
        assert!((p - 50.0).abs() < 1e-6);
        // Well above the median: a rank near 100, not a probability.
        let high = params.percentile_of(4.5).unwrap();
        assert!(high > 99.0 && high < 100.0);
    }

    #[test]
    fn value_at_percentile_rejects_rank_endpoints() {
        let params = LmsParams::new(1.0, 3.3, 0.1);
        for p in [0.0, 100.0, -5.0, 101.0] {
            assert!(matches!(
                params.value_at_percentile(p),
                Err(StatsError::PercentileOutOfRange(_))
            ));
        }
    }
}
