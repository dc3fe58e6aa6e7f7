//! Standard-normal distribution primitives.
//!
//! Closed-form approximations chosen to match the reference curves the
//! dashboard has always drawn: Abramowitz–Stegun 7.1.26 for the error
//! function and Acklam's rational approximation for the quantile
//! function. Both are pure and allocation-free.

use crate::error::StatsError;

/// Linear interpolation: the value at fractional distance `weight`
/// between `a` and `b`.
///
/// Total by choice: a weight outside `[0, 1]` extrapolates linearly
/// rather than erroring.
pub fn weighted_avg(a: f64, b: f64, weight: f64) -> f64 {
    a + (b - a) * weight
}

/// Error function, Abramowitz–Stegun formula 7.1.26.
///
/// Absolute error ≤ 1.5e-7. Odd symmetry is recovered by extracting the
/// sign up front; zero takes the positive branch.
pub fn erf(x: f64) -> f64 {
    // Constants for A&S 7.1.26.
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    // Horner's method over the five-term polynomial.
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Standard-normal CDF: the probability that a standard normal variable
/// is ≤ `z`. Total over finite `z`; `normal_cdf(0.0)` is 0.5.
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z * std::f64::consts::FRAC_1_SQRT_2))
}

/// Coefficients of Acklam's rational approximation to the inverse
/// standard-normal CDF. These literals are the algorithm; relative
/// error stays below 1.15e-9 across the whole domain.
const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];
const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Tail/central breakpoint of the Acklam approximation.
const P_LOW: f64 = 0.02425;

/// Inverse standard-normal CDF (quantile function): the `z` satisfying
/// `P(Z <= z) = p`.
///
/// Defined only on the open interval `(0, 1)`; anything else (including
/// NaN) is a domain error, never clamped.
pub fn inverse_normal_cdf(p: f64) -> Result<f64, StatsError> {
    if !(0.0 < p && p < 1.0) {
        return Err(StatsError::ProbabilityOutOfRange(p));
    }

    let p_high = 1.0 - P_LOW;
    let z = if p < P_LOW {
        // Lower tail.
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p > p_high {
        // Upper tail, by symmetry with the lower.
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else {
        // Central region.
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    };
    Ok(z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_avg_endpoints_and_midpoint() {
        assert_eq!(weighted_avg(2.0, 4.0, 0.0), 2.0);
        assert_eq!(weighted_avg(2.0, 4.0, 1.0), 4.0);
        assert_eq!(weighted_avg(2.0, 4.0, 0.5), 3.0);
        // Out-of-range weights extrapolate instead of erroring.
        assert_eq!(weighted_avg(2.0, 4.0, 2.0), 6.0);
    }

    #[test]
    fn erf_reference_values() {
        // erf(1) ≈ 0.8427007929, erf(2) ≈ 0.9953222650
        assert!((erf(1.0) - 0.842_700_792_9).abs() < 2e-7);
        assert!((erf(2.0) - 0.995_322_265_0).abs() < 2e-7);
        // Odd symmetry is exact by construction.
        assert_eq!(erf(-1.5), -erf(1.5));
        // The approximation's residual at zero is ~1e-9.
        assert!(erf(0.0).abs() < 2e-9);
    }

    #[test]
    fn normal_cdf_at_zero_is_half() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn normal_cdf_known_quantiles() {
        // Φ(1.96) ≈ 0.9750021
        assert!((normal_cdf(1.96) - 0.975_002_1).abs() < 1e-6);
        assert!((normal_cdf(-1.96) - 0.024_997_9).abs() < 1e-6);
    }

    #[test]
    fn inverse_normal_cdf_median_is_zero() {
        assert_eq!(inverse_normal_cdf(0.5).unwrap(), 0.0);
    }

    #[test]
    fn inverse_normal_cdf_reference_values() {
        // z(0.975) ≈ 1.959964
        assert!((inverse_normal_cdf(0.975).unwrap() - 1.959_964).abs() < 1e-5);
        assert!((inverse_normal_cdf(0.025).unwrap() + 1.959_964).abs() < 1e-5);
        // Deep tail, exercising the rational tail branches.
        assert!((inverse_normal_cdf(0.001).unwrap() + 3.090_232).abs() < 1e-5);
    }

    #[test]
    fn inverse_normal_cdf_rejects_closed_endpoints() {
        for p in [0.0, 1.0, -0.2, 1.7, f64::NAN] {
            assert!(matches!(
                inverse_normal_cdf(p),
                Err(StatsError::ProbabilityOutOfRange(_))
            ));
        }
    }

    #[test]
    fn cdf_inverts_quantile_across_the_domain() {
        // Dense sweep of (0, 1), including both tail regions.
        let mut p = 0.0005;
        while p < 1.0 {
            let z = inverse_normal_cdf(p).unwrap();
            assert!(
                (normal_cdf(z) - p).abs() <= 1e-7,
                "round trip drifted at p = {p}"
            );
            p += 0.0005;
        }
    }
}
