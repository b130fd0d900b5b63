//! Parameter bounds and initial guesses derived from an experimental variogram.
//!
//! These seed an external least-squares fit. They are heuristics, not
//! constraints: nothing in this crate enforces them during evaluation.
//!
//! Degenerate data is passed through rather than rejected. A single distinct
//! lag gives a zero-width lag range and an infinite or `NaN` slope guess, and
//! empty input reduces to `max = -inf` and `min = +inf`. The fitting routine
//! decides whether such a starting point is usable.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower and upper box constraints, one entry per model parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

impl Bounds {
    /// Creates bounds from lower and upper limits.
    #[must_use]
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        Self { lower, upper }
    }

    /// Returns `true` if every `values[i]` lies within `[lower[i], upper[i]]`.
    ///
    /// Returns `false` when the lengths differ or any comparison involves `NaN`.
    #[must_use]
    pub fn contains(&self, values: &[f64]) -> bool {
        values.len() == self.lower.len()
            && values.len() == self.upper.len()
            && values
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(v, (lo, hi))| lo <= v && v <= hi)
    }
}

/// Maximum that propagates `NaN`.
fn amax(values: &[f64]) -> f64 {
    values.iter().fold(f64::NEG_INFINITY, |acc, &v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.max(v)
        }
    })
}

/// Minimum that propagates `NaN`.
fn amin(values: &[f64]) -> f64 {
    values.iter().fold(f64::INFINITY, |acc, &v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.min(v)
        }
    })
}

/// Average slope of the experimental variogram across the observed lags.
fn slope(lags: &[f64], semivariance: &[f64]) -> f64 {
    (amax(semivariance) - amin(semivariance)) / (amax(lags) - amin(lags))
}

/// Bounds for the linear model: `[slope, nugget]`.
#[must_use]
pub fn linear_bounds(_lags: &[f64], semivariance: &[f64]) -> Bounds {
    Bounds::new(vec![0.0, 0.0], vec![f64::INFINITY, amax(semivariance)])
}

/// Initial guess for the linear model: `[slope, nugget]`.
#[must_use]
pub fn linear_initial_guess(lags: &[f64], semivariance: &[f64]) -> Vec<f64> {
    vec![slope(lags, semivariance), amin(semivariance)]
}

/// Bounds for the power model: `[scale, exponent, nugget]`.
///
/// The exponent is kept strictly inside `(0, 2)`.
#[must_use]
pub fn power_bounds(_lags: &[f64], semivariance: &[f64]) -> Bounds {
    Bounds::new(
        vec![0.0, 0.0001, 0.0],
        vec![f64::INFINITY, 1.999, amax(semivariance)],
    )
}

/// Initial guess for the power model: `[scale, exponent, nugget]`.
#[must_use]
pub fn power_initial_guess(lags: &[f64], semivariance: &[f64]) -> Vec<f64> {
    vec![slope(lags, semivariance), 1.1, amin(semivariance)]
}

/// Bounds for the bounded `[psill, range, nugget]` models.
///
/// Shared by the gaussian, exponential, spherical, and hole effect models.
#[must_use]
pub fn sill_range_nugget_bounds(lags: &[f64], semivariance: &[f64]) -> Bounds {
    let max_sv = amax(semivariance);
    Bounds::new(vec![0.0, 0.0, 0.0], vec![10.0 * max_sv, amax(lags), max_sv])
}

/// Initial guess for the bounded `[psill, range, nugget]` models.
///
/// Shared by the gaussian, exponential, spherical, and hole effect models.
#[must_use]
pub fn sill_range_nugget_initial_guess(lags: &[f64], semivariance: &[f64]) -> Vec<f64> {
    vec![
        amax(semivariance) - amin(semivariance),
        0.25 * amax(lags),
        amin(semivariance),
    ]
}

/// Bounds for the nuggetless gamma-Rayleigh model: `[sill, falloff, beta]`.
///
/// Fixed limits, independent of the data.
#[must_use]
pub fn gamma_rayleigh_bounds(_lags: &[f64], _semivariance: &[f64]) -> Bounds {
    Bounds::new(vec![0.0, 0.0, 0.0], vec![1000.0, 10.0, 10.0])
}

/// Initial guess for the nuggetless gamma-Rayleigh model.
#[must_use]
pub fn gamma_rayleigh_initial_guess(_lags: &[f64], _semivariance: &[f64]) -> Vec<f64> {
    vec![2.0, 0.01, 0.0001]
}
