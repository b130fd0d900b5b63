//! Semivariance formulas for the built-in variogram models.
//!
//! Each function takes an ordered parameter slice `m` and a single distance
//! `d`, and returns the semivariance at `d`. Array evaluation is provided by
//! [`VariogramModel`](crate::VariogramModel), which maps these functions over
//! every element.
//!
//! The functions do not enforce parameter bounds. A zero or negative range,
//! falloff, or exponent follows IEEE-754 arithmetic and yields `inf` or `NaN`.
//!
//! # Panics
//!
//! Every function indexes into `m` directly and panics if `m` is shorter than
//! the model's parameter count. Evaluate through a
//! [`VariogramModel`](crate::VariogramModel) to get a
//! [`VariogramError::ParameterCount`](crate::VariogramError::ParameterCount)
//! instead.

/// Linear model, `m = [slope, nugget]`.
#[must_use]
pub fn linear(m: &[f64], d: f64) -> f64 {
    let slope = m[0];
    let nugget = m[1];
    slope * d + nugget
}

/// Power model, `m = [scale, exponent, nugget]`.
#[must_use]
pub fn power(m: &[f64], d: f64) -> f64 {
    let scale = m[0];
    let exponent = m[1];
    let nugget = m[2];
    scale * d.powf(exponent) + nugget
}

/// Gaussian model, `m = [psill, range, nugget]`.
///
/// The effective range is scaled by `4/7` so that the model reaches roughly
/// 95% of the partial sill at `d = range`.
#[must_use]
pub fn gaussian(m: &[f64], d: f64) -> f64 {
    let psill = m[0];
    let range = m[1];
    let nugget = m[2];
    let scaled = range * 4.0 / 7.0;
    psill * (1.0 - (-d.powi(2) / scaled.powi(2)).exp()) + nugget
}

/// Exponential model, `m = [psill, range, nugget]`.
#[must_use]
pub fn exponential(m: &[f64], d: f64) -> f64 {
    let psill = m[0];
    let range = m[1];
    let nugget = m[2];
    psill * (1.0 - (-d / (range / 3.0)).exp()) + nugget
}

/// Spherical model, `m = [psill, range, nugget]`.
///
/// Flat at `psill + nugget` beyond `range`. The cubic branch covers
/// `d <= range`, where it meets the plateau.
#[must_use]
pub fn spherical(m: &[f64], d: f64) -> f64 {
    let psill = m[0];
    let range = m[1];
    let nugget = m[2];
    if d <= range {
        psill * ((3.0 * d) / (2.0 * range) - d.powi(3) / (2.0 * range.powi(3))) + nugget
    } else {
        psill + nugget
    }
}

/// Hole effect model, `m = [psill, range, nugget]`.
#[must_use]
pub fn hole_effect(m: &[f64], d: f64) -> f64 {
    let psill = m[0];
    let range = m[1];
    let nugget = m[2];
    let scaled = d / (range / 3.0);
    psill * (1.0 - (1.0 - scaled) * (-scaled).exp()) + nugget
}

/// Nuggetless gamma-Rayleigh model, `m = [sill, falloff, beta]`.
///
/// Zero at the origin, rising to a peak and decaying back toward zero.
#[must_use]
pub fn gamma_rayleigh_nuggetless(m: &[f64], d: f64) -> f64 {
    let sill = m[0];
    let falloff = m[1];
    let beta = m[2];
    let fd = falloff * d;
    let omfd = 1.0 - fd;
    let bfd2 = beta * omfd * omfd;
    sill * fd * (omfd - bfd2).exp()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn nugget_at_origin() {
        assert_relative_eq!(linear(&[2.0, 5.0], 0.0), 5.0);
        assert_relative_eq!(power(&[2.0, 1.5, 0.3], 0.0), 0.3);
        assert_relative_eq!(gaussian(&[3.0, 10.0, 1.0], 0.0), 1.0);
        assert_relative_eq!(exponential(&[3.0, 10.0, 1.0], 0.0), 1.0);
        assert_relative_eq!(spherical(&[3.0, 10.0, 1.0], 0.0), 1.0);
        assert_relative_eq!(hole_effect(&[3.0, 10.0, 1.0], 0.0), 1.0);
        assert_relative_eq!(gamma_rayleigh_nuggetless(&[2.0, 0.01, 0.0001], 0.0), 0.0);
    }

    #[test]
    fn linear_is_a_line() {
        for d in [0.0, 0.5, 1.0, 7.25, 100.0] {
            assert_relative_eq!(linear(&[2.0, 5.0], d), 2.0 * d + 5.0);
        }
    }

    #[test]
    fn power_matches_formula() {
        let m = [0.5, 1.5, 0.1];
        assert_relative_eq!(power(&m, 4.0), 0.5 * 8.0 + 0.1);
    }

    #[test]
    fn spherical_plateau() {
        let m = [3.0, 10.0, 1.0];
        assert_eq!(spherical(&m, 10.5), 4.0);
        assert_eq!(spherical(&m, 1e6), 4.0);
        assert_relative_eq!(spherical(&m, 10.0), 4.0);
        assert_relative_eq!(spherical(&m, 5.0), 3.0 * (0.75 - 0.0625) + 1.0);
    }

    #[test]
    fn exponential_and_gaussian_approach_sill() {
        let m = [3.0, 10.0, 1.0];
        // At the practical range both models sit at ~95% of the partial sill.
        assert_relative_eq!(exponential(&m, 10.0), 3.0 * (1.0 - (-3.0_f64).exp()) + 1.0);
        assert_relative_eq!(
            gaussian(&m, 10.0),
            3.0 * (1.0 - (-49.0_f64 / 16.0).exp()) + 1.0
        );
        assert!(exponential(&m, 1e4) <= 4.0);
        assert_relative_eq!(gaussian(&m, 1e4), 4.0);
    }

    #[test]
    fn hole_effect_overshoots_sill() {
        let m = [1.0, 3.0, 0.0];
        // With range/3 = 1, gamma(d) = 1 - (1 - d) e^{-d}.
        assert_relative_eq!(hole_effect(&m, 2.0), 1.0 + (-2.0_f64).exp());
        assert!(hole_effect(&m, 2.0) > 1.0);
    }

    #[test]
    fn gamma_rayleigh_matches_formula() {
        let m = [2.0, 0.5, 0.25];
        let d = 1.0;
        let omfd: f64 = 0.5;
        let expected = 2.0 * 0.5 * (omfd - 0.25 * omfd * omfd).exp();
        assert_relative_eq!(gamma_rayleigh_nuggetless(&m, d), expected);
    }

    #[test]
    fn degenerate_parameters_do_not_panic() {
        assert!(gaussian(&[1.0, 0.0, 0.0], 0.0).is_nan());
        assert!(exponential(&[1.0, 0.0, 0.0], 0.0).is_nan());
        assert!(power(&[1.0, -1.0, 0.0], 0.0).is_infinite());
        assert!(hole_effect(&[1.0, 0.0, 0.0], 0.0).is_nan());
        assert_eq!(spherical(&[1.0, -1.0, 0.5], 2.0), 1.5);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn short_parameter_slice_panics() {
        let _ = gaussian(&[1.0, 2.0], 1.0);
    }
}
