use std::{fmt, str::FromStr};

use crate::{SemivarianceFn, VariogramError, VariogramModel, heuristics as h, semivariance as sv};

/// The variogram models shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinModel {
    Linear,
    Power,
    Gaussian,
    Exponential,
    Spherical,
    HoleEffect,
    GammaRayleighNuggetless,
}

impl BuiltinModel {
    /// Every built-in model, in registration order.
    pub const ALL: [Self; 7] = [
        Self::Linear,
        Self::Power,
        Self::Gaussian,
        Self::Exponential,
        Self::Spherical,
        Self::HoleEffect,
        Self::GammaRayleighNuggetless,
    ];

    /// Returns the registry key for this model.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Power => "power",
            Self::Gaussian => "gaussian",
            Self::Exponential => "exponential",
            Self::Spherical => "spherical",
            Self::HoleEffect => "hole_effect",
            Self::GammaRayleighNuggetless => "gamma_rayleigh_nuggetless",
        }
    }

    /// Builds the descriptor for this model.
    #[must_use]
    pub fn model(self) -> VariogramModel {
        let name = self.name();
        match self {
            Self::Linear => VariogramModel::new(name, sv::linear, ["slope", "nugget"])
                .with_bounds(h::linear_bounds)
                .with_initial_guess(h::linear_initial_guess),
            Self::Power => {
                VariogramModel::new(name, sv::power, ["scale", "exponent", "nugget"])
                    .with_bounds(h::power_bounds)
                    .with_initial_guess(h::power_initial_guess)
            }
            Self::Gaussian => sill_range_nugget(name, sv::gaussian),
            Self::Exponential => sill_range_nugget(name, sv::exponential),
            Self::Spherical => sill_range_nugget(name, sv::spherical),
            Self::HoleEffect => sill_range_nugget(name, sv::hole_effect),
            Self::GammaRayleighNuggetless => VariogramModel::new(
                name,
                sv::gamma_rayleigh_nuggetless,
                ["sill", "falloff", "beta"],
            )
            .with_bounds(h::gamma_rayleigh_bounds)
            .with_initial_guess(h::gamma_rayleigh_initial_guess),
        }
    }
}

/// Models parameterized as `[psill, range_, nugget]` share one set of helpers.
fn sill_range_nugget(name: &'static str, function: SemivarianceFn) -> VariogramModel {
    VariogramModel::new(name, function, ["psill", "range_", "nugget"])
        .with_bounds(h::sill_range_nugget_bounds)
        .with_initial_guess(h::sill_range_nugget_initial_guess)
}

impl fmt::Display for BuiltinModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinModel {
    type Err = VariogramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.name() == s)
            .ok_or_else(|| VariogramError::ModelNotFound { name: s.to_owned() })
    }
}

impl From<BuiltinModel> for VariogramModel {
    fn from(model: BuiltinModel) -> Self {
        model.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for model in BuiltinModel::ALL {
            assert_eq!(model.name().parse::<BuiltinModel>(), Ok(model));
            assert_eq!(model.to_string(), model.name());
            assert_eq!(model.model().name(), model.name());
        }
    }

    #[test]
    fn unknown_name_fails_to_parse() {
        assert_eq!(
            "matern".parse::<BuiltinModel>(),
            Err(VariogramError::ModelNotFound {
                name: "matern".into()
            })
        );
    }

    #[test]
    fn helper_output_lengths_match_parameter_count() {
        let lags = [1.0, 2.0, 3.0, 4.0];
        let semivariance = [0.5, 1.0, 1.5, 2.0];

        for builtin in BuiltinModel::ALL {
            let model = builtin.model();
            let n = model.parameter_count();
            let bounds = model.bounds(&lags, &semivariance).unwrap();
            let guess = model.initial_guess(&lags, &semivariance).unwrap();

            assert_eq!(bounds.lower.len(), n, "{builtin}");
            assert_eq!(bounds.upper.len(), n, "{builtin}");
            assert_eq!(guess.len(), n, "{builtin}");
            assert!(model.semivariance(&guess, 1.0).unwrap().is_finite(), "{builtin}");
        }
    }

    #[test]
    fn sill_range_nugget_models_share_helpers() {
        let shared = [
            BuiltinModel::Gaussian,
            BuiltinModel::Exponential,
            BuiltinModel::Spherical,
            BuiltinModel::HoleEffect,
        ];
        let lags = [0.0, 5.0, 10.0];
        let semivariance = [0.2, 0.9, 1.1];
        let reference = BuiltinModel::Gaussian.model();

        for builtin in shared {
            let model = builtin.model();
            assert_eq!(
                model.parameter_names().collect::<Vec<_>>(),
                ["psill", "range_", "nugget"]
            );
            assert_eq!(
                model.bounds(&lags, &semivariance),
                reference.bounds(&lags, &semivariance)
            );
            assert_eq!(
                model.initial_guess(&lags, &semivariance),
                reference.initial_guess(&lags, &semivariance)
            );
        }
    }
}
