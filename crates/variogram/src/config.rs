use ndarray::{Array, ArrayBase, Data, Dimension};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{VariogramError, VariogramModel};

/// A variogram model named together with its parameter values.
///
/// This is the serializable form of a fitted variogram, suitable for storing
/// alongside kriging settings. Resolve it against a registry with
/// [`VariogramRegistry::resolve`](crate::VariogramRegistry::resolve).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariogramConfig {
    pub model: String,
    pub parameters: Vec<f64>,
}

impl VariogramConfig {
    /// Creates a config for `model` with the given parameters.
    pub fn new(model: impl Into<String>, parameters: impl Into<Vec<f64>>) -> Self {
        Self {
            model: model.into(),
            parameters: parameters.into(),
        }
    }
}

/// A registered model bound to a checked set of parameters.
#[derive(Debug, Clone)]
pub struct FittedVariogram<'a> {
    model: &'a VariogramModel,
    parameters: Vec<f64>,
}

impl<'a> FittedVariogram<'a> {
    /// Binds `parameters` to `model`.
    ///
    /// # Errors
    ///
    /// Returns [`VariogramError::ParameterCount`] if the number of parameters
    /// does not match the model.
    pub fn new(model: &'a VariogramModel, parameters: Vec<f64>) -> Result<Self, VariogramError> {
        model.check_parameters(&parameters)?;
        Ok(Self { model, parameters })
    }

    #[must_use]
    pub fn model(&self) -> &'a VariogramModel {
        self.model
    }

    #[must_use]
    pub fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    /// Returns the value of the parameter labelled `name`.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<f64> {
        self.model
            .parameter_index(name)
            .map(|index| self.parameters[index])
    }

    /// Semivariance at a single distance.
    #[must_use]
    pub fn semivariance(&self, distance: f64) -> f64 {
        (self.model.function())(&self.parameters, distance)
    }

    /// Semivariance at every element of `distances`, preserving its shape.
    #[must_use]
    pub fn semivariance_array<S, D>(&self, distances: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        distances.mapv(|d| self.semivariance(d))
    }

    #[must_use]
    pub fn to_config(&self) -> VariogramConfig {
        VariogramConfig::new(self.model.name(), self.parameters.clone())
    }
}
