use std::borrow::Cow;

use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::{Bounds, VariogramError};

/// Elementwise semivariance: `(parameters, distance) -> semivariance`.
pub type SemivarianceFn = fn(&[f64], f64) -> f64;

/// Box constraints from `(lags, semivariance)` observations.
pub type BoundsFn = fn(&[f64], &[f64]) -> Bounds;

/// Starting point from `(lags, semivariance)` observations.
pub type InitialGuessFn = fn(&[f64], &[f64]) -> Vec<f64>;

/// A named variogram model and its fitting metadata.
///
/// The parameter order is shared by the semivariance function, the parameter
/// names, and the outputs of the bounds and initial-guess helpers.
///
/// Any non-capturing closure coerces to the function types above, so custom
/// models can be built inline:
///
/// ```
/// use krige_variogram::VariogramModel;
///
/// let nugget_only = VariogramModel::new("nugget", |m, _d| m[0], ["nugget"]);
/// assert_eq!(nugget_only.semivariance(&[0.4], 12.0), Ok(0.4));
/// ```
#[derive(Debug, Clone)]
pub struct VariogramModel {
    name: Cow<'static, str>,
    function: SemivarianceFn,
    parameter_names: Vec<Cow<'static, str>>,
    bounds: Option<BoundsFn>,
    initial_guess: Option<InitialGuessFn>,
}

impl VariogramModel {
    /// Creates a model with no bounds or initial-guess helpers.
    pub fn new<N, P>(name: N, function: SemivarianceFn, parameter_names: P) -> Self
    where
        N: Into<Cow<'static, str>>,
        P: IntoIterator,
        P::Item: Into<Cow<'static, str>>,
    {
        Self {
            name: name.into(),
            function,
            parameter_names: parameter_names.into_iter().map(Into::into).collect(),
            bounds: None,
            initial_guess: None,
        }
    }

    /// Attaches a bounds helper.
    #[must_use]
    pub fn with_bounds(mut self, bounds: BoundsFn) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Attaches an initial-guess helper.
    #[must_use]
    pub fn with_initial_guess(mut self, initial_guess: InitialGuessFn) -> Self {
        self.initial_guess = Some(initial_guess);
        self
    }

    /// Returns the registry key of this model.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameter labels in evaluation order.
    pub fn parameter_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.parameter_names.iter().map(AsRef::as_ref)
    }

    /// Returns the number of parameters the model consumes.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.parameter_names.len()
    }

    /// Returns the position of the parameter labelled `name`, if any.
    #[must_use]
    pub fn parameter_index(&self, name: &str) -> Option<usize> {
        self.parameter_names.iter().position(|p| p == name)
    }

    /// Returns the raw semivariance function.
    #[must_use]
    pub fn function(&self) -> SemivarianceFn {
        self.function
    }

    /// Returns the bounds helper, if the model defines one.
    #[must_use]
    pub fn bounds_fn(&self) -> Option<BoundsFn> {
        self.bounds
    }

    /// Returns the initial-guess helper, if the model defines one.
    #[must_use]
    pub fn initial_guess_fn(&self) -> Option<InitialGuessFn> {
        self.initial_guess
    }

    /// Computes parameter bounds from an experimental variogram.
    ///
    /// Returns `None` if the model has no bounds helper.
    #[must_use]
    pub fn bounds(&self, lags: &[f64], semivariance: &[f64]) -> Option<Bounds> {
        self.bounds.map(|f| f(lags, semivariance))
    }

    /// Computes a starting point for fitting from an experimental variogram.
    ///
    /// Returns `None` if the model has no initial-guess helper.
    #[must_use]
    pub fn initial_guess(&self, lags: &[f64], semivariance: &[f64]) -> Option<Vec<f64>> {
        self.initial_guess.map(|f| f(lags, semivariance))
    }

    /// Checks that `parameters` has one value per parameter name.
    ///
    /// # Errors
    ///
    /// Returns [`VariogramError::ParameterCount`] on a length mismatch.
    pub fn check_parameters(&self, parameters: &[f64]) -> Result<(), VariogramError> {
        if parameters.len() == self.parameter_count() {
            Ok(())
        } else {
            Err(VariogramError::ParameterCount {
                model: self.name.to_string(),
                expected: self.parameter_count(),
                actual: parameters.len(),
            })
        }
    }

    /// Evaluates the semivariance at a single distance.
    ///
    /// # Errors
    ///
    /// Returns [`VariogramError::ParameterCount`] if `parameters` has the
    /// wrong length.
    pub fn semivariance(&self, parameters: &[f64], distance: f64) -> Result<f64, VariogramError> {
        self.check_parameters(parameters)?;
        Ok((self.function)(parameters, distance))
    }

    /// Evaluates the semivariance at every element of `distances`.
    ///
    /// The result has the same shape as `distances`.
    ///
    /// # Errors
    ///
    /// Returns [`VariogramError::ParameterCount`] if `parameters` has the
    /// wrong length.
    pub fn semivariance_array<S, D>(
        &self,
        parameters: &[f64],
        distances: &ArrayBase<S, D>,
    ) -> Result<Array<f64, D>, VariogramError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        self.check_parameters(parameters)?;
        let function = self.function;
        Ok(distances.mapv(|d| function(parameters, d)))
    }
}
