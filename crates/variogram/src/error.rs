use thiserror::Error;

/// Errors raised when looking up or evaluating a variogram model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariogramError {
    /// No model is registered under the requested name.
    #[error("variogram model `{name}` not found")]
    ModelNotFound { name: String },

    /// The number of parameters does not match the model's parameter names.
    #[error("variogram model `{model}` expects {expected} parameters, got {actual}")]
    ParameterCount {
        model: String,
        expected: usize,
        actual: usize,
    },
}
