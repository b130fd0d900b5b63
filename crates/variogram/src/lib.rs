//! Variogram models for kriging.
//!
//! This crate catalogs the variogram models a kriging implementation fits to an
//! experimental variogram, along with the heuristics a fitting routine needs to
//! get started:
//!
//! - [`semivariance`] — the model formulas, one pure function per model
//! - [`heuristics`] — parameter bounds and initial guesses from observed lags
//!   and semivariances
//! - [`VariogramModel`] — a named formula with its parameter names and helpers
//! - [`BuiltinModel`] — the models shipped with the crate
//! - [`VariogramRegistry`] — a name-keyed catalog, passed explicitly to callers
//! - [`VariogramConfig`] / [`FittedVariogram`] — a model name with parameter
//!   values, and its checked, ready-to-evaluate form
//!
//! ```
//! use krige_variogram::VariogramRegistry;
//!
//! let registry = VariogramRegistry::builtin();
//! let linear = registry.lookup("linear")?;
//!
//! let lags = [1.0, 2.0, 3.0, 4.0];
//! let semivariance = [0.5, 1.0, 1.5, 2.0];
//! assert_eq!(linear.initial_guess(&lags, &semivariance), Some(vec![0.5, 0.5]));
//! assert_eq!(linear.semivariance(&[2.0, 5.0], 1.5)?, 8.0);
//! # Ok::<(), krige_variogram::VariogramError>(())
//! ```

mod builtin;
mod config;
mod error;
mod model;
mod registry;

pub mod heuristics;
pub mod semivariance;

pub use builtin::BuiltinModel;
pub use config::{FittedVariogram, VariogramConfig};
pub use error::VariogramError;
pub use heuristics::Bounds;
pub use model::{BoundsFn, InitialGuessFn, SemivarianceFn, VariogramModel};
pub use registry::VariogramRegistry;
