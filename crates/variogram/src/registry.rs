use std::collections::{BTreeMap, btree_map};

use log::debug;

use crate::{BuiltinModel, FittedVariogram, VariogramConfig, VariogramError, VariogramModel};

/// A catalog of variogram models keyed by name.
///
/// Build one with [`VariogramRegistry::builtin`] (or [`Default`]) and pass it
/// by reference to whatever fits or evaluates variograms. Registering a model
/// under a name that is already present replaces the earlier model, which is
/// how a built-in can be overridden.
#[derive(Debug, Clone)]
pub struct VariogramRegistry {
    models: BTreeMap<String, VariogramModel>,
}

impl VariogramRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            models: BTreeMap::new(),
        }
    }

    /// Creates a registry holding every [`BuiltinModel`].
    #[must_use]
    pub fn builtin() -> Self {
        BuiltinModel::ALL.into_iter().map(VariogramModel::from).collect()
    }

    /// Adds `model`, replacing any model already registered under its name.
    ///
    /// Returns the replaced model, if there was one.
    pub fn register(&mut self, model: VariogramModel) -> Option<VariogramModel> {
        let name = model.name().to_owned();
        let replaced = self.models.insert(name.clone(), model);
        if replaced.is_some() {
            debug!("replaced variogram model `{name}`");
        } else {
            debug!("registered variogram model `{name}`");
        }
        replaced
    }

    /// Returns the model registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`VariogramError::ModelNotFound`] if no such model exists.
    pub fn lookup(&self, name: &str) -> Result<&VariogramModel, VariogramError> {
        self.get(name).ok_or_else(|| {
            debug!("variogram model `{name}` not found");
            VariogramError::ModelNotFound {
                name: name.to_owned(),
            }
        })
    }

    /// Returns the model registered under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VariogramModel> {
        self.models.get(name)
    }

    /// Returns `true` if a model is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Iterates over the registered models, sorted by name.
    pub fn iter(&self) -> btree_map::Values<'_, String, VariogramModel> {
        self.models.values()
    }

    /// Returns the number of registered models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns `true` if no models are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Binds a model and its parameters from a configuration record.
    ///
    /// # Errors
    ///
    /// Returns [`VariogramError::ModelNotFound`] if the model is not registered,
    /// or [`VariogramError::ParameterCount`] if the parameter count is wrong.
    pub fn resolve(&self, config: &VariogramConfig) -> Result<FittedVariogram<'_>, VariogramError> {
        let model = self.lookup(&config.model)?;
        FittedVariogram::new(model, config.parameters.clone())
    }
}

impl Default for VariogramRegistry {
    /// The built-in catalog; see [`VariogramRegistry::builtin`].
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a VariogramRegistry {
    type Item = &'a VariogramModel;
    type IntoIter = btree_map::Values<'a, String, VariogramModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<VariogramModel> for VariogramRegistry {
    fn extend<T: IntoIterator<Item = VariogramModel>>(&mut self, iter: T) {
        for model in iter {
            self.register(model);
        }
    }
}

impl FromIterator<VariogramModel> for VariogramRegistry {
    fn from_iter<T: IntoIterator<Item = VariogramModel>>(iter: T) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}
