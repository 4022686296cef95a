use std::sync::Arc;

use indexmap::IndexMap;
use izon_di::{class_id, Container, Injectable, Instance, ScalarDefinition, TypeInfo};

use crate::errors::ConfigError;

/// A registry of all configs, keyed by type.
///
/// Configs can be registered and retrieved based on type, and handed to a
/// [`Container`] where class-hinted parameters pick them up.
#[derive(Debug, Default, Clone)]
pub struct ConfigProvider {
    configs: IndexMap<TypeInfo, Instance>,
}

impl ConfigProvider {
    /// Initializes an empty Config Provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve a config with specified type.
    ///
    /// If the config type is not available, it returns [`ConfigError::Missing`]
    pub fn get_config<T: Injectable>(&self) -> Result<Arc<T>, ConfigError> {
        let info = TypeInfo::of::<T>();

        self.configs
            .get(&info)
            .and_then(|instance| instance.downcast::<T>().ok())
            .ok_or(ConfigError::Missing(info))
    }

    /// Add a config to the registry.
    ///
    /// If the config type is already registered, it returns [`ConfigError::AlreadyRegistered`]
    pub fn add_config<T: Injectable>(&mut self, config: T) -> Result<&mut Self, ConfigError> {
        let info = TypeInfo::of::<T>();

        if self.configs.contains_key(&info) {
            return Err(ConfigError::AlreadyRegistered(info));
        }

        self.configs.insert(info, Instance::new(config));
        Ok(self)
    }

    /// Can optionally add a config to the registry.
    ///
    /// If the config provided is `Some(T)`, it will be the same as calling [`ConfigProvider::add_config`]
    /// If the config provided is `None`, then the function just returns `Ok(self)` for chaining
    pub fn maybe_add_config<T: Injectable>(
        &mut self,
        config: Option<T>,
    ) -> Result<&mut Self, ConfigError> {
        match config {
            Some(c) => self.add_config(c),
            None => Ok(self),
        }
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Registers every config as a scalar definition under its type's identifier
    ///
    /// The identifier matches [`class_id`], so `Parameter::class::<T>` resolves to the config.
    pub fn register(&self, container: &mut Container) {
        for (info, instance) in &self.configs {
            tracing::debug!("Registering config {info}");
            container.add(
                info.type_name,
                Arc::new(ScalarDefinition::from_instance(instance.clone())),
            );
        }
    }
}

/// The identifier a config of type `T` is registered under
pub fn config_id<T: Injectable>() -> String {
    class_id::<T>()
}
