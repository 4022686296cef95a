use std::{fmt::Debug, sync::Arc};

use crate::{
    container::Container,
    definition::Definition,
    errors::ResolveError,
    types::{Injectable, Instance},
};

type Factory = dyn Fn(&Container) -> Result<Instance, ResolveError> + Send + Sync;

/// Invokes a factory on every `define`
#[derive(Clone)]
pub struct ExpressionDefinition {
    factory: Arc<Factory>,
}
impl Debug for ExpressionDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ExpressionDefinition")
    }
}

impl ExpressionDefinition {
    /// Wraps a factory producing `T`
    ///
    /// The factory receives the container to pull further dependencies.
    pub fn new<T, F>(factory: F) -> Self
    where
        T: Injectable,
        F: Fn(&Container) -> Result<T, ResolveError> + Send + Sync + 'static,
    {
        Self::from_instance_factory(move |container| factory(container).map(Instance::new))
    }

    /// Wraps a factory that already produces an [`Instance`]
    pub fn from_instance_factory<F>(factory: F) -> Self
    where
        F: Fn(&Container) -> Result<Instance, ResolveError> + Send + Sync + 'static,
    {
        Self {
            factory: Arc::new(factory),
        }
    }
}

impl Definition for ExpressionDefinition {
    fn define(&self, container: &Container) -> Result<Instance, ResolveError> {
        (self.factory)(container)
    }
}
