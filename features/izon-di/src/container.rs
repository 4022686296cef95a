use std::{fmt::Debug, sync::Arc};

use indexmap::IndexMap;

use crate::{
    builder::ContainerBuilder,
    definition::SharedDefinition,
    errors::{InvalidArgumentError, NotFoundError, ResolveError},
    resolver::ResolverChain,
    stack::ResolutionStack,
    types::{Injectable, Instance},
};

/// Registry of definitions, resolved on every lookup
///
/// Nothing is cached: each [`Container::get`] runs the definition again, so
/// only scalar definitions hand out the same value twice.
pub struct Container {
    definitions: IndexMap<String, SharedDefinition>,
    resolvers: ResolverChain,
    stack: ResolutionStack,
}
impl Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("ids", &self.ids().collect::<Vec<_>>())
            .field("resolvers", &self.resolvers)
            .field("detect_cycles", &self.stack.detects_cycles())
            .finish()
    }
}
impl Default for Container {
    fn default() -> Self {
        Self::from_parts(IndexMap::new(), ResolverChain::default(), false)
    }
}

impl Container {
    /// Creates a container with the default resolver chain
    pub fn new<I, K>(definitions: I) -> Self
    where
        I: IntoIterator<Item = (K, SharedDefinition)>,
        K: Into<String>,
    {
        let mut container = Self::default();
        for (id, definition) in definitions {
            container.add(id, definition);
        }
        container
    }

    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    pub(crate) fn from_parts(
        definitions: IndexMap<String, SharedDefinition>,
        resolvers: ResolverChain,
        detect_cycles: bool,
    ) -> Self {
        Self {
            definitions,
            resolvers,
            stack: ResolutionStack::new(detect_cycles),
        }
    }

    /// Registers a definition, replacing any previous definition of `id`
    pub fn add(&mut self, id: impl Into<String>, definition: SharedDefinition) -> &mut Self {
        let id = id.into();
        if self.definitions.insert(id.clone(), definition).is_some() {
            tracing::debug!("Replaced definition of '{id}'");
        }
        self
    }

    pub fn has(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    /// Resolves `id` by running its definition
    pub fn get(&self, id: &str) -> Result<Instance, ResolveError> {
        let Some(definition) = self.definitions.get(id) else {
            tracing::debug!("Tried to get an unregistered id: {id}");
            return Err(NotFoundError::new(id).into());
        };

        let _guard = self.stack.enter(id)?;
        tracing::trace!("Resolving '{id}' [depth {}]", self.stack.depth());
        definition.define(self)
    }

    /// Resolves `id` and downcasts the value to `T`
    pub fn require<T: Injectable>(&self, id: &str) -> Result<Arc<T>, ResolveError> {
        self.get(id)?.downcast::<T>().map_err(|actual_type| {
            InvalidArgumentError::new(format!(
                "'{id}' resolved to '{actual_type}', not '{}'",
                std::any::type_name::<T>()
            ))
            .into()
        })
    }

    /// Registered ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// The chain used by object and method definitions
    pub fn parameter_resolvers(&self) -> &ResolverChain {
        &self.resolvers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{ReferenceDefinition, ScalarDefinition};
    use pretty_assertions::assert_eq;

    #[test]
    fn add_overwrites_in_place() {
        let mut container = Container::default();
        container
            .add("a", Arc::new(ScalarDefinition::new(1_u8)))
            .add("b", Arc::new(ScalarDefinition::new(2_u8)))
            .add("a", Arc::new(ScalarDefinition::new(3_u8)));

        assert_eq!(container.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(*container.require::<u8>("a").unwrap(), 3);
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn require_reports_type_mismatch() {
        let container = Container::new([(
            "port",
            Arc::new(ScalarDefinition::new(8080_u16)) as SharedDefinition,
        )]);

        let error = container.require::<String>("port").unwrap_err();

        assert!(error.is_invalid_argument());
    }

    #[test]
    fn stack_is_unwound_after_errors() {
        let container = Container::builder()
            .detect_cycles(true)
            .add("alias", Arc::new(ReferenceDefinition::new("missing")))
            .build();

        assert!(container.get("alias").unwrap_err().is_not_found());
        assert_eq!(container.stack.depth(), 0);
    }
}
