use indexmap::IndexMap;

use crate::{
    arguments::{Arguments, Entry, ResolvedArguments},
    container::Container,
    errors::{InvalidArgumentError, ResolveError},
    resolver::ValueResolver,
    types::Instance,
};

/// Defines the definitions found at the top level of a structure
///
/// Nested structures are passed through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructureResolver;

impl StructureResolver {
    /// Resolves an argument map
    pub fn resolve_arguments(
        &self,
        arguments: &Arguments,
        container: &Container,
    ) -> Result<ResolvedArguments, ResolveError> {
        let mut values = IndexMap::with_capacity(arguments.len());
        for (key, entry) in arguments.iter() {
            let value = match entry {
                Entry::Value(instance) => instance.clone(),
                Entry::Definition(definition) => definition.define(container)?,
                Entry::Structure(structure) => Instance::new(structure.clone()),
            };
            values.insert(key.clone(), value);
        }

        Ok(ResolvedArguments::new(values))
    }
}

impl ValueResolver for StructureResolver {
    type Output = ResolvedArguments;

    fn can(&self, value: &Entry) -> bool {
        matches!(value, Entry::Structure(_))
    }

    fn resolve(&self, value: &Entry, container: &Container) -> Result<ResolvedArguments, ResolveError> {
        match value {
            Entry::Structure(structure) => self.resolve_arguments(structure, container),
            other => Err(InvalidArgumentError::new(format!(
                "StructureResolver expects a structure, got {other:?}"
            ))
            .into()),
        }
    }
}
