use indexmap::IndexMap;

use crate::{container::Container, definition::SharedDefinition, resolver::ResolverChain};

/// Assembles a [`Container`]
///
/// Besides the definitions, the builder decides the order of the parameter
/// resolver chain and whether re-entrant resolution is reported as a cycle.
pub struct ContainerBuilder {
    definitions: IndexMap<String, SharedDefinition>,
    resolvers: ResolverChain,
    detect_cycles: bool,
}
impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerBuilder {
    pub fn new() -> Self {
        ContainerBuilder {
            definitions: IndexMap::new(),
            resolvers: ResolverChain::default(),
            detect_cycles: false,
        }
    }
}
impl ContainerBuilder {
    pub fn add(mut self, id: impl Into<String>, definition: SharedDefinition) -> Self {
        self.definitions.insert(id.into(), definition);
        self
    }

    pub fn add_all<I, K>(mut self, definitions: I) -> Self
    where
        I: IntoIterator<Item = (K, SharedDefinition)>,
        K: Into<String>,
    {
        self.definitions
            .extend(definitions.into_iter().map(|(id, definition)| (id.into(), definition)));
        self
    }

    /// Replaces the parameter resolver chain
    pub fn resolvers(mut self, resolvers: ResolverChain) -> Self {
        self.resolvers = resolvers;
        self
    }

    /// Report circular dependencies instead of recursing until the stack overflows
    pub fn detect_cycles(mut self, detect_cycles: bool) -> Self {
        self.detect_cycles = detect_cycles;
        self
    }

    pub fn build(self) -> Container {
        tracing::debug!(
            "Building container with {} definitions, resolvers {:?}",
            self.definitions.len(),
            self.resolvers
        );
        Container::from_parts(self.definitions, self.resolvers, self.detect_cycles)
    }
}
