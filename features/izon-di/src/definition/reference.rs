use crate::{
    container::Container, definition::Definition, errors::ResolveError, types::Instance,
};

/// Resolves another identifier of the same container
#[derive(Debug, Clone)]
pub struct ReferenceDefinition {
    id: String,
}

impl ReferenceDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Definition for ReferenceDefinition {
    fn define(&self, container: &Container) -> Result<Instance, ResolveError> {
        container.get(&self.id)
    }
}
