use crate::{
    container::Container,
    definition::Definition,
    errors::ResolveError,
    types::{Injectable, Instance},
};

/// Returns a literal value unchanged
#[derive(Debug, Clone)]
pub struct ScalarDefinition {
    value: Instance,
}

impl ScalarDefinition {
    pub fn new<T: Injectable>(value: T) -> Self {
        Self::from_instance(Instance::new(value))
    }

    pub fn from_instance(value: Instance) -> Self {
        Self { value }
    }
}

impl Definition for ScalarDefinition {
    fn define(&self, _container: &Container) -> Result<Instance, ResolveError> {
        Ok(self.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn returns_the_same_literal_every_time() {
        let container = Container::default();
        let definition = ScalarDefinition::new(vec!["a", "b"]);

        let first = definition.define(&container).unwrap();
        let second = definition.define(&container).unwrap();

        assert!(first.ptr_eq(&second));
        assert_eq!(*first.downcast::<Vec<&str>>().unwrap(), vec!["a", "b"]);
    }
}
