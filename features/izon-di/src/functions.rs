//! Shorthands for building definitions

use std::sync::Arc;

use crate::{
    arguments::Arguments,
    container::Container,
    definition::{
        Constructible, ExpressionDefinition, MethodDefinition, MethodTarget, ObjectDefinition,
        ReferenceDefinition, Reflect, ScalarDefinition, SharedDefinition,
    },
    errors::ResolveError,
    types::Injectable,
};

/// A literal value
pub fn scalar<T: Injectable>(value: T) -> SharedDefinition {
    Arc::new(ScalarDefinition::new(value))
}

/// A factory called on every lookup
pub fn expression<T, F>(factory: F) -> SharedDefinition
where
    T: Injectable,
    F: Fn(&Container) -> Result<T, ResolveError> + Send + Sync + 'static,
{
    Arc::new(ExpressionDefinition::new(factory))
}

/// A new `T` on every lookup
pub fn object<T: Constructible>(arguments: Arguments) -> SharedDefinition {
    Arc::new(ObjectDefinition::of::<T>(arguments))
}

/// The result of calling `name` on `target`
pub fn method<T: Reflect>(
    target: MethodTarget,
    name: impl Into<String>,
    arguments: Arguments,
) -> SharedDefinition {
    Arc::new(MethodDefinition::<T>::new(target, name, arguments))
}

/// Whatever `id` resolves to
pub fn reference(id: impl Into<String>) -> SharedDefinition {
    Arc::new(ReferenceDefinition::new(id))
}
