use std::{fmt::Debug, sync::Arc};

use crate::{
    arguments::Arguments,
    container::Container,
    definition::Definition,
    errors::ResolveError,
    parameter::{class_id, Invocation, Signature},
    types::{Injectable, Instance},
};

/// A type that can be built by the container
///
/// `signature` stands in for constructor reflection: it lists the parameters
/// `construct` expects, in declaration order.
pub trait Constructible: Injectable + Sized {
    fn signature() -> Signature;

    /// Builds an instance from the resolved arguments
    fn construct(arguments: Invocation) -> Result<Self, ResolveError>;
}

type Constructor = dyn Fn(Invocation) -> Result<Instance, ResolveError> + Send + Sync;

/// Constructs a new object on every `define`, resolving its constructor parameters
#[derive(Clone)]
pub struct ObjectDefinition {
    class_name: String,
    signature: Signature,
    constructor: Arc<Constructor>,
    arguments: Arguments,
}
impl Debug for ObjectDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectDefinition")
            .field("class_name", &self.class_name)
            .field("signature", &self.signature)
            .field("arguments", &self.arguments)
            .finish()
    }
}

impl ObjectDefinition {
    /// Builds `T` through its [`Constructible`] implementation
    pub fn of<T: Constructible>(arguments: Arguments) -> Self {
        Self::new(class_id::<T>(), T::signature(), T::construct, arguments)
    }

    /// Builds an object from an explicit signature and constructor
    pub fn new<T, F>(
        class_name: impl Into<String>,
        signature: Signature,
        constructor: F,
        arguments: Arguments,
    ) -> Self
    where
        T: Injectable,
        F: Fn(Invocation) -> Result<T, ResolveError> + Send + Sync + 'static,
    {
        Self {
            class_name: class_name.into(),
            signature,
            constructor: Arc::new(move |invocation: Invocation| {
                constructor(invocation).map(Instance::new)
            }),
            arguments,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }
}

impl Definition for ObjectDefinition {
    fn define(&self, container: &Container) -> Result<Instance, ResolveError> {
        let invocation = container.parameter_resolvers().resolve_invocation(
            &self.class_name,
            &self.signature,
            &self.arguments,
            container,
        )?;

        tracing::trace!("Constructing instance of {}", self.class_name);
        (self.constructor)(invocation)
    }
}
