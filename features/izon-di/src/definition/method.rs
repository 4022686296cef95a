use std::{any::type_name, fmt::Debug, marker::PhantomData, sync::Arc};

use crate::{
    arguments::Arguments,
    container::Container,
    definition::{Definition, SharedDefinition},
    errors::{InvalidArgumentError, ResolveError},
    parameter::{Invocation, Signature},
    types::{Injectable, Instance},
};

/// Whether a method needs a receiver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// Called on an instance
    Instance,
    /// Called on the type itself
    Associated,
}

type Invoke<T> = dyn Fn(Option<Arc<T>>, Invocation) -> Result<Instance, ResolveError> + Send + Sync;

/// A callable method of `T` together with its parameter list
pub struct MethodSignature<T> {
    signature: Signature,
    kind: MethodKind,
    invoke: Arc<Invoke<T>>,
}
impl<T> Clone for MethodSignature<T> {
    fn clone(&self) -> Self {
        Self {
            signature: self.signature.clone(),
            kind: self.kind,
            invoke: self.invoke.clone(),
        }
    }
}

impl<T: Injectable> MethodSignature<T> {
    /// A method taking `&self`
    pub fn instance<R, F>(signature: Signature, method: F) -> Self
    where
        R: Injectable,
        F: Fn(&T, Invocation) -> Result<R, ResolveError> + Send + Sync + 'static,
    {
        let invoke = move |receiver: Option<Arc<T>>,
                           invocation: Invocation|
              -> Result<Instance, ResolveError> {
            let receiver = receiver.ok_or_else(|| {
                InvalidArgumentError::new(format!(
                    "'{}' must be called on an instance",
                    invocation.target()
                ))
            })?;
            method(&*receiver, invocation).map(Instance::new)
        };

        Self {
            signature,
            kind: MethodKind::Instance,
            invoke: Arc::new(invoke),
        }
    }

    /// An associated function without receiver
    pub fn associated<R, F>(signature: Signature, function: F) -> Self
    where
        R: Injectable,
        F: Fn(Invocation) -> Result<R, ResolveError> + Send + Sync + 'static,
    {
        Self {
            signature,
            kind: MethodKind::Associated,
            invoke: Arc::new(move |_: Option<Arc<T>>, invocation: Invocation| {
                function(invocation).map(Instance::new)
            }),
        }
    }

    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

/// Method lookup by name, standing in for method reflection
pub trait Reflect: Injectable + Sized {
    fn method(name: &str) -> Option<MethodSignature<Self>>;
}

/// What a method is called on
#[derive(Clone)]
pub enum MethodTarget {
    /// An existing instance
    Instance(Instance),
    /// A definition producing the receiver on every call
    Definition(SharedDefinition),
    /// The type itself, for associated functions
    Type,
}
impl Debug for MethodTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MethodTarget::Instance(instance) => f.debug_tuple("Instance").field(instance).finish(),
            MethodTarget::Definition(_) => f.write_str("Definition"),
            MethodTarget::Type => f.write_str("Type"),
        }
    }
}
impl MethodTarget {
    pub fn instance<T: Injectable>(receiver: T) -> Self {
        MethodTarget::Instance(Instance::new(receiver))
    }

    pub fn shared<T: Injectable>(receiver: Arc<T>) -> Self {
        MethodTarget::Instance(Instance::from_arc(receiver))
    }
}

/// Calls a method of `T` on every `define`, resolving its parameters
pub struct MethodDefinition<T: Reflect> {
    target: MethodTarget,
    method: String,
    arguments: Arguments,
    _type: PhantomData<fn() -> T>,
}
impl<T: Reflect> Debug for MethodDefinition<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodDefinition")
            .field("target", &self.target)
            .field("method", &self.qualified_name())
            .field("arguments", &self.arguments)
            .finish()
    }
}

impl<T: Reflect> MethodDefinition<T> {
    pub fn new(target: MethodTarget, method: impl Into<String>, arguments: Arguments) -> Self {
        Self {
            target,
            method: method.into(),
            arguments,
            _type: PhantomData,
        }
    }

    /// `Type::method`, used in errors and logs
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", type_name::<T>(), self.method)
    }

    fn receiver(&self, container: &Container) -> Result<Arc<T>, ResolveError> {
        let instance = match &self.target {
            MethodTarget::Instance(instance) => instance.clone(),
            MethodTarget::Definition(definition) => definition.define(container)?,
            MethodTarget::Type => {
                return Err(InvalidArgumentError::new(format!(
                    "Non-static method '{}' cannot be called without an instance",
                    self.qualified_name()
                ))
                .into())
            }
        };

        instance.downcast::<T>().map_err(|actual_type| {
            InvalidArgumentError::new(format!(
                "'{}' cannot be called on '{actual_type}'",
                self.qualified_name()
            ))
            .into()
        })
    }
}

impl<T: Reflect> Definition for MethodDefinition<T> {
    fn define(&self, container: &Container) -> Result<Instance, ResolveError> {
        let target = self.qualified_name();
        let Some(method) = T::method(&self.method) else {
            return Err(
                InvalidArgumentError::new(format!("Method '{target}' does not exist")).into(),
            );
        };

        let receiver = match method.kind {
            MethodKind::Instance => Some(self.receiver(container)?),
            MethodKind::Associated => None,
        };

        let invocation = container.parameter_resolvers().resolve_invocation(
            &target,
            &method.signature,
            &self.arguments,
            container,
        )?;

        tracing::trace!("Invoking {target}");
        (method.invoke)(receiver, invocation)
    }
}
