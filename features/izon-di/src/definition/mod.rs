use std::sync::Arc;

use crate::{container::Container, errors::ResolveError, types::Instance};

pub mod expression;
pub mod method;
pub mod object;
pub mod reference;
pub mod scalar;

pub use expression::ExpressionDefinition;
pub use method::{MethodDefinition, MethodKind, MethodSignature, MethodTarget, Reflect};
pub use object::{Constructible, ObjectDefinition};
pub use reference::ReferenceDefinition;
pub use scalar::ScalarDefinition;

/// A deferred recipe for producing a value
///
/// Definitions are immutable. `define` may call back into the container to
/// resolve nested dependencies, but never mutates it.
pub trait Definition: Send + Sync {
    fn define(&self, container: &Container) -> Result<Instance, ResolveError>;
}

/// Definition as stored in the container and in argument structures
pub type SharedDefinition = Arc<dyn Definition>;
