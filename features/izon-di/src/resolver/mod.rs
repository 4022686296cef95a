use crate::{arguments::Entry, container::Container, errors::ResolveError};

pub mod parameter;
pub mod structure;

pub use parameter::{
    ClassNameResolver, DefaultValueResolver, ExplicitArgumentResolver, ParameterResolver,
    ResolverChain,
};
pub use structure::StructureResolver;

/// Resolves generic values that may embed definitions
pub trait ValueResolver {
    type Output;

    /// Checks whether the value has a shape this resolver understands
    fn can(&self, value: &Entry) -> bool;

    /// Resolves the value
    ///
    /// Fails with an invalid argument error for values `can` rejects.
    fn resolve(&self, value: &Entry, container: &Container) -> Result<Self::Output, ResolveError>;
}
