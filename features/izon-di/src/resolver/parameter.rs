use std::{fmt::Debug, sync::Arc};

use crate::{
    arguments::{Arguments, ResolvedArguments},
    container::Container,
    errors::{DependencyError, ResolveError},
    parameter::{Invocation, Parameter, Signature},
    resolver::StructureResolver,
    types::Instance,
};

/// Strategy supplying the value of one declared parameter
pub trait ParameterResolver: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Cheap applicability check
    fn can_handle(&self, parameter: &Parameter, arguments: &ResolvedArguments) -> bool;

    /// Produces the argument value of `parameter` for `target`, may resolve
    /// further ids from the container
    fn resolve(
        &self,
        target: &str,
        parameter: &Parameter,
        container: &Container,
        arguments: &ResolvedArguments,
    ) -> Result<Instance, ResolveError>;
}

/// Uses an explicitly supplied argument, matched by name, then by position
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitArgumentResolver;

impl ParameterResolver for ExplicitArgumentResolver {
    fn name(&self) -> &'static str {
        "explicit"
    }

    fn can_handle(&self, parameter: &Parameter, arguments: &ResolvedArguments) -> bool {
        arguments
            .find(parameter.name(), parameter.position())
            .is_some()
    }

    fn resolve(
        &self,
        target: &str,
        parameter: &Parameter,
        _container: &Container,
        arguments: &ResolvedArguments,
    ) -> Result<Instance, ResolveError> {
        arguments
            .find(parameter.name(), parameter.position())
            .cloned()
            .ok_or_else(|| {
                DependencyError::new(parameter.name(), target, "no argument was supplied").into()
            })
    }
}

/// Resolves class-hinted parameters from the container
///
/// Falls back to the default value if the class is not registered or could
/// not be built.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassNameResolver;

impl ParameterResolver for ClassNameResolver {
    fn name(&self) -> &'static str {
        "class-name"
    }

    fn can_handle(&self, parameter: &Parameter, _arguments: &ResolvedArguments) -> bool {
        parameter.class_name().is_some()
    }

    fn resolve(
        &self,
        target: &str,
        parameter: &Parameter,
        container: &Container,
        _arguments: &ResolvedArguments,
    ) -> Result<Instance, ResolveError> {
        let Some(class_name) = parameter.class_name() else {
            return Err(
                DependencyError::new(parameter.name(), target, "parameter is not class-hinted")
                    .into(),
            );
        };

        match container.get(class_name) {
            Ok(instance) => Ok(instance),
            Err(error @ (ResolveError::NotFound(_) | ResolveError::Dependency(_))) => {
                match parameter.default_value() {
                    Some(default) => {
                        tracing::debug!(
                            "Class '{class_name}' could not be resolved for '{}' of '{target}', using its default value",
                            parameter.name()
                        );
                        Ok(default.clone())
                    }
                    None => Err(DependencyError::new(
                        parameter.name(),
                        target,
                        format!("class '{class_name}' could not be resolved"),
                    )
                    .caused_by(error)
                    .into()),
                }
            }
            Err(error) => Err(error),
        }
    }
}

/// Uses the declared default value
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueResolver;

impl ParameterResolver for DefaultValueResolver {
    fn name(&self) -> &'static str {
        "default-value"
    }

    fn can_handle(&self, parameter: &Parameter, _arguments: &ResolvedArguments) -> bool {
        parameter.has_default()
    }

    fn resolve(
        &self,
        target: &str,
        parameter: &Parameter,
        _container: &Container,
        _arguments: &ResolvedArguments,
    ) -> Result<Instance, ResolveError> {
        parameter.default_value().cloned().ok_or_else(|| {
            DependencyError::new(parameter.name(), target, "parameter has no default value").into()
        })
    }
}

/// Ordered parameter resolvers, the first applicable one wins
#[derive(Clone)]
pub struct ResolverChain {
    resolvers: Vec<Arc<dyn ParameterResolver>>,
}
impl Debug for ResolverChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.resolvers.iter().map(|resolver| resolver.name()))
            .finish()
    }
}

/// Explicit arguments, then class hints, then default values
impl Default for ResolverChain {
    fn default() -> Self {
        Self::empty()
            .with(ExplicitArgumentResolver)
            .with(ClassNameResolver)
            .with(DefaultValueResolver)
    }
}

impl ResolverChain {
    /// A chain without any resolver
    pub fn empty() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// Appends a resolver with the lowest priority so far
    pub fn with(mut self, resolver: impl ParameterResolver + 'static) -> Self {
        self.resolvers.push(Arc::new(resolver));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|resolver| resolver.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Resolves a single parameter of `target`
    ///
    /// Returns `None` for an optional parameter no resolver applies to.
    pub fn resolve_parameter(
        &self,
        target: &str,
        parameter: &Parameter,
        container: &Container,
        arguments: &ResolvedArguments,
    ) -> Result<Option<Instance>, ResolveError> {
        let resolver = self
            .resolvers
            .iter()
            .find(|resolver| resolver.can_handle(parameter, arguments));

        match resolver {
            Some(resolver) => {
                tracing::trace!(
                    "Resolving parameter '{}' of '{target}' using {}",
                    parameter.name(),
                    resolver.name()
                );
                resolver
                    .resolve(target, parameter, container, arguments)
                    .map(Some)
            }
            None if parameter.is_optional() => {
                tracing::trace!(
                    "Leaving optional parameter '{}' of '{target}' empty",
                    parameter.name()
                );
                Ok(None)
            }
            None => Err(DependencyError::new(
                parameter.name(),
                target,
                "no resolver could supply a value",
            )
            .into()),
        }
    }

    /// Resolves the explicit arguments, then every parameter of the signature in order
    pub fn resolve_invocation(
        &self,
        target: &str,
        signature: &Signature,
        arguments: &Arguments,
        container: &Container,
    ) -> Result<Invocation, ResolveError> {
        let arguments = StructureResolver.resolve_arguments(arguments, container)?;

        let values = signature
            .parameters()
            .iter()
            .map(|parameter| {
                self.resolve_parameter(target, parameter, container, &arguments)
                    .map(|value| (parameter.name().to_string(), value))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Invocation::new(target, values))
    }
}
