use std::sync::Arc;

use thiserror::Error;

use crate::types::DynError;

/// Any failure while resolving an identifier or a parameter
#[derive(Error, Debug, Clone)]
pub enum ResolveError {
    /// The requested identifier is not registered
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// A required parameter or dependency could not be resolved
    #[error(transparent)]
    Dependency(#[from] DependencyError),
    /// A resolver received a value it does not understand
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgumentError),
    /// An identifier was requested again while it was still being resolved
    #[error("A Circular Dependency exists through {chain:?}")]
    CircularDependency { chain: Vec<String> },
    /// Error raised by user code during resolution
    #[error("Error during resolution: {0}")]
    Other(Arc<DynError>),
}
impl ResolveError {
    /// Wraps an error raised by a factory, constructor or method
    pub fn other(error: impl Into<DynError>) -> Self {
        Self::Other(Arc::new(error.into()))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound(_))
    }

    pub fn is_dependency(&self) -> bool {
        matches!(self, ResolveError::Dependency(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ResolveError::InvalidArgument(_))
    }
}

/// The identifier is not known to the container
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("ID '{id}' was not found in the container.")]
pub struct NotFoundError {
    pub id: String,
}
impl NotFoundError {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// A dependency of `target` could not be resolved
#[derive(Error, Debug, Clone)]
#[error("Could not resolve '{subject}' for '{target}': {reason}")]
pub struct DependencyError {
    /// The failing parameter or class
    pub subject: String,
    /// The constructor or method the dependency was resolved for
    pub target: String,
    pub reason: String,
    #[source]
    pub source: Option<Box<ResolveError>>,
}
impl DependencyError {
    pub fn new(
        subject: impl Into<String>,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            target: target.into(),
            reason: reason.into(),
            source: None,
        }
    }

    pub fn caused_by(mut self, cause: ResolveError) -> Self {
        self.source = Some(Box::new(cause));
        self
    }
}

/// A value of an unexpected shape was handed to a resolver or invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid argument: {message}")]
pub struct InvalidArgumentError {
    pub message: String,
}
impl InvalidArgumentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dependency_error_exposes_its_cause() {
        let error = DependencyError::new("logger", "Mailer", "no default value")
            .caused_by(NotFoundError::new("Logger").into());

        assert_eq!(
            error.to_string(),
            "Could not resolve 'logger' for 'Mailer': no default value"
        );
        let cause = error.source().expect("cause is kept");
        assert_eq!(
            cause.to_string(),
            "ID 'Logger' was not found in the container."
        );
    }

    #[test]
    fn transparent_variants_keep_their_message() {
        let error: ResolveError = InvalidArgumentError::new("not a structure").into();

        assert!(error.is_invalid_argument());
        assert_eq!(error.to_string(), "Invalid argument: not a structure");
    }

    #[test]
    fn other_wraps_user_errors() {
        let error = ResolveError::other("connection refused");

        assert_eq!(
            error.to_string(),
            "Error during resolution: connection refused"
        );
    }
}
