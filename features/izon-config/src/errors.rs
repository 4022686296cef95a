use izon_di::TypeInfo;

/// Errors when registering or retrieving a config
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config type is already registered
    #[error("The config type '{0}' is already registered")]
    AlreadyRegistered(TypeInfo),
    /// The config type is not known
    #[error("The config type '{0}' is not known")]
    Missing(TypeInfo),
}
