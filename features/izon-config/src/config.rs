use std::{fmt::Debug, ops::Deref, sync::Arc};

use izon_di::{Injectable, Invocation, Parameter, ResolveError};

/// A wrapper type to allow for config injections
///
/// Constructors declare a config parameter with [`Config::parameter`] and pick
/// it up with [`Config::from_invocation`]. The config itself comes from a
/// [`ConfigProvider`](crate::provider::ConfigProvider) registered on the container.
///
/// # Example
/// ```rust
/// use izon_config::{config::Config, provider::ConfigProvider};
/// use izon_di::{class_id, object, Arguments, Constructible, Container, Invocation,
///     ResolveError, Signature};
///
/// struct MailerConfig {
///     sender: String,
/// }
///
/// struct Mailer {
///     config: Config<MailerConfig>,
/// }
/// impl Constructible for Mailer {
///     fn signature() -> Signature {
///         Signature::new().param(Config::<MailerConfig>::parameter("config"))
///     }
///
///     fn construct(arguments: Invocation) -> Result<Self, ResolveError> {
///         Ok(Mailer { config: Config::from_invocation(&arguments, "config")? })
///     }
/// }
///
/// let mut provider = ConfigProvider::new();
/// provider.add_config(MailerConfig { sender: "noreply@example.org".into() }).unwrap();
///
/// let mut container = Container::default();
/// provider.register(&mut container);
/// container.add(class_id::<Mailer>(), object::<Mailer>(Arguments::new()));
///
/// let mailer = container.require::<Mailer>(&class_id::<Mailer>()).unwrap();
/// assert_eq!(mailer.config.sender, "noreply@example.org");
/// ```
pub struct Config<T> {
    inner: Arc<T>,
}
impl<T> Deref for Config<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl<T> Clone for Config<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
impl<T: Debug> Debug for Config<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Config").field(&self.inner).finish()
    }
}
impl<T> Config<T> {
    pub fn inner(&self) -> Arc<T> {
        self.inner.clone()
    }

    pub fn into_inner(self) -> Arc<T> {
        self.inner
    }
}

impl<T: Injectable> Config<T> {
    /// A parameter resolved from the config registered for `T`
    pub fn parameter(name: impl Into<String>) -> Parameter {
        Parameter::class::<T>(name)
    }

    /// Takes the resolved config out of the invocation
    pub fn from_invocation(arguments: &Invocation, name: &str) -> Result<Self, ResolveError> {
        Ok(Config {
            inner: arguments.get::<T>(name)?,
        })
    }
}
