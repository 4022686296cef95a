use std::{any::type_name, sync::Arc};

use crate::{
    errors::{InvalidArgumentError, ResolveError},
    types::{Injectable, Instance},
};

/// Returns the identifier a type is registered under for class hints
pub fn class_id<T: ?Sized + 'static>() -> String {
    type_name::<T>().to_string()
}

/// Declared type of a parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    /// No type declared
    Mixed,
    /// A builtin type such as `string` or `int`, never looked up in the container
    Builtin(&'static str),
    /// A class or interface, looked up in the container under this identifier
    Class(String),
}

/// Declared formal parameter of a constructor or method
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    position: usize,
    declared_type: DeclaredType,
    default: Option<Instance>,
    optional: bool,
}

impl Parameter {
    /// An untyped parameter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
            declared_type: DeclaredType::Mixed,
            default: None,
            optional: false,
        }
    }

    /// A parameter hinted with `T`, resolved from the container under [`class_id::<T>`]
    pub fn class<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self::class_named(name, class_id::<T>())
    }

    /// A parameter hinted with a class registered under `id`
    pub fn class_named(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            declared_type: DeclaredType::Class(id.into()),
            ..Self::new(name)
        }
    }

    pub fn builtin(name: impl Into<String>, type_name: &'static str) -> Self {
        Self {
            declared_type: DeclaredType::Builtin(type_name),
            ..Self::new(name)
        }
    }

    /// Sets a default value, which also makes the parameter optional
    pub fn with_default<T: Injectable>(self, default: T) -> Self {
        self.with_default_instance(Instance::new(default))
    }

    pub fn with_default_instance(mut self, default: Instance) -> Self {
        self.default = Some(default);
        self.optional = true;
        self
    }

    /// Marks the parameter as optional without a default value
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn declared_type(&self) -> &DeclaredType {
        &self.declared_type
    }

    /// Identifier of the hinted class, if the parameter is class-hinted
    pub fn class_name(&self) -> Option<&str> {
        match &self.declared_type {
            DeclaredType::Class(id) => Some(id),
            _ => None,
        }
    }

    pub fn default_value(&self) -> Option<&Instance> {
        self.default.as_ref()
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

/// Ordered parameter list of a constructor or method
#[derive(Debug, Clone, Default)]
pub struct Signature {
    parameters: Vec<Parameter>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter, assigning it the next position
    pub fn param(mut self, mut parameter: Parameter) -> Self {
        parameter.position = self.parameters.len();
        self.parameters.push(parameter);
        self
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl FromIterator<Parameter> for Signature {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        iter.into_iter().fold(Signature::new(), Signature::param)
    }
}

/// Resolved arguments of one call, one slot per declared parameter
#[derive(Debug)]
pub struct Invocation {
    target: String,
    values: Vec<(String, Option<Instance>)>,
}

impl Invocation {
    pub(crate) fn new(target: impl Into<String>, values: Vec<(String, Option<Instance>)>) -> Self {
        Self {
            target: target.into(),
            values,
        }
    }

    /// Name of the constructor or method being invoked
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Raw value of a parameter, `None` if the parameter is unknown or was left empty
    pub fn value(&self, name: &str) -> Option<&Instance> {
        self.values
            .iter()
            .find(|(param, _)| param == name)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Raw value at a position
    pub fn value_at(&self, position: usize) -> Option<&Instance> {
        self.values.get(position).and_then(|(_, value)| value.as_ref())
    }

    /// Returns a required argument as `T`
    pub fn get<T: Injectable>(&self, name: &str) -> Result<Arc<T>, ResolveError> {
        self.optional(name)?.ok_or_else(|| {
            InvalidArgumentError::new(format!(
                "'{}' received no value for parameter '{name}'",
                self.target
            ))
            .into()
        })
    }

    /// Returns a clone of a required argument
    pub fn cloned<T: Injectable + Clone>(&self, name: &str) -> Result<T, ResolveError> {
        self.get::<T>(name).map(|value| T::clone(&value))
    }

    /// Returns an optional argument as `T`
    ///
    /// Fails if a value is present but of another type
    pub fn optional<T: Injectable>(&self, name: &str) -> Result<Option<Arc<T>>, ResolveError> {
        let Some(value) = self.value(name) else {
            return Ok(None);
        };

        value.downcast::<T>().map(Some).map_err(|actual_type| {
            InvalidArgumentError::new(format!(
                "parameter '{name}' of '{}' expects '{}' but got '{actual_type}'",
                self.target,
                type_name::<T>()
            ))
            .into()
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
