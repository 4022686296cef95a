use std::fmt::Debug;

use indexmap::IndexMap;

use crate::{
    definition::SharedDefinition,
    types::{Injectable, Instance},
};

/// Key of an explicitly supplied argument
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgumentKey {
    /// Matches the parameter with this name
    Name(String),
    /// Matches the parameter at this position (zero based)
    Position(usize),
}
impl std::fmt::Display for ArgumentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgumentKey::Name(name) => f.write_str(name),
            ArgumentKey::Position(position) => write!(f, "#{position}"),
        }
    }
}
impl From<&str> for ArgumentKey {
    fn from(name: &str) -> Self {
        ArgumentKey::Name(name.to_string())
    }
}
impl From<String> for ArgumentKey {
    fn from(name: String) -> Self {
        ArgumentKey::Name(name)
    }
}
impl From<usize> for ArgumentKey {
    fn from(position: usize) -> Self {
        ArgumentKey::Position(position)
    }
}

/// One element of an argument structure
#[derive(Clone)]
pub enum Entry {
    /// A plain value, used as is
    Value(Instance),
    /// A definition, defined against the container when resolved
    Definition(SharedDefinition),
    /// A nested structure
    Structure(Arguments),
}
impl Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entry::Value(instance) => f.debug_tuple("Value").field(instance).finish(),
            Entry::Definition(_) => f.write_str("Definition"),
            Entry::Structure(structure) => f.debug_tuple("Structure").field(structure).finish(),
        }
    }
}

/// Ordered map of explicitly configured arguments
#[derive(Clone, Default, Debug)]
pub struct Arguments {
    entries: IndexMap<ArgumentKey, Entry>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain value
    pub fn with_value<T: Injectable>(self, key: impl Into<ArgumentKey>, value: T) -> Self {
        self.with_entry(key, Entry::Value(Instance::new(value)))
    }

    /// Adds a definition that is resolved right before the invocation
    pub fn with_definition(self, key: impl Into<ArgumentKey>, definition: SharedDefinition) -> Self {
        self.with_entry(key, Entry::Definition(definition))
    }

    pub fn with_structure(self, key: impl Into<ArgumentKey>, structure: Arguments) -> Self {
        self.with_entry(key, Entry::Structure(structure))
    }

    pub fn with_entry(mut self, key: impl Into<ArgumentKey>, entry: Entry) -> Self {
        self.insert(key, entry);
        self
    }

    /// Inserts an entry, replacing an existing entry with the same key in place
    pub fn insert(&mut self, key: impl Into<ArgumentKey>, entry: Entry) -> Option<Entry> {
        self.entries.insert(key.into(), entry)
    }

    pub fn get(&self, key: &ArgumentKey) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ArgumentKey, &Entry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<ArgumentKey>> FromIterator<(K, Entry)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, Entry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Arguments after every top level definition has been defined
#[derive(Clone, Default, Debug)]
pub struct ResolvedArguments {
    values: IndexMap<ArgumentKey, Instance>,
}

impl ResolvedArguments {
    pub(crate) fn new(values: IndexMap<ArgumentKey, Instance>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: &ArgumentKey) -> Option<&Instance> {
        self.values.get(key)
    }

    /// Looks up an argument by parameter name first, then by position
    pub fn find(&self, name: &str, position: usize) -> Option<&Instance> {
        self.values
            .get(&ArgumentKey::Name(name.to_string()))
            .or_else(|| self.values.get(&ArgumentKey::Position(position)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ArgumentKey, &Instance)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
