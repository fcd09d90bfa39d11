use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The value bound to an action.
///
/// Bindings are not validated. Anything that is not a single key or a
/// list of keys is carried verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Binding {
    Key(String),
    Keys(Vec<String>),
    Other(serde_json::Value),
}

impl Binding {
    /// The bound keys, when the binding is a key or a list of keys.
    pub fn keys(&self) -> Option<Vec<&str>> {
        match self {
            Binding::Key(key) => Some(vec![key.as_str()]),
            Binding::Keys(keys) => Some(keys.iter().map(String::as_str).collect()),
            Binding::Other(_) => None,
        }
    }
}

impl From<&str> for Binding {
    fn from(key: &str) -> Self {
        Binding::Key(key.to_string())
    }
}

impl From<String> for Binding {
    fn from(key: String) -> Self {
        Binding::Key(key)
    }
}

impl From<Vec<String>> for Binding {
    fn from(keys: Vec<String>) -> Self {
        Binding::Keys(keys)
    }
}

/// Maps action names to their key bindings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyMap {
    bindings: BTreeMap<String, Binding>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the binding for an action
    pub fn get(&self, action: &str) -> Option<&Binding> {
        self.bindings.get(action)
    }

    pub fn contains(&self, action: &str) -> bool {
        self.bindings.contains_key(action)
    }

    /// Bind an action, returning the binding it replaced
    pub fn insert(
        &mut self,
        action: impl Into<String>,
        binding: impl Into<Binding>,
    ) -> Option<Binding> {
        self.bindings.insert(action.into(), binding.into())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All action names, sorted
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.bindings.iter().map(|(action, binding)| (action.as_str(), binding))
    }

    /// Lay `other` over this map.
    ///
    /// Only top-level actions are overridden: a binding present in both maps
    /// is replaced wholesale by the one from `other`, never merged.
    pub fn overlay(mut self, other: KeyMap) -> KeyMap {
        self.bindings.extend(other.bindings);
        self
    }
}

impl From<BTreeMap<String, Binding>> for KeyMap {
    fn from(bindings: BTreeMap<String, Binding>) -> Self {
        Self { bindings }
    }
}

impl<K, V> FromIterator<(K, V)> for KeyMap
where
    K: Into<String>,
    V: Into<Binding>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(action, binding)| (action.into(), binding.into()))
                .collect(),
        }
    }
}
