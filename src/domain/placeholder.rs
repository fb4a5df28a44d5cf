use serde::{Deserialize, Serialize};
use std::fmt;

/// A string template containing `:name` tokens.
///
/// Resolution replaces every literal occurrence of `:key` for each variable,
/// in the variables' insertion order. There is no escaping; when one key is
/// a prefix of another (`:tag` vs `:tagged`) the caller picks the order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Placeholder(String);

impl Placeholder {
    pub fn new(template: impl Into<String>) -> Self {
        Placeholder(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Substitute variables into the template. Never fails: unknown tokens
    /// are left verbatim.
    pub fn resolve(&self, variables: &Variables) -> String {
        variables
            .iter()
            .fold(self.0.clone(), |resolved, (key, value)| {
                resolved.replace(&format!(":{}", key), value)
            })
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Placeholder {
    fn from(template: &str) -> Self {
        Placeholder::new(template)
    }
}

impl From<String> for Placeholder {
    fn from(template: String) -> Self {
        Placeholder(template)
    }
}

/// Ordered string-to-string mapping used to resolve placeholders
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Variables {
    entries: Vec<(String, String)>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a variable. Overwriting keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style variant of [`Variables::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut variables = Variables::new();
        for (key, value) in iter {
            variables.insert(key, value);
        }
        variables
    }
}
