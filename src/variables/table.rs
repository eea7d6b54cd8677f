//! Ordered, immutable variable tables

use std::collections::HashSet;

use crate::error::{Result, UmcError};

/// Ordered `name -> value` mapping consumed by template substitution
///
/// Names are unique. Order is insertion order and only matters for
/// tie-breaking between equally long names during substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedVariables {
    entries: Vec<(String, String)>,
}

impl ResolvedVariables {
    /// Build a table from arbitrary pairs, rejecting duplicate names
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut seen = HashSet::new();
        let entries = pairs
            .into_iter()
            .map(|(name, value)| {
                let name = name.into();
                if !seen.insert(name.clone()) {
                    return Err(UmcError::DuplicateVariable { name });
                }
                Ok((name, value.into()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
