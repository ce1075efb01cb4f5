//! Binding environments produced by successful pattern matches
//!
//! A [`Bindings`] maps pattern-variable names to the values they were bound to.
//! Environments are never mutated once built: [`Bindings::merge`] returns a new
//! environment, failing when both sides bind the same name to unequal values.
//! That check is what makes non-linear patterns (a variable repeated inside one
//! pattern) work.

use indexmap::IndexMap;
use thiserror::Error;

/// Two environments bound the same variable to unequal values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Conflicting bindings for pattern variable '{name}'")]
pub struct MergeConflict {
    pub name: String,
}

/// Immutable mapping from pattern-variable name to bound value
///
/// Iteration follows insertion order, so the result of a merge is deterministic:
/// the left environment's names come first, followed by names only the right
/// environment binds.
#[derive(Debug, Clone, PartialEq)]
pub struct Bindings<V> {
    entries: IndexMap<String, V>,
}

impl<V> Bindings<V> {
    /// Create an environment with no bindings
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create an environment binding a single name
    pub fn singleton(name: impl Into<String>, value: V) -> Self {
        let mut entries = IndexMap::with_capacity(1);
        entries.insert(name.into(), value);
        Self { entries }
    }

    /// Look up the value bound to `name`
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    /// Check whether `name` is bound
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of bound names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is bound
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bound names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Name/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<V: Clone + PartialEq> Bindings<V> {
    /// Union of two environments
    ///
    /// Names bound on both sides must carry equal values; otherwise the merge
    /// fails with a [`MergeConflict`] naming the first offending variable.
    pub fn merge(&self, other: &Self) -> Result<Self, MergeConflict> {
        let mut entries = self.entries.clone();

        for (name, value) in &other.entries {
            match entries.get(name) {
                Some(existing) if existing != value => {
                    return Err(MergeConflict { name: name.clone() });
                }
                Some(_) => {}
                None => {
                    entries.insert(name.clone(), value.clone());
                }
            }
        }

        Ok(Self { entries })
    }
}

impl<V> Default for Bindings<V> {
    fn default() -> Self {
        Self::empty()
    }
}
