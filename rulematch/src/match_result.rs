//! Read-only view of a successful pattern match, handed to guards and actions

use crate::bindings::Bindings;
use crate::error::{MatchError, Result};
use std::ops::Index;

/// Variables bound by the pattern a guard or action is attached to
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<V> {
    bindings: Bindings<V>,
}

impl<V> MatchResult<V> {
    /// Wrap the environment produced by a pattern match
    pub fn new(bindings: Bindings<V>) -> Self {
        Self { bindings }
    }

    /// Look up a pattern variable
    ///
    /// Referencing a name the pattern does not bind is a programmer error and
    /// is reported as [`MatchError::UndefinedVariable`].
    pub fn get(&self, name: &str) -> Result<&V> {
        self.bindings
            .get(name)
            .ok_or_else(|| MatchError::undefined_variable(name, self.bindings.names()))
    }

    /// Look up a pattern variable, returning `None` when it is unbound
    pub fn try_get(&self, name: &str) -> Option<&V> {
        self.bindings.get(name)
    }

    /// Names bound by the match, in binding order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.names()
    }

    /// The underlying binding environment
    pub fn bindings(&self) -> &Bindings<V> {
        &self.bindings
    }

    pub fn into_bindings(self) -> Bindings<V> {
        self.bindings
    }
}

impl<V> Index<&str> for MatchResult<V> {
    type Output = V;

    /// Panics when `name` is not bound; use [`MatchResult::get`] to handle that case
    fn index(&self, name: &str) -> &V {
        match self.bindings.get(name) {
            Some(value) => value,
            None => panic!("undefined pattern variable: {}", name),
        }
    }
}

impl<V> From<Bindings<V>> for MatchResult<V> {
    fn from(bindings: Bindings<V>) -> Self {
        Self::new(bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn result() -> MatchResult<i64> {
        let bindings = Bindings::singleton("x", 1)
            .merge(&Bindings::singleton("xs", 2))
            .unwrap();
        MatchResult::new(bindings)
    }

    #[test]
    fn test_lookup_bound_variable() {
        let result = result();
        assert_eq!(result.get("x"), Ok(&1));
        assert_eq!(result["xs"], 2);
        assert_eq!(result.names().collect::<Vec<_>>(), vec!["x", "xs"]);
    }

    #[test]
    fn test_lookup_unbound_variable_fails() {
        let err = result().get("y").unwrap_err();
        assert_eq!(
            err,
            MatchError::UndefinedVariable {
                name: "y".to_string(),
                bound: "x, xs".to_string(),
            }
        );
        assert_eq!(result().try_get("y"), None);
    }

    #[test]
    fn test_converts_to_and_from_bindings() {
        let bindings = Bindings::singleton("x", 4);
        let result = MatchResult::from(bindings.clone());

        assert_eq!(result.get("x"), Ok(&4));
        assert_eq!(result.bindings(), &bindings);
        assert_eq!(result.into_bindings(), bindings);
    }

    #[test]
    #[should_panic(expected = "undefined pattern variable: y")]
    fn test_index_unbound_variable_panics() {
        let value: i64 = result()["y"];
        assert_eq!(value, 0);
    }
}
