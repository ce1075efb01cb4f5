//! Structural patterns and the matching algorithm
//!
//! Supported pattern kinds:
//! - Constructor patterns, which deconstruct a subject through an extractor
//!   and match each extracted value against a sub-pattern
//! - Variables, which bind the whole subject
//! - The wildcard, which matches anything and binds nothing
//! - Aliases, which bind the whole subject and also require an inner match
//! - Equality patterns, which match subjects equal to a fixed value
//!
//! Matching returns `Ok(Some(bindings))` on success and `Ok(None)` when the
//! pattern declines. Only programmer errors (an extractor whose output does not
//! fit its constructor) are reported through `Err`.

use crate::bindings::Bindings;
use crate::error::{MatchError, Result};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Deconstructs a subject into its ordered components, or declines with `None`
/// when the subject does not carry the constructor's tag
pub type Extractor<V> = Arc<dyn Fn(&V) -> Option<Vec<V>> + Send + Sync>;

/// A structural pattern over subjects of type `V`
#[derive(Clone)]
pub enum Pattern<V> {
    Constructor {
        name: String,
        children: Vec<Pattern<V>>,
        extractor: Extractor<V>,
    },
    Variable(String),
    Wildcard,
    Alias {
        name: String,
        inner: Box<Pattern<V>>,
    },
    Equality(V),
}

/// Build a constructor pattern
///
/// Whenever `extractor` accepts a subject it must return exactly
/// `children.len()` values; anything else is reported as
/// [`MatchError::ArityMismatch`] at match time.
pub fn constructor<V, F>(
    name: impl Into<String>,
    children: Vec<Pattern<V>>,
    extractor: F,
) -> Pattern<V>
where
    F: Fn(&V) -> Option<Vec<V>> + Send + Sync + 'static,
{
    Pattern::Constructor {
        name: name.into(),
        children,
        extractor: Arc::new(extractor),
    }
}

/// Build a pattern matching subjects equal to `value`
pub fn equality<V>(value: V) -> Pattern<V> {
    Pattern::Equality(value)
}

/// Build a pattern binding the whole subject to `name`
pub fn variable<V>(name: impl Into<String>) -> Pattern<V> {
    Pattern::Variable(name.into())
}

/// Build a pattern matching anything without binding
pub fn wildcard<V>() -> Pattern<V> {
    Pattern::Wildcard
}

/// Bind the whole subject to `name` while also matching it against `pattern`
pub fn alias<V>(name: impl Into<String>, pattern: Pattern<V>) -> Pattern<V> {
    Pattern::Alias {
        name: name.into(),
        inner: Box::new(pattern),
    }
}

impl<V> Pattern<V> {
    /// Alias this pattern under `name`
    pub fn alias_as(self, name: impl Into<String>) -> Self {
        alias(name, self)
    }

    /// Distinct variable names bound by this pattern, in first-occurrence order
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Pattern::Variable(name) => push_unique(names, name),
            Pattern::Alias { name, inner } => {
                push_unique(names, name);
                inner.collect_variables(names);
            }
            Pattern::Constructor { children, .. } => {
                for child in children {
                    child.collect_variables(names);
                }
            }
            Pattern::Wildcard | Pattern::Equality(_) => {}
        }
    }
}

fn push_unique<'a>(names: &mut Vec<&'a str>, name: &'a str) {
    if !names.contains(&name) {
        names.push(name);
    }
}

impl<V: Clone + PartialEq> Pattern<V> {
    /// Match `subject` against this pattern
    pub fn match_subject(&self, subject: &V) -> Result<Option<Bindings<V>>> {
        match self {
            Pattern::Constructor {
                name,
                children,
                extractor,
            } => Self::match_constructor(name, children, extractor(subject)),

            Pattern::Variable(name) => Ok(Some(Bindings::singleton(name.clone(), subject.clone()))),

            Pattern::Wildcard => Ok(Some(Bindings::empty())),

            Pattern::Alias { name, inner } => {
                let own = Bindings::singleton(name.clone(), subject.clone());
                let Some(inner_bindings) = inner.match_subject(subject)? else {
                    return Ok(None);
                };

                match own.merge(&inner_bindings) {
                    Ok(bindings) => Ok(Some(bindings)),
                    Err(conflict) => {
                        trace!(
                            alias = %name,
                            variable = %conflict.name,
                            "alias binding conflicts with inner pattern"
                        );
                        Ok(None)
                    }
                }
            }

            // A zero-arity constructor whose extractor accepts only equal subjects
            Pattern::Equality(value) => {
                let extracted = (subject == value).then(Vec::new);
                Self::match_constructor("==", &[], extracted)
            }
        }
    }

    /// Match already-extracted components against `children`, left to right
    fn match_constructor(
        name: &str,
        children: &[Pattern<V>],
        extracted: Option<Vec<V>>,
    ) -> Result<Option<Bindings<V>>> {
        let Some(values) = extracted else {
            trace!(constructor = %name, "extractor declined subject");
            return Ok(None);
        };

        if values.len() != children.len() {
            return Err(MatchError::arity_mismatch(name, children.len(), values.len()));
        }

        let mut bindings = Bindings::empty();

        for (child, value) in children.iter().zip(&values) {
            let Some(child_bindings) = child.match_subject(value)? else {
                return Ok(None);
            };

            bindings = match bindings.merge(&child_bindings) {
                Ok(merged) => merged,
                Err(conflict) => {
                    trace!(
                        constructor = %name,
                        variable = %conflict.name,
                        "non-linear pattern bound unequal values"
                    );
                    return Ok(None);
                }
            };
        }

        Ok(Some(bindings))
    }
}

impl<V: fmt::Debug> fmt::Debug for Pattern<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Constructor { name, children, .. } => f
                .debug_struct("Constructor")
                .field("name", name)
                .field("children", children)
                .finish_non_exhaustive(),
            Pattern::Variable(name) => f.debug_tuple("Variable").field(name).finish(),
            Pattern::Wildcard => f.write_str("Wildcard"),
            Pattern::Alias { name, inner } => f
                .debug_struct("Alias")
                .field("name", name)
                .field("inner", inner)
                .finish(),
            Pattern::Equality(value) => f.debug_tuple("Equality").field(value).finish(),
        }
    }
}

impl<V: fmt::Display> fmt::Display for Pattern<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Constructor { name, children, .. } => {
                write!(f, "{}(", name)?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
            Pattern::Variable(name) => write!(f, "{}", name),
            Pattern::Wildcard => write!(f, "_"),
            Pattern::Alias { name, inner } => write!(f, "{} @ {}", name, inner),
            Pattern::Equality(value) => write!(f, "== {}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::{cons, int, list, nil, Term};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_variable_pattern_binds_subject() {
        let pattern = variable("x");
        let bindings = pattern.match_subject(&int(42)).unwrap().unwrap();

        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.get("x"), Some(&int(42)));
    }

    #[test]
    fn test_wildcard_binds_nothing() {
        let bindings = wildcard().match_subject(&list(&[1, 2])).unwrap().unwrap();
        assert!(bindings.is_empty());
    }

    #[test]
    fn test_equality_pattern() {
        let pattern = equality(int(1));

        let bindings = pattern.match_subject(&int(1)).unwrap().unwrap();
        assert!(bindings.is_empty());
        assert!(pattern.match_subject(&int(2)).unwrap().is_none());
    }

    #[test]
    fn test_variables_in_first_occurrence_order() {
        let pattern = alias(
            "xs",
            cons(variable("x"), cons(variable("y"), cons(variable("x"), nil()))),
        );
        assert_eq!(pattern.variables(), vec!["xs", "x", "y"]);
    }

    #[test]
    fn test_display() {
        let pattern: Pattern<Term> =
            alias("xs", cons(wildcard(), cons(equality(int(1)), variable("rest"))));
        assert_eq!(pattern.to_string(), "xs @ cons(_, cons(== 1, rest))");
    }
}
