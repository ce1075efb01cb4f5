//! Error types for the rulematch engine.
//!
//! A pattern or rule alternative that simply does not apply is *not* an error:
//! it is reported as `Ok(None)` and the next alternative is tried. The variants
//! here are the signals that reach the caller of [`Matcher::against`].
//!
//! [`Matcher::against`]: crate::Matcher::against

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while applying rules to a subject
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("No rule matched the subject ({alternatives} alternatives tried)")]
    #[diagnostic(
        code(rulematch::no_match),
        help("Add a catch-all alternative such as `wildcard().then(..)` to handle every subject")
    )]
    NoMatch { alternatives: usize },

    #[error("Arity mismatch: constructor {constructor} has {expected} sub-patterns, but its extractor produced {found} values")]
    #[diagnostic(
        code(rulematch::arity_mismatch),
        help("The extractor of a constructor pattern must return exactly one value per sub-pattern")
    )]
    ArityMismatch {
        constructor: String,
        expected: usize,
        found: usize,
    },

    #[error("Undefined pattern variable: {name}")]
    #[diagnostic(
        code(rulematch::undefined_variable),
        help("The pattern this guard or action is attached to binds: [{bound}]")
    )]
    UndefinedVariable { name: String, bound: String },

    #[error("{message}")]
    #[diagnostic(code(rulematch::action_failed))]
    Action { message: String },
}

impl MatchError {
    /// Create a match-failure error
    pub fn no_match(alternatives: usize) -> Self {
        Self::NoMatch { alternatives }
    }

    /// Create an arity mismatch error for a constructor pattern
    pub fn arity_mismatch(constructor: &str, expected: usize, found: usize) -> Self {
        Self::ArityMismatch {
            constructor: constructor.to_string(),
            expected,
            found,
        }
    }

    /// Create an undefined variable error, listing the names that are bound
    pub fn undefined_variable<'a>(name: &str, bound: impl IntoIterator<Item = &'a str>) -> Self {
        Self::UndefinedVariable {
            name: name.to_string(),
            bound: bound.into_iter().collect::<Vec<_>>().join(", "),
        }
    }

    /// Create a failure for use inside user guards and actions
    pub fn action(message: impl Into<String>) -> Self {
        Self::Action {
            message: message.into(),
        }
    }

    /// Whether this is the exhaustion signal rather than a programmer error
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. })
    }
}

/// Type alias for engine results
pub type Result<T> = std::result::Result<T, MatchError>;
