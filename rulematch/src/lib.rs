//! rulematch - runtime pattern matching with guarded rules
//!
//! Given a subject value and a rule built from structural patterns, the engine
//! finds the first alternative whose pattern matches and whose guard holds, binds
//! the pattern variables and runs the associated action.
//!
//! ## Architecture
//!
//! - **Bindings**: immutable variable environments with conflict-detecting merge,
//!   which is what makes non-linear patterns (`cons(x, cons(x, nil()))`) work
//! - **Patterns**: constructor, variable, wildcard, alias and equality patterns
//! - **Guarded right-hand sides**: predicate/action pairs over a [`MatchResult`]
//! - **Rules**: base rules and left-biased disjunctions of rules
//! - **Matcher**: applies a rule to a subject and signals exhaustion
//!
//! ## Example
//!
//! ```
//! use rulematch::{equality, match_on, variable, wildcard, MatchResult, Rule};
//!
//! let rule: Rule<i64, String> = equality(0)
//!     .then(|_| Ok("zero".to_string()))
//!     .or_else(variable("n").then(|m: &MatchResult<i64>| Ok(format!("n = {}", m.get("n")?))))
//!     .or_else(wildcard().then(|_| Ok("unreachable".to_string())));
//!
//! assert_eq!(match_on(0).against(&rule).unwrap(), "zero");
//! assert_eq!(match_on(7).against(&rule).unwrap(), "n = 7");
//! ```

// Allow clippy lints for development
#![allow(clippy::uninlined_format_args)]

pub mod bindings;
pub mod error;
pub mod guard;
pub mod match_result;
pub mod matcher;
pub mod pattern;
pub mod rule;

#[cfg(test)]
#[path = "tests/mod.rs"]
pub mod tests;

// Re-export public API
pub use bindings::{Bindings, MergeConflict};
pub use error::{MatchError, Result};
pub use guard::{guard, otherwise, Action, Guard, GuardedRhs, Predicate};
pub use match_result::MatchResult;
pub use matcher::{match_on, Matcher};
pub use pattern::{alias, constructor, equality, variable, wildcard, Extractor, Pattern};
pub use rule::Rule;
