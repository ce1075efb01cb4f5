//! Guarded right-hand sides: a predicate over a match result paired with an
//! action that produces the rule's result.
//!
//! Both closures are fallible. Errors they return are not interpreted by the
//! engine; they propagate straight to the caller of [`Matcher::against`].
//!
//! [`Matcher::against`]: crate::Matcher::against

use crate::error::MatchError;
use crate::match_result::MatchResult;
use std::sync::Arc;

/// Decides whether a guarded right-hand side applies
pub type Predicate<V, E> = Arc<dyn Fn(&MatchResult<V>) -> Result<bool, E> + Send + Sync>;

/// Produces a rule's result from the variables bound by its pattern
pub type Action<V, R, E> = Arc<dyn Fn(&MatchResult<V>) -> Result<R, E> + Send + Sync>;

/// A predicate awaiting its action
pub struct Guard<V, E = MatchError> {
    predicate: Predicate<V, E>,
}

/// Build a guard from a predicate
pub fn guard<V, E, P>(predicate: P) -> Guard<V, E>
where
    P: Fn(&MatchResult<V>) -> Result<bool, E> + Send + Sync + 'static,
{
    Guard {
        predicate: Arc::new(predicate),
    }
}

/// A guard that always holds
pub fn otherwise<V: 'static, E: 'static>() -> Guard<V, E> {
    guard(|_| Ok(true))
}

impl<V, E> Guard<V, E> {
    /// Attach the action to run when this guard holds
    pub fn then<R, A>(self, action: A) -> GuardedRhs<V, R, E>
    where
        A: Fn(&MatchResult<V>) -> Result<R, E> + Send + Sync + 'static,
    {
        GuardedRhs {
            predicate: self.predicate,
            action: Arc::new(action),
        }
    }
}

impl<V, E> Clone for Guard<V, E> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

/// A predicate/action pair attached to a pattern
pub struct GuardedRhs<V, R, E = MatchError> {
    predicate: Predicate<V, E>,
    action: Action<V, R, E>,
}

impl<V, R, E> GuardedRhs<V, R, E> {
    /// Run the action if the predicate holds
    ///
    /// `Ok(None)` means the predicate declined and the next guarded
    /// right-hand side should be tried. Once the predicate holds the outcome of
    /// the action is final, even if it is an error.
    pub fn evaluate(&self, result: &MatchResult<V>) -> Result<Option<R>, E> {
        if (self.predicate)(result)? {
            (self.action)(result).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl<V, R, E> Clone for GuardedRhs<V, R, E> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            action: Arc::clone(&self.action),
        }
    }
}
