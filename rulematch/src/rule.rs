//! Rules: patterns with guarded right-hand sides, composed by ordered alternation
//!
//! A base rule matches its pattern and then tries its guarded right-hand sides
//! in declaration order; the first whose guard holds produces the result. A
//! disjunction tries its left rule before its right rule. Composition always
//! allocates new nodes, so a rule can be extended without disturbing the rules
//! it was built from.

use crate::error::MatchError;
use crate::guard::{otherwise, GuardedRhs};
use crate::match_result::MatchResult;
use crate::pattern::Pattern;
use std::sync::Arc;
use tracing::trace;

/// A matching rule producing results of type `R`
pub enum Rule<V, R, E = MatchError> {
    Base {
        pattern: Arc<Pattern<V>>,
        arms: Vec<GuardedRhs<V, R, E>>,
    },
    Disjunction {
        left: Arc<Rule<V, R, E>>,
        right: Arc<Rule<V, R, E>>,
    },
}

impl<V: 'static> Pattern<V> {
    /// Run `action` whenever this pattern matches
    pub fn then<R, E, A>(self, action: A) -> Rule<V, R, E>
    where
        E: 'static,
        A: Fn(&MatchResult<V>) -> Result<R, E> + Send + Sync + 'static,
    {
        self.when(otherwise().then(action))
    }

    /// Attach a single guarded right-hand side to this pattern
    pub fn when<R, E>(self, rhs: GuardedRhs<V, R, E>) -> Rule<V, R, E> {
        Rule::base(self, vec![rhs])
    }
}

impl<V, R, E> Rule<V, R, E> {
    /// Build a base rule from a pattern and its guarded right-hand sides
    pub fn base(pattern: Pattern<V>, arms: Vec<GuardedRhs<V, R, E>>) -> Self {
        Rule::Base {
            pattern: Arc::new(pattern),
            arms,
        }
    }

    /// Try this rule first, then `other`
    pub fn or_else(self, other: Rule<V, R, E>) -> Self {
        Rule::Disjunction {
            left: Arc::new(self),
            right: Arc::new(other),
        }
    }

    /// Append a guarded right-hand side
    ///
    /// On a base rule the new arm is tried after the existing ones. On a
    /// disjunction it is appended to the right-most base rule, the alternative
    /// declared last.
    pub fn with_guard(&self, rhs: GuardedRhs<V, R, E>) -> Self {
        let mut lefts = Vec::new();
        let mut rule = self;

        let mut extended = loop {
            match rule {
                Rule::Base { pattern, arms } => {
                    let mut arms = arms.clone();
                    arms.push(rhs);
                    break Rule::Base {
                        pattern: Arc::clone(pattern),
                        arms,
                    };
                }
                Rule::Disjunction { left, right } => {
                    lefts.push(left);
                    rule = right.as_ref();
                }
            }
        };

        while let Some(left) = lefts.pop() {
            extended = Rule::Disjunction {
                left: Arc::clone(left),
                right: Arc::new(extended),
            };
        }

        extended
    }

    /// Number of base rules reachable from this rule
    pub fn alternatives(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];

        while let Some(rule) = pending.pop() {
            match rule {
                Rule::Base { .. } => count += 1,
                Rule::Disjunction { left, right } => {
                    pending.push(right.as_ref());
                    pending.push(left.as_ref());
                }
            }
        }

        count
    }
}

impl<V, R, E> Rule<V, R, E>
where
    V: Clone + PartialEq,
    E: From<MatchError>,
{
    /// Apply this rule to `subject`
    ///
    /// Returns `Ok(None)` when every alternative declines. Alternatives are
    /// visited left to right however the disjunctions are nested, using an
    /// explicit worklist so long chains do not grow the call stack.
    pub fn match_subject(&self, subject: &V) -> Result<Option<R>, E> {
        let mut pending = vec![self];

        while let Some(rule) = pending.pop() {
            match rule {
                Rule::Base { pattern, arms } => {
                    if let Some(result) = Self::match_base(pattern, arms, subject)? {
                        return Ok(Some(result));
                    }
                }
                Rule::Disjunction { left, right } => {
                    pending.push(right.as_ref());
                    pending.push(left.as_ref());
                }
            }
        }

        Ok(None)
    }

    fn match_base(
        pattern: &Pattern<V>,
        arms: &[GuardedRhs<V, R, E>],
        subject: &V,
    ) -> Result<Option<R>, E> {
        let Some(bindings) = pattern.match_subject(subject)? else {
            return Ok(None);
        };

        let result = MatchResult::new(bindings);

        for (index, arm) in arms.iter().enumerate() {
            if let Some(value) = arm.evaluate(&result)? {
                trace!(arm = index, "guard satisfied");
                return Ok(Some(value));
            }
            trace!(arm = index, "guard declined");
        }

        trace!(arms = arms.len(), "pattern matched but no guard was satisfied");
        Ok(None)
    }
}

impl<V, R, E> Clone for Rule<V, R, E> {
    fn clone(&self) -> Self {
        match self {
            Rule::Base { pattern, arms } => Rule::Base {
                pattern: Arc::clone(pattern),
                arms: arms.clone(),
            },
            Rule::Disjunction { left, right } => Rule::Disjunction {
                left: Arc::clone(left),
                right: Arc::clone(right),
            },
        }
    }
}

impl<V, R, E> Drop for Rule<V, R, E> {
    // Unlinks nested disjunctions one at a time so dropping a long chain
    // does not recurse once per alternative.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_disjunctions(self, &mut pending);

        while let Some(child) = pending.pop() {
            if let Some(mut rule) = Arc::into_inner(child) {
                detach_disjunctions(&mut rule, &mut pending);
            }
        }
    }
}

/// Move the disjunction children of `rule` onto `pending`, leaving empty leaves behind
fn detach_disjunctions<V, R, E>(
    rule: &mut Rule<V, R, E>,
    pending: &mut Vec<Arc<Rule<V, R, E>>>,
) {
    let Rule::Disjunction { left, right } = rule else {
        return;
    };

    for child in [left, right] {
        if matches!(**child, Rule::Disjunction { .. }) {
            let leaf = Rule::Base {
                pattern: Arc::new(Pattern::Wildcard),
                arms: Vec::new(),
            };
            pending.push(std::mem::replace(child, Arc::new(leaf)));
        }
    }
}
