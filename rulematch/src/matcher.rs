//! Entry point: apply a rule to a subject

use crate::error::MatchError;
use crate::rule::Rule;
use tracing::debug;

/// Holds a subject until a rule is applied to it
#[derive(Debug, Clone, PartialEq)]
pub struct Matcher<V> {
    subject: V,
}

/// Start matching `subject`
pub fn match_on<V>(subject: V) -> Matcher<V> {
    Matcher::new(subject)
}

impl<V> Matcher<V> {
    pub fn new(subject: V) -> Self {
        Self { subject }
    }

    /// The value being matched
    pub fn subject(&self) -> &V {
        &self.subject
    }

    pub fn into_subject(self) -> V {
        self.subject
    }
}

impl<V: Clone + PartialEq> Matcher<V> {
    /// Apply `rule`, failing with [`MatchError::NoMatch`] when every alternative declines
    pub fn against<R, E>(&self, rule: &Rule<V, R, E>) -> Result<R, E>
    where
        E: From<MatchError>,
    {
        match rule.match_subject(&self.subject)? {
            Some(result) => Ok(result),
            None => {
                let alternatives = rule.alternatives();
                debug!(alternatives, "no rule alternative matched subject");
                Err(MatchError::no_match(alternatives).into())
            }
        }
    }

    /// Apply `rule`, returning `Ok(None)` when every alternative declines
    pub fn try_against<R, E>(&self, rule: &Rule<V, R, E>) -> Result<Option<R>, E>
    where
        E: From<MatchError>,
    {
        rule.match_subject(&self.subject)
    }
}
