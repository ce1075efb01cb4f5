//! Pattern shorthands for dynamic values

use crate::value::Value;
use rulematch::{constructor, equality, Pattern};

/// Match values equal to `value`
pub fn lit(value: impl Into<Value>) -> Pattern<Value> {
    equality(value.into())
}

/// Match a tuple of exactly `children.len()` elements
///
/// Tuples of another length decline rather than raising an arity error, since
/// the extractor itself checks the length.
pub fn tuple(children: Vec<Pattern<Value>>) -> Pattern<Value> {
    let arity = children.len();

    constructor("tuple", children, move |value: &Value| match value {
        Value::Tuple(items) if items.len() == arity => Some(items.clone()),
        _ => None,
    })
}
