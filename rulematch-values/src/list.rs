//! Cons lists built from tagged values
//!
//! A list is either `Nil()` or `Cons(head, tail)`, both ordinary
//! [`Value::Data`] values, so lists are matched with the same constructor
//! patterns as any other data type.

use crate::data::{DataType, Variant};
use crate::value::Value;
use rulematch::Pattern;

pub const NIL_TAG: &str = "Nil";
pub const CONS_TAG: &str = "Cons";

/// The list data type: `Nil/0 | Cons/2`
pub fn list_type() -> DataType {
    DataType::new("List").variant(NIL_TAG, 0).variant(CONS_TAG, 2)
}

/// Pattern matching a non-empty list
pub fn cons(head: Pattern<Value>, tail: Pattern<Value>) -> Pattern<Value> {
    Variant::new(CONS_TAG, 2).pattern(vec![head, tail])
}

/// Pattern matching the empty list
pub fn nil() -> Pattern<Value> {
    Variant::new(NIL_TAG, 0).pattern(vec![])
}

impl Value {
    /// The empty list
    pub fn nil() -> Self {
        Value::data(NIL_TAG, vec![])
    }

    /// Prepend `head` to `tail`
    pub fn cons(head: Value, tail: Value) -> Self {
        Value::data(CONS_TAG, vec![head, tail])
    }

    /// Build a proper list from `items`
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        let items: Vec<Value> = items.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Value::nil(), |tail, head| Value::cons(head, tail))
    }

    /// Flatten a proper list into its elements
    ///
    /// Returns `None` when `self` is not a list or ends in something other
    /// than `Nil()`.
    pub fn list_elements(&self) -> Option<Vec<Value>> {
        let mut elements = Vec::new();
        let mut current = self;

        loop {
            match current {
                Value::Data { tag, fields } if tag == NIL_TAG && fields.is_empty() => {
                    return Some(elements);
                }
                Value::Data { tag, fields } if tag == CONS_TAG && fields.len() == 2 => {
                    elements.push(fields[0].clone());
                    current = &fields[1];
                }
                _ => return None,
            }
        }
    }

    /// Whether this is `Nil()` or a `Cons` cell
    pub fn is_list(&self) -> bool {
        list_type().is_instance(self)
    }
}
