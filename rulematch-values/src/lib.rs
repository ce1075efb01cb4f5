//! Dynamic runtime values for the rulematch engine
//!
//! The engine is generic over its subject type. This crate provides a ready-made
//! dynamically typed [`Value`], tagged data types whose variants supply
//! constructor patterns, and cons lists built on top of them.
//!
//! ```
//! use rulematch::{match_on, variable, wildcard, Rule};
//! use rulematch_values::{cons, lit, nil, Value};
//!
//! let rule: Rule<Value, &str> = nil()
//!     .then(|_| Ok("empty"))
//!     .or_else(cons(lit(1_i64), wildcard()).then(|_| Ok("starts with one")))
//!     .or_else(cons(variable("x"), wildcard()).then(|_| Ok("something else")));
//!
//! let subject = Value::list([Value::integer(1), Value::integer(2)]);
//! assert_eq!(match_on(subject).against(&rule).unwrap(), "starts with one");
//! ```

// Allow clippy lints for development
#![allow(clippy::uninlined_format_args)]

pub mod data;
pub mod error;
pub mod list;
pub mod patterns;
pub mod value;

// Re-export public API
pub use data::{DataType, Variant};
pub use error::ValueError;
pub use list::{cons, list_type, nil, CONS_TAG, NIL_TAG};
pub use patterns::{lit, tuple};
pub use value::Value;
