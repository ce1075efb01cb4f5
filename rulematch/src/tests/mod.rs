//! Engine tests
//!
//! `support` provides a small cons-list term type with constructor patterns so
//! the engine can be exercised without the dynamic value crate.

pub mod support;
