//! Tagged data types
//!
//! A [`DataType`] declares a closed set of variants, each with a tag and a
//! field count. Variants build checked [`Value::Data`] values and supply the
//! extractor for constructor patterns over them.

use crate::error::{Result, ValueError};
use crate::value::Value;
use indexmap::IndexMap;
use rulematch::{constructor, Pattern};

/// A single variant of a data type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    tag: String,
    arity: usize,
}

impl Variant {
    pub fn new(tag: impl Into<String>, arity: usize) -> Self {
        Self {
            tag: tag.into(),
            arity,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Build a value of this variant, checking the field count
    pub fn construct(&self, fields: Vec<Value>) -> Result<Value> {
        if fields.len() != self.arity {
            return Err(ValueError::wrong_field_count(&self.tag, self.arity, fields.len()));
        }

        Ok(Value::Data {
            tag: self.tag.clone(),
            fields,
        })
    }

    /// Whether `value` carries this variant's tag
    pub fn is_instance(&self, value: &Value) -> bool {
        value.tag() == Some(self.tag.as_str())
    }

    /// Constructor pattern deconstructing values of this variant
    ///
    /// The extractor declines values with any other tag and returns the fields
    /// of matching ones, which are then matched against `children` in order.
    pub fn pattern(&self, children: Vec<Pattern<Value>>) -> Pattern<Value> {
        let tag = self.tag.clone();

        constructor(self.tag.to_lowercase(), children, move |value: &Value| match value {
            Value::Data { tag: found, fields } if *found == tag => Some(fields.clone()),
            _ => None,
        })
    }
}

/// A named, closed set of variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataType {
    name: String,
    variants: IndexMap<String, Variant>,
}

impl DataType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: IndexMap::new(),
        }
    }

    /// Declare a variant; redeclaring a tag replaces its arity
    pub fn variant(mut self, tag: impl Into<String>, arity: usize) -> Self {
        let variant = Variant::new(tag, arity);
        self.variants.insert(variant.tag.clone(), variant);
        self
    }

    /// The type's name, as reported in construction errors
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a declared variant by tag
    pub fn constructor(&self, tag: &str) -> Result<&Variant> {
        self.variants
            .get(tag)
            .ok_or_else(|| ValueError::unknown_variant(&self.name, tag))
    }

    /// Declared variants in declaration order
    pub fn variants(&self) -> impl Iterator<Item = &Variant> {
        self.variants.values()
    }

    /// Whether `value` is a well-formed value of one of this type's variants
    pub fn is_instance(&self, value: &Value) -> bool {
        match value {
            Value::Data { tag, fields } => self
                .variants
                .get(tag)
                .is_some_and(|variant| variant.arity == fields.len()),
            _ => false,
        }
    }
}
