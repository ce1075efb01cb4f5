//! Error types for building runtime values.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while constructing tagged values
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Unknown variant: {data_type} has no variant named {tag}")]
    #[diagnostic(
        code(rulematch_values::unknown_variant),
        help("Declare the variant with `DataType::variant` before using it")
    )]
    UnknownVariant { data_type: String, tag: String },

    #[error("Wrong field count: {tag} expects {expected} fields, got {found}")]
    #[diagnostic(
        code(rulematch_values::wrong_field_count),
        help("Check the variant declaration for the correct number of fields")
    )]
    WrongFieldCount {
        tag: String,
        expected: usize,
        found: usize,
    },
}

impl ValueError {
    /// Create an unknown variant error
    pub fn unknown_variant(data_type: &str, tag: &str) -> Self {
        Self::UnknownVariant {
            data_type: data_type.to_string(),
            tag: tag.to_string(),
        }
    }

    /// Create a wrong field count error
    pub fn wrong_field_count(tag: &str, expected: usize, found: usize) -> Self {
        Self::WrongFieldCount {
            tag: tag.to_string(),
            expected,
            found,
        }
    }
}

/// Type alias for value construction results
pub type Result<T> = std::result::Result<T, ValueError>;
