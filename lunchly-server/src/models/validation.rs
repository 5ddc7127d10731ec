//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Numeric field below its minimum
    TooSmall {
        field: &'static str,
        min: i64,
        value: i64,
    },

    /// Input that should be a whole number isn't one
    NotANumber { field: &'static str, value: String },

    /// Input that should be a date/time doesn't parse as one
    InvalidDate { field: &'static str, value: String },

    /// Write-once field assigned a second time
    AlreadySet { field: &'static str },

    /// Required field never assigned
    Missing { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooSmall { field, min, value } => {
                write!(f, "{} must be at least {} (got {})", field, min, value)
            }
            Self::NotANumber { field, value } => {
                write!(f, "{} must be a whole number, got '{}'", field, value)
            }
            Self::InvalidDate { field, value } => {
                write!(f, "{} is not a valid date: '{}'", field, value)
            }
            Self::AlreadySet { field } => {
                write!(f, "{} is already set and cannot be changed", field)
            }
            Self::Missing { field } => write!(f, "{} is required", field),
        }
    }
}

impl std::error::Error for ValidationError {}
