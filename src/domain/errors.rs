//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The name does not start with an ASCII letter, so it has no bucket.
    InvalidKey(String),

    /// The name is longer than the configured bound.
    NameTooLong { name: String, limit: usize },

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidKey(name) => {
                write!(f, "Name must start with a letter A-Z: {}", name)
            }
            Self::NameTooLong { name, limit } => {
                write!(f, "Name exceeds {} characters: {}", limit, name)
            }
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
