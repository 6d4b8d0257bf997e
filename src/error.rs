//! Error types for the contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors reported by directory operations.
///
/// None of these are fatal: every failing operation leaves the directory
/// exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Phone is not exactly ten ASCII digits
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// A contact with this name is already stored
    #[error("Contact name already exists: {0}")]
    DuplicateName(String),

    /// No contact with this name is stored
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Name has no bucket (empty, or first character is not an ASCII letter)
    #[error("Invalid name key: {0}")]
    InvalidKey(String),

    /// Name is longer than the directory accepts
    #[error("Name exceeds {limit} characters: {name}")]
    Capacity { name: String, limit: usize },
}

impl From<ValidationError> for DirectoryError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => {
                DirectoryError::InvalidKey("name cannot be empty".to_string())
            }
            ValidationError::InvalidKey(name) => DirectoryError::InvalidKey(name),
            ValidationError::NameTooLong { name, limit } => {
                DirectoryError::Capacity { name, limit }
            }
            ValidationError::InvalidPhone(phone) => DirectoryError::InvalidPhone(phone),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
