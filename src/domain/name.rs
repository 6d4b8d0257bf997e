//! ContactName value object.

use super::bucket::BucketKey;
use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Longest name the directory accepts by default, in characters.
pub const MAX_NAME_LENGTH: usize = 49;

/// A validated contact name.
///
/// A name is non-empty, starts with an ASCII letter (so it has a bucket),
/// and is no longer than its length limit. Over-long names are rejected,
/// never truncated.
///
/// # Example
///
/// ```
/// use contact_directory::domain::ContactName;
///
/// let name = ContactName::new("Alice").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// assert_eq!(name.bucket().letter(), 'A');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName {
    value: String,
    bucket: BucketKey,
}

impl ContactName {
    /// Create a new ContactName with the default length limit.
    ///
    /// # Errors
    ///
    /// See [`ContactName::with_limit`].
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_limit(name, MAX_NAME_LENGTH)
    }

    /// Create a new ContactName that may be at most `limit` characters long.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyName` for an empty name.
    /// - `ValidationError::InvalidKey` if the first character is not an ASCII letter.
    /// - `ValidationError::NameTooLong` if the name has more than `limit` characters.
    pub fn with_limit(name: impl Into<String>, limit: usize) -> Result<Self, ValidationError> {
        let value = name.into();
        let bucket = BucketKey::for_name(&value)?;

        if value.chars().count() > limit {
            return Err(ValidationError::NameTooLong { name: value, limit });
        }

        Ok(Self { value, bucket })
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The bucket this name is stored in.
    pub fn bucket(&self) -> BucketKey {
        self.bucket
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = ContactName::new("bob").unwrap();
        assert_eq!(name.as_str(), "bob");
        assert_eq!(name.bucket().letter(), 'B');
    }

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(ContactName::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_rejects_non_letter_start() {
        assert!(matches!(
            ContactName::new("42nd"),
            Err(ValidationError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_name_at_limit_is_accepted() {
        let name = "A".repeat(MAX_NAME_LENGTH);
        assert!(ContactName::new(name).is_ok());
    }

    #[test]
    fn test_name_over_limit_is_rejected_not_truncated() {
        let name = "A".repeat(MAX_NAME_LENGTH + 1);
        let err = ContactName::new(name.clone()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NameTooLong {
                name,
                limit: MAX_NAME_LENGTH
            }
        );
    }

    #[test]
    fn test_name_limit_counts_characters() {
        // Five characters, ten bytes.
        assert!(ContactName::with_limit("Aéééé", 5).is_ok());
        assert!(ContactName::with_limit("Aéééé", 4).is_err());
    }

    #[test]
    fn test_name_serialization() {
        let name = ContactName::new("Carol").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Carol\"");

        let back: ContactName = serde_json::from_str("\"Carol\"").unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn test_name_deserialization_invalid_fails() {
        let result: Result<ContactName, _> = serde_json::from_str("\"9lives\"");
        assert!(result.is_err());
    }
}
