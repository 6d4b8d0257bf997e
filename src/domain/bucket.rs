//! BucketKey value object.

use super::errors::ValidationError;
use std::fmt;

/// Number of buckets in the directory, one per letter A-Z.
pub const BUCKET_COUNT: usize = 26;

/// Index of the bucket a name belongs to.
///
/// Always in `0..BUCKET_COUNT`. The key is the uppercased first character of
/// the name, so `"alice"` and `"Alice"` share bucket `A`.
///
/// # Example
///
/// ```
/// use contact_directory::domain::BucketKey;
///
/// let key = BucketKey::for_name("bob").unwrap();
/// assert_eq!(key.index(), 1);
/// assert_eq!(key.letter(), 'B');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketKey(u8);

impl BucketKey {
    /// Derive the bucket key from the first character of `name`.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyName` if `name` is empty.
    /// - `ValidationError::InvalidKey` if the first character is not an
    ///   ASCII letter (digits, symbols and non-ASCII letters have no bucket).
    pub fn for_name(name: &str) -> Result<Self, ValidationError> {
        let first = name.chars().next().ok_or(ValidationError::EmptyName)?;

        if !first.is_ascii_alphabetic() {
            return Err(ValidationError::InvalidKey(name.to_string()));
        }

        Ok(Self(first.to_ascii_uppercase() as u8 - b'A'))
    }

    /// Build a key from a raw index, if it is in range.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < BUCKET_COUNT).then(|| Self(index as u8))
    }

    /// Bucket index in `0..BUCKET_COUNT`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The uppercase letter this bucket holds.
    pub fn letter(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
