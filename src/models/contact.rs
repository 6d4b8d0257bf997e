//! Contact model representing one directory entry.

use crate::domain::{BucketKey, ContactName, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact stored in the directory.
///
/// Both fields are validated value objects, so a `Contact` that exists is
/// always storable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique name, also the lookup key
    name: ContactName,

    /// Ten-digit phone number
    phone: PhoneNumber,
}

impl Contact {
    pub fn new(name: ContactName, phone: PhoneNumber) -> Self {
        Self { name, phone }
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The contact's phone number.
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    /// Bucket the contact is filed under.
    pub fn bucket(&self) -> BucketKey {
        self.name.bucket()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.phone)
    }
}
