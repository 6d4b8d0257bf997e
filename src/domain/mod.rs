//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact names, phone numbers
//! and bucket keys. These value objects validate at construction time so an
//! invalid name or phone can never reach the directory.

pub mod bucket;
pub mod errors;
pub mod name;
pub mod phone;

pub use bucket::{BucketKey, BUCKET_COUNT};
pub use errors::ValidationError;
pub use name::{ContactName, MAX_NAME_LENGTH};
pub use phone::{is_valid_phone, PhoneNumber, PHONE_LENGTH};
