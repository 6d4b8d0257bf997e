//! Contact Directory - an in-memory contact book keyed by name.
//!
//! Contacts are filed in 26 buckets by the first letter of their name and
//! carry a ten-digit phone number. The directory supports insert, exact
//! lookup, sorted listing and delete, and ships with an interactive menu.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers, bucket keys)
//! - **models**: The stored `Contact` record
//! - **directory**: The bucketed directory, its thread-safe handle and the `ContactStore` trait
//! - **menu**: The numbered interactive menu driving a `ContactStore`
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Operation counters

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod menu;
pub mod metrics;
pub mod models;

pub use config::Config;
pub use directory::{ContactDirectory, ContactStore, SharedDirectory};
pub use domain::{is_valid_phone, BucketKey, ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, DirectoryError, DirectoryResult};
pub use menu::{run_menu, Choice, Menu};
pub use metrics::{Metrics, MetricsSummary};
pub use models::Contact;
