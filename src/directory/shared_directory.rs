//! Thread-safe handle over a contact directory.

use super::ContactDirectory;
use crate::error::DirectoryResult;
use crate::models::Contact;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A contact directory shared between threads.
///
/// Every operation takes one directory-wide lock, so inserts, searches,
/// listings and deletes never interleave. The handle clones cheaply and all
/// clones see the same directory.
///
/// Lookups return owned contacts because no reference may outlive the lock.
#[derive(Debug, Clone, Default)]
pub struct SharedDirectory {
    inner: Arc<Mutex<ContactDirectory>>,
}

impl SharedDirectory {
    pub fn new(directory: ContactDirectory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(directory)),
        }
    }

    // Every directory operation is all-or-nothing, so a panic while the lock
    // was held cannot have left it half-updated.
    fn lock(&self) -> MutexGuard<'_, ContactDirectory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`ContactDirectory::insert`].
    pub fn insert(&self, name: &str, phone: &str) -> DirectoryResult<Contact> {
        self.lock().insert(name, phone).cloned()
    }

    /// See [`ContactDirectory::search`].
    pub fn search(&self, name: &str) -> DirectoryResult<Contact> {
        self.lock().search(name).cloned()
    }

    /// See [`ContactDirectory::list`].
    pub fn list(&self) -> Vec<Contact> {
        self.lock().list()
    }

    /// See [`ContactDirectory::delete`].
    pub fn delete(&self, name: &str) -> DirectoryResult<Contact> {
        self.lock().delete(name)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Run several operations under a single lock acquisition.
    pub fn with_lock<T>(&self, f: impl FnOnce(&mut ContactDirectory) -> T) -> T {
        f(&mut self.lock())
    }
}

impl From<ContactDirectory> for SharedDirectory {
    fn from(directory: ContactDirectory) -> Self {
        Self::new(directory)
    }
}
