use super::{ContactDirectory, SharedDirectory};
use crate::error::DirectoryResult;
use crate::models::Contact;

/// Store of contacts keyed by unique name.
///
/// The interactive menu drives any implementation through this trait, so a
/// plain directory, a shared one, or a test double are interchangeable.
pub trait ContactStore {
    /// Add a contact and return a copy of what was stored.
    fn insert(&mut self, name: &str, phone: &str) -> DirectoryResult<Contact>;

    /// Retrieve a contact by exact name.
    fn search(&self, name: &str) -> DirectoryResult<Contact>;

    /// All contacts sorted by name.
    fn list(&self) -> Vec<Contact>;

    /// Remove a contact by exact name and return it.
    fn delete(&mut self, name: &str) -> DirectoryResult<Contact>;
}

impl ContactStore for ContactDirectory {
    fn insert(&mut self, name: &str, phone: &str) -> DirectoryResult<Contact> {
        ContactDirectory::insert(self, name, phone).cloned()
    }

    fn search(&self, name: &str) -> DirectoryResult<Contact> {
        ContactDirectory::search(self, name).cloned()
    }

    fn list(&self) -> Vec<Contact> {
        ContactDirectory::list(self)
    }

    fn delete(&mut self, name: &str) -> DirectoryResult<Contact> {
        ContactDirectory::delete(self, name)
    }
}

impl ContactStore for SharedDirectory {
    fn insert(&mut self, name: &str, phone: &str) -> DirectoryResult<Contact> {
        SharedDirectory::insert(self, name, phone)
    }

    fn search(&self, name: &str) -> DirectoryResult<Contact> {
        SharedDirectory::search(self, name)
    }

    fn list(&self) -> Vec<Contact> {
        SharedDirectory::list(self)
    }

    fn delete(&mut self, name: &str) -> DirectoryResult<Contact> {
        SharedDirectory::delete(self, name)
    }
}
