use contact_directory::error::{DirectoryError, DirectoryResult};
use contact_directory::{Contact, ContactName, ContactStore, PhoneNumber};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Keeps contacts in a sorted map, tracks method calls for verification,
/// and can be told to fail the next call with a chosen error.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactStore {
    contacts: Arc<Mutex<BTreeMap<String, Contact>>>,
    call_counts: Arc<Mutex<BTreeMap<String, usize>>>,
    next_error: Arc<Mutex<Option<DirectoryError>>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact directly, bypassing call tracking.
    pub fn add_contact(&self, name: &str, phone: &str) {
        let contact = Contact::new(
            ContactName::new(name).unwrap(),
            PhoneNumber::new(phone).unwrap(),
        );
        self.contacts
            .lock()
            .unwrap()
            .insert(name.to_string(), contact);
    }

    /// Make the next store call return `err`.
    pub fn fail_next(&self, err: DirectoryError) {
        *self.next_error.lock().unwrap() = Some(err);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn count_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    /// Count the call and hand out the pending failure, if any.
    fn track_call(&self, method: &str) -> DirectoryResult<()> {
        self.count_call(method);

        match self.next_error.lock().unwrap().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ContactStore for MockContactStore {
    fn insert(&mut self, name: &str, phone: &str) -> DirectoryResult<Contact> {
        self.track_call("insert")?;

        let contact = Contact::new(ContactName::new(name)?, PhoneNumber::new(phone)?);
        let mut contacts = self.contacts.lock().unwrap();
        if contacts.contains_key(name) {
            return Err(DirectoryError::DuplicateName(name.to_string()));
        }
        contacts.insert(name.to_string(), contact.clone());
        Ok(contact)
    }

    fn search(&self, name: &str) -> DirectoryResult<Contact> {
        self.track_call("search")?;

        self.contacts
            .lock()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))
    }

    fn list(&self) -> Vec<Contact> {
        // list cannot fail, so a pending failure waits for the next fallible call
        self.count_call("list");
        self.contacts.lock().unwrap().values().cloned().collect()
    }

    fn delete(&mut self, name: &str) -> DirectoryResult<Contact> {
        self.track_call("delete")?;

        self.contacts
            .lock()
            .unwrap()
            .remove(name)
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))
    }
}
