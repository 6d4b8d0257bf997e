//! Bucketed in-memory contact directory.

use crate::domain::{BucketKey, ContactName, PhoneNumber, BUCKET_COUNT, MAX_NAME_LENGTH};
use crate::error::{DirectoryError, DirectoryResult};
use crate::metrics::Metrics;
use crate::models::Contact;
use std::collections::VecDeque;
use tracing::{debug, trace, warn};

/// In-memory contact directory indexed by the first letter of each name.
///
/// Contacts live in 26 buckets, one per letter A-Z. A new contact is
/// prepended to its bucket, so each bucket holds its contacts in reverse
/// insertion order. Names are unique and compared case-sensitively; only
/// the bucket choice ignores case.
///
/// The directory is single-threaded. Wrap it in a
/// [`SharedDirectory`](super::SharedDirectory) to share it between threads.
///
/// # Example
///
/// ```
/// use contact_directory::ContactDirectory;
///
/// let mut directory = ContactDirectory::new();
/// directory.insert("Bob", "5555555555").unwrap();
/// directory.insert("Alice", "1111111111").unwrap();
///
/// let names: Vec<_> = directory.list().iter().map(|c| c.name().to_string()).collect();
/// assert_eq!(names, ["Alice", "Bob"]);
/// ```
#[derive(Debug)]
pub struct ContactDirectory {
    buckets: [VecDeque<Contact>; BUCKET_COUNT],
    len: usize,
    max_name_length: usize,
    metrics: Option<Metrics>,
}

impl Default for ContactDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactDirectory {
    /// Create an empty directory accepting names up to the default length.
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| VecDeque::new()),
            len: 0,
            max_name_length: MAX_NAME_LENGTH,
            metrics: None,
        }
    }

    /// Create an empty directory accepting names up to `limit` characters.
    ///
    /// The limit is clamped to `1..=MAX_NAME_LENGTH`; it is fixed for the
    /// lifetime of the directory.
    pub fn with_max_name_length(limit: usize) -> Self {
        let clamped = limit.clamp(1, MAX_NAME_LENGTH);
        if clamped != limit {
            warn!(requested = limit, clamped, "Name length limit out of range");
        }

        Self {
            max_name_length: clamped,
            ..Self::new()
        }
    }

    /// Attach a metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn max_name_length(&self) -> usize {
        self.max_name_length
    }

    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }

    /// Number of contacts stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of contacts in one bucket.
    pub fn bucket_len(&self, key: BucketKey) -> usize {
        self.buckets[key.index()].len()
    }

    /// Contacts of one bucket, most recently inserted first.
    pub fn bucket(&self, key: BucketKey) -> impl Iterator<Item = &Contact> {
        self.buckets[key.index()].iter()
    }

    /// Look up a contact by exact name.
    ///
    /// # Errors
    ///
    /// - `DirectoryError::InvalidKey` if the name is empty or does not start
    ///   with an ASCII letter.
    /// - `DirectoryError::NotFound` if no contact has exactly this name.
    ///
    /// Both failures count as misses in the attached metrics.
    pub fn search(&self, name: &str) -> DirectoryResult<&Contact> {
        let key = match BucketKey::for_name(name) {
            Ok(key) => key,
            Err(err) => {
                if let Some(metrics) = &self.metrics {
                    metrics.record_search(false);
                }
                return Err(err.into());
            }
        };
        let found = self.buckets[key.index()]
            .iter()
            .find(|contact| contact.name() == name);

        if let Some(metrics) = &self.metrics {
            metrics.record_search(found.is_some());
        }
        trace!(name, bucket = %key, hit = found.is_some(), "Contact lookup");

        found.ok_or_else(|| DirectoryError::NotFound(name.to_string()))
    }

    /// Add a contact.
    ///
    /// Checks run in order and the first failure wins; a failed insert
    /// leaves the directory untouched:
    ///
    /// 1. the phone must be exactly ten ASCII digits (`InvalidPhone`);
    /// 2. the name must start with an ASCII letter (`InvalidKey`) and fit
    ///    the length limit (`Capacity`);
    /// 3. the name must not already be stored (`DuplicateName`).
    pub fn insert(&mut self, name: &str, phone: &str) -> DirectoryResult<&Contact> {
        let contact = match self.prepare_insert(name, phone) {
            Ok(contact) => contact,
            Err(err) => {
                debug!(name, error = %err, "Contact insert rejected");
                if let Some(metrics) = &self.metrics {
                    metrics.record_insert(false);
                }
                return Err(err);
            }
        };

        if let Some(metrics) = &self.metrics {
            metrics.record_insert(true);
        }
        let key = contact.bucket();
        debug!(name, bucket = %key, "Contact inserted");

        self.len += 1;
        let bucket = &mut self.buckets[key.index()];
        bucket.push_front(contact);
        Ok(&bucket[0])
    }

    fn prepare_insert(&self, name: &str, phone: &str) -> DirectoryResult<Contact> {
        let phone = PhoneNumber::new(phone)?;
        let name = ContactName::with_limit(name, self.max_name_length)?;

        let taken = self.buckets[name.bucket().index()]
            .iter()
            .any(|contact| contact.name() == name.as_str());
        if taken {
            return Err(DirectoryError::DuplicateName(name.into_inner()));
        }

        Ok(Contact::new(name, phone))
    }

    /// Snapshot of every contact, sorted ascending by name.
    ///
    /// Names compare byte-wise, so uppercase sorts before lowercase. The
    /// returned vector is owned and does not track later changes.
    pub fn list(&self) -> Vec<Contact> {
        let mut all = Vec::with_capacity(self.len);
        for bucket in &self.buckets {
            all.extend(bucket.iter().cloned());
        }
        all.sort_by(|a, b| a.name().cmp(b.name()));

        if let Some(metrics) = &self.metrics {
            metrics.record_list();
        }
        trace!(count = all.len(), "Contact list snapshot");

        all
    }

    /// Remove the contact with exactly this name and return it.
    ///
    /// # Errors
    ///
    /// - `DirectoryError::InvalidKey` if the name has no bucket.
    /// - `DirectoryError::NotFound` if no contact has exactly this name.
    pub fn delete(&mut self, name: &str) -> DirectoryResult<Contact> {
        let key = BucketKey::for_name(name)?;
        let bucket = &mut self.buckets[key.index()];

        let position = bucket.iter().position(|contact| contact.name() == name);
        let removed = position
            .and_then(|position| bucket.remove(position))
            .ok_or_else(|| {
                debug!(name, "Contact delete missed");
                DirectoryError::NotFound(name.to_string())
            })?;

        self.len -= 1;
        if let Some(metrics) = &self.metrics {
            metrics.record_delete();
        }
        debug!(name, bucket = %key, "Contact deleted");

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(directory: &ContactDirectory) -> Vec<String> {
        directory
            .list()
            .into_iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    #[test]
    fn test_new_directory_is_empty() {
        let directory = ContactDirectory::new();
        assert!(directory.is_empty());
        assert!(directory.list().is_empty());
        assert_eq!(directory.max_name_length(), MAX_NAME_LENGTH);
    }

    #[test]
    fn test_insert_then_search() {
        let mut directory = ContactDirectory::new();
        let inserted = directory.insert("Alice", "1111111111").unwrap();
        assert_eq!(inserted.name(), "Alice");

        let found = directory.search("Alice").unwrap();
        assert_eq!((found.name(), found.phone()), ("Alice", "1111111111"));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let mut directory = ContactDirectory::new();
        directory.insert("alice", "1111111111").unwrap();

        assert_eq!(
            directory.search("Alice"),
            Err(DirectoryError::NotFound("Alice".to_string()))
        );
        // Same bucket, distinct names.
        directory.insert("Alice", "2222222222").unwrap();
        assert_eq!(directory.bucket_len(BucketKey::for_name("a").unwrap()), 2);
    }

    #[test]
    fn test_bucket_holds_reverse_insertion_order() {
        let mut directory = ContactDirectory::new();
        directory.insert("Cat", "1000000000").unwrap();
        directory.insert("Cow", "2000000000").unwrap();
        directory.insert("cub", "3000000000").unwrap();

        let key = BucketKey::for_name("C").unwrap();
        let order: Vec<_> = directory.bucket(key).map(Contact::name).collect();
        assert_eq!(order, ["cub", "Cow", "Cat"]);
    }

    #[test]
    fn test_invalid_phone_checked_before_duplicate() {
        let mut directory = ContactDirectory::new();
        directory.insert("Dan", "1234567890").unwrap();

        assert_eq!(
            directory.insert("Dan", "12345"),
            Err(DirectoryError::InvalidPhone("12345".to_string()))
        );
        assert_eq!(
            directory.insert("Dan", "0987654321"),
            Err(DirectoryError::DuplicateName("Dan".to_string()))
        );
        assert_eq!(directory.search("Dan").unwrap().phone(), "1234567890");
    }

    #[test]
    fn test_insert_rejects_unbucketable_names() {
        let mut directory = ContactDirectory::new();
        assert!(matches!(
            directory.insert("", "1234567890"),
            Err(DirectoryError::InvalidKey(_))
        ));
        assert!(matches!(
            directory.insert("7eleven", "1234567890"),
            Err(DirectoryError::InvalidKey(_))
        ));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_insert_rejects_over_long_name() {
        let mut directory = ContactDirectory::with_max_name_length(4);
        assert_eq!(
            directory.insert("Bobby", "1234567890"),
            Err(DirectoryError::Capacity {
                name: "Bobby".to_string(),
                limit: 4
            })
        );
        assert!(directory.insert("Bobb", "1234567890").is_ok());
    }

    #[test]
    fn test_list_sorts_bytewise() {
        let mut directory = ContactDirectory::new();
        for (name, phone) in [
            ("bob", "1000000000"),
            ("Bob", "2000000000"),
            ("alice", "3000000000"),
            ("Zed", "4000000000"),
            ("Al", "5000000000"),
        ] {
            directory.insert(name, phone).unwrap();
        }

        assert_eq!(names(&directory), ["Al", "Bob", "Zed", "alice", "bob"]);
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let mut directory = ContactDirectory::new();
        directory.insert("Eve", "1234567890").unwrap();
        let snapshot = directory.list();

        directory.delete("Eve").unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(directory.list().is_empty());
    }

    #[test]
    fn test_delete_removes_only_exact_match() {
        let mut directory = ContactDirectory::new();
        directory.insert("Fay", "1111111111").unwrap();
        directory.insert("Finn", "2222222222").unwrap();

        let removed = directory.delete("Fay").unwrap();
        assert_eq!(removed.phone(), "1111111111");
        assert_eq!(names(&directory), ["Finn"]);
        assert_eq!(directory.len(), 1);

        assert_eq!(
            directory.delete("Fay"),
            Err(DirectoryError::NotFound("Fay".to_string()))
        );
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_search_rejects_unbucketable_name() {
        let mut directory = ContactDirectory::new();
        directory.insert("Xena", "1234567890").unwrap();

        assert!(matches!(
            directory.search(""),
            Err(DirectoryError::InvalidKey(_))
        ));
        assert_eq!(
            directory.search("9x"),
            Err(DirectoryError::InvalidKey("9x".to_string()))
        );
        assert_eq!(
            directory.search("_y"),
            Err(DirectoryError::InvalidKey("_y".to_string()))
        );
    }

    #[test]
    fn test_unbucketable_search_counts_as_miss() {
        let metrics = Metrics::new();
        let directory = ContactDirectory::new().with_metrics(metrics.clone());

        let _ = directory.search("9x");
        let _ = directory.search("");

        assert_eq!(metrics.searches_total(), 2);
        assert_eq!(metrics.search_misses_total(), 2);
    }

    #[test]
    fn test_name_limit_is_clamped_to_storage_bound() {
        let mut directory = ContactDirectory::with_max_name_length(0);
        assert_eq!(directory.max_name_length(), 1);
        assert!(directory.insert("A", "1234567890").is_ok());

        let mut directory = ContactDirectory::with_max_name_length(10_000);
        assert_eq!(directory.max_name_length(), MAX_NAME_LENGTH);
        assert_eq!(
            directory.insert(&"A".repeat(200), "1234567890"),
            Err(DirectoryError::Capacity {
                name: "A".repeat(200),
                limit: MAX_NAME_LENGTH
            })
        );
    }

    #[test]
    fn test_name_limit_boundaries() {
        let mut directory = ContactDirectory::with_max_name_length(50);
        assert_eq!(directory.max_name_length(), MAX_NAME_LENGTH);
        assert!(matches!(
            directory.insert(&"B".repeat(50), "1234567890"),
            Err(DirectoryError::Capacity { limit: 49, .. })
        ));

        let mut directory = ContactDirectory::with_max_name_length(49);
        assert_eq!(directory.max_name_length(), 49);
        assert!(directory.insert(&"B".repeat(49), "1234567890").is_ok());
        assert_eq!(
            directory.insert(&"B".repeat(49), "0987654321"),
            Err(DirectoryError::DuplicateName("B".repeat(49)))
        );
    }

    #[test]
    fn test_delete_rejects_unbucketable_name() {
        let mut directory = ContactDirectory::new();
        assert!(matches!(
            directory.delete("@home"),
            Err(DirectoryError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_metrics_are_recorded() {
        let metrics = Metrics::new();
        let mut directory = ContactDirectory::new().with_metrics(metrics.clone());

        directory.insert("Gus", "1234567890").unwrap();
        let _ = directory.insert("Gus", "1234567890");
        let _ = directory.search("Gus");
        let _ = directory.search("Gwen");
        let _ = directory.list();
        directory.delete("Gus").unwrap();

        let summary = metrics.summary();
        assert_eq!(summary.inserts_total, 1);
        assert_eq!(summary.inserts_rejected_total, 1);
        assert_eq!(summary.searches_total, 2);
        assert_eq!(summary.search_misses_total, 1);
        assert_eq!(summary.lists_total, 1);
        assert_eq!(summary.deletes_total, 1);
    }
}
