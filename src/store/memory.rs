use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use crate::store::traits::ContactStore;
use std::sync::Mutex;

/// In-memory contact store.
///
/// The reference [`ContactStore`] implementation: an insertion-ordered list
/// guarded by a mutex, with a monotonically increasing id counter. Contacts
/// added with an unset id (0) get the next counter value; contacts arriving
/// with an explicit id keep it. Locking lives entirely inside this backend,
/// the manager stays oblivious to it.
pub struct MemoryContactStore {
    inner: Mutex<Inner>,
}

struct Inner {
    contacts: Vec<Contact>,
    next_id: u64,
}

impl MemoryContactStore {
    /// Create a new empty store. Assigned ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                contacts: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().contacts.len()
    }

    /// Whether the store holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemoryContactStore {
    fn get_all(&self) -> StoreResult<Vec<Contact>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.contacts.clone())
    }

    fn add(&self, contact: &Contact) -> StoreResult<Contact> {
        let mut inner = self.inner.lock().unwrap();

        let mut stored = contact.clone();
        if stored.id() == 0 {
            stored.set_id(inner.next_id);
            inner.next_id += 1;
        } else {
            if inner.contacts.iter().any(|c| c.id() == stored.id()) {
                return Err(StoreError::AlreadyExists(stored.id()));
            }
            // Keep the counter ahead of explicitly assigned ids.
            if stored.id() >= inner.next_id {
                inner.next_id = stored.id() + 1;
            }
        }

        tracing::debug!(id = stored.id(), "Contact added to memory store");
        inner.contacts.push(stored.clone());
        Ok(stored)
    }

    fn delete(&self, contact: &Contact) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();

        let position = inner
            .contacts
            .iter()
            .position(|c| c.id() == contact.id())
            .ok_or(StoreError::NotFound(contact.id()))?;

        inner.contacts.remove(position);
        tracing::debug!(id = contact.id(), "Contact deleted from memory store");
        Ok(())
    }

    fn update(&self, contact: &Contact) -> StoreResult<Contact> {
        let mut inner = self.inner.lock().unwrap();

        let position = inner
            .contacts
            .iter()
            .position(|c| c.id() == contact.id())
            .ok_or(StoreError::NotFound(contact.id()))?;

        inner.contacts[position] = contact.clone();
        tracing::debug!(id = contact.id(), "Contact updated in memory store");
        Ok(contact.clone())
    }
}
