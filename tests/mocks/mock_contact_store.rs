use addressbook::error::{StoreError, StoreResult};
use addressbook::models::Contact;
use addressbook::store::ContactStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Provides an in-memory [`ContactStore`] that can be configured with test
/// data, tracks method calls for verification, and records the exact
/// contact passed to each mutation so delegation can be asserted.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactStore {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    last_arg: Arc<Mutex<HashMap<String, Contact>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the mock with contacts, in order.
    pub fn seed(&self, contacts: Vec<Contact>) {
        let mut stored = self.contacts.lock().unwrap();
        stored.extend(contacts);
    }

    /// Make every subsequent operation fail with the given message.
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    /// Get the number of times a method was called.
    pub fn call_count(&self, method: &str) -> usize {
        *self.call_counts.lock().unwrap().get(method).unwrap_or(&0)
    }

    /// Get the contact last passed to a mutation method.
    pub fn last_arg(&self, method: &str) -> Option<Contact> {
        self.last_arg.lock().unwrap().get(method).cloned()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn record_arg(&self, method: &str, contact: &Contact) {
        self.last_arg
            .lock()
            .unwrap()
            .insert(method.to_string(), contact.clone());
    }

    fn check_failure(&self) -> StoreResult<()> {
        match self.fail_with.lock().unwrap().as_ref() {
            Some(message) => Err(StoreError::Other(message.clone())),
            None => Ok(()),
        }
    }
}

impl ContactStore for MockContactStore {
    fn get_all(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("get_all");
        self.check_failure()?;

        Ok(self.contacts.lock().unwrap().clone())
    }

    fn add(&self, contact: &Contact) -> StoreResult<Contact> {
        self.track_call("add");
        self.record_arg("add", contact);
        self.check_failure()?;

        self.contacts.lock().unwrap().push(contact.clone());
        Ok(contact.clone())
    }

    fn delete(&self, contact: &Contact) -> StoreResult<()> {
        self.track_call("delete");
        self.record_arg("delete", contact);
        self.check_failure()?;

        let mut contacts = self.contacts.lock().unwrap();
        let position = contacts
            .iter()
            .position(|c| c.id() == contact.id())
            .ok_or(StoreError::NotFound(contact.id()))?;
        contacts.remove(position);
        Ok(())
    }

    fn update(&self, contact: &Contact) -> StoreResult<Contact> {
        self.track_call("update");
        self.record_arg("update", contact);
        self.check_failure()?;

        let mut contacts = self.contacts.lock().unwrap();
        let position = contacts
            .iter()
            .position(|c| c.id() == contact.id())
            .ok_or(StoreError::NotFound(contact.id()))?;
        contacts[position] = contact.clone();
        Ok(contact.clone())
    }
}
