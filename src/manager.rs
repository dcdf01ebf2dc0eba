//! Contact manager façade.
//!
//! The operation surface clients use to query and mutate contacts. Every
//! mutation is a direct delegation to the injected [`ContactStore`]; search
//! fetches the full set and filters in memory. Nothing is cached here.

use crate::error::StoreResult;
use crate::models::Contact;
use crate::store::ContactStore;
use std::sync::Arc;

/// Façade over a pluggable contact store.
pub struct ContactManager {
    store: Arc<dyn ContactStore>,
}

impl ContactManager {
    /// Create a new manager bound to the given store.
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Retrieve all contacts, in the store's order.
    pub fn all_contacts(&self) -> StoreResult<Vec<Contact>> {
        self.store.get_all()
    }

    /// Add a contact to the store.
    ///
    /// Returns the stored copy, whose id the store has assigned or
    /// confirmed. Store errors propagate unchanged.
    pub fn add_contact(&self, contact: &Contact) -> StoreResult<Contact> {
        self.store.add(contact)
    }

    /// Delete a contact from the store. Store errors propagate unchanged.
    pub fn delete_contact(&self, contact: &Contact) -> StoreResult<()> {
        self.store.delete(contact)
    }

    /// Update a contact record in the store. Store errors propagate
    /// unchanged.
    pub fn update_contact(&self, contact: &Contact) -> StoreResult<Contact> {
        self.store.update(contact)
    }

    /// Search contacts matching the given query string.
    ///
    /// An absent or empty query matches everything. Otherwise a contact
    /// matches when the lower-cased concatenation of its full name, email,
    /// and phone contains the lower-cased query as a substring. Results
    /// keep the store's relative order.
    pub fn search_contacts(&self, query: Option<&str>) -> StoreResult<Vec<Contact>> {
        let matches: Vec<Contact> = self
            .store
            .get_all()?
            .into_iter()
            .filter(|contact| Self::is_contact_matched(contact, query))
            .collect();

        tracing::debug!(query = ?query, matched = matches.len(), "Contact search complete");
        Ok(matches)
    }

    /// Whether a contact matches the query.
    fn is_contact_matched(contact: &Contact, query: Option<&str>) -> bool {
        let query = match query {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return true,
        };

        let search_string = format!(
            "{} {} {}",
            contact.full_name(),
            contact.email(),
            contact.phone()
        );
        search_string.to_lowercase().contains(&query)
    }
}
