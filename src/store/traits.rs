use crate::error::StoreResult;
use crate::models::Contact;

/// Storage backend for contacts.
///
/// Provides abstraction over contact storage and retrieval, enabling
/// different implementations (in-memory, file-backed, networked) to be
/// substituted without touching the manager.
///
/// Matching semantics for `delete` and `update` belong to the backend;
/// the shipped [`MemoryContactStore`](crate::store::MemoryContactStore)
/// keys both on the contact id.
pub trait ContactStore: Send + Sync {
    /// Retrieve every stored contact.
    ///
    /// The order is implementation-defined but must be stable as long as
    /// the backing data has not changed.
    fn get_all(&self) -> StoreResult<Vec<Contact>>;

    /// Persist a new contact, assigning or confirming its id.
    ///
    /// Returns the stored copy so callers can observe the assigned id.
    fn add(&self, contact: &Contact) -> StoreResult<Contact>;

    /// Remove the stored contact matching the given one.
    fn delete(&self, contact: &Contact) -> StoreResult<()>;

    /// Replace the stored contact's fields, keyed however the backend keys
    /// contacts (typically by id). Returns the stored copy.
    fn update(&self, contact: &Contact) -> StoreResult<Contact>;
}
