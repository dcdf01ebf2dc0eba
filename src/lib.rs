//! Addressbook - a contact data layer with pluggable storage.
//!
//! This library provides the entity and management façade of an address
//! book: a [`Contact`] record with setter-gated email validation, a
//! [`ContactManager`] façade for querying and mutating contacts, and a
//! [`ContactStore`] capability trait that storage backends implement. An
//! in-memory reference backend ships with the crate; file-backed or
//! networked backends can be substituted without changing the façade.
//!
//! # Architecture
//!
//! - **models**: Data structures for contacts
//! - **store**: The storage capability trait and the in-memory backend
//! - **manager**: The façade exposing search/add/delete/update operations
//! - **error**: Custom error types for storage failures
//!
//! # Example
//!
//! ```
//! use addressbook::{Contact, ContactManager, MemoryContactStore};
//! use std::sync::Arc;
//!
//! let manager = ContactManager::new(Arc::new(MemoryContactStore::new()));
//!
//! let jane = Contact::new("Jane", "Doe", "jane@example.com", "555-1111");
//! let stored = manager.add_contact(&jane).unwrap();
//! assert_eq!(stored.id(), 1);
//!
//! let hits = manager.search_contacts(Some("jane@")).unwrap();
//! assert_eq!(hits.len(), 1);
//! ```

pub mod error;
pub mod manager;
pub mod models;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use manager::ContactManager;
pub use models::Contact;
pub use store::{ContactStore, MemoryContactStore};
