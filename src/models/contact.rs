//! Contact model representing one address-book entry.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

// ASCII-only on purpose: `(?-u)` turns `\w` into `[0-9A-Za-z_]`, so
// internationalized addresses and `+` tags are rejected.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)^[\w\-.]+@([\w-]+\.)+[\w-]{2,}$").expect("Failed to compile email regex")
});

/// A contact in the address book.
///
/// Fields are private so the email invariant cannot be bypassed: once
/// [`Contact::set_email`] has accepted a value, the stored email always
/// matches the validation pattern. The constructor itself applies no
/// validation; whatever it is given is stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Contact {
    /// Unique identifier, 0 until assigned by a storage backend
    id: u64,

    /// First name
    first_name: String,

    /// Last name
    last_name: String,

    /// Email address, pattern-checked on the setter path only
    email: String,

    /// Phone number, free text
    phone: String,
}

impl Contact {
    /// Create a new contact with the given attributes and an unset id.
    ///
    /// No validation is applied here, not even to `email`. A malformed
    /// email supplied at construction time is stored as-is and can only be
    /// replaced through [`Contact::set_email`].
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Get the contact's id (0 while unassigned).
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Set the contact's id.
    ///
    /// No range or uniqueness check happens here; uniqueness is the storage
    /// backend's responsibility.
    pub fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    /// Get the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Set the first name.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    /// Get the last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Set the last name.
    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    /// Get the email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replace the email address if the new value is well-formed.
    ///
    /// The value must match `^[\w\-.]+@([\w-]+\.)+[\w-]{2,}$` (ASCII word
    /// characters). On a mismatch the call is a silent no-op: the previous
    /// value is retained and nothing is raised, returned, or logged.
    /// Callers can only detect a rejected update by re-reading
    /// [`Contact::email`].
    pub fn set_email(&mut self, email: impl Into<String>) {
        let email = email.into();
        if EMAIL_REGEX.is_match(&email) {
            self.email = email;
        }
    }

    /// Get the phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Set the phone number. Free text, never validated.
    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    /// Render the contact as `"{first_name} {last_name}({email})"`.
    ///
    /// The exact spacing matters to search: one space between the names and
    /// none around the parentheses.
    pub fn full_name(&self) -> String {
        format!("{} {}({})", self.first_name, self.last_name, self.email)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
