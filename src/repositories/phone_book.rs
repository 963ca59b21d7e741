//! Name-to-phone store driven by the interactive commands.

use indexmap::IndexMap;

/// The contacts typed in during a session, in insertion order.
///
/// Phones are kept exactly as entered; format rules belong to
/// [`Record`](crate::models::Record), not to this store.
#[derive(Debug, Clone, Default)]
pub struct PhoneBook {
    entries: IndexMap<String, String>,
}

impl PhoneBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `phone` under `name`, overwriting any previous value in place.
    pub fn set(&mut self, name: &str, phone: &str) {
        self.entries.insert(name.to_string(), phone.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, phone)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, phone)| (name.as_str(), phone.as_str()))
    }
}
