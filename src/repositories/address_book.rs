//! Session address book keyed by contact name.

use crate::models::Record;
use indexmap::IndexMap;

/// All contacts for one session, in insertion order.
///
/// Re-adding a name replaces the stored record but keeps the slot it was
/// first inserted into. Nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record under its name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().to_string();
        if self.records.insert(key, record).is_some() {
            tracing::trace!("Replaced existing record");
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`; absent names are ignored.
    pub fn delete(&mut self, name: &str) {
        self.records.shift_remove(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name);
        record.add_phone(phone).unwrap();
        record
    }

    fn names(book: &AddressBook) -> Vec<&str> {
        book.iter().map(|r| r.name().as_str()).collect()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.is_empty());

        book.add_record(record("John", "1234567890"));
        assert_eq!(book.len(), 1);
        assert!(book.contains("John"));
        assert_eq!(
            book.find("John").map(|r| r.phones_display()),
            Some("1234567890".to_string())
        );
        assert!(book.find("Jane").is_none());
    }

    #[test]
    fn test_readd_replaces_and_keeps_position() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890"));
        book.add_record(record("Jane", "5555555555"));
        book.add_record(record("John", "9999999999"));

        assert_eq!(book.len(), 2);
        assert_eq!(names(&book), vec!["John", "Jane"]);
        assert_eq!(book.find("John").unwrap().phones_display(), "9999999999");
    }

    #[test]
    fn test_delete_keeps_remaining_order() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890"));
        book.add_record(record("Jane", "5555555555"));
        book.add_record(record("Bob", "1112223333"));

        book.delete("Jane");
        assert_eq!(names(&book), vec!["John", "Bob"]);

        book.delete("Nobody");
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1234567890"));

        book.find_mut("John")
            .unwrap()
            .edit_phone("1234567890", "1112223333")
            .unwrap();
        assert_eq!(book.find("John").unwrap().phones_display(), "1112223333");
    }
}
