//! Record model: one contact in the address book.

use crate::domain::{Name, Phone};
use crate::error::{ContactError, ContactResult};
use std::fmt;

/// A contact: a fixed name and an ordered list of validated phones.
///
/// Phones keep insertion order and may repeat. Every mutation takes raw
/// strings and routes them through [`Phone::new`], so a malformed number
/// is reported as [`ContactError::InvalidPhoneFormat`] and never stored.
#[derive(Debug, Clone)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Append a phone.
    pub fn add_phone(&mut self, phone: &str) -> ContactResult<()> {
        let phone = Phone::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first occurrence of `orig` with `new`, keeping its position.
    ///
    /// Both inputs are validated before the lookup, `orig` first.
    ///
    /// # Errors
    ///
    /// - `InvalidPhoneFormat` if either number is malformed
    /// - `PhoneNotFound` if `orig` is not on this record
    pub fn edit_phone(&mut self, orig: &str, new: &str) -> ContactResult<()> {
        let orig_phone = Phone::new(orig)?;
        let new_phone = Phone::new(new)?;

        let slot = self
            .phones
            .iter_mut()
            .find(|p| **p == orig_phone)
            .ok_or_else(|| ContactError::PhoneNotFound(orig.to_string()))?;
        *slot = new_phone;
        Ok(())
    }

    /// Remove the first occurrence of `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> ContactResult<()> {
        let target = Phone::new(phone)?;
        let index = self
            .phones
            .iter()
            .position(|p| *p == target)
            .ok_or_else(|| ContactError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Look up a phone on this record.
    ///
    /// Unlike [`edit_phone`](Self::edit_phone) and
    /// [`remove_phone`](Self::remove_phone), a missing number is `Ok(None)`;
    /// only a malformed one is an error.
    pub fn find_phone(&self, phone: &str) -> ContactResult<Option<&Phone>> {
        let target = Phone::new(phone)?;
        Ok(self.phones.iter().find(|p| **p == target))
    }

    /// Phones joined with `"; "` in insertion order.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}

/// Records compare equal when the names match and they share no phone.
///
/// This is a long-standing quirk of the contact model and is kept as is.
/// The relation is not reflexive, so `Eq` is not implemented.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && !self.phones.iter().any(|p| other.phones.contains(p))
    }
}
