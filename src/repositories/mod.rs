//! In-memory contact storage.

mod address_book;
mod phone_book;

pub use address_book::AddressBook;
pub use phone_book::PhoneBook;
