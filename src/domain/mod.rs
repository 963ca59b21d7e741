//! Domain value objects.
//!
//! Type-safe wrappers for the two contact fields. Values are validated at
//! construction time so an invalid phone can never be stored in a record.

pub mod name;
pub mod phone;

pub use name::Name;
pub use phone::Phone;
