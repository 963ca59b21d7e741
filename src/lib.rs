//! Assistant Bot - an interactive command-line contact manager.
//!
//! A user types commands at a prompt; each line is dispatched to a handler
//! that reads or mutates an in-memory address book and returns one reply.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (`Name`, `Phone`)
//! - **models**: The contact `Record` and its phone editing rules
//! - **repositories**: The `AddressBook` of records and the command-driven `PhoneBook`
//! - **commands**: Keyword-to-handler table with a fallback handler
//! - **session**: The prompt/read/dispatch/print loop
//! - **config**: Configuration from environment variables
//! - **error**: Error types; their display text is what the user sees

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use commands::{CommandTable, Handler};
pub use config::Config;
pub use domain::{Name, Phone};
pub use error::{ConfigError, ContactError, ContactResult};
pub use models::Record;
pub use repositories::{AddressBook, PhoneBook};
pub use session::{parse_input, ParsedCommand, Session, SessionOutcome};
