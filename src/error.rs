//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The `Display` form of every [`ContactError`] is the exact one-line reply shown to
//! the user, so the command boundary only ever calls `to_string()`.

use thiserror::Error;

/// Errors raised by contact validation and command handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Phone is not exactly ten decimal digits
    #[error("The phone number does not match the requirements: {0}.")]
    InvalidPhoneFormat(String),

    /// Phone is absent from the record being edited
    #[error("This number does not exist: {0}.")]
    PhoneNotFound(String),

    /// `add` was given a name that is already registered
    #[error("This contact already exists: {0}.")]
    NameAlreadyExists(String),

    /// Name is not registered in the address book
    #[error("This contact does not exist: {0}.")]
    NameNotFound(String),

    /// Wrong number of positional arguments.
    ///
    /// Covers both arity mismatches and missing arguments; the message only
    /// echoes what the user typed.
    #[error("Bad arguments {0:?}.")]
    BadArguments(Vec<String>),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
