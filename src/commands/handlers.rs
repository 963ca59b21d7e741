//! Handlers bound to command keywords.

use crate::error::{ContactError, ContactResult};
use crate::repositories::PhoneBook;

fn name_and_phone(args: &[String]) -> ContactResult<(&str, &str)> {
    match args {
        [name, phone] => Ok((name.as_str(), phone.as_str())),
        _ => Err(ContactError::BadArguments(args.to_vec())),
    }
}

fn single_name(args: &[String]) -> ContactResult<&str> {
    match args {
        [name] => Ok(name.as_str()),
        _ => Err(ContactError::BadArguments(args.to_vec())),
    }
}

pub fn goodbye(_book: &mut PhoneBook, _args: &[String]) -> ContactResult<String> {
    Ok("Good bye!".to_string())
}

pub fn hello(_book: &mut PhoneBook, _args: &[String]) -> ContactResult<String> {
    Ok("How can I help you?".to_string())
}

pub fn invalid_command(_book: &mut PhoneBook, _args: &[String]) -> ContactResult<String> {
    Ok("Invalid command.".to_string())
}

/// `add <name> <phone>`: insert a new contact. Never overwrites.
pub fn add_contact(book: &mut PhoneBook, args: &[String]) -> ContactResult<String> {
    let (name, phone) = name_and_phone(args)?;
    if book.contains(name) {
        return Err(ContactError::NameAlreadyExists(name.to_string()));
    }

    book.set(name, phone);
    Ok(format!("Contact {name} added."))
}

/// `change <name> <phone>`: overwrite the phone of an existing contact.
pub fn change_contact(book: &mut PhoneBook, args: &[String]) -> ContactResult<String> {
    let (name, phone) = name_and_phone(args)?;
    if !book.contains(name) {
        return Err(ContactError::NameNotFound(name.to_string()));
    }

    book.set(name, phone);
    Ok(format!("Contact {name} changed."))
}

/// `phone <name>`
pub fn show_phone(book: &mut PhoneBook, args: &[String]) -> ContactResult<String> {
    let name = single_name(args)?;
    book.get(name)
        .map(str::to_string)
        .ok_or_else(|| ContactError::NameNotFound(name.to_string()))
}

/// `all`: one `<name> <phone>` line per contact, in insertion order.
pub fn show_all(book: &mut PhoneBook, _args: &[String]) -> ContactResult<String> {
    Ok(book
        .iter()
        .map(|(name, phone)| format!("{name} {phone}"))
        .collect::<Vec<_>>()
        .join("\n"))
}
