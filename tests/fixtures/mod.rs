//! Shared builders for integration tests.

use assistant_bot::{CommandTable, PhoneBook, Record};

/// Owned argument list from string literals.
#[allow(dead_code)]
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// A record with the given phones, all of which must be valid.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record
            .add_phone(phone)
            .unwrap_or_else(|e| panic!("fixture phone {phone} rejected: {e}"));
    }
    record
}

/// Feed whitespace-separated command lines through a table, collecting replies.
#[allow(dead_code)]
pub fn run_lines(table: &CommandTable, book: &mut PhoneBook, lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| assistant_bot::parse_input(line))
        .map(|cmd| table.dispatch(book, &cmd.keyword, &cmd.args))
        .collect()
}
