//! Command table and dispatch.
//!
//! Each keyword maps to a plain function over the shared [`PhoneBook`].
//! Unknown keywords resolve to a fallback handler, so lookup never fails,
//! and [`CommandTable::dispatch`] turns every [`ContactError`] into the
//! reply line instead of letting it escape.
//!
//! [`ContactError`]: crate::error::ContactError

pub mod handlers;

use crate::error::ContactResult;
use crate::repositories::PhoneBook;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// A command implementation: positional arguments in, reply text out.
pub type Handler = fn(&mut PhoneBook, &[String]) -> ContactResult<String>;

/// Keywords that end the session once their reply has been printed.
const TERMINAL_COMMANDS: &[&str] = &["close", "exit"];

/// Maps lower-cased command keywords to handlers.
///
/// Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct CommandTable {
    handlers: HashMap<&'static str, Handler>,
    fallback: Handler,
}

impl CommandTable {
    /// Build the table with every registered command.
    pub fn new() -> Self {
        let entries: [(&'static str, Handler); 7] = [
            ("close", handlers::goodbye),
            ("exit", handlers::goodbye),
            ("hello", handlers::hello),
            ("add", handlers::add_contact),
            ("change", handlers::change_contact),
            ("phone", handlers::show_phone),
            ("all", handlers::show_all),
        ];

        Self {
            handlers: entries.into_iter().collect(),
            fallback: handlers::invalid_command,
        }
    }

    /// Resolve a lower-cased keyword, falling back to the invalid-command handler.
    pub fn lookup(&self, keyword: &str) -> Handler {
        self.handlers.get(keyword).copied().unwrap_or(self.fallback)
    }

    /// Whether `keyword` names a registered command.
    pub fn is_registered(&self, keyword: &str) -> bool {
        self.handlers.contains_key(keyword)
    }

    /// Run the handler for `keyword` and render its outcome as the reply.
    pub fn dispatch(&self, book: &mut PhoneBook, keyword: &str, args: &[String]) -> String {
        debug!(
            command = %keyword,
            arg_count = args.len(),
            registered = self.is_registered(keyword),
            "Dispatching command"
        );

        match self.lookup(keyword)(book, args) {
            Ok(reply) => reply,
            Err(e) => {
                debug!(command = %keyword, error = %e, "Command failed");
                e.to_string()
            }
        }
    }

    /// Whether the session stops after running `keyword`.
    pub fn is_terminal(keyword: &str) -> bool {
        TERMINAL_COMMANDS.contains(&keyword)
    }
}

impl fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keywords: Vec<&str> = self.handlers.keys().copied().collect();
        keywords.sort_unstable();
        f.debug_struct("CommandTable")
            .field("keywords", &keywords)
            .finish_non_exhaustive()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}
