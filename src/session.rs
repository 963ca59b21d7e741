//! Interactive read-dispatch-print loop.
//!
//! The loop is generic over tokio's buffered reader and writer traits so the
//! binary can drive it with stdin/stdout while tests feed it byte slices.
//! It is strictly sequential: one line is read, handled and answered before
//! the next prompt is written.

use crate::commands::CommandTable;
use crate::config::Config;
use crate::repositories::PhoneBook;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// A command line split into its keyword and positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// First token, lower-cased
    pub keyword: String,
    /// Remaining tokens, verbatim
    pub args: Vec<String>,
}

/// Split a line on whitespace. Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<ParsedCommand> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next()?.to_lowercase();
    Some(ParsedCommand {
        keyword,
        args: tokens.map(str::to_string).collect(),
    })
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user typed a terminal command
    Exited,
    /// Input ran out before a terminal command
    EndOfInput,
}

/// One interactive session: the command table plus the phone book it mutates.
pub struct Session {
    prompt: String,
    greeting: String,
    commands: CommandTable,
    book: PhoneBook,
}

impl Session {
    pub fn new(config: &Config, commands: CommandTable) -> Self {
        Self {
            prompt: config.prompt.clone(),
            greeting: config.greeting.clone(),
            commands,
            book: PhoneBook::new(),
        }
    }

    pub fn book(&self) -> &PhoneBook {
        &self.book
    }

    /// Run until a terminal command or end of input.
    ///
    /// Command failures are part of the reply text; only I/O errors are returned.
    /// Bytes that are not valid UTF-8 are decoded lossily rather than failing.
    pub async fn run<R, W>(
        &mut self,
        mut reader: R,
        mut writer: W,
    ) -> std::io::Result<SessionOutcome>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        writer.write_all(self.greeting.as_bytes()).await?;
        writer.write_all(b"\n").await?;

        loop {
            writer.write_all(self.prompt.as_bytes()).await?;
            writer.flush().await?;

            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                info!(contacts = self.book.len(), "Input closed");
                writer.write_all(b"\n").await?;
                writer.flush().await?;
                return Ok(SessionOutcome::EndOfInput);
            }
            let line = String::from_utf8_lossy(&buf);

            let Some(command) = parse_input(&line) else {
                debug!("Blank line, prompting again");
                continue;
            };

            let reply = self
                .commands
                .dispatch(&mut self.book, &command.keyword, &command.args);
            writer.write_all(reply.as_bytes()).await?;
            writer.write_all(b"\n").await?;

            if CommandTable::is_terminal(&command.keyword) {
                writer.flush().await?;
                info!(contacts = self.book.len(), "Session closed by user");
                return Ok(SessionOutcome::Exited);
            }
        }
    }
}
