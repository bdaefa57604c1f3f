//! Text commands.
//!
//! A command is a comma-separated string whose first token is a single
//! character opcode:
//!
//! | Op | Form | Action |
//! |----|------|--------|
//! | `p` | `p,KEY,VALUE` | put (everything after the second comma is the value) |
//! | `g` | `g,KEY` | get, prints `KEY,VALUE` or `KEY not found` |
//! | `d` | `d,KEY` | delete, prints `KEY not found` if absent |
//! | `c` | `c` | clear |
//! | `a` | `a` | print every entry |
//!
//! Anything else is a bad command. Bad commands are reported and skipped;
//! they never stop the run.

use std::io::Write;

use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::{Backend, Key};

/// A parsed command, borrowing its value from the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `p,KEY,VALUE`
    Put(Key, &'a str),
    /// `g,KEY`
    Get(Key),
    /// `d,KEY`
    Delete(Key),
    /// `c`
    Clear,
    /// `a`
    All,
}

/// Why a command string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Empty input or an opcode longer than one character.
    #[error("missing or malformed opcode")]
    Opcode,

    /// A single-character opcode that is not one of `p g d c a`.
    #[error("unknown opcode {0:?}")]
    Unknown(char),

    /// Wrong number of arguments for the opcode.
    #[error("'{op}' expects {expected}")]
    Arity {
        /// The opcode.
        op: char,
        /// Human-readable argument list.
        expected: &'static str,
    },

    /// The key argument is not an integer.
    #[error("invalid key {0:?}")]
    Key(String),
}

impl<'a> Command<'a> {
    /// Parses a command string.
    ///
    /// ```
    /// use linkv::command::Command;
    ///
    /// assert_eq!(Command::parse("p,1,a,b"), Ok(Command::Put(1, "a,b")));
    /// assert_eq!(Command::parse("g,1"), Ok(Command::Get(1)));
    /// assert!(Command::parse("x").is_err());
    /// ```
    pub fn parse(input: &'a str) -> Result<Self, CommandError> {
        let (op, rest) = match input.split_once(',') {
            Some((op, rest)) => (op, Some(rest)),
            None => (input, None),
        };

        let mut chars = op.chars();
        let op = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(CommandError::Opcode),
        };

        match op {
            'p' => {
                let (key, value) = rest
                    .and_then(|rest| rest.split_once(','))
                    .ok_or(CommandError::Arity {
                        op,
                        expected: "KEY,VALUE",
                    })?;
                Ok(Command::Put(parse_key(key)?, value))
            }
            'g' | 'd' => {
                let key = rest
                    .filter(|rest| !rest.contains(','))
                    .ok_or(CommandError::Arity {
                        op,
                        expected: "KEY",
                    })?;
                let key = parse_key(key)?;
                Ok(if op == 'g' {
                    Command::Get(key)
                } else {
                    Command::Delete(key)
                })
            }
            'c' | 'a' => match rest {
                None => Ok(if op == 'c' { Command::Clear } else { Command::All }),
                Some(_) => Err(CommandError::Arity {
                    op,
                    expected: "no arguments",
                }),
            },
            other => Err(CommandError::Unknown(other)),
        }
    }
}

fn parse_key(key: &str) -> Result<Key, CommandError> {
    key.parse().map_err(|_| CommandError::Key(key.to_owned()))
}

/// Runs one command against `backend`, writing its output to `out`.
///
/// # Errors
///
/// Whatever the backend operation returns. `NotFound` and `Unsupported`
/// are left for the caller to report; see [`run_op`].
pub fn execute(backend: &mut dyn Backend, command: Command<'_>, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Put(key, value) => backend.put(key, value),
        Command::Get(key) => {
            match backend.get(key) {
                Some(value) => writeln!(out, "{key},{value}")?,
                None => writeln!(out, "{key} not found")?,
            }
            Ok(())
        }
        Command::Delete(key) => backend.delete(key),
        Command::Clear => backend.clear(),
        Command::All => backend.enumerate(out),
    }
}

/// Parses and runs one command string, reporting recoverable failures to
/// `out` instead of returning them.
///
/// Bad commands print `bad command`; missing keys print `KEY not found`;
/// unsupported operations print a notice. Only output failures are
/// returned.
pub fn run_op(backend: &mut dyn Backend, input: &str, out: &mut dyn Write) -> Result<()> {
    let command = match Command::parse(input) {
        Ok(command) => command,
        Err(e) => {
            debug!(input, "rejected command: {e}");
            writeln!(out, "bad command")?;
            return Ok(());
        }
    };

    match execute(backend, command, out) {
        Ok(()) => Ok(()),
        Err(StoreError::NotFound(key)) => {
            writeln!(out, "{key} not found")?;
            Ok(())
        }
        Err(StoreError::Unsupported(op)) => {
            warn!(backend = backend.name(), op, "operation not supported");
            writeln!(out, "{op} not supported by {} backend", backend.name())?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}
