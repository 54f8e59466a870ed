//! Parser for the user input
//!
//! A line is split once: the first whitespace-delimited word is the command,
//! and everything after the whitespace run that follows it is the argument, kept verbatim.
//!
//! ```shell
//! print   hello   world
//! ```
//!
//! parses to the command `print` and the argument `hello   world`.
//!
//! Both parts have a fixed maximum length. Longer input is rejected, never truncated.

use crate::constants::{MAX_ARG_LENGTH, MAX_COMMAND_LENGTH, MAX_LINE_LENGTH};
use crate::errors::ShellError;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

/// A string that is at most `N` bytes long
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bounded<const N: usize>(String);

impl<const N: usize> Bounded<N> {
    /// The maximum length in bytes
    pub const MAX: usize = N;

    /// Copies `value` if it fits, otherwise returns its length.
    pub fn new(value: &str) -> Result<Self, usize> {
        match value.len() <= N {
            true => Ok(Self(value.to_string())),
            false => Err(value.len()),
        }
    }
}

impl<const N: usize> Deref for Bounded<N> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> Display for Bounded<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Command token
pub type CommandName = Bounded<MAX_COMMAND_LENGTH>;

/// Free-text argument
pub type Argument = Bounded<MAX_ARG_LENGTH>;

/// One line of input split into a command and its argument
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    pub command: CommandName,
    /// Empty when the line holds only the command
    pub argument: Argument,
}

fn is_separator(ch: char) -> bool {
    ch.is_ascii_whitespace()
}

/// Parses user input into a command and its argument
///
/// Returns `Ok(None)` for a blank line.
///
/// Leading whitespace is skipped. The argument keeps internal and trailing whitespace.
///
/// # Errors
/// - [`ShellError::LineTooLong`] when the line exceeds [`MAX_LINE_LENGTH`]
/// - [`ShellError::CommandTooLong`] when the first word exceeds [`MAX_COMMAND_LENGTH`]
/// - [`ShellError::ArgumentTooLong`] when the rest exceeds [`MAX_ARG_LENGTH`]
pub fn parse_input(line: &str) -> Result<Option<ParsedCommand>, ShellError> {
    if line.len() > MAX_LINE_LENGTH {
        return Err(ShellError::LineTooLong {
            max: MAX_LINE_LENGTH,
            len: line.len(),
        });
    }

    let line = line.trim_start_matches(is_separator);
    if line.is_empty() {
        return Ok(None);
    }

    let (command, argument) = match line.split_once(is_separator) {
        Some((command, rest)) => (command, rest.trim_start_matches(is_separator)),
        None => (line, ""),
    };

    let command = CommandName::new(command).map_err(|len| ShellError::CommandTooLong {
        max: CommandName::MAX,
        len,
    })?;
    let argument = Argument::new(argument).map_err(|len| ShellError::ArgumentTooLong {
        max: Argument::MAX,
        len,
    })?;

    Ok(Some(ParsedCommand { command, argument }))
}
