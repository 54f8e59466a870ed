//! # Errors
//!
//! Error types used in the library
//!
//! Every variant is recoverable: the REPL reports it inside a panel and reads the next line.

use std::io;
use thiserror::Error;

/// Everything that can go wrong while handling one line of input
#[derive(Debug, Error)]
pub enum ShellError {
    /// A command that needs an argument was given none
    ///
    /// Holds the message shown to the user, e.g. `Missing file name.`
    #[error("{0}")]
    MissingArgument(&'static str),

    /// The whole input line is longer than the shell accepts
    #[error("Input line too long (max {max} bytes, got {len}).")]
    LineTooLong { max: usize, len: usize },

    /// The command token is longer than the shell accepts
    #[error("Command too long (max {max} bytes, got {len}).")]
    CommandTooLong { max: usize, len: usize },

    /// The argument is longer than the shell accepts
    #[error("Argument too long (max {max} bytes, got {len}).")]
    ArgumentTooLong { max: usize, len: usize },

    /// No command with this name exists
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    /// The calculator could not read `<num> <op> <num>`
    #[error("Invalid input.")]
    InvalidInput,

    /// The calculator was asked to divide by zero
    #[error("Division by zero.")]
    DivisionByZero,

    /// The calculator does not know the operator
    #[error("Invalid operator '{0}'.")]
    InvalidOperator(char),

    /// A filesystem, terminal or process operation failed
    ///
    /// `context` is the user-facing lead-in, e.g. `Error opening file`.
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },

    /// An external program ran but did not succeed
    #[error("{context}: '{program}' {status}")]
    ProgramFailed {
        context: &'static str,
        program: String,
        status: String,
    },

    /// Writing to the terminal failed
    #[error("Error writing output: {0}")]
    Output(#[from] io::Error),
}

impl ShellError {
    /// Wraps an I/O error with a user-facing lead-in.
    pub fn io(context: &'static str, source: io::Error) -> Self {
        Self::Io { context, source }
    }

    /// The text of the error row shown to the user.
    ///
    /// I/O failures already lead with their own context, everything else gets an `Error:` prefix.
    pub fn panel_message(&self) -> String {
        match self {
            Self::Io { .. } | Self::ProgramFailed { .. } | Self::Output(_) => self.to_string(),
            other => format!("Error: {other}"),
        }
    }
}

/// Lets `?` attach a lead-in to a failed I/O call.
pub trait IoContext<T> {
    fn context(self, context: &'static str) -> Result<T, ShellError>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn context(self, context: &'static str) -> Result<T, ShellError> {
        self.map_err(|source| ShellError::io(context, source))
    }
}
