//! REPL (Read-Eval-Print Loop)
//!
//! The main shell loop.
//!
//! Takes user input, parses it and calls the appropriate command handler.
//! The loop ends on `exit` or when the input is exhausted.
//!
//! # References
//!
//! - [REPL @ Wikipedia](https://en.wikipedia.org/wiki/Read%E2%80%93eval%E2%80%93print_loop)

use crate::cmd::{CommandContext, Flow, Registry};
use crate::config::Config;
use crate::constants::{APP_NAME, LOGO, MAX_CONSECUTIVE_READ_ERRORS};
use crate::errors::ShellError;
use crate::panel::{Terminal, Tone};
use crate::parse::{ParsedCommand, parse_input};
use crate::platform::Platform;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Result of one attempt to read a line
#[derive(Debug)]
pub enum ReadOutcome {
    /// A line without its terminator
    Line(String),
    EndOfInput,
    Failed(io::Error),
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// The user typed `exit`
    Exit,
    /// The input was exhausted
    EndOfInput,
}

/// Reads one line and strips the trailing `\n` or `\r\n`.
///
/// Bytes that are not valid UTF-8 become `U+FFFD`. Interrupted reads are retried.
pub fn read_line(input: &mut dyn BufRead) -> ReadOutcome {
    let mut bytes = Vec::new();
    loop {
        match input.read_until(b'\n', &mut bytes) {
            Ok(0) => return ReadOutcome::EndOfInput,
            Ok(_) => {
                if bytes.ends_with(b"\n") {
                    bytes.pop();
                    if bytes.ends_with(b"\r") {
                        bytes.pop();
                    }
                }
                return ReadOutcome::Line(String::from_utf8_lossy(&bytes).into_owned());
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return ReadOutcome::Failed(err),
        }
    }
}

/// The shell: input, output, collaborators and the command table
pub struct Shell<R, W, E, P> {
    input: R,
    out: W,
    err: E,
    platform: P,
    config: Config,
    color: bool,
    registry: Registry,
}

impl<R, W, E, P> Shell<R, W, E, P>
where
    R: BufRead,
    W: Write,
    E: Write,
    P: Platform,
{
    pub fn new(input: R, out: W, err: E, platform: P, config: Config, color: bool) -> Self {
        Self {
            input,
            out,
            err,
            platform,
            config,
            color,
            registry: Registry::new(),
        }
    }

    fn terminal(&mut self) -> Terminal<'_> {
        Terminal::new(&mut self.out, &mut self.err, self.color)
    }

    /// Prints the logo and the welcome panel.
    pub fn banner(&mut self) -> io::Result<()> {
        let mut term = self.terminal();
        term.line(Tone::Accent, LOGO[0])?;
        term.line(Tone::Listing, LOGO[1])?;
        term.line(Tone::Listing, "")?;
        term.header(APP_NAME)?;
        term.row(Tone::Accent, &format!("Welcome to {APP_NAME}"))?;
        term.row(Tone::Accent, "Type 'help' for a list of commands.")?;
        term.border()
    }

    /// Runs the loop until `exit` or end-of-input.
    ///
    /// A failed read is reported and the loop goes on.
    ///
    /// # Errors
    /// Returns the last read error after [`MAX_CONSECUTIVE_READ_ERRORS`] failed reads in a row.
    pub fn run(&mut self) -> Result<Stop, ShellError> {
        let mut failures = 0;

        loop {
            match read_line(&mut self.input) {
                ReadOutcome::Line(line) => {
                    failures = 0;
                    if self.handle_line(&line) == Flow::Exit {
                        info!("exit requested");
                        return Ok(Stop::Exit);
                    }
                }
                ReadOutcome::EndOfInput => {
                    info!("end of input");
                    return Ok(Stop::EndOfInput);
                }
                ReadOutcome::Failed(err) => {
                    failures += 1;
                    debug!(%err, failures, "failed to read input");
                    let error = ShellError::io("Error reading input", err);
                    if failures >= MAX_CONSECUTIVE_READ_ERRORS {
                        warn!(failures, "giving up on input");
                        return Err(error);
                    }
                    self.report(&error);
                }
            }
        }
    }

    /// Parses one line and calls the appropriate command handler.
    ///
    /// Errors are reported to the user; they never stop the loop.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        let result = match parse_input(line) {
            Ok(Some(parsed)) => self.dispatch(&parsed),
            Ok(None) => Ok(Flow::Continue),
            Err(error) => Err(error),
        };

        match result {
            Ok(flow) => flow,
            Err(error) => {
                self.report(&error);
                Flow::Continue
            }
        }
    }

    fn dispatch(&mut self, parsed: &ParsedCommand) -> Result<Flow, ShellError> {
        debug!(command = %parsed.command, argument = %parsed.argument, "dispatching");

        let command = self
            .registry
            .get(&parsed.command)
            .ok_or_else(|| ShellError::UnknownCommand(parsed.command.to_string()))?;

        if let Some(message) = command.required_argument() {
            if parsed.argument.is_empty() {
                return Err(ShellError::MissingArgument(message));
            }
        }

        let mut ctx = CommandContext {
            argument: &parsed.argument,
            input: &mut self.input,
            term: Terminal::new(&mut self.out, &mut self.err, self.color),
            platform: &mut self.platform,
            config: &self.config,
        };
        command.execute(&mut ctx)
    }

    fn report(&mut self, error: &ShellError) {
        debug!(%error, "reporting error");
        if let Err(err) = self.terminal().error(&error.panel_message()) {
            warn!(%err, "failed to report an error");
        }
    }
}
