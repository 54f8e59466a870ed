//! Command handlers
//!
//! # Adding a New Command
//!
//! 1. Define a unit struct in one of the submodules and implement [`Command`] for it
//! 2. Export a static instance: `pub static MYCOMMAND: MyCommand = MyCommand;`
//! 3. Add it to [`COMMANDS`]; its position there is its position in `help`

mod files;
mod general;
mod tools;

use crate::config::Config;
use crate::errors::ShellError;
use crate::panel::Terminal;
use crate::platform::Platform;
use std::collections::HashMap;
use std::io::BufRead;

/// What the REPL does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop the shell
    Exit,
}

/// Everything a command may touch while it runs
pub struct CommandContext<'a> {
    /// Text after the command name, verbatim; may be empty
    pub argument: &'a str,
    /// The terminal input, for commands that read more than their own line
    pub input: &'a mut dyn BufRead,
    pub term: Terminal<'a>,
    pub platform: &'a mut dyn Platform,
    pub config: &'a Config,
}

/// A named shell command
///
/// Commands are registered statically in [`COMMANDS`] and looked up by exact name.
pub trait Command: Sync {
    /// Name typed by the user
    fn name(&self) -> &'static str;

    /// Name with argument placeholder, as shown in `help`
    fn synopsis(&self) -> &'static str {
        self.name()
    }

    /// One-line description (shown in `help`)
    fn description(&self) -> &'static str;

    /// Message to report when the command is run without its argument
    ///
    /// `None` means the argument is optional. The dispatcher checks this before
    /// calling [`Command::execute`], so `execute` never sees an empty required argument.
    fn required_argument(&self) -> Option<&'static str> {
        None
    }

    /// Runs the command.
    ///
    /// On success the command has written its whole panel, closing border included.
    /// On failure it may have written the header; the caller reports the error and closes the panel.
    fn execute(&self, ctx: &mut CommandContext) -> Result<Flow, ShellError>;
}

/// All commands, in `help` order
pub static COMMANDS: &[&dyn Command] = &[
    &general::HELP,
    &files::LIST,
    &files::ADD,
    &files::DEL,
    &tools::EDIT,
    &tools::CALC,
    &files::VIEW,
    &tools::CALENDAR,
    &tools::TODO,
    &general::PRINT,
    &general::EXIT,
];

/// Command lookup table keyed by name
pub struct Registry {
    by_name: HashMap<&'static str, &'static dyn Command>,
}

impl Registry {
    /// Builds a table of command handlers from [`COMMANDS`].
    pub fn new() -> Self {
        let by_name = COMMANDS.iter().map(|&cmd| (cmd.name(), cmd)).collect();
        Self { by_name }
    }

    /// Finds a command by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&'static dyn Command> {
        self.by_name.get(name).copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
