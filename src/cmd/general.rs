//! `help`, `print` and `exit`

use super::{COMMANDS, Command, CommandContext, Flow};
use crate::constants::APP_NAME;
use crate::errors::ShellError;
use crate::panel::Tone;

pub static HELP: HelpCommand = HelpCommand;

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Display this help message"
    }

    fn execute(&self, ctx: &mut CommandContext) -> Result<Flow, ShellError> {
        ctx.term.header("Help")?;
        for cmd in COMMANDS {
            let line = format!("{}: {}", cmd.synopsis(), cmd.description());
            ctx.term.row(Tone::Listing, &line)?;
        }
        ctx.term.border()?;
        Ok(Flow::Continue)
    }
}

/// Echoes the argument verbatim; an empty argument gives an empty row.
pub static PRINT: PrintCommand = PrintCommand;

pub struct PrintCommand;

impl Command for PrintCommand {
    fn name(&self) -> &'static str {
        "print"
    }

    fn synopsis(&self) -> &'static str {
        "print [message]"
    }

    fn description(&self) -> &'static str {
        "Print a message"
    }

    fn execute(&self, ctx: &mut CommandContext) -> Result<Flow, ShellError> {
        ctx.term.row(Tone::Accent, ctx.argument)?;
        ctx.term.border()?;
        Ok(Flow::Continue)
    }
}

pub static EXIT: ExitCommand = ExitCommand;

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exit the program"
    }

    fn execute(&self, ctx: &mut CommandContext) -> Result<Flow, ShellError> {
        ctx.term.row(Tone::Accent, &format!("Exiting {APP_NAME}..."))?;
        ctx.term.border()?;
        Ok(Flow::Exit)
    }
}
