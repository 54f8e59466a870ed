//! `edit`, `calc`, `calendar` and `todo`

use super::{Command, CommandContext, Flow};
use crate::calc::{self, format_result};
use crate::errors::{IoContext, ShellError};
use crate::panel::Tone;
use std::io::{self, Write};
use tracing::debug;

/// Write everything typed until end-of-input to the editor file.
pub static EDIT: EditCommand = EditCommand;

pub struct EditCommand;

impl Command for EditCommand {
    fn name(&self) -> &'static str {
        "edit"
    }

    fn description(&self) -> &'static str {
        "Launch Text Editor"
    }

    fn execute(&self, ctx: &mut CommandContext) -> Result<Flow, ShellError> {
        let path = ctx.config.editor_file.as_path();

        ctx.term.header("Text Editor")?;
        ctx.term.row(Tone::Notice, "Launching Text Editor...")?;
        ctx.term.row(
            Tone::Accent,
            "Enter text below (press Ctrl+D to save and exit):",
        )?;
        ctx.term.flush()?;

        let mut file = ctx.platform.create_file(path).context("Error opening file")?;
        let written = io::copy(&mut *ctx.input, &mut file).context("Error writing file")?;
        file.flush().context("Error writing file")?;
        debug!(bytes = written, path = %path.display(), "editor text saved");

        ctx.term.row(
            Tone::Accent,
            &format!("Text saved to '{}'.", path.display()),
        )?;
        ctx.term.border()?;
        Ok(Flow::Continue)
    }
}

/// Read one `<num> <op> <num>` line and print the result.
pub static CALC: CalcCommand = CalcCommand;

pub struct CalcCommand;

impl Command for CalcCommand {
    fn name(&self) -> &'static str {
        "calc"
    }

    fn description(&self) -> &'static str {
        "Launch Calculator"
    }

    fn execute(&self, ctx: &mut CommandContext) -> Result<Flow, ShellError> {
        ctx.term.header("Calculator")?;
        ctx.term
            .row(Tone::Accent, "Enter expression (e.g., 5 + 3):")?;
        ctx.term.flush()?;

        let mut expression = String::new();
        let read = ctx
            .input
            .read_line(&mut expression)
            .context("Error reading input")?;
        if read == 0 {
            return Err(ShellError::InvalidInput);
        }

        let value = calc::evaluate(&expression)?;
        debug!(expression = expression.trim(), value, "calculated");

        ctx.term
            .row(Tone::Accent, &format!("Result: {}", format_result(value)))?;
        ctx.term.border()?;
        Ok(Flow::Continue)
    }
}

/// Show the output of the platform calendar utility.
pub static CALENDAR: CalendarCommand = CalendarCommand;

pub struct CalendarCommand;

impl Command for CalendarCommand {
    fn name(&self) -> &'static str {
        "calendar"
    }

    fn description(&self) -> &'static str {
        "Launch Calendar"
    }

    fn execute(&self, ctx: &mut CommandContext) -> Result<Flow, ShellError> {
        let program = ctx.config.calendar_program.as_str();

        ctx.term.header("Calendar")?;
        ctx.term.row(Tone::Notice, "Launching Calendar...")?;

        let output = ctx
            .platform
            .run_program(program)
            .context("Error launching calendar")?;
        let success = output.success();
        let code = output.code();
        let (stdout, stderr) = output.get();

        ctx.term.raw(&mut stdout.as_slice())?;

        if !success {
            let reason = String::from_utf8_lossy(&stderr);
            let reason = reason.lines().next().unwrap_or_default().trim();
            let status = match code {
                Some(code) => format!("exited with status {code}"),
                None => "was terminated by a signal".to_string(),
            };
            let status = match reason.is_empty() {
                true => status,
                false => format!("{status} ({reason})"),
            };
            return Err(ShellError::ProgramFailed {
                context: "Error launching calendar",
                program: program.to_string(),
                status,
            });
        }

        ctx.term.border()?;
        Ok(Flow::Continue)
    }
}

/// Placeholder panel; no todo items are stored.
pub static TODO: TodoCommand = TodoCommand;

pub struct TodoCommand;

impl Command for TodoCommand {
    fn name(&self) -> &'static str {
        "todo"
    }

    fn description(&self) -> &'static str {
        "Launch Todo List"
    }

    fn execute(&self, ctx: &mut CommandContext) -> Result<Flow, ShellError> {
        ctx.term.header("Todo List")?;
        ctx.term.row(Tone::Notice, "Launching Todo List...")?;
        ctx.term.border()?;
        Ok(Flow::Continue)
    }
}
