//! Filesystem commands
//!
//! All paths are relative to the current directory.

use super::{Command, CommandContext, Flow};
use crate::errors::{IoContext, ShellError};
use crate::panel::Tone;
use std::path::Path;

/// List the current directory.
pub static LIST: ListCommand = ListCommand;

pub struct ListCommand;

impl Command for ListCommand {
    fn name(&self) -> &'static str {
        "list"
    }

    fn description(&self) -> &'static str {
        "List files"
    }

    fn execute(&self, ctx: &mut CommandContext) -> Result<Flow, ShellError> {
        ctx.term.header("File List")?;
        let names = ctx
            .platform
            .list_dir(Path::new("."))
            .context("Unable to open directory")?;
        for name in names {
            ctx.term.row(Tone::Accent, &name)?;
        }
        ctx.term.border()?;
        Ok(Flow::Continue)
    }
}

/// Make directory.
pub static ADD: AddCommand = AddCommand;

pub struct AddCommand;

impl Command for AddCommand {
    fn name(&self) -> &'static str {
        "add"
    }

    fn synopsis(&self) -> &'static str {
        "add [name]"
    }

    fn description(&self) -> &'static str {
        "Create directory"
    }

    fn required_argument(&self) -> Option<&'static str> {
        Some("Missing directory name.")
    }

    fn execute(&self, ctx: &mut CommandContext) -> Result<Flow, ShellError> {
        ctx.term.header("Create Directory")?;
        ctx.platform
            .create_dir(ctx.argument)
            .context("Error creating directory")?;
        ctx.term
            .row(Tone::Accent, &format!("Directory '{}' created.", ctx.argument))?;
        ctx.term.border()?;
        Ok(Flow::Continue)
    }
}

/// Remove a file or an empty directory.
pub static DEL: DelCommand = DelCommand;

pub struct DelCommand;

impl Command for DelCommand {
    fn name(&self) -> &'static str {
        "del"
    }

    fn synopsis(&self) -> &'static str {
        "del [name]"
    }

    fn description(&self) -> &'static str {
        "Remove file/directory"
    }

    fn required_argument(&self) -> Option<&'static str> {
        Some("Missing file or directory name.")
    }

    fn execute(&self, ctx: &mut CommandContext) -> Result<Flow, ShellError> {
        ctx.term.header("Remove Item")?;
        ctx.platform
            .remove_item(ctx.argument)
            .context("Error removing item")?;
        ctx.term
            .row(Tone::Accent, &format!("Item '{}' removed.", ctx.argument))?;
        ctx.term.border()?;
        Ok(Flow::Continue)
    }
}

/// Print a file's bytes inside the panel.
pub static VIEW: ViewCommand = ViewCommand;

pub struct ViewCommand;

impl Command for ViewCommand {
    fn name(&self) -> &'static str {
        "view"
    }

    fn synopsis(&self) -> &'static str {
        "view [file]"
    }

    fn description(&self) -> &'static str {
        "View file contents"
    }

    fn required_argument(&self) -> Option<&'static str> {
        Some("Missing file name.")
    }

    fn execute(&self, ctx: &mut CommandContext) -> Result<Flow, ShellError> {
        ctx.term.header("File Viewer")?;
        let mut file = ctx
            .platform
            .open_file(Path::new(ctx.argument))
            .context("Error opening file")?;
        ctx.term
            .raw(&mut file)
            .context("Error reading file")?;
        ctx.term.border()?;
        Ok(Flow::Continue)
    }
}
