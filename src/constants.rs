//! # Constants
//!
//! Constants used throughout the application

/// Longest accepted input line, in bytes, without the line terminator
pub const MAX_LINE_LENGTH: usize = MAX_COMMAND_LENGTH + MAX_ARG_LENGTH + 2;

/// Longest accepted command token, in bytes
pub const MAX_COMMAND_LENGTH: usize = 20;

/// Longest accepted command argument, in bytes
pub const MAX_ARG_LENGTH: usize = 100;

/// Number of failed terminal reads in a row after which the REPL gives up
pub const MAX_CONSECUTIVE_READ_ERRORS: usize = 3;

/// Width of the text area inside a panel row
pub const PANEL_WIDTH: usize = 45;

/// Name shown in the banner and the farewell panel
pub const APP_NAME: &str = "Sayx CLI 4";

/// File the text editor writes to, relative to the current directory
pub const DEFAULT_EDITOR_FILE: &str = "sayxfile";

/// Platform calendar utility
pub const DEFAULT_CALENDAR_PROGRAM: &str = "cal";

/// Log filter used when neither `RUST_LOG` nor `SAYX_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// ASCII-art logo printed above the welcome panel
pub const LOGO: [&str; 2] = [
    "█ █ █ █▀▀ █   █▀▀ █▀█ █▄ ▄█ █▀▀",
    "▀▄▀▄▀ ██▄ █▄▄ █▄▄ █▄█ █ ▀ █ ██▄",
];
