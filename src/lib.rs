//! Sayx CLI: a small interactive command shell
//!
//! Lists, creates and removes files and directories, views and writes text,
//! does simple arithmetic and shows a calendar, all framed in fixed-width panels.

pub mod calc;
pub mod cmd;
pub mod config;
pub mod constants;
pub mod errors;
pub mod panel;
pub mod parse;
pub mod platform;
pub mod repl;

#[cfg(test)]
mod test_utils;
