//! Runtime configuration
//!
//! The shell takes no flags. A few environment variables tune it:
//!
//! | Variable           | Effect                                                  |
//! |--------------------|---------------------------------------------------------|
//! | `SAYX_LOG`         | log filter used when `RUST_LOG` is not set              |
//! | `NO_COLOR`         | any non-empty value disables colour                     |
//! | `SAYX_COLOR`       | `always`, `never` or `auto` (colour only on a terminal) |
//! | `SAYX_EDITOR_FILE` | file written by `edit`                                  |
//! | `SAYX_CALENDAR`    | program run by `calendar`                               |

use crate::constants::{DEFAULT_CALENDAR_PROGRAM, DEFAULT_EDITOR_FILE, DEFAULT_LOG_FILTER};
use std::env;
use std::path::PathBuf;
use tracing::warn;

/// When to paint output with ANSI colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    Always,
    Never,
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
}

impl ColorChoice {
    /// Resolves the choice against whether stdout is a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub color: ColorChoice,
    pub editor_file: PathBuf,
    pub calendar_program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            color: ColorChoice::default(),
            editor_file: PathBuf::from(DEFAULT_EDITOR_FILE),
            calendar_program: DEFAULT_CALENDAR_PROGRAM.to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key-value source.
    ///
    /// Empty values count as unset. Unknown `SAYX_COLOR` values fall back to `auto`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let mut config = Self::default();

        if let Some(filter) = get("SAYX_LOG") {
            config.log_filter = filter;
        }

        config.color = match get("SAYX_COLOR").as_deref() {
            Some("always") => ColorChoice::Always,
            Some("never") => ColorChoice::Never,
            Some("auto") | None => ColorChoice::Auto,
            Some(other) => {
                warn!(value = other, "ignoring unknown SAYX_COLOR value");
                ColorChoice::Auto
            }
        };
        if get("NO_COLOR").is_some() && config.color != ColorChoice::Always {
            config.color = ColorChoice::Never;
        }

        if let Some(file) = get("SAYX_EDITOR_FILE") {
            config.editor_file = PathBuf::from(file);
        }
        if let Some(program) = get("SAYX_CALENDAR") {
            config.calendar_program = program;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(Config::default(), config);
        assert_eq!(PathBuf::from("sayxfile"), config.editor_file);
        assert_eq!("cal", config.calendar_program);
        assert_eq!("warn", config.log_filter);
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("SAYX_LOG", "debug"),
            ("SAYX_EDITOR_FILE", "notes.txt"),
            ("SAYX_CALENDAR", "ncal"),
            ("SAYX_COLOR", "always"),
        ]);
        assert_eq!("debug", config.log_filter);
        assert_eq!(PathBuf::from("notes.txt"), config.editor_file);
        assert_eq!("ncal", config.calendar_program);
        assert_eq!(ColorChoice::Always, config.color);
    }

    #[test]
    fn no_color_disables_auto() {
        assert_eq!(ColorChoice::Never, config_from(&[("NO_COLOR", "1")]).color);
        assert_eq!(ColorChoice::Auto, config_from(&[("NO_COLOR", "")]).color);
        assert_eq!(
            ColorChoice::Always,
            config_from(&[("NO_COLOR", "1"), ("SAYX_COLOR", "always")]).color
        );
    }

    #[test]
    fn unknown_color_value_falls_back_to_auto() {
        assert_eq!(ColorChoice::Auto, config_from(&[("SAYX_COLOR", "rainbow")]).color);
    }

    #[test]
    fn choice_resolution() {
        assert!(ColorChoice::Auto.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
    }
}
