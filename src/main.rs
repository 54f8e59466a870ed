//! Sayx CLI: a small interactive command shell

use anyhow::{Context, Result};
use sayx_cli::config::Config;
use sayx_cli::platform::SystemPlatform;
use sayx_cli::repl::Shell;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode> {
    let config = Config::from_env();

    // Logs go to stderr so they never interleave with panels on stdout
    let log_color = config.color.enabled(io::stderr().is_terminal());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(log_color),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let color = config.color.enabled(io::stdout().is_terminal());
    info!(?config, color, "starting shell");

    let mut shell = Shell::new(
        io::stdin().lock(),
        io::stdout(),
        io::stderr(),
        SystemPlatform,
        config,
        color,
    );

    shell.banner().context("Failed to write the welcome banner")?;
    let stop = shell.run().context("Terminal input is unusable")?;
    info!(?stop, "shell stopped");

    Ok(ExitCode::SUCCESS)
}
