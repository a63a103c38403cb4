//! Logging setup
//!
//! Commands log to stderr. The TUI draws on the terminal, so while it runs
//! log lines go to a file in the data directory instead.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands};
use crate::config::Settings;
use crate::APP_NAME;

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    /// `newsdesk.log` inside this directory
    File(PathBuf),
}

impl LogSink {
    pub fn for_command(command: &Commands) -> Result<Self> {
        match command {
            Commands::Tui => Ok(Self::File(Settings::log_dir()?)),
            _ => Ok(Self::Stderr),
        }
    }
}

fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default level.
pub fn init(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(cli.verbose)));

    match LogSink::for_command(&cli.command)? {
        LogSink::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogSink::File(dir) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(APP_NAME)
                .filename_suffix("log")
                .build(&dir)
                .with_context(|| format!("Failed to open log file in {}", dir.display()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(appender),
                )
                .init();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_logs_to_file_not_terminal() {
        match LogSink::for_command(&Commands::Tui).unwrap() {
            LogSink::File(dir) => assert!(dir.ends_with("logs")),
            LogSink::Stderr => panic!("TUI must not log to the terminal it draws on"),
        }
    }

    #[test]
    fn other_commands_log_to_stderr() {
        assert_eq!(
            LogSink::for_command(&Commands::Doctor { json: false }).unwrap(),
            LogSink::Stderr
        );
    }

    #[test]
    fn verbose_raises_default_level() {
        assert_eq!(default_level(false), "info");
        assert_eq!(default_level(true), "debug");
    }
}
