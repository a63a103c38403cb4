//! CLI argument definitions using clap

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::article::RenderFormat;

/// newsdesk - Turn event and interview notes into school newspaper articles
#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write an article from notes with the generation service
    Write {
        #[command(flatten)]
        notes: NotesArgs,

        /// Reporter name (defaults to newspaper.default_author)
        #[arg(short, long)]
        author: Option<String>,

        /// Publication date, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Photo to place under the headline (jpg, jpeg, png)
        #[arg(long)]
        image: Option<PathBuf>,

        /// Output layout
        #[arg(short, long, value_enum, default_value_t = RenderFormat::Text)]
        format: RenderFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the prompt that would be sent, without calling the service
    Prompt {
        #[command(flatten)]
        notes: NotesArgs,
    },

    /// Parse a saved generation response and render it
    Parse {
        /// File holding the raw response (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Reporter name (defaults to newspaper.default_author)
        #[arg(short, long)]
        author: Option<String>,

        /// Publication date, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Output layout
        #[arg(short, long, value_enum, default_value_t = RenderFormat::Text)]
        format: RenderFormat,
    },

    /// Launch the interactive article form
    Tui,

    /// Check provider configuration
    Doctor {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Event and interview notes, given inline or from files
#[derive(Args, Debug, Clone)]
pub struct NotesArgs {
    /// Event notes: who, when, where, what
    #[arg(short, long, conflicts_with = "event_file")]
    pub event: Option<String>,

    /// Read event notes from a file
    #[arg(long, value_name = "PATH")]
    pub event_file: Option<PathBuf>,

    /// Interview subject and remarks
    #[arg(short, long, conflicts_with = "interview_file")]
    pub interview: Option<String>,

    /// Read interview notes from a file
    #[arg(long, value_name = "PATH")]
    pub interview_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
