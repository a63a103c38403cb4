//! newsdesk - School newspaper articles from event and interview notes
//!
//! Entry point for the newsdesk CLI application.

use anyhow::Result;
use clap::Parser;

use newsdesk::cli::{Cli, Commands};
use newsdesk::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    newsdesk::logging::init(&cli)?;

    match cli.command {
        Commands::Completions { shell } => {
            newsdesk::cli::commands::print_completions(shell);
        }
        Commands::Prompt { notes } => {
            newsdesk::cli::commands::print_prompt(&notes)?;
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            // Execute command
            match command {
                Commands::Write {
                    notes,
                    author,
                    date,
                    image,
                    format,
                    output,
                } => {
                    newsdesk::cli::commands::write_article(
                        &settings, &notes, author, date, image, format, output,
                    )
                    .await?;
                }
                Commands::Parse {
                    file,
                    author,
                    date,
                    format,
                } => {
                    newsdesk::cli::commands::parse_response(&settings, file, author, date, format)?;
                }
                Commands::Tui => {
                    newsdesk::tui::run(&settings).await?;
                }
                Commands::Doctor { json } => {
                    newsdesk::cli::commands::run_doctor(&settings, json).await?;
                }
                Commands::Config(config_cmd) => {
                    newsdesk::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } | Commands::Prompt { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
