//! CLI command implementations

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::article::{self, ArticleImage, ArticleMeta, ArticleRequest, RenderFormat};
use crate::cli::args::{Cli, ConfigCommand, NotesArgs};
use crate::config::Settings;
use crate::llm::{build_article_prompt, build_provider};
use crate::newsroom::{self, Newsroom};
use crate::{APP_NAME, VERSION};

/// Write an article from notes and print or save the rendered layout
pub async fn write_article(
    settings: &Settings,
    notes: &NotesArgs,
    author: Option<String>,
    date: Option<NaiveDate>,
    image: Option<PathBuf>,
    format: RenderFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let request = read_notes(notes)?;
    newsroom::validate(&request)?;

    let image = image
        .map(ArticleImage::load)
        .transpose()
        .context("Failed to load article image")?;
    let meta = build_meta(settings, author, date).with_image(image);

    let provider = build_provider(settings)?;
    let mut newsroom = Newsroom::new(provider);

    eprintln!("Writing article...");
    let article = match newsroom.submit(&request).await {
        Ok(article) => article,
        Err(err) => {
            if err.is_retryable() {
                eprintln!("Run the same command again to retry.");
            }
            return Err(err.into());
        }
    };

    let content = article::render(article, &meta, &settings.newspaper.masthead, format)?;
    emit(&content, output.as_deref())
}

/// Print the generation prompt for the given notes
pub fn print_prompt(notes: &NotesArgs) -> Result<()> {
    let request = read_notes(notes)?;
    newsroom::validate(&request)?;

    println!(
        "{}",
        build_article_prompt(&request.event_notes, &request.interview_notes)
    );
    Ok(())
}

/// Parse a saved generation response and render it
pub fn parse_response(
    settings: &Settings,
    file: Option<PathBuf>,
    author: Option<String>,
    date: Option<NaiveDate>,
    format: RenderFormat,
) -> Result<()> {
    let raw = match &file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read response file: {}", path.display()))?,
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read response from stdin")?;
            raw
        }
    };

    let article = article::parse(&raw)?;
    let meta = build_meta(settings, author, date);

    let content = article::render(&article, &meta, &settings.newspaper.masthead, format)?;
    emit(&content, None)
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if shown.has_api_key() {
                shown.llm.api_key = "********".to_string();
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Print completion script for the requested shell to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let command_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, command_name, &mut io::stdout());
}

#[derive(Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: &'static str,
    detail: String,
}

#[derive(Serialize)]
struct DoctorReport {
    provider: String,
    model: String,
    endpoint: String,
    checks: Vec<DoctorCheck>,
    notes: Vec<String>,
}

/// Run diagnostic checks to help troubleshoot provider setup.
pub async fn run_doctor(settings: &Settings, json: bool) -> Result<()> {
    let report = collect_doctor_report(settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} doctor ({})", APP_NAME, VERSION);
    println!("provider: {}", report.provider);
    println!("model: {}", report.model);
    println!("endpoint: {}", report.endpoint);
    println!();

    for check in &report.checks {
        println!("{:<10} {:<8} {}", check.name, check.status, check.detail);
    }

    if !report.notes.is_empty() {
        println!();
        for note in &report.notes {
            println!("{}", note);
        }
    }

    Ok(())
}

fn collect_doctor_report(settings: &Settings) -> DoctorReport {
    let mut notes = Vec::new();

    let api_key_ok = settings.has_api_key();
    if !api_key_ok {
        notes.push(
            "hint: set llm.api_key in the config file or export NEWSDESK_GEMINI_API_KEY."
                .to_string(),
        );
    }

    let (provider_status, provider_detail) = match build_provider(settings) {
        Ok(provider) => ("ok", format!("client ready ({})", provider.name())),
        Err(e) => ("error", format!("{:#}", e)),
    };

    let endpoint = if settings.llm.endpoint.trim().is_empty() {
        "(default)".to_string()
    } else {
        settings.llm.endpoint.trim().to_string()
    };

    DoctorReport {
        provider: settings.llm.provider.clone(),
        model: settings.llm.model.clone(),
        endpoint,
        checks: vec![
            DoctorCheck {
                name: "api-key",
                status: if api_key_ok { "ok" } else { "missing" },
                detail: "required for article generation".to_string(),
            },
            DoctorCheck {
                name: "provider",
                status: provider_status,
                detail: provider_detail,
            },
        ],
        notes,
    }
}

// Helper functions

fn read_notes(notes: &NotesArgs) -> Result<ArticleRequest> {
    let event_notes = read_text(notes.event.as_deref(), notes.event_file.as_deref())?;
    let interview_notes = read_text(notes.interview.as_deref(), notes.interview_file.as_deref())?;
    Ok(ArticleRequest::new(event_notes, interview_notes))
}

fn read_text(inline: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text.to_string()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read notes file: {}", path.display())),
        (None, None) => Ok(String::new()),
    }
}

fn build_meta(settings: &Settings, author: Option<String>, date: Option<NaiveDate>) -> ArticleMeta {
    let author = author.unwrap_or_else(|| settings.newspaper.default_author.clone());
    let meta = ArticleMeta::new(author);
    match date {
        Some(date) => meta.with_date(date),
        None => meta,
    }
}

fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        println!("Saved to: {}", path.display());
    } else {
        print!("{}", content);
        if !content.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
