use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use cite_config::Config;
use cite_history::FileStore;
use cite_lookup::ModelLookup;
use cite_provider_gemini::GeminiModel;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod events;
pub mod profile;
pub mod repl;
pub mod session;
pub mod ui;

#[cfg(test)]
mod tests;

use self::cli::{Cli, CliCommand};
use self::events::{Command, handle_command};
use self::session::{Session, SubmitOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = profile::load_config(cli.config.as_deref())?;
    if let Some(path) = cli.history_file {
        config.history.path = path;
    }
    if let Some(lang) = cli.lang {
        config.ui.default_language = lang;
    }

    let command = cli.command.unwrap_or(CliCommand::Repl);

    if let CliCommand::SaveProfile { path, name } = &command {
        profile::save_profile(path, name, config)?;
        return Ok(ExitCode::SUCCESS);
    }

    let session = build_session(&config)?;
    let mut stdout = io::stdout();

    match command {
        CliCommand::Lookup { isbn, copy } => match session.submit(&isbn).await {
            SubmitOutcome::Found(record) => {
                write!(stdout, "{}", ui::render_result(&record))?;
                if copy {
                    handle_command(&session, Command::Copy(None), &mut stdout).await?;
                }
            }
            SubmitOutcome::Failed(message) => {
                write!(stdout, "{}", ui::render_error(&message))?;
                return Ok(ExitCode::FAILURE);
            }
            SubmitOutcome::Ignored => {
                eprintln!("ISBN is empty");
                return Ok(ExitCode::FAILURE);
            }
        },
        CliCommand::History => {
            handle_command(&session, Command::ShowHistory, &mut stdout).await?;
        }
        CliCommand::Show { selector, copy } => {
            handle_command(&session, Command::Select(selector), &mut stdout).await?;
            if copy {
                handle_command(&session, Command::Copy(None), &mut stdout).await?;
            }
        }
        CliCommand::Copy { selector } => {
            handle_command(&session, Command::Copy(Some(selector)), &mut stdout).await?;
        }
        CliCommand::Clear => {
            handle_command(&session, Command::Clear, &mut stdout).await?;
        }
        CliCommand::Repl => repl::run(&session).await?,
        // Written above, before any session exists
        CliCommand::SaveProfile { .. } => {}
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_session(config: &Config) -> anyhow::Result<Session> {
    if config.lookup.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set, lookups will fail");
    }

    let model = GeminiModel::new(
        config.lookup.api_key.clone(),
        config.lookup.api_url.clone(),
        config.lookup.model.clone(),
        Duration::from_secs(config.lookup.timeout_seconds),
    )?;
    let lookup = ModelLookup::new(model);
    let meta = lookup.metadata();
    tracing::info!(
        "Using {} model {} (search grounding: {})",
        meta.name,
        meta.model,
        meta.search_grounding
    );

    let store = FileStore::new(config.history.path.clone());
    tracing::debug!("History file: {}", store.path().display());

    Ok(Session::new(
        Arc::new(lookup),
        Arc::new(store),
        config.ui.default_language,
    ))
}
