//! mailtpl CLI - edit auth mailer templates from the terminal
//!
//! Lists the template catalog, shows stored values and updates subjects and
//! bodies through the same form pipeline as the desktop editor.

mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;
use mailtpl_core::config::EditorConfig;

use crate::cli::{Cli, Commands};
use crate::commands::completions::run_completions;
use crate::commands::set::{run_set, SetRequest};
use crate::commands::show::run_show;
use crate::commands::templates::run_templates;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mailtpl=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = EditorConfig::from_env().with_overrides(cli.db_path, cli.templates);

    match cli.command {
        Commands::Templates { json } => run_templates(&config, json)?,
        Commands::Show { id, json } => run_show(&config, &id, json).await?,
        Commands::Set {
            id,
            assignments,
            body_file,
            edit_body,
        } => {
            let request = SetRequest {
                assignments,
                body_file,
                edit_body,
            };
            run_set(&config, &id, request).await?;
        }
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}
