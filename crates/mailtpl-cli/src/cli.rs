use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "mailtpl")]
#[command(about = "Edit auth mailer subjects and email templates")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the auth config database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Optional template catalog JSON file (built-in catalog when omitted)
    #[arg(long, global = true, value_name = "PATH")]
    pub templates: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the email templates in the catalog
    #[command(alias = "ls")]
    Templates {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the stored values of a template
    Show {
        /// Template id, e.g. CONFIRMATION
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update a template's subject, body or other fields
    Set {
        /// Template id, e.g. CONFIRMATION
        id: String,
        /// Field assignments
        #[arg(value_name = "KEY=VALUE")]
        assignments: Vec<String>,
        /// Read the message body from a file
        #[arg(long, value_name = "PATH", conflicts_with = "edit_body")]
        body_file: Option<PathBuf>,
        /// Edit the message body in $VISUAL / $EDITOR
        #[arg(long)]
        edit_body: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
