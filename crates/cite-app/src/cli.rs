use std::path::PathBuf;

use cite_types::Language;
use clap::{Parser, Subcommand};

/// Generate book citations from an ISBN
#[derive(Debug, Parser)]
#[command(name = "isbn-cite", version)]
pub struct Cli {
    /// JSON profile to load instead of environment defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Script for the returned fields: zh-CN or zh-TW
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// History file location
    #[arg(long, global = true)]
    pub history_file: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Look up one ISBN and print its citation
    Lookup {
        isbn: String,
        /// Copy the citation to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Show recent lookups
    History,
    /// Display a history entry by position or id
    Show {
        selector: String,
        #[arg(long)]
        copy: bool,
    },
    /// Copy a history entry's citation
    Copy { selector: String },
    /// Remove all history
    Clear,
    /// Write the effective configuration to a profile file
    SaveProfile {
        path: PathBuf,
        #[arg(long, default_value = "main")]
        name: String,
    },
    /// Interactive prompt
    Repl,
}
