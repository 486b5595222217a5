//! # Roster CLI Module
//!
//! This module implements the command line interface for Roster.
//!
//! ## Available Commands
//!
//! - `shell` - Interactive menu (default when no command is given)
//! - `auto` - Save a one-employee demonstration roster
//! - `show` - Print a saved roster, optionally sorted or as JSON
//!
//! Command words are matched case-insensitively (`auto`, `AUTO`, `Auto`).

mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use roster_core::{RosterError, SortKey};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Settings;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Roster - interactive employee record manager
///
/// Keeps passport, salary and rated characteristics for each employee,
/// and saves the whole roster to a single file.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu
    Shell {
        /// Roster file to load before the first prompt
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Add the demonstration employee and save without prompting
    Auto {
        /// Destination file (defaults to the configured auto destination)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a saved roster
    Show {
        /// Roster file to read
        #[arg(short, long)]
        file: PathBuf,

        /// Sort order (passport, salary); insertion order when omitted
        #[arg(short, long)]
        sort: Option<SortKey>,

        /// Output in JSON format (for programmatic access)
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse arguments after folding the command word to lowercase.
    pub fn parse_normalized<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_args(args))
    }

    /// Fallible form of [`Cli::parse_normalized`].
    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// Lowercase the first positional argument when it names a subcommand in
/// any casing. Option values (`--config AUTO`) and later arguments
/// (`show -f AUTO`) are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let command = Cli::command();
    let names: Vec<&str> = command.get_subcommands().map(|c| c.get_name()).collect();

    let mut takes_value = false;
    for arg in args.iter_mut().skip(1) {
        let Some(text) = arg.to_str() else {
            break;
        };
        if takes_value {
            takes_value = false;
            continue;
        }
        if text == "-c" || text == "--config" {
            takes_value = true;
            continue;
        }
        if text.starts_with('-') {
            continue;
        }
        if let Some(name) = names.iter().find(|name| name.eq_ignore_ascii_case(text)) {
            *arg = OsString::from(*name);
        }
        break;
    }
    args
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli, settings: &Settings) -> Result<(), RosterError> {
    match cli.command {
        Some(Commands::Shell { file }) => cmd_shell(file.as_deref()),
        Some(Commands::Auto { output }) => {
            let destination = output.unwrap_or_else(|| settings.auto.destination.clone());
            cmd_auto(&destination)
        }
        Some(Commands::Show { file, sort, json }) => cmd_show(&file, sort, json),
        None => {
            // No subcommand - interactive shell by default
            cmd_shell(None)
        }
    }
}
