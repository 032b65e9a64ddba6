//! Command-line front end for the Quill scanner and parser
//!
//! ## Commands
//!
//! - `lex <file>` - Dump the token stream
//! - `parse <file>` - Dump the statement tree
//! - `check <file>` - Report whether the file parses
//!
//! A bare `quill <file>` runs `check`. Exit status is 0 when the file scans and parses, 1 on a read or syntax
//! error, and 2 when no input was given.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, Subcommand};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// Unreadable input, or a lexical or syntax error
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Nothing to scan
    pub const USAGE: ExitCode = ExitCode(2);
}

/// A failed command: the rendered report and the status to exit with.
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Scanner and declaration parser for the Quill language
#[derive(Parser, Debug)]
#[command(name = "quill", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check when no subcommand is given
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the tokens scanned from a file
    Lex {
        /// Source file to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Keep whitespace and end-of-line tokens
        #[arg(long)]
        trivia: bool,
        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the statement tree parsed from a file
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that a file parses
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Parse the process arguments, run the command, and exit with its status.
pub fn run() {
    let exit_code = match execute(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            err.exit_code
        }
    };
    if exit_code != ExitCode::SUCCESS {
        process::exit(exit_code.0);
    }
}

/// Dispatch a parsed command line.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match (cli.command, cli.file) {
        (Some(Command::Lex { file, trivia, json }), _) => commands::lex_file(&file.to_string_lossy(), trivia, json),
        (Some(Command::Parse { file, json }), _) => commands::parse_file(&file.to_string_lossy(), json),
        (Some(Command::Check { file }), _) | (None, Some(file)) => commands::check_file(&file.to_string_lossy()),
        (None, None) => Err(CliError::new(Cli::command().render_help().to_string(), ExitCode::USAGE)),
    }
}

// ============================================================================
// Tests
// ============================================================================
