//! CLI module for the TAL tooling
//!
//! This module provides the command-line interface over the tokenizer and symbol parser.
//!
//! ## Commands
//!
//! - `check <file>` - Report recovery warnings with source context (default action for a bare `<file>`)
//! - `--lex <file>` - Dump the token stream
//! - `--symbols <file>` - Dump the symbol table
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::TAL_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Tokenizer, symbol extraction and diagnostics for TAL source
#[derive(Parser, Debug)]
#[command(name = "tal")]
#[command(version = TAL_VERSION)]
#[command(about = "Tokenizer, symbol extraction and diagnostics for TAL source", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Dump the token stream
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Dump the symbol table
    #[arg(long = "symbols", value_name = "FILE", conflicts_with_all = ["file", "lex_file"])]
    pub symbols_file: Option<PathBuf>,

    /// Keep comment and directive-line tokens in the --lex dump (only valid with --lex)
    #[arg(long = "keep-comments")]
    pub keep_comments: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report tokenizer and symbol parser warnings with source context
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Treat hints (unterminated `!` comments) as warnings too
        #[arg(long)]
        strict: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    if cli.keep_comments && cli.lex_file.is_none() {
        return Err(CliError::failure("--keep-comments only applies to --lex <FILE>"));
    }

    // Dump flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy(), cli.keep_comments);
    }
    if let Some(file) = cli.symbols_file {
        return commands::symbols_file(&file.to_string_lossy());
    }

    match cli.command {
        Some(Command::Check { file, strict }) => commands::check_file(&file.to_string_lossy(), strict),
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                commands::check_file(&file.to_string_lossy(), false)
            } else {
                // No command and no file - show help
                Err(CliError::new(
                    "Usage: tal [FILE] | tal check <FILE> | tal --lex <FILE> | tal --symbols <FILE>",
                    ExitCode::FAILURE,
                ))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["tal", "check", "prog.tal"]).unwrap();
        if let Some(Command::Check { file, strict }) = cli.command {
            assert_eq!(file, PathBuf::from("prog.tal"));
            assert!(!strict);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_check_strict() {
        let cli = Cli::try_parse_from(["tal", "check", "--strict", "prog.tal"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Check { strict: true, .. })));
    }

    #[test]
    fn test_cli_parse_bare_file() {
        let cli = Cli::try_parse_from(["tal", "prog.tal"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("prog.tal")));
    }

    #[test]
    fn test_cli_parse_dump_flags() {
        let cli = Cli::try_parse_from(["tal", "--lex", "prog.tal"]).unwrap();
        assert!(cli.lex_file.is_some());
        assert!(!cli.keep_comments);

        let cli = Cli::try_parse_from(["tal", "--lex", "prog.tal", "--keep-comments"]).unwrap();
        assert!(cli.keep_comments);

        let cli = Cli::try_parse_from(["tal", "--symbols", "prog.tal"]).unwrap();
        assert!(cli.symbols_file.is_some());
    }

    #[test]
    fn test_cli_rejects_conflicting_flags() {
        assert!(Cli::try_parse_from(["tal", "--lex", "a.tal", "--symbols", "b.tal"]).is_err());
    }

    #[test]
    fn test_keep_comments_requires_lex() {
        for args in [
            vec!["tal", "--keep-comments", "a.tal"],
            vec!["tal", "--keep-comments", "check", "a.tal"],
            vec!["tal", "--keep-comments", "--symbols", "a.tal"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            let err = execute(cli).unwrap_err();
            assert_eq!(err.exit_code, ExitCode::FAILURE);
            assert!(err.message.contains("--keep-comments"), "{}", err.message);
        }
    }

    #[test]
    fn test_execute_without_arguments_fails() {
        let cli = Cli::try_parse_from(["tal"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
