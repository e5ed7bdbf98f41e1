//! Tooling version information.
//!
//! The CLI `--version` output and the language server's `serverInfo` both read this constant, so they always
//! agree.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The TAL tooling version string (for example, `0.1.0-alpha.4`).
pub const TAL_VERSION: &str = env!("CARGO_PKG_VERSION");
