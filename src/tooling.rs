//! Tooling & Integration Layer
//!
//! Command-line presentation of folder listings.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands, OutputFormat};
