//! CLI Tooling
//!
//! Command-line access to the asset engine and the backend's read-only endpoints.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
