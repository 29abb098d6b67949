//! pob-cli - Command-line entry point for proof-of-bandwidth challenges
//!
//! Parses flags into a challenge request and API configuration, loads the
//! wallet key, and hands everything to the `pob-client` pipeline.

pub mod commands;
pub mod key;

pub use commands::{print_outcome, run, Cli, CliError};
pub use key::load_key_file;
