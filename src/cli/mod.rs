//! CLI module for fastfilter
//!
//! Provides command-line interface for:
//! - filter: one request in, one response out
//! - serve: answer request lines until EOF
//! - ops: list registered operations

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{filter, operation_names, ops, run, run_command, serve, Session};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use io::{error_response, ok_response, read_request, read_requests, write_line};
