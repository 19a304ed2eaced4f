//! Checklist CLI
//!
//! Command line front end for the Checklist Synthesis Engine:
//! - `generate`: one checklist from `--text`, `--file` or stdin
//! - `call`: one `{ "tool", "input" }` envelope
//! - `serve`: JSON-lines tool calls over stdin/stdout
//! - `manifest` / `health`: service metadata
//!
//! All JSON goes to stdout; logs go to stderr.

#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::build_cli;
pub use commands::{
    run_call, run_generate, run_health, run_manifest, run_serve, GenerateArgs, Outcome, ServeStats,
};
pub use config::{load_config, parse_config};
pub use logging::init_tracing;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
