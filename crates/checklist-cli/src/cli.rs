//! Command line definition

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Build the `checklist` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("checklist")
        .version(checklist_core::VERSION)
        .about("Turn instructional text into a verifiable agent checklist")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML file with engine settings"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log pipeline stages to stderr"),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate a checklist from text")
                .arg(
                    Arg::new("text")
                        .long("text")
                        .conflicts_with("file")
                        .help("Source text (defaults to stdin)"),
                )
                .arg(
                    Arg::new("file")
                        .long("file")
                        .value_parser(value_parser!(PathBuf))
                        .help("Read source text from a file"),
                )
                .arg(
                    Arg::new("context")
                        .long("context")
                        .help("Context echoed in the output"),
                )
                .arg(
                    Arg::new("max-steps")
                        .long("max-steps")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64))
                        .help("Maximum number of steps (clamped to 3..=12)"),
                )
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Pretty-print the JSON output"),
                ),
        )
        .subcommand(
            Command::new("call")
                .about("Handle one tool-call envelope")
                .arg(
                    Arg::new("file")
                        .long("file")
                        .value_parser(value_parser!(PathBuf))
                        .help("Read the envelope from a file (defaults to stdin)"),
                ),
        )
        .subcommand(Command::new("serve").about("Serve JSON-lines tool calls over stdin/stdout"))
        .subcommand(Command::new("manifest").about("Print the tool manifest"))
        .subcommand(Command::new("health").about("Print the health report"))
}
