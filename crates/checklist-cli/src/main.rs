use anyhow::{Context, Result};
use checklist_cli::{
    build_cli, init_tracing, load_config, run_call, run_generate, run_health, run_manifest,
    run_serve, GenerateArgs, Outcome,
};
use checklist_core::ChecklistEngine;
use checklist_service::ChecklistService;
use std::io;
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let config = load_config(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let engine = ChecklistEngine::with_config(config).context("invalid engine configuration")?;
    let service = ChecklistService::with_engine(engine);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = match matches.subcommand() {
        Some(("generate", args)) => {
            let generate = GenerateArgs {
                text: args.get_one::<String>("text").map(String::as_str),
                file: args.get_one::<PathBuf>("file").map(PathBuf::as_path),
                context: args.get_one::<String>("context").map(String::as_str),
                max_steps: args.get_one::<i64>("max-steps").copied(),
                pretty: args.get_flag("pretty"),
            };
            run_generate(&service, &generate, &mut io::stdin().lock(), &mut out)?
        }
        Some(("call", args)) => {
            let file = args.get_one::<PathBuf>("file").map(PathBuf::as_path);
            run_call(&service, file, &mut io::stdin().lock(), &mut out)?
        }
        Some(("serve", _)) => {
            run_serve(&service, io::stdin().lock(), &mut out)?;
            Outcome::Success
        }
        Some(("manifest", _)) => {
            run_manifest(&mut out)?;
            Outcome::Success
        }
        Some(("health", _)) => {
            run_health(&mut out)?;
            Outcome::Success
        }
        _ => Outcome::Success,
    };

    if outcome != Outcome::Success {
        drop(out);
        std::process::exit(outcome.exit_code());
    }
    Ok(())
}
