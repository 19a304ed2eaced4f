//! Tracing subscriber setup

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber
///
/// Stdout stays reserved for JSON output.
pub fn init_tracing(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(verbose, env.as_deref());

    // a second install (tests) is not an error worth reporting
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Filter from `RUST_LOG` (default `warn`), raised to `debug` by `verbose`
///
/// Target directives from the environment survive the raise.
fn build_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    let filter = env
        .filter(|directives| !directives.trim().is_empty())
        .map_or_else(|| EnvFilter::new("warn"), EnvFilter::new);
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}
