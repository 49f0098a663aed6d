use std::process::ExitCode;

use clap::Parser;
use modscan::cli::{Arguments, ExitStatus, run_cli};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Scanner diagnostics go through `tracing`; `--verbose` enables them
/// without requiring RUST_LOG.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "modscan=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
