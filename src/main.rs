use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tsmanifest::Cli;
use tsmanifest::handlers::run_generate;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Stdout carries only the manifest blob; all diagnostics go to stderr.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    run_generate(&cli)
}
