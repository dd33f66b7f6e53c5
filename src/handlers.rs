//! CLI command handlers, separated from main.rs to enable unit testing.

use crate::aggregator::aggregate;
use crate::cli::Cli;
use crate::discovery::{Walker, WalkerConfig};
use crate::evaluator::{Evaluate, SubprocessEvaluator};
use crate::output::{Manifest, write_manifest};
use colored::Colorize;
use std::io;
use std::process::ExitCode;
use tracing::info;

/// Run the full generate pipeline and write the manifest to stdout.
pub fn run_generate(cli: &Cli) -> ExitCode {
    let evaluator = match cli.runtime {
        Some(ref program) => SubprocessEvaluator::with_program(program.as_str()),
        None => SubprocessEvaluator::new(),
    };

    let manifest = match generate(cli, &evaluator) {
        Ok(manifest) => manifest,
        Err(err) => {
            eprintln!("{} {}", "Error:".red(), err);
            return ExitCode::from(2);
        }
    };

    let mut stdout = io::stdout().lock();
    if let Err(err) = write_manifest(&mut stdout, &manifest) {
        eprintln!("{} {}", "Error:".red(), err);
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}

/// Discovery then aggregation. The manifest only exists once every
/// candidate completed; an abort leaves nothing for the output stream.
pub fn generate(cli: &Cli, evaluator: &dyn Evaluate) -> crate::Result<Manifest> {
    info!(root = %cli.root.display(), max_depth = cli.max_depth, "discovering candidates");
    let walker = Walker::new(WalkerConfig::default().with_max_depth(cli.max_depth));
    let candidates = walker.discover(&cli.root)?;

    if candidates.is_empty() {
        eprintln!(
            "No candidate modules found under {}",
            cli.root.display()
        );
    }

    info!(candidates = candidates.len(), "aggregating exports");
    let items = aggregate(&candidates, evaluator)?;
    Ok(Manifest::new(items))
}
