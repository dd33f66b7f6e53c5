use crate::discovery::DEFAULT_MAX_DEPTH;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tsmanifest",
    version,
    about = "Aggregates default exports of TypeScript modules into a single List manifest",
    long_about = "tsmanifest discovers TypeScript modules under a directory, evaluates each \
                  file's default export through the module runtime, and writes one JSON List \
                  manifest to stdout. Diagnostics go to stderr only."
)]
pub struct Cli {
    /// Root directory to search
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Maximum directory recursion depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Substitute evaluation runtime, invoked as `<PROGRAM> <file>`
    #[arg(long, value_name = "PROGRAM")]
    pub runtime: Option<String>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
