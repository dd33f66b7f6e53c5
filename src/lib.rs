pub mod aggregator;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod evaluator;
pub mod handlers;
pub mod output;

pub use aggregator::{EntryCollector, aggregate};
pub use cli::Cli;
pub use discovery::{DEFAULT_MAX_DEPTH, Walker, WalkerConfig};
pub use error::{ManifestError, Result};
pub use evaluator::{Evaluate, Export, Produced, SubprocessEvaluator, Thunk};
pub use output::{Manifest, write_manifest};
