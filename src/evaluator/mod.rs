//! Evaluation boundary: the exported-value model and the capability trait.
//!
//! The aggregation layer never knows how a file path turns into a value.
//! `Evaluate` hides the runtime behind a trait; production uses the
//! subprocess evaluator, tests substitute an in-process stub.

pub mod harness;
pub mod subprocess;

pub use harness::Reply;
pub use subprocess::SubprocessEvaluator;

use crate::Result;
use serde_json::Value;
use std::path::Path;

/// The exported value of a module, classified once right after
/// evaluation. No shape checks happen anywhere else.
pub enum Export {
    /// Used as-is; contributes exactly one entry.
    Direct(Value),
    /// Invoked exactly once with no arguments; the produced value is
    /// normalized one level.
    Callable(Box<dyn Thunk>),
    /// Each element contributes one entry, in sequence order. Elements
    /// are not recursively normalized.
    Sequence(Vec<Value>),
}

impl std::fmt::Debug for Export {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Export::Direct(v) => f.debug_tuple("Direct").field(v).finish(),
            Export::Callable(_) => f.debug_tuple("Callable").finish(),
            Export::Sequence(v) => f.debug_tuple("Sequence").field(v).finish(),
        }
    }
}

/// What a callable produced once invoked.
pub enum Produced {
    Direct(Value),
    Sequence(Vec<Value>),
    /// A callable that produced another callable. Terminal: never
    /// re-invoked, only flagged by the collector.
    Callable,
}

/// A deferred zero-argument production.
///
/// Invocation consumes the thunk, so calling it more than once is
/// unrepresentable. `invoke` blocks until any asynchronous production
/// has resolved.
pub trait Thunk {
    fn invoke(self: Box<Self>) -> Result<Produced>;
}

/// Path-to-exported-value capability.
///
/// `Ok(None)` means the file exposes no default export; the caller skips
/// it. An `Err` is a real evaluation failure and is never retried.
pub trait Evaluate {
    fn evaluate(&self, path: &Path) -> Result<Option<Export>>;
}
