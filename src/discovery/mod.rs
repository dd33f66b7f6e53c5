//! Discovery layer for candidate module enumeration.
//!
//! This module handles:
//! - Depth-bounded directory traversal
//! - Directory pruning (hidden, underscore-prefixed, node_modules)
//! - Candidate file filtering
//!
//! Discovery runs to completion and hands the ordered candidate list to
//! the aggregation layer; nothing here evaluates a file.

pub mod filter;
pub mod walker;

pub use filter::{is_candidate_file, is_searchable_dir};
pub use walker::{DEFAULT_MAX_DEPTH, Walker, WalkerConfig};
