//! Aggregation layer.
//!
//! Turns the ordered candidate list into the final aggregate list:
//! - Evaluates each candidate through the evaluation capability
//! - Invokes callable exports exactly once, waiting for completion
//! - Normalizes the three export shapes into flat entries
//! - Appends entries in candidate order
//!
//! Any evaluation failure aborts the whole run; a partial manifest is
//! never produced.

pub mod collector;

pub use collector::{EntryCollector, aggregate};
