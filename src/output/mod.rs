//! Output layer.
//!
//! Wraps the aggregate list in the fixed envelope and writes it as one
//! pretty-printed JSON blob. Nothing is streamed: either the whole
//! manifest reaches the stream or nothing does.

pub mod envelope;
pub mod writer;

pub use envelope::{KIND, Manifest, SCHEMA_VERSION};
pub use writer::write_manifest;
