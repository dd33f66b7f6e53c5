//! All-or-nothing manifest writing.

use crate::error::ManifestError;
use crate::output::Manifest;
use std::io::Write;

/// Serialize the whole envelope first, then write it in one piece, so a
/// failed serialization never leaves a partial blob on the stream.
pub fn write_manifest(writer: &mut dyn Write, manifest: &Manifest) -> crate::Result<()> {
    let blob = serde_json::to_string_pretty(manifest)?;
    writer.write_all(blob.as_bytes()).map_err(ManifestError::Write)?;
    writer.write_all(b"\n").map_err(ManifestError::Write)?;
    writer.flush().map_err(ManifestError::Write)
}
