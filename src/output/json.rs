//! JSON forest output writer.
//!
//! Writes a forest as nested `{content, depth, children}` objects.

use super::{ensure_parent_dir, validate_path};
use crate::parser::{TraceForest, TraceTree};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a forest to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_forest(
    forest: &TraceForest,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing trace JSON to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, &forest.to_trees())
        .map_err(OutputError::SerializationFailed)?;

    debug!(
        "Trace JSON written ({} trees, {} nodes)",
        forest.roots().len(),
        forest.len()
    );

    Ok(())
}

/// Read a forest back from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_forest(input_path: impl AsRef<Path>) -> Result<TraceForest, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading trace JSON from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let trees: Vec<TraceTree> =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    Ok(TraceForest::from_trees(&trees))
}
