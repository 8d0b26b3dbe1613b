//! Writes the ordered collection as pretty-printed JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::AgendaError;
use crate::model::EnrichedItem;

/// Default name of the output artifact.
pub const DEFAULT_OUTPUT_FILE: &str = "extracted_data.json";

/// Serializes `items` to `path` as a JSON array, four-space indented.
pub fn write_items(path: &Path, items: &[EnrichedItem]) -> Result<(), AgendaError> {
    let mut writer = BufWriter::new(File::create(path)?);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    items.serialize(&mut ser)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
