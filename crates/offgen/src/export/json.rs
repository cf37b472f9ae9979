//! JSON data file
//!
//! Indented with four spaces. Values stay as the hex text written in the headers.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::error::Result;
use crate::offset::OffsetTable;

const INDENT: &[u8] = b"    ";

/// Write the offset table as indented JSON
pub fn write_json<W: Write>(writer: W, offsets: &OffsetTable) -> Result<()> {
    let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    offsets.serialize(&mut ser)?;
    Ok(())
}

/// Serialize the offset table as indented JSON
pub fn to_json_string(offsets: &OffsetTable) -> Result<String> {
    let mut buf = Vec::new();
    write_json(&mut buf, offsets)?;
    let content = String::from_utf8(buf)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(content)
}

/// Save the offset table to a JSON file
pub fn save_offsets<P: AsRef<Path>>(path: P, offsets: &OffsetTable) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(&mut writer, offsets)?;
    writer.flush()?;
    debug!("Saved {} namespaces to {}", offsets.len(), path.display());
    Ok(())
}

/// Load an offset table from a JSON file
pub fn load_offsets<P: AsRef<Path>>(path: P) -> Result<OffsetTable> {
    let content = fs::read_to_string(path)?;
    let offsets = serde_json::from_str(&content)?;
    Ok(offsets)
}
