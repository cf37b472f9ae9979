//! Offset header parser.
//!
//! Scans a header line by line, tracking the most recently opened namespace.
//! Closing braces are not tracked: offsets after a namespace block ends are
//! still attributed to it until the next `namespace X {` line.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::OffsetTable;
use crate::error::Result;

static NAMESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"namespace\s+(\w+)\s*\{").expect("valid namespace pattern"));

static OFFSET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"constexpr\s+std::ptrdiff_t\s+(\w+)\s*=\s*(0x[0-9a-fA-F]+);")
        .expect("valid offset pattern")
});

/// Parse header text into an offset table
pub fn parse_header_str(content: &str) -> OffsetTable {
    let mut table = OffsetTable::new();
    let mut current_namespace: Option<String> = None;

    for line in content.lines() {
        if let Some(caps) = NAMESPACE_PATTERN.captures(line) {
            let namespace = &caps[1];
            table.ensure_namespace(namespace);
            current_namespace = Some(namespace.to_string());
        }

        let Some(namespace) = current_namespace.as_deref() else {
            continue;
        };

        if let Some(caps) = OFFSET_PATTERN.captures(line) {
            table.insert(namespace, &caps[1], &caps[2]);
        }
    }

    table.prune_empty();
    table
}

/// Read and parse a single header file
pub fn parse_header_file<P: AsRef<Path>>(path: P) -> Result<OffsetTable> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let table = parse_header_str(&content);

    debug!(
        "Parsed {}: {} namespaces, {} offsets",
        path.display(),
        table.len(),
        table.offset_count()
    );

    Ok(table)
}
