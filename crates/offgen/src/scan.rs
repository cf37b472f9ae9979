//! Header discovery and aggregation.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::Result;
use crate::offset::{OffsetTable, aggregate, parse_header_file};

/// Default header file extension
pub const DEFAULT_EXTENSION: &str = "hpp";

/// Recursively find files under `root` with the given extension
///
/// The walk is lazy and follows symlinks. A missing root, unreadable entry
/// or symlink loop shows up as an `Err` item; files are yielded in whatever
/// order the file system returns.
pub fn scan_headers<'a>(
    root: impl AsRef<Path>,
    extension: &'a str,
) -> impl Iterator<Item = Result<PathBuf>> + 'a {
    WalkDir::new(root).follow_links(true).into_iter().filter_map(move |entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => return Some(Err(e.into())),
        };

        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == extension) {
            Some(Ok(entry.into_path()))
        } else {
            None
        }
    })
}

/// Scan `root`, parse every header and merge the results
pub fn collect_offsets<P: AsRef<Path>>(root: P, extension: &str) -> Result<OffsetTable> {
    let root = root.as_ref();

    let tables = scan_headers(root, extension)
        .map(|path| {
            let path = path?;
            debug!("Found header: {}", path.display());
            parse_header_file(&path)
        })
        .collect::<Result<Vec<_>>>()?;

    let file_count = tables.len();
    if file_count == 0 {
        warn!("No .{} files found under {}", extension, root.display());
    }

    let offsets = aggregate(tables);
    info!(
        "Collected {} offsets in {} namespaces from {} files",
        offsets.offset_count(),
        offsets.len(),
        file_count
    );

    Ok(offsets)
}
