//! CodeEmitter trait definition

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::offset::OffsetTable;

/// Trait for generated source artifacts
///
/// Implementors only render text; writing is shared.
pub trait CodeEmitter {
    /// Render the artifact for the given table
    fn render(&self, offsets: &OffsetTable) -> String;

    /// Render and write the artifact, replacing any existing file
    fn write_to(&self, path: &Path, offsets: &OffsetTable) -> Result<()> {
        let content = self.render(offsets);
        fs::write(path, &content)?;
        debug!("Wrote {} ({} bytes)", path.display(), content.len());
        Ok(())
    }
}
