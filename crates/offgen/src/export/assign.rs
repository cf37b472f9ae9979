//! Assignment source emitter
//!
//! Produces statements like
//! `client.dwEntityList = findOffsetByName(j, "client", "dwEntityList");`
//! that fill the stub header fields at program startup. The lookup function
//! and its context argument belong to the consuming program.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::name::normalize_name;
use crate::offset::OffsetTable;

use super::format::CodeEmitter;
use super::json::load_offsets;

/// Default runtime lookup function
pub const DEFAULT_LOOKUP_FN: &str = "findOffsetByName";

/// Default first argument passed to the lookup function
pub const DEFAULT_CONTEXT: &str = "j";

#[derive(Debug, Clone)]
pub struct AssignmentEmitter {
    pub lookup_fn: String,
    pub context: String,
}

impl Default for AssignmentEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKUP_FN, DEFAULT_CONTEXT)
    }
}

impl AssignmentEmitter {
    pub fn new(lookup_fn: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            lookup_fn: lookup_fn.into(),
            context: context.into(),
        }
    }

    /// Render from a previously saved JSON data file
    pub fn render_from_file<P: AsRef<Path>>(&self, json_path: P) -> Result<String> {
        let offsets = load_source_table(json_path.as_ref())?;
        Ok(self.render(&offsets))
    }

    /// Render from a saved JSON data file and write the result to `path`
    pub fn write_from_file<P: AsRef<Path>>(&self, json_path: P, path: &Path) -> Result<()> {
        let offsets = load_source_table(json_path.as_ref())?;
        self.write_to(path, &offsets)
    }
}

fn load_source_table(json_path: &Path) -> Result<OffsetTable> {
    debug!("Generating assignments from {}", json_path.display());
    load_offsets(json_path)
}

impl CodeEmitter for AssignmentEmitter {
    fn render(&self, offsets: &OffsetTable) -> String {
        let mut lines = Vec::new();

        for (namespace, names) in offsets.namespaces() {
            lines.push(format!("// Assignments for {}", namespace));
            lines.push(format!("// {} Offsets", namespace));

            for name in names.keys() {
                lines.push(format!(
                    "{}.{} = {}({}, \"{}\", \"{}\");",
                    namespace,
                    normalize_name(name),
                    self.lookup_fn,
                    self.context,
                    namespace,
                    name
                ));
            }

            lines.push(String::new());
        }

        lines.join("\n")
    }
}
