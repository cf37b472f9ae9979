//! Stub header emitter

use crate::name::normalize_name;
use crate::offset::OffsetTable;

use super::format::CodeEmitter;

/// Default field type for stub declarations
pub const DEFAULT_FIELD_TYPE: &str = "DWORD";

/// Emits one `inline struct <Ns>Offsets { ... } <Ns>;` per namespace
///
/// Only names are emitted; values are left to the assignment code.
#[derive(Debug, Clone)]
pub struct StubEmitter {
    pub field_type: String,
}

impl Default for StubEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_TYPE)
    }
}

impl StubEmitter {
    pub fn new(field_type: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
        }
    }
}

impl CodeEmitter for StubEmitter {
    fn render(&self, offsets: &OffsetTable) -> String {
        let mut output = String::new();

        for (namespace, names) in offsets.namespaces() {
            let struct_name = normalize_name(namespace);
            output.push_str(&format!("inline struct {}Offsets {{\n", struct_name));
            for name in names.keys() {
                output.push_str(&format!("\t{} {};\n", self.field_type, normalize_name(name)));
            }
            output.push_str(&format!("}} {};\n\n", struct_name));
        }

        output
    }
}
