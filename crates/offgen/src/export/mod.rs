//! Output artifacts.
//!
//! - **JSON data file**: the offset table as nested objects (`offsets.json`)
//! - **Stub header**: one struct per namespace with uninitialized fields (`offsets.hpp`)
//! - **Assignment source**: lookup calls that fill the stub fields at runtime (`set_offsets.cpp`)

mod assign;
mod format;
mod json;
mod stub;

pub use assign::AssignmentEmitter;
pub use format::CodeEmitter;
pub use json::{load_offsets, save_offsets, to_json_string, write_json};
pub use stub::StubEmitter;
