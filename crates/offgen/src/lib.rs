//! # offgen
//!
//! Offset header consolidation and code generation.
//!
//! This crate provides:
//! - Recursive discovery of offset headers (`*.hpp`)
//! - Parsing of `constexpr std::ptrdiff_t` declarations grouped by namespace
//! - Merging of per-file results into one ordered offset table
//! - Emitters for the JSON data file, the stub header and the assignment source
//!
//! The [`Generator`] ties these together into the full regeneration run.

pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod name;
pub mod offset;
pub mod scan;

pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use error::{Error, Result};
pub use export::{AssignmentEmitter, CodeEmitter, StubEmitter, load_offsets, save_offsets};
pub use generator::{GeneratedFiles, Generator};
pub use name::normalize_name;
pub use offset::{OffsetRecord, OffsetTable, aggregate, parse_header_file, parse_header_str};
pub use scan::{collect_offsets, scan_headers};
