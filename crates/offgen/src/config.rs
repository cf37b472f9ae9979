//! Generator configuration.
//!
//! The defaults reproduce the stock layout: headers under `A2X/`, artifacts
//! `offsets.json`, `offsets.hpp` and `set_offsets.cpp` in the working directory.

use std::path::PathBuf;

use crate::export::{AssignmentEmitter, StubEmitter};

/// Configuration for a generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root directory scanned for offset headers
    pub input_dir: PathBuf,
    /// Header file extension, without the dot
    pub extension: String,
    /// Directory receiving the three artifacts
    pub output_dir: PathBuf,
    pub json_file: String,
    pub header_file: String,
    pub source_file: String,
    /// Field type used in the stub header
    pub field_type: String,
    /// Runtime lookup function called by the assignment source
    pub lookup_fn: String,
    /// First argument passed to the lookup function
    pub context: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let stub = StubEmitter::default();
        let assign = AssignmentEmitter::default();
        Self {
            input_dir: PathBuf::from("A2X"),
            extension: crate::scan::DEFAULT_EXTENSION.to_string(),
            output_dir: PathBuf::from("."),
            json_file: "offsets.json".to_string(),
            header_file: "offsets.hpp".to_string(),
            source_file: "set_offsets.cpp".to_string(),
            field_type: stub.field_type,
            lookup_fn: assign.lookup_fn,
            context: assign.context,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration builder
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_file)
    }

    pub fn header_path(&self) -> PathBuf {
        self.output_dir.join(&self.header_file)
    }

    pub fn source_path(&self) -> PathBuf {
        self.output_dir.join(&self.source_file)
    }

    pub fn stub_emitter(&self) -> StubEmitter {
        StubEmitter::new(&self.field_type)
    }

    pub fn assignment_emitter(&self) -> AssignmentEmitter {
        AssignmentEmitter::new(&self.lookup_fn, &self.context)
    }
}

/// Builder for GeneratorConfig
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    input_dir: Option<PathBuf>,
    extension: Option<String>,
    output_dir: Option<PathBuf>,
    field_type: Option<String>,
    lookup_fn: Option<String>,
    context: Option<String>,
}

impl GeneratorConfigBuilder {
    /// Set the directory scanned for headers
    pub fn input_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.input_dir = Some(path.into());
        self
    }

    /// Set the header extension (a leading dot is ignored)
    pub fn extension<S: AsRef<str>>(mut self, extension: S) -> Self {
        self.extension = Some(extension.as_ref().trim_start_matches('.').to_string());
        self
    }

    /// Set the directory the artifacts are written to
    pub fn output_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    pub fn field_type<S: Into<String>>(mut self, field_type: S) -> Self {
        self.field_type = Some(field_type.into());
        self
    }

    pub fn lookup_fn<S: Into<String>>(mut self, lookup_fn: S) -> Self {
        self.lookup_fn = Some(lookup_fn.into());
        self
    }

    pub fn context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> GeneratorConfig {
        let default = GeneratorConfig::default();
        GeneratorConfig {
            input_dir: self.input_dir.unwrap_or(default.input_dir),
            extension: self.extension.unwrap_or(default.extension),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            field_type: self.field_type.unwrap_or(default.field_type),
            lookup_fn: self.lookup_fn.unwrap_or(default.lookup_fn),
            context: self.context.unwrap_or(default.context),
            ..default
        }
    }
}
