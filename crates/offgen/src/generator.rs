//! Full regeneration run.
//!
//! Scan → parse → aggregate → JSON → stub header → assignment source.
//! The assignment source is rendered from the JSON file just written, not
//! from the in-memory table. Any error stops the run; artifacts already
//! written are left in place.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::export::{CodeEmitter, save_offsets};
use crate::scan::collect_offsets;

/// Paths of the artifacts produced by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub json: PathBuf,
    pub header: PathBuf,
    pub source: PathBuf,
}

impl fmt::Display for GeneratedFiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.json.display(),
            self.header.display(),
            self.source.display()
        )
    }
}

pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the whole pipeline and return the written artifact paths
    pub fn run(&self) -> Result<GeneratedFiles> {
        let config = &self.config;
        info!("Scanning {} for .{} files", config.input_dir.display(), config.extension);

        let offsets = collect_offsets(&config.input_dir, &config.extension)?;

        fs::create_dir_all(&config.output_dir)?;
        let files = GeneratedFiles {
            json: config.json_path(),
            header: config.header_path(),
            source: config.source_path(),
        };

        save_offsets(&files.json, &offsets)?;
        config.stub_emitter().write_to(&files.header, &offsets)?;

        config
            .assignment_emitter()
            .write_from_file(&files.json, &files.source)?;

        info!("Generated files: {}", files);
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::load_offsets;
    use crate::offset::parse_header_str;
    use std::path::Path;

    fn generator(input: &Path, output: &Path) -> Generator {
        Generator::new(
            GeneratorConfig::builder()
                .input_dir(input)
                .output_dir(output)
                .build(),
        )
    }

    #[test]
    fn test_single_file_scenario() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(
            input.path().join("foo.hpp"),
            "namespace Foo {\n constexpr std::ptrdiff_t Bar = 0x10;\n}",
        )
        .unwrap();

        let files = generator(input.path(), output.path()).run().unwrap();

        let json = fs::read_to_string(&files.json).unwrap();
        let data: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(data, serde_json::json!({"Foo": {"Bar": "0x10"}}));

        let header = fs::read_to_string(&files.header).unwrap();
        assert!(header.contains("inline struct FooOffsets {"));
        assert!(header.contains("\tDWORD Bar;"));
        assert!(header.contains("} Foo;"));

        let source = fs::read_to_string(&files.source).unwrap();
        assert!(source.contains("Foo.Bar = findOffsetByName(j, \"Foo\", \"Bar\");"));
    }

    #[test]
    fn test_custom_lookup_call() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(
            input.path().join("foo.hpp"),
            "namespace Foo {\n constexpr std::ptrdiff_t Bar = 0x10;\n}",
        )
        .unwrap();

        let config = GeneratorConfig::builder()
            .input_dir(input.path())
            .output_dir(output.path())
            .lookup_fn("lookup")
            .context("ctx")
            .build();
        let files = Generator::new(config).run().unwrap();

        let source = fs::read_to_string(&files.source).unwrap();
        assert!(source.contains("Foo.Bar = lookup(ctx, \"Foo\", \"Bar\");"));
    }

    #[test]
    fn test_no_headers_produces_empty_artifacts() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("notes.txt"), "namespace X {").unwrap();

        let files = generator(input.path(), output.path()).run().unwrap();

        assert_eq!(fs::read_to_string(&files.json).unwrap(), "{}");
        assert_eq!(fs::read_to_string(&files.header).unwrap(), "");
        assert_eq!(fs::read_to_string(&files.source).unwrap(), "");
    }

    #[test]
    fn test_json_round_trip_matches_headers() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let header = "namespace client {\n\
                      constexpr std::ptrdiff_t dwEntityList = 0x01A044C0;\n\
                      constexpr std::ptrdiff_t dwViewMatrix = 0x1a6d260;\n\
                      }\n\
                      namespace engine {\n\
                      constexpr std::ptrdiff_t dwBuildNumber = 0x540BE4;\n\
                      }\n";
        fs::write(input.path().join("offsets.hpp"), header).unwrap();

        let files = generator(input.path(), output.path()).run().unwrap();

        assert_eq!(load_offsets(&files.json).unwrap(), parse_header_str(header));
    }

    #[test]
    fn test_outputs_overwrite_previous_run() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let path = input.path().join("a.hpp");

        fs::write(&path, "namespace A {\nconstexpr std::ptrdiff_t Old = 0x1;\n}").unwrap();
        generator(input.path(), output.path()).run().unwrap();

        fs::write(&path, "namespace A {\nconstexpr std::ptrdiff_t New = 0x2;\n}").unwrap();
        let files = generator(input.path(), output.path()).run().unwrap();

        let header = fs::read_to_string(&files.header).unwrap();
        assert!(header.contains("New"));
        assert!(!header.contains("Old"));
    }

    #[test]
    fn test_missing_input_dir_fails() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();

        let result = generator(&input.path().join("missing"), output.path()).run();
        assert!(result.is_err());
        assert!(!output.path().join("offsets.json").exists());
    }

    #[test]
    fn test_generated_files_display() {
        let files = GeneratedFiles {
            json: PathBuf::from("offsets.json"),
            header: PathBuf::from("offsets.hpp"),
            source: PathBuf::from("set_offsets.cpp"),
        };
        assert_eq!(files.to_string(), "offsets.json, offsets.hpp, set_offsets.cpp");
    }
}
