//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use offgen::GeneratorConfig;

#[derive(Parser, Debug)]
#[command(name = "offgen")]
#[command(version)]
#[command(about = "Generate offsets.json, offsets.hpp and set_offsets.cpp from offset headers")]
pub struct Args {
    /// Directory scanned recursively for offset headers
    #[arg(short, long, default_value = "A2X")]
    pub input: PathBuf,

    /// Directory the generated files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Header file extension
    #[arg(long, default_value = "hpp")]
    pub extension: String,

    /// Field type used in the stub header
    #[arg(long, default_value = "DWORD")]
    pub field_type: String,

    /// Lookup function called by the assignment source
    #[arg(long, default_value = "findOffsetByName")]
    pub lookup_fn: String,

    /// First argument passed to the lookup function
    #[arg(long, default_value = "j")]
    pub context: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_config(&self) -> GeneratorConfig {
        GeneratorConfig::builder()
            .input_dir(&self.input)
            .output_dir(&self.output_dir)
            .extension(&self.extension)
            .field_type(&self.field_type)
            .lookup_fn(&self.lookup_fn)
            .context(&self.context)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn test_args_are_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let args = Args::try_parse_from(["offgen"]).unwrap();
        let config = args.to_config();
        let default = GeneratorConfig::default();

        assert!(!args.verbose);
        assert_eq!(config.input_dir, default.input_dir);
        assert_eq!(config.json_path(), default.json_path());
        assert_eq!(config.field_type, default.field_type);
        assert_eq!(config.lookup_fn, default.lookup_fn);
        assert_eq!(config.context, default.context);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "offgen",
            "-i",
            "dumps",
            "-o",
            "generated",
            "--extension",
            "h",
            "--lookup-fn",
            "lookup",
            "--context",
            "ctx",
            "-v",
        ])
        .unwrap();
        let config = args.to_config();

        assert!(args.verbose);
        assert_eq!(config.input_dir, Path::new("dumps"));
        assert_eq!(config.extension, "h");
        assert_eq!(config.source_path(), Path::new("generated/set_offsets.cpp"));
        assert_eq!(config.lookup_fn, "lookup");
        assert_eq!(config.context, "ctx");
    }
}
