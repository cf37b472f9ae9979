mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use offgen::Generator;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { "offgen=debug" } else { "offgen=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = args.to_config();
    info!("offgen {} starting", env!("CARGO_PKG_VERSION"));

    let files = Generator::new(config)
        .run()
        .with_context(|| format!("Failed to generate offsets from {}", args.input.display()))?;

    println!("Generated files: {}", files);

    Ok(())
}
