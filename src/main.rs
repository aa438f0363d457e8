//! vcbuild CLI - configure and build a vcpkg CMake project
//!
//! Entry point for the vcbuild command-line application.

use clap::Parser;

use vcbuild::cli::output::{display_error, OutputConfig};
use vcbuild::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let output_config = OutputConfig::new(cli.quiet, cli.json, cli.verbose);
    output_config.apply_global();

    // RUST_LOG directives take precedence over the -v/-q default
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(output_config.log_level().into())
                .from_env_lossy(),
        )
        .init();

    if let Err(e) = cli.run() {
        display_error(&e);
        std::process::exit(1);
    }
}
