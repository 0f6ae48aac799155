use anyhow::{Context, Result};
use clap::Parser;

use image_normalizer::cli::Cli;
use image_normalizer::report::write_summary;
use image_normalizer_core::{process_directory, ImageCodec};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let options = cli.to_options();
    log::debug!("{:?}", options);

    let report = process_directory(&ImageCodec::new(), &options).with_context(|| {
        format!(
            "Failed to process {} into {}",
            options.input_dir.display(),
            options.output_dir.display()
        )
    })?;

    write_summary(&report, &mut std::io::stdout().lock())
        .context("Failed to write summary")?;

    Ok(())
}
