use std::path::PathBuf;

use clap::Parser;

use image_normalizer_core::config::{DEFAULT_MAX_SIZE_KB, DEFAULT_MAX_WIDTH};
use image_normalizer_core::{OutputFormat, ProcessOptions};

/// Downsize a directory of JPEG/PNG images and re-encode them under a size budget
#[derive(Debug, Parser)]
#[command(name = "image_normalizer", version, about)]
pub struct Cli {
    /// Directory to read images from (not searched recursively)
    #[arg(default_value = "./input")]
    pub input_dir: PathBuf,

    /// Directory to write results to (created if missing)
    #[arg(default_value = "./output")]
    pub output_dir: PathBuf,

    /// Images wider than this are scaled down to it
    #[arg(short = 'w', long, value_name = "PX", default_value_t = DEFAULT_MAX_WIDTH,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub max_width: u32,

    /// Target maximum size of each output file
    #[arg(short = 's', long, value_name = "KB", default_value_t = DEFAULT_MAX_SIZE_KB,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub max_size_kb: u32,

    /// Output format (jpg, png)
    #[arg(short = 'f', long = "format", value_name = "FORMAT", default_value_t = OutputFormat::Jpg)]
    pub output_format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_options(&self) -> ProcessOptions {
        ProcessOptions::new(&self.input_dir, &self.output_dir)
            .with_max_width(self.max_width)
            .with_max_size_kb(self.max_size_kb)
            .with_output_format(self.output_format)
    }
}
