use std::path::PathBuf;

use crate::error::ProcessingError;
use crate::format::OutputFormat;

pub const DEFAULT_MAX_WIDTH: u32 = 1000;
pub const DEFAULT_MAX_SIZE_KB: u32 = 500;

/// Settings for one batch run. Built once and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Images wider than this are scaled down to exactly this width
    pub max_width: u32,
    /// Target upper bound for each output file, in kilobytes
    pub max_size_kb: u32,
    pub output_format: OutputFormat,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl ProcessOptions {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_max_size_kb(mut self, max_size_kb: u32) -> Self {
        self.max_size_kb = max_size_kb;
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn max_size_bytes(&self) -> u64 {
        u64::from(self.max_size_kb) * 1024
    }

    pub fn validate(&self) -> Result<(), ProcessingError> {
        if self.max_width == 0 {
            return Err(ProcessingError::InvalidOptions(
                "max width must be at least 1 pixel".into(),
            ));
        }
        if self.max_size_kb == 0 {
            return Err(ProcessingError::InvalidOptions(
                "max size must be at least 1 KB".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            max_size_kb: DEFAULT_MAX_SIZE_KB,
            output_format: OutputFormat::Jpg,
            input_dir: PathBuf::from("./input"),
            output_dir: PathBuf::from("./output"),
        }
    }
}
