//! Downsizes JPEG/PNG images to a maximum width and re-encodes them under a
//! byte budget, one directory at a time.

pub mod config;
pub mod converter;
pub mod error;
pub mod format;
pub mod io;
pub mod processor;
pub mod report;
pub mod walker;

pub use config::ProcessOptions;
pub use converter::{convert_file, encode_within_budget, fit_width, Conversion};
pub use error::ProcessingError;
pub use format::{InputFormat, OutputFormat};
pub use processor::{Codec, ImageCodec, MockCodec, Raster};
pub use report::{BatchReport, FileResult};
pub use walker::process_directory;
