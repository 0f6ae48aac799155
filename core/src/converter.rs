use std::path::Path;

use crate::config::ProcessOptions;
use crate::error::ProcessingError;
use crate::format::OutputFormat;
use crate::io::{read_file, write_file};
use crate::processor::{Codec, Raster};

/// JPEG quality of the first encode attempt.
pub const START_QUALITY: u8 = 80;
/// Quality dropped after each attempt.
pub const QUALITY_STEP: u8 = 5;
/// Searching stops once quality falls to this value. The last quality
/// actually tried is `QUALITY_FLOOR + QUALITY_STEP`.
pub const QUALITY_FLOOR: u8 = 10;

/// Summary of one successfully written file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub original_size: u64,
    pub original_dimensions: (u32, u32),
    pub dimensions: (u32, u32),
    pub written_size: u64,
    /// Quality of the written JPEG; `None` for PNG output
    pub quality: Option<u8>,
    pub attempts: usize,
    pub within_budget: bool,
}

/// Bytes chosen by [`encode_within_budget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub bytes: Vec<u8>,
    pub quality: Option<u8>,
    pub attempts: usize,
}

/// Target dimensions for an image that is wider than `max_width`, or `None`
/// when it already fits. Images are never enlarged.
///
/// Height is scaled by the same factor as width and rounded to nearest. A
/// result that would round to zero rows is kept at one.
pub fn fit_width(width: u32, height: u32, max_width: u32) -> Option<(u32, u32)> {
    if width <= max_width {
        return None;
    }

    let scale = f64::from(max_width) / f64::from(width);
    let new_height = (f64::from(height) * scale).round() as u32;
    Some((max_width, new_height.max(1)))
}

/// Encode `image` in `format`, lowering JPEG quality until the output is at
/// most `budget` bytes or the quality floor is reached.
///
/// The last encoding produced is returned even when it is still over budget.
/// PNG encoding ignores quality, so it is produced once.
pub fn encode_within_budget<R: Raster>(
    image: &R,
    format: OutputFormat,
    budget: u64,
) -> Result<Encoded, ProcessingError> {
    match format {
        OutputFormat::Png => {
            let bytes = image.encode_png()?;
            log::debug!("PNG encoding: {} bytes (budget {})", bytes.len(), budget);
            Ok(Encoded {
                bytes,
                quality: None,
                attempts: 1,
            })
        }
        OutputFormat::Jpg => {
            let mut quality = START_QUALITY;
            let mut attempts = 0;
            loop {
                let bytes = image.encode_jpeg(quality)?;
                attempts += 1;
                log::debug!(
                    "JPEG at quality {}: {} bytes (budget {})",
                    quality,
                    bytes.len(),
                    budget
                );

                let used = quality;
                quality = quality.saturating_sub(QUALITY_STEP);
                if bytes.len() as u64 <= budget || quality <= QUALITY_FLOOR {
                    return Ok(Encoded {
                        bytes,
                        quality: Some(used),
                        attempts,
                    });
                }
            }
        }
    }
}

/// Decode `input`, shrink it to `options.max_width` if wider, encode it under
/// the size budget and write the result to `output`.
pub fn convert_file<C: Codec>(
    codec: &C,
    input: &Path,
    output: &Path,
    options: &ProcessOptions,
) -> Result<Conversion, ProcessingError> {
    let data = read_file(input)?;
    let original_size = data.len() as u64;

    let mut image = codec.decode(&data)?;
    drop(data);

    let original_dimensions = image.dimensions();
    let (width, height) = original_dimensions;
    if let Some((new_width, new_height)) = fit_width(width, height, options.max_width) {
        log::debug!(
            "Resizing {}: {}x{} -> {}x{}",
            input.display(),
            width,
            height,
            new_width,
            new_height
        );
        image = image.resize(new_width, new_height)?;
    }

    let budget = options.max_size_bytes();
    let encoded = encode_within_budget(&image, options.output_format, budget)?;
    let written_size = encoded.bytes.len() as u64;
    if written_size > budget {
        log::debug!(
            "{} is still {} bytes after {} attempt(s), over the {} byte budget",
            input.display(),
            written_size,
            encoded.attempts,
            budget
        );
    }

    write_file(output, &encoded.bytes)?;

    Ok(Conversion {
        original_size,
        original_dimensions,
        dimensions: image.dimensions(),
        written_size,
        quality: encoded.quality,
        attempts: encoded.attempts,
        within_budget: written_size <= budget,
    })
}
