use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::error::ProcessingError;
use crate::processor::{Codec, Raster};

/// Codec backed by the `image` crate. Only JPEG and PNG content is accepted.
#[derive(Debug, Clone, Copy)]
pub struct ImageCodec {
    filter: FilterType,
}

impl ImageCodec {
    pub fn new() -> Self {
        Self {
            filter: FilterType::Triangle,
        }
    }
}

impl Default for ImageCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for ImageCodec {
    type Image = NativeImage;

    fn decode(&self, data: &[u8]) -> Result<NativeImage, ProcessingError> {
        let format = image::guess_format(data)
            .map_err(|e| ProcessingError::Decode(e.to_string()))?;
        if !matches!(format, ImageFormat::Jpeg | ImageFormat::Png) {
            return Err(ProcessingError::Decode(format!(
                "expected JPEG or PNG content, found {:?}",
                format
            )));
        }

        let image = image::load_from_memory_with_format(data, format)
            .map_err(|e| ProcessingError::Decode(e.to_string()))?;

        Ok(NativeImage {
            image,
            filter: self.filter,
        })
    }
}

pub struct NativeImage {
    image: DynamicImage,
    filter: FilterType,
}

impl Raster for NativeImage {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn resize(self, width: u32, height: u32) -> Result<Self, ProcessingError> {
        if width == 0 || height == 0 {
            return Err(ProcessingError::Resize(format!(
                "cannot resize to {}x{}",
                width, height
            )));
        }

        let image = self.image.resize_exact(width, height, self.filter);
        Ok(Self {
            image,
            filter: self.filter,
        })
    }

    fn encode_jpeg(&self, quality: u8) -> Result<Vec<u8>, ProcessingError> {
        let mut output = Vec::new();
        let mut cursor = Cursor::new(&mut output);

        // JPEG has no alpha channel
        let rgb = self.image.to_rgb8();

        let mut encoder = JpegEncoder::new_with_quality(&mut cursor, quality);
        encoder
            .encode(
                rgb.as_raw(),
                rgb.width(),
                rgb.height(),
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| ProcessingError::Encode(format!("Failed to encode JPEG: {}", e)))?;

        Ok(output)
    }

    fn encode_png(&self) -> Result<Vec<u8>, ProcessingError> {
        let mut output = Vec::new();
        let mut cursor = Cursor::new(&mut output);

        self.image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| ProcessingError::Encode(format!("Failed to encode PNG: {}", e)))?;

        Ok(output)
    }
}
